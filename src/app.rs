//! Root application component: session resolution and routing.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::loading_screen::LoadingScreen;
use crate::net::api::Backend;
use crate::pages::{login::LoginPage, profile::ProfilePage, register::RegisterPage};
use crate::state::session::{Gate, SessionState};

/// Root application component.
///
/// Owns the session signal: one startup fetch resolves it, the backend's
/// session hub keeps it current, and the router renders exactly one view
/// group per [`Gate`] state. The hub listener is released exactly once
/// when the component is torn down.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let backend = Backend::from_env();
    provide_context(session);
    provide_context(backend.clone());

    // One-shot startup fetch. There is no retry: any failure resolves as
    // no session and the app starts in the unauthenticated flow.
    #[cfg(feature = "csr")]
    {
        let backend = backend.clone();
        leptos::task::spawn_local(async move {
            let current = backend.current_session().await;
            session.update(|s| s.resolve(current));
        });
    }
    #[cfg(not(feature = "csr"))]
    session.update(|s| s.resolve(None));

    // Forward session-change events into the signal. Later events simply
    // overwrite earlier state, last writer wins.
    let listener = backend.hub().subscribe(move |next| {
        session.update(|s| s.apply_change(next));
    });
    on_cleanup(move || listener.unsubscribe());

    view! {
        <Stylesheet id="leptos" href="/pkg/carelink.css"/>
        <Title text="CareLink"/>

        <Show
            when=move || session.get().gate() != Gate::Loading
            fallback=|| view! { <LoadingScreen/> }
        >
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("") view=ProfilePage/>
                </Routes>
            </Router>
        </Show>
    }
}
