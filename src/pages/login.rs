//! Login page with email/password sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::net::api::Backend;
use crate::state::session::{Gate, SessionState};
use crate::util::alert::alert;

/// Login page. Failures are alerted verbatim; success is not announced
/// here at all, the session signal flips the router to the
/// authenticated flow.
#[component]
pub fn LoginPage() -> impl IntoView {
    let backend = expect_context::<Backend>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Already signed in: leave for the authenticated flow.
    Effect::new(move || {
        if session.get().gate() == Gate::SignedIn {
            navigate("/", NavigateOptions::default());
        }
    });

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let on_submit = move |_| {
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        let backend = backend.clone();
        leptos::task::spawn_local(async move {
            let result = backend
                .sign_in(&email.get_untracked(), &password.get_untracked())
                .await;
            pending.set(false);
            match result {
                Ok(payload) if payload.session.is_some() => {
                    alert("Login successful. Welcome back!");
                }
                Ok(_) => alert("Please confirm your email address, then sign in."),
                Err(e) => alert(&format!("Login failed: {e}")),
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"CareLink"</h1>
            <p>"Sign in to your account"</p>
            <FormField label="Email" value=email input_type="email" placeholder="you@example.org"/>
            <FormField label="Password" value=password input_type="password"/>
            <button class="btn btn--primary" on:click=on_submit disabled=move || pending.get()>
                {move || if pending.get() { "Signing in..." } else { "Sign In" }}
            </button>
            <a class="auth-page__switch" href="/register">
                "Go to Register"
            </a>
        </div>
    }
}
