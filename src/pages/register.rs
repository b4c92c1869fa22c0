//! Registration page with local validation before the remote call.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::net::api::Backend;
use crate::state::register::RegisterForm;
use crate::state::session::{Gate, SessionState};
use crate::util::alert::alert;

/// Registration page. Validation failures never reach the backend; a
/// successful sign-up alerts the confirm-your-email notice and returns
/// to the login screen, matching the backend's confirmation flow.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let backend = expect_context::<Backend>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if session.get().gate() == Gate::SignedIn {
            navigate("/", NavigateOptions::default());
        }
    });

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit_navigate = use_navigate();
    let on_submit = move |_| {
        if pending.get_untracked() {
            return;
        }
        let form = RegisterForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm: confirm.get_untracked(),
        };
        if let Err(e) = form.validate() {
            alert(&e.to_string());
            return;
        }

        pending.set(true);
        let backend = backend.clone();
        let navigate = submit_navigate.clone();
        leptos::task::spawn_local(async move {
            let result = backend.sign_up(&form.email, &form.password).await;
            pending.set(false);
            match result {
                Ok(_) => {
                    alert(
                        "Registration successful. Please check your email to confirm \
                         your account, then sign in.",
                    );
                    navigate("/login", NavigateOptions::default());
                }
                Err(e) => alert(&format!("Registration failed: {e}")),
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Create Account"</h1>
            <FormField label="Email" value=email input_type="email" placeholder="you@example.org"/>
            <FormField label="Password" value=password input_type="password"/>
            <FormField label="Confirm Password" value=confirm input_type="password"/>
            <button class="btn btn--primary" on:click=on_submit disabled=move || pending.get()>
                {move || if pending.get() { "Registering..." } else { "Register" }}
            </button>
            <a class="auth-page__switch" href="/login">
                "Back to Login"
            </a>
        </div>
    }
}
