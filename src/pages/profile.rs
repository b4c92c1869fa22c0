//! Profile page: read and upsert the caller's profile row.
//!
//! Three data states are tolerated: still loading, no row yet (a fresh
//! identity whose trigger-created row hasn't landed, or a backend that
//! skipped it), and row present. The no-row state gets a reduced
//! initial-setup form instead of an error.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::net::api::Backend;
use crate::net::types::Role;
use crate::state::profile::{ProfileForm, ProfilePhase, ProfileSlot};
use crate::state::session::{Gate, SessionState};
use crate::util::alert::alert;
use crate::util::clock;

/// Profile screen for the authenticated identity.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let backend = expect_context::<Backend>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        if session.get().gate() == Gate::SignedOut {
            navigate("/login", NavigateOptions::default());
        }
    });

    let slot = RwSignal::new(ProfileSlot::default());
    let username = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let website = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    // Profile row resource; refetches if the identity changes.
    let fetch_backend = backend.clone();
    let row = LocalResource::new(move || {
        let backend = fetch_backend.clone();
        let current = session.get().session().cloned();
        async move {
            match current {
                Some(s) => match backend.fetch_profile(&s).await {
                    Ok(profile) => profile,
                    Err(e) => {
                        alert(&format!("Error fetching profile: {e}"));
                        None
                    }
                },
                None => None,
            }
        }
    });

    // Fold fetch results into the slot and seed the form fields.
    Effect::new(move || {
        if let Some(profile) = row.get() {
            if let Some(p) = &profile {
                let form = ProfileForm::from_profile(p);
                username.set(form.username);
                full_name.set(form.full_name);
                website.set(form.website);
            }
            slot.update(|s| s.resolve(profile));
        }
    });

    let save_backend = backend.clone();
    let on_save = Callback::new(move |()| {
        if pending.get_untracked() {
            return;
        }
        let form = ProfileForm {
            username: username.get_untracked(),
            full_name: full_name.get_untracked(),
            website: website.get_untracked(),
        };
        if let Err(e) = form.validate() {
            alert(&e.to_string());
            return;
        }
        let Some(current) = session.get_untracked().session().cloned() else {
            alert("No user session found.");
            return;
        };

        pending.set(true);
        let backend = save_backend.clone();
        leptos::task::spawn_local(async move {
            let update = form.into_update(current.user.id, clock::now_iso());
            let result = backend.upsert_profile(&current, &update).await;
            pending.set(false);
            match result {
                Ok(()) => {
                    slot.update(|s| s.merge_update(&update));
                    alert("Profile updated successfully.");
                }
                Err(e) => alert(&format!("Error updating profile: {e}")),
            }
        });
    });

    let out_backend = backend.clone();
    let on_sign_out = Callback::new(move |()| {
        let backend = out_backend.clone();
        let current = session.get_untracked().session().cloned();
        leptos::task::spawn_local(async move {
            if let Err(e) = backend.sign_out(current.as_ref()).await {
                alert(&format!("Sign out failed: {e}"));
            }
            // Navigation back to login happens via the session signal.
        });
    });

    let email_text =
        move || session.get().identity().and_then(|i| i.email.clone()).unwrap_or_default();
    let identity_text = move || {
        session.get().identity().map(|i| i.id.to_string()).unwrap_or_default()
    };
    let role = move || slot.get().profile().map(|p| p.role);
    let role_label = move || role().map_or("Not set", Role::as_str);
    let role_blurb = move || match role() {
        Some(Role::Client) => "Book appointments, track prescriptions, and find beds.",
        Some(Role::Doctor) => "Manage appointments and issue prescriptions.",
        Some(Role::Pharmacy) => "Receive and fulfil prescriptions.",
        Some(Role::Hospital) => "Publish bed availability and manage admissions.",
        Some(Role::Admin) => "Verify practitioner and facility accounts.",
        None => "",
    };

    view! {
        <div class="profile-page">
            {move || match slot.get().phase() {
                ProfilePhase::Loading => {
                    view! { <p class="profile-page__loading">"Loading Profile..."</p> }.into_any()
                }
                ProfilePhase::Missing => {
                    view! {
                        <div class="profile-page__setup">
                            <h1>"Set Up Your Profile"</h1>
                            <p>"Your profile is not fully set up yet."</p>
                            <p class="profile-page__meta">"User ID: " {identity_text}</p>
                            <p class="profile-page__meta">"Email: " {email_text}</p>
                            <FormField label="Username" value=username placeholder="min 3 characters"/>
                            <FormField label="Full Name" value=full_name/>
                            <button
                                class="btn btn--primary"
                                on:click=move |_| on_save.run(())
                                disabled=move || pending.get()
                            >
                                {move || if pending.get() { "Saving..." } else { "Save Initial Profile" }}
                            </button>
                            <button class="btn" on:click=move |_| on_sign_out.run(())>
                                "Logout"
                            </button>
                        </div>
                    }
                    .into_any()
                }
                ProfilePhase::Present => {
                    view! {
                        <div class="profile-page__edit">
                            <h1>"My Profile"</h1>
                            <p class="profile-page__meta">"Email: " {email_text}</p>
                            <p class="profile-page__meta">"Role: " {role_label}</p>
                            <p class="profile-page__blurb">{role_blurb}</p>
                            <FormField label="Username" value=username/>
                            <FormField label="Full Name" value=full_name/>
                            <FormField label="Website (Optional)" value=website placeholder="https://"/>
                            <button
                                class="btn btn--primary"
                                on:click=move |_| on_save.run(())
                                disabled=move || pending.get()
                            >
                                {move || if pending.get() { "Saving..." } else { "Update Profile" }}
                            </button>
                            <button class="btn btn--danger" on:click=move |_| on_sign_out.run(())>
                                "Logout"
                            </button>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
