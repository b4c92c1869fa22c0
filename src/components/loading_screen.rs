//! Full-screen loading placeholder shown while the session resolves.

use leptos::prelude::*;

/// Centered placeholder; rendered alone, with no navigation around it.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner"></div>
            <p>"Loading..."</p>
        </div>
    }
}
