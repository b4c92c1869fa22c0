//! Browser render smoke test: a fresh start with no cached session must
//! land on the login screen with both a sign-in control and a way to
//! reach registration.
//!
//! Run with `wasm-pack test --headless --firefox -- --features csr`.

#![cfg(all(target_arch = "wasm32", feature = "csr"))]

use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

fn body_text() -> String {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .and_then(|b| b.text_content())
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn fresh_start_shows_login_and_register_controls() {
    leptos::mount::mount_to_body(carelink_client::app::App);

    // Session resolution and the redirect to the login route each take a
    // turn of the reactive system.
    for _ in 0..4 {
        leptos::task::tick().await;
    }

    let text = body_text();
    assert!(text.contains("Sign In"), "missing sign-in control in: {text}");
    assert!(text.contains("Go to Register"), "missing register link in: {text}");
}
