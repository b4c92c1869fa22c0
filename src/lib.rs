//! # carelink-client
//!
//! Leptos + WASM client for the CareLink healthcare coordination
//! platform (clients, doctors, pharmacies, hospitals, admins).
//!
//! The client owns very little: it resolves the current session, routes
//! between the unauthenticated (login/register) and authenticated
//! (profile) flows, and reads/upserts the caller's profile row. All
//! business rules — role assignment, access control, referential
//! constraints, notification triggers for appointments, prescriptions,
//! and bed availability — live in the external backend's row-level
//! policies and database triggers.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
