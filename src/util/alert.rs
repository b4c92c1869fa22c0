//! Blocking user-facing alerts.
//!
//! Every local validation failure and every remote error surfaces here,
//! verbatim, and is terminal to the current action. Outside the browser
//! the message goes to the log instead.

/// Show a blocking alert with the given message.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
            return;
        }
        leptos::logging::warn!("alert (no window): {message}");
    }
    #[cfg(not(feature = "csr"))]
    {
        leptos::logging::warn!("alert: {message}");
    }
}
