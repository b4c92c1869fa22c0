//! Wall-clock timestamps for `updated_at` fields and token expiry.

/// Current time as seconds since the Unix epoch.
pub fn now_unix() -> u64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            (js_sys::Date::now() / 1000.0) as u64
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs())
    }
}

/// Current time as an ISO-8601 string, or `None` outside the browser.
pub fn now_iso() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        Some(String::from(js_sys::Date::new_0().to_iso_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
