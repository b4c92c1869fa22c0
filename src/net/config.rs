//! Backend endpoint configuration.
//!
//! The backend base URL and publishable API key are baked in at compile
//! time via `CARELINK_BACKEND_URL` / `CARELINK_ANON_KEY`. The key is the
//! anonymous (publishable) key; per-user access control is enforced by
//! the backend's row-level policies, not by this client.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const PLACEHOLDER_URL: &str = "https://project.example.backend";
const PLACEHOLDER_KEY: &str = "anon-key-not-configured";

/// Base URL and anonymous key for the identity-and-data backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let url = url.into();
        Self { url: url.trim_end_matches('/').to_owned(), anon_key: anon_key.into() }
    }

    /// Configuration from compile-time environment, with placeholders
    /// when unset so the app still renders (every call will fail with a
    /// backend error instead of panicking).
    pub fn from_env() -> Self {
        let url = option_env!("CARELINK_BACKEND_URL").unwrap_or(PLACEHOLDER_URL);
        let key = option_env!("CARELINK_ANON_KEY").unwrap_or(PLACEHOLDER_KEY);
        Self::new(url, key)
    }

    /// True when running against the unconfigured placeholders.
    pub fn is_placeholder(&self) -> bool {
        self.url == PLACEHOLDER_URL || self.anon_key == PLACEHOLDER_KEY
    }

    /// Password-grant sign-in endpoint.
    pub fn token_url(&self) -> String {
        format!("{}/auth/v1/token?grant_type=password", self.url)
    }

    /// Refresh-grant endpoint for renewing an expired session.
    pub fn refresh_url(&self) -> String {
        format!("{}/auth/v1/token?grant_type=refresh_token", self.url)
    }

    /// Account registration endpoint.
    pub fn signup_url(&self) -> String {
        format!("{}/auth/v1/signup", self.url)
    }

    /// Session revocation endpoint.
    pub fn logout_url(&self) -> String {
        format!("{}/auth/v1/logout", self.url)
    }

    /// Profile row lookup for one identity id.
    pub fn profile_url(&self, id: uuid::Uuid) -> String {
        format!(
            "{}/rest/v1/profiles?id=eq.{id}&select=id,username,full_name,website,role,updated_at",
            self.url
        )
    }

    /// Profile upsert endpoint.
    pub fn profiles_url(&self) -> String {
        format!("{}/rest/v1/profiles", self.url)
    }
}
