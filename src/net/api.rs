//! REST helpers for the identity-and-data backend.
//!
//! Browser build (`csr`): real HTTP calls via `gloo-net`.
//! Native build: stubs returning `None` / [`ApiError::Unavailable`]
//! since the backend is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call is a single attempt with no retry or timeout; callers get
//! `Result`/`Option` outputs and surface failures to the user verbatim.
//! Access control (who may read or write which profile row) lives in
//! the backend's row-level policies, not here.

#![allow(clippy::unused_async)]

use super::config::BackendConfig;
use super::error::ApiError;
use super::types::{AuthPayload, Profile, ProfileUpdate, Session};
use crate::state::session::SessionHub;
use crate::util::storage;

/// Cloneable handle to the backend, provided to components via context.
///
/// Sign-in/sign-up/sign-out announce the resulting session change on the
/// embedded [`SessionHub`], which is the only way the rest of the app
/// learns about them.
#[derive(Clone)]
pub struct Backend {
    config: BackendConfig,
    hub: SessionHub,
}

impl Backend {
    pub fn new(config: BackendConfig) -> Self {
        Self { config, hub: SessionHub::new() }
    }

    /// Backend handle from compile-time configuration.
    pub fn from_env() -> Self {
        let config = BackendConfig::from_env();
        if config.is_placeholder() {
            leptos::logging::warn!(
                "backend not configured; set CARELINK_BACKEND_URL and CARELINK_ANON_KEY at build time"
            );
        }
        Self::new(config)
    }

    pub fn hub(&self) -> &SessionHub {
        &self.hub
    }

    /// Restore the cached session, if one survives from a prior visit.
    ///
    /// An expired cache entry is exchanged for a fresh session via the
    /// refresh grant; if that fails the entry is dropped. Any failure
    /// reads as no session.
    pub async fn current_session(&self) -> Option<Session> {
        #[cfg(feature = "csr")]
        {
            let stored = storage::load_stored()?;
            if stored.is_fresh(crate::util::clock::now_unix()) {
                return Some(stored.session);
            }
            let refreshed = match stored.session.refresh_token {
                Some(token) => self.refresh_session(&token).await,
                None => None,
            };
            if refreshed.is_none() {
                storage::clear_session();
            }
            refreshed
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    /// Exchange a refresh token for a new session and cache it. Failures
    /// read as no session; the caller fails open to the login screen.
    #[cfg(feature = "csr")]
    async fn refresh_session(&self, refresh_token: &str) -> Option<Session> {
        let body = serde_json::json!({ "refresh_token": refresh_token });
        let value = self.post_auth(&self.config.refresh_url(), &body).await.ok()?;
        let payload = AuthPayload::from_response(value).ok()?;
        let session = payload.session?;
        storage::save_session(&session);
        Some(session)
    }

    /// Password sign-in. On success the session is cached and announced.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthPayload, ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = serde_json::json!({ "email": email, "password": password });
            let value = self.post_auth(&self.config.token_url(), &body).await?;
            let payload =
                AuthPayload::from_response(value).map_err(|e| ApiError::Decode(e.to_string()))?;
            if let Some(session) = &payload.session {
                self.adopt_session(session);
            }
            Ok(payload)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            Err(ApiError::Unavailable)
        }
    }

    /// Account registration. A payload without a session means the
    /// backend wants email confirmation first; only an active session is
    /// cached and announced.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<AuthPayload, ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = serde_json::json!({ "email": email, "password": password });
            let value = self.post_auth(&self.config.signup_url(), &body).await?;
            let payload =
                AuthPayload::from_response(value).map_err(|e| ApiError::Decode(e.to_string()))?;
            if let Some(session) = &payload.session {
                self.adopt_session(session);
            }
            Ok(payload)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            Err(ApiError::Unavailable)
        }
    }

    /// Revoke the session remotely (best effort), then drop it locally
    /// and announce the sign-out. The local drop happens even when the
    /// remote call fails, so the app never stays signed in against the
    /// user's wishes.
    pub async fn sign_out(&self, session: Option<&Session>) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let remote = match session {
                Some(session) => {
                    let result = gloo_net::http::Request::post(&self.config.logout_url())
                        .header("apikey", &self.config.anon_key)
                        .header("Authorization", &format!("Bearer {}", session.access_token))
                        .send()
                        .await;
                    match result {
                        Ok(resp) if resp.ok() => Ok(()),
                        Ok(resp) => {
                            let status = resp.status();
                            let body = resp.text().await.unwrap_or_default();
                            Err(ApiError::Backend(super::types::ErrorBody::extract(&body, status)))
                        }
                        Err(e) => Err(ApiError::Network(e.to_string())),
                    }
                }
                None => Ok(()),
            };
            storage::clear_session();
            self.hub.announce(None);
            remote
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = session;
            storage::clear_session();
            self.hub.announce(None);
            Ok(())
        }
    }

    /// Read the caller's profile row. `Ok(None)` is the legitimate
    /// no-row-yet state for a freshly created identity, not an error.
    pub async fn fetch_profile(&self, session: &Session) -> Result<Option<Profile>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.config.profile_url(session.user.id);
            let resp = gloo_net::http::Request::get(&url)
                .header("apikey", &self.config.anon_key)
                .header("Authorization", &format!("Bearer {}", session.access_token))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(ApiError::Backend(super::types::ErrorBody::extract(&body, status)));
            }
            let rows: Vec<Profile> =
                resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(rows.into_iter().next())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = session;
            Err(ApiError::Unavailable)
        }
    }

    /// Upsert the caller's profile row. The backend merges on the id
    /// key, so this covers both initial setup and later edits.
    pub async fn upsert_profile(
        &self,
        session: &Session,
        update: &ProfileUpdate,
    ) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.config.profiles_url())
                .header("apikey", &self.config.anon_key)
                .header("Authorization", &format!("Bearer {}", session.access_token))
                .header("Prefer", "resolution=merge-duplicates,return=minimal")
                .json(update)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(ApiError::Backend(super::types::ErrorBody::extract(&body, status)));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (session, update);
            Err(ApiError::Unavailable)
        }
    }

    /// Cache and announce a freshly issued session.
    #[cfg(feature = "csr")]
    fn adopt_session(&self, session: &Session) {
        storage::save_session(session);
        self.hub.announce(Some(session.clone()));
    }

    /// POST a JSON body to an auth endpoint and decode the response,
    /// mapping error envelopes to [`ApiError::Backend`].
    #[cfg(feature = "csr")]
    async fn post_auth(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let resp = gloo_net::http::Request::post(url)
            .header("apikey", &self.config.anon_key)
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !(200..300).contains(&status) {
            return Err(ApiError::Backend(super::types::ErrorBody::extract(&text, status)));
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
