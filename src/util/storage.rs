//! Session persistence in `localStorage`.
//!
//! The identity service issues the session; this module only caches it
//! so a reload restores the signed-in state without a fresh login. Each
//! cache entry carries the absolute expiry of its access token, computed
//! at save time, so a stale entry is never handed back as a live
//! session. Requires a browser environment; native builds see no stored
//! session.

use serde::{Deserialize, Serialize};

use crate::net::types::Session;
use crate::util::clock;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "carelink_session";

/// A cached session together with the absolute expiry of its token.
///
/// The expiry is derived from the token response's `expires_in` at save
/// time. An entry with no known lifetime never expires locally and is
/// left to the backend to reject.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub session: Session,
    #[serde(default)]
    pub expires_at: Option<u64>,
}

impl StoredSession {
    /// Wrap a freshly issued session for caching.
    pub fn stash(session: &Session, saved_at: u64) -> Self {
        Self {
            session: session.clone(),
            expires_at: session.expires_in.map(|ttl| saved_at.saturating_add(ttl)),
        }
    }

    /// Whether the cached token is still usable at `now`.
    pub fn is_fresh(&self, now: u64) -> bool {
        self.expires_at.is_none_or(|expiry| now < expiry)
    }

    /// The cached session if still fresh. An expired entry reads as no
    /// session, so a restore fails open to the unauthenticated flow.
    pub fn into_fresh(self, now: u64) -> Option<Session> {
        if self.is_fresh(now) { Some(self.session) } else { None }
    }
}

/// Load the cached entry, expired or not. Corrupt or missing data reads
/// as `None`. Callers decide what to do with a stale token, usually a
/// refresh attempt.
pub fn load_stored() -> Option<StoredSession> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(STORAGE_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Cache a freshly issued session. Storage failures are ignored; the
/// in-memory session still works for the rest of this visit.
pub fn save_session(session: &Session) {
    let stored = StoredSession::stash(session, clock::now_unix());
    #[cfg(feature = "csr")]
    {
        if let Ok(raw) = serde_json::to_string(&stored) {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(STORAGE_KEY, &raw);
                }
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = stored;
    }
}

/// Drop the cached session on sign-out.
pub fn clear_session() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;
