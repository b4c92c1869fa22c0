#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

use crate::net::types::{Identity, Session};

/// Session signal driving the top-level view router.
///
/// Starts unresolved (the initial fetch is in flight); the first
/// resolution completes exactly once and every later change event simply
/// overwrites the session, last writer wins.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    session: Option<Session>,
    resolved: bool,
}

impl SessionState {
    /// Record the result of the one-shot startup fetch and leave the
    /// loading phase. A failed fetch resolves with `None`: the app fails
    /// open to the unauthenticated flow.
    pub fn resolve(&mut self, session: Option<Session>) {
        self.session = session;
        self.resolved = true;
    }

    /// Apply a session-change event. The loading flag is untouched; a
    /// change landing while the startup fetch is still in flight only
    /// replaces the value.
    pub fn apply_change(&mut self, session: Option<Session>) {
        self.session = session;
    }

    /// Which view group the router shows for this state.
    pub fn gate(&self) -> Gate {
        if !self.resolved {
            Gate::Loading
        } else if self.session.is_some() {
            Gate::SignedIn
        } else {
            Gate::SignedOut
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.as_ref().map(|s| &s.user)
    }
}

/// The three view groups the router can render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gate {
    #[default]
    Loading,
    SignedOut,
    SignedIn,
}

type Listener = Box<dyn Fn(Option<Session>) + Send + Sync>;

struct Entry {
    alive: AtomicBool,
    call: Listener,
}

#[derive(Default)]
struct HubInner {
    next_id: u64,
    listeners: Vec<(u64, Arc<Entry>)>,
}

/// In-process broadcast of session changes.
///
/// The backend's REST surface has no push channel, so the only session
/// changes this client can observe are the ones it causes itself
/// (sign-in, sign-up with an active session, sign-out). The net layer
/// announces those here and the root component forwards them into the
/// session signal.
#[derive(Clone, Default)]
pub struct SessionHub {
    inner: Arc<Mutex<HubInner>>,
}

impl SessionHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for future session changes.
    ///
    /// The returned handle detaches on drop.
    pub fn subscribe(
        &self,
        listener: impl Fn(Option<Session>) + Send + Sync + 'static,
    ) -> SessionListener {
        let entry = Arc::new(Entry { alive: AtomicBool::new(true), call: Box::new(listener) });
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Arc::clone(&entry)));
        SessionListener {
            hub: Arc::downgrade(&self.inner),
            registration: Mutex::new(Some((id, entry))),
        }
    }

    /// Deliver a session change to every live listener.
    ///
    /// Dispatch runs on a snapshot taken outside the lock, so a listener
    /// may subscribe or unsubscribe from inside its own callback. One
    /// unsubscribed mid-dispatch is skipped for the rest of that round.
    pub fn announce(&self, next: Option<Session>) {
        let snapshot: Vec<Arc<Entry>> = {
            let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.listeners.iter().map(|(_, entry)| Arc::clone(entry)).collect()
        };
        for entry in snapshot {
            if entry.alive.load(Ordering::SeqCst) {
                (entry.call)(next.clone());
            }
        }
    }

    #[cfg(test)]
    fn listener_count(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).listeners.len()
    }
}

/// Scoped subscription to a [`SessionHub`].
///
/// Single acquire, single release: `unsubscribe` is idempotent, runs on
/// drop, and is a no-op for [`SessionListener::detached`] handles or
/// after the hub itself is gone.
pub struct SessionListener {
    hub: Weak<Mutex<HubInner>>,
    registration: Mutex<Option<(u64, Arc<Entry>)>>,
}

impl SessionListener {
    /// Handle for a registration that never happened.
    pub fn detached() -> Self {
        Self { hub: Weak::new(), registration: Mutex::new(None) }
    }

    /// Remove the listener from the hub. Safe to call any number of
    /// times, on detached handles, and after the hub has been dropped.
    pub fn unsubscribe(&self) {
        let taken = self
            .registration
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        let Some((id, entry)) = taken else { return };
        entry.alive.store(false, Ordering::SeqCst);
        if let Some(hub) = self.hub.upgrade() {
            let mut inner = hub.lock().unwrap_or_else(PoisonError::into_inner);
            inner.listeners.retain(|(lid, _)| *lid != id);
        }
    }
}

impl Drop for SessionListener {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
