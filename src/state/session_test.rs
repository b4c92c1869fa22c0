use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::*;
use crate::net::types::{Identity, Session};

fn session(email: &str) -> Session {
    Session {
        access_token: "tok".to_owned(),
        refresh_token: None,
        token_type: None,
        expires_in: None,
        user: Identity {
            id: "7f1aa2a0-0000-0000-0000-000000000001".parse().unwrap(),
            email: Some(email.to_owned()),
        },
    }
}

// =============================================================
// SessionState gate
// =============================================================

#[test]
fn initial_state_is_loading() {
    let state = SessionState::default();
    assert_eq!(state.gate(), Gate::Loading);
    assert!(state.session().is_none());
}

#[test]
fn resolving_with_no_session_signs_out() {
    let mut state = SessionState::default();
    state.resolve(None);
    assert_eq!(state.gate(), Gate::SignedOut);
}

#[test]
fn resolving_with_session_signs_in() {
    let mut state = SessionState::default();
    state.resolve(Some(session("a@b.c")));
    assert_eq!(state.gate(), Gate::SignedIn);
    assert_eq!(state.identity().unwrap().email.as_deref(), Some("a@b.c"));
}

#[test]
fn gate_follows_most_recent_change_event() {
    let mut state = SessionState::default();
    state.resolve(None);

    let events = [
        Some(session("a@b.c")),
        None,
        Some(session("x@y.z")),
        Some(session("a@b.c")),
        None,
    ];
    for event in events {
        let expected = if event.is_some() { Gate::SignedIn } else { Gate::SignedOut };
        state.apply_change(event);
        assert_eq!(state.gate(), expected);
    }
}

#[test]
fn sign_in_after_resolution_skips_loading() {
    let mut state = SessionState::default();
    state.resolve(None);
    assert_eq!(state.gate(), Gate::SignedOut);

    state.apply_change(Some(session("a@b.c")));
    assert_eq!(state.gate(), Gate::SignedIn);
}

#[test]
fn change_before_resolution_does_not_leave_loading() {
    // A listener event may race the startup fetch; it replaces the value
    // but only the fetch completes the loading phase.
    let mut state = SessionState::default();
    state.apply_change(Some(session("a@b.c")));
    assert_eq!(state.gate(), Gate::Loading);

    state.resolve(Some(session("a@b.c")));
    assert_eq!(state.gate(), Gate::SignedIn);
}

#[test]
fn resolution_is_last_writer_when_it_lands_after_a_change() {
    let mut state = SessionState::default();
    state.apply_change(Some(session("a@b.c")));
    state.resolve(None);
    assert_eq!(state.gate(), Gate::SignedOut);
}

// =============================================================
// SessionHub
// =============================================================

#[test]
fn announce_reaches_subscribed_listener() {
    let hub = SessionHub::new();
    let seen = Arc::new(AtomicUsize::new(0));
    let seen_by_listener = Arc::clone(&seen);

    let listener = hub.subscribe(move |next| {
        if next.is_some() {
            seen_by_listener.fetch_add(1, Ordering::SeqCst);
        }
    });

    hub.announce(Some(session("a@b.c")));
    hub.announce(None);
    hub.announce(Some(session("a@b.c")));

    assert_eq!(seen.load(Ordering::SeqCst), 2);
    drop(listener);
}

#[test]
fn announce_stops_after_unsubscribe() {
    let hub = SessionHub::new();
    let seen = Arc::new(AtomicUsize::new(0));
    let seen_by_listener = Arc::clone(&seen);

    let listener = hub.subscribe(move |_| {
        seen_by_listener.fetch_add(1, Ordering::SeqCst);
    });

    hub.announce(None);
    listener.unsubscribe();
    hub.announce(None);

    assert_eq!(seen.load(Ordering::SeqCst), 1);
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn each_listener_sees_every_announcement() {
    let hub = SessionHub::new();
    let a = Arc::new(AtomicUsize::new(0));
    let b = Arc::new(AtomicUsize::new(0));

    let a_inner = Arc::clone(&a);
    let b_inner = Arc::clone(&b);
    let la = hub.subscribe(move |_| {
        a_inner.fetch_add(1, Ordering::SeqCst);
    });
    let lb = hub.subscribe(move |_| {
        b_inner.fetch_add(1, Ordering::SeqCst);
    });

    hub.announce(None);
    hub.announce(Some(session("a@b.c")));

    assert_eq!(a.load(Ordering::SeqCst), 2);
    assert_eq!(b.load(Ordering::SeqCst), 2);
    drop((la, lb));
}

#[test]
fn hub_driven_state_tracks_latest_announcement() {
    // Resolver wiring: a listener forwards announcements into the state.
    let hub = SessionHub::new();
    let state = Arc::new(Mutex::new(SessionState::default()));
    let state_in_listener = Arc::clone(&state);
    let _listener = hub.subscribe(move |next| {
        state_in_listener.lock().unwrap().apply_change(next);
    });

    state.lock().unwrap().resolve(None);
    hub.announce(Some(session("a@b.c")));
    assert_eq!(state.lock().unwrap().gate(), Gate::SignedIn);

    hub.announce(None);
    assert_eq!(state.lock().unwrap().gate(), Gate::SignedOut);
}

// =============================================================
// SessionListener teardown
// =============================================================

#[test]
fn unsubscribe_is_idempotent() {
    let hub = SessionHub::new();
    let listener = hub.subscribe(|_| {});

    listener.unsubscribe();
    listener.unsubscribe();
    listener.unsubscribe();

    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn detached_listener_unsubscribe_is_a_no_op() {
    let listener = SessionListener::detached();
    listener.unsubscribe();
    listener.unsubscribe();
}

#[test]
fn unsubscribe_after_hub_dropped_does_not_panic() {
    let hub = SessionHub::new();
    let listener = hub.subscribe(|_| {});
    drop(hub);
    listener.unsubscribe();
}

#[test]
fn listener_may_subscribe_from_its_own_callback() {
    let hub = SessionHub::new();
    let hub_in_listener = hub.clone();
    let nested_rounds = Arc::new(AtomicUsize::new(0));
    let rounds_in_listener = Arc::clone(&nested_rounds);
    let outer = hub.subscribe(move |_| {
        let inner = hub_in_listener.subscribe(|_| {});
        inner.unsubscribe();
        rounds_in_listener.fetch_add(1, Ordering::SeqCst);
    });

    hub.announce(None);
    hub.announce(Some(session("nested@example.com")));

    assert_eq!(nested_rounds.load(Ordering::SeqCst), 2);
    outer.unsubscribe();
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn listener_unsubscribed_mid_dispatch_is_not_called() {
    let hub = SessionHub::new();

    let slot: Arc<Mutex<Option<SessionListener>>> = Arc::new(Mutex::new(None));
    let slot_in_first = Arc::clone(&slot);
    let _first = hub.subscribe(move |_| {
        if let Some(second) = slot_in_first.lock().unwrap().take() {
            second.unsubscribe();
        }
    });

    let second_calls = Arc::new(AtomicUsize::new(0));
    let calls = Arc::clone(&second_calls);
    let second = hub.subscribe(move |_| {
        calls.fetch_add(1, Ordering::SeqCst);
    });
    *slot.lock().unwrap() = Some(second);

    hub.announce(None);
    hub.announce(None);

    assert_eq!(second_calls.load(Ordering::SeqCst), 0);
    assert_eq!(hub.listener_count(), 1);
}

#[test]
fn dropping_listener_detaches_it() {
    let hub = SessionHub::new();
    {
        let _listener = hub.subscribe(|_| {});
        assert_eq!(hub.listener_count(), 1);
    }
    assert_eq!(hub.listener_count(), 0);
}
