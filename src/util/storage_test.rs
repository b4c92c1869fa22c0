use super::*;
use crate::net::types::Identity;
use crate::state::session::{Gate, SessionState};

fn session(expires_in: Option<u64>) -> Session {
    Session {
        access_token: "tok".to_owned(),
        refresh_token: Some("refresh-tok".to_owned()),
        token_type: Some("bearer".to_owned()),
        expires_in,
        user: Identity {
            id: "7f1aa2a0-0000-0000-0000-000000000001".parse().unwrap(),
            email: Some("pat@example.com".to_owned()),
        },
    }
}

// =============================================================
// StoredSession expiry
// =============================================================

#[test]
fn stash_computes_absolute_expiry_from_token_lifetime() {
    let stored = StoredSession::stash(&session(Some(3600)), 1_000);
    assert_eq!(stored.expires_at, Some(4_600));
}

#[test]
fn stash_without_token_lifetime_never_expires_locally() {
    let stored = StoredSession::stash(&session(None), 1_000);
    assert_eq!(stored.expires_at, None);
    assert!(stored.is_fresh(u64::MAX));
}

#[test]
fn fresh_entry_restores_the_session() {
    let stored = StoredSession::stash(&session(Some(3600)), 1_000);
    let restored = stored.into_fresh(2_000);
    assert_eq!(restored, Some(session(Some(3600))));
}

#[test]
fn entry_expires_at_the_boundary() {
    let stored = StoredSession::stash(&session(Some(3600)), 1_000);
    assert!(stored.is_fresh(4_599));
    assert!(!stored.is_fresh(4_600));
}

#[test]
fn expired_entry_resolves_the_gate_to_signed_out() {
    let stored = StoredSession::stash(&session(Some(3600)), 1_000);

    let mut state = SessionState::default();
    state.resolve(stored.into_fresh(10_000));

    assert_eq!(state.gate(), Gate::SignedOut);
    assert!(state.session().is_none());
}

#[test]
fn legacy_entry_without_expiry_field_deserializes() {
    let raw = serde_json::to_string(&session(Some(3600))).unwrap();
    let raw = format!("{{\"session\":{raw}}}");
    let stored: StoredSession = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.expires_at, None);
    assert!(stored.is_fresh(u64::MAX));
}
