use super::*;

// =============================================================
// URL building
// =============================================================

#[test]
fn trailing_slash_is_trimmed_from_base_url() {
    let cfg = BackendConfig::new("https://x.example/", "k");
    assert_eq!(cfg.url, "https://x.example");
    assert_eq!(cfg.signup_url(), "https://x.example/auth/v1/signup");
}

#[test]
fn token_url_uses_password_grant() {
    let cfg = BackendConfig::new("https://x.example", "k");
    assert_eq!(cfg.token_url(), "https://x.example/auth/v1/token?grant_type=password");
}

#[test]
fn refresh_url_uses_refresh_token_grant() {
    let cfg = BackendConfig::new("https://x.example", "k");
    assert_eq!(cfg.refresh_url(), "https://x.example/auth/v1/token?grant_type=refresh_token");
}

#[test]
fn profile_url_filters_by_identity_id() {
    let cfg = BackendConfig::new("https://x.example", "k");
    let id: uuid::Uuid = "7f1aa2a0-0000-0000-0000-000000000001".parse().unwrap();
    let url = cfg.profile_url(id);
    assert!(url.starts_with("https://x.example/rest/v1/profiles?id=eq.7f1aa2a0-"));
    assert!(url.contains("select=id,username,full_name,website,role,updated_at"));
}

// =============================================================
// Placeholder detection
// =============================================================

#[test]
fn explicit_config_is_not_placeholder() {
    let cfg = BackendConfig::new("https://x.example", "real-key");
    assert!(!cfg.is_placeholder());
}
