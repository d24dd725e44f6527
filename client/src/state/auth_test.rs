use super::*;

const NOW: f64 = 1_700_000_000_000.0;

// =============================================================
// Session lifetime
// =============================================================

#[test]
fn session_lasts_eight_hours() {
    let session = AuthSession::start(NOW);
    assert!(session.is_valid(NOW + SESSION_TTL_MS - 1.0));
    assert!(!session.is_valid(NOW + SESSION_TTL_MS));
}

#[test]
fn sign_in_requires_email_and_password() {
    let store = MemorySessionStore::default();
    assert!(sign_in(&store, "  ", "secret", NOW).is_err());
    assert!(sign_in(&store, "admin@peakstart.com", "", NOW).is_err());
    assert_eq!(store.load(), None);
}

#[test]
fn sign_in_persists_session() {
    let store = MemorySessionStore::default();
    let state = sign_in(&store, "admin@peakstart.com", "secret", NOW).expect("signed in");
    assert!(state.is_authenticated(NOW));
    assert_eq!(restore(&store, NOW + 1.0), state);
}

#[test]
fn expired_session_is_cleared_on_restore() {
    let store = MemorySessionStore::default();
    sign_in(&store, "a@b.com", "pw", NOW).expect("signed in");
    let later = NOW + SESSION_TTL_MS + 1.0;
    assert_eq!(restore(&store, later), AuthState::default());
    assert_eq!(store.load(), None);
    assert_eq!(ensure_session(&store, later), Err(EXPIRED));
}

// =============================================================
// Route guard
// =============================================================

#[test]
fn sign_out_clears_storage_and_admin_redirects() {
    let store = MemorySessionStore::default();
    let state = sign_in(&store, "a@b.com", "pw", NOW).expect("signed in");
    assert_eq!(guard("/admin", &state, NOW), Guard::Allow);

    let state = sign_out(&store);
    assert_eq!(store.load(), None);
    assert_eq!(guard("/admin", &state, NOW), Guard::RedirectToSignIn);
    let restored = restore(&store, NOW);
    assert_eq!(guard("/admin/sites/4", &restored, NOW), Guard::RedirectToSignIn);
}

#[test]
fn public_pages_never_redirect() {
    let state = AuthState::default();
    assert_eq!(guard("/", &state, NOW), Guard::Allow);
    assert_eq!(guard("/blog/3", &state, NOW), Guard::Allow);
    assert_eq!(guard("/administration", &state, NOW), Guard::Allow);
}

#[test]
fn session_round_trips_as_json() {
    let session = AuthSession::start(NOW);
    let raw = serde_json::to_string(&session).expect("json");
    assert!(raw.contains("expires_at_ms"));
    let back: AuthSession = serde_json::from_str(&raw).expect("parse");
    assert_eq!(back, session);
}
