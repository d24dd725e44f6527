//! Admin session: sign-in, expiry, persistence, and the `/admin` route guard.
//!
//! DESIGN
//! ======
//! The content API has no session endpoint, so the back-office keeps a
//! time-limited [`AuthSession`] in browser storage. It is read on load and on
//! every route change, and checked again before each admin mutation so an
//! expired session cannot keep editing.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use crate::util::storage;

/// localStorage key holding the JSON session.
pub const SESSION_KEY: &str = "peakstart_session";

/// Session lifetime: eight hours.
pub const SESSION_TTL_MS: f64 = 8.0 * 60.0 * 60.0 * 1000.0;

pub const SIGN_IN_PATH: &str = "/signin";
pub const ADMIN_PATH: &str = "/admin";

pub const EXPIRED: &str = "Your session has expired. Please sign in again.";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub signed_in_at_ms: f64,
    pub expires_at_ms: f64,
}

impl AuthSession {
    pub fn start(now_ms: f64) -> Self {
        Self { signed_in_at_ms: now_ms, expires_at_ms: now_ms + SESSION_TTL_MS }
    }

    pub fn is_valid(&self, now_ms: f64) -> bool {
        now_ms >= self.signed_in_at_ms && now_ms < self.expires_at_ms
    }
}

/// Where the session is persisted.
pub trait SessionStore {
    fn load(&self) -> Option<AuthSession>;
    fn save(&self, session: &AuthSession);
    fn clear(&self);
}

/// Browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<AuthSession> {
        storage::load_json(SESSION_KEY)
    }

    fn save(&self, session: &AuthSession) {
        storage::save_json(SESSION_KEY, session);
    }

    fn clear(&self) {
        storage::remove(SESSION_KEY);
    }
}

/// Process-local store for tests and server rendering.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: RefCell<Option<AuthSession>>,
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<AuthSession> {
        *self.session.borrow()
    }

    fn save(&self, session: &AuthSession) {
        *self.session.borrow_mut() = Some(*session);
    }

    fn clear(&self) {
        *self.session.borrow_mut() = None;
    }
}

/// Authentication state provided at the app root.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<AuthSession>,
}

impl AuthState {
    pub fn is_authenticated(&self, now_ms: f64) -> bool {
        self.session.is_some_and(|s| s.is_valid(now_ms))
    }
}

/// Read the persisted session, discarding it if expired or unreadable.
pub fn restore(store: &dyn SessionStore, now_ms: f64) -> AuthState {
    match store.load() {
        Some(session) if session.is_valid(now_ms) => AuthState { session: Some(session) },
        Some(_) => {
            store.clear();
            AuthState::default()
        }
        None => AuthState::default(),
    }
}

/// Start a session. Credentials are only checked for presence; the API
/// performs no authentication of its own.
///
/// # Errors
///
/// Returns a banner message when the email or password is blank.
pub fn sign_in(store: &dyn SessionStore, email: &str, password: &str, now_ms: f64) -> Result<AuthState, &'static str> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    let session = AuthSession::start(now_ms);
    store.save(&session);
    Ok(AuthState { session: Some(session) })
}

pub fn sign_out(store: &dyn SessionStore) -> AuthState {
    store.clear();
    AuthState::default()
}

/// Re-check the persisted session before an admin mutation.
///
/// # Errors
///
/// Returns [`EXPIRED`] when no valid session remains.
pub fn ensure_session(store: &dyn SessionStore, now_ms: f64) -> Result<(), &'static str> {
    if restore(store, now_ms).is_authenticated(now_ms) { Ok(()) } else { Err(EXPIRED) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    Allow,
    RedirectToSignIn,
}

pub fn is_protected(path: &str) -> bool {
    path == ADMIN_PATH || path.starts_with("/admin/")
}

/// Decide whether `path` may render for `state`.
pub fn guard(path: &str, state: &AuthState, now_ms: f64) -> Guard {
    if is_protected(path) && !state.is_authenticated(now_ms) { Guard::RedirectToSignIn } else { Guard::Allow }
}
