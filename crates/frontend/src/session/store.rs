//! Persistent session storage.
//!
//! Backed by origin-scoped `localStorage`, so the session survives page
//! reloads. Absence of the token is the sole "unauthenticated" signal; the
//! token itself is opaque and never validated client-side.

use crate::config::SessionConfig;
use gloo::storage::{LocalStorage, Storage};

/// Bearer token of the current session, if any
pub fn token() -> Option<String> {
    LocalStorage::get(SessionConfig::TOKEN_KEY).ok()
}

/// Username recorded alongside the token at login
pub fn username() -> Option<String> {
    LocalStorage::get(SessionConfig::USERNAME_KEY).ok()
}

/// Write both session keys
pub fn save(token: &str, username: &str) {
    if let Err(err) = LocalStorage::set(SessionConfig::TOKEN_KEY, token) {
        log::warn!("failed to persist token: {err}");
    }
    if let Err(err) = LocalStorage::set(SessionConfig::USERNAME_KEY, username) {
        log::warn!("failed to persist username: {err}");
    }
}

/// Remove both session keys. Deletion is treated as always succeeding.
pub fn clear() {
    LocalStorage::delete(SessionConfig::TOKEN_KEY);
    LocalStorage::delete(SessionConfig::USERNAME_KEY);
}
