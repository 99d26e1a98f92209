//! Explicit session management.
//!
//! The session is two keys in persistent storage plus the cached
//! authenticated client. Other page scripts go through [`login`] and
//! [`logout`] instead of touching storage directly.

pub mod expired;
pub mod guard;
pub mod store;

use crate::client::set_auth_token;
use crate::config::SessionConfig;

/// Persist a fresh session and prime the authenticated client.
///
/// Called by the login flow after the server has issued a token.
pub fn login(token: &str, username: &str) {
    store::save(token, username);
    if let Err(err) = set_auth_token(Some(token)) {
        log::warn!("failed to prime authenticated client: {err}");
    }
}

/// Drop the session: remove both storage keys, forget the cached client and
/// send the browser back to the landing page.
///
/// Always succeeds, regardless of prior state; safe to invoke from several
/// concurrent 401 handlers, the storage end state is identical and only the
/// first redirect is observable.
pub fn logout() {
    store::clear();
    let _ = set_auth_token(None);
    redirect_to_root();
}

pub(crate) fn redirect_to_root() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(SessionConfig::ROOT_PATH);
    }
}
