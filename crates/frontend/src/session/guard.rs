//! Page-load guard.
//!
//! Runs once per page view: a stored token reveals the navigation bar,
//! no token on a protected path sends the browser back to the landing page.
//! The decision itself is a pure function of (token presence, path) so it can
//! be tested without a document.

use super::store;
use crate::config::SessionConfig;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// What the guard does for a given page view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Signed in: reveal the navigation bar if the page has one
    RevealNav,
    /// Signed out on an exempt page: leave it alone
    Stay,
    /// Signed out on a protected page: send the browser to the landing page
    RedirectToRoot,
}

/// Pure guard decision. Root and login paths are exempt so signed-out users
/// can still reach them.
pub fn decide(has_token: bool, path: &str) -> GuardOutcome {
    if has_token {
        GuardOutcome::RevealNav
    } else if path == SessionConfig::ROOT_PATH || path == SessionConfig::LOGIN_PATH {
        GuardOutcome::Stay
    } else {
        GuardOutcome::RedirectToRoot
    }
}

/// Apply a guard outcome to the live page
pub fn apply(outcome: GuardOutcome) {
    match outcome {
        GuardOutcome::RevealNav => reveal_nav(),
        GuardOutcome::RedirectToRoot => super::redirect_to_root(),
        GuardOutcome::Stay => {}
    }
}

/// Evaluate the guard against the current document and apply it
pub fn run() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let path = window
        .location()
        .pathname()
        .unwrap_or_else(|_| SessionConfig::ROOT_PATH.to_string());
    apply(decide(store::token().is_some(), &path));
}

/// Arrange for [`run`] to fire exactly once per page view.
///
/// If the document is still loading this waits for `DOMContentLoaded`,
/// otherwise it runs immediately. No polling and no re-check afterwards;
/// navigation here is the traditional full-reload kind.
pub fn install() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", move |_| run()).forget();
    } else {
        run();
    }
}

fn reveal_nav() {
    // Pages without a navbar (the login page, for one) are left alone.
    let nav = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(SessionConfig::NAVBAR_ID));
    if let Some(nav) = nav {
        if let Ok(nav) = nav.dyn_into::<HtmlElement>() {
            let _ = nav.style().set_property("display", "block");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_always_reveals_nav() {
        for path in ["/", "/login", "/dashboard", "/products-page"] {
            assert_eq!(decide(true, path), GuardOutcome::RevealNav);
        }
    }

    #[test]
    fn missing_token_redirects_on_protected_paths() {
        assert_eq!(decide(false, "/dashboard"), GuardOutcome::RedirectToRoot);
        assert_eq!(decide(false, "/products-page"), GuardOutcome::RedirectToRoot);
        assert_eq!(decide(false, "/analytics-page"), GuardOutcome::RedirectToRoot);
    }

    #[test]
    fn missing_token_stays_on_exempt_paths() {
        assert_eq!(decide(false, "/"), GuardOutcome::Stay);
        assert_eq!(decide(false, "/login"), GuardOutcome::Stay);
    }

    #[test]
    fn exemption_is_exact_match() {
        // "/login/extra" is not the login page.
        assert_eq!(decide(false, "/login/extra"), GuardOutcome::RedirectToRoot);
    }
}
