//! Hook invoked when the server rejects the session token.
//!
//! Defaults to the full [`logout`](super::logout) side effect (storage
//! cleared, redirect to the landing page). Hosts that want to intercept the
//! forced logout, or tests observing it off-browser, can install their own
//! callback.

use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static AUTH_EXPIRED_CALLBACK: RefCell<Rc<dyn Fn()>> =
        RefCell::new(Rc::new(super::logout) as Rc<dyn Fn()>);
}

/// Replace the auth-expired callback
pub fn set_auth_expired_callback(callback: Rc<dyn Fn()>) {
    AUTH_EXPIRED_CALLBACK.with(|cb| {
        *cb.borrow_mut() = callback;
    });
}

/// Restore the default forced-logout behavior
pub fn reset_auth_expired_callback() {
    AUTH_EXPIRED_CALLBACK.with(|cb| {
        *cb.borrow_mut() = Rc::new(super::logout) as Rc<dyn Fn()>;
    });
}

/// Run the auth-expired callback
pub fn trigger_auth_expired() {
    // Clone out of the cell first so a callback that replaces itself does not
    // hold the borrow.
    let callback = AUTH_EXPIRED_CALLBACK.with(|cb| cb.borrow().clone());
    callback();
}
