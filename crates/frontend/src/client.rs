//! Client configuration and initialization

use crate::client_wrapper::WrappedAuthClient;
use crate::session::store;
use once_cell::sync::Lazy;
use std::sync::Mutex;
pub use stockroom_http::client::ClientError;
use stockroom_http::client::{PublicStockClient, TypedClientBuilder};
use web_sys::window;

/// Global client instances
static PUBLIC_CLIENT: Lazy<Mutex<Option<PublicStockClient>>> = Lazy::new(|| Mutex::new(None));
static AUTH_CLIENT: Lazy<Mutex<Option<WrappedAuthClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the base URL for API calls
fn get_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(origin) = window.location().origin() {
            return origin;
        }
    }

    // Default to relative URLs
    String::new()
}

/// Get the public client instance (for the login and registration endpoints)
pub fn create_public_client() -> Result<PublicStockClient, ClientError> {
    let mut client_lock = PUBLIC_CLIENT
        .lock()
        .expect("Failed to acquire public client lock");

    match client_lock.as_ref() {
        Some(client) => Ok(client.clone()),
        None => {
            let client = TypedClientBuilder::new()
                .base_url(get_base_url())
                .build_public()?;
            *client_lock = Some(client.clone());
            Ok(client)
        }
    }
}

/// Get the authenticated client instance.
///
/// A page reload drops the cached client but not the stored session, so when
/// nothing is cached the token is re-read from storage and the client rebuilt
/// from it. Returns `Ok(None)` when there is no session at all.
pub fn create_authenticated_client() -> Result<Option<WrappedAuthClient>, ClientError> {
    let mut client_lock = AUTH_CLIENT
        .lock()
        .expect("Failed to acquire auth client lock");

    if client_lock.is_none() {
        if let Some(token) = store::token() {
            let client = TypedClientBuilder::new()
                .base_url(get_base_url())
                .build_authenticated(token)?;
            *client_lock = Some(WrappedAuthClient::new(client));
        }
    }

    Ok(client_lock.clone())
}

/// Install or clear the cached authenticated client
pub fn set_auth_token(token: Option<&str>) -> Result<(), ClientError> {
    let mut auth_lock = AUTH_CLIENT
        .lock()
        .expect("Failed to acquire auth client lock");

    if let Some(token) = token {
        let client = TypedClientBuilder::new()
            .base_url(get_base_url())
            .build_authenticated(token)?;
        *auth_lock = Some(WrappedAuthClient::new(client));
    } else {
        *auth_lock = None;
    }

    Ok(())
}
