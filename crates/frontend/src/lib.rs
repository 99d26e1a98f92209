//! Browser-side session glue for the Stockroom inventory app.
//!
//! This crate is the client half of the app: it keeps the bearer token in
//! origin-scoped persistent storage, guards pages against unauthenticated
//! access on load, and routes every API call through a wrapper that turns a
//! 401 into a forced logout.

pub mod client;
pub mod client_wrapper;
pub mod config;
pub mod services;
pub mod session;

pub use client::{create_authenticated_client, create_public_client, set_auth_token};
pub use client_wrapper::WrappedAuthClient;
pub use config::SessionConfig;
