//! HTTP client layer for the Stockroom inventory API.
//!
//! Compiles for both native targets and `wasm32-unknown-unknown`; the browser
//! frontend builds on the client types here, and native builds exist so the
//! wire format and request construction can be tested off-browser.

pub mod client;
pub mod types;

pub use client::{AuthenticatedStockClient, ClientError, PublicStockClient, TypedClientBuilder};
