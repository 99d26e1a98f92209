//! Stockroom API clients
//!
//! Two client types enforce the authentication split at compile time:
//! [`PublicStockClient`] for the login/registration endpoints and
//! [`AuthenticatedStockClient`] for everything behind the bearer check.

pub mod error;
mod typed;

pub use error::ClientError;
pub use typed::{AuthenticatedStockClient, PublicStockClient, TypedClientBuilder};
