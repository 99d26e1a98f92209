//! Typed API services, one per backend blueprint.
//!
//! Each service fetches the shared authenticated client and goes through the
//! 401-handling wrapper; calling one without a session fails fast with an
//! authentication error instead of hitting the network.

mod analytics;
mod auth;
mod products;
mod suppliers;
mod transactions;

pub use analytics::AnalyticsService;
pub use auth::AuthService;
pub use products::ProductsService;
pub use suppliers::SuppliersService;
pub use transactions::TransactionsService;

use crate::client::create_authenticated_client;
use crate::client_wrapper::WrappedAuthClient;
use stockroom_http::client::ClientError;

pub(crate) fn require_client() -> Result<WrappedAuthClient, ClientError> {
    create_authenticated_client()?
        .ok_or_else(|| ClientError::AuthenticationFailed("no active session".into()))
}
