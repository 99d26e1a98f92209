//! Supplier API service

use super::require_client;
use reqwest::Method;
use stockroom_http::client::ClientError;
use stockroom_http::types::{CreateSupplierRequest, CreatedResponse, Supplier};

/// Supplier API service
#[derive(Clone, Default)]
pub struct SuppliersService;

impl SuppliersService {
    /// Create a new suppliers service
    pub fn new() -> Self {
        Self
    }

    /// All suppliers, unpaginated
    pub async fn list(&self) -> Result<Vec<Supplier>, ClientError> {
        let client = require_client()?;
        let request = client.request(Method::GET, "/api/suppliers");
        client.execute(request).await
    }

    /// Create a supplier; the server rejects duplicate names
    pub async fn create(&self, req: &CreateSupplierRequest) -> Result<CreatedResponse, ClientError> {
        let client = require_client()?;
        let request = client.request(Method::POST, "/api/suppliers").json(req);
        client.execute(request).await
    }
}
