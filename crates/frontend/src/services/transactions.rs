//! Inventory transaction API service

use super::require_client;
use reqwest::Method;
use stockroom_http::client::ClientError;
use stockroom_http::types::{CreateTransactionRequest, CreatedResponse, TransactionRecord};

/// Inventory transaction API service
#[derive(Clone, Default)]
pub struct TransactionsService;

impl TransactionsService {
    /// Create a new transactions service
    pub fn new() -> Self {
        Self
    }

    /// Most recent stock movements, optionally filtered to one product
    pub async fn list(&self, product_id: Option<i64>) -> Result<Vec<TransactionRecord>, ClientError> {
        let client = require_client()?;
        let mut request = client.request(Method::GET, "/api/transactions");
        if let Some(product_id) = product_id {
            request = request.query(&[("product_id", product_id.to_string())]);
        }
        client.execute(request).await
    }

    /// Record a stock movement. The server enforces positive quantities and
    /// sufficient stock for OUT movements.
    pub async fn record(
        &self,
        req: &CreateTransactionRequest,
    ) -> Result<CreatedResponse, ClientError> {
        let client = require_client()?;
        let request = client.request(Method::POST, "/api/transactions").json(req);
        client.execute(request).await
    }
}
