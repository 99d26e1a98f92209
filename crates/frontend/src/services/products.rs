//! Product catalogue API service

use super::require_client;
use reqwest::Method;
use stockroom_http::client::ClientError;
use stockroom_http::types::{
    CreateProductRequest, CreatedResponse, MessageResponse, ProductDetail, ProductListResponse,
    ProductQuery, ToggleActiveResponse, UpdateProductRequest,
};

/// Product catalogue API service
#[derive(Clone, Default)]
pub struct ProductsService;

impl ProductsService {
    /// Create a new products service
    pub fn new() -> Self {
        Self
    }

    /// Paginated product listing with optional search and sort
    pub async fn list(&self, query: &ProductQuery) -> Result<ProductListResponse, ClientError> {
        let client = require_client()?;
        let request = client
            .request(Method::GET, "/api/products")
            .query(&query.to_pairs());
        client.execute(request).await
    }

    /// Fetch a single product with its computed stock level
    pub async fn get(&self, id: i64) -> Result<ProductDetail, ClientError> {
        let client = require_client()?;
        let request = client.request(Method::GET, &format!("/api/products/{id}"));
        client.execute(request).await
    }

    /// Create a product, optionally seeding initial stock
    pub async fn create(&self, req: &CreateProductRequest) -> Result<CreatedResponse, ClientError> {
        let client = require_client()?;
        let request = client.request(Method::POST, "/api/products").json(req);
        client.execute(request).await
    }

    /// Partial update; only the set fields change
    pub async fn update(
        &self,
        id: i64,
        req: &UpdateProductRequest,
    ) -> Result<MessageResponse, ClientError> {
        let client = require_client()?;
        let request = client
            .request(Method::PUT, &format!("/api/products/{id}"))
            .json(req);
        client.execute(request).await
    }

    /// Flip a product between active and archived
    pub async fn toggle_active(&self, id: i64) -> Result<ToggleActiveResponse, ClientError> {
        let client = require_client()?;
        let request = client.request(Method::PATCH, &format!("/api/products/{id}/toggle-active"));
        client.execute(request).await
    }

    /// Delete a product outright
    pub async fn delete(&self, id: i64) -> Result<MessageResponse, ClientError> {
        let client = require_client()?;
        let request = client.request(Method::DELETE, &format!("/api/products/{id}"));
        client.execute(request).await
    }
}
