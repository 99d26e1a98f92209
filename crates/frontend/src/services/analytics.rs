//! Analytics API service

use super::require_client;
use reqwest::Method;
use stockroom_http::client::ClientError;
use stockroom_http::types::{
    CategoryBreakdownEntry, LowStockEntry, RecentProductEntry, StockValueResponse, TopSellingEntry,
};

/// Analytics API service
#[derive(Clone, Default)]
pub struct AnalyticsService;

impl AnalyticsService {
    /// Create a new analytics service
    pub fn new() -> Self {
        Self
    }

    /// Ten products with the most outgoing stock
    pub async fn top_selling(&self) -> Result<Vec<TopSellingEntry>, ClientError> {
        self.get("/api/analytics/top-selling").await
    }

    /// Active products below the stock threshold
    pub async fn low_stock(&self) -> Result<Vec<LowStockEntry>, ClientError> {
        self.get("/api/analytics/low-stock").await
    }

    /// Total value of stock on hand
    pub async fn stock_value(&self) -> Result<StockValueResponse, ClientError> {
        self.get("/api/analytics/stock-value").await
    }

    /// Five most recently added active products
    pub async fn recent_products(&self) -> Result<Vec<RecentProductEntry>, ClientError> {
        self.get("/api/analytics/recent-products").await
    }

    /// Per-category product count, units and value
    pub async fn stock_by_category(&self) -> Result<Vec<CategoryBreakdownEntry>, ClientError> {
        self.get("/api/analytics/stock-by-category").await
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let client = require_client()?;
        let request = client.request(Method::GET, path);
        client.execute(request).await
    }
}
