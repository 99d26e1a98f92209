//! Wire types for the Stockroom inventory API.
//!
//! Field names match the JSON the server emits and accepts; optional request
//! fields are skipped when absent so partial updates only touch the fields
//! the caller set.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Generic `{"message": ...}` envelope used by most mutation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

/// A product row as returned by the paginated listing, with its current
/// stock level already computed server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: i64,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub supplier: String,
    pub unit_price: f64,
    pub stock: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductSummary>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub id: i64,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub supplier_id: i64,
    pub unit_price: f64,
    pub stock: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub supplier_id: i64,
    pub unit_price: f64,
    /// When set and positive, the server records an initial IN transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_stock: Option<i64>,
}

/// Partial update; only present fields are changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleActiveResponse {
    pub message: String,
    pub is_active: bool,
}

/// Listing parameters for `GET /api/products`
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// Substring match against name and SKU
    pub search: Option<String>,
    /// `"name"` sorts alphabetically, anything else by id
    pub sort: Option<String>,
}

impl ProductQuery {
    /// Render as query pairs, omitting unset parameters
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("q", search.clone()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        pairs
    }
}

// ---------------------------------------------------------------------------
// Suppliers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub contact_email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSupplierRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

// ---------------------------------------------------------------------------
// Inventory transactions
// ---------------------------------------------------------------------------

/// Stock movement direction, `"IN"` or `"OUT"` on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "OUT")]
    Out,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: i64,
    pub product_name: String,
    pub quantity: i64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// ISO 8601 timestamp as emitted by the server
    pub date: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    pub product_id: i64,
    pub quantity: i64,
    pub transaction_type: TransactionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopSellingEntry {
    pub name: String,
    pub total_sold: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LowStockEntry {
    pub name: String,
    pub sku: String,
    pub stock: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockValueResponse {
    pub total_stock_value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentProductEntry {
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub supplier: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBreakdownEntry {
    pub category: String,
    pub product_count: i64,
    pub total_units: i64,
    pub total_value: f64,
}
