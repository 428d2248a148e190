use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Product category - packing and cost constants for one kind of product
#[derive(Debug, Clone, Serialize)]
pub struct ProductCategory {
    pub name: &'static str,
    /// Case-sensitive substring matched against raw SKU text
    pub pattern: &'static str,
    /// Individual units that make up one full case
    pub unit: u32,
    /// Surcharge applied per full case
    pub handling_cost: f64,
    pub case_weight: f64,
    /// Weight of a single unit shipped outside a full case
    pub single_weight: f64,
}

/// One raw order row as supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    /// Count of individual units, not cases. Signed so that bad input can
    /// be rejected instead of wrapping.
    pub quantity: i64,
}

/// Input: What the caller provides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Carrier rate estimate as scraped, e.g. "$10.34"
    pub shipping_rate: String,
    pub line_items: Vec<LineItem>,
}

/// Accumulated and decomposed totals for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    /// Sum of all line-item quantities classified into this category
    pub raw_units: u64,
    pub case_count: u64,
    /// Units left over after full cases are removed
    pub remainder_units: u64,
    pub handling_cost: f64,
    pub weight: f64,
}

/// Output: What the aggregator returns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Per-category totals, keyed by category name. Categories that saw no
    /// units have no entry.
    pub totals: HashMap<String, CategoryTotal>,
    /// Parsed carrier base rate before handling surcharges
    pub base_rate: f64,
    pub total_shipping_cost: f64,
    pub total_weight: f64,
}

/// Error type for aggregation
#[derive(Debug, thiserror::Error)]
pub enum AggregatorError {
    #[error("Malformed shipping rate '{0}': expected a non-negative amount")]
    MalformedRate(String),

    #[error("Invalid quantity {quantity} for item '{sku}'")]
    InvalidQuantity { sku: String, quantity: i64 },
}

pub type Result<T> = std::result::Result<T, AggregatorError>;
