//! Order aggregation and unit-decomposition engine.
//!
//! Takes a raw, unordered list of order line items plus a carrier rate
//! estimate, classifies each free-text SKU into a product category,
//! accumulates per-category unit totals, decomposes them into full cases
//! plus leftover units, and rolls everything up into a shipping summary
//! (cases per category, shipping & handling cost, total weight).
//!
//! Where the line items come from - a storefront API, a scraped page, a
//! file - is the caller's concern, as is rendering the summary.

pub mod catalog;
pub mod types;

mod aggregator;

pub use aggregator::Aggregator;
pub use types::{
    AggregatorError, CategoryTotal, LineItem, OrderRequest, OrderSummary, ProductCategory, Result,
};
