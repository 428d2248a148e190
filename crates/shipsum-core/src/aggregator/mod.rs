use crate::catalog;
use crate::types::*;
use std::collections::HashMap;

mod decompose;
mod rate;
mod summary;
#[cfg(test)]
mod tests;

/// Aggregates raw order line items into per-category case counts and a
/// shipping & handling rollup.
#[derive(Debug)]
pub struct Aggregator {
    request: OrderRequest,
}

impl Aggregator {
    /// Validates the request and builds a new aggregator instance.
    ///
    /// A single negative quantity fails the whole order rather than
    /// producing a plausible-looking but wrong summary.
    pub fn new(request: OrderRequest) -> Result<Self> {
        for item in &request.line_items {
            if item.quantity < 0 {
                return Err(AggregatorError::InvalidQuantity {
                    sku: item.sku.clone(),
                    quantity: item.quantity,
                });
            }
        }

        Ok(Self { request })
    }

    /// Executes the full aggregation flow and returns the order summary.
    pub fn summarize(&self) -> Result<OrderSummary> {
        let base_rate = rate::parse_rate(&self.request.shipping_rate)?;
        let accumulated = self.accumulate();

        Ok(self.build_summary(base_rate, &accumulated))
    }

    /// Sums quantities per category. The map is freshly allocated per call;
    /// SKUs matching no pattern accumulate under the fallback category
    /// instead of being dropped.
    fn accumulate(&self) -> HashMap<&'static str, (&'static ProductCategory, u64)> {
        let mut units: HashMap<&'static str, (&'static ProductCategory, u64)> = HashMap::new();

        for item in &self.request.line_items {
            let category = catalog::classify(&item.sku);
            let entry = units.entry(category.name).or_insert((category, 0));
            // Safe cast: quantities were validated non-negative in new()
            entry.1 += item.quantity as u64;
        }

        units
    }
}
