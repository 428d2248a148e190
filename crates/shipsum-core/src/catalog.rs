//! The fixed product catalog and SKU classification.
//!
//! The catalog is a closed table built at compile time and never mutated,
//! so it can be shared freely across concurrent aggregations.

use crate::types::ProductCategory;

/// Known categories in classification priority order. The classifier walks
/// this table top to bottom and the first matching pattern wins, so entry
/// order is part of the contract.
pub static CATALOG: [ProductCategory; 3] = [
    ProductCategory {
        name: "Jar",
        pattern: "13OZ",
        unit: 6,
        handling_cost: 0.5,
        case_weight: 8.15,
        single_weight: 1.38,
    },
    ProductCategory {
        name: "Mini",
        pattern: "MINI",
        unit: 12,
        handling_cost: 1.0,
        case_weight: 6.0,
        single_weight: 0.5,
    },
    ProductCategory {
        name: "Bar",
        pattern: "BAR",
        unit: 12,
        handling_cost: 0.5,
        case_weight: 2.0,
        single_weight: 0.167,
    },
];

/// Sentinel for SKUs matching no pattern: unit of one, no surcharge, no
/// weight. Unknown products stay visible in totals instead of being dropped.
pub static UNCLASSIFIED: ProductCategory = ProductCategory {
    name: "Unclassified",
    pattern: "",
    unit: 1,
    handling_cost: 0.0,
    case_weight: 0.0,
    single_weight: 0.0,
};

/// Maps raw SKU text to a category. Total: never fails, falls back to
/// [`UNCLASSIFIED`] when nothing matches. Matching is a case-sensitive
/// substring check, first match wins.
pub fn classify(sku: &str) -> &'static ProductCategory {
    CATALOG
        .iter()
        .find(|category| sku.contains(category.pattern))
        .unwrap_or(&UNCLASSIFIED)
}
