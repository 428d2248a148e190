use super::*;

#[test]
fn test_classification_prefers_earliest_pattern() {
    // Jar's pattern is checked before Mini's, Mini's before Bar's
    assert_eq!(catalog::classify("SKU-13OZ-MINI").name, "Jar");
    assert_eq!(catalog::classify("MINI-BAR-GIFT").name, "Mini");
    assert_eq!(catalog::classify("SOAP-BAR-XL").name, "Bar");
}

#[test]
fn test_classification_never_fails() {
    assert_eq!(catalog::classify("UNKNOWN-1").name, "Unclassified");
    assert_eq!(catalog::classify("").name, "Unclassified");
    // matching is case-sensitive
    assert_eq!(catalog::classify("sku-13oz-a").name, "Unclassified");
}

#[test]
fn test_single_category_with_remainder() {
    let request = OrderRequest {
        shipping_rate: "0.00".to_string(),
        line_items: vec![LineItem {
            sku: "SKU-13OZ-A".to_string(),
            quantity: 10,
        }],
    };

    let aggregator = Aggregator::new(request).unwrap();
    let summary = aggregator.summarize().unwrap();

    let jar = &summary.totals["Jar"];
    assert_eq!(jar.raw_units, 10);
    assert_eq!(jar.case_count, 1);
    assert_eq!(jar.remainder_units, 4);
}

#[test]
fn test_exact_case_multiple_leaves_no_remainder() {
    let request = OrderRequest {
        shipping_rate: "0.00".to_string(),
        line_items: vec![LineItem {
            sku: "SKU-MINI".to_string(),
            quantity: 24,
        }],
    };

    let aggregator = Aggregator::new(request).unwrap();
    let summary = aggregator.summarize().unwrap();

    let mini = &summary.totals["Mini"];
    assert_eq!(mini.case_count, 2);
    assert_eq!(mini.remainder_units, 0);
}

#[test]
fn test_unclassified_items_pass_through_at_no_cost() {
    let request = OrderRequest {
        shipping_rate: "5.00".to_string(),
        line_items: vec![LineItem {
            sku: "UNKNOWN-1".to_string(),
            quantity: 3,
        }],
    };

    let aggregator = Aggregator::new(request).unwrap();
    let summary = aggregator.summarize().unwrap();

    let fallback = &summary.totals["Unclassified"];
    assert_eq!(fallback.raw_units, 3);
    assert_eq!(fallback.case_count, 3);
    assert_eq!(fallback.remainder_units, 0);
    assert_eq!(fallback.handling_cost, 0.0);
    assert_eq!(fallback.weight, 0.0);
    assert!((summary.total_shipping_cost - 5.0).abs() < 1e-9);
    assert_eq!(summary.total_weight, 0.0);
}

#[test]
fn test_handling_surcharge_adds_to_base_rate() {
    // 12 jars = 2 full cases at $0.50 handling each
    let request = OrderRequest {
        shipping_rate: "10.00".to_string(),
        line_items: vec![LineItem {
            sku: "SKU-13OZ-A".to_string(),
            quantity: 12,
        }],
    };

    let aggregator = Aggregator::new(request).unwrap();
    let summary = aggregator.summarize().unwrap();

    assert!((summary.base_rate - 10.0).abs() < 1e-9);
    assert!((summary.total_shipping_cost - 11.0).abs() < 1e-9);
}

#[test]
fn test_weight_counts_cases_and_loose_units_separately() {
    // 10 jars = 1 case (8.15) + 4 loose (4 x 1.38)
    let request = OrderRequest {
        shipping_rate: "0.00".to_string(),
        line_items: vec![LineItem {
            sku: "SKU-13OZ-A".to_string(),
            quantity: 10,
        }],
    };

    let aggregator = Aggregator::new(request).unwrap();
    let summary = aggregator.summarize().unwrap();

    assert!((summary.total_weight - (8.15 + 4.0 * 1.38)).abs() < 1e-9);
}

#[test]
fn test_quantities_accumulate_across_line_items() {
    let split = OrderRequest {
        shipping_rate: "2.00".to_string(),
        line_items: vec![
            LineItem {
                sku: "SKU-13OZ-A".to_string(),
                quantity: 4,
            },
            LineItem {
                sku: "SKU-13OZ-B".to_string(),
                quantity: 6,
            },
        ],
    };
    let whole = OrderRequest {
        shipping_rate: "2.00".to_string(),
        line_items: vec![LineItem {
            sku: "SKU-13OZ-A".to_string(),
            quantity: 10,
        }],
    };

    let split_summary = Aggregator::new(split).unwrap().summarize().unwrap();
    let whole_summary = Aggregator::new(whole).unwrap().summarize().unwrap();

    assert_eq!(
        split_summary.totals["Jar"].raw_units,
        whole_summary.totals["Jar"].raw_units
    );
    assert_eq!(
        split_summary.totals["Jar"].case_count,
        whole_summary.totals["Jar"].case_count
    );
    assert_eq!(
        split_summary.totals["Jar"].remainder_units,
        whole_summary.totals["Jar"].remainder_units
    );
}

#[test]
fn test_decomposition_invariant_holds_for_mixed_orders() {
    let request = OrderRequest {
        shipping_rate: "$7.25".to_string(),
        line_items: vec![
            LineItem {
                sku: "SKU-13OZ-A".to_string(),
                quantity: 17,
            },
            LineItem {
                sku: "SKU-MINI-B".to_string(),
                quantity: 31,
            },
            LineItem {
                sku: "SOAP-BAR-C".to_string(),
                quantity: 5,
            },
            LineItem {
                sku: "MYSTERY-D".to_string(),
                quantity: 2,
            },
        ],
    };

    let aggregator = Aggregator::new(request).unwrap();
    let summary = aggregator.summarize().unwrap();

    assert_eq!(summary.totals.len(), 4);
    for total in summary.totals.values() {
        let unit = catalog::CATALOG
            .iter()
            .find(|c| c.name == total.category)
            .unwrap_or(&catalog::UNCLASSIFIED)
            .unit;
        assert_eq!(
            total.case_count * u64::from(unit) + total.remainder_units,
            total.raw_units
        );
    }
}

#[test]
fn test_empty_order_yields_base_rate_only() {
    let request = OrderRequest {
        shipping_rate: "$10.34".to_string(),
        line_items: vec![],
    };

    let aggregator = Aggregator::new(request).unwrap();
    let summary = aggregator.summarize().unwrap();

    assert!(summary.totals.is_empty());
    assert!((summary.total_shipping_cost - 10.34).abs() < 1e-9);
    assert_eq!(summary.total_weight, 0.0);
}

#[test]
fn test_zero_quantity_creates_no_category_entry() {
    let request = OrderRequest {
        shipping_rate: "1.00".to_string(),
        line_items: vec![LineItem {
            sku: "SKU-13OZ-A".to_string(),
            quantity: 0,
        }],
    };

    let aggregator = Aggregator::new(request).unwrap();
    let summary = aggregator.summarize().unwrap();

    assert!(summary.totals.is_empty());
}

#[test]
fn test_malformed_rate_fails_the_run() {
    let request = OrderRequest {
        shipping_rate: "$abc".to_string(),
        line_items: vec![LineItem {
            sku: "SKU-13OZ-A".to_string(),
            quantity: 1,
        }],
    };

    let aggregator = Aggregator::new(request).unwrap();
    let err = aggregator.summarize().unwrap_err();

    assert!(matches!(err, AggregatorError::MalformedRate(_)));
}

#[test]
fn test_negative_quantity_is_rejected_up_front() {
    let request = OrderRequest {
        shipping_rate: "1.00".to_string(),
        line_items: vec![LineItem {
            sku: "SKU-MINI".to_string(),
            quantity: -3,
        }],
    };

    let err = Aggregator::new(request).unwrap_err();

    assert!(matches!(
        err,
        AggregatorError::InvalidQuantity { quantity: -3, .. }
    ));
}

#[test]
fn test_order_request_parses_from_json() {
    let raw = r#"{
        "shipping_rate": "$10.34",
        "line_items": [
            { "sku": "SKU-13OZ-A", "quantity": 10 },
            { "sku": "SKU-MINI-B", "quantity": 24 }
        ]
    }"#;

    let request: OrderRequest = serde_json::from_str(raw).unwrap();
    assert_eq!(request.line_items.len(), 2);

    let summary = Aggregator::new(request).unwrap().summarize().unwrap();
    assert_eq!(summary.totals["Jar"].case_count, 1);
    assert_eq!(summary.totals["Mini"].case_count, 2);
}
