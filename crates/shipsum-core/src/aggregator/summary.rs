use super::*;

impl Aggregator {
    /// Decomposes accumulated unit counts into case/remainder pairs and
    /// rolls up handling cost and weight into the final summary.
    pub(super) fn build_summary(
        &self,
        base_rate: f64,
        accumulated: &HashMap<&'static str, (&'static ProductCategory, u64)>,
    ) -> OrderSummary {
        let mut totals = HashMap::new();
        let mut total_shipping_cost = base_rate;
        let mut total_weight = 0.0;

        for &(category, raw_units) in accumulated.values() {
            if raw_units == 0 {
                continue;
            }

            let (case_count, remainder_units) = decompose::split_units(raw_units, category.unit);

            // Handling is charged per full case only; loose units ride free
            let handling_cost = case_count as f64 * category.handling_cost;
            let weight = case_count as f64 * category.case_weight
                + remainder_units as f64 * category.single_weight;

            total_shipping_cost += handling_cost;
            total_weight += weight;

            totals.insert(
                category.name.to_string(),
                CategoryTotal {
                    category: category.name.to_string(),
                    raw_units,
                    case_count,
                    remainder_units,
                    handling_cost,
                    weight,
                },
            );
        }

        OrderSummary {
            totals,
            base_rate,
            total_shipping_cost,
            total_weight,
        }
    }
}
