use crate::types::{AggregatorError, Result};

/// Parses a raw carrier rate string into a base shipping cost.
///
/// The scraped value usually carries a currency symbol ("$10.34"); at most
/// one leading `$` is stripped before parsing. Anything that does not parse
/// as a finite, non-negative number is rejected - this is the aggregation's
/// only hard failure mode on the rate side.
pub(super) fn parse_rate(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let amount = trimmed.strip_prefix('$').unwrap_or(trimmed);

    match amount.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(AggregatorError::MalformedRate(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_rate;
    use crate::types::AggregatorError;

    #[test]
    fn test_parses_with_and_without_currency_symbol() {
        assert_eq!(parse_rate("$10.34").unwrap(), 10.34);
        assert_eq!(parse_rate("10.34").unwrap(), 10.34);
        assert_eq!(parse_rate(" $3.50 ").unwrap(), 3.5);
        assert_eq!(parse_rate("0").unwrap(), 0.0);
    }

    #[test]
    fn test_rejects_garbage() {
        for raw in ["$abc", "", "$", "$$10.00", "-1.00", "$-1.00", "nan", "inf"] {
            assert!(
                matches!(parse_rate(raw), Err(AggregatorError::MalformedRate(_))),
                "expected '{raw}' to be rejected"
            );
        }
    }
}
