//! Numeric cell normalization.
//!
//! Spreadsheet exports in some locales use a comma as the decimal
//! separator. Two normalization rules exist side by side:
//!
//! - [`parse_value_strict`] only rewrites the comma when the whole cell
//!   matches a bounded decimal pattern (optional minus, 1–3 integer
//!   digits, optional comma fraction). Used by the single-series chart.
//! - [`parse_value_lenient`] rewrites every comma unconditionally. Used
//!   by the multicolour chart.
//!
//! The two paths accept different inputs (`"1234,5"` fails strictly but
//! parses leniently) and are kept as separate named functions on purpose:
//! unifying them would silently change which cell formats each chart
//! accepts.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ChartError;

/// Bounded decimal with a comma separator, e.g. `123,45` or `-0,05`.
static BOUNDED_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d{1,3}(,\d+)?$").expect("Invalid regex"));

/// Rewrite a comma decimal separator to a period, but only when the whole
/// string matches the bounded decimal pattern. Anything else passes
/// through unchanged.
pub fn normalize_decimal(raw: &str) -> String {
    if BOUNDED_DECIMAL.is_match(raw) {
        raw.replace(',', ".")
    } else {
        raw.to_string()
    }
}

/// Parse a value cell under the bounded-pattern rule (single-series path).
pub fn parse_value_strict(raw: &str) -> Result<f64, ChartError> {
    normalize_decimal(raw)
        .parse::<f64>()
        .map_err(|_| ChartError::Parse(raw.to_string()))
}

/// Parse a value cell with unconditional comma replacement (multicolour
/// path).
pub fn parse_value_lenient(raw: &str) -> Result<f64, ChartError> {
    raw.replace(',', ".")
        .parse::<f64>()
        .map_err(|_| ChartError::Parse(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_comma_decimal() {
        assert_eq!(parse_value_strict("123,45").unwrap(), 123.45);
        assert_eq!(parse_value_strict("-0,05").unwrap(), -0.05);
    }

    #[test]
    fn test_strict_plain_numbers() {
        assert_eq!(parse_value_strict("42").unwrap(), 42.0);
        // A period separator is outside the bounded pattern but parses as-is.
        assert_eq!(parse_value_strict("1234.5").unwrap(), 1234.5);
    }

    #[test]
    fn test_strict_rejects_wide_comma_decimal() {
        // Four integer digits exceed the bounded pattern, so the comma
        // survives and f64 parsing fails.
        assert!(matches!(
            parse_value_strict("1234,5"),
            Err(ChartError::Parse(v)) if v == "1234,5"
        ));
    }

    #[test]
    fn test_strict_rejects_garbage() {
        assert!(parse_value_strict("#REF!").is_err());
        assert!(parse_value_strict("").is_err());
    }

    #[test]
    fn test_lenient_accepts_wide_comma_decimal() {
        assert_eq!(parse_value_lenient("1234,5").unwrap(), 1234.5);
        assert_eq!(parse_value_lenient("85,5").unwrap(), 85.5);
    }

    #[test]
    fn test_lenient_rejects_garbage() {
        assert!(matches!(
            parse_value_lenient("n/a"),
            Err(ChartError::Parse(v)) if v == "n/a"
        ));
    }

    #[test]
    fn test_normalize_decimal_passthrough() {
        assert_eq!(normalize_decimal("hello"), "hello");
        assert_eq!(normalize_decimal("12,3"), "12.3");
        assert_eq!(normalize_decimal("1234,5"), "1234,5");
    }
}
