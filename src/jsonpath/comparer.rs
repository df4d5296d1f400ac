//! Canonical string forms and comparison semantics for JSON scalars.
//!
//! Equality compares canonical strings exactly. Ordering compares exact decimals
//! and is false whenever either side is not a decimal. An absent value equals
//! only another absent value.

use super::ast::ComparisonOp;
use super::decimal::ExactDecimal;
use rust_decimal::Decimal;
use serde_json::{Number, Value};
use std::str::FromStr;

/// Renders a value in the canonical string form used for comparisons.
///
/// `null` has no string form. Numbers render as invariant decimals, strings as
/// themselves, and anything else as compact JSON text.
pub fn to_canonical_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(canonical_number(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

/// Renders a JSON number as a decimal, keeping its scale (`12.50` stays `12.50`).
///
/// Numbers that `Decimal` would round or cannot hold keep their source text.
pub fn canonical_number(number: &Number) -> String {
    let text = number.to_string();
    let rendered = parse_decimal(&text).map(|decimal| decimal.to_string());
    match rendered {
        Some(rendered) if ExactDecimal::parse(&rendered) == ExactDecimal::parse(&text) => rendered,
        _ => text,
    }
}

/// Parses base-10 decimal text in plain or scientific notation.
///
/// Text that is not shaped like a decimal is rejected before `Decimal` sees it.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    ExactDecimal::parse(text)?;
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Applies `op` to two canonical strings.
pub fn compare(left: Option<&str>, right: Option<&str>, op: ComparisonOp) -> bool {
    let (left, right) = match (left, right) {
        (None, None) => return op == ComparisonOp::Eq,
        (Some(left), Some(right)) => (left, right),
        _ => return op == ComparisonOp::Ne,
    };

    if !op.is_ordering() {
        return (left == right) == (op == ComparisonOp::Eq);
    }

    match (ExactDecimal::parse(left), ExactDecimal::parse(right)) {
        (Some(l), Some(r)) => op.holds(l.cmp(&r)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonical_string_scalars() {
        assert_eq!(to_canonical_string(&json!("abc")), Some("abc".to_string()));
        assert_eq!(to_canonical_string(&json!(1001)), Some("1001".to_string()));
        assert_eq!(to_canonical_string(&json!(true)), Some("true".to_string()));
        assert_eq!(to_canonical_string(&Value::Null), None);
    }

    #[test]
    fn test_canonical_number_keeps_scale() {
        let value: Value = serde_json::from_str(r#"[12.34, 12.50, -0.5, 1e3]"#).unwrap();
        let rendered: Vec<_> = value
            .as_array()
            .unwrap()
            .iter()
            .filter_map(to_canonical_string)
            .collect();
        assert_eq!(rendered, vec!["12.34", "12.50", "-0.5", "1000"]);
    }

    #[test]
    fn test_canonical_number_out_of_range_keeps_text() {
        let value: Value = serde_json::from_str("1e40").unwrap();
        assert_eq!(to_canonical_string(&value), Some("1e40".to_string()));
    }

    #[test]
    fn test_canonical_number_keeps_digits_decimal_would_round() {
        for text in ["0.12345678901234567890123456789", "123456789012345678901234567890", "1e-30"] {
            let value: Value = serde_json::from_str(text).unwrap();
            assert_eq!(to_canonical_string(&value), Some(text.to_string()));
        }
    }

    #[test]
    fn test_compare_rejects_digit_separators() {
        assert!(!compare(Some("1_0"), Some("9"), ComparisonOp::Gt));
        assert!(!compare(Some("1_0"), Some("9"), ComparisonOp::Lt));
        assert!(!compare(Some("1,000"), Some("9"), ComparisonOp::Gt));
        assert!(parse_decimal("1_0").is_none());
    }

    #[test]
    fn test_compare_beyond_decimal_range() {
        assert!(compare(Some("123456789012345678901234567890"), Some("0"), ComparisonOp::Ge));
        assert!(compare(Some("1e-30"), Some("0"), ComparisonOp::Gt));
        assert!(compare(Some("-1e40"), Some("-1e39"), ComparisonOp::Lt));
        assert!(compare(
            Some("0.12345678901234567890123456789"),
            Some("0.12345678901234567890123456788"),
            ComparisonOp::Gt
        ));
    }

    #[test]
    fn test_compare_absent_operands() {
        assert!(compare(None, None, ComparisonOp::Eq));
        assert!(!compare(None, None, ComparisonOp::Ne));
        assert!(compare(None, Some("x"), ComparisonOp::Ne));
        assert!(compare(Some("x"), None, ComparisonOp::Ne));
        assert!(!compare(Some("x"), None, ComparisonOp::Eq));
        assert!(!compare(None, Some("1"), ComparisonOp::Lt));
        assert!(!compare(Some("1"), None, ComparisonOp::Ge));
    }

    #[test]
    fn test_compare_numeric_strings() {
        assert!(compare(Some("10"), Some("9"), ComparisonOp::Gt));
        assert!(compare(Some("10"), Some("9"), ComparisonOp::Ge));
        assert!(!compare(Some("10"), Some("9"), ComparisonOp::Lt));
        assert!(!compare(Some("10"), Some("9"), ComparisonOp::Le));
        assert!(compare(Some("10.0"), Some("10"), ComparisonOp::Ge));
        assert!(compare(Some("10.0"), Some("10"), ComparisonOp::Le));
    }

    #[test]
    fn test_compare_equality_is_textual() {
        assert!(!compare(Some("10.0"), Some("10"), ComparisonOp::Eq));
        assert!(compare(Some("abc"), Some("abc"), ComparisonOp::Eq));
        assert!(compare(Some("abc"), Some("Abc"), ComparisonOp::Ne));
    }

    #[test]
    fn test_compare_non_numeric_ordering_is_false() {
        for op in [
            ComparisonOp::Gt,
            ComparisonOp::Ge,
            ComparisonOp::Lt,
            ComparisonOp::Le,
        ] {
            assert!(!compare(Some("b"), Some("a"), op));
            assert!(!compare(Some("10"), Some("a"), op));
        }
    }
}
