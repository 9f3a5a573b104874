//! Lenient numeric coercion for vendor JSON.
//!
//! Vendor files store numbers as strings, sometimes as the literal "None" or
//! "-". Such values fall back to a default and the fallback is logged.

use serde_json::Value;
use tracing::debug;

/// Parse `raw` as a finite `f64`, returning `default` when it is missing,
/// non-numeric or non-finite.
pub fn parse_numeric_or(raw: Option<&Value>, default: f64, field: &str) -> f64 {
    let parsed = match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(v) if v.is_finite() => v,
        _ => {
            debug!("Field {} is not numeric ({:?}), using {}", field, raw, default);
            default
        }
    }
}

/// Look up `key` on a JSON object and coerce it, defaulting to 0.
pub fn field_or_zero(object: &Value, key: &str) -> f64 {
    parse_numeric_or(object.get(key), 0.0, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_numeric_string_and_number() {
        assert_eq!(parse_numeric_or(Some(&json!("12.5")), 0.0, "x"), 12.5);
        assert_eq!(parse_numeric_or(Some(&json!(" 7 ")), 0.0, "x"), 7.0);
        assert_eq!(parse_numeric_or(Some(&json!(3)), 0.0, "x"), 3.0);
    }

    #[test]
    fn test_parse_numeric_fallbacks() {
        assert_eq!(parse_numeric_or(None, 1.5, "x"), 1.5);
        assert_eq!(parse_numeric_or(Some(&json!("None")), 2.0, "x"), 2.0);
        assert_eq!(parse_numeric_or(Some(&json!("-")), 0.0, "x"), 0.0);
        assert_eq!(parse_numeric_or(Some(&json!(null)), 4.0, "x"), 4.0);
        assert_eq!(parse_numeric_or(Some(&json!("NaN")), 0.0, "x"), 0.0);
        assert_eq!(parse_numeric_or(Some(&json!({"a": 1})), 9.0, "x"), 9.0);
    }

    #[test]
    fn test_field_or_zero() {
        let obj = json!({"PERatio": "21.3", "PEGRatio": "None"});
        assert_eq!(field_or_zero(&obj, "PERatio"), 21.3);
        assert_eq!(field_or_zero(&obj, "PEGRatio"), 0.0);
        assert_eq!(field_or_zero(&obj, "Missing"), 0.0);
    }
}
