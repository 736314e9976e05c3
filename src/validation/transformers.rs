//! Reusable field transformers
//!
//! These hooks rewrite field values before validation. Each factory returns a
//! closure compatible with [`FieldRule::transformer`](crate::validation::FieldRule::transformer);
//! a value outside the hook's type passes through unchanged so the paired
//! validator can reject it under the field's own name.

use anyhow::Result;
use serde_json::{Value, json};

/// Transformer: trim whitespace from string
pub fn trim() -> impl Fn(Value) -> Result<Value> + Send + Sync + Clone {
    |value: Value| {
        if let Some(s) = value.as_str() {
            Ok(Value::String(s.trim().to_string()))
        } else {
            Ok(value)
        }
    }
}

/// Transformer: convert string to uppercase
pub fn uppercase() -> impl Fn(Value) -> Result<Value> + Send + Sync + Clone {
    |value: Value| {
        if let Some(s) = value.as_str() {
            Ok(Value::String(s.to_uppercase()))
        } else {
            Ok(value)
        }
    }
}

/// Transformer: convert string to lowercase
pub fn lowercase() -> impl Fn(Value) -> Result<Value> + Send + Sync + Clone {
    |value: Value| {
        if let Some(s) = value.as_str() {
            Ok(Value::String(s.to_lowercase()))
        } else {
            Ok(value)
        }
    }
}

/// Transformer: replace HTML-significant characters with entities
pub fn escape() -> impl Fn(Value) -> Result<Value> + Send + Sync + Clone {
    |value: Value| {
        if let Some(s) = value.as_str() {
            let mut escaped = String::with_capacity(s.len());
            for c in s.chars() {
                match c {
                    '&' => escaped.push_str("&amp;"),
                    '<' => escaped.push_str("&lt;"),
                    '>' => escaped.push_str("&gt;"),
                    '"' => escaped.push_str("&quot;"),
                    '\'' => escaped.push_str("&#x27;"),
                    '/' => escaped.push_str("&#x2F;"),
                    _ => escaped.push(c),
                }
            }
            Ok(Value::String(escaped))
        } else {
            Ok(value)
        }
    }
}

/// Transformer: round number to specified decimal places
pub fn round_decimals(decimals: u32) -> impl Fn(Value) -> Result<Value> + Send + Sync + Clone {
    move |value: Value| {
        if let Some(num) = value.as_f64() {
            let factor = 10_f64.powi(decimals as i32);
            let rounded = (num * factor).round() / factor;
            Ok(json!(rounded))
        } else {
            Ok(value)
        }
    }
}

/// Transformer: parse a string into an integer
///
/// Integer values come back as-is; a string that does not parse is left
/// untouched for the validator to reject.
pub fn parse_int() -> impl Fn(Value) -> Result<Value> + Send + Sync + Clone {
    |value: Value| {
        if let Some(s) = value.as_str() {
            match s.trim().parse::<i64>() {
                Ok(n) => Ok(json!(n)),
                Err(_) => Ok(Value::String(s.to_string())),
            }
        } else {
            Ok(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // === trim() ===

    #[test]
    fn test_trim_removes_whitespace() {
        let f = trim();
        assert_eq!(f(json!("  hello  ")).unwrap(), json!("hello"));
    }

    #[test]
    fn test_trim_non_string_passthrough() {
        let f = trim();
        assert_eq!(f(json!(42)).unwrap(), json!(42));
    }

    #[test]
    fn test_trim_null_passthrough() {
        let f = trim();
        assert_eq!(f(json!(null)).unwrap(), json!(null));
    }

    // === uppercase() / lowercase() ===

    #[test]
    fn test_uppercase_converts_string() {
        let f = uppercase();
        assert_eq!(f(json!("abcDEF")).unwrap(), json!("ABCDEF"));
    }

    #[test]
    fn test_lowercase_converts_string() {
        let f = lowercase();
        assert_eq!(f(json!("Hello@WORLD.com")).unwrap(), json!("hello@world.com"));
    }

    #[test]
    fn test_case_non_string_passthrough() {
        assert_eq!(uppercase()(json!(1)).unwrap(), json!(1));
        assert_eq!(lowercase()(json!(true)).unwrap(), json!(true));
    }

    // === escape() ===

    #[test]
    fn test_escape_replaces_html_characters() {
        let f = escape();
        assert_eq!(
            f(json!("<b>\"Tom & Jerry's\"</b>")).unwrap(),
            json!("&lt;b&gt;&quot;Tom &amp; Jerry&#x27;s&quot;&lt;&#x2F;b&gt;")
        );
    }

    #[test]
    fn test_escape_plain_string_unchanged() {
        let f = escape();
        assert_eq!(f(json!("plain text")).unwrap(), json!("plain text"));
    }

    #[test]
    fn test_escape_non_string_passthrough() {
        let f = escape();
        assert_eq!(f(json!(7)).unwrap(), json!(7));
    }

    // === round_decimals() ===

    #[test]
    fn test_round_decimals_two_places() {
        let f = round_decimals(2);
        assert_eq!(f(json!(3.14159)).unwrap(), json!(3.14));
    }

    #[test]
    fn test_round_decimals_zero_places() {
        let f = round_decimals(0);
        assert_eq!(f(json!(3.7)).unwrap(), json!(4.0));
    }

    #[test]
    fn test_round_decimals_non_number_passthrough() {
        let f = round_decimals(2);
        assert_eq!(f(json!("hello")).unwrap(), json!("hello"));
    }

    // === parse_int() ===

    #[test]
    fn test_parse_int_parses_string() {
        let f = parse_int();
        assert_eq!(f(json!("42")).unwrap(), json!(42));
    }

    #[test]
    fn test_parse_int_trims_before_parsing() {
        let f = parse_int();
        assert_eq!(f(json!(" 7 ")).unwrap(), json!(7));
    }

    #[test]
    fn test_parse_int_integer_passthrough() {
        let f = parse_int();
        assert_eq!(f(json!(13)).unwrap(), json!(13));
    }

    #[test]
    fn test_parse_int_garbage_left_for_validator() {
        let f = parse_int();
        assert_eq!(f(json!("abc")).unwrap(), json!("abc"));
    }
}
