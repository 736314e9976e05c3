//! Reusable field validators
//!
//! Each factory returns a closure compatible with
//! [`FieldRule::validator`](crate::validation::FieldRule::validator). Verdicts
//! follow the engine's rule: only an exact `false` rejects the field.

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;
use uuid::Uuid;

/// Validator: value is an integer number
pub fn is_integer() -> impl Fn(&Value) -> bool + Send + Sync + Clone {
    |value: &Value| value.is_i64() || value.is_u64()
}

/// Validator: value is an array of integers
pub fn all_integers() -> impl Fn(&Value) -> bool + Send + Sync + Clone {
    |value: &Value| {
        value
            .as_array()
            .is_some_and(|items| items.iter().all(|v| v.is_i64() || v.is_u64()))
    }
}

/// Validator: number must be positive
pub fn positive() -> impl Fn(&Value) -> bool + Send + Sync + Clone {
    |value: &Value| value.as_f64().is_none_or(|num| num > 0.0)
}

/// Validator: string length must be within range
pub fn string_length(min: usize, max: usize) -> impl Fn(&Value) -> bool + Send + Sync + Clone {
    move |value: &Value| {
        value
            .as_str()
            .is_none_or(|s| (min..=max).contains(&s.chars().count()))
    }
}

/// Validator: value must be in allowed list
pub fn in_list(allowed: Vec<String>) -> impl Fn(&Value) -> bool + Send + Sync + Clone {
    move |value: &Value| {
        value
            .as_str()
            .is_none_or(|s| allowed.iter().any(|a| a == s))
    }
}

/// Validator: date must match format
pub fn date_format(format: &'static str) -> impl Fn(&Value) -> bool + Send + Sync + Clone {
    move |value: &Value| {
        value
            .as_str()
            .is_none_or(|s| chrono::NaiveDate::parse_from_str(s, format).is_ok())
    }
}

/// Validator: a person's name
///
/// Letters, spaces, commas, periods, apostrophes and hyphens, 2 to 25
/// characters.
pub fn person_name() -> impl Fn(&Value) -> bool + Send + Sync + Clone {
    |value: &Value| {
        static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = NAME_REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z ,.'-]+$").unwrap());

        value.as_str().is_some_and(|s| {
            regex.is_match(s) && (2..=25).contains(&s.chars().count())
        })
    }
}

/// Validator: string is a UUID
pub fn is_uuid() -> impl Fn(&Value) -> bool + Send + Sync + Clone {
    |value: &Value| {
        value
            .as_str()
            .is_some_and(|s| Uuid::parse_str(s).is_ok())
    }
}

/// Validator: string is an email address
pub fn email() -> impl Fn(&Value) -> bool + Send + Sync + Clone {
    |value: &Value| {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
        });

        value.as_str().is_some_and(|s| regex.is_match(s))
    }
}
