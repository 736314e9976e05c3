//! Comparison operators supported by the filter compiler

use crate::core::error::{ConfigError, IntakeError, IntakeResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison semantics a filter directive can carry
///
/// The supported set is closed; resolving any other symbolic name is a
/// configuration error, not a user-input failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonOperator {
    Eq,
    Not,
    Lt,
    Lte,
    Gt,
    Gte,
    In,
}

impl ComparisonOperator {
    /// Resolve a symbolic operator name, failing with `"<name> is not supported"`
    pub fn resolve(name: &str) -> IntakeResult<Self> {
        match name {
            "eq" => Ok(ComparisonOperator::Eq),
            "not" => Ok(ComparisonOperator::Not),
            "lt" => Ok(ComparisonOperator::Lt),
            "lte" => Ok(ComparisonOperator::Lte),
            "gt" => Ok(ComparisonOperator::Gt),
            "gte" => Ok(ComparisonOperator::Gte),
            "in" => Ok(ComparisonOperator::In),
            _ => Err(IntakeError::Config(ConfigError::UnsupportedOperator {
                operator: name.to_string(),
            })),
        }
    }

    /// The lowercase symbolic name
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::Eq => "eq",
            ComparisonOperator::Not => "not",
            ComparisonOperator::Lt => "lt",
            ComparisonOperator::Lte => "lte",
            ComparisonOperator::Gt => "gt",
            ComparisonOperator::Gte => "gte",
            ComparisonOperator::In => "in",
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonOperator {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_supported_operators() {
        let cases = [
            ("eq", ComparisonOperator::Eq),
            ("not", ComparisonOperator::Not),
            ("lt", ComparisonOperator::Lt),
            ("lte", ComparisonOperator::Lte),
            ("gt", ComparisonOperator::Gt),
            ("gte", ComparisonOperator::Gte),
            ("in", ComparisonOperator::In),
        ];
        for (name, expected) in cases {
            assert_eq!(ComparisonOperator::resolve(name).unwrap(), expected);
        }
    }

    #[test]
    fn test_resolve_unsupported_operator() {
        let err = ComparisonOperator::resolve("notSupportedOperator").unwrap_err();
        assert_eq!(err.to_string(), "notSupportedOperator is not supported");
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert!(ComparisonOperator::resolve("EQ").is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&ComparisonOperator::Gte).unwrap();
        assert_eq!(json, "\"gte\"");
        let op: ComparisonOperator = serde_json::from_str(&json).unwrap();
        assert_eq!(op, ComparisonOperator::Gte);
    }

    #[test]
    fn test_display_matches_symbolic_name() {
        assert_eq!(ComparisonOperator::In.to_string(), "in");
    }
}
