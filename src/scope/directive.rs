//! Directives handed to the data-access layer
//!
//! A [`ScopeDirective`] is an opaque method-invocation descriptor: this crate
//! only produces them in the right order and shape, never executes them. On
//! the wire each directive is `{"method": [name, ...args]}`, the shape the
//! persistence layer dispatches on.

use crate::scope::operator::ComparisonOperator;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use serde_json::{Value, json};
use std::fmt;
use std::str::FromStr;

/// Sort direction for one order entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "ASC", alias = "asc", alias = "Asc")]
    Asc,
    #[serde(rename = "DESC", alias = "desc", alias = "Desc")]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// One instruction for the data-access layer
#[derive(Debug, Clone, PartialEq)]
pub enum ScopeDirective {
    /// Narrow the result set on one field
    Filter {
        field: String,
        value: Value,
        /// Absent for implied equality; the consumer defaults to `eq`
        operator: Option<ComparisonOperator>,
    },

    /// Limit/offset the result set with a deterministic order
    Pagination {
        limit: i64,
        offset: i64,
        order: Vec<(String, SortDirection)>,
    },
}

impl ScopeDirective {
    /// Implied-equality filter directive
    pub fn filter(field: impl Into<String>, value: Value) -> Self {
        ScopeDirective::Filter {
            field: field.into(),
            value,
            operator: None,
        }
    }

    /// Filter directive with an explicit operator
    pub fn filter_with(
        field: impl Into<String>,
        value: Value,
        operator: ComparisonOperator,
    ) -> Self {
        ScopeDirective::Filter {
            field: field.into(),
            value,
            operator: Some(operator),
        }
    }

    /// Pagination directive
    pub fn pagination(limit: i64, offset: i64, order: Vec<(String, SortDirection)>) -> Self {
        ScopeDirective::Pagination {
            limit,
            offset,
            order,
        }
    }

    /// The method name the consumer dispatches on
    pub fn method_name(&self) -> &'static str {
        match self {
            ScopeDirective::Filter { .. } => "filter",
            ScopeDirective::Pagination { .. } => "pagination",
        }
    }

    /// The `[name, ...args]` invocation list
    fn method_args(&self) -> Vec<Value> {
        match self {
            ScopeDirective::Filter {
                field,
                value,
                operator,
            } => {
                let mut args = vec![json!("filter"), json!(field), value.clone()];
                if let Some(op) = operator {
                    args.push(json!(op.as_str()));
                }
                args
            }
            ScopeDirective::Pagination {
                limit,
                offset,
                order,
            } => {
                let order: Vec<Value> = order
                    .iter()
                    .map(|(field, direction)| json!([field, direction.as_str()]))
                    .collect();
                vec![json!("pagination"), json!(limit), json!(offset), json!(order)]
            }
        }
    }
}

impl Serialize for ScopeDirective {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("method", &self.method_args())?;
        map.end()
    }
}
