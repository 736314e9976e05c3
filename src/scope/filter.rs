//! Filter-description compilation
//!
//! A filter description maps field names to either a bare value (implied
//! equality) or a map of operator names to values. Which of the two a field
//! uses is detected structurally: a JSON object is an operator map, anything
//! else (scalar, array, null) is an implied-equality value.

use crate::core::error::IntakeResult;
use crate::scope::directive::ScopeDirective;
use crate::scope::operator::ComparisonOperator;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Ordered filter description, one entry per field
pub type FilterMap = IndexMap<String, FilterValue>;

/// The right-hand side of one filter entry
///
/// Deserialization dispatches structurally: objects become [`Operators`],
/// everything else [`Implied`].
///
/// [`Operators`]: FilterValue::Operators
/// [`Implied`]: FilterValue::Implied
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// Operator map: `{"gte": 100}`
    Operators(IndexMap<String, Value>),
    /// Implied equality: `"active"`, `[1, 2, 3]`, `null`
    Implied(Value),
}

/// Compile a filter description into ordered filter directives
///
/// A nil or empty description compiles to no directives. Entry order and,
/// within an operator map, operator order are preserved in the output. An
/// unsupported operator aborts the whole compilation; no partial directive
/// list is returned.
pub fn compile_filters(filter: Option<&FilterMap>) -> IntakeResult<Vec<ScopeDirective>> {
    let Some(filter) = filter else {
        return Ok(Vec::new());
    };

    let mut directives = Vec::new();
    for (field, operator_value) in filter {
        match operator_value {
            FilterValue::Implied(value) => {
                directives.push(ScopeDirective::filter(field, value.clone()));
            }
            FilterValue::Operators(operators) => {
                for (name, value) in operators {
                    let operator = ComparisonOperator::resolve(name)?;
                    directives.push(ScopeDirective::filter_with(field, value.clone(), operator));
                }
            }
        }
    }

    Ok(directives)
}
