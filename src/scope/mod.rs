//! Declarative query-scope compilation
//!
//! Turns a generic filter/sort/page description into an ordered list of
//! [`ScopeDirective`]s for the data-access layer. The engine only shapes and
//! orders the directives; executing them is the consumer's job.

pub mod directive;
pub mod filter;
pub mod operator;
pub mod pagination;

pub use directive::{ScopeDirective, SortDirection};
pub use filter::{FilterMap, FilterValue, compile_filters};
pub use operator::ComparisonOperator;
pub use pagination::{SortMap, compile_pagination};

use crate::core::error::IntakeResult;

/// Compile filters and pagination into one ordered directive list
///
/// Filter directives always precede the single pagination directive; the
/// persistence layer relies on narrowing before paging.
pub fn compile_scopes(
    filter: Option<&FilterMap>,
    sort: Option<&SortMap>,
    page: Option<i64>,
    size: Option<i64>,
) -> IntakeResult<Vec<ScopeDirective>> {
    let mut scopes = compile_filters(filter)?;
    scopes.push(compile_pagination(page, size, sort));
    Ok(scopes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_compile_to_pagination_only() {
        let scopes = compile_scopes(None, None, None, None).unwrap();

        assert_eq!(
            serde_json::to_value(&scopes).unwrap(),
            json!([{ "method": ["pagination", 10, 0, [["id", "ASC"]]] }])
        );
    }

    #[test]
    fn test_filters_precede_pagination() {
        let filter: FilterMap =
            serde_json::from_str(r#"{ "field1": { "eq": "value1" }, "field2": { "eq": "value2" } }"#)
                .unwrap();
        let sort: SortMap = serde_json::from_str(r#"{ "id": "desc" }"#).unwrap();

        let scopes = compile_scopes(Some(&filter), Some(&sort), Some(2), Some(10)).unwrap();

        assert_eq!(
            serde_json::to_value(&scopes).unwrap(),
            json!([
                { "method": ["filter", "field1", "value1", "eq"] },
                { "method": ["filter", "field2", "value2", "eq"] },
                { "method": ["pagination", 10, 10, [["id", "DESC"]]] },
            ])
        );
    }

    #[test]
    fn test_unsupported_operator_propagates() {
        let filter: FilterMap =
            serde_json::from_str(r#"{ "field1": { "around": "value1" } }"#).unwrap();

        let err = compile_scopes(Some(&filter), None, None, None).unwrap_err();

        assert_eq!(err.to_string(), "around is not supported");
    }
}
