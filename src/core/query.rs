//! Query parameters and their translation into scopes
//!
//! This structure is the upstream boundary: it deserializes from a URL query
//! string, sanitizes page and size, and hands the parsed pieces to the scope
//! compilers. It is also where input clamping lives; the compilers
//! themselves never correct their inputs.
//!
//! # Example
//! ```rust,ignore
//! // In handler:
//! pub async fn list_items(
//!     Query(params): Query<QueryParams>,
//! ) -> Result<Json<Vec<Item>>, IntakeError> {
//!     let scopes = params.scopes()?;
//!     // hand scopes to the data-access layer
//! }
//!
//! // Usage:
//! GET /items?page=2&size=10
//! GET /items?filter={"status":{"eq":"active"}}&sort=rank:asc,id:desc
//! ```

use crate::core::error::IntakeResult;
use crate::scope::{FilterMap, ScopeDirective, SortMap, compile_scopes};
use serde::Deserialize;

/// Query parameters for pagination, sorting and filtering
///
/// All parameters have defaults, so the struct deserializes from any query
/// string.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    /// Page number (starts at 1)
    #[serde(default = "default_page")]
    pub page: i64,

    /// Number of items per page
    #[serde(default = "default_size")]
    pub size: i64,

    /// Filters as a JSON object
    ///
    /// # Format
    /// - Implied equality: `{"field": "value"}`
    /// - Explicit operator: `{"field": {"gte": 100}}`
    pub filter: Option<String>,

    /// Sort fields and directions
    ///
    /// # Format
    /// `field:asc` or `field` (ascending), `field:desc` (descending),
    /// comma-separated for multiple fields: `rank:desc,name`
    pub sort: Option<String>,
}

fn default_page() -> i64 {
    1
}

fn default_size() -> i64 {
    10
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            size: default_size(),
            filter: None,
            sort: None,
        }
    }
}

impl QueryParams {
    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> i64 {
        self.page.max(1)
    }

    /// Get size, ensuring it doesn't exceed the maximum
    pub fn size(&self) -> i64 {
        self.size.clamp(1, 100) // Maximum 100 per page, minimum 1
    }

    /// Parse the filter string into a filter description
    ///
    /// An unparsable filter is ignored rather than rejected.
    pub fn filter_map(&self) -> Option<FilterMap> {
        self.filter
            .as_ref()
            .and_then(|s| serde_json::from_str(s).ok())
    }

    /// Parse the sort string into a sort description
    ///
    /// Entries that do not parse are skipped; a missing direction means
    /// ascending.
    pub fn sort_map(&self) -> SortMap {
        let mut sort = SortMap::new();
        let Some(raw) = self.sort.as_ref() else {
            return sort;
        };

        for entry in raw.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            match entry.split_once(':') {
                None => {
                    sort.insert(entry.to_string(), crate::scope::SortDirection::Asc);
                }
                Some((field, direction)) => {
                    if let Ok(direction) = direction.trim().parse() {
                        sort.insert(field.trim().to_string(), direction);
                    }
                }
            }
        }

        sort
    }

    /// Compile these parameters into an ordered directive list
    pub fn scopes(&self) -> IntakeResult<Vec<ScopeDirective>> {
        compile_scopes(
            self.filter_map().as_ref(),
            Some(&self.sort_map()),
            Some(self.page()),
            Some(self.size()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::SortDirection;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let params = QueryParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.size(), 10);
        assert!(params.filter_map().is_none());
        assert!(params.sort_map().is_empty());
    }

    #[test]
    fn test_page_and_size_are_clamped() {
        let params = QueryParams {
            page: -2,
            size: 5000,
            ..QueryParams::default()
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.size(), 100);

        let params = QueryParams {
            size: 0,
            ..QueryParams::default()
        };
        assert_eq!(params.size(), 1);
    }

    #[test]
    fn test_filter_map_parses_json_object() {
        let params = QueryParams {
            filter: Some(r#"{"status":{"eq":"active"},"name":"Acme"}"#.to_string()),
            ..QueryParams::default()
        };

        let filter = params.filter_map().unwrap();
        assert_eq!(filter.len(), 2);
        assert_eq!(filter.get_index(0).unwrap().0, "status");
    }

    #[test]
    fn test_filter_map_ignores_garbage() {
        let params = QueryParams {
            filter: Some("{not json".to_string()),
            ..QueryParams::default()
        };
        assert!(params.filter_map().is_none());
    }

    #[test]
    fn test_sort_map_parses_entries_in_order() {
        let params = QueryParams {
            sort: Some("rank:desc,name,created_at:ASC".to_string()),
            ..QueryParams::default()
        };

        let sort = params.sort_map();
        let entries: Vec<_> = sort
            .iter()
            .map(|(field, direction)| (field.as_str(), *direction))
            .collect();
        assert_eq!(
            entries,
            vec![
                ("rank", SortDirection::Desc),
                ("name", SortDirection::Asc),
                ("created_at", SortDirection::Asc),
            ]
        );
    }

    #[test]
    fn test_sort_map_skips_malformed_entries() {
        let params = QueryParams {
            sort: Some("rank:sideways,,name:asc".to_string()),
            ..QueryParams::default()
        };

        let sort = params.sort_map();
        assert_eq!(sort.len(), 1);
        assert!(sort.contains_key("name"));
    }

    #[test]
    fn test_scopes_end_to_end() {
        let params = QueryParams {
            page: 2,
            size: 5,
            filter: Some(r#"{"status":{"eq":"active"}}"#.to_string()),
            sort: Some("id:desc".to_string()),
        };

        let scopes = params.scopes().unwrap();

        assert_eq!(
            serde_json::to_value(&scopes).unwrap(),
            json!([
                { "method": ["filter", "status", "active", "eq"] },
                { "method": ["pagination", 5, 5, [["id", "DESC"]]] },
            ])
        );
    }
}
