//! Pagination-description compilation

use crate::scope::directive::{ScopeDirective, SortDirection};
use indexmap::IndexMap;

/// Ordered sort description, one entry per field
pub type SortMap = IndexMap<String, SortDirection>;

/// Field appended as the trailing tie-break when the caller did not sort on it
const ID_FIELD: &str = "id";

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_SIZE: i64 = 10;

/// Compile page/size/sort into a single pagination directive
///
/// `limit = size`, `offset = (page - 1) * size`. Negative or zero inputs are
/// not clamped here; sanitization is owned by the caller (see
/// [`QueryParams`](crate::core::query::QueryParams)).
///
/// The compiled order is the sort entries in description order. If the caller
/// did not sort on `id`, an ascending `id` entry is appended; a caller-chosen
/// `id` direction is kept and nothing is appended.
pub fn compile_pagination(
    page: Option<i64>,
    size: Option<i64>,
    sort: Option<&SortMap>,
) -> ScopeDirective {
    let page = page.unwrap_or(DEFAULT_PAGE);
    let size = size.unwrap_or(DEFAULT_SIZE);

    let limit = size;
    let offset = (page - 1) * size;

    let mut order: Vec<(String, SortDirection)> = sort
        .map(|sort| {
            sort.iter()
                .map(|(field, direction)| (field.clone(), *direction))
                .collect()
        })
        .unwrap_or_default();
    // keeps results stable across pages when the requested sort is not decisive
    if sort.is_none_or(|sort| !sort.contains_key(ID_FIELD)) {
        order.push((ID_FIELD.to_string(), SortDirection::Asc));
    }

    ScopeDirective::pagination(limit, offset, order)
}
