//! Uniform list-response envelope.
//!
//! List endpoints answer with either a bare JSON array or an object
//! carrying `data` plus explicit `pagination` metadata, depending on the
//! endpoint and API version. This module reshapes both into one envelope
//! so resource services never see the difference.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Page position and total counts for a list response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Total number of items across all pages.
    pub total: u64,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub per_page: u64,
    /// Whether further pages exist.
    pub has_more: bool,
}

impl Pagination {
    /// Defaults synthesized when the upstream response omits pagination.
    fn defaults(total: u64, per_page: u64) -> Self {
        Self {
            total,
            page: 1,
            per_page,
            has_more: false,
        }
    }
}

/// A normalized page of resources.
#[derive(Clone, Debug, Serialize)]
pub struct Page<T> {
    /// The items on this page.
    pub data: Vec<T>,
    /// Pagination metadata, synthesized where the upstream omitted it.
    pub pagination: Pagination,
}

impl<T: DeserializeOwned> Page<T> {
    /// Normalize a parsed list-response body into a page.
    ///
    /// - A bare array of N items becomes a page with
    ///   `total == per_page == N`, `page == 1`, `has_more == false`.
    /// - An object merges its `pagination` fields over those defaults,
    ///   upstream values winning per-field.
    /// - Anything else (null, scalar, missing `data`) becomes an empty
    ///   page; malformed-but-present bodies never raise.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => {
                let data = decode_items(items);
                let n = data.len() as u64;
                Page {
                    data,
                    pagination: Pagination::defaults(n, n),
                }
            }
            Value::Object(mut map) => {
                let items = match map.remove("data") {
                    Some(Value::Array(items)) => items,
                    _ => Vec::new(),
                };
                let data = decode_items(items);
                let n = data.len() as u64;
                let pagination = merge_pagination(map.remove("pagination"), Pagination::defaults(n, n));
                Page { data, pagination }
            }
            _ => Page {
                data: Vec::new(),
                pagination: Pagination::defaults(0, 0),
            },
        }
    }
}

/// Decode list items, dropping any that do not match the resource shape.
fn decode_items<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!(error = %e, "skipping malformed list item");
                None
            }
        })
        .collect()
}

/// Merge upstream pagination over defaults, per-field.
fn merge_pagination(upstream: Option<Value>, defaults: Pagination) -> Pagination {
    let Some(Value::Object(map)) = upstream else {
        return defaults;
    };
    Pagination {
        total: map.get("total").and_then(Value::as_u64).unwrap_or(defaults.total),
        page: map.get("page").and_then(Value::as_u64).unwrap_or(defaults.page),
        per_page: map
            .get("per_page")
            .and_then(Value::as_u64)
            .unwrap_or(defaults.per_page),
        has_more: map
            .get("has_more")
            .and_then(Value::as_bool)
            .unwrap_or(defaults.has_more),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_array_synthesizes_pagination() {
        let page: Page<Value> = Page::from_value(json!([{"id": "a"}, {"id": "b"}]));
        assert_eq!(page.data.len(), 2);
        assert_eq!(
            page.pagination,
            Pagination {
                total: 2,
                page: 1,
                per_page: 2,
                has_more: false
            }
        );
    }

    #[test]
    fn empty_array_is_empty_page() {
        let page: Page<Value> = Page::from_value(json!([]));
        assert!(page.data.is_empty());
        assert_eq!(
            page.pagination,
            Pagination {
                total: 0,
                page: 1,
                per_page: 0,
                has_more: false
            }
        );
    }

    #[test]
    fn partial_pagination_filled_from_defaults() {
        let page: Page<Value> = Page::from_value(json!({
            "data": [{"id": "a"}],
            "pagination": {"total": 40, "has_more": true}
        }));
        assert_eq!(page.pagination.total, 40);
        assert!(page.pagination.has_more);
        // Missing fields come from the synthesized defaults.
        assert_eq!(page.pagination.page, 1);
        assert_eq!(page.pagination.per_page, 1);
    }

    #[test]
    fn upstream_pagination_wins_over_defaults() {
        let page: Page<Value> = Page::from_value(json!({
            "data": [{"id": "a"}, {"id": "b"}],
            "pagination": {"total": 10, "page": 3, "per_page": 2, "has_more": true}
        }));
        assert_eq!(
            page.pagination,
            Pagination {
                total: 10,
                page: 3,
                per_page: 2,
                has_more: true
            }
        );
    }

    #[test]
    fn unexpected_shapes_become_empty_pages() {
        for value in [json!(null), json!(42), json!("nope"), json!({"other": true})] {
            let page: Page<Value> = Page::from_value(value);
            assert!(page.data.is_empty());
            assert_eq!(page.pagination.total, 0);
            assert_eq!(page.pagination.per_page, 0);
        }
    }

    #[test]
    fn malformed_items_are_skipped() {
        #[derive(serde::Deserialize)]
        struct Item {
            id: String,
        }
        let page: Page<Item> = Page::from_value(json!([{"id": "ok"}, 17, {"id": "also-ok"}]));
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].id, "ok");
    }
}
