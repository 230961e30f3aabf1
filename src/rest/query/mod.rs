//! Request bodies for structured queries.
//!
//! - [`QueryDatabaseParams`]: filter, sorts and pagination for
//!   [`query_database`](crate::NotionClient::query_database)
//! - [`SearchParams`]: text query, object-kind filter and a single
//!   `last_edited_time` sort for [`search`](crate::NotionClient::search)
//!
//! Unset fields are omitted from the encoded body.
//!
//! # Example
//!
//! ```rust
//! use notion_api::rest::query::{Direction, Filter, QueryDatabaseParams, Sort, TextCondition};
//! use serde_json::json;
//!
//! let params = QueryDatabaseParams::new()
//!     .filter(Filter::text("Name", TextCondition::Contains("Report".to_string())))
//!     .sort(Sort::by_last_edited_time(Direction::Descending))
//!     .page_size(50);
//!
//! assert_eq!(
//!     serde_json::to_value(&params).unwrap(),
//!     json!({
//!         "filter": {"property": "Name", "text": {"contains": "Report"}},
//!         "sorts": [{"timestamp": "last_edited_time", "direction": "descending"}],
//!         "page_size": 50
//!     })
//! );
//! ```

mod filter;
mod sort;

use serde::Serialize;

pub use filter::{
    CheckboxCondition, DateCondition, DateOrDateTime, FilesCondition, Filter, FormulaCondition,
    MultiSelectCondition, NumberCondition, PeopleCondition, PropertyCondition, RelationCondition,
    SelectCondition, TextCondition,
};
pub use sort::{Direction, Sort, Timestamp};

use crate::rest::pagination::PaginationParams;

/// Body of a database query.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct QueryDatabaseParams {
    /// Restricts the returned pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    /// Sort keys, applied in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<Sort>,
    /// Page size and cursor.
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl QueryDatabaseParams {
    /// Creates an unfiltered, unsorted query for the first page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the filter.
    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Appends a sort key.
    #[must_use]
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sorts.push(sort);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.pagination.page_size = page_size;
        self
    }

    /// Sets the cursor to resume from.
    #[must_use]
    pub fn start_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.pagination.start_cursor = Some(cursor.into());
        self
    }

    /// Replaces the pagination parameters.
    #[must_use]
    pub fn pagination(mut self, pagination: PaginationParams) -> Self {
        self.pagination = pagination;
        self
    }
}

/// The only sort search supports: by `last_edited_time`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SearchSort {
    /// Sort order.
    pub direction: Direction,
    timestamp: Timestamp,
}

impl SearchSort {
    /// Sorts search results by `last_edited_time` in `direction`.
    #[must_use]
    pub const fn last_edited_time(direction: Direction) -> Self {
        Self {
            direction,
            timestamp: Timestamp::LastEditedTime,
        }
    }
}

/// Object kinds search can be restricted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchObjectKind {
    Page,
    Database,
}

/// Restricts search results to one object kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SearchFilter {
    property: &'static str,
    /// The kind to keep.
    pub value: SearchObjectKind,
}

impl SearchFilter {
    /// Keeps only pages.
    #[must_use]
    pub const fn pages() -> Self {
        Self {
            property: "object",
            value: SearchObjectKind::Page,
        }
    }

    /// Keeps only databases.
    #[must_use]
    pub const fn databases() -> Self {
        Self {
            property: "object",
            value: SearchObjectKind::Database,
        }
    }
}

/// Body of a search request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    /// Matched against page and database titles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Result order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SearchSort>,
    /// Object-kind restriction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<SearchFilter>,
    /// Page size and cursor.
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl SearchParams {
    /// Creates a search over everything shared with the integration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text query.
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Sets the sort.
    #[must_use]
    pub const fn sort(mut self, sort: SearchSort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Sets the object-kind filter.
    #[must_use]
    pub const fn filter(mut self, filter: SearchFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.pagination.page_size = page_size;
        self
    }

    /// Sets the cursor to resume from.
    #[must_use]
    pub fn start_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.pagination.start_cursor = Some(cursor.into());
        self
    }
}
