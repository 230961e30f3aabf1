//! Cursor pagination for list-returning endpoints.
//!
//! Notion pages through results with an opaque cursor. Each call fetches
//! exactly one page; callers loop on [`Paginated::has_more`] and feed
//! [`Paginated::next_cursor`] back through [`PaginationParams`].
//!
//! # Example
//!
//! ```rust,ignore
//! use notion_api::rest::PaginationParams;
//!
//! let mut params = PaginationParams::new().page_size(100);
//! loop {
//!     let page = client.list_all_users(&params).await?;
//!     for user in page.iter() {
//!         println!("{:?}", user.name);
//!     }
//!     match page.next_params(params.page_size) {
//!         Some(next) => params = next,
//!         None => break,
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::HttpResponse;
use crate::rest::envelope::{FromObject, Object};
use crate::rest::errors::ResourceError;

/// Page size and cursor for one paginated request.
///
/// A `page_size` of 0 leaves the page size to the server. An absent or
/// empty cursor starts from the first page. Neither is sent when unset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PaginationParams {
    /// Maximum number of results to return; 0 means the server default.
    #[serde(skip_serializing_if = "is_zero")]
    pub page_size: u32,
    /// Cursor returned by a previous page.
    #[serde(skip_serializing_if = "is_empty_cursor")]
    pub start_cursor: Option<String>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero(value: &u32) -> bool {
    *value == 0
}

fn is_empty_cursor(cursor: &Option<String>) -> bool {
    cursor.as_deref().map_or(true, str::is_empty)
}

impl PaginationParams {
    /// Creates parameters for the first page with the server's page size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the cursor to resume from.
    #[must_use]
    pub fn start_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.start_cursor = Some(cursor.into());
        self
    }

    /// Returns the parameters as query string pairs for GET endpoints.
    #[must_use]
    pub fn to_query(&self) -> HashMap<String, String> {
        let mut query = HashMap::new();
        if self.page_size > 0 {
            query.insert("page_size".to_string(), self.page_size.to_string());
        }
        if let Some(cursor) = self.start_cursor.as_deref().filter(|c| !c.is_empty()) {
            query.insert("start_cursor".to_string(), cursor.to_string());
        }
        query
    }
}

/// One page of results from a list-returning endpoint.
///
/// Derefs to `[T]`, so the results can be iterated and indexed directly.
#[derive(Clone, Debug)]
pub struct Paginated<T> {
    results: Vec<T>,
    next_cursor: Option<String>,
    has_more: bool,
    request_id: Option<String>,
}

#[derive(Deserialize)]
struct ListBody {
    #[serde(default)]
    results: Vec<Value>,
    #[serde(default)]
    next_cursor: Option<String>,
    #[serde(default)]
    has_more: bool,
}

impl<T> Paginated<T> {
    /// Creates a page from already-decoded results.
    ///
    /// An empty cursor is normalized to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PaginationProtocol`] if `has_more` is set
    /// without a cursor.
    pub fn new(
        results: Vec<T>,
        next_cursor: Option<String>,
        has_more: bool,
    ) -> Result<Self, ResourceError> {
        let next_cursor = next_cursor.filter(|cursor| !cursor.is_empty());
        if has_more && next_cursor.is_none() {
            return Err(ResourceError::PaginationProtocol);
        }
        Ok(Self {
            results,
            next_cursor,
            has_more,
            request_id: None,
        })
    }

    /// Returns the cursor for the next page, if there is one.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref()
    }

    /// Returns `true` if the server has more results past this page.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    /// Returns the `X-Request-Id` of the response, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Returns the parameters that fetch the following page, or `None` on
    /// the last page.
    #[must_use]
    pub fn next_params(&self, page_size: u32) -> Option<PaginationParams> {
        if !self.has_more {
            return None;
        }
        self.next_cursor
            .as_deref()
            .map(|cursor| PaginationParams::new().page_size(page_size).start_cursor(cursor))
    }

    /// Consumes the page and returns the results.
    #[must_use]
    pub fn into_results(self) -> Vec<T> {
        self.results
    }
}

impl<T: FromObject> Paginated<T> {
    /// Decodes a list response, narrowing each entry to `T`.
    ///
    /// Entries of another known kind are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if the body is not a list,
    /// [`ResourceError::MalformedEnvelope`] if an entry cannot be decoded, and
    /// [`ResourceError::PaginationProtocol`] if `has_more` is set without a cursor.
    pub(crate) fn from_response(response: HttpResponse) -> Result<Self, ResourceError> {
        let request_id = response.request_id().map(String::from);
        let body: ListBody = serde_json::from_value(response.body)?;

        let mut results = Vec::with_capacity(body.results.len());
        for value in body.results {
            match T::from_object(Object::from_value(value)?) {
                Ok(item) => results.push(item),
                Err(other) => tracing::warn!(
                    expected = T::EXPECTED,
                    found = %other.kind(),
                    "Skipping list entry of unexpected kind"
                ),
            }
        }

        let mut page = Self::new(results, body.next_cursor, body.has_more)?;
        page.request_id = request_id;
        Ok(page)
    }
}

impl<T> Deref for Paginated<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.results
    }
}

impl<T> IntoIterator for Paginated<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::{Page, User};
    use serde_json::json;

    fn list_response(body: Value) -> HttpResponse {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-1".to_string()]);
        HttpResponse::new(200, headers, body)
    }

    #[test]
    fn test_params_omit_unset_fields() {
        let params = PaginationParams::new();
        assert_eq!(serde_json::to_value(&params).unwrap(), json!({}));
        assert!(params.to_query().is_empty());

        let params = PaginationParams::new().start_cursor("");
        assert_eq!(serde_json::to_value(&params).unwrap(), json!({}));
        assert!(params.to_query().is_empty());
    }

    #[test]
    fn test_params_include_set_fields() {
        let params = PaginationParams::new().page_size(50).start_cursor("abc");
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"page_size": 50, "start_cursor": "abc"})
        );

        let query = params.to_query();
        assert_eq!(query.get("page_size"), Some(&"50".to_string()));
        assert_eq!(query.get("start_cursor"), Some(&"abc".to_string()));
    }

    #[test]
    fn test_has_more_without_cursor_is_protocol_error() {
        let response = list_response(json!({
            "object": "list",
            "results": [],
            "next_cursor": null,
            "has_more": true
        }));
        let result = Paginated::<User>::from_response(response);
        assert!(matches!(result, Err(ResourceError::PaginationProtocol)));

        let result = Paginated::<User>::new(vec![], Some(String::new()), true);
        assert!(matches!(result, Err(ResourceError::PaginationProtocol)));
    }

    #[test]
    fn test_last_page_has_no_next_params() {
        let response = list_response(json!({
            "object": "list",
            "results": [{"object": "user", "id": "u1"}],
            "next_cursor": null,
            "has_more": false
        }));
        let page = Paginated::<User>::from_response(response).unwrap();

        assert_eq!(page.len(), 1);
        assert!(!page.has_more());
        assert!(page.next_cursor().is_none());
        assert!(page.next_params(10).is_none());
        assert_eq!(page.request_id(), Some("req-1"));
    }

    #[test]
    fn test_next_params_carry_cursor() {
        let page = Paginated::new(vec![1, 2], Some("cursor-2".to_string()), true).unwrap();
        let next = page.next_params(2).unwrap();
        assert_eq!(next.page_size, 2);
        assert_eq!(next.start_cursor.as_deref(), Some("cursor-2"));
    }

    #[test]
    fn test_mismatched_kinds_are_skipped() {
        let response = list_response(json!({
            "object": "list",
            "results": [
                {"object": "user", "id": "u1"},
                {"object": "page", "id": "p1", "properties": {}, "parent": {"type": "workspace", "workspace": true}}
            ],
            "has_more": false
        }));
        let page = Paginated::<Page>::from_response(response).unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, "p1");
    }

    #[test]
    fn test_unknown_kind_fails_decoding() {
        let response = list_response(json!({
            "object": "list",
            "results": [{"object": "comment", "id": "c1"}],
            "has_more": false
        }));
        let result = Paginated::<Object>::from_response(response);
        assert!(matches!(result, Err(ResourceError::MalformedEnvelope(_))));
    }

    #[test]
    fn test_non_list_body_fails_decoding() {
        let response = list_response(json!({"results": "nope"}));
        let result = Paginated::<Object>::from_response(response);
        assert!(matches!(result, Err(ResourceError::Decode(_))));
    }
}
