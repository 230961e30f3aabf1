//! Endpoint path building for Notion resources.
//!
//! Templates use `{name}` placeholders that are replaced by URL-encoded
//! identifiers. Paths are relative to the `/v1/` prefix that
//! [`NotionClient`](crate::NotionClient) adds.
//!
//! # Example
//!
//! ```rust
//! use notion_api::rest::build_path;
//!
//! let path = build_path("blocks/{block_id}/children", &[("block_id", "a b")]);
//! assert_eq!(path, "blocks/a%20b/children");
//! ```

use crate::rest::errors::{require_non_empty, ResourceError};

/// Builds a path from a template by interpolating URL-encoded IDs.
///
/// Placeholders without a matching ID are left untouched.
#[must_use]
pub fn build_path(template: &str, ids: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &urlencoding::encode(value));
    }

    result
}

/// Validates a single identifier and interpolates it into `template`.
///
/// The placeholder name doubles as the argument name reported on failure.
pub(crate) fn resource_path(
    template: &str,
    argument: &'static str,
    id: &str,
) -> Result<String, ResourceError> {
    require_non_empty(id, argument)?;
    Ok(build_path(template, &[(argument, id)]))
}
