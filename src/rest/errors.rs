//! Resource-specific error types for Notion API operations.
//!
//! [`ResourceError`] wraps the transport's [`HttpError`] and adds the
//! failures that are detected locally, before or after the round-trip.
//!
//! # Error Handling
//!
//! The SDK maps Notion error codes to semantic variants:
//!
//! - **`object_not_found`**: [`ResourceError::NotFound`]
//! - **`validation_error`**: [`ResourceError::ValidationFailed`]
//! - **Anything else**: [`ResourceError::Http`]
//!
//! The upstream code stays reachable through [`ResourceError::code`].
//!
//! # Example
//!
//! ```rust,ignore
//! use notion_api::clients::ErrorCode;
//! use notion_api::rest::ResourceError;
//!
//! match client.retrieve_page(page_id).await {
//!     Ok(page) => println!("Found: {:?}", page.title()),
//!     Err(ResourceError::NotFound { resource, id, .. }) => {
//!         println!("{resource} {id} is missing or not shared with the integration");
//!     }
//!     Err(e) if e.code() == Some(ErrorCode::RateLimited) => {
//!         println!("Back off for {:?}", e.api_error().and_then(|a| a.retry_after));
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::{ApiError, ErrorCode, HttpError};
use crate::rest::envelope::EnvelopeError;

/// Error type for Notion resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A required argument was empty. Raised before any network call.
    #[error("Invalid argument: {argument} must not be empty")]
    InvalidArgument {
        /// The name of the offending argument.
        argument: &'static str,
    },

    /// A result object could not be decoded into a known resource shape.
    #[error(transparent)]
    MalformedEnvelope(#[from] EnvelopeError),

    /// The server reported more results without a cursor to fetch them.
    #[error("Pagination protocol violated: has_more is true but next_cursor is empty")]
    PaginationProtocol,

    /// The resource does not exist or is not shared with the integration.
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The type name of the resource (e.g., "Page", "Database").
        resource: &'static str,
        /// The ID that was requested.
        id: String,
        /// The `object_not_found` error returned by the API.
        error: ApiError,
    },

    /// The API rejected the request body.
    #[error("Validation failed: {}", .0.message)]
    ValidationFailed(ApiError),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A successful response did not match the expected resource shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ResourceError {
    /// Maps a transport error onto the semantic variants.
    ///
    /// `object_not_found` becomes [`NotFound`](Self::NotFound) and
    /// `validation_error` becomes [`ValidationFailed`](Self::ValidationFailed);
    /// everything else is kept as [`Http`](Self::Http).
    #[must_use]
    pub fn from_http_error(error: HttpError, resource: &'static str, id: &str) -> Self {
        match error {
            HttpError::Api(api) if api.code == ErrorCode::ObjectNotFound => Self::NotFound {
                resource,
                id: id.to_string(),
                error: api,
            },
            HttpError::Api(api) if api.code == ErrorCode::ValidationError => {
                Self::ValidationFailed(api)
            }
            other => Self::Http(other),
        }
    }

    /// Returns the structured API error behind this error, if any.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::NotFound { error, .. } | Self::ValidationFailed(error) => Some(error),
            Self::Http(HttpError::Api(error)) => Some(error),
            _ => None,
        }
    }

    /// Returns the Notion error code behind this error, if any.
    #[must_use]
    pub fn code(&self) -> Option<ErrorCode> {
        self.api_error().map(|error| error.code)
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Http(HttpError::Response(e)) => e.request_id.as_deref(),
            _ => self.api_error().and_then(|e| e.request_id.as_deref()),
        }
    }
}

/// Rejects empty identifiers before a request is built.
pub(crate) fn require_non_empty(value: &str, argument: &'static str) -> Result<(), ResourceError> {
    if value.trim().is_empty() {
        return Err(ResourceError::InvalidArgument { argument });
    }
    Ok(())
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    fn api_error(status: u16, code: ErrorCode) -> ApiError {
        ApiError {
            status,
            code,
            message: "message".to_string(),
            request_id: Some("req-123".to_string()),
            retry_after: None,
        }
    }

    #[test]
    fn test_object_not_found_maps_to_not_found() {
        let error = ResourceError::from_http_error(
            HttpError::Api(api_error(404, ErrorCode::ObjectNotFound)),
            "Page",
            "abc",
        );

        assert!(matches!(
            &error,
            ResourceError::NotFound { resource: "Page", id, .. } if id == "abc"
        ));
        assert_eq!(error.code(), Some(ErrorCode::ObjectNotFound));
        assert_eq!(error.request_id(), Some("req-123"));
    }

    #[test]
    fn test_validation_error_maps_to_validation_failed() {
        let error = ResourceError::from_http_error(
            HttpError::Api(api_error(400, ErrorCode::ValidationError)),
            "Block",
            "abc",
        );

        assert!(matches!(error, ResourceError::ValidationFailed(_)));
        assert_eq!(error.code(), Some(ErrorCode::ValidationError));
    }

    #[test]
    fn test_other_codes_stay_http() {
        let error = ResourceError::from_http_error(
            HttpError::Api(api_error(429, ErrorCode::RateLimited)),
            "Page",
            "abc",
        );

        assert!(matches!(error, ResourceError::Http(HttpError::Api(_))));
        assert_eq!(error.code(), Some(ErrorCode::RateLimited));
    }

    #[test]
    fn test_unstructured_response_has_no_code() {
        let error = ResourceError::from_http_error(
            HttpError::Response(HttpResponseError {
                code: 502,
                body: "Bad Gateway".to_string(),
                request_id: Some("req-xyz".to_string()),
            }),
            "Page",
            "abc",
        );

        assert!(error.code().is_none());
        assert_eq!(error.request_id(), Some("req-xyz"));
    }

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("abc", "page_id").is_ok());
        assert!(matches!(
            require_non_empty("", "page_id"),
            Err(ResourceError::InvalidArgument { argument: "page_id" })
        ));
        assert!(matches!(
            require_non_empty("   ", "block_id"),
            Err(ResourceError::InvalidArgument { argument: "block_id" })
        ));
    }

    #[test]
    fn test_error_messages() {
        let error = ResourceError::InvalidArgument {
            argument: "database_id",
        };
        assert!(error.to_string().contains("database_id"));

        let error = ResourceError::PaginationProtocol;
        assert!(error.to_string().contains("next_cursor"));
    }
}
