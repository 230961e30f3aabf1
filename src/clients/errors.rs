//! HTTP-specific error types for the Notion API SDK.
//!
//! This module contains error types for HTTP operations: structured API
//! errors decoded from the response body, unstructured error responses,
//! request validation failures and network errors.
//!
//! # Error Handling
//!
//! - [`ApiError`]: A non-2xx response whose body is Notion's `{status, code, message}` JSON
//! - [`HttpResponseError`]: A non-2xx response whose body could not be decoded
//! - [`InvalidHttpRequestError`]: A request that failed validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use notion_api::clients::{ErrorCode, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Api(e)) if e.code == ErrorCode::RateLimited => {
//!         println!("Slow down, retry after {:?}", e.retry_after);
//!     }
//!     Err(HttpError::Api(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The `code` field of a Notion error response.
///
/// Unrecognized codes deserialize as [`ErrorCode::Unknown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request body could not be decoded as JSON.
    InvalidJson,
    /// The request URL is not valid.
    InvalidRequestUrl,
    /// This request is not supported.
    InvalidRequest,
    /// The request body does not match the schema for the expected parameters.
    ValidationError,
    /// The bearer token is not valid.
    Unauthorized,
    /// The token does not have permission to perform this operation.
    RestrictedResource,
    /// The resource does not exist or has not been shared with the integration.
    ObjectNotFound,
    /// The transaction could not be completed, potentially due to a data collision.
    ConflictError,
    /// This request exceeds the number of requests allowed.
    RateLimited,
    /// An unexpected error occurred on the server.
    InternalServerError,
    /// Notion is unavailable or the request took longer than the server timeout.
    ServiceUnavailable,
    /// A code this crate does not know about.
    #[serde(other)]
    Unknown,
}

impl ErrorCode {
    /// Returns the wire representation of this code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidJson => "invalid_json",
            Self::InvalidRequestUrl => "invalid_request_url",
            Self::InvalidRequest => "invalid_request",
            Self::ValidationError => "validation_error",
            Self::Unauthorized => "unauthorized",
            Self::RestrictedResource => "restricted_resource",
            Self::ObjectNotFound => "object_not_found",
            Self::ConflictError => "conflict_error",
            Self::RateLimited => "rate_limited",
            Self::InternalServerError => "internal_server_error",
            Self::ServiceUnavailable => "service_unavailable",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured error returned by the Notion API.
///
/// Any response with status >= 400 and a JSON body of the form
/// `{"status": 404, "code": "object_not_found", "message": "..."}`
/// is decoded into this type.
///
/// # Example
///
/// ```rust
/// use notion_api::clients::{ApiError, ErrorCode};
///
/// let error: ApiError = serde_json::from_str(
///     r#"{"object":"error","status":429,"code":"rate_limited","message":"Slow down"}"#,
/// ).unwrap();
/// assert_eq!(error.code, ErrorCode::RateLimited);
/// assert!(error.to_string().contains("Slow down"));
/// ```
#[derive(Clone, Debug, Error, PartialEq, Serialize, Deserialize)]
#[error("{code} ({status}): {message}")]
pub struct ApiError {
    /// The HTTP status echoed in the body.
    #[serde(default)]
    pub status: u16,
    /// The machine-readable error code.
    pub code: ErrorCode,
    /// The human-readable message.
    #[serde(default)]
    pub message: String,
    /// Request identifier for support, when the server provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Delay suggested by the `Retry-After` header on rate-limited responses.
    #[serde(skip)]
    pub retry_after: Option<Duration>,
}

/// Error returned when a non-successful response body is not Notion's
/// structured error JSON.
///
/// The raw body text is preserved so it can still be logged.
#[derive(Debug, Error)]
#[error("HTTP {code}: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
    /// Request ID from the `x-request-id` header, if present.
    pub request_id: Option<String>,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path does not start with the API prefix.
    #[error("Invalid request path '{path}'. Paths must start with '/v1/'.")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A structured API error (status >= 400 with a JSON error body).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A non-2xx response whose body was not a structured error.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network, connection or timeout error from the transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A successful response body could not be decoded as JSON.
    #[error("Invalid JSON in response body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

impl HttpError {
    /// Returns the structured API error, if this is one.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the HTTP status code when the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status),
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
