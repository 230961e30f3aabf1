//! HTTP response types for the Notion API SDK.
//!
//! This module provides the [`HttpResponse`] type for accessing the status,
//! headers and decoded JSON body of an API response.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::{ApiError, HttpResponseError};

/// An HTTP response from the Notion API.
///
/// Header names are stored lowercase; a header may carry multiple values.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of the given (lowercase) header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the delay requested by the `Retry-After` header, if present.
    ///
    /// Notion sends this on `rate_limited` responses; the value is in seconds.
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        self.header("retry-after")
            .and_then(|value| value.trim().parse::<f64>().ok())
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
    }

    /// Converts an unsuccessful response into the matching error.
    ///
    /// A body shaped like Notion's error JSON yields an [`ApiError`]; anything
    /// else yields an [`HttpResponseError`] carrying the raw text.
    pub(crate) fn into_error(self, raw_body: String) -> crate::clients::HttpError {
        let request_id = self.request_id().map(String::from);
        let retry_after = self.retry_after();

        match serde_json::from_value::<ApiError>(self.body) {
            Ok(mut error) => {
                if error.status == 0 {
                    error.status = self.code;
                }
                if error.request_id.is_none() {
                    error.request_id = request_id;
                }
                error.retry_after = retry_after;
                error.into()
            }
            Err(_) => HttpResponseError {
                code: self.code,
                body: raw_body,
                request_id,
            }
            .into(),
        }
    }
}
