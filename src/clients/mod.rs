//! HTTP client types for Notion API communication.
//!
//! This module provides the transport layer for making authenticated
//! requests to the Notion API and the resource client built on top of it.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH)
//! - [`ApiError`] / [`ErrorCode`]: Notion's structured error body
//! - [`rest::NotionClient`]: One async method per Notion REST operation
//!
//! # Example
//!
//! ```rust,ignore
//! use notion_api::{HttpClient, HttpRequest, HttpMethod, NotionConfig};
//!
//! let config = NotionConfig::with_token("secret_abc")?;
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/v1/users")
//!     .query_param("page_size", "10")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Every request is attempted exactly once. A `rate_limited` error
//! carries the `Retry-After` delay in [`ApiError::retry_after`] so callers can
//! schedule their own retry.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{ApiError, ErrorCode, HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use rest::NotionClient;
