//! HTTP client for Notion API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Notion API.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::NotionConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Notion API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers: bearer token, `Notion-Version`, `Accept` and `User-Agent`
/// - Decoding of structured error bodies
///
/// Every call to [`request`](Self::request) is a single round-trip. There is
/// no retry logic; rate-limited responses surface as errors carrying the
/// server's `Retry-After` delay.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. The wrapped `reqwest::Client` owns the
/// connection pool and is shared by all in-flight requests.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &NotionConfig) -> Result<Self, HttpError> {
        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(config, builder.build()?))
    }

    /// Creates a new HTTP client that sends requests through a caller-supplied
    /// `reqwest::Client`.
    ///
    /// Use this to share a connection pool, route through a proxy, or set
    /// transport options the configuration does not expose. The configured
    /// timeout is not applied to an injected client.
    #[must_use]
    pub fn with_client(config: &NotionConfig, client: reqwest::Client) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Notion API Rust Library v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Notion-Version".to_string(),
            config.api_version().to_string(),
        );
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.token().as_ref()),
        );

        Self {
            client,
            base_uri: config.base_url().as_ref().to_string(),
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the Notion API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error or timeout occurs (`Network`)
    /// - The server answers with status >= 400 (`Api` or `Response`)
    /// - Any other response body is neither empty nor JSON (`InvalidBody`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}", self.base_uri, request.path);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Patch => self.client.patch(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                req_builder = req_builder.header(key, value);
            }
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            "Sending request to Notion API"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        tracing::debug!(status = code, path = %request.path, "Received response from Notion API");

        if code >= 400 {
            let body = serde_json::from_str(&body_text).unwrap_or(serde_json::Value::Null);
            let response = HttpResponse::new(code, res_headers, body);
            if code == 429 {
                tracing::warn!(
                    path = %request.path,
                    retry_after = ?response.retry_after(),
                    "Rate limited by Notion API"
                );
            }
            return Err(response.into_error(body_text));
        }

        let body = if body_text.trim().is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)?
        };

        Ok(HttpResponse::new(code, res_headers, body))
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
