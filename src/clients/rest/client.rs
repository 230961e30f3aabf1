//! The Notion API client.

use std::collections::HashMap;

use crate::clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, InvalidHttpRequestError,
};
use crate::config::{ApiVersion, NotionConfig};

/// Client for the Notion API.
///
/// Typed operations such as `retrieve_page` or `query_database` are defined
/// next to the resources they return, in [`crate::rest::resources`]. The
/// raw [`get`](Self::get), [`post`](Self::post) and [`patch`](Self::patch)
/// methods are available for endpoints this crate does not model.
///
/// # Thread Safety
///
/// `NotionClient` is `Send + Sync`, making it safe to share across async tasks.
/// Clone it cheaply or wrap it in an `Arc`.
///
/// # Example
///
/// ```rust,ignore
/// use notion_api::{NotionClient, NotionConfig};
///
/// let config = NotionConfig::with_token("secret_abc")?;
/// let client = NotionClient::new(&config)?;
///
/// let page = client.retrieve_page("b55c9c91-384d-452b-81db-d1ef79372b75").await?;
/// println!("{:?}", page.title());
///
/// // Raw access
/// let response = client.get("users/me", None).await?;
/// println!("{}", response.body);
/// ```
#[derive(Debug, Clone)]
pub struct NotionClient {
    http_client: HttpClient,
    api_version: ApiVersion,
}

// Verify NotionClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NotionClient>();
};

impl NotionClient {
    /// Creates a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the transport cannot be initialized.
    pub fn new(config: &NotionConfig) -> Result<Self, HttpError> {
        let http_client = HttpClient::new(config)?;
        Ok(Self::from_parts(config, http_client))
    }

    /// Creates a client that sends requests through a caller-supplied
    /// `reqwest::Client`.
    #[must_use]
    pub fn with_http_client(config: &NotionConfig, client: reqwest::Client) -> Self {
        Self::from_parts(config, HttpClient::with_client(config, client))
    }

    fn from_parts(config: &NotionConfig, http_client: HttpClient) -> Self {
        let api_version = config.api_version().clone();
        if api_version != ApiVersion::latest() {
            tracing::debug!(
                "Notion client overriding default API version {} with {}",
                ApiVersion::latest(),
                api_version
            );
        }
        Self {
            http_client,
            api_version,
        }
    }

    /// Returns the API version sent with every request.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Sends a GET request.
    ///
    /// `path` is relative to `/v1/`; a leading `/` or `/v1/` is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] for an empty path, and any
    /// transport or API error from [`HttpClient::request`].
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] for an empty path, and any
    /// transport or API error from [`HttpClient::request`].
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Post, path, Some(body), None)
            .await
    }

    /// Sends a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] for an empty path, and any
    /// transport or API error from [`HttpClient::request`].
    pub async fn patch(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Patch, path, Some(body), None)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        if let Some(query) = query {
            builder = builder.query(query);
        }

        self.http_client.request(builder.build()?).await
    }
}

/// Turns `pages/abc`, `/pages/abc` or `/v1/pages/abc` into `/v1/pages/abc`.
fn normalize_path(path: &str) -> Result<String, InvalidHttpRequestError> {
    let path = path.trim_start_matches('/');
    let path = path.strip_prefix("v1/").unwrap_or(path);
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        return Err(InvalidHttpRequestError::InvalidPath {
            path: String::new(),
        });
    }

    Ok(format!("/v1/{path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BaseUrl;

    fn create_test_config() -> NotionConfig {
        NotionConfig::with_token("secret_test").unwrap()
    }

    #[test]
    fn test_normalize_path_adds_prefix() {
        assert_eq!(normalize_path("pages/abc").unwrap(), "/v1/pages/abc");
    }

    #[test]
    fn test_normalize_path_strips_leading_slash() {
        assert_eq!(normalize_path("/users").unwrap(), "/v1/users");
        assert_eq!(normalize_path("//users").unwrap(), "/v1/users");
    }

    #[test]
    fn test_normalize_path_keeps_existing_prefix() {
        assert_eq!(normalize_path("/v1/search").unwrap(), "/v1/search");
        assert_eq!(normalize_path("v1/search").unwrap(), "/v1/search");
    }

    #[test]
    fn test_normalize_path_empty_path_returns_error() {
        for path in ["", "/", "/v1/"] {
            let result = normalize_path(path);
            assert!(
                matches!(result, Err(InvalidHttpRequestError::InvalidPath { ref path }) if path.is_empty()),
                "{path:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_client_uses_configured_version() {
        let config = NotionConfig::builder()
            .token(crate::config::ApiToken::new("secret_test").unwrap())
            .api_version(ApiVersion::V2021_08_16)
            .base_url(BaseUrl::new("http://localhost:1234").unwrap())
            .build()
            .unwrap();
        let client = NotionClient::new(&config).unwrap();
        assert_eq!(client.api_version(), &ApiVersion::V2021_08_16);
    }

    #[test]
    fn test_client_defaults_to_latest_version() {
        let client = NotionClient::new(&create_test_config()).unwrap();
        assert_eq!(client.api_version(), &ApiVersion::latest());
    }

    #[tokio::test]
    async fn test_empty_path_fails_before_sending() {
        let client = NotionClient::new(&create_test_config()).unwrap();
        let result = client.get("", None).await;
        assert!(matches!(result, Err(HttpError::InvalidRequest(_))));
    }
}
