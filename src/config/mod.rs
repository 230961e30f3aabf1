//! Configuration types for the Notion API SDK.
//!
//! This module provides the configuration used to construct a
//! [`NotionClient`](crate::NotionClient).
//!
//! # Overview
//!
//! - [`NotionConfig`]: The immutable configuration shared by every request
//! - [`NotionConfigBuilder`]: A builder for constructing [`NotionConfig`] instances
//! - [`ApiToken`]: A validated integration token with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//! - [`ApiVersion`]: The `Notion-Version` header value
//!
//! # Example
//!
//! ```rust
//! use notion_api::{NotionConfig, ApiToken, ApiVersion};
//!
//! let config = NotionConfig::builder()
//!     .token(ApiToken::new("secret_abc").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! assert_eq!(config.base_url().as_ref(), "https://api.notion.com");
//! ```

mod newtypes;
mod version;

use std::time::Duration;

pub use newtypes::{ApiToken, BaseUrl};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for the Notion API SDK.
///
/// Holds the credential, endpoint and version settings. It is captured by the
/// client at construction and never mutated afterwards.
///
/// # Thread Safety
///
/// `NotionConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct NotionConfig {
    token: ApiToken,
    base_url: BaseUrl,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl NotionConfig {
    /// Creates a new builder for constructing a `NotionConfig`.
    #[must_use]
    pub fn builder() -> NotionConfigBuilder {
        NotionConfigBuilder::new()
    }

    /// Shorthand for a configuration with only a token and all defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyToken`] if the token is empty.
    pub fn with_token(token: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder().token(ApiToken::new(token)?).build()
    }

    /// Returns the integration token.
    #[must_use]
    pub const fn token(&self) -> &ApiToken {
        &self.token
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify NotionConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NotionConfig>();
};

/// Builder for constructing [`NotionConfig`] instances.
///
/// `token` is required. Defaults:
///
/// - `base_url`: `https://api.notion.com`
/// - `api_version`: [`ApiVersion::latest()`]
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (no transport-level timeout)
#[derive(Debug, Default)]
pub struct NotionConfigBuilder {
    token: Option<ApiToken>,
    base_url: Option<BaseUrl>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl NotionConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the integration token (required).
    #[must_use]
    pub fn token(mut self, token: ApiToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a timeout applied by the transport to each request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`NotionConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `token` is not set.
    pub fn build(self) -> Result<NotionConfig, ConfigError> {
        let token = self
            .token
            .ok_or(ConfigError::MissingRequiredField { field: "token" })?;

        let api_version = self.api_version.unwrap_or_default();
        if api_version != ApiVersion::latest() {
            tracing::debug!(
                "Notion config overriding default API version {} with {}",
                ApiVersion::latest(),
                api_version
            );
        }

        Ok(NotionConfig {
            token,
            base_url: self.base_url.unwrap_or_default(),
            api_version,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
