//! Authorization code to access token exchange.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::auth::oauth::OAuthError;
use crate::clients::{HttpError, HttpResponseError};
use crate::config::{ApiToken, BaseUrl};

const AUTHORIZATION_CODE_GRANT_TYPE: &str = "authorization_code";

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    grant_type: &'a str,
    code: &'a str,
    redirect_uri: &'a str,
}

/// The grant returned by a successful code exchange.
///
/// The token is scoped to a single workspace and does not expire.
#[derive(Clone, Deserialize)]
pub struct OAuthAccessToken {
    /// The bearer token for API calls.
    pub access_token: String,
    #[serde(default)]
    pub workspace_name: Option<String>,
    /// URL or emoji of the workspace icon.
    #[serde(default)]
    pub workspace_icon: Option<String>,
    #[serde(default)]
    pub workspace_id: Option<String>,
    /// The bot user representing the integration in this workspace.
    #[serde(default)]
    pub bot_id: Option<String>,
}

impl OAuthAccessToken {
    /// Converts the grant into a validated token for [`NotionConfig`](crate::NotionConfig).
    ///
    /// # Errors
    ///
    /// Returns [`OAuthError::InvalidToken`] if the access token is empty.
    pub fn into_token(self) -> Result<ApiToken, OAuthError> {
        Ok(ApiToken::new(self.access_token)?)
    }
}

impl fmt::Debug for OAuthAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthAccessToken")
            .field("access_token", &"*****")
            .field("workspace_name", &self.workspace_name)
            .field("workspace_icon", &self.workspace_icon)
            .field("workspace_id", &self.workspace_id)
            .field("bot_id", &self.bot_id)
            .finish()
    }
}

/// Exchanges authorization codes for a public integration.
#[derive(Clone)]
pub struct OAuthClient {
    client: reqwest::Client,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    base_url: Option<BaseUrl>,
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthClient>();
    assert_send_sync::<OAuthAccessToken>();
};

impl fmt::Debug for OAuthClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthClient")
            .field("client_id", &self.client_id)
            .field("client_secret", &"*****")
            .field("redirect_uri", &self.redirect_uri)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OAuthClient {
    /// Creates a client for the integration's OAuth credentials.
    ///
    /// `redirect_uri` must match the one used in the authorization request.
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            base_url: None,
        }
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sends requests through a caller-supplied `reqwest::Client`.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Exchanges an authorization code for a workspace access token.
    ///
    /// # Errors
    ///
    /// - [`OAuthError::TokenExchangeFailed`] if Notion rejects the code
    /// - [`OAuthError::Http`] on network failures or an unreadable response
    pub async fn exchange_access_token(&self, code: &str) -> Result<OAuthAccessToken, OAuthError> {
        let base_url = self
            .base_url
            .as_ref()
            .map_or(BaseUrl::DEFAULT, AsRef::as_ref);
        let url = format!("{base_url}/v1/oauth/token");
        let body = TokenRequest {
            grant_type: AUTHORIZATION_CODE_GRANT_TYPE,
            code,
            redirect_uri: &self.redirect_uri,
        };

        tracing::debug!("Exchanging OAuth authorization code at {}", url);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .json(&body)
            .send()
            .await
            .map_err(HttpError::from)?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(HttpError::from)?;

        if !(200..300).contains(&status) {
            return Err(OAuthError::TokenExchangeFailed {
                status,
                message: text,
            });
        }

        match serde_json::from_str(&text) {
            Ok(grant) => Ok(grant),
            Err(_) => Err(HttpError::Response(HttpResponseError {
                code: status,
                body: text,
                request_id: None,
            })
            .into()),
        }
    }
}
