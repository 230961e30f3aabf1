//! OAuth-specific error types.

use crate::clients::HttpError;
use crate::error::ConfigError;
use thiserror::Error;

/// Errors that can occur while exchanging an authorization code.
///
/// # Example
///
/// ```rust
/// use notion_api::auth::oauth::OAuthError;
///
/// let error = OAuthError::TokenExchangeFailed {
///     status: 400,
///     message: "invalid_grant".to_string(),
/// };
/// assert!(error.to_string().contains("invalid_grant"));
/// ```
#[derive(Debug, Error)]
pub enum OAuthError {
    /// The token endpoint answered with a non-success status.
    #[error("Token exchange failed with status {status}: {message}")]
    TokenExchangeFailed {
        /// The HTTP status code returned.
        status: u16,
        /// The response body.
        message: String,
    },

    /// The request could not be sent or the response could not be read.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The token endpoint returned an unusable token.
    #[error("Token exchange returned an invalid token: {0}")]
    InvalidToken(#[from] ConfigError),
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_token_exchange_failed_includes_status_and_message() {
        let error = OAuthError::TokenExchangeFailed {
            status: 401,
            message: "invalid_client".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("invalid_client"));
    }

    #[test]
    fn test_from_http_error_conversion() {
        let http_error = HttpError::Response(HttpResponseError {
            code: 502,
            body: "Bad Gateway".to_string(),
            request_id: None,
        });
        let oauth_error: OAuthError = http_error.into();
        assert!(matches!(oauth_error, OAuthError::Http(_)));
    }

    #[test]
    fn test_invalid_token_wraps_config_error() {
        let error: OAuthError = ConfigError::EmptyToken.into();
        assert!(error.to_string().contains("invalid token"));
    }
}
