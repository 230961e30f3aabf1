//! OAuth 2.0 authorization code exchange for public integrations.
//!
//! After the user approves the integration, Notion redirects to the
//! integration's redirect URI with a `code` query parameter. Exchange that
//! code for a workspace token with [`OAuthClient::exchange_access_token`] and
//! build a [`NotionConfig`](crate::NotionConfig) from it.
//!
//! # Example
//!
//! ```rust,ignore
//! use notion_api::auth::oauth::OAuthClient;
//! use notion_api::{NotionClient, NotionConfig};
//!
//! let oauth = OAuthClient::new("client-id", "client-secret", "https://example.com/callback");
//! let grant = oauth.exchange_access_token(&code).await?;
//! println!("Connected to {}", grant.workspace_name.as_deref().unwrap_or("workspace"));
//!
//! let config = NotionConfig::builder().token(grant.into_token()?).build()?;
//! let client = NotionClient::new(&config)?;
//! ```

mod error;
mod token_exchange;

pub use error::OAuthError;
pub use token_exchange::{OAuthAccessToken, OAuthClient};
