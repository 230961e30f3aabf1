//! Authentication for public Notion integrations.
//!
//! Internal integrations authenticate with a static token passed to
//! [`NotionConfig`](crate::NotionConfig). Public integrations obtain a token
//! per workspace through the OAuth authorization code flow in [`oauth`].

pub mod oauth;
