//! The Notion client.
//!
//! [`NotionClient`] wraps the [`HttpClient`](crate::clients::HttpClient) with
//! path normalization and carries every typed resource operation.
//!
//! # Path Normalization
//!
//! Raw paths are relative to the versioned API root:
//!
//! - Leading slashes are stripped: `/users` -> `/v1/users`
//! - An existing `v1/` prefix is kept once: `/v1/search` -> `/v1/search`
//! - Empty paths are rejected before any request is sent

mod client;

pub use client::NotionClient;
