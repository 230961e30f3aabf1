//! # Notion API Rust SDK
//!
//! A typed, async client for the Notion REST API.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`NotionConfig`] and [`NotionConfigBuilder`]
//! - Validated newtypes for the integration token and base URL
//! - A [`NotionClient`] with one async method per REST operation
//! - Typed resources (pages, databases, blocks, users) in [`rest::resources`]
//! - A polymorphic [`Object`] envelope for heterogeneous results such as search
//! - Cursor pagination via [`Paginated`] and [`PaginationParams`]
//! - A filter and sort expression tree for database queries in [`rest::query`]
//! - OAuth authorization code exchange for public integrations via [`auth::oauth`]
//!
//! ## Quick Start
//!
//! ```rust
//! use notion_api::{ApiToken, ApiVersion, NotionClient, NotionConfig};
//!
//! let config = NotionConfig::builder()
//!     .token(ApiToken::new("secret_abc").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//!
//! let client = NotionClient::new(&config).unwrap();
//! assert_eq!(client.api_version(), &ApiVersion::latest());
//! ```
//!
//! ## Querying a Database
//!
//! ```rust,ignore
//! use notion_api::rest::query::{Filter, QueryDatabaseParams, Sort, Direction, TextCondition};
//!
//! let mut params = QueryDatabaseParams::new()
//!     .filter(Filter::and(vec![
//!         Filter::text("Name", TextCondition::Contains("Report".to_string())),
//!         Filter::checkbox("Published", notion_api::rest::query::CheckboxCondition::Equals(true)),
//!     ]))
//!     .sort(Sort::by_last_edited_time(Direction::Descending))
//!     .page_size(50);
//!
//! loop {
//!     let page = client.query_database(database_id, &params).await?;
//!     for row in page.iter() {
//!         println!("{:?}", row.title());
//!     }
//!     match page.next_params(50) {
//!         Some(next) => params = params.pagination(next),
//!         None => break,
//!     }
//! }
//! ```
//!
//! ## Error Handling
//!
//! Resource operations return [`ResourceError`]. Not-found and validation
//! failures have their own variants; everything else from the API is
//! available through [`ResourceError::code`]:
//!
//! ```rust,ignore
//! use notion_api::{ErrorCode, ResourceError};
//!
//! match client.retrieve_page(page_id).await {
//!     Ok(page) => println!("{:?}", page.title()),
//!     Err(ResourceError::NotFound { id, .. }) => println!("no page {id}"),
//!     Err(e) if e.code() == Some(ErrorCode::RateLimited) => {
//!         let delay = e.api_error().and_then(|a| a.retry_after);
//!         println!("rate limited, retry after {delay:?}");
//!     }
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and identifiers are validated before any request
//! - **Thread-safe**: Clients and configuration are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **No hidden retries**: Every operation is exactly one round-trip

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiToken, ApiVersion, BaseUrl, NotionConfig, NotionConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, ErrorCode, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, NotionClient, SDK_VERSION,
};

// Re-export resource layer types
pub use rest::{
    EnvelopeError, FromObject, Object, ObjectKind, ObjectsExt, Paginated, PaginationParams,
    ResourceError,
};
