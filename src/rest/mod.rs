//! Typed Notion resources and the machinery to fetch them.
//!
//! - **[`Object`] envelope**: decodes heterogeneous results by their `object` field
//! - **[`Paginated<T>`]**: one page of a cursor-paginated list
//! - **[`query`]**: filter and sort expressions for database queries and search
//! - **[`resources`]**: pages, databases, blocks and users, plus the
//!   [`NotionClient`](crate::NotionClient) operations on each
//! - **[`ResourceError`]**: semantic error type for resource operations
//!
//! # Example
//!
//! ```rust,ignore
//! use notion_api::{NotionClient, NotionConfig};
//! use notion_api::rest::query::{Filter, QueryDatabaseParams, TextCondition};
//!
//! let client = NotionClient::new(&NotionConfig::with_token("secret_abc")?)?;
//!
//! let params = QueryDatabaseParams::new()
//!     .filter(Filter::text("Name", TextCondition::Contains("Report".to_string())))
//!     .page_size(50);
//!
//! let pages = client.query_database("d9824bdc84454327be8b5b47500af6ce", &params).await?;
//! for page in pages.iter() {
//!     println!("{:?}", page.title());
//! }
//! ```

pub mod envelope;
mod errors;
pub mod pagination;
mod path;
pub mod query;
pub mod resources;

use serde::{Deserialize, Serialize};

pub use envelope::{EnvelopeError, FromObject, List, Object, ObjectKind, ObjectsExt};
pub use errors::ResourceError;
pub use pagination::{Paginated, PaginationParams};
pub use path::build_path;

/// A payload-less marker that encodes as `{}`.
///
/// Used where the API signals a setting by the mere presence of a key, such
/// as relative date filters and property kinds without configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Empty {}
