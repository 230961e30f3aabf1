//! Notion resource types.
//!
//! Each module defines a resource shape and the
//! [`NotionClient`](crate::NotionClient) operations that return it:
//!
//! | Resource | Operations |
//! |---|---|
//! | [`Database`] | `retrieve_database`, `query_database`, `list_databases` |
//! | [`Page`] | `retrieve_page`, `create_page`, `update_page_properties` |
//! | [`Block`] | `retrieve_block_children`, `append_block_children` |
//! | [`User`] | `retrieve_user`, `list_all_users` |
//! | [`Object`](crate::rest::Object) | `search` |
//!
//! # Example
//!
//! ```rust,ignore
//! use notion_api::rest::PaginationParams;
//!
//! let children = client
//!     .retrieve_block_children(page_id, &PaginationParams::new().page_size(100))
//!     .await?;
//! for block in children.iter() {
//!     println!("{}", block.plain_text());
//! }
//! ```

mod block;
mod database;
mod kinds;
mod page;
mod property;
mod rich_text;
mod search;
mod timestamp;
mod user;

pub use block::{Block, BlockContent, ChildPageBlock, HeadingBlock, TextBlock, ToDoBlock};
pub use database::Database;
pub use page::{Page, Parent, WorkspaceTag};
pub use property::{
    ExternalFile, FileKind, FileReference, FormulaConfig, FormulaValue, HostedFile, NumberConfig,
    NumberFormat, PageReference, PropertyConfig, PropertyDefinition, PropertyValue,
    PropertyValueKind, RelationConfig, RollupConfig, RollupValue, SelectConfig, SelectOption,
};
pub use rich_text::{
    plain_text, Annotations, Color, DateValue, Equation, Link, Mention, ObjectReference, RichText,
    RichTextContent, Text,
};
pub use user::{Bot, Person, User, UserType};
