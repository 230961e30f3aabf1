//! Page resource and its operations.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use notion_api::rest::resources::{Block, Parent, PropertyValue};
//!
//! let mut properties = HashMap::new();
//! properties.insert("Name".to_string(), PropertyValue::title("Weekly sync"));
//!
//! let page = client
//!     .create_page(
//!         Parent::database("d9824bdc84454327be8b5b47500af6ce"),
//!         properties,
//!         vec![Block::paragraph("Agenda")],
//!     )
//!     .await?;
//! println!("Created {}", page.id);
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::NotionClient;
use crate::rest::envelope::PageTag;
use crate::rest::errors::{require_non_empty, ResourceError};
use crate::rest::path::resource_path;
use crate::rest::resources::property::{title_of, PropertyValue};
use crate::rest::resources::Block;

/// A Notion page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Always `"page"`.
    #[serde(default)]
    pub object: PageTag,
    /// The page id.
    pub id: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::rest::resources::timestamp::option::serialize"
    )]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::rest::resources::timestamp::option::serialize"
    )]
    pub last_edited_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Property values keyed by property name.
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
    /// Where the page lives.
    pub parent: Parent,
    /// Fields this crate does not model, such as `icon` or `cover`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Page {
    /// Returns the plain text of the page's title property, if it has one.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        title_of(&self.properties)
    }
}

/// The container of a page: a database, another page, or the workspace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Parent {
    DatabaseId { database_id: String },
    PageId { page_id: String },
    Workspace { workspace: WorkspaceTag },
}

/// The `"workspace": true` marker of a workspace parent.
///
/// Encodes only as `true` and only decodes from `true`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WorkspaceTag;

impl Serialize for WorkspaceTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(true)
    }
}

impl<'de> Deserialize<'de> for WorkspaceTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if bool::deserialize(deserializer)? {
            Ok(Self)
        } else {
            Err(de::Error::invalid_value(de::Unexpected::Bool(false), &"true"))
        }
    }
}

impl Parent {
    /// A database parent.
    #[must_use]
    pub fn database(database_id: impl Into<String>) -> Self {
        Self::DatabaseId {
            database_id: database_id.into(),
        }
    }

    /// A page parent.
    #[must_use]
    pub fn page(page_id: impl Into<String>) -> Self {
        Self::PageId {
            page_id: page_id.into(),
        }
    }

    /// The workspace parent.
    #[must_use]
    pub const fn workspace() -> Self {
        Self::Workspace {
            workspace: WorkspaceTag,
        }
    }

    /// Returns the parent id, or `None` for the workspace.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::DatabaseId { database_id } => Some(database_id),
            Self::PageId { page_id } => Some(page_id),
            Self::Workspace { .. } => None,
        }
    }
}

#[derive(Serialize)]
struct CreatePageBody {
    parent: Parent,
    properties: HashMap<String, PropertyValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Block>,
}

#[derive(Serialize)]
struct UpdatePageBody {
    properties: HashMap<String, PropertyValue>,
}

impl NotionClient {
    /// Retrieves a page by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidArgument`] for an empty id,
    /// [`ResourceError::NotFound`] for `object_not_found`, and
    /// [`ResourceError::Http`] for other failures.
    pub async fn retrieve_page(&self, page_id: &str) -> Result<Page, ResourceError> {
        let path = resource_path("pages/{page_id}", "page_id", page_id)?;
        let response = self
            .get(&path, None)
            .await
            .map_err(|e| ResourceError::from_http_error(e, "Page", page_id))?;
        Ok(serde_json::from_value(response.body)?)
    }

    /// Creates a page under `parent`, optionally with initial content.
    ///
    /// `children` is omitted from the request when empty.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidArgument`] if the parent id is empty,
    /// [`ResourceError::ValidationFailed`] if the API rejects the body, and
    /// [`ResourceError::Http`] for other failures.
    pub async fn create_page(
        &self,
        parent: Parent,
        properties: HashMap<String, PropertyValue>,
        children: Vec<Block>,
    ) -> Result<Page, ResourceError> {
        if let Some(parent_id) = parent.id() {
            require_non_empty(parent_id, "parent")?;
        }
        let parent_id = parent.id().unwrap_or_default().to_string();

        let body = serde_json::to_value(CreatePageBody {
            parent,
            properties,
            children,
        })?;
        let response = self
            .post("pages", body)
            .await
            .map_err(|e| ResourceError::from_http_error(e, "Parent", &parent_id))?;
        Ok(serde_json::from_value(response.body)?)
    }

    /// Updates the given properties of a page, leaving the others unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidArgument`] for an empty id,
    /// [`ResourceError::NotFound`], [`ResourceError::ValidationFailed`], or
    /// [`ResourceError::Http`].
    pub async fn update_page_properties(
        &self,
        page_id: &str,
        properties: HashMap<String, PropertyValue>,
    ) -> Result<Page, ResourceError> {
        let path = resource_path("pages/{page_id}", "page_id", page_id)?;
        let body = serde_json::to_value(UpdatePageBody { properties })?;
        let response = self
            .patch(&path, body)
            .await
            .map_err(|e| ResourceError::from_http_error(e, "Page", page_id))?;
        Ok(serde_json::from_value(response.body)?)
    }
}
