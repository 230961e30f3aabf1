//! Database resource and its operations.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::NotionClient;
use crate::rest::envelope::DatabaseTag;
use crate::rest::errors::ResourceError;
use crate::rest::pagination::{Paginated, PaginationParams};
use crate::rest::path::resource_path;
use crate::rest::query::QueryDatabaseParams;
use crate::rest::resources::property::PropertyDefinition;
use crate::rest::resources::rich_text::{plain_text, RichText};
use crate::rest::resources::Page;

/// A Notion database: a schema plus the pages stored in it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Database {
    /// Always `"database"`.
    #[serde(default)]
    pub object: DatabaseTag,
    /// The database id.
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
    pub title: Vec<RichText>,
    /// The schema, keyed by property name.
    #[serde(default)]
    pub properties: HashMap<String, PropertyDefinition>,
    /// Fields this crate does not model, such as `parent` or `icon`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Database {
    /// Returns the plain text of the database title.
    #[must_use]
    pub fn title_text(&self) -> String {
        plain_text(&self.title)
    }
}

impl NotionClient {
    /// Retrieves a database schema by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidArgument`] for an empty id,
    /// [`ResourceError::NotFound`] for `object_not_found`, and
    /// [`ResourceError::Http`] for other failures.
    pub async fn retrieve_database(&self, database_id: &str) -> Result<Database, ResourceError> {
        let path = resource_path("databases/{database_id}", "database_id", database_id)?;
        let response = self
            .get(&path, None)
            .await
            .map_err(|e| ResourceError::from_http_error(e, "Database", database_id))?;
        Ok(serde_json::from_value(response.body)?)
    }

    /// Queries the pages of a database.
    ///
    /// Filter and sorts are optional; unset keys are left out of the body.
    /// Pagination parameters travel in the body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidArgument`] for an empty id,
    /// [`ResourceError::NotFound`], [`ResourceError::ValidationFailed`] for a
    /// filter the schema does not support, [`ResourceError::PaginationProtocol`],
    /// or [`ResourceError::Http`].
    pub async fn query_database(
        &self,
        database_id: &str,
        params: &QueryDatabaseParams,
    ) -> Result<Paginated<Page>, ResourceError> {
        let path = resource_path("databases/{database_id}/query", "database_id", database_id)?;
        let body = serde_json::to_value(params)?;
        let response = self
            .post(&path, body)
            .await
            .map_err(|e| ResourceError::from_http_error(e, "Database", database_id))?;
        Paginated::from_response(response)
    }

    /// Lists the databases shared with the integration.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PaginationProtocol`] or [`ResourceError::Http`].
    pub async fn list_databases(
        &self,
        params: &PaginationParams,
    ) -> Result<Paginated<Database>, ResourceError> {
        let response = self.get("databases", Some(params.to_query())).await?;
        Paginated::from_response(response)
    }
}
