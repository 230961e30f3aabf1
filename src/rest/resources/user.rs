//! User resource and its operations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::NotionClient;
use crate::rest::envelope::UserTag;
use crate::rest::errors::ResourceError;
use crate::rest::pagination::{Paginated, PaginationParams};
use crate::rest::path::resource_path;

/// A person or bot in the workspace.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Always `"user"`.
    #[serde(default)]
    pub object: UserTag,
    pub id: String,
    /// Person or bot; absent on partial user references.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<UserType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<Bot>,
    /// Fields this crate does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The kinds of user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Person,
    Bot,
}

/// Details of a human user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Details of a bot user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bot {
    /// Details such as the bot's `owner`, kept as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NotionClient {
    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidArgument`] for an empty id,
    /// [`ResourceError::NotFound`] for `object_not_found`, and
    /// [`ResourceError::Http`] for other failures.
    pub async fn retrieve_user(&self, user_id: &str) -> Result<User, ResourceError> {
        let path = resource_path("users/{user_id}", "user_id", user_id)?;
        let response = self
            .get(&path, None)
            .await
            .map_err(|e| ResourceError::from_http_error(e, "User", user_id))?;
        Ok(serde_json::from_value(response.body)?)
    }

    /// Lists the users of the workspace.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PaginationProtocol`] or [`ResourceError::Http`].
    pub async fn list_all_users(
        &self,
        params: &PaginationParams,
    ) -> Result<Paginated<User>, ResourceError> {
        let response = self.get("users", Some(params.to_query())).await?;
        Paginated::from_response(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_person() {
        let user: User = serde_json::from_value(json!({
            "object": "user",
            "id": "d40e767c-d7af-4b18-a86d-55c61f1e39a4",
            "type": "person",
            "person": {"email": "avo@example.org"},
            "name": "Avocado Lovelace",
            "avatar_url": "https://secure.notion-static.com/e6a352a8.jpg"
        }))
        .unwrap();

        assert_eq!(user.kind, Some(UserType::Person));
        assert_eq!(user.person.and_then(|p| p.email).as_deref(), Some("avo@example.org"));
        assert!(user.bot.is_none());
    }

    #[test]
    fn test_decode_partial_user_reference() {
        let user: User = serde_json::from_value(json!({"object": "user", "id": "u1"})).unwrap();
        assert_eq!(user.id, "u1");
        assert!(user.kind.is_none());
        assert!(user.name.is_none());
    }

    #[test]
    fn test_bot_round_trip() {
        let value = json!({"object": "user", "id": "b1", "type": "bot", "bot": {}, "name": "Importer"});
        let user: User = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(user.kind, Some(UserType::Bot));
        assert_eq!(serde_json::to_value(&user).unwrap(), value);
    }

    #[test]
    fn test_unmodelled_user_fields_are_kept() {
        let value = json!({
            "object": "user", "id": "b1", "type": "bot", "name": "Importer",
            "bot": {"owner": {"type": "workspace", "workspace": true}}
        });
        let user: User = serde_json::from_value(value.clone()).unwrap();
        assert!(user.bot.as_ref().is_some_and(|bot| bot.extra.contains_key("owner")));
        assert_eq!(user.name.as_deref(), Some("Importer"));
        assert_eq!(serde_json::to_value(&user).unwrap(), value);
    }
}
