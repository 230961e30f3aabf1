//! Block resource and its operations.
//!
//! Blocks are the content of a page. Kinds this crate does not model decode
//! as [`BlockContent::Unsupported`] so a page's children can always be read,
//! and they re-encode unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::NotionClient;
use crate::rest::envelope::BlockTag;
use crate::rest::errors::ResourceError;
use crate::rest::pagination::{Paginated, PaginationParams};
use crate::rest::path::resource_path;
use crate::rest::resources::kinds::open_kinds;
use crate::rest::resources::rich_text::{plain_text, RichText};

/// A block of page content.
///
/// ```rust
/// use notion_api::rest::resources::Block;
/// use serde_json::json;
///
/// assert_eq!(
///     serde_json::to_value(Block::heading_2("Agenda")).unwrap(),
///     json!({
///         "object": "block",
///         "type": "heading_2",
///         "heading_2": {"text": [{"plain_text": "Agenda", "type": "text", "text": {"content": "Agenda"}}]}
///     })
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Always `"block"`.
    #[serde(default)]
    pub object: BlockTag,
    /// The block id; absent on blocks being created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
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
    /// Whether the block has nested blocks; set by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_children: Option<bool>,
    /// The typed content.
    #[serde(flatten)]
    pub content: BlockContent,
    /// Fields this crate does not model, including the payload of an
    /// unsupported kind.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Block content, tagged by `type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(remote = "Self", tag = "type", rename_all = "snake_case")]
pub enum BlockContent {
    Paragraph {
        paragraph: TextBlock,
    },
    #[serde(rename = "heading_1")]
    Heading1 {
        heading_1: HeadingBlock,
    },
    #[serde(rename = "heading_2")]
    Heading2 {
        heading_2: HeadingBlock,
    },
    #[serde(rename = "heading_3")]
    Heading3 {
        heading_3: HeadingBlock,
    },
    BulletedListItem {
        bulleted_list_item: TextBlock,
    },
    NumberedListItem {
        numbered_list_item: TextBlock,
    },
    ToDo {
        to_do: ToDoBlock,
    },
    Toggle {
        toggle: TextBlock,
    },
    /// A sub-page. Read-only: the API rejects it in append requests.
    ChildPage {
        child_page: ChildPageBlock,
    },
    /// A kind this crate does not model, holding the fields it was read from.
    #[serde(skip)]
    Unsupported(Map<String, Value>),
}

open_kinds!(BlockContent {
    "paragraph",
    "heading_1",
    "heading_2",
    "heading_3",
    "bulleted_list_item",
    "numbered_list_item",
    "to_do",
    "toggle",
    "child_page",
});

/// Text content that may have nested children.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub text: Vec<RichText>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

/// Heading content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingBlock {
    #[serde(default)]
    pub text: Vec<RichText>,
}

/// To-do content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToDoBlock {
    #[serde(default)]
    pub text: Vec<RichText>,
    #[serde(default)]
    pub checked: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

/// Sub-page content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildPageBlock {
    #[serde(default)]
    pub title: String,
}

impl From<BlockContent> for Block {
    fn from(content: BlockContent) -> Self {
        Self {
            object: BlockTag,
            id: None,
            created_time: None,
            last_edited_time: None,
            has_children: None,
            content,
            extra: Map::new(),
        }
    }
}

impl Block {
    fn text_block(text: impl Into<String>) -> TextBlock {
        TextBlock {
            text: vec![RichText::plain(text)],
            children: Vec::new(),
        }
    }

    fn heading_block(text: impl Into<String>) -> HeadingBlock {
        HeadingBlock {
            text: vec![RichText::plain(text)],
        }
    }

    /// A paragraph of unstyled text.
    #[must_use]
    pub fn paragraph(text: impl Into<String>) -> Self {
        BlockContent::Paragraph {
            paragraph: Self::text_block(text),
        }
        .into()
    }

    /// A top-level heading.
    #[must_use]
    pub fn heading_1(text: impl Into<String>) -> Self {
        BlockContent::Heading1 {
            heading_1: Self::heading_block(text),
        }
        .into()
    }

    /// A second-level heading.
    #[must_use]
    pub fn heading_2(text: impl Into<String>) -> Self {
        BlockContent::Heading2 {
            heading_2: Self::heading_block(text),
        }
        .into()
    }

    /// A third-level heading.
    #[must_use]
    pub fn heading_3(text: impl Into<String>) -> Self {
        BlockContent::Heading3 {
            heading_3: Self::heading_block(text),
        }
        .into()
    }

    /// A bulleted list item.
    #[must_use]
    pub fn bulleted_list_item(text: impl Into<String>) -> Self {
        BlockContent::BulletedListItem {
            bulleted_list_item: Self::text_block(text),
        }
        .into()
    }

    /// A numbered list item.
    #[must_use]
    pub fn numbered_list_item(text: impl Into<String>) -> Self {
        BlockContent::NumberedListItem {
            numbered_list_item: Self::text_block(text),
        }
        .into()
    }

    /// A to-do item.
    #[must_use]
    pub fn to_do(text: impl Into<String>, checked: bool) -> Self {
        BlockContent::ToDo {
            to_do: ToDoBlock {
                text: vec![RichText::plain(text)],
                checked,
                children: Vec::new(),
            },
        }
        .into()
    }

    /// A toggle.
    #[must_use]
    pub fn toggle(text: impl Into<String>) -> Self {
        BlockContent::Toggle {
            toggle: Self::text_block(text),
        }
        .into()
    }

    /// Returns the plain text of the block, or of the title for a sub-page.
    #[must_use]
    pub fn plain_text(&self) -> String {
        match &self.content {
            BlockContent::Paragraph { paragraph: block }
            | BlockContent::BulletedListItem {
                bulleted_list_item: block,
            }
            | BlockContent::NumberedListItem {
                numbered_list_item: block,
            }
            | BlockContent::Toggle { toggle: block } => plain_text(&block.text),
            BlockContent::Heading1 { heading_1: heading }
            | BlockContent::Heading2 { heading_2: heading }
            | BlockContent::Heading3 { heading_3: heading } => plain_text(&heading.text),
            BlockContent::ToDo { to_do } => plain_text(&to_do.text),
            BlockContent::ChildPage { child_page } => child_page.title.clone(),
            BlockContent::Unsupported(_) => String::new(),
        }
    }
}

#[derive(Serialize)]
struct AppendChildrenBody {
    children: Vec<Block>,
}

impl NotionClient {
    /// Lists the direct children of a block or page.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidArgument`] for an empty id,
    /// [`ResourceError::NotFound`], [`ResourceError::PaginationProtocol`], or
    /// [`ResourceError::Http`].
    pub async fn retrieve_block_children(
        &self,
        block_id: &str,
        params: &PaginationParams,
    ) -> Result<Paginated<Block>, ResourceError> {
        let path = resource_path("blocks/{block_id}/children", "block_id", block_id)?;
        let response = self
            .get(&path, Some(params.to_query()))
            .await
            .map_err(|e| ResourceError::from_http_error(e, "Block", block_id))?;
        Paginated::from_response(response)
    }

    /// Appends blocks to the end of a block or page and returns the parent.
    ///
    /// The request always carries a `children` array, even when empty.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidArgument`] for an empty id,
    /// [`ResourceError::NotFound`], [`ResourceError::ValidationFailed`] (for
    /// example when appending a `child_page`), or [`ResourceError::Http`].
    pub async fn append_block_children(
        &self,
        block_id: &str,
        children: Vec<Block>,
    ) -> Result<Block, ResourceError> {
        let path = resource_path("blocks/{block_id}/children", "block_id", block_id)?;
        let body = serde_json::to_value(AppendChildrenBody { children })?;
        let response = self
            .patch(&path, body)
            .await
            .map_err(|e| ResourceError::from_http_error(e, "Block", block_id))?;
        Ok(serde_json::from_value(response.body)?)
    }
}
