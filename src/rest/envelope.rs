//! Polymorphic decoding of Notion result objects.
//!
//! Every object the API returns carries an `object` field naming its kind.
//! [`Object`] reads that discriminator and decodes the payload into the
//! matching resource type. Encoding an [`Object`] writes exactly the wrapped
//! resource's JSON, with no wrapper fields.
//!
//! # Example
//!
//! ```rust
//! use notion_api::rest::{Object, ObjectsExt};
//! use serde_json::json;
//!
//! let objects: Vec<Object> = serde_json::from_value(json!([
//!     {"object": "page", "id": "p1", "properties": {}, "parent": {"type": "workspace", "workspace": true}},
//!     {"object": "user", "id": "u1"},
//! ])).unwrap();
//!
//! assert_eq!(objects.pages().len(), 1);
//! assert!(objects[1].as_page().is_none());
//! assert_eq!(objects[1].as_user().map(|u| u.id.as_str()), Some("u1"));
//! ```

use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::rest::resources::{Block, Database, Page, User};

/// Defines a zero-sized `object` tag that always encodes as `$kind` and only
/// decodes from `$kind`.
macro_rules! object_tag {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl $name {
            /// The discriminator value.
            pub const KIND: &'static str = $kind;
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($kind)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                if value == $kind {
                    Ok(Self)
                } else {
                    Err(de::Error::invalid_value(de::Unexpected::Str(&value), &$kind))
                }
            }
        }
    };
}

object_tag!(
    /// The `"object": "database"` tag.
    DatabaseTag,
    "database"
);
object_tag!(
    /// The `"object": "page"` tag.
    PageTag,
    "page"
);
object_tag!(
    /// The `"object": "block"` tag.
    BlockTag,
    "block"
);
object_tag!(
    /// The `"object": "user"` tag.
    UserTag,
    "user"
);
object_tag!(
    /// The `"object": "list"` tag.
    ListTag,
    "list"
);

/// The kinds of object the envelope recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// A nested list of objects.
    List,
    /// A database.
    Database,
    /// A page.
    Page,
    /// A block.
    Block,
    /// A user or bot.
    User,
}

impl ObjectKind {
    /// Returns the wire discriminator for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => ListTag::KIND,
            Self::Database => DatabaseTag::KIND,
            Self::Page => PageTag::KIND,
            Self::Block => BlockTag::KIND,
            Self::User => UserTag::KIND,
        }
    }

    fn parse(kind: &str) -> Option<Self> {
        match kind {
            ListTag::KIND => Some(Self::List),
            DatabaseTag::KIND => Some(Self::Database),
            PageTag::KIND => Some(Self::Page),
            BlockTag::KIND => Some(Self::Block),
            UserTag::KIND => Some(Self::User),
            _ => None,
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when a JSON value cannot be decoded as an [`Object`].
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The value is not a JSON object.
    #[error("Expected a JSON object, found {found}")]
    NotAnObject {
        /// The JSON type that was found instead.
        found: &'static str,
    },

    /// The `object` field is missing or is not a string.
    #[error("Missing or non-string 'object' discriminator")]
    MissingDiscriminator,

    /// The `object` field names a kind this crate does not know.
    #[error("Unknown object kind '{kind}'")]
    UnknownKind {
        /// The unrecognized discriminator.
        kind: String,
    },

    /// The discriminator was recognized but the payload did not match the shape.
    #[error("Malformed {kind} object: {source}")]
    Decode {
        /// The kind selected by the discriminator.
        kind: ObjectKind,
        /// The underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
}

/// A list of objects as returned inside another result.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct List {
    /// Always `"list"`.
    #[serde(default)]
    pub object: ListTag,
    /// The listed objects, in server order.
    #[serde(default)]
    pub results: Vec<Object>,
    /// Cursor for the next page, if any.
    #[serde(default)]
    pub next_cursor: Option<String>,
    /// Whether more results exist past this page.
    #[serde(default)]
    pub has_more: bool,
    /// Fields this crate does not model.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// A result object of any kind, selected by its `object` discriminator.
#[derive(Clone, Debug, PartialEq)]
pub enum Object {
    /// A nested list.
    List(List),
    /// A database.
    Database(Database),
    /// A page.
    Page(Page),
    /// A block.
    Block(Block),
    /// A user or bot.
    User(User),
}

impl Object {
    /// Decodes a JSON value, dispatching on its `object` field.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError`] if the value is not an object, has no string
    /// discriminator, names an unknown kind, or does not match the shape of the
    /// named kind.
    pub fn from_value(value: Value) -> Result<Self, EnvelopeError> {
        let kind = match &value {
            Value::Object(map) => match map.get("object") {
                Some(Value::String(kind)) => ObjectKind::parse(kind)
                    .ok_or_else(|| EnvelopeError::UnknownKind { kind: kind.clone() })?,
                _ => return Err(EnvelopeError::MissingDiscriminator),
            },
            other => {
                return Err(EnvelopeError::NotAnObject {
                    found: json_type_name(other),
                })
            }
        };

        let decoded = match kind {
            ObjectKind::List => serde_json::from_value(value).map(Self::List),
            ObjectKind::Database => serde_json::from_value(value).map(Self::Database),
            ObjectKind::Page => serde_json::from_value(value).map(Self::Page),
            ObjectKind::Block => serde_json::from_value(value).map(Self::Block),
            ObjectKind::User => serde_json::from_value(value).map(Self::User),
        };
        decoded.map_err(|source| EnvelopeError::Decode { kind, source })
    }

    /// Returns the kind of the wrapped object.
    #[must_use]
    pub const fn kind(&self) -> ObjectKind {
        match self {
            Self::List(_) => ObjectKind::List,
            Self::Database(_) => ObjectKind::Database,
            Self::Page(_) => ObjectKind::Page,
            Self::Block(_) => ObjectKind::Block,
            Self::User(_) => ObjectKind::User,
        }
    }

    /// Returns the wrapped list, if this is one.
    #[must_use]
    pub const fn as_list(&self) -> Option<&List> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// Returns the wrapped database, if this is one.
    #[must_use]
    pub const fn as_database(&self) -> Option<&Database> {
        match self {
            Self::Database(database) => Some(database),
            _ => None,
        }
    }

    /// Returns the wrapped page, if this is one.
    #[must_use]
    pub const fn as_page(&self) -> Option<&Page> {
        match self {
            Self::Page(page) => Some(page),
            _ => None,
        }
    }

    /// Returns the wrapped block, if this is one.
    #[must_use]
    pub const fn as_block(&self) -> Option<&Block> {
        match self {
            Self::Block(block) => Some(block),
            _ => None,
        }
    }

    /// Returns the wrapped user, if this is one.
    #[must_use]
    pub const fn as_user(&self) -> Option<&User> {
        match self {
            Self::User(user) => Some(user),
            _ => None,
        }
    }

    /// Consumes the envelope, returning the list if this is one.
    #[must_use]
    pub fn into_list(self) -> Option<List> {
        List::from_object(self).ok()
    }

    /// Consumes the envelope, returning the database if this is one.
    #[must_use]
    pub fn into_database(self) -> Option<Database> {
        Database::from_object(self).ok()
    }

    /// Consumes the envelope, returning the page if this is one.
    #[must_use]
    pub fn into_page(self) -> Option<Page> {
        Page::from_object(self).ok()
    }

    /// Consumes the envelope, returning the block if this is one.
    #[must_use]
    pub fn into_block(self) -> Option<Block> {
        Block::from_object(self).ok()
    }

    /// Consumes the envelope, returning the user if this is one.
    #[must_use]
    pub fn into_user(self) -> Option<User> {
        User::from_object(self).ok()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::List(list) => list.serialize(serializer),
            Self::Database(database) => database.serialize(serializer),
            Self::Page(page) => page.serialize(serializer),
            Self::Block(block) => block.serialize(serializer),
            Self::User(user) => user.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Object {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(de::Error::custom)
    }
}

/// Narrowing from an [`Object`] to a concrete result type.
///
/// Paginated endpoints decode every entry through the envelope and then
/// narrow it with this trait. [`Object`] itself narrows to itself.
pub trait FromObject: Sized {
    /// Human-readable name of the expected kind, used in log messages.
    const EXPECTED: &'static str;

    /// Takes the concrete value out of the envelope, or hands the envelope
    /// back unchanged if it holds a different kind.
    ///
    /// # Errors
    ///
    /// Returns the original object when its kind does not match.
    fn from_object(object: Object) -> Result<Self, Object>;
}

impl FromObject for Object {
    const EXPECTED: &'static str = "any";

    fn from_object(object: Object) -> Result<Self, Object> {
        Ok(object)
    }
}

macro_rules! impl_from_object {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl FromObject for $ty {
                const EXPECTED: &'static str = stringify!($variant);

                fn from_object(object: Object) -> Result<Self, Object> {
                    match object {
                        Object::$variant(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }

            impl From<$ty> for Object {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_object!(
    List => List,
    Database => Database,
    Page => Page,
    Block => Block,
    User => User,
);

/// Filter-and-cast helpers over a slice of envelopes.
///
/// Each helper keeps only the entries of one kind, in their original order.
pub trait ObjectsExt {
    /// Returns the databases in the slice.
    fn databases(&self) -> Vec<&Database>;
    /// Returns the pages in the slice.
    fn pages(&self) -> Vec<&Page>;
    /// Returns the blocks in the slice.
    fn blocks(&self) -> Vec<&Block>;
    /// Returns the users in the slice.
    fn users(&self) -> Vec<&User>;
}

impl ObjectsExt for [Object] {
    fn databases(&self) -> Vec<&Database> {
        self.iter().filter_map(Object::as_database).collect()
    }

    fn pages(&self) -> Vec<&Page> {
        self.iter().filter_map(Object::as_page).collect()
    }

    fn blocks(&self) -> Vec<&Block> {
        self.iter().filter_map(Object::as_block).collect()
    }

    fn users(&self) -> Vec<&User> {
        self.iter().filter_map(Object::as_user).collect()
    }
}
