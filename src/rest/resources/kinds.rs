//! Encoding for `type`-tagged payloads whose set of kinds keeps growing.
//!
//! An enum opts in by deriving serde with `#[serde(remote = "Self")]`,
//! declaring a skipped `Unsupported(Map<String, Value>)` variant, and naming
//! its known kinds with [`open_kinds!`]. The macro supplies the trait impls:
//! known kinds go through the derived code, anything else is kept verbatim.
//!
//! Decoding only claims `type` and the payload keys of known kinds. When the
//! enum sits behind `#[serde(flatten)]`, the payload of an unknown kind is
//! therefore left to the sibling `extra` map, and both halves re-encode to
//! the original object.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde_json::{Map, Value};

/// Collects the entries a deserializer hands over into a JSON map.
pub(crate) struct TaggedFields;

impl<'de> Visitor<'de> for TaggedFields {
    type Value = Map<String, Value>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an object tagged by `type`")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut fields = Map::new();
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            fields.insert(key, value);
        }
        Ok(fields)
    }
}

/// Implements `Serialize` and `Deserialize` for a `type`-tagged enum whose
/// payload key equals its tag, keeping unknown kinds in `Unsupported`.
macro_rules! open_kinds {
    ($ty:ident { $($kind:literal),+ $(,)? }) => {
        impl ::serde::Serialize for $ty {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self {
                    Self::Unsupported(raw) => ::serde::Serialize::serialize(raw, serializer),
                    known => $ty::serialize(known, serializer),
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                const KINDS: &[&str] = &[$($kind),+];
                const FIELDS: &[&str] = &["type", $($kind),+];

                let fields = deserializer.deserialize_struct(
                    stringify!($ty),
                    FIELDS,
                    $crate::rest::resources::kinds::TaggedFields,
                )?;
                let known = match fields.get("type").and_then(::serde_json::Value::as_str) {
                    Some(kind) => KINDS.contains(&kind),
                    None => return Err(::serde::de::Error::missing_field("type")),
                };

                if known {
                    $ty::deserialize(::serde_json::Value::Object(fields))
                        .map_err(::serde::de::Error::custom)
                } else {
                    Ok(Self::Unsupported(fields))
                }
            }
        }
    };
}

pub(crate) use open_kinds;
