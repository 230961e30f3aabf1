//! Sort specifications for database queries and search.

use serde::{Deserialize, Serialize};

/// Sort order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

/// Timestamps a query can be sorted by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timestamp {
    CreatedTime,
    LastEditedTime,
}

/// One sort key of a database query: either a timestamp or a property.
///
/// ```rust
/// use notion_api::rest::query::{Direction, Sort};
/// use serde_json::json;
///
/// assert_eq!(
///     serde_json::to_value(Sort::by_property("Name", Direction::Ascending)).unwrap(),
///     json!({"property": "Name", "direction": "ascending"})
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sort {
    /// Sort by a page timestamp.
    Timestamp {
        timestamp: Timestamp,
        direction: Direction,
    },
    /// Sort by a property value.
    Property {
        property: String,
        direction: Direction,
    },
}

impl Sort {
    /// Sorts by `created_time`.
    #[must_use]
    pub const fn by_created_time(direction: Direction) -> Self {
        Self::Timestamp {
            timestamp: Timestamp::CreatedTime,
            direction,
        }
    }

    /// Sorts by `last_edited_time`.
    #[must_use]
    pub const fn by_last_edited_time(direction: Direction) -> Self {
        Self::Timestamp {
            timestamp: Timestamp::LastEditedTime,
            direction,
        }
    }

    /// Sorts by the named property.
    #[must_use]
    pub fn by_property(property: impl Into<String>, direction: Direction) -> Self {
        Self::Property {
            property: property.into(),
            direction,
        }
    }

    /// Returns the direction of this sort key.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        match self {
            Self::Timestamp { direction, .. } | Self::Property { direction, .. } => *direction,
        }
    }
}
