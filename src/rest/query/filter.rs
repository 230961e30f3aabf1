//! Database query filters.
//!
//! A [`Filter`] is either a leaf holding exactly one typed condition on one
//! property, or an `and`/`or` node over child filters. Children keep their
//! order and nesting is unbounded.
//!
//! # Example
//!
//! ```rust
//! use notion_api::rest::query::{Filter, NumberCondition, TextCondition};
//! use serde_json::json;
//!
//! let filter = Filter::and([
//!     Filter::text("Name", TextCondition::Contains("Report".to_string())),
//!     Filter::number("Pages", NumberCondition::GreaterThan(10.0)),
//! ]);
//!
//! assert_eq!(
//!     serde_json::to_value(&filter).unwrap(),
//!     json!({"and": [
//!         {"property": "Name", "text": {"contains": "Report"}},
//!         {"property": "Pages", "number": {"greater_than": 10.0}},
//!     ]})
//! );
//! ```

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::Empty;

/// A filter expression for [`query_database`](crate::NotionClient::query_database).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Filter {
    /// Matches when every child matches.
    And {
        /// Child filters, in order.
        and: Vec<Filter>,
    },
    /// Matches when any child matches.
    Or {
        /// Child filters, in order.
        or: Vec<Filter>,
    },
    /// A single condition on one property.
    Property {
        /// The property name or id.
        property: String,
        /// The condition, keyed by the property kind.
        #[serde(flatten)]
        condition: PropertyCondition,
    },
}

impl Filter {
    /// Creates a leaf filter on `property`.
    #[must_use]
    pub fn property(property: impl Into<String>, condition: PropertyCondition) -> Self {
        Self::Property {
            property: property.into(),
            condition,
        }
    }

    /// Creates a compound filter matching when all `filters` match.
    #[must_use]
    pub fn and(filters: impl IntoIterator<Item = Self>) -> Self {
        Self::And {
            and: filters.into_iter().collect(),
        }
    }

    /// Creates a compound filter matching when any of `filters` matches.
    #[must_use]
    pub fn or(filters: impl IntoIterator<Item = Self>) -> Self {
        Self::Or {
            or: filters.into_iter().collect(),
        }
    }

    /// Filters a title, rich text, url, email or phone number property.
    #[must_use]
    pub fn text(property: impl Into<String>, condition: TextCondition) -> Self {
        Self::property(property, PropertyCondition::Text(condition))
    }

    /// Filters a number property.
    #[must_use]
    pub fn number(property: impl Into<String>, condition: NumberCondition) -> Self {
        Self::property(property, PropertyCondition::Number(condition))
    }

    /// Filters a checkbox property.
    #[must_use]
    pub fn checkbox(property: impl Into<String>, condition: CheckboxCondition) -> Self {
        Self::property(property, PropertyCondition::Checkbox(condition))
    }

    /// Filters a select property.
    #[must_use]
    pub fn select(property: impl Into<String>, condition: SelectCondition) -> Self {
        Self::property(property, PropertyCondition::Select(condition))
    }

    /// Filters a multi-select property.
    #[must_use]
    pub fn multi_select(property: impl Into<String>, condition: MultiSelectCondition) -> Self {
        Self::property(property, PropertyCondition::MultiSelect(condition))
    }

    /// Filters a date, created time or last edited time property.
    #[must_use]
    pub fn date(property: impl Into<String>, condition: DateCondition) -> Self {
        Self::property(property, PropertyCondition::Date(condition))
    }

    /// Filters a people, created by or last edited by property.
    #[must_use]
    pub fn people(property: impl Into<String>, condition: PeopleCondition) -> Self {
        Self::property(property, PropertyCondition::People(condition))
    }

    /// Filters a files property.
    #[must_use]
    pub fn files(property: impl Into<String>, condition: FilesCondition) -> Self {
        Self::property(property, PropertyCondition::Files(condition))
    }

    /// Filters a relation property.
    #[must_use]
    pub fn relation(property: impl Into<String>, condition: RelationCondition) -> Self {
        Self::property(property, PropertyCondition::Relation(condition))
    }

    /// Filters a formula property by the type of its result.
    #[must_use]
    pub fn formula(property: impl Into<String>, condition: FormulaCondition) -> Self {
        Self::property(property, PropertyCondition::Formula(condition))
    }
}

/// The condition of a leaf filter, keyed by property kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyCondition {
    /// Condition on a text-like property.
    Text(TextCondition),
    /// Condition on a number property.
    Number(NumberCondition),
    /// Condition on a checkbox property.
    Checkbox(CheckboxCondition),
    /// Condition on a select property.
    Select(SelectCondition),
    /// Condition on a multi-select property.
    MultiSelect(MultiSelectCondition),
    /// Condition on a date property.
    Date(DateCondition),
    /// Condition on a people property.
    People(PeopleCondition),
    /// Condition on a files property.
    Files(FilesCondition),
    /// Condition on a relation property.
    Relation(RelationCondition),
    /// Condition on a formula result.
    Formula(FormulaCondition),
}

/// Conditions on text-like properties.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextCondition {
    /// Matches values equal to the given one.
    Equals(String),
    /// Matches values different from the given one.
    DoesNotEqual(String),
    /// Matches text containing the substring.
    Contains(String),
    /// Matches text not containing the substring.
    DoesNotContain(String),
    /// Matches text starting with the prefix.
    StartsWith(String),
    /// Matches text ending with the suffix.
    EndsWith(String),
    /// Matches empty values; the flag must be `true`.
    IsEmpty(bool),
    /// Matches non-empty values; the flag must be `true`.
    IsNotEmpty(bool),
}

/// Conditions on number properties.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberCondition {
    /// Matches values equal to the given one.
    Equals(f64),
    /// Matches values different from the given one.
    DoesNotEqual(f64),
    /// Matches numbers strictly greater than the value.
    GreaterThan(f64),
    /// Matches numbers strictly less than the value.
    LessThan(f64),
    /// Matches numbers greater than or equal to the value.
    GreaterThanOrEqualTo(f64),
    /// Matches numbers less than or equal to the value.
    LessThanOrEqualTo(f64),
    /// Matches empty values; the flag must be `true`.
    IsEmpty(bool),
    /// Matches non-empty values; the flag must be `true`.
    IsNotEmpty(bool),
}

/// Conditions on checkbox properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckboxCondition {
    /// Matches checkboxes in the given state.
    Equals(bool),
    /// Matches checkboxes not in the given state.
    DoesNotEqual(bool),
}

/// Conditions on select properties.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectCondition {
    /// Matches the option with this name.
    Equals(String),
    /// Matches any option except this one.
    DoesNotEqual(String),
    /// Matches empty values; the flag must be `true`.
    IsEmpty(bool),
    /// Matches non-empty values; the flag must be `true`.
    IsNotEmpty(bool),
}

/// Conditions on multi-select properties.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiSelectCondition {
    /// Matches values that include the option.
    Contains(String),
    /// Matches values that lack the option.
    DoesNotContain(String),
    /// Matches empty values; the flag must be `true`.
    IsEmpty(bool),
    /// Matches non-empty values; the flag must be `true`.
    IsNotEmpty(bool),
}

/// Conditions on people properties. Values are user ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeopleCondition {
    /// Matches values that include the user.
    Contains(String),
    /// Matches values that lack the user.
    DoesNotContain(String),
    /// Matches empty values; the flag must be `true`.
    IsEmpty(bool),
    /// Matches non-empty values; the flag must be `true`.
    IsNotEmpty(bool),
}

/// Conditions on relation properties. Values are page ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationCondition {
    /// Matches values that include the page.
    Contains(String),
    /// Matches values that lack the page.
    DoesNotContain(String),
    /// Matches empty values; the flag must be `true`.
    IsEmpty(bool),
    /// Matches non-empty values; the flag must be `true`.
    IsNotEmpty(bool),
}

/// Conditions on files properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilesCondition {
    /// Matches empty values; the flag must be `true`.
    IsEmpty(bool),
    /// Matches non-empty values; the flag must be `true`.
    IsNotEmpty(bool),
}

/// Conditions on date properties.
///
/// The relative windows (`PastWeek` through `NextYear`) carry no value and
/// encode as an empty object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateCondition {
    /// Matches the given date.
    Equals(DateOrDateTime),
    /// Matches dates before the given one.
    Before(DateOrDateTime),
    /// Matches dates after the given one.
    After(DateOrDateTime),
    /// Matches dates on or before the given one.
    OnOrBefore(DateOrDateTime),
    /// Matches dates on or after the given one.
    OnOrAfter(DateOrDateTime),
    /// Matches empty values; the flag must be `true`.
    IsEmpty(bool),
    /// Matches non-empty values; the flag must be `true`.
    IsNotEmpty(bool),
    /// Within the past week.
    PastWeek(Empty),
    /// Within the past month.
    PastMonth(Empty),
    /// Within the past year.
    PastYear(Empty),
    /// Within the next week.
    NextWeek(Empty),
    /// Within the next month.
    NextMonth(Empty),
    /// Within the next year.
    NextYear(Empty),
}

impl DateCondition {
    /// Within the past week.
    #[must_use]
    pub const fn past_week() -> Self {
        Self::PastWeek(Empty {})
    }

    /// Within the past month.
    #[must_use]
    pub const fn past_month() -> Self {
        Self::PastMonth(Empty {})
    }

    /// Within the past year.
    #[must_use]
    pub const fn past_year() -> Self {
        Self::PastYear(Empty {})
    }

    /// Within the next week.
    #[must_use]
    pub const fn next_week() -> Self {
        Self::NextWeek(Empty {})
    }

    /// Within the next month.
    #[must_use]
    pub const fn next_month() -> Self {
        Self::NextMonth(Empty {})
    }

    /// Within the next year.
    #[must_use]
    pub const fn next_year() -> Self {
        Self::NextYear(Empty {})
    }
}

/// Conditions on a formula, keyed by the type of the formula result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaCondition {
    /// The formula evaluates to text.
    Text(TextCondition),
    /// The formula evaluates to a boolean.
    Checkbox(CheckboxCondition),
    /// The formula evaluates to a number.
    Number(NumberCondition),
    /// The formula evaluates to a date.
    Date(DateCondition),
}

/// A calendar date or a full timestamp, as accepted by date conditions.
///
/// Dates encode as `YYYY-MM-DD`; timestamps as RFC 3339.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateOrDateTime {
    /// A timestamp with offset.
    DateTime(DateTime<FixedOffset>),
    /// A calendar date.
    Date(NaiveDate),
}

impl From<NaiveDate> for DateOrDateTime {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<DateTime<FixedOffset>> for DateOrDateTime {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::DateTime(value)
    }
}

impl From<DateTime<Utc>> for DateOrDateTime {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value.into())
    }
}
