//! Page property values and database property definitions.
//!
//! Both are tagged by `type`; each variant holds only the payload for its
//! own kind, so the tag and the populated field cannot disagree. Kinds this
//! crate does not model decode as `Unsupported` and re-encode unchanged.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rest::query::DateOrDateTime;
use crate::rest::resources::kinds::open_kinds;
use crate::rest::resources::rich_text::{plain_text, Color, DateValue, RichText};
use crate::rest::resources::User;
use crate::rest::Empty;

/// The value of one property on a page.
///
/// ```rust
/// use notion_api::rest::resources::PropertyValue;
/// use serde_json::json;
///
/// assert_eq!(
///     serde_json::to_value(PropertyValue::number(3.0)).unwrap(),
///     json!({"type": "number", "number": 3.0})
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyValue {
    /// Property id; not needed when writing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The typed value.
    #[serde(flatten)]
    pub value: PropertyValueKind,
    /// Fields this crate does not model, including the payload of an
    /// unsupported kind.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A property value, tagged by kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", tag = "type", rename_all = "snake_case")]
pub enum PropertyValueKind {
    Title { title: Vec<RichText> },
    RichText { rich_text: Vec<RichText> },
    Number { number: Option<f64> },
    Select { select: Option<SelectOption> },
    MultiSelect { multi_select: Vec<SelectOption> },
    Date { date: Option<DateValue> },
    People { people: Vec<User> },
    Files { files: Vec<FileReference> },
    Checkbox { checkbox: bool },
    Url { url: Option<String> },
    Email { email: Option<String> },
    PhoneNumber { phone_number: Option<String> },
    Formula { formula: FormulaValue },
    Relation { relation: Vec<PageReference> },
    Rollup { rollup: RollupValue },
    CreatedTime {
        #[serde(serialize_with = "crate::rest::resources::timestamp::serialize")]
        created_time: DateTime<Utc>,
    },
    CreatedBy { created_by: User },
    LastEditedTime {
        #[serde(serialize_with = "crate::rest::resources::timestamp::serialize")]
        last_edited_time: DateTime<Utc>,
    },
    LastEditedBy { last_edited_by: User },
    /// A kind this crate does not model, holding the fields it was read from.
    #[serde(skip)]
    Unsupported(Map<String, Value>),
}

open_kinds!(PropertyValueKind {
    "title",
    "rich_text",
    "number",
    "select",
    "multi_select",
    "date",
    "people",
    "files",
    "checkbox",
    "url",
    "email",
    "phone_number",
    "formula",
    "relation",
    "rollup",
    "created_time",
    "created_by",
    "last_edited_time",
    "last_edited_by",
});

impl From<PropertyValueKind> for PropertyValue {
    fn from(value: PropertyValueKind) -> Self {
        Self {
            id: None,
            value,
            extra: Map::new(),
        }
    }
}

impl PropertyValue {
    /// A title value made of one unstyled span.
    #[must_use]
    pub fn title(text: impl Into<String>) -> Self {
        PropertyValueKind::Title {
            title: vec![RichText::plain(text)],
        }
        .into()
    }

    /// A rich text value made of one unstyled span.
    #[must_use]
    pub fn rich_text(text: impl Into<String>) -> Self {
        PropertyValueKind::RichText {
            rich_text: vec![RichText::plain(text)],
        }
        .into()
    }

    /// A number value.
    #[must_use]
    pub fn number(number: f64) -> Self {
        PropertyValueKind::Number {
            number: Some(number),
        }
        .into()
    }

    /// A checkbox value.
    #[must_use]
    pub fn checkbox(checked: bool) -> Self {
        PropertyValueKind::Checkbox { checkbox: checked }.into()
    }

    /// A select value naming an option.
    #[must_use]
    pub fn select(name: impl Into<String>) -> Self {
        PropertyValueKind::Select {
            select: Some(SelectOption::named(name)),
        }
        .into()
    }

    /// A multi-select value naming options.
    #[must_use]
    pub fn multi_select<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PropertyValueKind::MultiSelect {
            multi_select: names.into_iter().map(SelectOption::named).collect(),
        }
        .into()
    }

    /// A single-date value.
    #[must_use]
    pub fn date(start: impl Into<DateOrDateTime>) -> Self {
        PropertyValueKind::Date {
            date: Some(DateValue {
                start: start.into(),
                end: None,
            }),
        }
        .into()
    }

    /// A URL value.
    #[must_use]
    pub fn url(url: impl Into<String>) -> Self {
        PropertyValueKind::Url {
            url: Some(url.into()),
        }
        .into()
    }

    /// An email value.
    #[must_use]
    pub fn email(email: impl Into<String>) -> Self {
        PropertyValueKind::Email {
            email: Some(email.into()),
        }
        .into()
    }

    /// A phone number value.
    #[must_use]
    pub fn phone_number(phone_number: impl Into<String>) -> Self {
        PropertyValueKind::PhoneNumber {
            phone_number: Some(phone_number.into()),
        }
        .into()
    }

    /// A relation value pointing at the given page ids.
    #[must_use]
    pub fn relation<I, S>(page_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PropertyValueKind::Relation {
            relation: page_ids
                .into_iter()
                .map(|id| PageReference { id: id.into() })
                .collect(),
        }
        .into()
    }

    /// Returns the plain text of a title or rich text value.
    #[must_use]
    pub fn plain_text(&self) -> Option<String> {
        match &self.value {
            PropertyValueKind::Title { title: spans }
            | PropertyValueKind::RichText { rich_text: spans } => Some(plain_text(spans)),
            _ => None,
        }
    }
}

/// An option of a select or multi-select property.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl SelectOption {
    /// An option referenced by name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// A page referenced from a relation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageReference {
    pub id: String,
}

/// A file attached to a files property.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReference {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<FileKind>,
    /// Set for files hosted by Notion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<HostedFile>,
    /// Set for external links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external: Option<ExternalFile>,
}

/// Where a file lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    File,
    External,
}

/// A file hosted by Notion behind a temporary URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostedFile {
    pub url: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::rest::resources::timestamp::option::serialize"
    )]
    pub expiry_time: Option<DateTime<Utc>>,
}

/// A link to an external file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalFile {
    pub url: String,
}

/// The computed result of a formula property.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", tag = "type", rename_all = "snake_case")]
pub enum FormulaValue {
    String { string: Option<String> },
    Number { number: Option<f64> },
    Boolean { boolean: Option<bool> },
    Date { date: Option<DateValue> },
    #[serde(skip)]
    Unsupported(Map<String, Value>),
}

open_kinds!(FormulaValue { "string", "number", "boolean", "date" });

/// The computed result of a rollup property.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", tag = "type", rename_all = "snake_case")]
pub enum RollupValue {
    Number { number: Option<f64> },
    Date { date: Option<DateValue> },
    /// Rolled-up property values, kept as raw JSON.
    Array { array: Vec<Value> },
    #[serde(skip)]
    Unsupported(Map<String, Value>),
}

open_kinds!(RollupValue { "number", "date", "array" });

/// The schema of one database property.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The kind and its configuration.
    #[serde(flatten)]
    pub config: PropertyConfig,
    /// Fields this crate does not model, including the configuration of an
    /// unsupported kind.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A database property kind with its configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", tag = "type", rename_all = "snake_case")]
pub enum PropertyConfig {
    Title { title: Empty },
    RichText { rich_text: Empty },
    Number { number: NumberConfig },
    Select { select: SelectConfig },
    MultiSelect { multi_select: SelectConfig },
    Date { date: Empty },
    People { people: Empty },
    Files { files: Empty },
    Checkbox { checkbox: Empty },
    Url { url: Empty },
    Email { email: Empty },
    PhoneNumber { phone_number: Empty },
    Formula { formula: FormulaConfig },
    Relation { relation: RelationConfig },
    Rollup { rollup: RollupConfig },
    CreatedTime { created_time: Empty },
    CreatedBy { created_by: Empty },
    LastEditedTime { last_edited_time: Empty },
    LastEditedBy { last_edited_by: Empty },
    /// A kind this crate does not model, holding the fields it was read from.
    #[serde(skip)]
    Unsupported(Map<String, Value>),
}

open_kinds!(PropertyConfig {
    "title",
    "rich_text",
    "number",
    "select",
    "multi_select",
    "date",
    "people",
    "files",
    "checkbox",
    "url",
    "email",
    "phone_number",
    "formula",
    "relation",
    "rollup",
    "created_time",
    "created_by",
    "last_edited_time",
    "last_edited_by",
});

/// Display format of a number property.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberConfig {
    #[serde(default)]
    pub format: NumberFormat,
}

/// Number formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    #[default]
    Number,
    NumberWithCommas,
    Percent,
    Dollar,
    Euro,
    Pound,
    Yen,
    Ruble,
    Rupee,
    Won,
    Yuan,
    #[serde(other)]
    Other,
}

/// Options of a select or multi-select property.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectConfig {
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

/// Expression of a formula property.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaConfig {
    #[serde(default)]
    pub expression: String,
}

/// Target of a relation property.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationConfig {
    pub database_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synced_property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synced_property_id: Option<String>,
}

/// Source and aggregation of a rollup property.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollupConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_property_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollup_property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollup_property_id: Option<String>,
    #[serde(default)]
    pub function: String,
}

/// Returns the plain text of the title property in `properties`, if any.
pub(crate) fn title_of(properties: &HashMap<String, PropertyValue>) -> Option<String> {
    properties.values().find_map(|property| match &property.value {
        PropertyValueKind::Title { title } => Some(plain_text(title)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_common_property_values() {
        let properties: HashMap<String, PropertyValue> = serde_json::from_value(json!({
            "Name": {"id": "title", "type": "title", "title": [
                {"type": "text", "text": {"content": "Q2 Report"}, "plain_text": "Q2 Report"}
            ]},
            "Pages": {"id": "a%3Ab", "type": "number", "number": 12},
            "Status": {"id": "c", "type": "select", "select": {"id": "s1", "name": "Done", "color": "green"}},
            "Done": {"id": "d", "type": "checkbox", "checkbox": true},
            "Due": {"id": "e", "type": "date", "date": {"start": "2021-05-13", "end": null}},
            "Score": {"id": "f", "type": "formula", "formula": {"type": "number", "number": 4.5}},
            "Created": {"id": "g", "type": "created_time", "created_time": "2021-05-13T10:00:00.000Z"}
        }))
        .unwrap();

        assert_eq!(properties["Name"].plain_text().as_deref(), Some("Q2 Report"));
        assert_eq!(properties["Pages"].value, PropertyValueKind::Number { number: Some(12.0) });
        assert!(matches!(
            &properties["Status"].value,
            PropertyValueKind::Select { select: Some(option) } if option.color == Some(Color::Green)
        ));
        assert_eq!(properties["Done"].value, PropertyValueKind::Checkbox { checkbox: true });
        assert!(matches!(
            properties["Score"].value,
            PropertyValueKind::Formula { formula: FormulaValue::Number { number: Some(_) } }
        ));
        assert_eq!(title_of(&properties).as_deref(), Some("Q2 Report"));
    }

    #[test]
    fn test_unknown_property_kind_is_kept_verbatim() {
        let raw = json!({"id": "x", "type": "status", "status": {"name": "In progress"}});
        let value: PropertyValue = serde_json::from_value(raw.clone()).unwrap();

        assert!(matches!(
            &value.value,
            PropertyValueKind::Unsupported(fields) if fields["type"] == "status"
        ));
        assert_eq!(value.extra["status"], json!({"name": "In progress"}));
        assert_eq!(value.id.as_deref(), Some("x"));
        assert!(value.plain_text().is_none());
        assert_eq!(serde_json::to_value(&value).unwrap(), raw);
    }

    #[test]
    fn test_known_kind_keeps_unmodelled_siblings() {
        let raw = json!({"id": "n", "type": "number", "number": 2.5, "description": "score"});
        let value: PropertyValue = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(value.value, PropertyValueKind::Number { number: Some(2.5) });
        assert_eq!(value.extra.len(), 1);
        assert_eq!(serde_json::to_value(&value).unwrap(), raw);
    }

    #[test]
    fn test_unknown_formula_result_is_kept_verbatim() {
        let raw = json!({"type": "formula", "formula": {"type": "duration", "duration": 90}});
        let value: PropertyValue = serde_json::from_value(raw.clone()).unwrap();

        assert!(matches!(
            &value.value,
            PropertyValueKind::Formula { formula: FormulaValue::Unsupported(fields) }
                if fields["duration"] == 90
        ));
        assert_eq!(serde_json::to_value(&value).unwrap(), raw);
    }

    #[test]
    fn test_property_without_type_is_rejected() {
        let result: Result<PropertyValue, _> = serde_json::from_value(json!({"id": "x", "number": 1}));
        assert!(result.is_err());
    }

    #[test]
    fn test_constructors_encode_only_their_own_payload() {
        assert_eq!(
            serde_json::to_value(PropertyValue::select("Done")).unwrap(),
            json!({"type": "select", "select": {"name": "Done"}})
        );
        assert_eq!(
            serde_json::to_value(PropertyValue::multi_select(["a", "b"])).unwrap(),
            json!({"type": "multi_select", "multi_select": [{"name": "a"}, {"name": "b"}]})
        );
        assert_eq!(
            serde_json::to_value(PropertyValue::relation(["p1"])).unwrap(),
            json!({"type": "relation", "relation": [{"id": "p1"}]})
        );
        assert_eq!(
            serde_json::to_value(PropertyValue::checkbox(false)).unwrap(),
            json!({"type": "checkbox", "checkbox": false})
        );
    }

    #[test]
    fn test_decode_property_definitions() {
        let schema: HashMap<String, PropertyDefinition> = serde_json::from_value(json!({
            "Name": {"id": "title", "name": "Name", "type": "title", "title": {}},
            "Price": {"id": "p", "name": "Price", "type": "number", "number": {"format": "dollar"}},
            "Tags": {"id": "t", "name": "Tags", "type": "multi_select", "multi_select": {"options": [
                {"id": "o1", "name": "urgent", "color": "red"}
            ]}},
            "Tasks": {"id": "r", "name": "Tasks", "type": "relation", "relation": {"database_id": "db2"}},
            "Button": {"id": "b", "name": "Button", "type": "button", "button": {}}
        }))
        .unwrap();

        assert!(matches!(schema["Name"].config, PropertyConfig::Title { .. }));
        assert_eq!(
            schema["Price"].config,
            PropertyConfig::Number { number: NumberConfig { format: NumberFormat::Dollar } }
        );
        assert!(matches!(
            &schema["Tags"].config,
            PropertyConfig::MultiSelect { multi_select } if multi_select.options.len() == 1
        ));
        assert!(matches!(
            &schema["Tasks"].config,
            PropertyConfig::Relation { relation } if relation.database_id == "db2"
        ));
        assert!(matches!(
            &schema["Button"].config,
            PropertyConfig::Unsupported(fields) if fields["type"] == "button"
        ));
        assert_eq!(
            serde_json::to_value(&schema["Button"]).unwrap(),
            json!({"id": "b", "name": "Button", "type": "button", "button": {}})
        );
    }
}
