//! Rich text spans.

use serde::{Deserialize, Serialize};

use crate::rest::query::DateOrDateTime;
use crate::rest::resources::User;

/// A span of styled text.
///
/// ```rust
/// use notion_api::rest::resources::RichText;
/// use serde_json::json;
///
/// assert_eq!(
///     serde_json::to_value(RichText::plain("Hello")).unwrap(),
///     json!({"plain_text": "Hello", "type": "text", "text": {"content": "Hello"}})
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    /// The text without styling.
    #[serde(default)]
    pub plain_text: String,
    /// Link target, if the span is a link or mention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Styling applied to the span; absent on spans built without styling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
    /// The span content, tagged by `type`.
    #[serde(flatten)]
    pub content: RichTextContent,
}

impl RichText {
    /// Creates an unstyled text span.
    #[must_use]
    pub fn plain(content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            plain_text: content.clone(),
            href: None,
            annotations: None,
            content: RichTextContent::Text {
                text: Text {
                    content,
                    link: None,
                },
            },
        }
    }

    /// Creates a text span linking to `url`.
    #[must_use]
    pub fn link(content: impl Into<String>, url: impl Into<String>) -> Self {
        let url = url.into();
        let mut span = Self::plain(content);
        span.href = Some(url.clone());
        if let RichTextContent::Text { text } = &mut span.content {
            text.link = Some(Link { url });
        }
        span
    }

    /// Applies `annotations` to this span.
    #[must_use]
    pub const fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = Some(annotations);
        self
    }
}

/// Concatenates the plain text of `spans`.
#[must_use]
pub fn plain_text(spans: &[RichText]) -> String {
    spans.iter().map(|span| span.plain_text.as_str()).collect()
}

/// The kinds of rich text content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextContent {
    /// Literal text.
    Text { text: Text },
    /// A reference to a user, page, database or date.
    Mention { mention: Mention },
    /// An inline LaTeX expression.
    Equation { equation: Equation },
}

/// Literal text with an optional link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

/// An inline link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

/// An inline mention.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Mention {
    User { user: User },
    Page { page: ObjectReference },
    Database { database: ObjectReference },
    Date { date: DateValue },
}

/// A reference to a page or database by id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectReference {
    pub id: String,
}

/// A date or date range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateValue {
    pub start: DateOrDateTime,
    /// End of the range; absent for a single date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateOrDateTime>,
}

/// An inline LaTeX expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equation {
    pub expression: String,
}

/// Styling of a rich text span.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Annotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub code: bool,
    #[serde(default)]
    pub color: Color,
}

/// Text and background colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    Default,
    Gray,
    Brown,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Red,
    GrayBackground,
    BrownBackground,
    OrangeBackground,
    YellowBackground,
    GreenBackground,
    BlueBackground,
    PurpleBackground,
    PinkBackground,
    RedBackground,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_text_span_with_annotations() {
        let span: RichText = serde_json::from_value(json!({
            "type": "text",
            "text": {"content": "Notion", "link": {"url": "https://notion.so"}},
            "annotations": {"bold": true, "italic": false, "strikethrough": false,
                            "underline": false, "code": false, "color": "red_background"},
            "plain_text": "Notion",
            "href": "https://notion.so"
        }))
        .unwrap();

        let annotations = span.annotations.unwrap_or_default();
        assert!(annotations.bold);
        assert_eq!(annotations.color, Color::RedBackground);
        assert_eq!(span.href.as_deref(), Some("https://notion.so"));
        assert_eq!(span, RichText::link("Notion", "https://notion.so").with_annotations(Annotations {
            bold: true,
            color: Color::RedBackground,
            ..Annotations::default()
        }));
    }

    #[test]
    fn test_decode_mentions_and_equations() {
        let spans: Vec<RichText> = serde_json::from_value(json!([
            {"type": "mention", "mention": {"type": "page", "page": {"id": "p1"}}, "plain_text": "Roadmap"},
            {"type": "mention", "mention": {"type": "date", "date": {"start": "2021-05-13"}}, "plain_text": "2021-05-13"},
            {"type": "equation", "equation": {"expression": "e=mc^2"}, "plain_text": "e=mc^2"}
        ]))
        .unwrap();

        assert!(matches!(
            &spans[0].content,
            RichTextContent::Mention { mention: Mention::Page { page } } if page.id == "p1"
        ));
        assert!(matches!(
            &spans[1].content,
            RichTextContent::Mention { mention: Mention::Date { date } } if date.end.is_none()
        ));
        assert_eq!(plain_text(&spans), "Roadmap2021-05-13e=mc^2");
    }

    #[test]
    fn test_plain_span_omits_annotations() {
        let value = serde_json::to_value(RichText::plain("x")).unwrap();
        assert!(value.get("annotations").is_none());
        assert!(value.get("href").is_none());
    }

    #[test]
    fn test_received_default_annotations_are_re_encoded() {
        let raw = json!({
            "type": "text",
            "text": {"content": "x"},
            "annotations": {"bold": false, "italic": false, "strikethrough": false,
                            "underline": false, "code": false, "color": "default"},
            "plain_text": "x"
        });
        let span: RichText = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(span.annotations, Some(Annotations::default()));
        assert_eq!(serde_json::to_value(&span).unwrap(), raw);
    }
}
