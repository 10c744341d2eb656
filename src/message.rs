//! Card message structures understood by the Google Chat incoming webhook.
//!
//! Field names follow the card wire format, see
//! <https://developers.google.com/chat/api/guides/message-formats/cards>.

use serde::{Serialize, Serializer};
use std::str::FromStr;

use crate::error::NotifyError;

/// Top-level document posted to the webhook
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    /// Plain-text summary, shown in notifications
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    pub cards: Vec<Card>,
}

/// A card can contain a header and should have at least one section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<Header>,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_style: Option<ImageStyle>,
}

impl Header {
    /// Builds a header from raw inputs.
    /// Returns `None` when every field is empty so the card carries no header at all.
    pub fn new(
        title: &str,
        subtitle: &str,
        image_url: &str,
        image_style: Option<ImageStyle>,
    ) -> Option<Self> {
        let header = Self {
            title: non_empty(title),
            subtitle: non_empty(subtitle),
            image_url: non_empty(image_url),
            image_style,
        };

        if header.title.is_none()
            && header.subtitle.is_none()
            && header.image_url.is_none()
            && header.image_style.is_none()
        {
            None
        } else {
            Some(header)
        }
    }
}

/// Shape of the header image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImageStyle {
    #[serde(rename = "IMAGE")]
    Square,
    #[serde(rename = "AVATAR")]
    Circular,
}

impl ImageStyle {
    /// Parses a user supplied style, treating an empty value as "not set".
    pub fn parse_optional(value: &str) -> Result<Option<Self>, NotifyError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        value.parse().map(Some)
    }
}

impl FromStr for ImageStyle {
    type Err = NotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "square" => Ok(ImageStyle::Square),
            "circular" => Ok(ImageStyle::Circular),
            _ => Err(NotifyError::InvalidImageStyle(s.to_string())),
        }
    }
}

/// Sections are separated by a horizontal line on the card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    pub widgets: Vec<Widget>,
}

impl Section {
    pub fn new(widgets: Vec<Widget>) -> Self {
        Self {
            header: None,
            widgets,
        }
    }
}

/// A widget holds exactly one kind of UI element
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Widget {
    TextParagraph(TextParagraph),
    KeyValue(KeyValue),
    Image(Image),
    /// Laid out horizontally
    Buttons(Vec<Button>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextParagraph {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_label: Option<String>,
    pub content: String,
    #[serde(serialize_with = "serialize_bool_as_string")]
    pub content_multiline: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<OnClick>,
    #[serde(flatten)]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button: Option<Button>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<OnClick>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Button {
    TextButton(TextButton),
    ImageButton(ImageButton),
}

impl Button {
    pub fn text(text: impl Into<String>, url: impl Into<String>) -> Self {
        Button::TextButton(TextButton {
            text: text.into(),
            on_click: OnClick::open_link(url),
        })
    }

    pub fn icon(icon: Icon, url: impl Into<String>) -> Self {
        Button::ImageButton(ImageButton {
            icon,
            on_click: OnClick::open_link(url),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextButton {
    pub text: String,
    pub on_click: OnClick,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageButton {
    #[serde(flatten)]
    pub icon: Icon,
    pub on_click: OnClick,
}

/// Either a custom image or one of the icons built into Chat, never both
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Icon {
    #[serde(rename = "iconUrl")]
    Url(String),
    #[serde(rename = "icon")]
    BuiltIn(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnClick {
    pub open_link: OpenLink,
}

impl OnClick {
    pub fn open_link(url: impl Into<String>) -> Self {
        Self {
            open_link: OpenLink { url: url.into() },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenLink {
    pub url: String,
}

fn serialize_bool_as_string<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "true" } else { "false" })
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_header_omitted_when_empty() {
        assert_eq!(Header::new("", "", "", None), None);
        let header = Header::new("", "sub", "", None).unwrap();
        assert_eq!(header.subtitle.as_deref(), Some("sub"));
        assert!(header.title.is_none());
    }

    #[test]
    fn test_image_style_parsing() {
        assert_eq!(ImageStyle::parse_optional("").unwrap(), None);
        assert_eq!(
            ImageStyle::parse_optional("square").unwrap(),
            Some(ImageStyle::Square)
        );
        assert_eq!(
            ImageStyle::parse_optional("circular").unwrap(),
            Some(ImageStyle::Circular)
        );
        let err = ImageStyle::parse_optional("round").unwrap_err();
        assert!(err.to_string().contains("`round`"));
    }

    #[test]
    fn test_header_serialization() {
        let header = Header::new("T", "S", "I", Some(ImageStyle::Circular)).unwrap();
        assert_eq!(
            serde_json::to_value(&header).unwrap(),
            json!({
                "title": "T",
                "subtitle": "S",
                "imageUrl": "I",
                "imageStyle": "AVATAR"
            })
        );
    }

    #[test]
    fn test_button_serialization() {
        let buttons = vec![
            Button::text("Open", "https://example.org"),
            Button::icon(Icon::BuiltIn("EMAIL".into()), "mailto:a@example.org"),
            Button::icon(Icon::Url("https://example.org/i.png".into()), "https://bitrise.io"),
        ];
        assert_eq!(
            serde_json::to_value(Widget::Buttons(buttons)).unwrap(),
            json!({
                "buttons": [
                    {"textButton": {"text": "Open", "onClick": {"openLink": {"url": "https://example.org"}}}},
                    {"imageButton": {"icon": "EMAIL", "onClick": {"openLink": {"url": "mailto:a@example.org"}}}},
                    {"imageButton": {"iconUrl": "https://example.org/i.png", "onClick": {"openLink": {"url": "https://bitrise.io"}}}}
                ]
            })
        );
    }

    #[test]
    fn test_key_value_serialization() {
        let minimal = KeyValue {
            top_label: None,
            content: "c".into(),
            content_multiline: false,
            bottom_label: None,
            on_click: None,
            icon: None,
            button: None,
        };
        assert_eq!(
            serde_json::to_value(Widget::KeyValue(minimal)).unwrap(),
            json!({"keyValue": {"content": "c", "contentMultiline": "false"}})
        );

        let full = KeyValue {
            top_label: Some("top".into()),
            content: "c".into(),
            content_multiline: true,
            bottom_label: Some("bottom".into()),
            on_click: Some(OnClick::open_link("https://example.org")),
            icon: Some(Icon::BuiltIn("STAR".into())),
            button: Some(Button::text("b", "https://b.example.org")),
        };
        assert_eq!(
            serde_json::to_value(Widget::KeyValue(full)).unwrap(),
            json!({"keyValue": {
                "topLabel": "top",
                "content": "c",
                "contentMultiline": "true",
                "bottomLabel": "bottom",
                "onClick": {"openLink": {"url": "https://example.org"}},
                "icon": "STAR",
                "button": {"textButton": {"text": "b", "onClick": {"openLink": {"url": "https://b.example.org"}}}}
            }})
        );
    }

    #[test]
    fn test_image_widget_serialization() {
        let image = Widget::Image(Image {
            image_url: "https://example.org/i.png".into(),
            on_click: None,
        });
        assert_eq!(
            serde_json::to_value(image).unwrap(),
            json!({"image": {"imageUrl": "https://example.org/i.png"}})
        );
    }

    #[test]
    fn test_message_without_text_or_header() {
        let message = Message {
            text: String::new(),
            cards: vec![Card {
                header: None,
                sections: vec![Section::new(vec![Widget::TextParagraph(TextParagraph {
                    text: "x".into(),
                })])],
            }],
        };
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({"cards": [{"sections": [{"widgets": [{"textParagraph": {"text": "x"}}]}]}]})
        );
    }
}
