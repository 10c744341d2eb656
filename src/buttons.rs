//! Button declarations
//!
//! Buttons come from two places: the `buttons` input, one `type|label|url`
//! declaration per line, and the `button` object nested in a key-value row.

use serde::Deserialize;

use crate::error::{NotifyError, Result};
use crate::message::{Button, Icon};

pub const TEXT_BUTTON: &str = "text";
pub const BUILTIN_ICON_BUTTON: &str = "builtin-icon";
pub const CUSTOM_ICON_BUTTON: &str = "custom-icon";

/// One parsed `kind|label|url` declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    pub kind: String,
    pub label: String,
    pub url: String,
}

/// Splits a block of declarations into triples.
///
/// The block is trimmed as a whole, fields are kept verbatim. The first
/// malformed line aborts parsing and is reported as written.
pub fn parse_triples(input: &str) -> Result<Vec<Triple>> {
    input.trim().split('\n').map(parse_triple_line).collect()
}

fn parse_triple_line(line: &str) -> Result<Triple> {
    let parts: Vec<&str> = line.splitn(3, '|').collect();
    match parts.as_slice() {
        [kind, label, url] if !kind.is_empty() && !label.is_empty() && !url.is_empty() => {
            Ok(Triple {
                kind: kind.to_string(),
                label: label.to_string(),
                url: url.to_string(),
            })
        }
        _ => Err(NotifyError::InvalidButtonDeclaration(line.to_string())),
    }
}

/// Maps a triple onto a text or image button depending on its kind
pub fn build_button(triple: &Triple) -> Result<Button> {
    match triple.kind.as_str() {
        TEXT_BUTTON => Ok(Button::text(&triple.label, &triple.url)),
        BUILTIN_ICON_BUTTON => Ok(Button::icon(
            Icon::BuiltIn(triple.label.clone()),
            &triple.url,
        )),
        CUSTOM_ICON_BUTTON => Ok(Button::icon(Icon::Url(triple.label.clone()), &triple.url)),
        other => Err(NotifyError::UnknownButtonType(other.to_string())),
    }
}

/// Parses the `buttons` input into the buttons of a single widget
pub fn parse_buttons(input: &str) -> Result<Vec<Button>> {
    parse_triples(input)?.iter().map(build_button).collect()
}

/// Loosely typed button as written inside a key-value row
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonDescription {
    pub text: Option<String>,
    #[serde(alias = "iconURL")]
    pub icon_url: Option<String>,
    pub icon: Option<String>,
    pub on_click: Option<String>,
}

impl ButtonDescription {
    /// Validates the description. Empty strings count as unset.
    pub fn into_button(self) -> Result<Button> {
        let on_click = set(self.on_click).ok_or(NotifyError::ButtonMissingOnClick)?;

        match (set(self.text), set(self.icon_url), set(self.icon)) {
            (Some(text), None, None) => Ok(Button::text(text, on_click)),
            (None, Some(url), None) => Ok(Button::icon(Icon::Url(url), on_click)),
            (None, None, Some(icon)) => Ok(Button::icon(Icon::BuiltIn(icon), on_click)),
            _ => Err(NotifyError::ButtonContentNotExclusive),
        }
    }
}

pub(crate) fn set(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
