//! Key-value rows
//!
//! The `key_value` input is a JSON array of loosely typed rows. It is decoded
//! first, then every row is validated into a [`KeyValue`] widget.

use serde::Deserialize;
use tracing::debug;

use crate::buttons::{ButtonDescription, set};
use crate::error::{NotifyError, Result};
use crate::message::{Icon, KeyValue, OnClick, Widget};

/// A row exactly as written in the input
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowDescription {
    pub top_label: Option<String>,
    pub content: Option<String>,
    #[serde(default, alias = "contentMultiline")]
    pub multiline: bool,
    pub bottom_label: Option<String>,
    pub on_click: Option<String>,
    #[serde(alias = "iconURL")]
    pub icon_url: Option<String>,
    pub icon: Option<String>,
    pub button: Option<ButtonDescription>,
}

impl RowDescription {
    /// Checks the row constraints and builds the strict widget
    pub fn into_key_value(self) -> Result<KeyValue> {
        let content = set(self.content).ok_or(NotifyError::RowMissingContent)?;

        let icon = match (set(self.icon_url), set(self.icon)) {
            (Some(_), Some(_)) => return Err(NotifyError::RowIconConflict),
            (Some(url), None) => Some(Icon::Url(url)),
            (None, Some(icon)) => Some(Icon::BuiltIn(icon)),
            (None, None) => None,
        };

        let button = self.button.map(ButtonDescription::into_button).transpose()?;

        Ok(KeyValue {
            top_label: set(self.top_label),
            content,
            content_multiline: self.multiline,
            bottom_label: set(self.bottom_label),
            on_click: set(self.on_click).map(OnClick::open_link),
            icon,
            button,
        })
    }
}

/// Decodes the JSON array without validating the rows
pub fn decode_rows(input: &str) -> Result<Vec<RowDescription>> {
    serde_json::from_str(input).map_err(NotifyError::KeyValueDecode)
}

/// Parses the `key_value` input into one widget per row.
///
/// Blank input and an empty array both yield no widgets. The first invalid
/// row fails the whole input.
pub fn parse_key_values(input: &str) -> Result<Vec<Widget>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let rows = decode_rows(input)?;
    debug!("Decoded {} key-value row(s)", rows.len());

    rows.into_iter()
        .map(|row| row.into_key_value().map(Widget::KeyValue))
        .collect()
}
