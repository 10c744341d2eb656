//! Builds the card message out of the step inputs.

use tracing::debug;

use crate::buttons::parse_buttons;
use crate::config::Config;
use crate::error::Result;
use crate::keyvalue::parse_key_values;
use crate::markup::{advanced_to_simple, simple_to_advanced};
use crate::message::{Card, Header, ImageStyle, Message, Section, TextParagraph, Widget};

/// Picks the value matching the build outcome.
/// A failed build falls back to `if_success` when no failure value is given.
pub fn select_value<'a>(build_succeeded: bool, if_success: &'a str, if_failed: &'a str) -> &'a str {
    if build_succeeded || if_failed.is_empty() {
        if_success
    } else {
        if_failed
    }
}

/// Resolves every success/failure input pair for one build outcome
pub struct Selector<'a> {
    config: &'a Config,
    build_succeeded: bool,
}

impl<'a> Selector<'a> {
    pub fn new(config: &'a Config, build_succeeded: bool) -> Self {
        Self {
            config,
            build_succeeded,
        }
    }

    pub fn plain(&self, if_success: &'a str, if_failed: &'a str) -> &'a str {
        select_value(self.build_succeeded, if_success, if_failed)
    }

    /// Value shown inside the card, where advanced formatting applies
    pub fn card_text(&self, if_success: &str, if_failed: &str) -> String {
        let selected = select_value(self.build_succeeded, if_success, if_failed);
        if self.config.convert_simple_to_advanced_format {
            simple_to_advanced(selected)
        } else {
            selected.to_string()
        }
    }

    /// Value used for the plain-text summary, where only simple formatting applies
    pub fn summary_text(&self, if_success: &str, if_failed: &str) -> String {
        let selected = select_value(self.build_succeeded, if_success, if_failed);
        if self.config.convert_advanced_to_simple_format {
            advanced_to_simple(selected)
        } else {
            selected.to_string()
        }
    }
}

/// Builds the message for the given build outcome.
///
/// Sections appear in a fixed order: text, key-values, buttons. Empty
/// sections are left out.
pub fn new_message(config: &Config, build_succeeded: bool) -> Result<Message> {
    let select = Selector::new(config, build_succeeded);
    let mut sections = Vec::new();

    let text = select.card_text(&config.text, &config.text_on_error);
    if !text.is_empty() {
        sections.push(Section::new(vec![Widget::TextParagraph(TextParagraph {
            text,
        })]));
    }

    let key_value_input = select.plain(&config.key_value, &config.key_value_on_error);
    if !key_value_input.is_empty() {
        let rows = parse_key_values(key_value_input)?;
        debug!("Adding {} key-value row(s)", rows.len());
        if !rows.is_empty() {
            sections.push(Section::new(rows));
        }
    }

    let button_input = select.plain(&config.buttons, &config.buttons_on_error);
    if !button_input.is_empty() {
        let buttons = parse_buttons(button_input)?;
        debug!("Adding {} button(s)", buttons.len());
        sections.push(Section::new(vec![Widget::Buttons(buttons)]));
    }

    let image_style =
        ImageStyle::parse_optional(select.plain(&config.image_style, &config.image_style_on_error))?;
    let header = Header::new(
        &select.card_text(&config.title, &config.title_on_error),
        &select.card_text(&config.subtitle, &config.subtitle_on_error),
        select.plain(&config.image_url, &config.image_url_on_error),
        image_style,
    );

    let summary = [
        (&config.message, &config.message_on_error),
        (&config.title, &config.title_on_error),
        (&config.text, &config.text_on_error),
    ]
    .into_iter()
    .map(|(if_success, if_failed)| select.summary_text(if_success, if_failed))
    .find(|candidate| !candidate.is_empty())
    .unwrap_or_default();

    Ok(Message {
        text: summary,
        cards: vec![Card { header, sections }],
    })
}
