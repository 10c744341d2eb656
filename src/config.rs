//! Step configuration
//!
//! Inputs are read from the environment (one variable per input, see the
//! `*_KEY` constants) or from a TOML file using the same keys.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{NotifyError, Result};
use crate::message::ImageStyle;

/// Set by the CI to "0" when every previous step succeeded
pub const BUILD_STATUS_ENV: &str = "BITRISE_BUILD_STATUS";

pub const WEBHOOK_URL_KEY: &str = "webhook_url";
pub const DEBUG_MODE_KEY: &str = "is_debug_mode";
pub const MESSAGE_KEY: &str = "message";
pub const MESSAGE_ON_ERROR_KEY: &str = "message_on_error";
pub const TITLE_KEY: &str = "title";
pub const TITLE_ON_ERROR_KEY: &str = "title_on_error";
pub const SUBTITLE_KEY: &str = "subtitle";
pub const SUBTITLE_ON_ERROR_KEY: &str = "subtitle_on_error";
pub const IMAGE_KEY: &str = "image";
pub const IMAGE_ON_ERROR_KEY: &str = "image_on_error";
pub const IMAGE_STYLE_KEY: &str = "image_style";
pub const IMAGE_STYLE_ON_ERROR_KEY: &str = "image_style_on_error";
pub const TEXT_KEY: &str = "text";
pub const TEXT_ON_ERROR_KEY: &str = "text_on_error";
pub const KEY_VALUE_KEY: &str = "key_value";
pub const KEY_VALUE_ON_ERROR_KEY: &str = "key_value_on_error";
pub const BUTTONS_KEY: &str = "buttons";
pub const BUTTONS_ON_ERROR_KEY: &str = "buttons_on_error";
pub const SIMPLE_TO_ADVANCED_KEY: &str = "convert_simple_to_advanced_format";
pub const ADVANCED_TO_SIMPLE_KEY: &str = "convert_advanced_to_simple_format";

#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub webhook_url: String,
    #[serde(deserialize_with = "deserialize_flag")]
    pub is_debug_mode: bool,

    pub message: String,
    pub message_on_error: String,
    pub title: String,
    pub title_on_error: String,
    pub subtitle: String,
    pub subtitle_on_error: String,
    #[serde(rename = "image")]
    pub image_url: String,
    #[serde(rename = "image_on_error")]
    pub image_url_on_error: String,
    pub image_style: String,
    pub image_style_on_error: String,
    pub text: String,
    pub text_on_error: String,
    pub key_value: String,
    pub key_value_on_error: String,
    pub buttons: String,
    pub buttons_on_error: String,

    #[serde(deserialize_with = "deserialize_flag")]
    pub convert_simple_to_advanced_format: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    pub convert_advanced_to_simple_format: bool,
}

impl Config {
    /// Builds the config from a key lookup; missing keys are empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).unwrap_or_default();
        let flag = |key: &str| parse_flag(key, &get(key));

        Ok(Self {
            webhook_url: get(WEBHOOK_URL_KEY),
            is_debug_mode: flag(DEBUG_MODE_KEY)?,
            message: get(MESSAGE_KEY),
            message_on_error: get(MESSAGE_ON_ERROR_KEY),
            title: get(TITLE_KEY),
            title_on_error: get(TITLE_ON_ERROR_KEY),
            subtitle: get(SUBTITLE_KEY),
            subtitle_on_error: get(SUBTITLE_ON_ERROR_KEY),
            image_url: get(IMAGE_KEY),
            image_url_on_error: get(IMAGE_ON_ERROR_KEY),
            image_style: get(IMAGE_STYLE_KEY),
            image_style_on_error: get(IMAGE_STYLE_ON_ERROR_KEY),
            text: get(TEXT_KEY),
            text_on_error: get(TEXT_ON_ERROR_KEY),
            key_value: get(KEY_VALUE_KEY),
            key_value_on_error: get(KEY_VALUE_ON_ERROR_KEY),
            buttons: get(BUTTONS_KEY),
            buttons_on_error: get(BUTTONS_ON_ERROR_KEY),
            convert_simple_to_advanced_format: flag(SIMPLE_TO_ADVANCED_KEY)?,
            convert_advanced_to_simple_format: flag(ADVANCED_TO_SIMPLE_KEY)?,
        })
    }

    /// Reads every input from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Checks the inputs that must be present before building a message
    pub fn validate(&self) -> Result<()> {
        if self.webhook_url.is_empty() {
            return Err(NotifyError::ConfigError(
                "WebhookURL is empty. You need to provide one".to_string(),
            ));
        }

        if self.text.is_empty() && self.buttons.is_empty() && self.key_value.is_empty() {
            return Err(NotifyError::ConfigError(
                "Text, keyValue and buttons are empty. You need to provide at least one"
                    .to_string(),
            ));
        }

        ImageStyle::parse_optional(&self.image_style)?;
        ImageStyle::parse_optional(&self.image_style_on_error)?;

        Ok(())
    }
}

/// Secrets are masked so the config can be logged as is
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let webhook_url = if self.webhook_url.is_empty() {
            ""
        } else {
            "***"
        };

        f.debug_struct("Config")
            .field("webhook_url", &webhook_url)
            .field("is_debug_mode", &self.is_debug_mode)
            .field("message", &self.message)
            .field("message_on_error", &self.message_on_error)
            .field("title", &self.title)
            .field("title_on_error", &self.title_on_error)
            .field("subtitle", &self.subtitle)
            .field("subtitle_on_error", &self.subtitle_on_error)
            .field("image_url", &self.image_url)
            .field("image_url_on_error", &self.image_url_on_error)
            .field("image_style", &self.image_style)
            .field("image_style_on_error", &self.image_style_on_error)
            .field("text", &self.text)
            .field("text_on_error", &self.text_on_error)
            .field("key_value", &self.key_value)
            .field("key_value_on_error", &self.key_value_on_error)
            .field("buttons", &self.buttons)
            .field("buttons_on_error", &self.buttons_on_error)
            .field(
                "convert_simple_to_advanced_format",
                &self.convert_simple_to_advanced_format,
            )
            .field(
                "convert_advanced_to_simple_format",
                &self.convert_advanced_to_simple_format,
            )
            .finish()
    }
}

/// Load and parse a TOML configuration file
pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let config_str = fs::read_to_string(path).map_err(|e| {
        NotifyError::ConfigError(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&config_str).map_err(|e| {
        NotifyError::ConfigError(format!(
            "Failed to parse config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(config)
}

/// Returns true if the CI reports the build as successful so far
pub fn build_succeeded_from_env() -> bool {
    std::env::var(BUILD_STATUS_ENV)
        .map(|status| status == "0")
        .unwrap_or(false)
}

/// Parses a yes/no input. Empty means no.
pub fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "" | "no" | "false" => Ok(false),
        "yes" | "true" => Ok(true),
        other => Err(NotifyError::ConfigError(format!(
            "Invalid value '{}' for '{}', expected yes or no",
            other, key
        ))),
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Text(text) => parse_flag("flag", &text).map_err(serde::de::Error::custom),
    }
}
