use std::io;

/// Custom error type for chat_card_notify operations
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Could not parse button with declaration {0}")]
    InvalidButtonDeclaration(String),

    #[error("Unknown button type `{0}`")]
    UnknownButtonType(String),

    #[error("button requires onClick")]
    ButtonMissingOnClick,

    #[error("button must have exactly one of text/iconURL/icon")]
    ButtonContentNotExclusive,

    #[error("row must have content")]
    RowMissingContent,

    #[error("row must have either an icon URL, a built-in icon, or neither, not both")]
    RowIconConflict,

    #[error("{0}")]
    KeyValueDecode(serde_json::Error),

    #[error("Invalid image style `{0}`, expected one of: square, circular")]
    InvalidImageStyle(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to serialize message: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to send the request: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("server error: {status}, response: {body}")]
    ServerError { status: String, body: String },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

/// Helper type for Results that use NotifyError
pub type Result<T> = std::result::Result<T, NotifyError>;
