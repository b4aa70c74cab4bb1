use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PressloopError {
    // Hook errors
    #[error("INVALID_CALLBACK: callback '{callback}' for event '{event}' cannot be invoked")]
    InvalidCallback { event: String, callback: String },

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // Feed errors
    #[error("FEED_PARSE_ERROR: failed to parse '{path}': {reason}")]
    FeedParseError { path: PathBuf, reason: String },

    #[error("FEED_UNSUPPORTED_FORMAT: '{0}' is neither .toml nor .json")]
    FeedUnsupportedFormat(PathBuf),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PressloopError>;
