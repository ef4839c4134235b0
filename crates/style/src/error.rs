use thiserror::Error;

/// Errors raised while loading style catalogues and style mappings.
#[derive(Error, Debug)]
pub enum StyleError {
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Style mapping '{key}' refers to unknown style '{style}'")]
    UnknownStyle { key: String, style: String },

    #[error("Invalid style mapping entry '{key}': {message}")]
    InvalidMapping { key: String, message: String },
}
