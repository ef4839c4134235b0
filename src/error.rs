// src/error.rs
use pody_style::StyleError;
use pody_xhtml::ConvertError;
use thiserror::Error;

/// Everything that can go wrong between loading styles and producing ODF
/// markup.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Style configuration failed: {0}")]
    Style(#[from] StyleError),

    #[error("Conversion failed: {0}")]
    Convert(#[from] ConvertError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// JSON errors only show up while reading configuration files.
impl From<serde_json::Error> for RenderError {
    fn from(e: serde_json::Error) -> Self {
        RenderError::Style(StyleError::JsonParse(e))
    }
}
