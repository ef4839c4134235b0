use quick_xml::escape::EscapeError;
use thiserror::Error;

/// Errors that abort an XHTML → ODT conversion.
///
/// A conversion never returns partial output: its result is spliced verbatim
/// into a larger document, so any of these discards everything produced so
/// far.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Unknown entity '&{name};' at byte {position}")]
    UnknownEntity { name: String, position: u64 },

    #[error("Malformed nesting at <{tag}>: {message}")]
    MalformedNesting { tag: String, message: String },

    #[error("XML parsing error at byte {position}: {source}")]
    Xml {
        source: quick_xml::Error,
        position: u64,
    },

    #[error("XML attribute parsing error: {0}")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),

    #[error("Invalid character reference: {0}")]
    Escape(EscapeError),

    #[error("Encoding error: {0}")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Unsupported input encoding '{0}', only UTF-8 is handled")]
    UnsupportedEncoding(String),
}

impl ConvertError {
    /// Maps an unescaping failure, giving unknown entities their own variant.
    pub(crate) fn from_escape(err: EscapeError, position: u64) -> Self {
        match err {
            EscapeError::UnrecognizedEntity(_, name) => {
                ConvertError::UnknownEntity { name, position }
            }
            other => ConvertError::Escape(other),
        }
    }

    pub(crate) fn nesting(tag: &str, message: impl Into<String>) -> Self {
        ConvertError::MalformedNesting {
            tag: tag.to_string(),
            message: message.into(),
        }
    }
}
