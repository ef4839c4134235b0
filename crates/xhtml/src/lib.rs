//! XHTML to OpenDocument text transcoding.
//!
//! Rich text edited in a browser is XHTML; an ODF document wants `text:p`,
//! `text:span`, `text:list` and `table:table` elements. This crate turns the
//! former into the latter, one chunk at a time, with styles picked through a
//! [`StyleResolver`](pody_style::StyleResolver).
//!
//! ```
//! use pody_xhtml::{Unstyled, Xhtml2OdtConverter};
//!
//! let odt = Xhtml2OdtConverter::new(&Unstyled).convert("<p>Hi <b>you</b></p>")?;
//! assert_eq!(
//!     odt,
//!     r#"<text:p>Hi <text:span text:style-name="podBold">you</text:span></text:p>"#
//! );
//! # Ok::<(), pody_xhtml::ConvertError>(())
//! ```

pub mod attributes;
pub mod config;
pub mod converter;
pub mod entities;
pub mod error;
pub mod tags;

mod environment;
mod frame;
mod handlers;
mod nesting;
mod parser;
mod table;

pub use attributes::Attributes;
pub use config::{ConversionOptions, Namespaces};
pub use converter::{ROOT_TAG, Unstyled, Xhtml2OdtConverter};
pub use error::ConvertError;
pub use tags::HtmlTag;

/// Converts a chunk with default options.
pub fn convert(
    xhtml: &str,
    resolver: &dyn pody_style::StyleResolver,
) -> Result<String, ConvertError> {
    Xhtml2OdtConverter::new(resolver).convert(xhtml)
}
