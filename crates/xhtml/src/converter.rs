//! The public entry point of the transcoder.

use crate::config::ConversionOptions;
use crate::environment::XhtmlEnvironment;
use crate::error::ConvertError;
use crate::parser;
use log::debug;
use pody_style::{ResolvedStyle, StyleResolver};

/// Name of the element wrapped around every chunk before parsing.
pub const ROOT_TAG: &str = "podxhtml";

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Converts XHTML chunks into ODF text chunks ready to be spliced into a
/// `content.xml`.
///
/// A converter only borrows its resolver; each call to [`convert`] runs an
/// independent session, so one converter can serve many threads.
///
/// [`convert`]: Xhtml2OdtConverter::convert
pub struct Xhtml2OdtConverter<'a> {
    resolver: &'a dyn StyleResolver,
    options: ConversionOptions,
}

impl<'a> Xhtml2OdtConverter<'a> {
    pub fn new(resolver: &'a dyn StyleResolver) -> Self {
        Self {
            resolver,
            options: ConversionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ConversionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    pub fn convert(&self, xhtml: &str) -> Result<String, ConvertError> {
        let mut env = XhtmlEnvironment::new(self.resolver, &self.options.namespaces);
        if self.options.wrap_root {
            let wrapped = format!("<{ROOT_TAG}>{xhtml}</{ROOT_TAG}>");
            parser::parse(&wrapped, (ROOT_TAG.len() + 2) as u64, &mut env)?;
        } else {
            parser::parse(xhtml, 0, &mut env)?;
        }
        let odt = env.finish()?;
        debug!("Converted {} bytes of XHTML into {} bytes of ODT", xhtml.len(), odt.len());
        Ok(odt)
    }

    /// Converts raw bytes in the configured encoding.
    pub fn convert_bytes(&self, bytes: &[u8]) -> Result<String, ConvertError> {
        if !self.options.is_utf8() {
            return Err(ConvertError::UnsupportedEncoding(self.options.encoding.clone()));
        }
        let bytes = bytes.strip_prefix(BOM).unwrap_or(bytes);
        self.convert(std::str::from_utf8(bytes)?)
    }
}

/// A resolver without any style: every element falls back to its default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unstyled;

impl StyleResolver for Unstyled {
    fn resolve(&self, _tag: &str, _class: Option<&str>) -> Option<ResolvedStyle> {
        None
    }
}
