//! The document-level entry point: one renderer per target document, one
//! call per rich-text fragment.

use crate::config::RendererConfig;
use crate::error::RenderError;
use log::debug;
use pody_style::{StyleResolver, StylesManager, StylesMapping};
use pody_xhtml::{ConversionOptions, Xhtml2OdtConverter};
use std::path::Path;

/// Renders XHTML fragments for one target document.
///
/// The renderer owns the document's styles and is immutable afterwards, so a
/// shared reference can be used from any number of threads at once; every
/// call runs its own conversion session.
#[derive(Debug, Clone, Default)]
pub struct XhtmlRenderer {
    styles: StylesManager,
    options: ConversionOptions,
}

impl XhtmlRenderer {
    pub fn new(styles: StylesManager) -> Self {
        Self {
            styles,
            options: ConversionOptions::default(),
        }
    }

    pub fn from_config(config: &RendererConfig) -> Result<Self, RenderError> {
        Ok(Self::new(config.styles_manager()?).with_options(config.options.clone()))
    }

    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        Self::from_config(&RendererConfig::from_file(path)?)
    }

    pub fn with_options(mut self, options: ConversionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn styles(&self) -> &StylesManager {
        &self.styles
    }

    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Renders one fragment with the document-wide styles.
    pub fn render(&self, xhtml: &str) -> Result<String, RenderError> {
        self.render_with(&self.styles, xhtml)
    }

    /// Renders one fragment, `local` taking precedence over the
    /// document-wide mapping.
    pub fn render_with_mapping(
        &self,
        xhtml: &str,
        local: &StylesMapping,
    ) -> Result<String, RenderError> {
        self.styles.check_mapping(local)?;
        let cascade = self.styles.cascade(local);
        self.render_with(&cascade, xhtml)
    }

    /// Renders raw bytes in the configured encoding.
    pub fn render_bytes(&self, bytes: &[u8]) -> Result<String, RenderError> {
        let converter = Xhtml2OdtConverter::new(&self.styles).with_options(self.options.clone());
        Ok(converter.convert_bytes(bytes)?)
    }

    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String, RenderError> {
        let path = path.as_ref();
        debug!("Rendering {}", path.display());
        let bytes = std::fs::read(path)?;
        self.render_bytes(&bytes)
    }

    fn render_with(&self, resolver: &dyn StyleResolver, xhtml: &str) -> Result<String, RenderError> {
        let converter = Xhtml2OdtConverter::new(resolver).with_options(self.options.clone());
        Ok(converter.convert(xhtml)?)
    }
}
