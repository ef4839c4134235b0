//! On-disk configuration of a renderer.

use crate::error::RenderError;
use pody_style::{OdtStyle, OdtStyles, StylesManager, StylesMapping};
use pody_xhtml::ConversionOptions;
use serde::Deserialize;
use std::path::Path;

/// A renderer configuration file:
///
/// ```json
/// {
///   "styles": [{ "name": "Quotations", "family": "paragraph" }],
///   "mapping": { "quote": "Quotations", "h*": 1 },
///   "options": { "namespaces": { "text": "text" } }
/// }
/// ```
///
/// Every section is optional.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RendererConfig {
    pub styles: Vec<OdtStyle>,
    pub mapping: Option<serde_json::Value>,
    pub options: ConversionOptions,
}

impl RendererConfig {
    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Builds the document-wide style state, validating the mapping against
    /// the declared styles.
    pub fn styles_manager(&self) -> Result<StylesManager, RenderError> {
        let styles: OdtStyles = self.styles.iter().cloned().collect();
        let mapping = match &self.mapping {
            Some(value) => StylesMapping::from_value(value.clone())?,
            None => StylesMapping::new(),
        };
        Ok(StylesManager::new(styles, mapping)?)
    }
}
