//! Defines the catalogue of named ODF styles available in the target document.

use crate::error::StyleError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// The ODF family a named style belongs to.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum StyleFamily {
    Paragraph,
    Text,
    Table,
    TableCell,
    List,
}

/// A named style declared by the target document (or predefined by us).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OdtStyle {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub family: StyleFamily,
    /// Only meaningful for paragraph styles used by headings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_level: Option<u8>,
}

impl OdtStyle {
    pub fn new(name: impl Into<String>, family: StyleFamily) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            family,
            outline_level: None,
        }
    }

    pub fn with_outline_level(mut self, level: u8) -> Self {
        self.outline_level = Some(level);
        self
    }
}

/// A lookup table of named styles.
#[derive(Debug, Clone, Default)]
pub struct OdtStyles {
    styles: HashMap<String, Arc<OdtStyle>>,
}

impl OdtStyles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON array of style declarations.
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        let styles: Vec<OdtStyle> = serde_json::from_str(json)?;
        Ok(styles.into_iter().collect())
    }

    pub fn insert(&mut self, style: OdtStyle) {
        self.styles.insert(style.name.clone(), Arc::new(style));
    }

    pub fn get(&self, name: &str) -> Option<&Arc<OdtStyle>> {
        self.styles.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<OdtStyle>> {
        self.styles.values()
    }

    /// Finds the paragraph style declared at the given outline level.
    ///
    /// Several styles may share a level; the one with the smallest name wins
    /// so the choice does not depend on hash order.
    pub fn paragraph_style_at_level(&self, level: u8) -> Option<&Arc<OdtStyle>> {
        self.styles
            .values()
            .filter(|s| s.family == StyleFamily::Paragraph && s.outline_level == Some(level))
            .min_by(|a, b| a.name.cmp(&b.name))
    }
}

impl FromIterator<OdtStyle> for OdtStyles {
    fn from_iter<I: IntoIterator<Item = OdtStyle>>(iter: I) -> Self {
        let mut styles = OdtStyles::new();
        for style in iter {
            styles.insert(style);
        }
        styles
    }
}

/// Styles every generated document carries, whatever its template declares.
pub static POD_SPECIFIC_STYLES: Lazy<OdtStyles> = Lazy::new(|| {
    [
        ("podBold", StyleFamily::Text),
        ("podItalic", StyleFamily::Text),
        ("podSup", StyleFamily::Text),
        ("podSub", StyleFamily::Text),
        ("podCell", StyleFamily::TableCell),
        ("podHeaderCell", StyleFamily::TableCell),
        ("podTable", StyleFamily::Table),
        ("podBulletedList", StyleFamily::List),
        ("podNumberedList", StyleFamily::List),
        ("podBulletItem", StyleFamily::Paragraph),
        ("podNumberItem", StyleFamily::Paragraph),
        ("podBulletItemKeepWithNext", StyleFamily::Paragraph),
        ("podNumberItemKeepWithNext", StyleFamily::Paragraph),
        ("podItemKeepWithNext", StyleFamily::Paragraph),
    ]
    .into_iter()
    .map(|(name, family)| OdtStyle::new(name, family))
    .collect()
});
