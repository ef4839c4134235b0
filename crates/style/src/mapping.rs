//! Style mappings: user-provided correspondences between XHTML classes or
//! tags and ODF style names.

use crate::error::StyleError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key under which a mapping stores the heading outline delta.
pub const OUTLINE_DELTA_KEY: &str = "h*";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
enum MappingValue {
    Style(String),
    OutlineDelta(i32),
}

/// Maps CSS class names or XHTML tag names onto ODF style names.
///
/// The same structure serves as the document-wide mapping (declared once per
/// template) and as the local mapping given to a single conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylesMapping {
    styles: HashMap<String, String>,
    outline_delta: Option<i32>,
}

impl StylesMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object such as `{"quote": "Quotations", "h*": -1}`.
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        Self::from_raw(serde_json::from_str(json)?)
    }

    /// Same as [`from_json`](Self::from_json), for a mapping embedded in a
    /// larger JSON document.
    pub fn from_value(value: serde_json::Value) -> Result<Self, StyleError> {
        Self::from_raw(serde_json::from_value(value)?)
    }

    fn from_raw(raw: HashMap<String, MappingValue>) -> Result<Self, StyleError> {
        let mut mapping = StylesMapping::new();
        for (key, value) in raw {
            match (key.as_str(), value) {
                (OUTLINE_DELTA_KEY, MappingValue::OutlineDelta(delta)) => {
                    mapping.outline_delta = Some(delta);
                }
                (OUTLINE_DELTA_KEY, MappingValue::Style(_)) => {
                    return Err(StyleError::InvalidMapping {
                        key,
                        message: "the outline delta must be an integer".to_string(),
                    });
                }
                (_, MappingValue::Style(style)) => {
                    mapping.styles.insert(key, style);
                }
                (_, MappingValue::OutlineDelta(_)) => {
                    return Err(StyleError::InvalidMapping {
                        key,
                        message: "a style name was expected".to_string(),
                    });
                }
            }
        }
        Ok(mapping)
    }

    pub fn with_style(mut self, key: impl Into<String>, style: impl Into<String>) -> Self {
        self.styles.insert(key.into(), style.into());
        self
    }

    pub fn with_outline_delta(mut self, delta: i32) -> Self {
        self.outline_delta = Some(delta);
        self
    }

    pub fn style_for(&self, key: &str) -> Option<&str> {
        self.styles.get(key).map(String::as_str)
    }

    pub fn outline_delta(&self) -> Option<i32> {
        self.outline_delta
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.styles.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty() && self.outline_delta.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_from_json() {
        let mapping =
            StylesMapping::from_json(r#"{"quote": "Quotations", "p": "Body", "h*": -1}"#).unwrap();
        assert_eq!(mapping.style_for("quote"), Some("Quotations"));
        assert_eq!(mapping.style_for("p"), Some("Body"));
        assert_eq!(mapping.style_for("h1"), None);
        assert_eq!(mapping.outline_delta(), Some(-1));
    }

    #[test]
    fn test_outline_delta_must_be_integer() {
        let err = StylesMapping::from_json(r#"{"h*": "Heading"}"#).unwrap_err();
        assert!(matches!(err, StyleError::InvalidMapping { ref key, .. } if key == "h*"));
    }

    #[test]
    fn test_style_entries_must_be_names() {
        let err = StylesMapping::from_json(r#"{"p": 3}"#).unwrap_err();
        assert!(matches!(err, StyleError::InvalidMapping { ref key, .. } if key == "p"));
    }

    #[test]
    fn test_empty_mapping() {
        assert!(StylesMapping::new().is_empty());
        assert!(!StylesMapping::new().with_outline_delta(0).is_empty());
    }
}
