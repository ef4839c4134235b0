//! Conversion options.

use serde::{Deserialize, Serialize};

/// Prefixes bound to the ODF namespaces in the host document.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Namespaces {
    pub text: String,
    pub table: String,
    pub xlink: String,
}

impl Default for Namespaces {
    fn default() -> Self {
        Self {
            text: "text".to_string(),
            table: "table".to_string(),
            xlink: "xlink".to_string(),
        }
    }
}

/// Options of a single conversion.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ConversionOptions {
    /// Encoding label of byte input. Only UTF-8 is supported.
    pub encoding: String,
    pub namespaces: Namespaces,
    /// Wraps the input in a synthetic root element. Disable it when the
    /// caller already hands over a single-rooted document; its outermost
    /// element then acts as the root container and produces no markup.
    pub wrap_root: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            encoding: "utf-8".to_string(),
            namespaces: Namespaces::default(),
            wrap_root: true,
        }
    }
}

impl ConversionOptions {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_namespaces(mut self, namespaces: Namespaces) -> Self {
        self.namespaces = namespaces;
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    pub fn with_wrap_root(mut self, wrap_root: bool) -> Self {
        self.wrap_root = wrap_root;
        self
    }

    /// Whether byte input in the configured encoding can be read as-is.
    pub fn is_utf8(&self) -> bool {
        matches!(
            self.encoding.to_ascii_lowercase().as_str(),
            "utf-8" | "utf8"
        )
    }
}
