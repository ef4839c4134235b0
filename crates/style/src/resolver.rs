//! The style cascade used to pick an ODF style for an XHTML element.
//!
//! Resolution tries the following tiers in order, the first hit wins:
//!
//! 1. local mapping, keyed by the `class` attribute
//! 2. local mapping, keyed by the tag name
//! 3. document-wide mapping, keyed by the `class` attribute
//! 4. document-wide mapping, keyed by the tag name
//! 5. a style of the document whose name equals the `class` attribute
//! 6. a pod-specific style whose name equals the `class` attribute
//! 7. for headings only, the paragraph style at the heading's outline level
//!
//! A miss on every tier is not an error: the element is emitted unstyled.

use crate::error::StyleError;
use crate::mapping::StylesMapping;
use crate::stylesheet::{OdtStyle, OdtStyles, StyleFamily, POD_SPECIFIC_STYLES};
use log::{debug, warn};

/// The outcome of a successful style resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub name: String,
    pub outline_level: Option<u8>,
}

impl ResolvedStyle {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outline_level: None,
        }
    }
}

impl From<&OdtStyle> for ResolvedStyle {
    fn from(style: &OdtStyle) -> Self {
        Self {
            name: style.name.clone(),
            outline_level: style.outline_level,
        }
    }
}

/// What the transcoder needs from whoever owns the document's styles.
///
/// Implementations are read-only during a conversion and may be shared
/// between concurrent conversions.
pub trait StyleResolver {
    fn resolve(&self, tag: &str, class: Option<&str>) -> Option<ResolvedStyle>;

    /// Called after every successful resolution. Problems are reported by the
    /// implementation itself; they never abort a conversion.
    fn check_adequacy(&self, _tag: &str, _style: &ResolvedStyle) {}
}

/// Returns the numeral of an `h1`..`h6` tag.
pub fn heading_level(tag: &str) -> Option<u8> {
    match tag.as_bytes() {
        [b'h', n @ b'1'..=b'6'] => Some(n - b'0'),
        _ => None,
    }
}

const PARAGRAPH_TAGS: &[&str] = &["p", "h1", "h2", "h3", "h4", "h5", "h6", "li"];
const INLINE_TAGS: &[&str] = &["b", "strong", "i", "em", "sup", "sub", "span", "div", "a"];

/// Document-wide style state: the catalogue of the target document plus its
/// global style mapping.
#[derive(Debug, Clone, Default)]
pub struct StylesManager {
    styles: OdtStyles,
    mapping: StylesMapping,
}

impl StylesManager {
    pub fn new(styles: OdtStyles, mapping: StylesMapping) -> Result<Self, StyleError> {
        let manager = Self {
            styles,
            mapping: StylesMapping::new(),
        };
        manager.check_mapping(&mapping)?;
        Ok(Self { mapping, ..manager })
    }

    pub fn from_json(styles_json: &str, mapping_json: &str) -> Result<Self, StyleError> {
        Self::new(
            OdtStyles::from_json(styles_json)?,
            StylesMapping::from_json(mapping_json)?,
        )
    }

    pub fn styles(&self) -> &OdtStyles {
        &self.styles
    }

    pub fn mapping(&self) -> &StylesMapping {
        &self.mapping
    }

    /// Ensures every style named by `mapping` exists in the document or among
    /// the pod-specific styles.
    pub fn check_mapping(&self, mapping: &StylesMapping) -> Result<(), StyleError> {
        for (key, style) in mapping.iter() {
            if self.lookup(style).is_none() {
                return Err(StyleError::UnknownStyle {
                    key: key.to_string(),
                    style: style.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Combines the document-wide state with the local mapping of one
    /// conversion.
    pub fn cascade<'a>(&'a self, local: &'a StylesMapping) -> StyleCascade<'a> {
        StyleCascade {
            manager: self,
            local: Some(local),
        }
    }

    fn lookup(&self, name: &str) -> Option<&OdtStyle> {
        self.styles
            .get(name)
            .or_else(|| POD_SPECIFIC_STYLES.get(name))
            .map(|s| s.as_ref())
    }

    fn resolve_name(&self, name: &str) -> ResolvedStyle {
        self.lookup(name)
            .map(ResolvedStyle::from)
            .unwrap_or_else(|| ResolvedStyle::named(name))
    }

    fn report_adequacy(&self, tag: &str, resolved: &ResolvedStyle) {
        let Some(style) = self.lookup(&resolved.name) else {
            debug!("Style '{}' for <{}> is not declared by the document", resolved.name, tag);
            return;
        };
        let expected = if PARAGRAPH_TAGS.contains(&tag) {
            StyleFamily::Paragraph
        } else if INLINE_TAGS.contains(&tag) {
            StyleFamily::Text
        } else {
            return;
        };
        if style.family != expected {
            warn!(
                "<{}> is rendered with style '{}' of family {:?}, a {:?} style was expected",
                tag, style.name, style.family, expected
            );
        }
    }
}

impl StyleResolver for StylesManager {
    fn resolve(&self, tag: &str, class: Option<&str>) -> Option<ResolvedStyle> {
        StyleCascade {
            manager: self,
            local: None,
        }
        .resolve(tag, class)
    }

    fn check_adequacy(&self, tag: &str, style: &ResolvedStyle) {
        self.report_adequacy(tag, style);
    }
}

struct StyleQuery<'q> {
    tag: &'q str,
    class: Option<&'q str>,
}

type Tier = fn(&StyleCascade<'_>, &StyleQuery<'_>) -> Option<ResolvedStyle>;

const TIERS: [(&str, Tier); 7] = [
    ("local mapping (class)", local_by_class),
    ("local mapping (tag)", local_by_tag),
    ("global mapping (class)", global_by_class),
    ("global mapping (tag)", global_by_tag),
    ("document style", document_style),
    ("pod-specific style", pod_specific_style),
    ("outline level", outline_level),
];

/// A [`StylesManager`] seen through the local mapping of one conversion.
#[derive(Debug, Clone, Copy)]
pub struct StyleCascade<'a> {
    manager: &'a StylesManager,
    local: Option<&'a StylesMapping>,
}

fn local_by_class(c: &StyleCascade<'_>, q: &StyleQuery<'_>) -> Option<ResolvedStyle> {
    let name = c.local?.style_for(q.class?)?;
    Some(c.manager.resolve_name(name))
}

fn local_by_tag(c: &StyleCascade<'_>, q: &StyleQuery<'_>) -> Option<ResolvedStyle> {
    let name = c.local?.style_for(q.tag)?;
    Some(c.manager.resolve_name(name))
}

fn global_by_class(c: &StyleCascade<'_>, q: &StyleQuery<'_>) -> Option<ResolvedStyle> {
    let name = c.manager.mapping.style_for(q.class?)?;
    Some(c.manager.resolve_name(name))
}

fn global_by_tag(c: &StyleCascade<'_>, q: &StyleQuery<'_>) -> Option<ResolvedStyle> {
    let name = c.manager.mapping.style_for(q.tag)?;
    Some(c.manager.resolve_name(name))
}

fn document_style(c: &StyleCascade<'_>, q: &StyleQuery<'_>) -> Option<ResolvedStyle> {
    c.manager
        .styles
        .get(q.class?)
        .map(|s| ResolvedStyle::from(s.as_ref()))
}

fn pod_specific_style(_: &StyleCascade<'_>, q: &StyleQuery<'_>) -> Option<ResolvedStyle> {
    POD_SPECIFIC_STYLES
        .get(q.class?)
        .map(|s| ResolvedStyle::from(s.as_ref()))
}

fn outline_level(c: &StyleCascade<'_>, q: &StyleQuery<'_>) -> Option<ResolvedStyle> {
    let numeral = i32::from(heading_level(q.tag)?);
    let delta = c
        .local
        .and_then(StylesMapping::outline_delta)
        .or_else(|| c.manager.mapping.outline_delta())
        .unwrap_or(0);
    let level = u8::try_from((numeral + delta).clamp(1, i32::from(u8::MAX))).ok()?;
    c.manager
        .styles
        .paragraph_style_at_level(level)
        .map(|s| ResolvedStyle::from(s.as_ref()))
}

impl StyleResolver for StyleCascade<'_> {
    fn resolve(&self, tag: &str, class: Option<&str>) -> Option<ResolvedStyle> {
        let query = StyleQuery { tag, class };
        let resolved = TIERS.iter().find_map(|(label, tier)| {
            tier(self, &query).inspect(|style| {
                debug!("Resolved <{}> to style '{}' via {}", tag, style.name, label)
            })
        });
        if resolved.is_none() {
            debug!("No style found for <{}> (class {:?})", tag, class);
        }
        resolved
    }

    fn check_adequacy(&self, tag: &str, style: &ResolvedStyle) {
        self.manager.report_adequacy(tag, style);
    }
}
