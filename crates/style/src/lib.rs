//! Styles of the target ODF document and the cascade that picks one for
//! each XHTML element.

pub mod error;
pub mod mapping;
pub mod resolver;
pub mod stylesheet;

pub use error::StyleError;
pub use mapping::{StylesMapping, OUTLINE_DELTA_KEY};
pub use resolver::{heading_level, ResolvedStyle, StyleCascade, StyleResolver, StylesManager};
pub use stylesheet::{OdtStyle, OdtStyles, StyleFamily, POD_SPECIFIC_STYLES};
