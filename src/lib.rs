//! Renders rich-text XHTML fragments as OpenDocument text markup.
//!
//! The heavy lifting happens in two crates re-exported here: `pody-style`
//! holds the target document's styles and resolves a style per element, and
//! `pody-xhtml` does the transcoding. [`XhtmlRenderer`] ties them together
//! for one target document.
//!
//! ```
//! use pody::{StylesMapping, XhtmlRenderer};
//!
//! let renderer = XhtmlRenderer::default();
//! let odt = renderer.render("<ul><li>one</li></ul>")?;
//! assert!(odt.starts_with(r#"<text:list text:style-name="podBulletedList">"#));
//!
//! let local = StylesMapping::new().with_style("p", "podItemKeepWithNext");
//! let odt = renderer.render_with_mapping("<p>x</p>", &local)?;
//! assert_eq!(odt, r#"<text:p text:style-name="podItemKeepWithNext">x</text:p>"#);
//! # Ok::<(), pody::RenderError>(())
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod renderer;

pub use batch::render_batch;
#[cfg(feature = "parallel")]
pub use batch::configure_thread_pool;
pub use config::RendererConfig;
pub use error::RenderError;
pub use renderer::XhtmlRenderer;

pub use pody_style::{
    OdtStyle, OdtStyles, ResolvedStyle, StyleCascade, StyleError, StyleFamily, StyleResolver,
    StylesManager, StylesMapping,
};
pub use pody_xhtml::{ConversionOptions, ConvertError, Namespaces, Unstyled, Xhtml2OdtConverter};
