pub mod fixtures;
pub mod odt_assertions;

use pody::{
    OdtStyle, OdtStyles, RenderError, StyleFamily, StylesManager, StylesMapping, XhtmlRenderer,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A catalogue resembling the styles of a typical ODT template.
pub fn document_styles() -> OdtStyles {
    [
        OdtStyle::new("Standard", StyleFamily::Paragraph),
        OdtStyle::new("Text_20_body", StyleFamily::Paragraph),
        OdtStyle::new("Quotations", StyleFamily::Paragraph),
        OdtStyle::new("Heading_20_1", StyleFamily::Paragraph).with_outline_level(1),
        OdtStyle::new("Heading_20_2", StyleFamily::Paragraph).with_outline_level(2),
        OdtStyle::new("Heading_20_3", StyleFamily::Paragraph).with_outline_level(3),
        OdtStyle::new("Emphasis", StyleFamily::Text),
        OdtStyle::new("Strong_20_Emphasis", StyleFamily::Text),
    ]
    .into_iter()
    .collect()
}

/// A renderer without any document style.
pub fn plain_renderer() -> XhtmlRenderer {
    XhtmlRenderer::default()
}

/// A renderer over [`document_styles`] with the given global mapping.
pub fn styled_renderer(mapping: StylesMapping) -> Result<XhtmlRenderer, RenderError> {
    Ok(XhtmlRenderer::new(StylesManager::new(document_styles(), mapping)?))
}

/// Renders with no document style at all.
pub fn render(xhtml: &str) -> Result<String, RenderError> {
    init_logger();
    plain_renderer().render(xhtml)
}
