use crate::environment::XhtmlEnvironment;
use crate::tags::{HtmlTag, OdtTag};
use quick_xml::escape::escape;
use std::fmt::Write;

impl XhtmlEnvironment<'_> {
    /// Builds the start tag of a paragraph, heading or span, resolving its
    /// style through the cascade and falling back to the tag's default.
    pub(crate) fn styled_opening(&self, tag: HtmlTag, name: &str, class: Option<&str>) -> String {
        let Some(odt) = tag.odt_tag() else {
            return String::new();
        };
        let text = &self.ns.text;
        let mut markup = format!("<{}:{}", text, odt.local_name());
        let resolved = self.find_style(name, class);
        let style_name = resolved.as_ref().map(|s| s.name.as_str()).or(tag.default_style());
        if let Some(style_name) = style_name {
            let _ = write!(markup, r#" {}:style-name="{}""#, text, escape(style_name));
        }
        if odt == OdtTag::Heading {
            if let Some(level) = resolved.as_ref().and_then(|s| s.outline_level) {
                let _ = write!(markup, r#" {}:outline-level="{}""#, text, level);
            }
        }
        markup.push('>');
        markup
    }

    pub(crate) fn start_styled(&mut self, tag: HtmlTag, name: &str, class: Option<&str>) {
        if tag == HtmlTag::LineBreak {
            let markup = format!("<{}:line-break/>", self.ns.text);
            self.dump(&markup);
            return;
        }
        let opening = self.styled_opening(tag, name, class);
        self.dump(&opening);
        if tag.is_paragraph_level() {
            if let Some(frame) = self.frames.top_mut() {
                frame.opening = Some(opening);
            }
        }
    }

    pub(crate) fn end_styled(&mut self, tag: HtmlTag) {
        let Some(odt) = tag.odt_tag() else {
            return;
        };
        if odt == OdtTag::LineBreak {
            return;
        }
        let closing = format!("</{}:{}>", self.ns.text, odt.local_name());
        self.dump(&closing);
    }
}
