use crate::attributes::Attributes;
use crate::environment::XhtmlEnvironment;
use quick_xml::escape::escape;

impl XhtmlEnvironment<'_> {
    pub(crate) fn start_link(&mut self, attributes: &Attributes) {
        let ns = self.ns;
        let mut markup = format!(r#"<{}:a {}:type="simple""#, ns.text, ns.xlink);
        if let Some(href) = attributes.get("href") {
            markup.push_str(&format!(r#" {}:href="{}""#, ns.xlink, escape(href)));
        }
        markup.push('>');
        self.dump(&markup);
    }

    pub(crate) fn end_link(&mut self) {
        let closing = format!("</{}:a>", self.ns.text);
        self.dump(&closing);
    }
}
