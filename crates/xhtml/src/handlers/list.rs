use crate::environment::XhtmlEnvironment;
use crate::frame::Frame;
use crate::tags::HtmlTag;

/// Style of a list item whose class asks to keep it with the next one.
const KEEP_WITH_NEXT: &str = "podItemKeepWithNext";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListKind {
    Bulleted,
    Numbered,
}

impl ListKind {
    fn list_style(self) -> &'static str {
        match self {
            ListKind::Bulleted => "podBulletedList",
            ListKind::Numbered => "podNumberedList",
        }
    }

    fn item_style(self, keep_with_next: bool) -> &'static str {
        match (self, keep_with_next) {
            (ListKind::Bulleted, false) => "podBulletItem",
            (ListKind::Bulleted, true) => "podBulletItemKeepWithNext",
            (ListKind::Numbered, false) => "podNumberItem",
            (ListKind::Numbered, true) => "podNumberItemKeepWithNext",
        }
    }
}

impl XhtmlEnvironment<'_> {
    pub(crate) fn start_list(&mut self, tag: HtmlTag) {
        let kind = if tag == HtmlTag::OrderedList {
            ListKind::Numbered
        } else {
            ListKind::Bulleted
        };
        self.lists.push(kind);
        let text = &self.ns.text;
        let mut markup = String::new();
        // ODF nests lists through a list item of the outer list.
        if self.frames.top().is_some_and(|f| f.wrapped_in_item) {
            markup.push_str(&format!("<{}:list-item>", text));
        }
        markup.push_str(&format!(
            r#"<{}:list {}:style-name="{}">"#,
            text,
            text,
            kind.list_style()
        ));
        self.dump(&markup);
    }

    pub(crate) fn end_list(&mut self, frame: &Frame) {
        self.lists.pop();
        let text = &self.ns.text;
        let mut markup = format!("</{}:list>", text);
        if frame.wrapped_in_item {
            markup.push_str(&format!("</{}:list-item>", text));
        }
        self.dump(&markup);
    }

    pub(crate) fn start_list_item(&mut self) {
        let markup = format!("<{}:list-item>", self.ns.text);
        self.dump(&markup);
    }

    pub(crate) fn end_list_item(&mut self) {
        let markup = format!("</{}:list-item>", self.ns.text);
        self.dump(&markup);
    }

    /// Start tag of the implicit paragraph inside a list item.
    pub(crate) fn list_item_paragraph(&self, class: Option<&str>) -> String {
        let kind = self.lists.last().copied().unwrap_or(ListKind::Bulleted);
        let keep_with_next = class
            .and_then(|class| self.find_style("li", Some(class)))
            .is_some_and(|style| style.name == KEEP_WITH_NEXT);
        let text = &self.ns.text;
        format!(
            r#"<{}:p {}:style-name="{}">"#,
            text,
            text,
            kind.item_style(keep_with_next)
        )
    }
}
