//! Repairs XHTML nesting that ODF does not allow.
//!
//! Two situations need fixing. Text or inline elements directly inside a
//! cell or list item get an implicit paragraph around them. A list, table or
//! paragraph opening inside a paragraph closes that paragraph first, and a
//! real paragraph is reopened once the block is over.

use crate::environment::XhtmlEnvironment;
use crate::frame::Frame;
use crate::tags::HtmlTag;
use log::debug;

impl XhtmlEnvironment<'_> {
    /// Opens the inner paragraph of the current cell or list item, unless it
    /// is already open.
    pub(crate) fn ensure_inner_paragraph(&mut self) {
        self.ensure_root_paragraph();
        let Some(top) = self.frames.top() else {
            return;
        };
        if !top.tag.needs_inner_paragraph() || !top.pending_close.is_empty() {
            return;
        }
        debug!("Opening an implicit paragraph inside <{}>", top.name);
        let opening = if top.tag == HtmlTag::ListItem {
            self.list_item_paragraph(top.class.as_deref())
        } else {
            format!("<{}:p>", self.ns.text)
        };
        self.dump(&opening);
        let closing = format!("</{}:p>", self.ns.text);
        if let Some(top) = self.frames.top_mut() {
            top.pending_close = closing;
        }
    }

    /// Closes the paragraph `frame` is about to open inside.
    ///
    /// An implicit paragraph is simply dropped; the next inline content
    /// reopens one. A real paragraph or heading is reopened, with the same
    /// start tag, right after `frame` ends.
    pub(crate) fn resolve_paragraph_conflict(&mut self, frame: &mut Frame) {
        if self.in_root_paragraph && self.frames.transparent_above_root() {
            debug!("<{}> ends the root paragraph", frame.name);
            self.close_root_paragraph();
            return;
        }
        let ns = self.ns;
        let Some(top) = self.frames.top_mut() else {
            return;
        };
        if !top.is_paragraph() {
            return;
        }
        debug!(
            "<{}> cannot live inside <{}>, closing the paragraph",
            frame.name, top.name
        );
        let closing = if top.has_inner_paragraph() {
            std::mem::take(&mut top.pending_close)
        } else {
            let local = top.tag.odt_tag().map_or("p", |odt| odt.local_name());
            frame.pending_reopen = top
                .opening
                .clone()
                .unwrap_or_else(|| format!("<{}:{}>", ns.text, local));
            format!("</{}:{}>", ns.text, local)
        };
        self.dump(&closing);
    }

    /// Wraps character data found directly in the root container.
    ///
    /// `next` is the tag whose start triggered the flush, `None` when the
    /// root container itself ends. Inline tags keep the root paragraph open.
    pub(crate) fn dump_root_paragraph(&mut self, next: Option<HtmlTag>) {
        let must_start = !self.in_root_paragraph;
        let must_end = next.is_none_or(|tag| !tag.is_inline());
        if must_start && must_end && !self.has_pending_text() {
            return;
        }
        if must_start {
            self.open_root_paragraph();
        }
        self.dump_current_content();
        if must_end {
            self.close_root_paragraph();
        }
    }

    /// Reopens the root paragraph for content that follows a block inside
    /// transparent elements, e.g. `<font>a<table>..</table>b</font>`.
    fn ensure_root_paragraph(&mut self) {
        if !self.in_root_paragraph && self.frames.transparent_above_root() {
            self.open_root_paragraph();
        }
    }

    fn open_root_paragraph(&mut self) {
        let opening = self.styled_opening(HtmlTag::Paragraph, "p", None);
        self.dump(&opening);
        self.in_root_paragraph = true;
    }

    fn close_root_paragraph(&mut self) {
        let closing = format!("</{}:p>", self.ns.text);
        self.dump(&closing);
        self.in_root_paragraph = false;
    }
}
