//! The conversion session.
//!
//! An [`XhtmlEnvironment`] receives start/end/character events for one XHTML
//! chunk and writes the equivalent ODF markup. It keeps three stacks: open
//! elements, open lists and open tables. Where output lands is derived from
//! the table stack on every write (see [`XhtmlEnvironment::target`]).

use crate::attributes::Attributes;
use crate::config::Namespaces;
use crate::error::ConvertError;
use crate::frame::{Frame, FrameStack};
use crate::handlers::list::ListKind;
use crate::table::TableAccumulator;
use crate::tags::HtmlTag;
use log::{debug, trace};
use pody_style::{ResolvedStyle, StyleResolver};
use quick_xml::escape::escape;

pub(crate) struct XhtmlEnvironment<'a> {
    pub(crate) resolver: &'a dyn StyleResolver,
    pub(crate) ns: &'a Namespaces,
    /// Output written while no table is open.
    result: String,
    /// Character data received since the last structural event.
    content: String,
    pub(crate) frames: FrameStack,
    pub(crate) lists: Vec<ListKind>,
    pub(crate) tables: Vec<TableAccumulator>,
    /// Whether an implicit paragraph wraps root-level content right now.
    pub(crate) in_root_paragraph: bool,
}

impl<'a> XhtmlEnvironment<'a> {
    pub(crate) fn new(resolver: &'a dyn StyleResolver, ns: &'a Namespaces) -> Self {
        Self {
            resolver,
            ns,
            result: String::new(),
            content: String::new(),
            frames: FrameStack::default(),
            lists: Vec::new(),
            tables: Vec::new(),
            in_root_paragraph: false,
        }
    }

    /// The buffer output must go to: the innermost open table, or the global
    /// result when no table is open.
    pub(crate) fn target(&mut self) -> &mut String {
        match self.tables.last_mut() {
            Some(table) => table.target(),
            None => &mut self.result,
        }
    }

    pub(crate) fn dump(&mut self, markup: &str) {
        if markup.is_empty() {
            return;
        }
        trace!("[{} open table(s)] {}", self.tables.len(), markup);
        self.target().push_str(markup);
    }

    /// Resolves a style and lets the resolver vet it.
    pub(crate) fn find_style(&self, tag: &str, class: Option<&str>) -> Option<ResolvedStyle> {
        let style = self.resolver.resolve(tag, class)?;
        self.resolver.check_adequacy(tag, &style);
        Some(style)
    }

    /// Non-breaking spaces count as text.
    pub(crate) fn has_pending_text(&self) -> bool {
        self.content.chars().any(|c| !c.is_ascii_whitespace())
    }

    /// Writes the buffered character data, if it holds more than whitespace.
    ///
    /// Whitespace-only data is kept and ends up at the start of the next run.
    pub(crate) fn dump_current_content(&mut self) {
        if !self.has_pending_text() {
            return;
        }
        self.ensure_inner_paragraph();
        let content = std::mem::take(&mut self.content);
        let text = content.trim_matches(|c| c == '\n' || c == '\r');
        self.dump(&escape(text));
    }

    pub(crate) fn on_start(
        &mut self,
        name: &str,
        attributes: &Attributes,
    ) -> Result<(), ConvertError> {
        let name = name.to_ascii_lowercase();
        if self.frames.is_empty() {
            // The root container produces no markup of its own.
            self.frames.push(Frame::new(HtmlTag::Other, &name, None));
            return Ok(());
        }
        let tag = self.classify(HtmlTag::from_name(&name), &name);
        debug!("Start <{}> handled as {:?}", name, tag);

        if self.frames.at_root() {
            self.dump_root_paragraph(Some(tag));
        } else {
            self.dump_current_content();
        }
        if tag.is_inline() {
            self.ensure_inner_paragraph();
        }
        let mut frame = Frame::new(tag, &name, attributes.class());
        if tag.is_block_container() || tag.is_paragraph_level() {
            self.resolve_paragraph_conflict(&mut frame);
        }
        if tag.is_list() {
            frame.wrapped_in_item = self.frames.top().is_some_and(|f| f.tag.is_list());
        }
        self.frames.push(frame);

        match tag {
            HtmlTag::Anchor => self.start_link(attributes),
            HtmlTag::UnorderedList | HtmlTag::OrderedList => self.start_list(tag),
            HtmlTag::ListItem => self.start_list_item(),
            HtmlTag::Table => self.start_table(),
            HtmlTag::TableHead => self.start_table_head(),
            HtmlTag::TableRow => self.start_table_row(),
            HtmlTag::TableData | HtmlTag::TableHeader => self.start_table_cell(tag, attributes),
            HtmlTag::Other => {}
            _ => self.start_styled(tag, &name, attributes.class()),
        }
        Ok(())
    }

    pub(crate) fn on_end(&mut self, name: &str) -> Result<(), ConvertError> {
        let name = name.to_ascii_lowercase();
        if self.frames.at_root() {
            self.dump_root_paragraph(None);
        } else {
            self.dump_current_content();
        }
        let frame = self
            .frames
            .pop()
            .ok_or_else(|| ConvertError::nesting(&name, "end tag without a start tag"))?;
        if frame.name != name {
            return Err(ConvertError::nesting(
                &name,
                format!("expected the end of <{}>", frame.name),
            ));
        }
        if self.frames.is_empty() {
            return Ok(());
        }
        debug!("End <{}>", name);

        self.dump(&frame.pending_close);
        match frame.tag {
            HtmlTag::Anchor => self.end_link(),
            HtmlTag::UnorderedList | HtmlTag::OrderedList => self.end_list(&frame),
            HtmlTag::ListItem => self.end_list_item(),
            HtmlTag::Table => self.end_table(),
            HtmlTag::TableHead => self.end_table_head(),
            HtmlTag::TableRow => self.end_table_row(),
            HtmlTag::TableData | HtmlTag::TableHeader => self.end_table_cell(),
            HtmlTag::Other => {}
            tag => self.end_styled(tag),
        }
        self.dump(&frame.pending_reopen);
        Ok(())
    }

    pub(crate) fn on_characters(&mut self, text: &str) {
        self.content.push_str(text);
    }

    /// Ends the session and hands back the ODF chunk.
    pub(crate) fn finish(self) -> Result<String, ConvertError> {
        if let Some(frame) = self.frames.top() {
            return Err(ConvertError::nesting(&frame.name, "element is never closed"));
        }
        Ok(self.result)
    }

    /// Table parts outside a table and list items outside a list have no
    /// ODF counterpart; they are kept as transparent elements.
    fn classify(&self, tag: HtmlTag, name: &str) -> HtmlTag {
        let orphan = (tag.is_table_part() && self.tables.is_empty())
            || (tag == HtmlTag::ListItem && self.lists.is_empty());
        if orphan {
            debug!("<{}> outside of its container is ignored", name);
            HtmlTag::Other
        } else {
            tag
        }
    }
}
