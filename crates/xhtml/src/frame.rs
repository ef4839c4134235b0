//! The stack of currently open XHTML elements.

use crate::tags::HtmlTag;

/// One open XHTML element and the obligations it carries until its end tag.
#[derive(Debug, Clone)]
pub(crate) struct Frame {
    pub tag: HtmlTag,
    pub name: String,
    pub class: Option<String>,
    /// Markup written after this element's end tag, in the parent. Non-empty
    /// when this element forced an ancestor paragraph to close early.
    pub pending_reopen: String,
    /// Markup written right before this element's own end tag, such as an
    /// implicit inner paragraph.
    pub pending_close: String,
    /// Start tag as written, for paragraph-like elements.
    pub opening: Option<String>,
    /// Set on a list nested directly inside another list.
    pub wrapped_in_item: bool,
}

impl Frame {
    pub fn new(tag: HtmlTag, name: &str, class: Option<&str>) -> Self {
        Self {
            tag,
            name: name.to_string(),
            class: class.map(str::to_string),
            pending_reopen: String::new(),
            pending_close: String::new(),
            opening: None,
            wrapped_in_item: false,
        }
    }

    /// True when the element currently renders as an open ODF paragraph:
    /// paragraphs and headings themselves, or cells and list items that
    /// opened an inner paragraph.
    pub fn is_paragraph(&self) -> bool {
        self.tag.is_paragraph_level() || self.has_inner_paragraph()
    }

    pub fn has_inner_paragraph(&self) -> bool {
        self.tag.needs_inner_paragraph() && !self.pending_close.is_empty()
    }
}

/// LIFO of open elements. The bottom frame is the root container.
#[derive(Debug, Default)]
pub(crate) struct FrameStack {
    frames: Vec<Frame>,
}

impl FrameStack {
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    pub fn top(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// True when only transparent elements sit between the root container
    /// and the next event, so output still lands at root level.
    pub fn transparent_above_root(&self) -> bool {
        self.frames.len() > 1 && self.frames[1..].iter().all(|f| f.tag == HtmlTag::Other)
    }

    /// True when the next event happens directly inside the root container.
    pub fn at_root(&self) -> bool {
        self.frames.len() == 1
    }
}
