//! The fixed XHTML vocabulary understood by the transcoder and its mapping
//! onto ODF text elements.

use pody_style::heading_level;

/// Every XHTML tag the transcoder gives a meaning to.
///
/// Anything else is [`HtmlTag::Other`]: it produces no markup of its own and
/// its content flows into the enclosing element as inline content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlTag {
    Heading(u8),
    Paragraph,
    Bold,
    Strong,
    Italic,
    Emphasis,
    Subscript,
    Superscript,
    LineBreak,
    Div,
    Span,
    Anchor,
    UnorderedList,
    OrderedList,
    ListItem,
    Table,
    TableHead,
    TableRow,
    TableData,
    TableHeader,
    Other,
}

/// ODF elements produced by the generically mapped tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OdtTag {
    Heading,
    Paragraph,
    Span,
    LineBreak,
}

impl OdtTag {
    /// Local name inside the ODF `text` namespace.
    pub fn local_name(self) -> &'static str {
        match self {
            OdtTag::Heading => "h",
            OdtTag::Paragraph => "p",
            OdtTag::Span => "span",
            OdtTag::LineBreak => "line-break",
        }
    }
}

impl HtmlTag {
    /// Maps an already lower-cased tag name.
    pub fn from_name(name: &str) -> Self {
        if let Some(level) = heading_level(name) {
            return HtmlTag::Heading(level);
        }
        match name {
            "p" => HtmlTag::Paragraph,
            "b" => HtmlTag::Bold,
            "strong" => HtmlTag::Strong,
            "i" => HtmlTag::Italic,
            "em" => HtmlTag::Emphasis,
            "sub" => HtmlTag::Subscript,
            "sup" => HtmlTag::Superscript,
            "br" => HtmlTag::LineBreak,
            "div" => HtmlTag::Div,
            "span" => HtmlTag::Span,
            "a" => HtmlTag::Anchor,
            "ul" => HtmlTag::UnorderedList,
            "ol" => HtmlTag::OrderedList,
            "li" => HtmlTag::ListItem,
            "table" => HtmlTag::Table,
            "thead" => HtmlTag::TableHead,
            "tr" => HtmlTag::TableRow,
            "td" => HtmlTag::TableData,
            "th" => HtmlTag::TableHeader,
            _ => HtmlTag::Other,
        }
    }

    /// The ODF element for tags handled by the generic styled-element path.
    pub fn odt_tag(self) -> Option<OdtTag> {
        match self {
            HtmlTag::Heading(_) => Some(OdtTag::Heading),
            HtmlTag::Paragraph => Some(OdtTag::Paragraph),
            HtmlTag::Bold
            | HtmlTag::Strong
            | HtmlTag::Italic
            | HtmlTag::Emphasis
            | HtmlTag::Subscript
            | HtmlTag::Superscript
            | HtmlTag::Div
            | HtmlTag::Span => Some(OdtTag::Span),
            HtmlTag::LineBreak => Some(OdtTag::LineBreak),
            _ => None,
        }
    }

    /// Style applied when the style cascade finds nothing.
    pub fn default_style(self) -> Option<&'static str> {
        match self {
            HtmlTag::Bold | HtmlTag::Strong => Some("podBold"),
            HtmlTag::Italic | HtmlTag::Emphasis => Some("podItalic"),
            HtmlTag::Superscript => Some("podSup"),
            HtmlTag::Subscript => Some("podSub"),
            HtmlTag::TableData => Some("podCell"),
            HtmlTag::TableHeader => Some("podHeaderCell"),
            _ => None,
        }
    }

    /// Inline content: it needs a paragraph around it in ODF. Unknown tags
    /// count as inline.
    pub fn is_inline(self) -> bool {
        matches!(
            self,
            HtmlTag::Bold
                | HtmlTag::Strong
                | HtmlTag::Italic
                | HtmlTag::Emphasis
                | HtmlTag::Subscript
                | HtmlTag::Superscript
                | HtmlTag::LineBreak
                | HtmlTag::Div
                | HtmlTag::Span
                | HtmlTag::Anchor
                | HtmlTag::Other
        )
    }

    /// Containers that may not appear inside an ODF paragraph.
    pub fn is_block_container(self) -> bool {
        matches!(
            self,
            HtmlTag::Table | HtmlTag::UnorderedList | HtmlTag::OrderedList
        )
    }

    /// Elements rendered as an ODF paragraph of their own.
    pub fn is_paragraph_level(self) -> bool {
        matches!(self, HtmlTag::Paragraph | HtmlTag::Heading(_))
    }

    /// Elements whose text must sit in an inner paragraph.
    pub fn needs_inner_paragraph(self) -> bool {
        matches!(
            self,
            HtmlTag::TableData | HtmlTag::TableHeader | HtmlTag::ListItem
        )
    }

    pub fn is_list(self) -> bool {
        matches!(self, HtmlTag::UnorderedList | HtmlTag::OrderedList)
    }

    pub fn is_cell(self) -> bool {
        matches!(self, HtmlTag::TableData | HtmlTag::TableHeader)
    }

    /// Parts that only make sense inside a table.
    pub fn is_table_part(self) -> bool {
        matches!(
            self,
            HtmlTag::TableHead | HtmlTag::TableRow | HtmlTag::TableData | HtmlTag::TableHeader
        )
    }
}
