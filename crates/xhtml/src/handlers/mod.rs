//! Markup written for each kind of XHTML element.
//!
//! Every handler is an `impl XhtmlEnvironment` block; the environment picks
//! one from the element's [`HtmlTag`](crate::tags::HtmlTag).

pub(crate) mod link;
pub(crate) mod list;
pub(crate) mod styled;
pub(crate) mod table;
