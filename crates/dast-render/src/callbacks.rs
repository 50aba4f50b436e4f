//! Caller-supplied hooks.
//!
//! Every hook is optional. A missing hook is a normal state with a fixed
//! meaning: embedded records render as nothing and item links are inert.

use std::fmt;

use crate::presentation::{Element, Inline};

/// Called with the URL of an activated link.
pub type LinkHandler = Box<dyn Fn(&str) + Send + Sync>;

/// Called with the record id of an activated item link.
pub type ItemLinkHandler = Box<dyn Fn(&str) + Send + Sync>;

/// Produces the text flow shown for an inline record.
pub type InlineItemRenderer = Box<dyn Fn(&str) -> Vec<Inline> + Send + Sync>;

/// Produces the box shown for an embedded block record.
pub type BlockRenderer = Box<dyn Fn(&str) -> Option<Element> + Send + Sync>;

/// The four extension points of a render.
#[derive(Default)]
pub struct Callbacks {
    pub on_link_press: Option<LinkHandler>,
    pub on_item_link_press: Option<ItemLinkHandler>,
    pub render_inline_item: Option<InlineItemRenderer>,
    pub render_block: Option<BlockRenderer>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fragment for an inline record, empty without a renderer.
    pub fn inline_item(&self, item: &str) -> Vec<Inline> {
        match &self.render_inline_item {
            Some(render) => render(item),
            None => Vec::new(),
        }
    }

    /// Box for an embedded block record, `None` without a renderer.
    pub fn block(&self, item: &str) -> Option<Element> {
        self.render_block.as_ref().and_then(|render| render(item))
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_link_press", &self.on_link_press.is_some())
            .field("on_item_link_press", &self.on_item_link_press.is_some())
            .field("render_inline_item", &self.render_inline_item.is_some())
            .field("render_block", &self.render_block.is_some())
            .finish()
    }
}
