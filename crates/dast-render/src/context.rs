//! Per-render walker state.

use dast_config::StructuredTextStyles;

use crate::callbacks::Callbacks;

/// State shared by both walkers for one render call.
///
/// Passed down by reference; nested lists get an extended copy.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub styles: &'a StructuredTextStyles,
    pub callbacks: &'a Callbacks,
    /// Number of lists enclosing the node being rendered.
    pub list_depth: usize,
}

impl<'a> RenderContext<'a> {
    pub fn new(styles: &'a StructuredTextStyles, callbacks: &'a Callbacks) -> Self {
        Self {
            styles,
            callbacks,
            list_depth: 0,
        }
    }

    /// Context for the content of a list nested one level deeper.
    pub fn nested_list(&self) -> Self {
        Self {
            list_depth: self.list_depth + 1,
            ..*self
        }
    }
}
