//! Dast Render
//!
//! Turns DAST documents into presentation trees.
//!
//! # Overview
//!
//! - [`StructuredText`] - Entry point: styles, callbacks, URL opener
//! - [`render_blocks`], [`render_inline`] - The two mutually recursive walkers
//! - [`Element`], [`Inline`] - The presentation tree handed to a host layer
//!
//! A render resolves styles once, walks the root's children and returns
//! a fresh tree. Links come out as pressable runs carrying an [`Action`];
//! the host calls [`StructuredText::activate`] when one is pressed.
//!
//! # Example
//!
//! ```
//! use dast_core::{BlockNode, DastNode, Paragraph, Root};
//! use dast_render::StructuredText;
//!
//! let doc = DastNode::Root(Root::new(vec![BlockNode::Paragraph(Paragraph::text("Hello"))]));
//! let output = StructuredText::new().render(&doc);
//!
//! assert!(output.diagnostics.is_empty());
//! assert_eq!(output.tree.unwrap().plain_text(), "Hello");
//! ```

pub mod block;
pub mod callbacks;
pub mod context;
pub mod inline;
pub mod opener;
pub mod presentation;

pub use block::{list_marker, render_block, render_blocks, render_list, ATTRIBUTION_PREFIX, BULLET};
pub use callbacks::Callbacks;
pub use context::RenderContext;
pub use inline::{render_inline, span_style};
pub use opener::{SystemUrlOpener, UrlOpener};
pub use presentation::{Action, Element, Inline, Role};

use std::fmt;
use std::sync::Arc;
use std::thread::JoinHandle;

use dast_config::{resolve_styles, StyleOverride, ViewStyle};
use dast_core::{DastNode, NodeKind, Result, Root};
use log::{debug, error, warn};

/// A non-fatal problem found while rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The document was not a `root` node. `found` is its kind when it
    /// decoded as some other node.
    InvalidRoot { found: Option<NodeKind> },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InvalidRoot { found } => {
                write!(f, "StructuredText: Invalid data provided. Expected root node.")?;
                match found {
                    Some(kind) => write!(f, " (found {})", kind),
                    None => Ok(()),
                }
            }
        }
    }
}

/// Result of one render call.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    /// The presentation tree; `None` for invalid input.
    pub tree: Option<Element>,
    pub diagnostics: Vec<Diagnostic>,
}

impl RenderOutput {
    /// Whether the document rendered.
    pub fn is_rendered(&self) -> bool {
        self.tree.is_some()
    }
}

/// Outcome of activating a pressable run.
#[derive(Debug)]
pub enum Activation {
    /// A caller handler ran.
    Handled,
    /// The URL was handed to the opener on a background thread.
    Delegated(JoinHandle<()>),
    /// Nothing happens.
    Inert,
}

/// Structured text renderer.
///
/// Holds everything that stays fixed across renders of many documents.
pub struct StructuredText {
    styles: Option<StyleOverride>,
    container_style: Option<ViewStyle>,
    callbacks: Callbacks,
    opener: Arc<dyn UrlOpener>,
}

impl Default for StructuredText {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StructuredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructuredText")
            .field("styles", &self.styles)
            .field("container_style", &self.container_style)
            .field("callbacks", &self.callbacks)
            .finish_non_exhaustive()
    }
}

impl StructuredText {
    pub fn new() -> Self {
        Self {
            styles: None,
            container_style: None,
            callbacks: Callbacks::default(),
            opener: Arc::new(SystemUrlOpener),
        }
    }

    /// Override style slots for every render.
    pub fn with_styles(mut self, styles: StyleOverride) -> Self {
        self.styles = Some(styles);
        self
    }

    /// Style of the top-level container.
    pub fn with_container_style(mut self, style: ViewStyle) -> Self {
        self.container_style = Some(style);
        self
    }

    pub fn on_link_press(mut self, handler: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.callbacks.on_link_press = Some(Box::new(handler));
        self
    }

    pub fn on_item_link_press(mut self, handler: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.callbacks.on_item_link_press = Some(Box::new(handler));
        self
    }

    /// Supply the content of `inlineItem` nodes.
    pub fn with_inline_item_renderer(
        mut self,
        render: impl Fn(&str) -> Vec<Inline> + Send + Sync + 'static,
    ) -> Self {
        self.callbacks.render_inline_item = Some(Box::new(render));
        self
    }

    /// Supply the content of `block` nodes.
    pub fn with_block_renderer(
        mut self,
        render: impl Fn(&str) -> Option<Element> + Send + Sync + 'static,
    ) -> Self {
        self.callbacks.render_block = Some(Box::new(render));
        self
    }

    /// Replace the opener used for links without a link handler.
    pub fn with_url_opener(mut self, opener: impl UrlOpener + 'static) -> Self {
        self.opener = Arc::new(opener);
        self
    }

    pub fn callbacks(&self) -> &Callbacks {
        &self.callbacks
    }

    /// Render a candidate document.
    ///
    /// Anything other than a root yields no tree and one diagnostic.
    pub fn render(&self, node: &DastNode) -> RenderOutput {
        match node {
            DastNode::Root(root) => RenderOutput {
                tree: Some(self.render_root(root)),
                diagnostics: Vec::new(),
            },
            other => self.invalid_root(Some(other.kind())),
        }
    }

    /// Render a document already known to be a root.
    pub fn render_root(&self, root: &Root) -> Element {
        let styles = resolve_styles(self.styles.as_ref());
        let ctx = RenderContext::new(&styles, &self.callbacks);
        debug!("Rendering root with {} children", root.children.len());

        Element::view(
            Role::Root,
            self.container_style.clone(),
            render_blocks(&root.children, &ctx),
        )
    }

    /// Parse DAST JSON and render it.
    ///
    /// Text that is not JSON is an error. JSON of any other shape is an
    /// invalid root, and malformed nodes inside a root render as absence.
    pub fn render_json(&self, json: &str) -> Result<RenderOutput> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if value.get("type").and_then(serde_json::Value::as_str) != Some("root") {
            let found = DastNode::from_value(value).ok().map(|node| node.kind());
            return Ok(self.invalid_root(found));
        }
        let node = DastNode::from_value(value)?;
        Ok(self.render(&node))
    }

    fn invalid_root(&self, found: Option<NodeKind>) -> RenderOutput {
        let diagnostic = Diagnostic::InvalidRoot { found };
        warn!("{}", diagnostic);
        RenderOutput {
            tree: None,
            diagnostics: vec![diagnostic],
        }
    }

    /// Carry out a pressable run's action.
    ///
    /// URLs go to the link handler when one is installed, otherwise to the
    /// URL opener on a background thread whose failure is only logged.
    /// Item links without a handler are inert.
    pub fn activate(&self, action: &Action) -> Activation {
        match action {
            Action::OpenUrl { url } => match &self.callbacks.on_link_press {
                Some(handler) => {
                    handler(url);
                    Activation::Handled
                }
                None => {
                    let opener = Arc::clone(&self.opener);
                    let url = url.clone();
                    Activation::Delegated(std::thread::spawn(move || {
                        if let Err(e) = opener.open(&url) {
                            error!("{}", e);
                        }
                    }))
                }
            },
            Action::OpenItem { item } => match &self.callbacks.on_item_link_press {
                Some(handler) => {
                    handler(item);
                    Activation::Handled
                }
                None => Activation::Inert,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dast_config::{StructuredTextStyles, TextStyle};
    use dast_core::{
        Block, BlockNode, Blockquote, InlineItem, InlineNode, Link, List, ListItem, ListStyle,
        Mark, Paragraph, Span,
    };
    use std::sync::Mutex;

    fn doc(children: Vec<BlockNode>) -> DastNode {
        DastNode::Root(Root::new(children))
    }

    fn first_run(element: &Element) -> Option<&Inline> {
        match element {
            Element::View { children, .. } => children.iter().find_map(first_run),
            Element::Text { content, .. } => content.first(),
            Element::Divider { .. } => None,
        }
    }

    #[test]
    fn test_plain_paragraph() {
        let output =
            StructuredText::new().render(&doc(vec![BlockNode::Paragraph(Paragraph::text("Hello world"))]));
        let tree = output.tree.unwrap();

        assert_eq!(tree.role(), &Role::Root);
        assert_eq!(tree.children().len(), 1);
        assert_eq!(
            first_run(&tree),
            Some(&Inline::run(
                "Hello world",
                StructuredTextStyles::defaults().paragraph_text.clone()
            ))
        );
    }

    #[test]
    fn test_strong_span_style() {
        let para = Paragraph::new(vec![InlineNode::Span(Span::marked("bold", &[Mark::Strong]))]);
        let tree = StructuredText::new()
            .render(&doc(vec![BlockNode::Paragraph(para)]))
            .tree
            .unwrap();

        let styles = StructuredTextStyles::defaults();
        let Some(Inline::Run { style, .. }) = first_run(&tree) else {
            panic!("expected a run");
        };
        assert_eq!(style, &styles.paragraph_text.merge(&styles.strong));
    }

    #[test]
    fn test_invalid_root_diagnostic() {
        let output = StructuredText::new().render(&DastNode::Paragraph(Paragraph::text("x")));
        assert!(output.tree.is_none());
        assert_eq!(
            output.diagnostics,
            vec![Diagnostic::InvalidRoot {
                found: Some(NodeKind::Paragraph)
            }]
        );
        assert_eq!(
            output.diagnostics[0].to_string(),
            "StructuredText: Invalid data provided. Expected root node. (found paragraph)"
        );
    }

    #[test]
    fn test_invalid_root_without_kind() {
        let diagnostic = Diagnostic::InvalidRoot { found: None };
        assert_eq!(
            diagnostic.to_string(),
            "StructuredText: Invalid data provided. Expected root node."
        );
    }

    #[test]
    fn test_render_json_shapes() {
        let st = StructuredText::new();

        let output = st
            .render_json(r#"{"type":"root","children":[{"type":"thematicBreak"}]}"#)
            .unwrap();
        assert!(output.is_rendered());

        for json in [r#"{"type":"span","value":"x"}"#, "null", "[1,2]", r#"{"type":"nope"}"#] {
            let output = st.render_json(json).unwrap();
            assert!(!output.is_rendered(), "{}", json);
            assert_eq!(output.diagnostics.len(), 1);
        }

        assert!(st.render_json("{not json").is_err());
    }

    #[test]
    fn test_root_length_skips_unresolved_blocks() {
        let children = vec![
            BlockNode::Paragraph(Paragraph::text("a")),
            BlockNode::Block(Block { item: "1".into() }),
            BlockNode::ThematicBreak,
        ];
        let plain = StructuredText::new().render(&doc(children.clone()));
        assert_eq!(plain.tree.unwrap().children().len(), 2);

        let resolved = StructuredText::new()
            .with_block_renderer(|id| {
                Some(Element::text(
                    Role::Embedded { item: id.to_string() },
                    TextStyle::new(),
                    id,
                ))
            })
            .render(&doc(children));
        assert_eq!(resolved.tree.unwrap().children().len(), 3);
    }

    #[test]
    fn test_inline_item_renderer() {
        let para = Paragraph::new(vec![
            InlineNode::text("see "),
            InlineNode::InlineItem(InlineItem { item: "42".into() }),
        ]);
        let tree = StructuredText::new()
            .with_inline_item_renderer(|id| vec![Inline::run(format!("<{}>", id), TextStyle::new())])
            .render(&doc(vec![BlockNode::Paragraph(para)]))
            .tree
            .unwrap();
        assert_eq!(tree.plain_text(), "see <42>");
    }

    #[test]
    fn test_container_style() {
        let tree = StructuredText::new()
            .with_container_style(ViewStyle::new().flex(1.0))
            .render(&doc(vec![]))
            .tree
            .unwrap();
        let Element::View { style, children, .. } = tree else {
            panic!("expected a view");
        };
        assert_eq!(style.and_then(|s| s.flex), Some(1.0));
        assert!(children.is_empty());
    }

    #[test]
    fn test_style_override_applies() {
        let over = StyleOverride::default().paragraph_text(TextStyle::new().font_size(30.0));
        let tree = StructuredText::new()
            .with_styles(over)
            .render(&doc(vec![BlockNode::Paragraph(Paragraph::text("x"))]))
            .tree
            .unwrap();
        let Some(Inline::Run { style, .. }) = first_run(&tree) else {
            panic!("expected a run");
        };
        assert_eq!(style, &TextStyle::new().font_size(30.0));
    }

    #[test]
    fn test_link_without_handler_delegates_to_opener() {
        let opened = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&opened);
        let st = StructuredText::new().with_url_opener(move |url: &str| -> Result<()> {
            sink.lock().unwrap().push(url.to_string());
            Ok(())
        });

        let para = Paragraph::new(vec![InlineNode::Link(Link::new(
            "https://x",
            vec![InlineNode::text("go")],
        ))]);
        let tree = st.render(&doc(vec![BlockNode::Paragraph(para)])).tree.unwrap();
        let actions = tree.actions();
        assert_eq!(actions.len(), 1);

        let Activation::Delegated(handle) = st.activate(actions[0]) else {
            panic!("expected delegation");
        };
        handle.join().unwrap();
        assert_eq!(*opened.lock().unwrap(), vec!["https://x".to_string()]);
    }

    #[test]
    fn test_opener_failure_is_contained() {
        let st = StructuredText::new().with_url_opener(|url: &str| -> Result<()> {
            Err(dast_core::DastError::UrlOpen {
                url: url.to_string(),
                reason: "no browser".to_string(),
            })
        });
        let Activation::Delegated(handle) = st.activate(&Action::OpenUrl {
            url: "https://x".into(),
        }) else {
            panic!("expected delegation");
        };
        assert!(handle.join().is_ok());
    }

    #[test]
    fn test_link_handler_takes_precedence() {
        let pressed = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&pressed);
        let st = StructuredText::new()
            .on_link_press(move |url| sink.lock().unwrap().push(url.to_string()))
            .with_url_opener(|_: &str| -> Result<()> { panic!("opener must not run") });

        let activation = st.activate(&Action::OpenUrl {
            url: "https://y".into(),
        });
        assert!(matches!(activation, Activation::Handled));
        assert_eq!(*pressed.lock().unwrap(), vec!["https://y".to_string()]);
    }

    #[test]
    fn test_item_link_activation() {
        let action = Action::OpenItem { item: "rec".into() };
        assert!(matches!(StructuredText::new().activate(&action), Activation::Inert));

        let pressed = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&pressed);
        let st = StructuredText::new()
            .on_item_link_press(move |item| *sink.lock().unwrap() = Some(item.to_string()));
        assert!(matches!(st.activate(&action), Activation::Handled));
        assert_eq!(pressed.lock().unwrap().as_deref(), Some("rec"));
    }

    #[test]
    fn test_blockquote_with_attribution_scenario() {
        let quote = Blockquote {
            attribution: Some("Jane Doe".into()),
            children: vec![BlockNode::Paragraph(Paragraph::text("Quote"))],
        };
        let tree = StructuredText::new()
            .render(&doc(vec![BlockNode::Blockquote(quote)]))
            .tree
            .unwrap();
        assert_eq!(tree.plain_text(), "Quote— Jane Doe");
    }

    #[test]
    fn test_numbered_list_scenario() {
        let list = List::new(
            ListStyle::Numbered,
            vec![ListItem::text("First"), ListItem::text("Second")],
        );
        let tree = StructuredText::new()
            .render(&doc(vec![BlockNode::List(list)]))
            .tree
            .unwrap();
        assert_eq!(tree.plain_text(), "1.First2.Second");
    }
}
