//! Presentation tree.
//!
//! The output of a render call. Boxes ([`Element`]) hold other boxes or
//! one flow of text ([`Inline`]). Every node carries the resolved style a
//! host layer should apply, and a [`Role`] telling it what the node was
//! made from.

use dast_config::{TextStyle, ViewStyle};
use dast_core::ListStyle;
use serde::Serialize;

/// What a presentation node was rendered from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "name", rename_all = "camelCase")]
pub enum Role {
    Root,
    Paragraph,
    Heading { level: u8 },
    List { style: ListStyle, depth: usize },
    /// `index` is zero-based within the immediate parent list.
    ListItem { style: ListStyle, depth: usize, index: usize },
    ListMarker { style: ListStyle },
    ListItemContent,
    ListItemText,
    CodeBlock {
        #[serde(skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        highlight: Vec<u32>,
    },
    Blockquote,
    BlockquoteContent,
    Attribution,
    ThematicBreak,
    /// Content produced by a caller's render callback.
    Embedded { item: String },
}

/// What activating a pressable run does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Action {
    /// Open an external URL.
    OpenUrl { url: String },
    /// Follow a link to an embedded record.
    OpenItem { item: String },
}

impl Action {
    /// The URL or record id this action targets.
    pub fn target(&self) -> &str {
        match self {
            Action::OpenUrl { url } => url,
            Action::OpenItem { item } => item,
        }
    }
}

/// A box in the presentation tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Element {
    /// A container of other boxes.
    View {
        role: Role,
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<ViewStyle>,
        children: Vec<Element>,
    },
    /// One flow of text.
    Text {
        role: Role,
        style: TextStyle,
        content: Vec<Inline>,
    },
    /// A childless rule.
    Divider { role: Role, style: ViewStyle },
}

/// A piece of text flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Inline {
    /// Literal text under its effective style.
    Run { text: String, style: TextStyle },
    /// Activatable text; children are already styled.
    Pressable {
        action: Action,
        style: TextStyle,
        children: Vec<Inline>,
    },
    /// A hard break inside the same flow.
    LineBreak,
}

impl Element {
    /// A view with the given role, style and children.
    pub fn view(role: Role, style: Option<ViewStyle>, children: Vec<Element>) -> Self {
        Element::View {
            role,
            style,
            children,
        }
    }

    /// A text flow made of one run.
    pub fn text(role: Role, style: TextStyle, text: impl Into<String>) -> Self {
        let run = Inline::run(text, style.clone());
        Element::Text {
            role,
            style,
            content: vec![run],
        }
    }

    pub fn role(&self) -> &Role {
        match self {
            Element::View { role, .. } | Element::Text { role, .. } | Element::Divider { role, .. } => {
                role
            }
        }
    }

    /// Child boxes; empty for text and dividers.
    pub fn children(&self) -> &[Element] {
        match self {
            Element::View { children, .. } => children,
            _ => &[],
        }
    }

    /// All text below this node, line breaks as `\n`, boxes concatenated.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Element::View { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Element::Text { content, .. } => {
                for inline in content {
                    inline.collect_text(out);
                }
            }
            Element::Divider { .. } => {}
        }
    }

    /// Every pressable action below this node, in document order.
    pub fn actions(&self) -> Vec<&Action> {
        let mut out = Vec::new();
        self.collect_actions(&mut out);
        out
    }

    fn collect_actions<'a>(&'a self, out: &mut Vec<&'a Action>) {
        match self {
            Element::View { children, .. } => {
                for child in children {
                    child.collect_actions(out);
                }
            }
            Element::Text { content, .. } => {
                for inline in content {
                    inline.collect_actions(out);
                }
            }
            Element::Divider { .. } => {}
        }
    }
}

impl Inline {
    pub fn run(text: impl Into<String>, style: TextStyle) -> Self {
        Inline::Run {
            text: text.into(),
            style,
        }
    }

    /// Text of this piece, line breaks as `\n`.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Inline::Run { text, .. } => out.push_str(text),
            Inline::Pressable { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Inline::LineBreak => out.push('\n'),
        }
    }

    fn collect_actions<'a>(&'a self, out: &mut Vec<&'a Action>) {
        if let Inline::Pressable { action, children, .. } = self {
            out.push(action);
            for child in children {
                child.collect_actions(out);
            }
        }
    }
}
