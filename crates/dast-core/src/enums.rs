//! Closed vocabularies of the document model.
//!
//! Marks, list styles and node kinds are fixed enumerations; the
//! style resolver and both walkers match on them exhaustively.

use serde::{Deserialize, Serialize};

/// A text decoration attached to a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    /// Bold text
    Strong,
    /// Italic text
    Emphasis,
    /// Inline code
    Code,
    /// Underlined text
    Underline,
    /// Struck-through text
    Strikethrough,
    /// Highlighted (marker pen) text
    Highlight,
}

impl Mark {
    /// Every mark, in declaration order.
    pub const ALL: [Mark; 6] = [
        Mark::Strong,
        Mark::Emphasis,
        Mark::Code,
        Mark::Underline,
        Mark::Strikethrough,
        Mark::Highlight,
    ];
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::Strong => write!(f, "strong"),
            Mark::Emphasis => write!(f, "emphasis"),
            Mark::Code => write!(f, "code"),
            Mark::Underline => write!(f, "underline"),
            Mark::Strikethrough => write!(f, "strikethrough"),
            Mark::Highlight => write!(f, "highlight"),
        }
    }
}

/// Represents the type of list being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    /// Every item gets the same bullet marker
    Bulleted,
    /// Items are numbered 1., 2., ... by position
    Numbered,
}

impl std::fmt::Display for ListStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListStyle::Bulleted => write!(f, "bulleted"),
            ListStyle::Numbered => write!(f, "numbered"),
        }
    }
}

/// Discriminant of any document node.
///
/// `Display` yields the `type` tag used by the JSON format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    Root,
    Paragraph,
    Heading,
    List,
    ListItem,
    Code,
    Blockquote,
    Block,
    ThematicBreak,
    Span,
    Link,
    ItemLink,
    InlineItem,
    LineBreak,
    /// A tag this crate does not know about
    Unsupported,
}

impl NodeKind {
    /// Whether nodes of this kind live in a block sequence.
    pub fn is_block_level(self) -> bool {
        matches!(
            self,
            NodeKind::Paragraph
                | NodeKind::Heading
                | NodeKind::List
                | NodeKind::Code
                | NodeKind::Blockquote
                | NodeKind::Block
                | NodeKind::ThematicBreak
        )
    }

    /// Whether nodes of this kind live in an inline sequence.
    pub fn is_inline(self) -> bool {
        matches!(
            self,
            NodeKind::Span
                | NodeKind::Link
                | NodeKind::ItemLink
                | NodeKind::InlineItem
                | NodeKind::LineBreak
        )
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            NodeKind::Root => "root",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Heading => "heading",
            NodeKind::List => "list",
            NodeKind::ListItem => "listItem",
            NodeKind::Code => "code",
            NodeKind::Blockquote => "blockquote",
            NodeKind::Block => "block",
            NodeKind::ThematicBreak => "thematicBreak",
            NodeKind::Span => "span",
            NodeKind::Link => "link",
            NodeKind::ItemLink => "itemLink",
            NodeKind::InlineItem => "inlineItem",
            NodeKind::LineBreak => "lineBreak",
            NodeKind::Unsupported => "unsupported",
        };
        write!(f, "{}", tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_display() {
        assert_eq!(Mark::Strong.to_string(), "strong");
        assert_eq!(Mark::Emphasis.to_string(), "emphasis");
        assert_eq!(Mark::Code.to_string(), "code");
        assert_eq!(Mark::Underline.to_string(), "underline");
        assert_eq!(Mark::Strikethrough.to_string(), "strikethrough");
        assert_eq!(Mark::Highlight.to_string(), "highlight");
    }

    #[test]
    fn test_mark_serde_matches_display() {
        for mark in Mark::ALL {
            let json = serde_json::to_string(&mark).unwrap();
            assert_eq!(json, format!("\"{}\"", mark));
        }
    }

    #[test]
    fn test_list_style_display() {
        assert_eq!(ListStyle::Bulleted.to_string(), "bulleted");
        assert_eq!(ListStyle::Numbered.to_string(), "numbered");
    }

    #[test]
    fn test_node_kind_display_is_json_tag() {
        assert_eq!(NodeKind::ListItem.to_string(), "listItem");
        assert_eq!(NodeKind::ThematicBreak.to_string(), "thematicBreak");
        assert_eq!(
            serde_json::to_string(&NodeKind::InlineItem).unwrap(),
            "\"inlineItem\""
        );
    }

    #[test]
    fn test_node_kind_families_are_disjoint() {
        assert!(NodeKind::Paragraph.is_block_level());
        assert!(!NodeKind::Paragraph.is_inline());
        assert!(NodeKind::Link.is_inline());
        assert!(!NodeKind::Link.is_block_level());
        assert!(!NodeKind::Root.is_block_level());
        assert!(!NodeKind::ListItem.is_block_level());
    }
}
