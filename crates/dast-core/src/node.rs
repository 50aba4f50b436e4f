//! DAST node types.
//!
//! Nodes are grouped into two disjoint families, block nodes and inline
//! nodes, plus the `root` entry node and the `listItem` node that only
//! appears inside lists. Every family is an internally tagged enum keyed
//! by the JSON `type` field. Unknown tags, and known tags whose fields
//! fail to decode, become an `Unsupported` variant so one odd node never
//! rejects a whole document.

use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::{ListStyle, Mark, NodeKind};
use crate::error::Result;

/// A node family with a catch-all variant.
trait Fallback: DeserializeOwned {
    const UNSUPPORTED: Self;
}

macro_rules! fallback {
    ($($family:ident),*) => {
        $(
            impl Fallback for $family {
                const UNSUPPORTED: Self = $family::Unsupported;
            }
        )*
    };
}

fallback!(BlockNode, InlineNode, ListChild, ListItemChild);

/// Decode a `children` array one node at a time.
///
/// A child that fails to decode becomes its family's `Unsupported` node.
/// Anything other than an array decodes as no children.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Fallback,
{
    let values = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(values) => values,
        serde_json::Value::Null => Vec::new(),
        other => {
            debug!("Ignoring children that are not an array: {}", other);
            return Ok(Vec::new());
        }
    };
    Ok(values
        .into_iter()
        .map(|value| {
            serde_json::from_value(value).unwrap_or_else(|e| {
                debug!("Dropping malformed node: {}", e);
                T::UNSUPPORTED
            })
        })
        .collect())
}

/// Entry node of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Root {
    #[serde(default, deserialize_with = "lenient")]
    pub children: Vec<BlockNode>,
}

impl Root {
    /// Create a root holding the given blocks.
    pub fn new(children: Vec<BlockNode>) -> Self {
        Self { children }
    }

    /// Decode a root node, checking the `type` tag.
    ///
    /// Returns `Ok(None)` when the JSON is a well-formed node of another kind.
    pub fn from_json(json: &str) -> Result<Option<Self>> {
        Ok(match DastNode::from_json(json)? {
            DastNode::Root(root) => Some(root),
            _ => None,
        })
    }
}

/// A paragraph of flowing text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default, deserialize_with = "lenient")]
    pub children: Vec<InlineNode>,
}

impl Paragraph {
    pub fn new(children: Vec<InlineNode>) -> Self {
        Self { children }
    }

    /// A paragraph made of one unmarked span.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(vec![InlineNode::text(value)])
    }
}

/// A heading, level 1 (largest) through 6.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub level: u8,
    #[serde(default, deserialize_with = "lenient")]
    pub children: Vec<InlineNode>,
}

impl Heading {
    pub fn new(level: u8, children: Vec<InlineNode>) -> Self {
        Self { level, children }
    }
}

/// A bulleted or numbered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub style: ListStyle,
    #[serde(default, deserialize_with = "lenient")]
    pub children: Vec<ListChild>,
}

impl List {
    /// Create a list from its items.
    pub fn new(style: ListStyle, items: Vec<ListItem>) -> Self {
        Self {
            style,
            children: items.into_iter().map(ListChild::ListItem).collect(),
        }
    }

    /// Iterate over the well-formed items, skipping unsupported children.
    pub fn items(&self) -> impl Iterator<Item = &ListItem> {
        self.children.iter().filter_map(|child| match child {
            ListChild::ListItem(item) => Some(item),
            ListChild::Unsupported => None,
        })
    }
}

/// Immediate child of a list. Only `listItem` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ListChild {
    ListItem(ListItem),
    #[serde(other)]
    Unsupported,
}

/// One entry of a list: text paragraphs and nested lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(default, deserialize_with = "lenient")]
    pub children: Vec<ListItemChild>,
}

impl ListItem {
    pub fn new(children: Vec<ListItemChild>) -> Self {
        Self { children }
    }

    /// An item holding a single unmarked paragraph.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(vec![ListItemChild::Paragraph(Paragraph::text(value))])
    }
}

/// Immediate child of a list item. Only `paragraph` and `list` are valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ListItemChild {
    Paragraph(Paragraph),
    List(List),
    #[serde(other)]
    Unsupported,
}

/// A block of preformatted code.
///
/// `language` and `highlight` are advisory and passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Code {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlight: Vec<u32>,
}

/// A quotation of arbitrary block content with an optional attribution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blockquote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub children: Vec<BlockNode>,
}

/// An embedded record, resolved by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub item: String,
}

/// Block-level node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BlockNode {
    Paragraph(Paragraph),
    Heading(Heading),
    List(List),
    Code(Code),
    Blockquote(Blockquote),
    Block(Block),
    ThematicBreak,
    #[serde(other)]
    Unsupported,
}

impl BlockNode {
    /// Discriminant of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            BlockNode::Paragraph(_) => NodeKind::Paragraph,
            BlockNode::Heading(_) => NodeKind::Heading,
            BlockNode::List(_) => NodeKind::List,
            BlockNode::Code(_) => NodeKind::Code,
            BlockNode::Blockquote(_) => NodeKind::Blockquote,
            BlockNode::Block(_) => NodeKind::Block,
            BlockNode::ThematicBreak => NodeKind::ThematicBreak,
            BlockNode::Unsupported => NodeKind::Unsupported,
        }
    }
}

/// A run of text with optional marks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub value: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
}

impl Span {
    /// Create an unmarked span.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            marks: Vec::new(),
        }
    }

    /// Create a span carrying the given marks, dropping repeats.
    pub fn marked(value: impl Into<String>, marks: &[Mark]) -> Self {
        let mut unique = Vec::with_capacity(marks.len());
        for mark in marks {
            if !unique.contains(mark) {
                unique.push(*mark);
            }
        }
        Self {
            value: value.into(),
            marks: unique,
        }
    }
}

/// Free-form metadata attached to links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaEntry {
    pub id: String,
    pub value: String,
}

/// A hyperlink around inline content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meta: Vec<MetaEntry>,
    #[serde(default, deserialize_with = "lenient")]
    pub children: Vec<InlineNode>,
}

impl Link {
    pub fn new(url: impl Into<String>, children: Vec<InlineNode>) -> Self {
        Self {
            url: url.into(),
            meta: Vec::new(),
            children,
        }
    }
}

/// A link to a record, resolved by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemLink {
    pub item: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meta: Vec<MetaEntry>,
    #[serde(default, deserialize_with = "lenient")]
    pub children: Vec<InlineNode>,
}

impl ItemLink {
    pub fn new(item: impl Into<String>, children: Vec<InlineNode>) -> Self {
        Self {
            item: item.into(),
            meta: Vec::new(),
            children,
        }
    }
}

/// A record rendered inline, resolved by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineItem {
    pub item: String,
}

/// Inline-level node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InlineNode {
    Span(Span),
    Link(Link),
    ItemLink(ItemLink),
    InlineItem(InlineItem),
    LineBreak,
    #[serde(other)]
    Unsupported,
}

impl InlineNode {
    /// An unmarked span.
    pub fn text(value: impl Into<String>) -> Self {
        InlineNode::Span(Span::new(value))
    }

    /// Discriminant of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            InlineNode::Span(_) => NodeKind::Span,
            InlineNode::Link(_) => NodeKind::Link,
            InlineNode::ItemLink(_) => NodeKind::ItemLink,
            InlineNode::InlineItem(_) => NodeKind::InlineItem,
            InlineNode::LineBreak => NodeKind::LineBreak,
            InlineNode::Unsupported => NodeKind::Unsupported,
        }
    }
}

/// Any node of the document model.
///
/// This is what a caller hands to the renderer when the shape of the
/// value is not known to be a root yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DastNode {
    Root(Root),
    Paragraph(Paragraph),
    Heading(Heading),
    List(List),
    ListItem(ListItem),
    Code(Code),
    Blockquote(Blockquote),
    Block(Block),
    ThematicBreak,
    Span(Span),
    Link(Link),
    ItemLink(ItemLink),
    InlineItem(InlineItem),
    LineBreak,
    #[serde(other)]
    Unsupported,
}

/// Generates `is_<kind>` predicates over `kind()`.
macro_rules! kind_predicates {
    ($($name:ident => $kind:ident),* $(,)?) => {
        $(
            #[doc = concat!("Whether this node is of kind `", stringify!($kind), "`.")]
            pub fn $name(&self) -> bool {
                self.kind() == NodeKind::$kind
            }
        )*
    };
}

impl DastNode {
    /// Decode any node from DAST JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode any node from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Discriminant of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            DastNode::Root(_) => NodeKind::Root,
            DastNode::Paragraph(_) => NodeKind::Paragraph,
            DastNode::Heading(_) => NodeKind::Heading,
            DastNode::List(_) => NodeKind::List,
            DastNode::ListItem(_) => NodeKind::ListItem,
            DastNode::Code(_) => NodeKind::Code,
            DastNode::Blockquote(_) => NodeKind::Blockquote,
            DastNode::Block(_) => NodeKind::Block,
            DastNode::ThematicBreak => NodeKind::ThematicBreak,
            DastNode::Span(_) => NodeKind::Span,
            DastNode::Link(_) => NodeKind::Link,
            DastNode::ItemLink(_) => NodeKind::ItemLink,
            DastNode::InlineItem(_) => NodeKind::InlineItem,
            DastNode::LineBreak => NodeKind::LineBreak,
            DastNode::Unsupported => NodeKind::Unsupported,
        }
    }

    kind_predicates! {
        is_root => Root,
        is_paragraph => Paragraph,
        is_heading => Heading,
        is_list => List,
        is_list_item => ListItem,
        is_code => Code,
        is_blockquote => Blockquote,
        is_block => Block,
        is_thematic_break => ThematicBreak,
        is_span => Span,
        is_link => Link,
        is_item_link => ItemLink,
        is_inline_item => InlineItem,
        is_line_break => LineBreak,
    }
}

impl From<Root> for DastNode {
    fn from(root: Root) -> Self {
        DastNode::Root(root)
    }
}

impl From<BlockNode> for DastNode {
    fn from(node: BlockNode) -> Self {
        match node {
            BlockNode::Paragraph(p) => DastNode::Paragraph(p),
            BlockNode::Heading(h) => DastNode::Heading(h),
            BlockNode::List(l) => DastNode::List(l),
            BlockNode::Code(c) => DastNode::Code(c),
            BlockNode::Blockquote(b) => DastNode::Blockquote(b),
            BlockNode::Block(b) => DastNode::Block(b),
            BlockNode::ThematicBreak => DastNode::ThematicBreak,
            BlockNode::Unsupported => DastNode::Unsupported,
        }
    }
}

impl From<InlineNode> for DastNode {
    fn from(node: InlineNode) -> Self {
        match node {
            InlineNode::Span(s) => DastNode::Span(s),
            InlineNode::Link(l) => DastNode::Link(l),
            InlineNode::ItemLink(l) => DastNode::ItemLink(l),
            InlineNode::InlineItem(i) => DastNode::InlineItem(i),
            InlineNode::LineBreak => DastNode::LineBreak,
            InlineNode::Unsupported => DastNode::Unsupported,
        }
    }
}

impl From<Paragraph> for BlockNode {
    fn from(p: Paragraph) -> Self {
        BlockNode::Paragraph(p)
    }
}

impl From<Heading> for BlockNode {
    fn from(h: Heading) -> Self {
        BlockNode::Heading(h)
    }
}

impl From<List> for BlockNode {
    fn from(l: List) -> Self {
        BlockNode::List(l)
    }
}

impl From<Code> for BlockNode {
    fn from(c: Code) -> Self {
        BlockNode::Code(c)
    }
}

impl From<Blockquote> for BlockNode {
    fn from(b: Blockquote) -> Self {
        BlockNode::Blockquote(b)
    }
}

impl From<Span> for InlineNode {
    fn from(s: Span) -> Self {
        InlineNode::Span(s)
    }
}

impl From<Link> for InlineNode {
    fn from(l: Link) -> Self {
        InlineNode::Link(l)
    }
}

impl From<ItemLink> for InlineNode {
    fn from(l: ItemLink) -> Self {
        InlineNode::ItemLink(l)
    }
}
