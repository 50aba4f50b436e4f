//! Block walker.
//!
//! Renders block nodes into boxes:
//! - Paragraphs and headings: a container around one text flow
//! - Lists: one row per item, marker first, numbered by position
//! - Code: the raw text, untouched
//! - Blockquotes: any blocks, then an optional attribution line
//! - Embedded blocks: whatever the caller's renderer returns

use dast_config::{TextStyle, ViewStyle};
use dast_core::{
    BlockNode, Blockquote, Code, Heading, InlineNode, List, ListChild, ListItem, ListItemChild,
    ListStyle, Paragraph,
};
use log::trace;

use crate::context::RenderContext;
use crate::inline::render_inline;
use crate::presentation::{Element, Role};

/// Marker of every item in a bulleted list, at any depth.
pub const BULLET: &str = "•";

/// Prefix of a blockquote's attribution line.
pub const ATTRIBUTION_PREFIX: &str = "— ";

/// Marker for the item at zero-based `index` of a list.
pub fn list_marker(style: ListStyle, index: usize) -> String {
    match style {
        ListStyle::Bulleted => BULLET.to_string(),
        ListStyle::Numbered => format!("{}.", index + 1),
    }
}

/// Content style of a list item row.
fn list_item_content_style() -> ViewStyle {
    ViewStyle::new().flex(1.0).flex_shrink(1.0)
}

/// Render each block in order, dropping those that render as nothing.
pub fn render_blocks(nodes: &[BlockNode], ctx: &RenderContext<'_>) -> Vec<Element> {
    nodes.iter().filter_map(|node| render_block(node, ctx)).collect()
}

/// Render one block, or `None` when it renders as nothing.
pub fn render_block(node: &BlockNode, ctx: &RenderContext<'_>) -> Option<Element> {
    match node {
        BlockNode::Paragraph(paragraph) => Some(render_paragraph(paragraph, ctx)),
        BlockNode::Heading(heading) => Some(render_heading(heading, ctx)),
        BlockNode::List(list) => Some(render_list(list, ctx)),
        BlockNode::Code(code) => Some(render_code(code, ctx)),
        BlockNode::Blockquote(quote) => Some(render_blockquote(quote, ctx)),
        BlockNode::Block(block) => {
            let element = ctx.callbacks.block(&block.item);
            if element.is_none() {
                trace!("Block {} rendered as nothing", block.item);
            }
            element
        }
        BlockNode::ThematicBreak => Some(Element::Divider {
            role: Role::ThematicBreak,
            style: ctx.styles.thematic_break.clone(),
        }),
        BlockNode::Unsupported => {
            trace!("Skipping unsupported block node");
            None
        }
    }
}

fn text_flow(
    role: Role,
    style: &TextStyle,
    children: &[InlineNode],
    ctx: &RenderContext<'_>,
) -> Element {
    Element::Text {
        role,
        style: style.clone(),
        content: render_inline(children, style, ctx),
    }
}

fn render_paragraph(paragraph: &Paragraph, ctx: &RenderContext<'_>) -> Element {
    let styles = ctx.styles;
    Element::view(
        Role::Paragraph,
        Some(styles.paragraph.clone()),
        vec![text_flow(
            Role::Paragraph,
            &styles.paragraph_text,
            &paragraph.children,
            ctx,
        )],
    )
}

fn render_heading(heading: &Heading, ctx: &RenderContext<'_>) -> Element {
    let level = heading.level.clamp(1, 6);
    let (container, text) = ctx.styles.heading(level);
    Element::view(
        Role::Heading { level },
        Some(container.clone()),
        vec![text_flow(Role::Heading { level }, text, &heading.children, ctx)],
    )
}

/// Render a list and, recursively, the lists nested in its items.
///
/// Each item's number comes from its position in this list only.
pub fn render_list(list: &List, ctx: &RenderContext<'_>) -> Element {
    let items = list
        .children
        .iter()
        .enumerate()
        .filter_map(|(index, child)| match child {
            ListChild::ListItem(item) => Some(render_list_item(item, index, list.style, ctx)),
            ListChild::Unsupported => {
                trace!("Skipping unsupported list child at {}", index);
                None
            }
        })
        .collect();

    Element::view(
        Role::List {
            style: list.style,
            depth: ctx.list_depth,
        },
        Some(ctx.styles.list_container(list.style)),
        items,
    )
}

fn render_list_item(
    item: &ListItem,
    index: usize,
    style: ListStyle,
    ctx: &RenderContext<'_>,
) -> Element {
    let styles = ctx.styles;
    let marker = Element::text(
        Role::ListMarker { style },
        styles.list_marker(style).clone(),
        list_marker(style, index),
    );

    // Paragraphs drop their own container so items stay compact.
    let content = item
        .children
        .iter()
        .filter_map(|child| match child {
            ListItemChild::Paragraph(paragraph) => Some(text_flow(
                Role::ListItemText,
                &styles.list_item_text,
                &paragraph.children,
                ctx,
            )),
            ListItemChild::List(nested) => Some(render_list(nested, &ctx.nested_list())),
            ListItemChild::Unsupported => {
                trace!("Skipping unsupported list item child");
                None
            }
        })
        .collect();

    Element::view(
        Role::ListItem {
            style,
            depth: ctx.list_depth,
            index,
        },
        Some(styles.list_item.clone()),
        vec![
            marker,
            Element::view(Role::ListItemContent, Some(list_item_content_style()), content),
        ],
    )
}

fn render_code(code: &Code, ctx: &RenderContext<'_>) -> Element {
    let role = Role::CodeBlock {
        language: code.language.clone(),
        highlight: code.highlight.clone(),
    };
    Element::view(
        role.clone(),
        Some(ctx.styles.code_block.clone()),
        vec![Element::text(role, ctx.styles.code_block_text.clone(), code.code.clone())],
    )
}

fn render_blockquote(quote: &Blockquote, ctx: &RenderContext<'_>) -> Element {
    let mut children = vec![Element::view(
        Role::BlockquoteContent,
        None,
        render_blocks(&quote.children, ctx),
    )];

    if let Some(attribution) = &quote.attribution {
        children.push(Element::text(
            Role::Attribution,
            ctx.styles.blockquote_attribution.clone(),
            format!("{}{}", ATTRIBUTION_PREFIX, attribution),
        ));
    }

    Element::view(Role::Blockquote, Some(ctx.styles.blockquote.clone()), children)
}
