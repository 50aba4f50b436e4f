//! Inline walker.
//!
//! Turns a sequence of inline nodes into a text flow. Each call receives
//! the base text style of its surroundings. Marks layer on top of that
//! base, and links replace it for their children with `base + link`.

use dast_config::TextStyle;
use dast_core::{InlineNode, ItemLink, Link, Span};
use log::trace;

use crate::context::RenderContext;
use crate::presentation::{Action, Inline};

/// Render `nodes` in order under `base`.
pub fn render_inline(nodes: &[InlineNode], base: &TextStyle, ctx: &RenderContext<'_>) -> Vec<Inline> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        render_inline_node(node, base, ctx, &mut out);
    }
    out
}

fn render_inline_node(
    node: &InlineNode,
    base: &TextStyle,
    ctx: &RenderContext<'_>,
    out: &mut Vec<Inline>,
) {
    match node {
        InlineNode::Span(span) => out.push(render_span(span, base, ctx)),
        InlineNode::Link(link) => out.push(render_link(link, base, ctx)),
        InlineNode::ItemLink(link) => out.push(render_item_link(link, base, ctx)),
        InlineNode::InlineItem(inline_item) => {
            let fragment = ctx.callbacks.inline_item(&inline_item.item);
            if fragment.is_empty() {
                trace!("Inline item {} rendered as nothing", inline_item.item);
            }
            out.extend(fragment);
        }
        InlineNode::LineBreak => out.push(Inline::LineBreak),
        InlineNode::Unsupported => trace!("Skipping unsupported inline node"),
    }
}

/// Effective style of a span: the base with its composed marks on top.
pub fn span_style(span: &Span, base: &TextStyle, ctx: &RenderContext<'_>) -> TextStyle {
    if span.marks.is_empty() {
        return base.clone();
    }
    base.merge(&ctx.styles.compose_marks(&span.marks))
}

fn render_span(span: &Span, base: &TextStyle, ctx: &RenderContext<'_>) -> Inline {
    Inline::run(span.value.clone(), span_style(span, base, ctx))
}

fn render_link(link: &Link, base: &TextStyle, ctx: &RenderContext<'_>) -> Inline {
    let style = base.merge(&ctx.styles.link);
    let children = render_inline(&link.children, &style, ctx);
    Inline::Pressable {
        action: Action::OpenUrl {
            url: link.url.clone(),
        },
        style,
        children,
    }
}

fn render_item_link(link: &ItemLink, base: &TextStyle, ctx: &RenderContext<'_>) -> Inline {
    let style = base.merge(&ctx.styles.link);
    let children = render_inline(&link.children, &style, ctx);
    Inline::Pressable {
        action: Action::OpenItem {
            item: link.item.clone(),
        },
        style,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callbacks::Callbacks;
    use dast_config::{resolve_styles, FontStyle, FontWeight, StructuredTextStyles, StyleOverride};
    use dast_core::{InlineItem, Mark};

    fn ctx<'a>(styles: &'a StructuredTextStyles, callbacks: &'a Callbacks) -> RenderContext<'a> {
        RenderContext::new(styles, callbacks)
    }

    #[test]
    fn test_unmarked_span_keeps_base_style() {
        let styles = StructuredTextStyles::defaults();
        let callbacks = Callbacks::new();
        let base = styles.paragraph_text.clone();

        let out = render_inline(&[InlineNode::text("Hello world")], &base, &ctx(styles, &callbacks));
        assert_eq!(out, vec![Inline::run("Hello world", base)]);
    }

    #[test]
    fn test_strong_span_merges_over_base() {
        let styles = StructuredTextStyles::defaults();
        let callbacks = Callbacks::new();
        let base = styles.paragraph_text.clone();
        let node = InlineNode::Span(Span::marked("bold", &[Mark::Strong]));

        let out = render_inline(&[node], &base, &ctx(styles, &callbacks));
        let Inline::Run { style, .. } = &out[0] else {
            panic!("expected a run");
        };
        assert_eq!(style, &base.merge(&styles.strong));
        assert_eq!(style.font_weight, Some(FontWeight::Bold));
        assert_eq!(style.font_size, Some(16.0));
    }

    #[test]
    fn test_mark_wins_over_base() {
        let over = StyleOverride::default().strong(TextStyle::new().color("red"));
        let styles = resolve_styles(Some(&over));
        let callbacks = Callbacks::new();
        let base = TextStyle::new().color("#000000");
        let node = InlineNode::Span(Span::marked("x", &[Mark::Strong]));

        let out = render_inline(&[node], &base, &ctx(&styles, &callbacks));
        let Inline::Run { style, .. } = &out[0] else {
            panic!("expected a run");
        };
        assert_eq!(style.color.as_deref(), Some("red"));
    }

    #[test]
    fn test_link_children_layer_on_link_style() {
        let styles = StructuredTextStyles::defaults();
        let callbacks = Callbacks::new();
        let base = styles.paragraph_text.clone();
        let link = InlineNode::Link(Link::new(
            "https://x",
            vec![InlineNode::Span(Span::marked("go", &[Mark::Emphasis]))],
        ));

        let out = render_inline(&[link], &base, &ctx(styles, &callbacks));
        let Inline::Pressable {
            action,
            style,
            children,
        } = &out[0]
        else {
            panic!("expected a pressable");
        };
        assert_eq!(action, &Action::OpenUrl { url: "https://x".into() });
        assert_eq!(style.color.as_deref(), Some("#007AFF"));
        assert_eq!(style.font_size, Some(16.0));

        let Inline::Run { style: child, text } = &children[0] else {
            panic!("expected a run");
        };
        assert_eq!(text, "go");
        assert_eq!(child.color.as_deref(), Some("#007AFF"));
        assert_eq!(child.font_style, Some(FontStyle::Italic));
    }

    #[test]
    fn test_item_link_action() {
        let styles = StructuredTextStyles::defaults();
        let callbacks = Callbacks::new();
        let link = InlineNode::ItemLink(ItemLink::new("rec-1", vec![InlineNode::text("record")]));

        let out = render_inline(&[link], &TextStyle::new(), &ctx(styles, &callbacks));
        assert_eq!(out[0].plain_text(), "record");
        assert!(matches!(&out[0], Inline::Pressable { action: Action::OpenItem { item }, .. } if item == "rec-1"));
    }

    #[test]
    fn test_inline_item_without_renderer_is_absent() {
        let styles = StructuredTextStyles::defaults();
        let callbacks = Callbacks::new();
        let nodes = [
            InlineNode::text("a"),
            InlineNode::InlineItem(InlineItem { item: "7".into() }),
            InlineNode::text("b"),
        ];

        let out = render_inline(&nodes, &TextStyle::new(), &ctx(styles, &callbacks));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_inline_item_fragment_is_unmodified() {
        let styles = StructuredTextStyles::defaults();
        let fragment = vec![Inline::run("[7]", TextStyle::new().color("green"))];
        let expected = fragment.clone();
        let callbacks = Callbacks {
            render_inline_item: Some(Box::new(move |_: &str| fragment.clone())),
            ..Callbacks::default()
        };
        let nodes = [InlineNode::InlineItem(InlineItem { item: "7".into() })];

        let out = render_inline(&nodes, &TextStyle::new().font_size(30.0), &ctx(styles, &callbacks));
        assert_eq!(out, expected);
    }

    #[test]
    fn test_line_break_and_order() {
        let styles = StructuredTextStyles::defaults();
        let callbacks = Callbacks::new();
        let nodes = [
            InlineNode::text("one"),
            InlineNode::LineBreak,
            InlineNode::Unsupported,
            InlineNode::text("two"),
        ];

        let out = render_inline(&nodes, &TextStyle::new(), &ctx(styles, &callbacks));
        assert_eq!(out.len(), 3);
        assert_eq!(out[1], Inline::LineBreak);
        let text: String = out.iter().map(Inline::plain_text).collect();
        assert_eq!(text, "one\ntwo");
    }
}
