//! Terminal rendering of presentation trees.
//!
//! Layout rules:
//! - Top-level blocks, and blocks inside a quote, are separated by one blank line
//! - List items are `marker + space + content`; later lines and nested
//!   lists are indented under the content column
//! - Quoted lines start with a `│` bar
//! - Code is printed verbatim, one painted line per source line
//! - Dividers are a rule as wide as the output
//! - Text flows are word-wrapped; hard breaks start a new line

use dast_config::{TerminalConfig, TextStyle, ViewStyle};
use dast_render::{Action, Element, Inline, Role};

use crate::codes::{hyperlink, QUOTE_BAR, RULE};
use crate::color::{parse_color, parse_rgb};
use crate::sanitize::{is_safe_url, sanitize_for_terminal};
use crate::style::Style;
use crate::utils::{display_width, visible_length};

/// Width used when none can be detected.
pub const DEFAULT_WIDTH: usize = 80;

/// Spaces a tab expands to.
const TAB: &str = "    ";

/// A piece of text sharing one style and link target.
#[derive(Debug, Clone, PartialEq)]
struct Segment {
    text: String,
    style: Style,
    link: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum Piece {
    Text(Segment),
    Break,
}

/// Draws presentation trees as terminal text.
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    width: usize,
    color: bool,
    hyperlinks: bool,
    show_urls: bool,
    base: Option<(u8, u8, u8)>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

impl TerminalRenderer {
    /// A colour renderer with hyperlinks at the given width.
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
            color: true,
            hyperlinks: true,
            show_urls: false,
            base: Some((0, 0, 0)),
        }
    }

    /// A renderer emitting no escape sequences at all.
    pub fn plain(width: usize) -> Self {
        Self::new(width).with_color(false).with_hyperlinks(false)
    }

    /// A renderer following the `[terminal]` settings.
    pub fn from_config(config: &TerminalConfig, detected_width: usize) -> Self {
        Self {
            width: config.effective_width(detected_width),
            color: config.color,
            hyperlinks: config.hyperlinks,
            show_urls: config.show_urls,
            base: parse_rgb(&config.base_color),
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_hyperlinks(mut self, hyperlinks: bool) -> Self {
        self.hyperlinks = hyperlinks;
        self
    }

    pub fn with_show_urls(mut self, show_urls: bool) -> Self {
        self.show_urls = show_urls;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Render a tree to text, lines joined by `\n`, no trailing newline.
    pub fn render(&self, element: &Element) -> String {
        self.render_lines(element).join("\n")
    }

    /// Render a tree to output lines.
    pub fn render_lines(&self, element: &Element) -> Vec<String> {
        self.lines(element, self.width)
    }

    fn lines(&self, element: &Element, width: usize) -> Vec<String> {
        match element {
            Element::Divider { style, .. } => vec![self.rule(style, width)],
            Element::Text {
                role: Role::CodeBlock { .. },
                style,
                content,
            } => self.code_lines(style, None, content),
            Element::Text { content, .. } => self.flow_lines(content, width),
            Element::View {
                role,
                style,
                children,
            } => match role {
                Role::Root | Role::BlockquoteContent => self.separated(children, width),
                Role::CodeBlock { .. } => {
                    let background = style.as_ref().and_then(|s| s.background_color.as_deref());
                    children
                        .iter()
                        .flat_map(|child| match child {
                            Element::Text { style, content, .. } => {
                                self.code_lines(style, background, content)
                            }
                            other => self.lines(other, width),
                        })
                        .collect()
                }
                Role::ListItem { .. } => self.list_item_lines(children, width),
                Role::Blockquote => self.quote_lines(style.as_ref(), children, width),
                _ => children
                    .iter()
                    .flat_map(|child| self.lines(child, width))
                    .collect(),
            },
        }
    }

    /// Children one after another, a blank line between non-empty ones.
    fn separated(&self, children: &[Element], width: usize) -> Vec<String> {
        let mut out = Vec::new();
        for child in children {
            let lines = self.lines(child, width);
            if lines.is_empty() {
                continue;
            }
            if !out.is_empty() {
                out.push(String::new());
            }
            out.extend(lines);
        }
        out
    }

    fn list_item_lines(&self, children: &[Element], width: usize) -> Vec<String> {
        let Some((marker, content)) = children.split_first() else {
            return Vec::new();
        };

        let marker = self.lines(marker, width).into_iter().next().unwrap_or_default();
        let indent = visible_length(&marker) + 1;
        let content_width = width.saturating_sub(indent).max(1);

        let lines: Vec<String> = content
            .iter()
            .flat_map(|child| self.lines(child, content_width))
            .collect();

        let mut out = Vec::with_capacity(lines.len().max(1));
        let mut lines = lines.into_iter();
        match lines.next() {
            Some(first) => out.push(format!("{} {}", marker, first)),
            None => out.push(marker),
        }
        for line in lines {
            if line.is_empty() {
                out.push(line);
            } else {
                out.push(format!("{}{}", " ".repeat(indent), line));
            }
        }
        out
    }

    fn quote_lines(
        &self,
        style: Option<&ViewStyle>,
        children: &[Element],
        width: usize,
    ) -> Vec<String> {
        let bar = match style.and_then(|s| s.border_left_color.as_deref()).and_then(parse_color) {
            Some(color) if self.color => Style::new().fg(color).paint(QUOTE_BAR),
            _ => QUOTE_BAR.to_string(),
        };
        let inner = width.saturating_sub(2).max(1);

        children
            .iter()
            .flat_map(|child| self.lines(child, inner))
            .map(|line| {
                if line.is_empty() {
                    bar.clone()
                } else {
                    format!("{} {}", bar, line)
                }
            })
            .collect()
    }

    fn rule(&self, style: &ViewStyle, width: usize) -> String {
        let rule: String = std::iter::repeat(RULE).take(width).collect();
        match style.background_color.as_deref().and_then(parse_color) {
            Some(color) if self.color => Style::new().fg(color).paint(&rule),
            _ => rule,
        }
    }

    fn code_lines(
        &self,
        style: &TextStyle,
        background: Option<&str>,
        content: &[Inline],
    ) -> Vec<String> {
        let mut text_style = style.clone();
        if text_style.background_color.is_none() {
            text_style.background_color = background.map(str::to_string);
        }
        let paint = self.terminal_style(&text_style);

        let code: String = content.iter().map(Inline::plain_text).collect();
        code.strip_suffix('\n')
            .unwrap_or(&code)
            .split('\n')
            .map(|line| {
                let line = sanitize_for_terminal(line).replace('\t', TAB);
                if self.color {
                    paint.paint(&line)
                } else {
                    line
                }
            })
            .collect()
    }

    fn terminal_style(&self, style: &TextStyle) -> Style {
        Style::from_text_style(style, self.base)
    }

    fn flow_lines(&self, content: &[Inline], width: usize) -> Vec<String> {
        let mut pieces = Vec::new();
        self.flatten(content, None, &mut pieces);
        wrap(&pieces, width)
            .iter()
            .map(|line| self.emit(line))
            .collect()
    }

    fn flatten(&self, content: &[Inline], link: Option<&str>, out: &mut Vec<Piece>) {
        for inline in content {
            match inline {
                Inline::Run { text, style } => {
                    let style = self.terminal_style(style);
                    let text = sanitize_for_terminal(text).replace('\t', TAB);
                    for (i, part) in text.split('\n').enumerate() {
                        if i > 0 {
                            out.push(Piece::Break);
                        }
                        if !part.is_empty() {
                            out.push(Piece::Text(Segment {
                                text: part.to_string(),
                                style: style.clone(),
                                link: link.map(str::to_string),
                            }));
                        }
                    }
                }
                Inline::Pressable {
                    action,
                    style,
                    children,
                } => {
                    let url = match action {
                        Action::OpenUrl { url } => Some(url.as_str()),
                        Action::OpenItem { .. } => None,
                    };
                    self.flatten(children, url.or(link), out);
                    if let (true, Some(url)) = (self.show_urls, url) {
                        out.push(Piece::Text(Segment {
                            text: format!(" ({})", sanitize_for_terminal(url)),
                            style: self.terminal_style(style),
                            link: None,
                        }));
                    }
                }
                Inline::LineBreak => out.push(Piece::Break),
            }
        }
    }

    fn emit(&self, line: &[Segment]) -> String {
        let mut out = String::new();
        for segment in line {
            let painted = if self.color {
                segment.style.paint(&segment.text)
            } else {
                segment.text.clone()
            };
            match &segment.link {
                Some(url) if self.hyperlinks && is_safe_url(url) => {
                    out.push_str(&hyperlink(url, &painted));
                }
                _ => out.push_str(&painted),
            }
        }
        out
    }
}

/// Word-wrap pieces into lines no wider than `width` where possible.
///
/// Words longer than the width get a line of their own. Spaces at the end
/// of a line, and at the start of a wrapped line, are dropped.
fn wrap(pieces: &[Piece], width: usize) -> Vec<Vec<Segment>> {
    let mut lines: Vec<Vec<Segment>> = vec![Vec::new()];
    let mut current = 0;
    let mut wrapped = false;

    for piece in pieces {
        let segment = match piece {
            Piece::Break => {
                finish_line(&mut lines);
                lines.push(Vec::new());
                current = 0;
                wrapped = false;
                continue;
            }
            Piece::Text(segment) => segment,
        };

        for word in segment.text.split_inclusive(' ') {
            let word_width = display_width(word.trim_end_matches(' '));
            if current > 0 && current + word_width > width {
                finish_line(&mut lines);
                lines.push(Vec::new());
                current = 0;
                wrapped = true;
            }

            let word = if current == 0 && wrapped {
                word.trim_start_matches(' ')
            } else {
                word
            };
            if word.is_empty() {
                continue;
            }

            push_word(lines.last_mut(), segment, word);
            current += display_width(word);
        }
    }

    finish_line(&mut lines);
    lines
}

fn push_word(line: Option<&mut Vec<Segment>>, segment: &Segment, word: &str) {
    let Some(line) = line else {
        return;
    };
    match line.last_mut() {
        Some(last) if last.style == segment.style && last.link == segment.link => {
            last.text.push_str(word);
        }
        _ => line.push(Segment {
            text: word.to_string(),
            style: segment.style.clone(),
            link: segment.link.clone(),
        }),
    }
}

/// Drop trailing spaces from the last line.
fn finish_line(lines: &mut [Vec<Segment>]) {
    let Some(line) = lines.last_mut() else {
        return;
    };
    while let Some(last) = line.last_mut() {
        let trimmed = last.text.trim_end_matches(' ').len();
        last.text.truncate(trimmed);
        if last.text.is_empty() {
            line.pop();
        } else {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::visible;
    use dast_config::StructuredTextStyles;
    use dast_core::{
        BlockNode, Blockquote, Code, Heading, InlineNode, Link, List, ListItem, ListItemChild,
        ListStyle, Mark, Paragraph, Root, Span,
    };
    use dast_render::StructuredText;

    fn tree(children: Vec<BlockNode>) -> Element {
        StructuredText::new().render_root(&Root::new(children))
    }

    fn plain(children: Vec<BlockNode>, width: usize) -> String {
        TerminalRenderer::plain(width).render(&tree(children))
    }

    #[test]
    fn test_blocks_separated_by_blank_line() {
        let out = plain(
            vec![
                BlockNode::Heading(Heading::new(1, vec![InlineNode::text("Title")])),
                BlockNode::Paragraph(Paragraph::text("Body")),
            ],
            40,
        );
        assert_eq!(out, "Title\n\nBody");
    }

    #[test]
    fn test_paragraph_wraps() {
        let out = plain(
            vec![BlockNode::Paragraph(Paragraph::text("one two three four five"))],
            9,
        );
        assert_eq!(out, "one two\nthree\nfour five");
    }

    #[test]
    fn test_line_break_splits_line() {
        let para = Paragraph::new(vec![
            InlineNode::text("first"),
            InlineNode::LineBreak,
            InlineNode::text("second"),
        ]);
        assert_eq!(plain(vec![BlockNode::Paragraph(para)], 40), "first\nsecond");
    }

    #[test]
    fn test_nested_list_indent() {
        let nested = List::new(ListStyle::Bulleted, vec![ListItem::text("Child")]);
        let list = List::new(
            ListStyle::Numbered,
            vec![
                ListItem::text("First"),
                ListItem::new(vec![
                    ListItemChild::Paragraph(Paragraph::text("Second")),
                    ListItemChild::List(nested),
                ]),
            ],
        );
        let out = plain(vec![BlockNode::List(list)], 40);
        assert_eq!(out, "1. First\n2. Second\n   • Child");
    }

    #[test]
    fn test_list_item_continuation_indent() {
        let list = List::new(ListStyle::Bulleted, vec![ListItem::text("alpha beta gamma")]);
        let out = plain(vec![BlockNode::List(list)], 12);
        assert_eq!(out, "• alpha beta\n  gamma");
    }

    #[test]
    fn test_blockquote_bar_and_attribution() {
        let quote = Blockquote {
            attribution: Some("Jane Doe".into()),
            children: vec![
                BlockNode::Paragraph(Paragraph::text("One")),
                BlockNode::Paragraph(Paragraph::text("Two")),
            ],
        };
        let out = plain(vec![BlockNode::Blockquote(quote)], 40);
        assert_eq!(out, "│ One\n│\n│ Two\n│ — Jane Doe");
    }

    #[test]
    fn test_code_verbatim() {
        let code = Code {
            code: "let x = 1;\n\tif x {}\n".into(),
            language: Some("rust".into()),
            highlight: vec![],
        };
        let out = plain(vec![BlockNode::Code(code)], 5);
        assert_eq!(out, "let x = 1;\n    if x {}");
    }

    #[test]
    fn test_code_keeps_trailing_blank_lines() {
        let code = Code {
            code: "a\n\n\n".into(),
            language: None,
            highlight: vec![],
        };
        let out = plain(
            vec![BlockNode::Code(code), BlockNode::Paragraph(Paragraph::text("b"))],
            20,
        );
        assert_eq!(out, "a\n\n\n\nb");
    }

    #[test]
    fn test_divider_width() {
        let out = plain(vec![BlockNode::ThematicBreak], 10);
        assert_eq!(out, "──────────");
    }

    #[test]
    fn test_hyperlink_and_show_urls() {
        let para = Paragraph::new(vec![InlineNode::Link(Link::new(
            "https://example.com",
            vec![InlineNode::text("site")],
        ))]);
        let el = tree(vec![BlockNode::Paragraph(para)]);

        let linked = TerminalRenderer::new(40).with_color(false).render(&el);
        assert_eq!(
            linked,
            "\x1b]8;;https://example.com\x1b\\site\x1b]8;;\x1b\\"
        );

        let shown = TerminalRenderer::plain(40).with_show_urls(true).render(&el);
        assert_eq!(shown, "site (https://example.com)");
    }

    #[test]
    fn test_unsafe_url_not_linked() {
        let para = Paragraph::new(vec![InlineNode::Link(Link::new(
            "javascript:alert(1)",
            vec![InlineNode::text("bad")],
        ))]);
        let out = TerminalRenderer::new(40)
            .with_color(false)
            .render(&tree(vec![BlockNode::Paragraph(para)]));
        assert_eq!(out, "bad");
    }

    #[test]
    fn test_color_output() {
        let para = Paragraph::new(vec![
            InlineNode::text("a "),
            InlineNode::Span(Span::marked("b", &[Mark::Strong])),
        ]);
        let out = TerminalRenderer::new(40).render(&tree(vec![BlockNode::Paragraph(para)]));

        // Body text keeps the terminal colour; the strong run is bold only.
        assert_eq!(out, "a \x1b[1mb\x1b[0m");
        assert_eq!(visible(&out), "a b");
    }

    #[test]
    fn test_control_characters_stripped() {
        let out = plain(
            vec![BlockNode::Paragraph(Paragraph::text("safe\x1b]0;pwned\x07text"))],
            40,
        );
        assert_eq!(out, "safe]0;pwnedtext");
    }

    #[test]
    fn test_from_config() {
        let config = TerminalConfig {
            width: 33,
            ..TerminalConfig::plain()
        };
        let renderer = TerminalRenderer::from_config(&config, 100);
        assert_eq!(renderer.width(), 33);
        assert!(!renderer.color);
    }

    #[test]
    fn test_code_painted_on_block_background() {
        let code = Code {
            code: "x".into(),
            language: None,
            highlight: vec![],
        };
        let out = TerminalRenderer::new(40).render(&tree(vec![BlockNode::Code(code)]));

        // Text colour stays explicit because a background is set.
        assert_eq!(out, "\x1b[38;2;0;0;0;48;2;245;245;245mx\x1b[0m");
    }

    #[test]
    fn test_default_link_style() {
        let styles = StructuredTextStyles::defaults();
        let style = Style::from_text_style(&styles.link, Some((0, 0, 0)));
        assert_eq!(style.to_ansi(), "\x1b[4;38;2;0;122;255m");
    }
}
