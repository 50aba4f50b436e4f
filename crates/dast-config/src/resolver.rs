//! Style resolution.
//!
//! A complete [`StructuredTextStyles`] holds one style object per slot.
//! A [`StyleOverride`] holds any subset of slots. Resolving replaces each
//! default slot that the override sets, whole; fields inside a slot are
//! never merged with the default.

use std::borrow::Cow;
use std::sync::LazyLock;

use dast_core::{DastError, ListStyle, Mark, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::style::{TextStyle, ViewStyle};

/// Built-in style data, one TOML table per slot.
const DEFAULT_STYLES_TOML: &str = include_str!("default_styles.toml");

static DEFAULT_STYLES: LazyLock<StructuredTextStyles> = LazyLock::new(|| {
    toml::from_str(DEFAULT_STYLES_TOML).expect("Built-in default styles should be valid")
});

/// A borrowed view of one slot's style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotStyle<'a> {
    ViewStyle(&'a ViewStyle),
    TextStyle(&'a TextStyle),
}

macro_rules! style_slots {
    ($( $(#[$doc:meta])* $field:ident : $ty:ident => $variant:ident = $name:literal; )*) => {
        /// Names every independently overridable style slot.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum StyleSlot {
            $( $variant, )*
        }

        impl StyleSlot {
            /// Every slot, in declaration order.
            pub const ALL: &'static [StyleSlot] = &[ $( StyleSlot::$variant, )* ];

            /// The camelCase key used in JSON and TOML.
            pub fn name(self) -> &'static str {
                match self {
                    $( StyleSlot::$variant => $name, )*
                }
            }

            /// Look a slot up by its camelCase key.
            pub fn from_name(name: &str) -> Option<StyleSlot> {
                match name {
                    $( $name => Some(StyleSlot::$variant), )*
                    _ => None,
                }
            }
        }

        /// Complete, resolved style configuration.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        pub struct StructuredTextStyles {
            $( $(#[$doc])* pub $field: $ty, )*
        }

        /// Partial style configuration; unset slots keep their defaults.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", default, deny_unknown_fields)]
        pub struct StyleOverride {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl StyleOverride {
            $(
                #[doc = concat!("Replace the `", $name, "` slot.")]
                pub fn $field(mut self, style: $ty) -> Self {
                    self.$field = Some(style);
                    self
                }
            )*

            /// Layer `other` on top of `self`, slot by slot.
            pub fn merge(&mut self, other: &StyleOverride) {
                $(
                    if let Some(style) = &other.$field {
                        self.$field = Some(style.clone());
                    }
                )*
            }

            /// Slots this override sets, in declaration order.
            pub fn slots(&self) -> Vec<StyleSlot> {
                let mut slots = Vec::new();
                $(
                    if self.$field.is_some() {
                        slots.push(StyleSlot::$variant);
                    }
                )*
                slots
            }
        }

        impl StructuredTextStyles {
            /// Copy of `self` with every slot set in `over` replaced.
            pub fn with_override(&self, over: &StyleOverride) -> StructuredTextStyles {
                StructuredTextStyles {
                    $(
                        $field: match &over.$field {
                            Some(style) => style.clone(),
                            None => self.$field.clone(),
                        },
                    )*
                }
            }

            /// Borrow the style held by `slot`.
            pub fn slot(&self, slot: StyleSlot) -> SlotStyle<'_> {
                match slot {
                    $( StyleSlot::$variant => SlotStyle::$ty(&self.$field), )*
                }
            }
        }
    };
}

style_slots! {
    /// Container around a paragraph
    paragraph: ViewStyle => Paragraph = "paragraph";
    /// Base text style of paragraph content
    paragraph_text: TextStyle => ParagraphText = "paragraphText";
    heading1: ViewStyle => Heading1 = "heading1";
    heading1_text: TextStyle => Heading1Text = "heading1Text";
    heading2: ViewStyle => Heading2 = "heading2";
    heading2_text: TextStyle => Heading2Text = "heading2Text";
    heading3: ViewStyle => Heading3 = "heading3";
    heading3_text: TextStyle => Heading3Text = "heading3Text";
    heading4: ViewStyle => Heading4 = "heading4";
    heading4_text: TextStyle => Heading4Text = "heading4Text";
    heading5: ViewStyle => Heading5 = "heading5";
    heading5_text: TextStyle => Heading5Text = "heading5Text";
    heading6: ViewStyle => Heading6 = "heading6";
    heading6_text: TextStyle => Heading6Text = "heading6Text";
    /// Container shared by every list
    list: ViewStyle => List = "list";
    /// Added on top of `list` for numbered lists
    ordered_list: ViewStyle => OrderedList = "orderedList";
    /// Added on top of `list` for bulleted lists
    unordered_list: ViewStyle => UnorderedList = "unorderedList";
    list_item: ViewStyle => ListItem = "listItem";
    list_item_text: TextStyle => ListItemText = "listItemText";
    list_item_bullet: TextStyle => ListItemBullet = "listItemBullet";
    list_item_number: TextStyle => ListItemNumber = "listItemNumber";
    code_block: ViewStyle => CodeBlock = "codeBlock";
    code_block_text: TextStyle => CodeBlockText = "codeBlockText";
    blockquote: ViewStyle => Blockquote = "blockquote";
    /// Kept for configuration compatibility; quoted blocks use their own styles
    blockquote_text: TextStyle => BlockquoteText = "blockquoteText";
    blockquote_attribution: TextStyle => BlockquoteAttribution = "blockquoteAttribution";
    thematic_break: ViewStyle => ThematicBreak = "thematicBreak";
    strong: TextStyle => Strong = "strong";
    emphasis: TextStyle => Emphasis = "emphasis";
    code: TextStyle => Code = "code";
    underline: TextStyle => Underline = "underline";
    strikethrough: TextStyle => Strikethrough = "strikethrough";
    highlight: TextStyle => Highlight = "highlight";
    link: TextStyle => Link = "link";
}

impl Default for StructuredTextStyles {
    fn default() -> Self {
        DEFAULT_STYLES.clone()
    }
}

impl StructuredTextStyles {
    /// The process-wide built-in styles.
    pub fn defaults() -> &'static StructuredTextStyles {
        &DEFAULT_STYLES
    }

    /// Returns the embedded default style TOML.
    pub fn default_toml() -> &'static str {
        DEFAULT_STYLES_TOML
    }

    /// Text style applied by a single mark.
    pub fn mark(&self, mark: Mark) -> &TextStyle {
        match mark {
            Mark::Strong => &self.strong,
            Mark::Emphasis => &self.emphasis,
            Mark::Code => &self.code,
            Mark::Underline => &self.underline,
            Mark::Strikethrough => &self.strikethrough,
            Mark::Highlight => &self.highlight,
        }
    }

    /// Combined style of a mark sequence.
    ///
    /// Mark styles are applied in the order given, so a later mark
    /// overwrites fields an earlier one set. No marks yields an empty style.
    pub fn compose_marks(&self, marks: &[Mark]) -> TextStyle {
        marks
            .iter()
            .fold(TextStyle::default(), |acc, mark| acc.merge(self.mark(*mark)))
    }

    /// Container and text style for a heading level.
    ///
    /// Levels outside 1..=6 are clamped into range.
    pub fn heading(&self, level: u8) -> (&ViewStyle, &TextStyle) {
        match level.clamp(1, 6) {
            1 => (&self.heading1, &self.heading1_text),
            2 => (&self.heading2, &self.heading2_text),
            3 => (&self.heading3, &self.heading3_text),
            4 => (&self.heading4, &self.heading4_text),
            5 => (&self.heading5, &self.heading5_text),
            _ => (&self.heading6, &self.heading6_text),
        }
    }

    /// Container style of a list: `list` plus the style-specific slot.
    pub fn list_container(&self, style: ListStyle) -> ViewStyle {
        match style {
            ListStyle::Numbered => self.list.merge(&self.ordered_list),
            ListStyle::Bulleted => self.list.merge(&self.unordered_list),
        }
    }

    /// Text style of a list item's marker.
    pub fn list_marker(&self, style: ListStyle) -> &TextStyle {
        match style {
            ListStyle::Numbered => &self.list_item_number,
            ListStyle::Bulleted => &self.list_item_bullet,
        }
    }
}

impl StyleOverride {
    /// Parse an override from JSON, one object per slot.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse an override from TOML, one table per slot.
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source)
            .map_err(|e| DastError::Config(format!("Style override parse error: {}", e)))
    }

    /// Whether no slot is set.
    pub fn is_empty(&self) -> bool {
        self.slots().is_empty()
    }
}

/// Resolve the effective styles for one render call.
///
/// Without an override the shared defaults are borrowed; otherwise a
/// fresh copy is built. Equal overrides always resolve to equal styles.
pub fn resolve_styles(over: Option<&StyleOverride>) -> Cow<'static, StructuredTextStyles> {
    match over {
        Some(over) if !over.is_empty() => {
            debug!("Resolving styles with overridden slots: {:?}", over.slots());
            Cow::Owned(StructuredTextStyles::defaults().with_override(over))
        }
        _ => Cow::Borrowed(StructuredTextStyles::defaults()),
    }
}
