//! Style records.
//!
//! This module contains the `TextStyle` and `ViewStyle` records that
//! fill every style slot. Each record has a fixed set of optional
//! fields; an absent field means "inherit / host default".

use serde::{Deserialize, Serialize};

/// Font weight, named or numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontWeight {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "bold")]
    Bold,
    #[serde(rename = "100")]
    W100,
    #[serde(rename = "200")]
    W200,
    #[serde(rename = "300")]
    W300,
    #[serde(rename = "400")]
    W400,
    #[serde(rename = "500")]
    W500,
    #[serde(rename = "600")]
    W600,
    #[serde(rename = "700")]
    W700,
    #[serde(rename = "800")]
    W800,
    #[serde(rename = "900")]
    W900,
}

impl FontWeight {
    /// Whether a host without numeric weights should draw this as bold.
    pub fn is_bold(self) -> bool {
        matches!(
            self,
            FontWeight::Bold
                | FontWeight::W600
                | FontWeight::W700
                | FontWeight::W800
                | FontWeight::W900
        )
    }
}

/// Font slant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
}

/// Line decoration drawn through or under text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextDecorationLine {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "underline")]
    Underline,
    #[serde(rename = "line-through")]
    LineThrough,
    #[serde(rename = "underline line-through")]
    UnderlineLineThrough,
}

impl TextDecorationLine {
    pub fn has_underline(self) -> bool {
        matches!(
            self,
            TextDecorationLine::Underline | TextDecorationLine::UnderlineLineThrough
        )
    }

    pub fn has_line_through(self) -> bool {
        matches!(
            self,
            TextDecorationLine::LineThrough | TextDecorationLine::UnderlineLineThrough
        )
    }
}

/// Main axis of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    Row,
    Column,
    RowReverse,
    ColumnReverse,
}

/// Style attached to text.
///
/// Field names are camelCase, so `{"fontSize": 18}` and `fontSize = 18`
/// both decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Foreground colour, `#rgb` or `#rrggbb`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_decoration_line: Option<TextDecorationLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_horizontal: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_vertical: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_shrink: Option<f32>,
}

impl TextStyle {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shallow merge: every field set in `other` overwrites the one in `self`.
    pub fn merge(&self, other: &TextStyle) -> TextStyle {
        TextStyle {
            font_size: other.font_size.or(self.font_size),
            line_height: other.line_height.or(self.line_height),
            font_weight: other.font_weight.or(self.font_weight),
            font_style: other.font_style.or(self.font_style),
            font_family: other
                .font_family
                .clone()
                .or_else(|| self.font_family.clone()),
            color: other.color.clone().or_else(|| self.color.clone()),
            background_color: other
                .background_color
                .clone()
                .or_else(|| self.background_color.clone()),
            text_decoration_line: other.text_decoration_line.or(self.text_decoration_line),
            padding_horizontal: other.padding_horizontal.or(self.padding_horizontal),
            padding_vertical: other.padding_vertical.or(self.padding_vertical),
            border_radius: other.border_radius.or(self.border_radius),
            margin_top: other.margin_top.or(self.margin_top),
            margin_right: other.margin_right.or(self.margin_right),
            flex: other.flex.or(self.flex),
            flex_shrink: other.flex_shrink.or(self.flex_shrink),
        }
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        *self == TextStyle::default()
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn font_style(mut self, style: FontStyle) -> Self {
        self.font_style = Some(style);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn text_decoration_line(mut self, line: TextDecorationLine) -> Self {
        self.text_decoration_line = Some(line);
        self
    }
}

/// Style attached to a container box.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ViewStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_shrink: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_vertical: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_left_width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_left_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl ViewStyle {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shallow merge: every field set in `other` overwrites the one in `self`.
    pub fn merge(&self, other: &ViewStyle) -> ViewStyle {
        ViewStyle {
            flex_direction: other.flex_direction.or(self.flex_direction),
            flex: other.flex.or(self.flex),
            flex_shrink: other.flex_shrink.or(self.flex_shrink),
            margin_top: other.margin_top.or(self.margin_top),
            margin_bottom: other.margin_bottom.or(self.margin_bottom),
            margin_left: other.margin_left.or(self.margin_left),
            margin_right: other.margin_right.or(self.margin_right),
            margin_vertical: other.margin_vertical.or(self.margin_vertical),
            padding: other.padding.or(self.padding),
            padding_left: other.padding_left.or(self.padding_left),
            background_color: other
                .background_color
                .clone()
                .or_else(|| self.background_color.clone()),
            border_radius: other.border_radius.or(self.border_radius),
            border_left_width: other.border_left_width.or(self.border_left_width),
            border_left_color: other
                .border_left_color
                .clone()
                .or_else(|| self.border_left_color.clone()),
            height: other.height.or(self.height),
        }
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        *self == ViewStyle::default()
    }

    pub fn flex(mut self, flex: f32) -> Self {
        self.flex = Some(flex);
        self
    }

    pub fn flex_shrink(mut self, shrink: f32) -> Self {
        self.flex_shrink = Some(shrink);
        self
    }

    pub fn margin_bottom(mut self, margin: f32) -> Self {
        self.margin_bottom = Some(margin);
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_merge_last_write_wins() {
        let base = TextStyle::new().font_size(16.0).color("#000000");
        let over = TextStyle::new()
            .color("#ff0000")
            .font_weight(FontWeight::Bold);

        let merged = base.merge(&over);
        assert_eq!(merged.font_size, Some(16.0));
        assert_eq!(merged.color.as_deref(), Some("#ff0000"));
        assert_eq!(merged.font_weight, Some(FontWeight::Bold));
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let style = TextStyle::new().font_size(14.0).font_style(FontStyle::Italic);
        assert_eq!(style.merge(&TextStyle::new()), style);
        assert_eq!(TextStyle::new().merge(&style), style);
    }

    #[test]
    fn test_view_merge() {
        let list = ViewStyle::new().margin_bottom(16.0);
        let ordered = ViewStyle::new().flex(1.0);
        let merged = list.merge(&ordered);
        assert_eq!(merged.margin_bottom, Some(16.0));
        assert_eq!(merged.flex, Some(1.0));
    }

    #[test]
    fn test_camel_case_fields() {
        let style: TextStyle = toml::from_str(
            r##"
            fontSize = 18
            fontWeight = "600"
            textDecorationLine = "line-through"
            backgroundColor = "#ffeb3b"
            "##,
        )
        .unwrap();
        assert_eq!(style.font_size, Some(18.0));
        assert!(style.font_weight.unwrap().is_bold());
        assert!(style.text_decoration_line.unwrap().has_line_through());
        assert!(!style.text_decoration_line.unwrap().has_underline());
        assert_eq!(style.background_color.as_deref(), Some("#ffeb3b"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<TextStyle, _> = serde_json::from_str(r#"{"fontSiz": 12}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_skips_unset() {
        let json = serde_json::to_string(&ViewStyle::new().flex_shrink(1.0)).unwrap();
        assert_eq!(json, r#"{"flexShrink":1.0}"#);
    }
}
