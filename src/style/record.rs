//! Style records: the typographic attributes applied to one element kind,
//! and the page-level record applied once per document.

use serde::{Deserialize, Serialize};

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

impl Alignment {
    /// Configuration name of the alignment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
        }
    }
}

/// Typographic attributes for one element kind.
///
/// Every field is optional: `None` means "leave the current value alone".
/// Records held by a [`StyleProfile`](super::StyleProfile) are complete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleRecord {
    /// Font family, applied to Latin and East Asian text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    /// Font size in points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,

    /// Bold weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,

    /// Paragraph alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,

    /// Space before the paragraph, in twentieths of a point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing_before: Option<f32>,

    /// Space after the paragraph, in twentieths of a point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing_after: Option<f32>,

    /// Line spacing multiplier (1.0 = single)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_spacing: Option<f32>,

    /// First-line indent in characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_line_indent: Option<f32>,
}

impl StyleRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Set the font size in points.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set bold weight.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Set the alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Set spacing before and after, in twentieths of a point.
    pub fn with_spacing(mut self, before: f32, after: f32) -> Self {
        self.spacing_before = Some(before);
        self.spacing_after = Some(after);
        self
    }

    /// Set the line spacing multiplier.
    pub fn with_line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = Some(spacing);
        self
    }

    /// Set the first-line indent in characters.
    pub fn with_first_line_indent(mut self, chars: f32) -> Self {
        self.first_line_indent = Some(chars);
        self
    }

    /// Overlay `other` onto this record, field by field.
    ///
    /// Fields set in `other` win; fields it leaves unset keep this record's value.
    pub fn merged(&self, other: &StyleRecord) -> StyleRecord {
        StyleRecord {
            font_family: other.font_family.clone().or_else(|| self.font_family.clone()),
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            alignment: other.alignment.or(self.alignment),
            spacing_before: other.spacing_before.or(self.spacing_before),
            spacing_after: other.spacing_after.or(self.spacing_after),
            line_spacing: other.line_spacing.or(self.line_spacing),
            first_line_indent: other.first_line_indent.or(self.first_line_indent),
        }
    }

    /// Check if every field is set.
    pub fn is_complete(&self) -> bool {
        self.font_family.is_some()
            && self.font_size.is_some()
            && self.bold.is_some()
            && self.alignment.is_some()
            && self.spacing_before.is_some()
            && self.spacing_after.is_some()
            && self.line_spacing.is_some()
            && self.first_line_indent.is_some()
    }

    /// Check if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == StyleRecord::default()
    }
}

/// Page-level settings applied once per output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Top margin in centimeters
    pub margin_top: f32,

    /// Bottom margin in centimeters
    pub margin_bottom: f32,

    /// Left margin in centimeters
    pub margin_left: f32,

    /// Right margin in centimeters
    pub margin_right: f32,

    /// Base line spacing multiplier
    pub line_spacing: f32,

    /// Base font family
    pub font_family: String,

    /// Base font size in points
    pub font_size: f32,

    /// Width of one indent character, in centimeters
    pub indent_unit: f32,
}

impl Default for DocumentRecord {
    fn default() -> Self {
        Self {
            margin_top: 3.7,
            margin_bottom: 3.5,
            margin_left: 2.8,
            margin_right: 2.6,
            line_spacing: 1.5,
            font_family: "FangSong_GB2312".to_string(),
            font_size: 16.0,
            indent_unit: 0.5,
        }
    }
}
