//! Paragraph-level types.

use serde::{Deserialize, Serialize};

use crate::style::StyleRecord;

/// Semantic role of a paragraph, used to pick its style record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Document title
    Title,
    /// First-level heading
    Heading1,
    /// Second-level heading
    Heading2,
    /// Running text
    Body,
    /// Closing signature block
    Signature,
    /// Blank paragraph; never emitted
    Empty,
}

impl ElementKind {
    /// Kinds that carry a style record in a profile.
    pub const STYLED: [ElementKind; 5] = [
        ElementKind::Title,
        ElementKind::Heading1,
        ElementKind::Heading2,
        ElementKind::Body,
        ElementKind::Signature,
    ];

    /// Configuration key for this kind.
    pub fn key(&self) -> &'static str {
        match self {
            ElementKind::Title => "title",
            ElementKind::Heading1 => "heading1",
            ElementKind::Heading2 => "heading2",
            ElementKind::Body => "body",
            ElementKind::Signature => "signature",
            ElementKind::Empty => "empty",
        }
    }

    /// Parse a configuration key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "title" => Some(ElementKind::Title),
            "heading1" => Some(ElementKind::Heading1),
            "heading2" => Some(ElementKind::Heading2),
            "body" => Some(ElementKind::Body),
            "signature" => Some(ElementKind::Signature),
            "empty" => Some(ElementKind::Empty),
            _ => None,
        }
    }

    /// Check if this is a heading kind (title included).
    pub fn is_heading(&self) -> bool {
        matches!(
            self,
            ElementKind::Title | ElementKind::Heading1 | ElementKind::Heading2
        )
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A paragraph as read from an input document.
///
/// Only the three signals the classifier looks at are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceParagraph {
    /// Display name of the paragraph style (e.g. "Heading 1")
    pub style_name: Option<String>,

    /// Explicit font size of the first run, in points
    pub font_size: Option<f32>,

    /// Concatenated run text
    pub text: String,
}

impl SourceParagraph {
    /// Create a paragraph with text and no style information.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Set the style name.
    pub fn with_style(mut self, name: impl Into<String>) -> Self {
        self.style_name = Some(name.into());
        self
    }

    /// Set the first-run font size in points.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A paragraph ready to be written, with its resolved style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedParagraph {
    /// Element kind the paragraph was classified as
    pub kind: ElementKind,

    /// Paragraph text
    pub text: String,

    /// Style applied to the paragraph
    pub style: StyleRecord,
}

impl FormattedParagraph {
    /// Create a formatted paragraph.
    pub fn new(kind: ElementKind, text: impl Into<String>, style: StyleRecord) -> Self {
        Self {
            kind,
            text: text.into(),
            style,
        }
    }
}
