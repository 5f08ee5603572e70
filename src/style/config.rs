//! Style configuration file format.
//!
//! A configuration is a JSON object with the optional top-level keys
//! `document`, `title`, `heading1`, `heading2`, `body` and `signature`.
//! Each maps to a partial record; whatever it leaves out is inherited.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DocumentRecord, StyleRecord};
use crate::error::{Error, Result};
use crate::model::ElementKind;

/// Partial page settings as they appear in a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Top margin in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f32>,

    /// Bottom margin in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f32>,

    /// Left margin in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<f32>,

    /// Right margin in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<f32>,

    /// Base line spacing multiplier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_spacing: Option<f32>,

    /// Base font family
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    /// Base font size in points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,

    /// Width of one indent character, in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_unit: Option<f32>,
}

impl DocumentConfig {
    /// Overlay this partial config onto a complete record.
    pub fn apply_to(&self, base: &DocumentRecord) -> DocumentRecord {
        DocumentRecord {
            margin_top: self.margin_top.unwrap_or(base.margin_top),
            margin_bottom: self.margin_bottom.unwrap_or(base.margin_bottom),
            margin_left: self.margin_left.unwrap_or(base.margin_left),
            margin_right: self.margin_right.unwrap_or(base.margin_right),
            line_spacing: self.line_spacing.unwrap_or(base.line_spacing),
            font_family: self
                .font_family
                .clone()
                .unwrap_or_else(|| base.font_family.clone()),
            font_size: self.font_size.unwrap_or(base.font_size),
            indent_unit: self.indent_unit.unwrap_or(base.indent_unit),
        }
    }
}

impl From<&DocumentRecord> for DocumentConfig {
    fn from(record: &DocumentRecord) -> Self {
        Self {
            margin_top: Some(record.margin_top),
            margin_bottom: Some(record.margin_bottom),
            margin_left: Some(record.margin_left),
            margin_right: Some(record.margin_right),
            line_spacing: Some(record.line_spacing),
            font_family: Some(record.font_family.clone()),
            font_size: Some(record.font_size),
            indent_unit: Some(record.indent_unit),
        }
    }
}

/// A style configuration: partial records keyed by element kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Page-level settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<DocumentConfig>,

    /// Title style
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<StyleRecord>,

    /// First-level heading style
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading1: Option<StyleRecord>,

    /// Second-level heading style
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading2: Option<StyleRecord>,

    /// Body text style
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<StyleRecord>,

    /// Signature style
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<StyleRecord>,
}

impl StyleConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Read and parse a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| Error::ConfigParse(format!("{}: {}", path.display(), e)))
    }

    /// Partial record for an element kind, if the configuration has one.
    pub fn style(&self, kind: ElementKind) -> Option<&StyleRecord> {
        match kind {
            ElementKind::Title => self.title.as_ref(),
            ElementKind::Heading1 => self.heading1.as_ref(),
            ElementKind::Heading2 => self.heading2.as_ref(),
            ElementKind::Body => self.body.as_ref(),
            ElementKind::Signature => self.signature.as_ref(),
            ElementKind::Empty => None,
        }
    }

    /// Set the partial record for an element kind. `Empty` is ignored.
    pub fn set_style(&mut self, kind: ElementKind, record: StyleRecord) {
        let slot = match kind {
            ElementKind::Title => &mut self.title,
            ElementKind::Heading1 => &mut self.heading1,
            ElementKind::Heading2 => &mut self.heading2,
            ElementKind::Body => &mut self.body,
            ElementKind::Signature => &mut self.signature,
            ElementKind::Empty => return,
        };
        *slot = Some(record);
    }

    /// Check if the configuration overrides nothing.
    pub fn is_empty(&self) -> bool {
        *self == StyleConfig::default()
    }
}
