//! Text and markdown input converter.

use crate::error::{Error, Result};
use crate::model::Metadata;
use std::fs;
use std::path::Path;

use super::{ConvertOptions, ConvertResult, DocumentConverter};

/// Text and markdown converter.
///
/// Lines are classified by their markdown markers.
#[derive(Debug, Clone, Default)]
pub struct TextConverter {
    _private: (),
}

impl TextConverter {
    /// Create a new text converter.
    pub fn new() -> Self {
        Self { _private: () }
    }

    fn convert_text(&self, content: &str, options: &ConvertOptions) -> ConvertResult {
        let document = options.reformatter().reformat_text(content);
        ConvertResult::new(document, Metadata::default())
    }
}

impl DocumentConverter for TextConverter {
    fn supported_extensions(&self) -> &[&str] {
        &["md", "markdown", "txt"]
    }

    fn name(&self) -> &str {
        "text"
    }

    fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        let content = fs::read_to_string(path)?;
        Ok(self.convert_text(&content, options))
    }

    fn convert_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<ConvertResult> {
        let content = std::str::from_utf8(bytes)
            .map_err(|e| Error::InvalidDocument(format!("input is not UTF-8: {}", e)))?;
        Ok(self.convert_text(content, options))
    }
}
