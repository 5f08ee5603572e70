//! DOCX input converter.

use crate::detect::verify_docx_path;
use crate::error::Result;
use crate::parser::DocxParser;
use std::path::Path;

use super::{ConvertOptions, ConvertResult, DocumentConverter};

/// DOCX document converter.
///
/// Reads the paragraphs of a DOCX package, classifies them and attaches
/// the profile's styles.
#[derive(Debug, Clone, Default)]
pub struct DocxConverter {
    _private: (),
}

impl DocxConverter {
    /// Create a new DOCX converter.
    pub fn new() -> Self {
        Self { _private: () }
    }

    fn convert_parser(
        &self,
        parser: DocxParser,
        options: &ConvertOptions,
    ) -> Result<ConvertResult> {
        let source = parser.parse()?;
        let document = options.reformatter().reformat_document(&source);
        Ok(ConvertResult::new(document, source.metadata))
    }
}

impl DocumentConverter for DocxConverter {
    fn supported_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn name(&self) -> &str {
        "docx"
    }

    fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        // Verify it's a ZIP package
        verify_docx_path(path)?;

        let parser = DocxParser::open_with_options(path, options.parse.clone())?;
        self.convert_parser(parser, options)
    }

    fn convert_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<ConvertResult> {
        let parser = DocxParser::from_bytes_with_options(bytes, options.parse.clone())?;
        self.convert_parser(parser, options)
    }
}
