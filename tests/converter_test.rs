//! Integration tests for the converter module.

use docgen::convert::{
    ConvertOptions, ConvertResult, ConverterRegistry, DocumentConverter, DocxConverter,
    TextConverter,
};
use docgen::error::{Error, Result};
use docgen::model::{ElementKind, FormattedDocument, FormattedParagraph};
use docgen::style::{DocumentRecord, StylePreset, StyleProfile, StyleRecord};
use std::path::Path;
use std::sync::Arc;

/// Mock converter for testing.
struct MockConverter {
    extensions: Vec<&'static str>,
    name: &'static str,
}

impl MockConverter {
    fn new(extensions: Vec<&'static str>, name: &'static str) -> Self {
        Self { extensions, name }
    }

    fn single_paragraph(&self, text: String) -> ConvertResult {
        let mut document = FormattedDocument::new(DocumentRecord::default());
        document.add_paragraph(FormattedParagraph::new(
            ElementKind::Body,
            text,
            StyleRecord::default(),
        ));
        ConvertResult::new(document, Default::default())
    }
}

impl DocumentConverter for MockConverter {
    fn supported_extensions(&self) -> &[&str] {
        &self.extensions
    }

    fn name(&self) -> &str {
        self.name
    }

    fn convert(&self, _path: &Path, _options: &ConvertOptions) -> Result<ConvertResult> {
        Ok(self.single_paragraph(format!("Converted by {}", self.name)))
    }

    fn convert_bytes(&self, _bytes: &[u8], _options: &ConvertOptions) -> Result<ConvertResult> {
        Ok(self.single_paragraph(format!("Converted bytes by {}", self.name)))
    }
}

#[test]
fn test_convert_options_builder() {
    let options = ConvertOptions::new()
        .with_profile(StyleProfile::preset(StylePreset::Academic))
        .lenient();

    assert_eq!(options.profile, StyleProfile::preset(StylePreset::Academic));
    assert!(options.parse.is_lenient());
}

#[test]
fn test_converter_registry_new() {
    let registry = ConverterRegistry::new();

    // Empty registry should support nothing
    assert!(!registry.supports("docx"));
    assert!(!registry.supports("md"));
}

#[test]
fn test_converter_registry_with_defaults() {
    let registry = ConverterRegistry::with_defaults();

    assert!(registry.supports("docx"));
    assert!(registry.supports("DOCX")); // Case insensitive
    assert!(registry.supports("md"));
    assert!(registry.supports("txt"));
    assert!(!registry.supports("pdf"));
}

#[test]
fn test_converter_registry_register() {
    let mut registry = ConverterRegistry::new();
    let converter = Arc::new(MockConverter::new(vec!["odt", "fodt"], "opendocument"));

    registry.register(converter);

    assert!(registry.supports("odt"));
    assert!(registry.supports("fodt"));
    assert!(registry.supports("ODT")); // Case insensitive
}

#[test]
fn test_converter_registry_get_by_name() {
    let registry = ConverterRegistry::with_defaults();

    assert!(registry.get_by_name("docx").is_some());
    assert!(registry.get_by_name("TEXT").is_some()); // Case insensitive
    assert!(registry.get_by_name("unknown").is_none());
}

#[test]
fn test_converter_registry_multiple_converters() {
    let mut registry = ConverterRegistry::new();

    registry.register(Arc::new(DocxConverter::new()));
    registry.register(Arc::new(TextConverter::new()));
    registry.register(Arc::new(MockConverter::new(vec!["rtf"], "rich-text")));

    assert!(registry.supports("docx"));
    assert!(registry.supports("markdown"));
    assert!(registry.supports("rtf"));

    let converter = registry.get_by_name("rich-text");
    assert!(converter.is_some());
    assert!(converter.unwrap().supports_extension("RTF"));
}

#[test]
fn test_mock_converter_through_registry() {
    let mut registry = ConverterRegistry::new();
    registry.register(Arc::new(MockConverter::new(vec!["mock"], "mock-converter")));

    let result = registry
        .convert(Path::new("input.mock"), &ConvertOptions::default())
        .unwrap();
    assert_eq!(result.paragraph_count(), 1);
    assert!(result.document.plain_text().contains("mock-converter"));

    let result = registry
        .convert_bytes(b"", "MOCK", &ConvertOptions::default())
        .unwrap();
    assert_eq!(result.document.plain_text(), "Converted bytes by mock-converter");
}

#[test]
fn test_text_conversion_uses_profile() {
    let registry = ConverterRegistry::with_defaults();
    let options = ConvertOptions::new().with_profile(StyleProfile::preset(StylePreset::Academic));

    let result = registry
        .convert_bytes("# Findings\n\nThe results.".as_bytes(), "md", &options)
        .unwrap();

    let profile = StyleProfile::preset(StylePreset::Academic);
    assert_eq!(result.document.page, *profile.document());
    assert_eq!(result.document.paragraphs[0].style, *profile.style(ElementKind::Title));
    assert_eq!(result.document.paragraphs[1].style, *profile.style(ElementKind::Body));
}

#[test]
fn test_registry_convert_missing_file() {
    let registry = ConverterRegistry::with_defaults();

    let result = registry.convert(Path::new("/nonexistent/notes.md"), &ConvertOptions::default());
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_registry_convert_no_extension_error() {
    let registry = ConverterRegistry::with_defaults();

    let result = registry.convert(Path::new("noextension"), &ConvertOptions::default());
    assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
}

#[test]
fn test_registry_convert_unsupported_extension_error() {
    let registry = ConverterRegistry::with_defaults();

    let result = registry.convert(Path::new("test.xyz"), &ConvertOptions::default());
    assert!(matches!(result, Err(Error::UnsupportedFormat(ref ext)) if ext == "xyz"));
}
