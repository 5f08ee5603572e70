//! Reformatting: classify paragraphs and attach the profile's styles.
//!
//! Two sources are supported. A parsed DOCX document is classified
//! paragraph by paragraph with [`ParagraphClassifier`]; text and markdown
//! input is classified by line markers (see [`parse_lines`]). Either way
//! the result is a fresh [`FormattedDocument`] carrying the profile's page
//! settings and one resolved [`StyleRecord`](crate::style::StyleRecord) per
//! paragraph. Source formatting is never carried over.

mod markdown;

pub use markdown::{line_marker, parse_lines, MarkedLine, SIGNATURE_MARKER};

use crate::classify::ParagraphClassifier;
use crate::model::{ElementKind, FormattedDocument, FormattedParagraph, SourceDocument};
use crate::style::StyleProfile;

/// Applies a style profile to documents and text.
#[derive(Debug, Clone, Default)]
pub struct Reformatter {
    profile: StyleProfile,
    classifier: ParagraphClassifier,
}

impl Reformatter {
    /// Create a reformatter for a profile.
    pub fn new(profile: StyleProfile) -> Self {
        Self {
            profile,
            classifier: ParagraphClassifier::new(),
        }
    }

    /// The active profile.
    pub fn profile(&self) -> &StyleProfile {
        &self.profile
    }

    /// Reformat a parsed DOCX document.
    ///
    /// Paragraphs whose trimmed text is empty are dropped.
    pub fn reformat_document(&self, source: &SourceDocument) -> FormattedDocument {
        let mut output = FormattedDocument::new(self.profile.document().clone());

        for paragraph in &source.paragraphs {
            let text = paragraph.text.trim();
            if text.is_empty() {
                continue;
            }

            let kind = self.classifier.classify(paragraph);
            log::debug!("Classified {:?} as {}", truncate(text), kind);
            output.add_paragraph(self.styled(kind, text));
        }

        output
    }

    /// Reformat text or markdown content.
    pub fn reformat_text(&self, content: &str) -> FormattedDocument {
        let mut output = FormattedDocument::new(self.profile.document().clone());

        for line in parse_lines(content) {
            log::debug!("Marked {:?} as {}", truncate(&line.text), line.kind);
            output.add_paragraph(self.styled(line.kind, line.text));
        }

        output
    }

    fn styled(&self, kind: ElementKind, text: impl Into<String>) -> FormattedParagraph {
        FormattedParagraph::new(kind, text, self.profile.style(kind).clone())
    }
}

fn truncate(text: &str) -> String {
    const MAX_CHARS: usize = 40;
    if text.chars().count() > MAX_CHARS {
        let head: String = text.chars().take(MAX_CHARS).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SourceParagraph;
    use crate::style::{Alignment, StylePreset};

    #[test]
    fn test_reformat_document_skips_blank_paragraphs() {
        let mut source = SourceDocument::new();
        source.add_paragraph(SourceParagraph::new("  一、总体要求  "));
        source.add_paragraph(SourceParagraph::new("   "));
        // A large first run on a blank paragraph is still dropped
        source.add_paragraph(SourceParagraph::new("").with_font_size(26.0));
        source.add_paragraph(SourceParagraph::new("正文内容。"));

        let output = Reformatter::default().reformat_document(&source);
        assert_eq!(output.paragraph_count(), 2);
        assert_eq!(output.paragraphs[0].text, "一、总体要求");
        assert_eq!(
            output.kinds(),
            vec![ElementKind::Heading1, ElementKind::Body]
        );
    }

    #[test]
    fn test_reformat_document_applies_profile_records() {
        let profile = StyleProfile::builtin();
        let mut source = SourceDocument::new();
        source.add_paragraph(SourceParagraph::new("Report").with_font_size(24.0));
        source.add_paragraph(SourceParagraph::new("(1) detail"));

        let output = Reformatter::new(profile.clone()).reformat_document(&source);
        assert_eq!(&output.paragraphs[0].style, profile.style(ElementKind::Title));
        assert_eq!(
            &output.paragraphs[1].style,
            profile.style(ElementKind::Heading2)
        );
        assert_eq!(&output.page, profile.document());
    }

    #[test]
    fn test_reformat_text_three_paragraphs() {
        let output =
            Reformatter::default().reformat_text("# Title\n\nBody line one.\n\n---\nSigned");

        assert_eq!(output.paragraph_count(), 3);
        assert_eq!(
            output.kinds(),
            vec![ElementKind::Title, ElementKind::Body, ElementKind::Signature]
        );
        assert_eq!(output.paragraphs[0].text, "Title");
        assert_eq!(output.paragraphs[1].text, "Body line one.");
        assert_eq!(output.paragraphs[2].text, "Signed");
        assert_eq!(
            output.paragraphs[2].style.alignment,
            Some(Alignment::Right)
        );
    }

    #[test]
    fn test_reformat_text_with_preset() {
        let reformatter = Reformatter::new(StyleProfile::preset(StylePreset::Academic));
        let output = reformatter.reformat_text("plain paragraph");
        assert_eq!(
            output.paragraphs[0].style.alignment,
            Some(Alignment::Justify)
        );
        assert_eq!(output.page.line_spacing, 2.0);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short"), "short");
        let long = "字".repeat(50);
        assert_eq!(truncate(&long).chars().count(), 43);
    }
}
