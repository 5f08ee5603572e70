//! Paragraph classification.
//!
//! Decides which element kind a source paragraph plays. Three signals are
//! checked in order and the first one that decides wins:
//!
//! 1. a style name containing `Heading` or `Title` → heading1
//! 2. an explicit first-run font size → title / heading1 / heading2 / body
//! 3. the trimmed text: blank → empty, enumerator prefix (`一、`, `3.`) →
//!    heading1, parenthesized number (`(2)`, `（2）`) → heading2, else body

use regex::Regex;

use crate::model::{ElementKind, SourceParagraph};

/// Font size (pt) at or above which a paragraph is a title.
pub const TITLE_MIN_SIZE: f32 = 22.0;

/// Font size (pt) at or above which a paragraph is a first-level heading.
pub const HEADING1_MIN_SIZE: f32 = 18.0;

/// Font size (pt) at or above which a paragraph is a second-level heading.
pub const HEADING2_MIN_SIZE: f32 = 16.0;

/// Classifies paragraphs into element kinds.
#[derive(Debug, Clone)]
pub struct ParagraphClassifier {
    enumerator_regex: Regex,
    parenthesized_regex: Regex,
}

impl ParagraphClassifier {
    /// Create a classifier.
    pub fn new() -> Self {
        Self {
            enumerator_regex: Regex::new(r"^[一二三四五六七八九十\d]+\s*[.、：:]")
                .unwrap(),
            parenthesized_regex: Regex::new(r"^[（(]\s*\d+[）)]").unwrap(),
        }
    }

    /// Classify one paragraph.
    pub fn classify(&self, paragraph: &SourceParagraph) -> ElementKind {
        if let Some(kind) = self.classify_style_name(paragraph.style_name.as_deref()) {
            return kind;
        }

        if let Some(size) = paragraph.font_size {
            return Self::classify_font_size(size);
        }

        self.classify_text(&paragraph.text)
    }

    /// Style-name rule. Title-named styles fold into heading1.
    fn classify_style_name(&self, style_name: Option<&str>) -> Option<ElementKind> {
        let name = style_name?;
        if name.contains("Heading") || name.contains("Title") {
            Some(ElementKind::Heading1)
        } else {
            None
        }
    }

    /// Font-size rule.
    pub fn classify_font_size(size: f32) -> ElementKind {
        if size >= TITLE_MIN_SIZE {
            ElementKind::Title
        } else if size >= HEADING1_MIN_SIZE {
            ElementKind::Heading1
        } else if size >= HEADING2_MIN_SIZE {
            ElementKind::Heading2
        } else {
            ElementKind::Body
        }
    }

    /// Text-pattern rule.
    pub fn classify_text(&self, text: &str) -> ElementKind {
        let text = text.trim();
        if text.is_empty() {
            return ElementKind::Empty;
        }
        if self.enumerator_regex.is_match(text) {
            return ElementKind::Heading1;
        }
        if self.parenthesized_regex.is_match(text) {
            return ElementKind::Heading2;
        }
        ElementKind::Body
    }
}

impl Default for ParagraphClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(p: SourceParagraph) -> ElementKind {
        ParagraphClassifier::new().classify(&p)
    }

    #[test]
    fn test_style_name_dominates_font_size() {
        let p = SourceParagraph::new("Overview")
            .with_style("Heading1")
            .with_font_size(10.0);
        assert_eq!(classify(p), ElementKind::Heading1);
    }

    #[test]
    fn test_title_style_folds_into_heading1() {
        let p = SourceParagraph::new("Annual Report").with_style("Title");
        assert_eq!(classify(p), ElementKind::Heading1);

        let p = SourceParagraph::new("Background").with_style("Heading 1");
        assert_eq!(classify(p), ElementKind::Heading1);
    }

    #[test]
    fn test_subtitle_style_falls_through() {
        // "Subtitle" does not contain "Title"
        let p = SourceParagraph::new("Annual Report").with_style("Subtitle");
        assert_eq!(classify(p), ElementKind::Body);

        let p = SourceParagraph::new("Annual Report")
            .with_style("Subtitle")
            .with_font_size(18.0);
        assert_eq!(classify(p), ElementKind::Heading1);
    }

    #[test]
    fn test_style_name_is_case_sensitive() {
        let p = SourceParagraph::new("text").with_style("heading 1");
        assert_eq!(classify(p), ElementKind::Body);
    }

    #[test]
    fn test_other_style_names_fall_through() {
        let p = SourceParagraph::new("一、总则").with_style("Normal");
        assert_eq!(classify(p), ElementKind::Heading1);
    }

    #[test]
    fn test_font_size_thresholds() {
        assert_eq!(ParagraphClassifier::classify_font_size(26.0), ElementKind::Title);
        assert_eq!(ParagraphClassifier::classify_font_size(22.0), ElementKind::Title);
        assert_eq!(ParagraphClassifier::classify_font_size(21.5), ElementKind::Heading1);
        assert_eq!(ParagraphClassifier::classify_font_size(18.0), ElementKind::Heading1);
        assert_eq!(ParagraphClassifier::classify_font_size(17.0), ElementKind::Heading2);
        assert_eq!(ParagraphClassifier::classify_font_size(16.0), ElementKind::Heading2);
        assert_eq!(ParagraphClassifier::classify_font_size(15.5), ElementKind::Body);
        assert_eq!(ParagraphClassifier::classify_font_size(10.5), ElementKind::Body);
    }

    #[test]
    fn test_font_size_dominates_text_patterns() {
        let p = SourceParagraph::new("1. Scope").with_font_size(12.0);
        assert_eq!(classify(p), ElementKind::Body);

        // Even blank text is decided by the size rule
        let p = SourceParagraph::new("   ").with_font_size(24.0);
        assert_eq!(classify(p), ElementKind::Title);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(classify(SourceParagraph::new("")), ElementKind::Empty);
        assert_eq!(classify(SourceParagraph::new(" \t\n ")), ElementKind::Empty);
        assert_eq!(classify(SourceParagraph::new("\u{3000}")), ElementKind::Empty);
    }

    #[test]
    fn test_enumerator_patterns() {
        let c = ParagraphClassifier::new();
        assert_eq!(c.classify_text("一、总体要求"), ElementKind::Heading1);
        assert_eq!(c.classify_text("十二、附则"), ElementKind::Heading1);
        assert_eq!(c.classify_text("3. Results"), ElementKind::Heading1);
        assert_eq!(c.classify_text("12：目标"), ElementKind::Heading1);
        assert_eq!(c.classify_text("4 : spaced"), ElementKind::Heading1);
        assert_eq!(c.classify_text("  2、indented"), ElementKind::Heading1);
        assert_eq!(c.classify_text("2024 was a good year"), ElementKind::Body);
    }

    #[test]
    fn test_parenthesized_patterns() {
        let c = ParagraphClassifier::new();
        assert_eq!(c.classify_text("(1) first"), ElementKind::Heading2);
        assert_eq!(c.classify_text("（12）第十二条"), ElementKind::Heading2);
        assert_eq!(c.classify_text("(12） mixed brackets"), ElementKind::Heading2);
        assert_eq!(c.classify_text("( 3) spaced"), ElementKind::Heading2);
        assert_eq!(c.classify_text("(a) letter"), ElementKind::Body);
    }

    #[test]
    fn test_plain_body() {
        let c = ParagraphClassifier::new();
        assert_eq!(c.classify_text("The quick brown fox."), ElementKind::Body);
        assert_eq!(c.classify_text("根据有关规定，现通知如下"), ElementKind::Body);
    }
}
