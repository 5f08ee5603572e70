//! Document-level types.

use super::{ElementKind, FormattedParagraph, SourceParagraph};
use crate::style::DocumentRecord;
use serde::{Deserialize, Serialize};

/// A document as read from a DOCX package or a text file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Core properties, when the source carries them
    pub metadata: Metadata,

    /// Body paragraphs in reading order
    pub paragraphs: Vec<SourceParagraph>,
}

impl SourceDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a paragraph.
    pub fn add_paragraph(&mut self, paragraph: SourceParagraph) {
        self.paragraphs.push(paragraph);
    }

    /// Number of paragraphs, blank ones included.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Check if the document has any paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Get plain text content, one paragraph per line.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Core document properties (`docProps/core.xml`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author (`dc:creator`)
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,
}

impl Metadata {
    /// Check if no property is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.subject.is_none()
    }
}

/// The reformatter's output: page setup plus styled paragraphs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedDocument {
    /// Page margins and base font, applied once to the whole document
    pub page: DocumentRecord,

    /// Paragraphs to write
    pub paragraphs: Vec<FormattedParagraph>,
}

impl FormattedDocument {
    /// Create an empty document with the given page setup.
    pub fn new(page: DocumentRecord) -> Self {
        Self {
            page,
            paragraphs: Vec::new(),
        }
    }

    /// Add a paragraph.
    pub fn add_paragraph(&mut self, paragraph: FormattedParagraph) {
        self.paragraphs.push(paragraph);
    }

    /// Number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Check if the document has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Element kinds in paragraph order.
    pub fn kinds(&self) -> Vec<ElementKind> {
        self.paragraphs.iter().map(|p| p.kind).collect()
    }

    /// Get plain text content, one paragraph per line.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleRecord;

    #[test]
    fn test_source_plain_text() {
        let mut doc = SourceDocument::new();
        doc.add_paragraph(SourceParagraph::new("One"));
        doc.add_paragraph(SourceParagraph::new("Two"));
        assert_eq!(doc.plain_text(), "One\nTwo");
        assert_eq!(doc.paragraph_count(), 2);
    }

    #[test]
    fn test_formatted_kinds() {
        let mut doc = FormattedDocument::new(DocumentRecord::default());
        doc.add_paragraph(FormattedParagraph::new(
            ElementKind::Title,
            "T",
            StyleRecord::default(),
        ));
        doc.add_paragraph(FormattedParagraph::new(
            ElementKind::Body,
            "B",
            StyleRecord::default(),
        ));
        assert_eq!(doc.kinds(), vec![ElementKind::Title, ElementKind::Body]);
        assert_eq!(doc.plain_text(), "T\nB");
    }

    #[test]
    fn test_metadata_empty() {
        assert!(Metadata::default().is_empty());
        let meta = Metadata {
            title: Some("Report".into()),
            ..Default::default()
        };
        assert!(!meta.is_empty());
    }
}
