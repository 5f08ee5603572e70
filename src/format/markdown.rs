//! Line markers for text and markdown input.

use crate::model::ElementKind;

/// Marker prefix for a signature line.
pub const SIGNATURE_MARKER: &str = "---";

/// One classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedLine {
    /// Element kind chosen by the line's marker
    pub kind: ElementKind,
    /// Line content with the marker removed
    pub text: String,
}

impl MarkedLine {
    fn new(kind: ElementKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Split a trimmed, non-blank line into its kind and content.
///
/// Returns `None` for plain lines.
pub fn line_marker(line: &str) -> Option<(ElementKind, &str)> {
    if let Some(rest) = line.strip_prefix("# ") {
        Some((ElementKind::Title, rest.trim()))
    } else if let Some(rest) = line.strip_prefix("## ") {
        Some((ElementKind::Heading1, rest.trim()))
    } else if let Some(rest) = line.strip_prefix("### ") {
        Some((ElementKind::Heading2, rest.trim()))
    } else {
        line.strip_prefix(SIGNATURE_MARKER)
            .map(|rest| (ElementKind::Signature, rest.trim()))
    }
}

/// Classify every line of a text or markdown document.
///
/// Lines are trimmed and blank lines dropped. `---text` is a signature
/// line holding `text`. A bare `---` opens a signature block: the plain
/// lines right after it, up to the next blank or marker line, are
/// signature lines; if there are none the block is one empty signature
/// line.
pub fn parse_lines(content: &str) -> Vec<MarkedLine> {
    let mut lines = Vec::new();
    let mut in_signature = false;
    let mut pending_empty_signature = false;

    for raw in content.lines() {
        let line = raw.trim();

        if line.is_empty() {
            if pending_empty_signature {
                lines.push(MarkedLine::new(ElementKind::Signature, ""));
                pending_empty_signature = false;
            }
            in_signature = false;
            continue;
        }

        match line_marker(line) {
            Some((kind, rest)) => {
                if pending_empty_signature {
                    lines.push(MarkedLine::new(ElementKind::Signature, ""));
                }
                pending_empty_signature = kind == ElementKind::Signature && rest.is_empty();
                in_signature = pending_empty_signature;
                if !pending_empty_signature {
                    lines.push(MarkedLine::new(kind, rest));
                }
            }
            None if in_signature => {
                lines.push(MarkedLine::new(ElementKind::Signature, line));
                pending_empty_signature = false;
            }
            None => lines.push(MarkedLine::new(ElementKind::Body, line)),
        }
    }

    if pending_empty_signature {
        lines.push(MarkedLine::new(ElementKind::Signature, ""));
    }

    lines
}
