//! Plain text outline of a formatted document.

use crate::model::FormattedDocument;

/// Render one line per paragraph, prefixed with its element kind.
///
/// Used for dry runs: shows how each paragraph was classified without
/// writing a DOCX.
pub fn to_outline(doc: &FormattedDocument) -> String {
    doc.paragraphs
        .iter()
        .map(|p| format!("[{}] {}", p.kind, p.text))
        .collect::<Vec<_>>()
        .join("\n")
}
