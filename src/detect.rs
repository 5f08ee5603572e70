//! Input format detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Input formats the reformatter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Word document (OOXML package)
    Docx,
    /// Markdown text with heading/signature markers
    Markdown,
    /// Plain text, interpreted with the same markers as Markdown
    Text,
}

impl InputFormat {
    /// Lowercase extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            InputFormat::Docx => "docx",
            InputFormat::Markdown => "md",
            InputFormat::Text => "txt",
        }
    }

    /// Whether the format is read as raw UTF-8 text.
    pub fn is_text(&self) -> bool {
        matches!(self, InputFormat::Markdown | InputFormat::Text)
    }

    /// Map an extension (any case, no leading dot) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "docx" => Some(InputFormat::Docx),
            "md" | "markdown" => Some(InputFormat::Markdown),
            "txt" => Some(InputFormat::Text),
            _ => None,
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Docx => write!(f, "DOCX"),
            InputFormat::Markdown => write!(f, "Markdown"),
            InputFormat::Text => write!(f, "Text"),
        }
    }
}

/// ZIP local file header magic: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Detect the input format from a file path's extension.
///
/// # Returns
/// * `Ok(InputFormat)` for `.docx`, `.md`, `.markdown`, `.txt`
/// * `Err(Error::UnsupportedFormat)` for anything else, including no extension
///
/// # Example
/// ```
/// use docgen::detect::{detect_format_from_path, InputFormat};
///
/// let format = detect_format_from_path("notes.md").unwrap();
/// assert_eq!(format, InputFormat::Markdown);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<InputFormat> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?;

    InputFormat::from_extension(ext).ok_or_else(|| Error::UnsupportedFormat(ext.to_string()))
}

/// Check that a file starts with the ZIP signature every DOCX package carries.
pub fn verify_docx_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let file = File::open(path.as_ref())?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 4];
    reader.read_exact(&mut header).map_err(|_| {
        Error::InvalidDocument(format!(
            "{} is too short to be a DOCX package",
            path.as_ref().display()
        ))
    })?;

    if is_docx_bytes(&header) {
        Ok(())
    } else {
        Err(Error::InvalidDocument(format!(
            "{} is not a ZIP-based DOCX package",
            path.as_ref().display()
        )))
    }
}

/// Check if bytes start with the ZIP signature.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    data.starts_with(ZIP_MAGIC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(detect_format_from_path("a.docx").unwrap(), InputFormat::Docx);
        assert_eq!(detect_format_from_path("a.DOCX").unwrap(), InputFormat::Docx);
        assert_eq!(detect_format_from_path("a.md").unwrap(), InputFormat::Markdown);
        assert_eq!(
            detect_format_from_path("a.markdown").unwrap(),
            InputFormat::Markdown
        );
        assert_eq!(detect_format_from_path("a.txt").unwrap(), InputFormat::Text);
    }

    #[test]
    fn test_detect_unsupported() {
        let result = detect_format_from_path("a.pdf");
        assert!(matches!(result, Err(Error::UnsupportedFormat(ext)) if ext == "pdf"));

        let result = detect_format_from_path("README");
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_is_docx_bytes() {
        assert!(is_docx_bytes(b"PK\x03\x04rest"));
        assert!(!is_docx_bytes(b"%PDF-1.7"));
        assert!(!is_docx_bytes(b""));
    }

    #[test]
    fn test_text_formats() {
        assert!(InputFormat::Markdown.is_text());
        assert!(InputFormat::Text.is_text());
        assert!(!InputFormat::Docx.is_text());
    }
}
