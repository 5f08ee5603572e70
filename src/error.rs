//! Error types for docgen library.

use std::io;
use thiserror::Error;

/// Result type alias for docgen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while formatting or generating documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading a source or writing a destination.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input extension is not handled by any converter.
    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    /// No template with the requested name exists under the template root.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// The style configuration could not be parsed.
    #[error("Style configuration error: {0}")]
    ConfigParse(String),

    /// The input is not a usable DOCX package.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// A package part contains malformed XML.
    #[error("XML error: {0}")]
    Xml(String),

    /// Error while producing output (DOCX packing, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            _ => Error::InvalidDocument(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::TemplateNotFound("report".to_string());
        assert_eq!(err.to_string(), "Template not found: report");

        let err = Error::UnsupportedFormat("pdf".to_string());
        assert_eq!(err.to_string(), "Unsupported input format: pdf");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_zip_error_conversion() {
        let err: Error = zip::result::ZipError::FileNotFound.into();
        assert!(matches!(err, Error::InvalidDocument(_)));
    }
}
