//! DOCX reading and package handling.

mod docx_parser;
mod options;
mod package;
mod styles;

pub use docx_parser::DocxParser;
pub use options::{ErrorMode, ParseOptions};
pub use package::{DocxPackage, CORE_PROPERTIES_PART, DOCUMENT_PART, STYLES_PART};
pub use styles::{display_name, StyleTable};

#[cfg(test)]
pub(crate) use package::build_package;
