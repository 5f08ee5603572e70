//! Document model types shared by the parsers, the reformatter and the renderers.
//!
//! Source types describe what was read from an input (style name, first-run
//! font size, text). Formatted types describe what will be written: each
//! paragraph carries its element kind and the fully resolved style record.

mod document;
mod paragraph;

pub use document::{FormattedDocument, Metadata, SourceDocument};
pub use paragraph::{ElementKind, FormattedParagraph, SourceParagraph};
