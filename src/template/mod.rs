//! Template filling.
//!
//! Templates live in a directory tree ([`TemplateLibrary`]) and are
//! addressed by file name without extension. Two fillers share the
//! [`TemplateFiller`] trait:
//!
//! - [`DocxTemplateFiller`] patches `{{name}}` placeholders inside a `.docx`
//!   template and keeps its layout;
//! - [`MarkdownTemplateFiller`] fills a `.md` template and renders the
//!   result with a style profile.
//!
//! Values are layered as built-in defaults, then template-declared values,
//! then caller values (see [`Variables::resolve`]). Placeholders without a
//! value are left in the output as written.

mod docx;
mod library;
mod markdown;
mod substitute;
mod variables;

pub use docx::{patch_text_nodes, DocxTemplateFiller};
pub use library::{TemplateLibrary, DEFAULT_TEMPLATE_DIR};
pub use markdown::{MarkdownTemplate, MarkdownTemplateFiller};
pub use substitute::{placeholders, substitute};
pub use variables::{
    parse_assignment, Variables, DATE_FORMAT, DEFAULT_AUTHOR, DEFAULT_CONTENT, DEFAULT_TITLE,
};

use std::path::{Path, PathBuf};

use crate::error::Result;

/// A template format that can be filled with variables.
pub trait TemplateFiller: Send + Sync {
    /// Name of this filler.
    fn name(&self) -> &str;

    /// Template file extension, without the leading dot.
    fn extension(&self) -> &str;

    /// Where templates are looked up.
    fn library(&self) -> &TemplateLibrary;

    /// Fill the template `template` and write the document to `output`.
    ///
    /// Parent directories of `output` are created when missing. Returns the
    /// written path.
    fn fill(&self, template: &str, variables: &Variables, output: &Path) -> Result<PathBuf>;

    /// Names of the templates this filler can use.
    fn list(&self) -> Vec<String> {
        self.library().list(self.extension())
    }
}
