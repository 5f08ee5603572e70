//! # docgen
//!
//! Document reformatting and template filling for Word documents.
//!
//! Two pipelines share one style configuration:
//!
//! - **Reformatting** reads a `.docx`, `.md` or `.txt` input, classifies each
//!   paragraph (title, headings, body, signature) and writes a fresh DOCX
//!   with the fonts, sizes, spacing and margins of a [`StyleProfile`].
//! - **Template filling** replaces `{{name}}` placeholders in a template
//!   found in a template directory tree and saves the result.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docgen::{format_file, fill_template, Variables};
//!
//! fn main() -> docgen::Result<()> {
//!     // Restyle a document with the built-in profile
//!     let doc = format_file("draft.docx", "out/final.docx")?;
//!     println!("{} paragraphs", doc.paragraph_count());
//!
//!     // Fill a template
//!     let vars = Variables::new().with("author", "Jane");
//!     fill_template("templates", "letter", &vars, "out/letter.docx")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Paragraph classification**: style names, run font sizes and numbering
//!   patterns (`一、`, `1.`, `(1)`)
//! - **Style profiles**: built-in presets, JSON configuration, builder API
//! - **Markdown input**: `#`/`##`/`###` headings and `---` signatures
//! - **Template filling**: DOCX templates keep their layout; markdown
//!   templates are rendered with a profile

pub mod classify;
pub mod convert;
pub mod detect;
pub mod error;
pub mod format;
pub mod model;
pub mod parser;
pub mod render;
pub mod style;
pub mod template;

// Re-export commonly used types
pub use classify::ParagraphClassifier;
pub use convert::{ConvertOptions, ConvertResult, ConverterRegistry, DocumentConverter};
pub use detect::{detect_format_from_path, InputFormat};
pub use error::{Error, Result};
pub use format::Reformatter;
pub use model::{ElementKind, FormattedDocument, Metadata, SourceDocument, SourceParagraph};
pub use parser::{DocxParser, ParseOptions};
pub use render::JsonFormat;
pub use style::{Alignment, StyleConfig, StylePreset, StyleProfile, StyleRecord};
pub use template::{
    DocxTemplateFiller, MarkdownTemplateFiller, TemplateFiller, TemplateLibrary, Variables,
};

use std::path::{Path, PathBuf};

/// Reformat a file with the built-in profile and save it as DOCX.
///
/// The input format is picked by extension: `.docx`, `.md`, `.markdown`
/// or `.txt`.
///
/// # Example
///
/// ```no_run
/// use docgen::format_file;
///
/// let doc = format_file("notice.md", "notice.docx").unwrap();
/// println!("Paragraphs: {}", doc.paragraph_count());
/// ```
pub fn format_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<FormattedDocument> {
    format_file_with_profile(input, output, &StyleProfile::default())
}

/// Reformat a file with a custom profile and save it as DOCX.
///
/// # Example
///
/// ```no_run
/// use docgen::{format_file_with_profile, StylePreset, StyleProfile};
///
/// let profile = StyleProfile::preset(StylePreset::Academic);
/// format_file_with_profile("paper.docx", "paper-formatted.docx", &profile).unwrap();
/// ```
pub fn format_file_with_profile<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    profile: &StyleProfile,
) -> Result<FormattedDocument> {
    DocGen::new()
        .with_profile(profile.clone())
        .format(input, output)
}

/// Reformat text or markdown content.
///
/// # Example
///
/// ```
/// use docgen::{format_text, ElementKind, StyleProfile};
///
/// let doc = format_text("# Title\n\nBody line one.\n\n---\nSigned", &StyleProfile::default());
/// assert_eq!(
///     doc.kinds(),
///     vec![ElementKind::Title, ElementKind::Body, ElementKind::Signature]
/// );
/// ```
pub fn format_text(content: &str, profile: &StyleProfile) -> FormattedDocument {
    Reformatter::new(profile.clone()).reformat_text(content)
}

/// Read the paragraphs of a DOCX file.
///
/// # Example
///
/// ```no_run
/// use docgen::read_docx;
///
/// let doc = read_docx("report.docx").unwrap();
/// println!("{}", doc.plain_text());
/// ```
pub fn read_docx<P: AsRef<Path>>(path: P) -> Result<SourceDocument> {
    DocxParser::open(path)?.parse()
}

/// Fill a DOCX template from `template_dir` and save it to `output`.
///
/// # Example
///
/// ```no_run
/// use docgen::{fill_template, Variables};
///
/// let vars = Variables::new().with("title", "Quarterly Report");
/// fill_template("templates", "report", &vars, "report.docx").unwrap();
/// ```
pub fn fill_template<P: AsRef<Path>, Q: AsRef<Path>>(
    template_dir: P,
    name: &str,
    variables: &Variables,
    output: Q,
) -> Result<PathBuf> {
    DocGen::new()
        .with_template_dir(template_dir.as_ref())
        .generate(name, variables, output)
}

/// Builder for reformatting and template filling.
///
/// # Example
///
/// ```no_run
/// use docgen::{DocGen, StylePreset, Variables};
///
/// let docgen = DocGen::new()
///     .with_preset(StylePreset::Formal)
///     .with_template_dir("./templates")
///     .lenient();
///
/// docgen.format("draft.docx", "final.docx")?;
/// docgen.generate("letter", &Variables::new().with("author", "John"), "letter.docx")?;
/// # Ok::<(), docgen::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DocGen {
    profile: StyleProfile,
    parse_options: ParseOptions,
    templates: TemplateLibrary,
}

impl DocGen {
    /// Create a new builder with the built-in profile.
    pub fn new() -> Self {
        Self {
            profile: StyleProfile::default(),
            parse_options: ParseOptions::default(),
            templates: TemplateLibrary::default(),
        }
    }

    /// Use a style profile.
    pub fn with_profile(mut self, profile: StyleProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Use a built-in preset.
    pub fn with_preset(mut self, preset: StylePreset) -> Self {
        self.profile = StyleProfile::preset(preset);
        self
    }

    /// Load a JSON style configuration and merge it over the built-in
    /// defaults.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        self.profile = StyleProfile::load(path)?;
        Ok(self)
    }

    /// Enable lenient DOCX parsing.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Set the template directory.
    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.templates = TemplateLibrary::new(dir);
        self
    }

    /// The active profile.
    pub fn profile(&self) -> &StyleProfile {
        &self.profile
    }

    /// The template library.
    pub fn templates(&self) -> &TemplateLibrary {
        &self.templates
    }

    /// Reformat `input` without writing anything.
    pub fn preview<P: AsRef<Path>>(&self, input: P) -> Result<FormattedDocument> {
        let options = ConvertOptions::new()
            .with_profile(self.profile.clone())
            .with_parse_options(self.parse_options.clone());
        let result = ConverterRegistry::with_defaults().convert(input.as_ref(), &options)?;
        Ok(result.document)
    }

    /// Reformat `input` and save the result to `output`.
    pub fn format<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<FormattedDocument> {
        let document = self.preview(input)?;
        render::write_docx(&document, output)?;
        Ok(document)
    }

    /// Reformat text content and save it to `output`.
    pub fn format_text<Q: AsRef<Path>>(
        &self,
        content: &str,
        output: Q,
    ) -> Result<FormattedDocument> {
        let document = format_text(content, &self.profile);
        render::write_docx(&document, output)?;
        Ok(document)
    }

    /// Fill a DOCX template.
    pub fn generate<Q: AsRef<Path>>(
        &self,
        template: &str,
        variables: &Variables,
        output: Q,
    ) -> Result<PathBuf> {
        DocxTemplateFiller::new(self.templates.clone()).fill(template, variables, output.as_ref())
    }

    /// Fill a markdown template and render it with the active profile.
    pub fn generate_markdown<Q: AsRef<Path>>(
        &self,
        template: &str,
        variables: &Variables,
        output: Q,
    ) -> Result<PathBuf> {
        MarkdownTemplateFiller::with_profile(self.templates.clone(), self.profile.clone()).fill(
            template,
            variables,
            output.as_ref(),
        )
    }
}

impl Default for DocGen {
    fn default() -> Self {
        Self::new()
    }
}
