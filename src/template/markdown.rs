//! Markdown templates.
//!
//! A markdown template is a small sectioned text file:
//!
//! ```text
//! # {{company}} Notice
//!
//! [variables]
//! author: Jane
//! company: ACME
//!
//! [content]
//! ## 一、Background
//! Issued by {{author}} on {{date}}.
//! ---
//! {{company}}
//! ```
//!
//! `[section]` lines switch sections, `key: value` lines inside
//! `[variables]` declare defaults, a `# ` line outside `[content]` sets the
//! title, and every line of `[content]` is kept verbatim. Once inside
//! `[content]`, only `[variables]` or `[content]` ends it, so lines such as
//! `[1]` stay part of the text. The filled
//! content is rendered through the text-mode reformatter.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::format::Reformatter;
use crate::render::write_docx;
use crate::style::StyleProfile;

use super::{substitute, TemplateFiller, TemplateLibrary, Variables};

/// Parsed markdown template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownTemplate {
    /// Values declared by the template, title included
    pub variables: Variables,

    /// Lines of the `[content]` section, or `None` without one
    pub content: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Variables,
    Content,
    Other,
}

impl MarkdownTemplate {
    /// Parse template text.
    pub fn parse(text: &str) -> Self {
        let mut template = Self::default();
        let mut section = Section::Preamble;
        let mut content: Option<Vec<&str>> = None;

        for line in text.lines() {
            // Inside [content] only known section names end the section
            let header = section_header(line).filter(|name| {
                section != Section::Content || matches!(*name, "variables" | "content")
            });
            if let Some(name) = header {
                section = match name {
                    "variables" => Section::Variables,
                    "content" => {
                        content.get_or_insert_with(Vec::new);
                        Section::Content
                    }
                    _ => Section::Other,
                };
                continue;
            }

            match section {
                Section::Content => content.get_or_insert_with(Vec::new).push(line),
                _ => {
                    let trimmed = line.trim();
                    if let Some(title) = trimmed.strip_prefix("# ") {
                        template.variables.insert("title", title.trim());
                    } else if section == Section::Variables {
                        if let Some((key, value)) = trimmed.split_once(':') {
                            let key = key.trim();
                            if !key.is_empty() {
                                template.variables.insert(key, value.trim());
                            }
                        }
                    }
                }
            }
        }

        template.content = content.map(|lines| lines.join("\n"));
        template
    }

    /// Load and parse a template file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::parse(&fs::read_to_string(path)?))
    }

    /// The document text for `variables`: a `# ` title line followed by
    /// the content, both with placeholders substituted. Without a
    /// `[content]` section the `content` variable is used. A blank title
    /// leaves out the title line.
    pub fn render(&self, variables: &Variables) -> String {
        let title = substitute(variables.get("title").unwrap_or_default(), variables);
        let content = match self.content {
            Some(ref content) => substitute(content, variables).into_owned(),
            None => variables.get("content").unwrap_or_default().to_string(),
        };
        if title.trim().is_empty() {
            return content;
        }
        format!("# {}\n\n{}", title, content)
    }
}

/// `[name]` on a line of its own.
fn section_header(line: &str) -> Option<&str> {
    let name = line.trim().strip_prefix('[')?.strip_suffix(']')?.trim();
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-');
    valid.then_some(name)
}

/// Fills `.md` templates and renders them as styled DOCX.
#[derive(Debug, Clone, Default)]
pub struct MarkdownTemplateFiller {
    library: TemplateLibrary,
    reformatter: Reformatter,
}

impl MarkdownTemplateFiller {
    /// Create a filler over a template library using the default profile.
    pub fn new(library: TemplateLibrary) -> Self {
        Self::with_profile(library, StyleProfile::default())
    }

    /// Create a filler that renders with `profile`.
    pub fn with_profile(library: TemplateLibrary, profile: StyleProfile) -> Self {
        Self {
            library,
            reformatter: Reformatter::new(profile),
        }
    }

    /// Resolve variables and produce the document text of a template.
    pub fn render(&self, template: &MarkdownTemplate, variables: &Variables) -> String {
        let resolved = Variables::resolve(&template.variables, variables);
        template.render(&resolved)
    }
}

impl TemplateFiller for MarkdownTemplateFiller {
    fn name(&self) -> &str {
        "markdown"
    }

    fn extension(&self) -> &str {
        "md"
    }

    fn library(&self) -> &TemplateLibrary {
        &self.library
    }

    fn fill(&self, template: &str, variables: &Variables, output: &Path) -> Result<PathBuf> {
        let path = self.library.locate(template, self.extension())?;
        let parsed = MarkdownTemplate::load(&path)?;

        let text = self.render(&parsed, variables);
        let document = self.reformatter.reformat_text(&text);
        write_docx(&document, output)?;

        log::info!("Filled {} into {}", path.display(), output.display());
        Ok(output.to_path_buf())
    }
}
