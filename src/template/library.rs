//! Template directory lookup.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Default template directory, relative to the working directory.
pub const DEFAULT_TEMPLATE_DIR: &str = "templates";

/// A directory tree of template documents.
///
/// Templates are addressed by file name without extension and may sit at
/// any depth below the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLibrary {
    root: PathBuf,
}

impl TemplateLibrary {
    /// Create a library rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find the template `name` with the given extension.
    ///
    /// The tree is walked depth-first in file-name order; the first match
    /// wins.
    pub fn locate(&self, name: &str, extension: &str) -> Result<PathBuf> {
        let path = self
            .files(extension)
            .find(|path| file_stem(path) == Some(name))
            .ok_or_else(|| Error::TemplateNotFound(format!("{}.{}", name, extension)))?;

        log::debug!("Template {} resolved to {}", name, path.display());
        Ok(path)
    }

    /// Names of all templates with the given extension, sorted and
    /// de-duplicated.
    pub fn list(&self, extension: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .files(extension)
            .filter_map(|path| file_stem(&path).map(str::to_string))
            .collect();
        names.sort();
        names.dedup();
        names
    }

    fn files<'a>(&'a self, extension: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::debug!("Skipping unreadable template entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(move |path| {
                path.extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case(extension))
            })
    }
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE_DIR)
    }
}

fn file_stem(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|s| s.to_str())
}
