//! In-memory DOCX (OPC) package.
//!
//! A package is kept as its ordered list of ZIP entries so that a template
//! can be patched part by part and written back with every untouched part
//! byte-for-byte identical.

use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::detect::is_docx_bytes;
use crate::error::{Error, Result};

/// Main document part.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Style definitions part.
pub const STYLES_PART: &str = "word/styles.xml";

/// Core properties part.
pub const CORE_PROPERTIES_PART: &str = "docProps/core.xml";

/// One ZIP entry of the package.
#[derive(Debug, Clone)]
struct PackageEntry {
    name: String,
    data: Vec<u8>,
    is_dir: bool,
}

/// A DOCX package loaded into memory.
#[derive(Debug, Clone)]
pub struct DocxPackage {
    entries: Vec<PackageEntry>,
}

impl DocxPackage {
    /// Open a package from a file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path.as_ref())?;
        Self::from_bytes(&data).map_err(|e| match e {
            Error::InvalidDocument(msg) => {
                Error::InvalidDocument(format!("{}: {}", path.as_ref().display(), msg))
            }
            other => other,
        })
    }

    /// Load a package from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if !is_docx_bytes(data) {
            return Err(Error::InvalidDocument(
                "not a ZIP-based DOCX package".to_string(),
            ));
        }

        let mut archive = ZipArchive::new(Cursor::new(data))?;
        let mut entries = Vec::with_capacity(archive.len());

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            let name = file.name().to_string();
            let is_dir = file.is_dir();
            let mut data = Vec::with_capacity(file.size() as usize);
            if !is_dir {
                file.read_to_end(&mut data)?;
            }
            entries.push(PackageEntry { name, data, is_dir });
        }

        let package = Self { entries };
        if !package.contains(DOCUMENT_PART) {
            return Err(Error::InvalidDocument(format!(
                "package has no {} part",
                DOCUMENT_PART
            )));
        }

        log::debug!("Loaded DOCX package with {} parts", package.entries.len());
        Ok(package)
    }

    /// Check if a part exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Part names in package order.
    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter(|e| !e.is_dir).map(|e| e.name.as_str())
    }

    /// Raw bytes of a part.
    pub fn part(&self, name: &str) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|e| e.name == name && !e.is_dir)
            .map(|e| e.data.as_slice())
    }

    /// A part decoded as UTF-8 XML.
    pub fn part_xml(&self, name: &str) -> Result<Option<String>> {
        match self.part(name) {
            Some(bytes) => String::from_utf8(bytes.to_vec())
                .map(Some)
                .map_err(|e| Error::InvalidDocument(format!("{} is not UTF-8: {}", name, e))),
            None => Ok(None),
        }
    }

    /// Replace the bytes of an existing part.
    pub fn set_part(&mut self, name: &str, data: Vec<u8>) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.name == name && !e.is_dir)
            .ok_or_else(|| Error::InvalidDocument(format!("package has no {} part", name)))?;
        entry.data = data;
        Ok(())
    }

    /// Parts whose text the template filler patches: the main document
    /// plus every header and footer.
    pub fn text_parts(&self) -> Vec<String> {
        self.part_names()
            .filter(|name| {
                *name == DOCUMENT_PART
                    || (name.starts_with("word/header") && name.ends_with(".xml"))
                    || (name.starts_with("word/footer") && name.ends_with(".xml"))
            })
            .map(str::to_string)
            .collect()
    }

    /// Serialize the package to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for entry in &self.entries {
            if entry.is_dir {
                zip.add_directory(entry.name.as_str(), options)?;
            } else {
                zip.start_file(entry.name.as_str(), options)?;
                zip.write_all(&entry.data)?;
            }
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

/// Build a minimal package from (name, content) pairs.
#[cfg(test)]
pub(crate) fn build_package(parts: &[(&str, &str)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, content) in parts {
        zip.start_file(*name, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_zip() {
        let result = DocxPackage::from_bytes(b"plain text, not a package");
        assert!(matches!(result, Err(Error::InvalidDocument(_))));
    }

    #[test]
    fn test_rejects_package_without_document() {
        let data = build_package(&[("word/styles.xml", "<w:styles/>")]);
        let result = DocxPackage::from_bytes(&data);
        assert!(matches!(result, Err(Error::InvalidDocument(_))));
    }

    #[test]
    fn test_round_trip_preserves_parts() {
        let data = build_package(&[
            ("[Content_Types].xml", "<Types/>"),
            (DOCUMENT_PART, "<w:document/>"),
            ("word/header1.xml", "<w:hdr/>"),
            ("word/media/image1.png", "\u{1}\u{2}binary"),
        ]);
        let mut package = DocxPackage::from_bytes(&data).unwrap();
        package
            .set_part(DOCUMENT_PART, b"<w:document>x</w:document>".to_vec())
            .unwrap();

        let reloaded = DocxPackage::from_bytes(&package.to_bytes().unwrap()).unwrap();
        assert_eq!(
            reloaded.part(DOCUMENT_PART).unwrap(),
            b"<w:document>x</w:document>"
        );
        assert_eq!(
            reloaded.part("word/media/image1.png").unwrap(),
            "\u{1}\u{2}binary".as_bytes()
        );
        assert_eq!(
            reloaded.part_names().collect::<Vec<_>>(),
            vec![
                "[Content_Types].xml",
                DOCUMENT_PART,
                "word/header1.xml",
                "word/media/image1.png"
            ]
        );
    }

    #[test]
    fn test_text_parts() {
        let data = build_package(&[
            (DOCUMENT_PART, "<w:document/>"),
            ("word/header1.xml", "<w:hdr/>"),
            ("word/footer2.xml", "<w:ftr/>"),
            ("word/styles.xml", "<w:styles/>"),
            ("word/_rels/header1.xml.rels", "<Relationships/>"),
        ]);
        let package = DocxPackage::from_bytes(&data).unwrap();
        assert_eq!(
            package.text_parts(),
            vec![DOCUMENT_PART, "word/header1.xml", "word/footer2.xml"]
        );
    }

    #[test]
    fn test_set_missing_part() {
        let data = build_package(&[(DOCUMENT_PART, "<w:document/>")]);
        let mut package = DocxPackage::from_bytes(&data).unwrap();
        assert!(package.set_part("word/missing.xml", Vec::new()).is_err());
    }
}
