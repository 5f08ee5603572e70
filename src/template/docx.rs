//! DOCX template filling.
//!
//! Text is patched inside each `w:t` node of the main document part and of
//! every header and footer part. All other parts are written back
//! untouched, so images, numbering and styles survive as-is. A placeholder
//! that Word split across two runs is not recognized.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use quick_xml::events::{BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::{Error, Result};
use crate::parser::DocxPackage;
use crate::render::save_bytes;

use super::{substitute, TemplateFiller, TemplateLibrary, Variables};

/// Fills `.docx` templates.
#[derive(Debug, Clone, Default)]
pub struct DocxTemplateFiller {
    library: TemplateLibrary,
}

impl DocxTemplateFiller {
    /// Create a filler over a template library.
    pub fn new(library: TemplateLibrary) -> Self {
        Self { library }
    }

    /// Fill a template package held in memory and return the new package.
    ///
    /// `variables` is used as given; no defaults are added.
    pub fn fill_bytes(&self, template: &[u8], variables: &Variables) -> Result<Vec<u8>> {
        let mut package = DocxPackage::from_bytes(template)?;
        fill_package(&mut package, variables)?;
        package.to_bytes()
    }
}

impl TemplateFiller for DocxTemplateFiller {
    fn name(&self) -> &str {
        "docx"
    }

    fn extension(&self) -> &str {
        "docx"
    }

    fn library(&self) -> &TemplateLibrary {
        &self.library
    }

    fn fill(&self, template: &str, variables: &Variables, output: &Path) -> Result<PathBuf> {
        let path = self.library.locate(template, self.extension())?;
        let mut package = DocxPackage::open(&path)?;

        let variables = Variables::resolve(&Variables::new(), variables);
        let patched = fill_package(&mut package, &variables)?;

        save_bytes(output, &package.to_bytes()?)?;
        log::info!(
            "Filled {} ({} parts changed) into {}",
            path.display(),
            patched,
            output.display()
        );
        Ok(output.to_path_buf())
    }
}

/// Substitute placeholders in every text part. Returns how many parts
/// changed.
fn fill_package(package: &mut DocxPackage, variables: &Variables) -> Result<usize> {
    let mut changed = 0;
    for name in package.text_parts() {
        let Some(xml) = package.part_xml(&name)? else {
            continue;
        };
        if let Some(patched) = patch_text_nodes(&xml, |text| substitute(text, variables))? {
            package.set_part(&name, patched.into_bytes())?;
            changed += 1;
        }
    }
    Ok(changed)
}

/// Rewrite the content of every `w:t` element with `patch`.
///
/// Returns `None` when no text changed. Everything outside `w:t` content is
/// copied byte-for-byte.
pub fn patch_text_nodes<F>(xml: &str, mut patch: F) -> Result<Option<String>>
where
    F: for<'t> FnMut(&'t str) -> Cow<'t, str>,
{
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Vec::with_capacity(xml.len()));
    let mut in_text = false;
    let mut changed = false;

    loop {
        let event = reader.read_event().map_err(|e| {
            Error::Xml(format!("at position {}: {}", reader.error_position(), e))
        })?;

        match event {
            Event::Start(ref e) if e.local_name().as_ref() == b"t" => in_text = true,
            Event::End(ref e) if e.local_name().as_ref() == b"t" => in_text = false,
            Event::Text(ref t) if in_text => {
                let original = t.unescape().map_err(|e| Error::Xml(e.to_string()))?;
                if let Cow::Owned(replaced) = patch(original.as_ref()) {
                    if replaced != original {
                        writer
                            .write_event(Event::Text(BytesText::new(&replaced)))
                            .map_err(|e| Error::Xml(e.to_string()))?;
                        changed = true;
                        continue;
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }

        writer
            .write_event(event)
            .map_err(|e| Error::Xml(e.to_string()))?;
    }

    if !changed {
        return Ok(None);
    }

    String::from_utf8(writer.into_inner())
        .map(Some)
        .map_err(|e| Error::Xml(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{DocxParser, DOCUMENT_PART};

    fn upper(text: &str) -> Cow<'_, str> {
        if text.chars().any(|c| c.is_lowercase()) {
            Cow::Owned(text.to_uppercase())
        } else {
            Cow::Borrowed(text)
        }
    }

    #[test]
    fn test_patch_only_text_nodes() {
        let xml = concat!(
            r#"<w:document xmlns:w="w"><w:body><w:p><w:pPr><w:pStyle w:val="body"/></w:pPr>"#,
            r#"<w:r><w:t xml:space="preserve">hi &amp; bye</w:t></w:r></w:p></w:body></w:document>"#
        );

        let patched = patch_text_nodes(xml, upper).unwrap().unwrap();
        assert_eq!(
            patched,
            concat!(
                r#"<w:document xmlns:w="w"><w:body><w:p><w:pPr><w:pStyle w:val="body"/></w:pPr>"#,
                r#"<w:r><w:t xml:space="preserve">HI &amp; BYE</w:t></w:r></w:p>"#,
                "</w:body></w:document>"
            )
        );
    }

    #[test]
    fn test_patch_without_changes() {
        let xml = "<w:document><w:body><w:p><w:r><w:t>SAME</w:t></w:r></w:p></w:body></w:document>";
        assert_eq!(patch_text_nodes(xml, upper).unwrap(), None);
    }

    #[test]
    fn test_patch_malformed() {
        let result = patch_text_nodes("<w:t>open</w:r>", upper);
        assert!(matches!(result, Err(Error::Xml(_))));
    }

    #[test]
    fn test_fill_bytes() {
        let document = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>
<w:p><w:r><w:t>{{name}}</w:t></w:r></w:p>
<w:p><w:r><w:t>Dear {{ name }}, see {{missing}}.</w:t></w:r></w:p>
</w:body></w:document>"#;
        let template = crate::parser::build_package(&[
            (DOCUMENT_PART, document),
            ("word/header1.xml", "<w:hdr><w:p><w:r><w:t>{{name}} header</w:t></w:r></w:p></w:hdr>"),
            ("word/media/logo.bin", "{{name}} stays"),
        ]);

        let vars = Variables::new().with("name", "X");
        let filled = DocxTemplateFiller::default().fill_bytes(&template, &vars).unwrap();

        let parsed = DocxParser::from_bytes(&filled).unwrap().parse().unwrap();
        let texts: Vec<_> = parsed.paragraphs.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["X", "Dear X, see {{missing}}."]);

        let package = DocxPackage::from_bytes(&filled).unwrap();
        assert_eq!(
            package.part_xml("word/header1.xml").unwrap().unwrap(),
            "<w:hdr><w:p><w:r><w:t>X header</w:t></w:r></w:p></w:hdr>"
        );
        assert_eq!(
            package.part("word/media/logo.bin").unwrap(),
            b"{{name}} stays"
        );
    }
}
