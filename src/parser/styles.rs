//! Style table from `word/styles.xml`.
//!
//! Paragraphs reference styles by id (`Heading1`); the classifier works on
//! the names Word displays (`Heading 1`). Built-in styles store a lower-case
//! internal name which is mapped to its display form here.

use std::collections::HashMap;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{Error, Result};

/// Maps style ids to display names.
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    names: HashMap<String, String>,
}

impl StyleTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the content of a `styles.xml` part.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        let mut names = HashMap::new();
        let mut current_id: Option<String> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) if e.local_name().as_ref() == b"style" => {
                    current_id = attribute(e, b"styleId")?;
                }
                Ok(Event::Empty(ref e)) if e.local_name().as_ref() == b"name" => {
                    if let (Some(id), Some(name)) = (current_id.as_ref(), attribute(e, b"val")?) {
                        names.insert(id.clone(), display_name(&name));
                    }
                }
                Ok(Event::End(ref e)) if e.local_name().as_ref() == b"style" => {
                    current_id = None;
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::Xml(format!(
                        "styles.xml at position {}: {}",
                        reader.error_position(),
                        e
                    )))
                }
                _ => {}
            }
        }

        Ok(Self { names })
    }

    /// Display name for a style id, falling back to the id itself.
    pub fn resolve(&self, style_id: &str) -> String {
        self.names
            .get(style_id)
            .cloned()
            .unwrap_or_else(|| style_id.to_string())
    }

    /// Number of known styles.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Read an attribute by local name.
pub(crate) fn attribute(
    e: &quick_xml::events::BytesStart<'_>,
    local: &[u8],
) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|e| Error::Xml(e.to_string()))?;
        if attr.key.local_name().as_ref() == local {
            let value = attr
                .unescape_value()
                .map_err(|e| Error::Xml(e.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

/// Map a built-in internal style name to the name Word displays.
pub fn display_name(name: &str) -> String {
    if let Some(level) = name.strip_prefix("heading ") {
        return format!("Heading {}", level);
    }
    match name {
        "title" => "Title".to_string(),
        "subtitle" => "Subtitle".to_string(),
        "normal" => "Normal".to_string(),
        "caption" => "Caption".to_string(),
        "header" => "Header".to_string(),
        "footer" => "Footer".to_string(),
        "toc 1" | "toc 2" | "toc 3" => name.replacen("toc", "TOC", 1),
        _ => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Heading1">
    <w:name w:val="heading 1"/>
    <w:basedOn w:val="Normal"/>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Title">
    <w:name w:val="title"/>
  </w:style>
  <w:style w:type="paragraph" w:styleId="a3">
    <w:name w:val="My Custom"/>
  </w:style>
</w:styles>"#;

    #[test]
    fn test_parse_and_resolve() {
        let table = StyleTable::parse(STYLES).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.resolve("Heading1"), "Heading 1");
        assert_eq!(table.resolve("Title"), "Title");
        assert_eq!(table.resolve("Normal"), "Normal");
        assert_eq!(table.resolve("a3"), "My Custom");
    }

    #[test]
    fn test_unknown_id_falls_back() {
        let table = StyleTable::new();
        assert!(table.is_empty());
        assert_eq!(table.resolve("Heading2"), "Heading2");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("heading 3"), "Heading 3");
        assert_eq!(display_name("subtitle"), "Subtitle");
        assert_eq!(display_name("toc 2"), "TOC 2");
        assert_eq!(display_name("Quote"), "Quote");
    }

    #[test]
    fn test_malformed_xml() {
        let result = StyleTable::parse("<w:styles><w:style></w:styles>");
        assert!(matches!(result, Err(Error::Xml(_))));
    }
}
