//! DOCX document reader.
//!
//! Reads the body paragraphs of `word/document.xml` in order, keeping for
//! each one what the classifier needs: the display name of its paragraph
//! style, the explicit font size of its first run and its text.

use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, Result};
use crate::model::{Metadata, SourceDocument, SourceParagraph};

use super::options::ParseOptions;
use super::package::{DocxPackage, CORE_PROPERTIES_PART, DOCUMENT_PART, STYLES_PART};
use super::styles::{attribute, StyleTable};

/// DOCX document parser.
pub struct DocxParser {
    package: DocxPackage,
    options: ParseOptions,
}

impl DocxParser {
    /// Open a DOCX file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a DOCX file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let package = DocxPackage::open(path)?;
        Ok(Self { package, options })
    }

    /// Parse a DOCX from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a DOCX from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let package = DocxPackage::from_bytes(data)?;
        Ok(Self { package, options })
    }

    /// Wrap an already loaded package.
    pub fn from_package(package: DocxPackage, options: ParseOptions) -> Self {
        Self { package, options }
    }

    /// The underlying package.
    pub fn package(&self) -> &DocxPackage {
        &self.package
    }

    /// Parse the document into paragraphs.
    pub fn parse(&self) -> Result<SourceDocument> {
        let styles = self.load_styles()?;

        let xml = self.package.part_xml(DOCUMENT_PART)?.ok_or_else(|| {
            Error::InvalidDocument(format!("package has no {} part", DOCUMENT_PART))
        })?;

        let mut doc = SourceDocument::new();
        doc.paragraphs = read_paragraphs(&xml, &styles, &self.options)?;

        if self.options.read_metadata {
            doc.metadata = self.load_metadata()?;
        }

        log::debug!(
            "Parsed {} paragraphs ({} styles known)",
            doc.paragraph_count(),
            styles.len()
        );
        Ok(doc)
    }

    fn load_styles(&self) -> Result<StyleTable> {
        let xml = match self.package.part_xml(STYLES_PART) {
            Ok(Some(xml)) => xml,
            Ok(None) => {
                log::debug!("Package has no {}; using style ids as names", STYLES_PART);
                return Ok(StyleTable::new());
            }
            Err(e) if self.options.is_lenient() => {
                log::warn!("Skipping unreadable {}: {}", STYLES_PART, e);
                return Ok(StyleTable::new());
            }
            Err(e) => return Err(e),
        };

        match StyleTable::parse(&xml) {
            Ok(table) => Ok(table),
            Err(e) if self.options.is_lenient() => {
                log::warn!("Skipping malformed {}: {}", STYLES_PART, e);
                Ok(StyleTable::new())
            }
            Err(e) => Err(e),
        }
    }

    fn load_metadata(&self) -> Result<Metadata> {
        let result = self
            .package
            .part_xml(CORE_PROPERTIES_PART)
            .and_then(|xml| xml.map(|x| read_metadata(&x)).transpose());

        match result {
            Ok(metadata) => Ok(metadata.unwrap_or_default()),
            Err(e) if self.options.is_lenient() => {
                log::warn!("Skipping malformed {}: {}", CORE_PROPERTIES_PART, e);
                Ok(Metadata::default())
            }
            Err(e) => Err(e),
        }
    }
}

/// State of the paragraph being read.
#[derive(Default)]
struct ParagraphState {
    /// `w:p` elements opened inside this one (text boxes)
    nested: usize,
    /// Open elements below the `w:p`
    depth: usize,
    in_properties: bool,
    in_run: bool,
    /// Inside the first direct `w:r` child
    in_first_run: bool,
    in_first_run_properties: bool,
    in_text: bool,
    runs: usize,
    style_id: Option<String>,
    font_size: Option<f32>,
    text: String,
}

impl ParagraphState {
    fn is_active(&self) -> bool {
        self.nested == 0
    }

    fn finish(self, styles: &StyleTable) -> SourceParagraph {
        SourceParagraph {
            style_name: self.style_id.map(|id| styles.resolve(&id)),
            font_size: self.font_size,
            text: self.text,
        }
    }
}

/// Walks `document.xml` and collects body paragraphs.
struct ParagraphReader<'a> {
    styles: &'a StyleTable,
    options: &'a ParseOptions,
    table_depth: usize,
    textbox_depth: usize,
    current: Option<ParagraphState>,
    paragraphs: Vec<SourceParagraph>,
}

impl<'a> ParagraphReader<'a> {
    fn new(styles: &'a StyleTable, options: &'a ParseOptions) -> Self {
        Self {
            styles,
            options,
            table_depth: 0,
            textbox_depth: 0,
            current: None,
            paragraphs: Vec::new(),
        }
    }

    fn open(&mut self, e: &BytesStart<'_>) -> Result<()> {
        let name = e.local_name();
        match name.as_ref() {
            b"tbl" => self.table_depth += 1,
            b"txbxContent" => self.textbox_depth += 1,
            b"p" => match self.current.as_mut() {
                Some(state) => state.nested += 1,
                None => {
                    let in_scope = self.table_depth == 0 || self.options.include_tables;
                    if in_scope && self.textbox_depth == 0 {
                        self.current = Some(ParagraphState::default());
                    }
                }
            },
            local => {
                let Some(state) = self.current.as_mut().filter(|s| s.is_active()) else {
                    return Ok(());
                };
                match local {
                    b"pPr" => state.in_properties = true,
                    b"pStyle" if state.in_properties => {
                        state.style_id = attribute(e, b"val")?;
                    }
                    b"r" if !state.in_properties => {
                        state.in_run = true;
                        // Runs wrapped in hyperlinks or revisions are not
                        // paragraph runs
                        if state.depth == 0 {
                            state.runs += 1;
                            state.in_first_run = state.runs == 1;
                        }
                    }
                    b"rPr" if state.in_first_run => {
                        state.in_first_run_properties = true;
                    }
                    b"sz" if state.in_first_run_properties => {
                        state.font_size = attribute(e, b"val")?
                            .and_then(|v| v.trim().parse::<f32>().ok())
                            .map(|half_points| half_points / 2.0);
                    }
                    b"t" if state.in_run => state.in_text = true,
                    b"tab" if state.in_run => state.text.push('\t'),
                    b"br" | b"cr" if state.in_run => state.text.push('\n'),
                    _ => {}
                }
                state.depth += 1;
            }
        }
        Ok(())
    }

    fn close(&mut self, local: &[u8]) {
        match local {
            b"tbl" => self.table_depth = self.table_depth.saturating_sub(1),
            b"txbxContent" => self.textbox_depth = self.textbox_depth.saturating_sub(1),
            b"p" => match self.current.as_ref().map(|s| s.nested) {
                Some(0) => {
                    if let Some(state) = self.current.take() {
                        self.paragraphs.push(state.finish(self.styles));
                    }
                }
                Some(_) => {
                    if let Some(state) = self.current.as_mut() {
                        state.nested -= 1;
                    }
                }
                None => {}
            },
            _ => {
                if let Some(state) = self.current.as_mut().filter(|s| s.is_active()) {
                    state.depth = state.depth.saturating_sub(1);
                    match local {
                        b"pPr" => state.in_properties = false,
                        b"r" => {
                            state.in_run = false;
                            state.in_first_run = false;
                        }
                        b"rPr" => state.in_first_run_properties = false,
                        b"t" => state.in_text = false,
                        _ => {}
                    }
                }
            }
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(state) = self.current.as_mut() {
            if state.is_active() && state.in_text {
                state.text.push_str(text);
            }
        }
    }
}

/// Read the body paragraphs of a `document.xml` part.
pub(crate) fn read_paragraphs(
    xml: &str,
    styles: &StyleTable,
    options: &ParseOptions,
) -> Result<Vec<SourceParagraph>> {
    let mut reader = Reader::from_str(xml);
    let mut walker = ParagraphReader::new(styles, options);

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => walker.open(e)?,
            Ok(Event::Empty(ref e)) => {
                walker.open(e)?;
                walker.close(e.local_name().as_ref());
            }
            Ok(Event::End(ref e)) => walker.close(e.local_name().as_ref()),
            Ok(Event::Text(ref t)) => {
                let text = t.unescape().map_err(|e| Error::Xml(e.to_string()))?;
                walker.text(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::Xml(format!(
                    "{} at position {}: {}",
                    DOCUMENT_PART,
                    reader.error_position(),
                    e
                )))
            }
            _ => {}
        }
    }

    Ok(walker.paragraphs)
}

/// Read title, creator and subject from `docProps/core.xml`.
fn read_metadata(xml: &str) -> Result<Metadata> {
    let mut reader = Reader::from_str(xml);
    let mut metadata = Metadata::default();
    let mut field: Option<Vec<u8>> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let local = e.local_name();
                field = match local.as_ref() {
                    b"title" | b"creator" | b"subject" => Some(local.as_ref().to_vec()),
                    _ => None,
                };
            }
            Ok(Event::Text(ref t)) => {
                if let Some(ref name) = field {
                    let value = t
                        .unescape()
                        .map_err(|e| Error::Xml(e.to_string()))?
                        .trim()
                        .to_string();
                    if value.is_empty() {
                        continue;
                    }
                    match name.as_slice() {
                        b"title" => metadata.title = Some(value),
                        b"creator" => metadata.author = Some(value),
                        _ => metadata.subject = Some(value),
                    }
                }
            }
            Ok(Event::End(_)) => field = None,
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(format!("{}: {}", CORE_PROPERTIES_PART, e))),
            _ => {}
        }
    }

    Ok(metadata)
}
