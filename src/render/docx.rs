//! DOCX rendering through `docx-rs`.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use docx_rs::{
    AlignmentType, BreakType, Docx, LineSpacing, LineSpacingType, PageMargin, Paragraph, Run,
    RunFonts, SpecialIndentType,
};

use crate::error::{Error, Result};
use crate::model::{FormattedDocument, FormattedParagraph};
use crate::style::{Alignment, DocumentRecord};

/// Twips in one centimeter.
pub const TWIPS_PER_CM: f32 = 567.0;

/// Line value of single spacing under the `auto` rule.
const SINGLE_LINE: f32 = 240.0;

/// Render a formatted document to DOCX bytes.
pub fn to_docx(doc: &FormattedDocument) -> Result<Vec<u8>> {
    let page = &doc.page;
    let mut docx = Docx::new()
        .page_margin(page_margin(page))
        .default_fonts(run_fonts(&page.font_family))
        .default_size(half_points(page.font_size));

    for paragraph in &doc.paragraphs {
        docx = docx.add_paragraph(build_paragraph(paragraph, page));
    }

    let mut buffer = Vec::new();
    docx.build()
        .pack(&mut Cursor::new(&mut buffer))
        .map_err(|e| Error::Render(format!("Failed to pack DOCX: {}", e)))?;

    Ok(buffer)
}

/// Render a formatted document and save it.
///
/// Parent directories of `path` are created when missing.
pub fn write_docx<P: AsRef<Path>>(doc: &FormattedDocument, path: P) -> Result<()> {
    let bytes = to_docx(doc)?;
    save_bytes(path.as_ref(), &bytes)?;
    log::info!(
        "Wrote {} paragraphs to {}",
        doc.paragraph_count(),
        path.as_ref().display()
    );
    Ok(())
}

/// Write bytes to `path`, creating parent directories first.
pub fn save_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, bytes)?;
    Ok(())
}

fn page_margin(page: &DocumentRecord) -> PageMargin {
    PageMargin::new()
        .top(cm_to_twips(page.margin_top))
        .bottom(cm_to_twips(page.margin_bottom))
        .left(cm_to_twips(page.margin_left))
        .right(cm_to_twips(page.margin_right))
}

fn run_fonts(family: &str) -> RunFonts {
    RunFonts::new()
        .ascii(family)
        .hi_ansi(family)
        .east_asia(family)
        .cs(family)
}

fn build_paragraph(paragraph: &FormattedParagraph, page: &DocumentRecord) -> Paragraph {
    let style = &paragraph.style;

    let mut run = text_run(&paragraph.text);
    if let Some(ref family) = style.font_family {
        run = run.fonts(run_fonts(family));
    }
    if let Some(size) = style.font_size {
        run = run.size(half_points(size));
    }
    if style.bold == Some(true) {
        run = run.bold();
    }

    let mut para = Paragraph::new().add_run(run);

    if let Some(alignment) = style.alignment {
        para = para.align(alignment_type(alignment));
    }

    let mut spacing = LineSpacing::new()
        .line(line_value(style.line_spacing.unwrap_or(page.line_spacing)))
        .line_rule(LineSpacingType::Auto);
    if let Some(before) = style.spacing_before {
        spacing = spacing.before(before.max(0.0).round() as u32);
    }
    if let Some(after) = style.spacing_after {
        spacing = spacing.after(after.max(0.0).round() as u32);
    }
    para = para.line_spacing(spacing);

    if let Some(chars) = style.first_line_indent {
        let twips = cm_to_twips(chars * page.indent_unit);
        para = para.indent(None, Some(SpecialIndentType::FirstLine(twips)), None, None);
    }

    para
}

/// A run holding `text`, with tabs and line breaks as DOCX elements.
fn text_run(text: &str) -> Run {
    let mut run = Run::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        for (j, segment) in line.split('\t').enumerate() {
            if j > 0 {
                run = run.add_tab();
            }
            run = run.add_text(segment);
        }
    }
    run
}

fn alignment_type(alignment: Alignment) -> AlignmentType {
    match alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
        Alignment::Right => AlignmentType::Right,
        Alignment::Justify => AlignmentType::Both,
    }
}

/// Centimeters to twips.
pub fn cm_to_twips(cm: f32) -> i32 {
    (cm * TWIPS_PER_CM).round() as i32
}

/// Points to the half-point unit DOCX uses for font sizes.
pub fn half_points(pt: f32) -> usize {
    (pt.max(0.0) * 2.0).round() as usize
}

/// Line-spacing multiplier to the `w:line` value of the `auto` rule.
fn line_value(multiplier: f32) -> i32 {
    (multiplier * SINGLE_LINE).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Reformatter;
    use crate::model::ElementKind;
    use crate::parser::{DocxPackage, DocxParser, DOCUMENT_PART};

    #[test]
    fn test_unit_conversions() {
        assert_eq!(cm_to_twips(2.54), 1440);
        assert_eq!(cm_to_twips(3.7), 2098);
        assert_eq!(half_points(22.0), 44);
        assert_eq!(half_points(10.5), 21);
        assert_eq!(line_value(1.5), 360);
        assert_eq!(line_value(1.0), 240);
    }

    #[test]
    fn test_to_docx_round_trip() {
        let formatted =
            Reformatter::default().reformat_text("# Title\n\nBody line one.\n\n---\nSigned");
        let bytes = to_docx(&formatted).unwrap();

        let source = DocxParser::from_bytes(&bytes).unwrap().parse().unwrap();
        let texts: Vec<_> = source.paragraphs.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["Title", "Body line one.", "Signed"]);
        assert_eq!(source.paragraphs[0].font_size, Some(22.0));
        assert_eq!(source.paragraphs[1].font_size, Some(16.0));
    }

    #[test]
    fn test_page_margins_written_once() {
        let formatted = Reformatter::default().reformat_text("one\ntwo\nthree");
        assert_eq!(formatted.kinds(), vec![ElementKind::Body; 3]);

        let bytes = to_docx(&formatted).unwrap();
        let package = DocxPackage::from_bytes(&bytes).unwrap();
        let xml = package.part_xml(DOCUMENT_PART).unwrap().unwrap();

        assert_eq!(xml.matches("<w:pgMar").count(), 1);
        assert!(xml.contains(r#"w:top="2098""#));
        assert!(xml.contains(r#"w:left="1588""#));
    }

    #[test]
    fn test_write_docx_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.docx");

        let formatted = Reformatter::default().reformat_text("hello");
        write_docx(&formatted, &path).unwrap();

        assert!(path.exists());
        let source = DocxParser::open(&path).unwrap().parse().unwrap();
        assert_eq!(source.plain_text(), "hello");
    }

    #[test]
    fn test_tabs_and_breaks_survive() {
        let mut formatted = Reformatter::default().reformat_text("placeholder");
        formatted.paragraphs[0].text = "a\tb\nc".to_string();

        let bytes = to_docx(&formatted).unwrap();
        let source = DocxParser::from_bytes(&bytes).unwrap().parse().unwrap();
        assert_eq!(source.paragraphs[0].text, "a\tb\nc");
    }
}
