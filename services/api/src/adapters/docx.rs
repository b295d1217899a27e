//! services/api/src/adapters/docx.rs
//!
//! This module contains the adapter that writes `.docx` files with `docx-rs`.
//! It implements the `DocumentRenderer` port from the `core` crate.

use diary_docx_core::ports::{DocumentRenderer, PortError, PortResult};
use diary_docx_core::{FormattedDocument, FormattedLine};
use docx_rs::{AlignmentType, Docx, LineSpacing, LineSpacingType, Paragraph, Run, RunFonts};
use std::io::Cursor;

pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const FONT_NAME: &str = "Times New Roman";
// docx sizes are in half-points.
const FONT_SIZE_HALF_POINTS: usize = 24;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements the `DocumentRenderer` port with the diary template:
/// Times New Roman 12pt, a bold centered title and justified body paragraphs.
#[derive(Clone, Debug, Default)]
pub struct DocxRenderer;

impl DocxRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn styled_run(text: &str) -> Run {
    Run::new()
        .add_text(text)
        .fonts(
            RunFonts::new()
                .ascii(FONT_NAME)
                .hi_ansi(FONT_NAME)
                .east_asia(FONT_NAME)
                .cs(FONT_NAME),
        )
        .size(FONT_SIZE_HALF_POINTS)
}

fn title_paragraph(title: &str) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Center)
        .add_run(styled_run(title).bold())
}

fn body_paragraph(line: &FormattedLine) -> Paragraph {
    // 240 with the `auto` rule is single spacing.
    let spacing = LineSpacing::new()
        .line_rule(LineSpacingType::Auto)
        .line(240);

    line.runs.iter().fold(
        Paragraph::new()
            .align(AlignmentType::Both)
            .line_spacing(spacing),
        |paragraph, run| {
            let styled = styled_run(&run.text);
            paragraph.add_run(if run.italic { styled.italic() } else { styled })
        },
    )
}

/// Rejects characters outside the XML 1.0 `Char` production, which would
/// make `word/document.xml` unreadable.
fn ensure_xml_text(text: &str) -> PortResult<()> {
    match text.chars().find(|c| !is_xml_char(*c)) {
        Some(bad) => Err(PortError::Unexpected(format!(
            "text contains a character not allowed in a document: U+{:04X}",
            bad as u32
        ))),
        None => Ok(()),
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
        || (c >= '\u{20}' && c != '\u{FFFE}' && c != '\u{FFFF}')
}

//=========================================================================================
// `DocumentRenderer` Trait Implementation
//=========================================================================================

impl DocumentRenderer for DocxRenderer {
    fn render(&self, document: &FormattedDocument) -> PortResult<Vec<u8>> {
        ensure_xml_text(&document.title)?;
        for run in document.lines.iter().flat_map(|line| &line.runs) {
            ensure_xml_text(&run.text)?;
        }

        let docx = document
            .lines
            .iter()
            .fold(
                Docx::new().add_paragraph(title_paragraph(&document.title)),
                |docx, line| docx.add_paragraph(body_paragraph(line)),
            );

        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        Ok(buffer.into_inner())
    }
}
