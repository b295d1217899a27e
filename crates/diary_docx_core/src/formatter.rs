//! crates/diary_docx_core/src/formatter.rs
//!
//! Builds the title and body lines of a document and annotates every body line
//! with italic runs for the phrases "Diary" and "The Diary".

use crate::domain::{DocumentHeader, FormattedDocument, FormattedLine, TextRun};
use crate::error::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_CITY: &str = "City";
pub const DEFAULT_AUTHOR: &str = "Name";
pub const DEFAULT_DATE: &str = "No Date";
pub const SEPARATOR: &str = " – ";

// The two-word phrase comes first so it wins over a bare "diary" at the same position.
static DIARY_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:the diary|diary)\b").unwrap());

/// `"{city} – {author}"`. The title is never scanned for diary phrases.
pub fn compose_title(header: &DocumentHeader) -> String {
    let city = header.city.as_deref().unwrap_or(DEFAULT_CITY);
    let author = header.author_name.as_deref().unwrap_or(DEFAULT_AUTHOR);
    format!("{city}{SEPARATOR}{author}")
}

/// `"{date} – {body}"`; the separator stays even when the body is empty.
pub fn compose_full_text(header: &DocumentHeader, body: &str) -> String {
    let date = header.date.as_deref().unwrap_or(DEFAULT_DATE);
    format!("{date}{SEPARATOR}{body}")
}

/// Rejects any diary phrase that is not spelled exactly "Diary" or "The Diary".
///
/// Runs over the whole text at once, so a phrase is judged the same way no
/// matter how the text is later split into lines.
pub fn validate_casing(text: &str) -> Result<(), ValidationError> {
    for found in DIARY_PHRASE.find_iter(text) {
        let phrase = found.as_str();
        match phrase.to_lowercase().as_str() {
            "diary" if phrase != "Diary" => return Err(ValidationError::DiaryCasing),
            "the diary" if phrase != "The Diary" => return Err(ValidationError::TheDiaryCasing),
            _ => {}
        }
    }
    Ok(())
}

/// Splits on every universal line boundary (`\n`, `\r`, `\r\n`, vertical tab,
/// form feed, the file/group/record separators, NEL, LS and PS).
///
/// A trailing boundary does not produce a final empty line, and empty text
/// yields no lines at all.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_line_boundary(ch) {
            continue;
        }
        lines.push(&text[start..idx]);
        start = idx + ch.len_utf8();
        if ch == '\r' {
            if let Some(&(next_idx, '\n')) = chars.peek() {
                chars.next();
                start = next_idx + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn is_line_boundary(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Splits one line into plain runs and italic diary-phrase runs.
pub fn split_runs(line: &str) -> FormattedLine {
    let mut runs = Vec::new();
    let mut cursor = 0;

    for found in DIARY_PHRASE.find_iter(line) {
        if found.start() > cursor {
            runs.push(TextRun::plain(&line[cursor..found.start()]));
        }
        runs.push(TextRun::italic(found.as_str()));
        cursor = found.end();
    }

    if cursor < line.len() || runs.is_empty() {
        runs.push(TextRun::plain(&line[cursor..]));
    }
    FormattedLine { runs }
}

/// Composes, validates and annotates a whole document from its header and
/// normalized body.
pub fn format_document(
    header: &DocumentHeader,
    body: &str,
) -> Result<FormattedDocument, ValidationError> {
    let full_text = compose_full_text(header, body);
    validate_casing(&full_text)?;

    let mut lines: Vec<FormattedLine> = split_lines(&full_text)
        .into_iter()
        .map(split_runs)
        .collect();
    if lines.is_empty() {
        lines.push(split_runs(""));
    }

    Ok(FormattedDocument {
        title: compose_title(header),
        lines,
    })
}
