//! crates/diary_docx_core/src/domain.rs
//!
//! Defines the pure, core data structures for a generated document.
//! These structs are independent of any HTTP layer or file format.

/// The optional metadata that ends up in the title and the date prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentHeader {
    pub city: Option<String>,
    pub author_name: Option<String>,
    pub date: Option<String>,
}

/// A contiguous span of a line sharing one formatting attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub italic: bool,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            italic: false,
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            italic: true,
        }
    }
}

/// One body line, annotated as an ordered sequence of runs.
///
/// The runs never alter the characters of the line: joining their texts in
/// order gives back the line exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedLine {
    pub runs: Vec<TextRun>,
}

impl FormattedLine {
    /// Reassembles the original line from its runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// Everything a renderer needs: a bold centered title plus the body lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedDocument {
    pub title: String,
    pub lines: Vec<FormattedLine>,
}
