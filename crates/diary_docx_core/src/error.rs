//! crates/diary_docx_core/src/error.rs
//!
//! Validation failures raised while resolving and formatting a document body.

/// Every way a request body can be rejected by the core.
///
/// The display strings are shown to API clients verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("rawContent must be a string")]
    RawContentNotString,

    #[error("Failed to parse JSON: {0}")]
    MalformedJson(String),

    #[error("Invalid casing: use \"Diary\" (capital D).")]
    DiaryCasing,

    #[error("Invalid casing: use \"The Diary\" (capital T and D).")]
    TheDiaryCasing,
}
