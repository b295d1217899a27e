//! crates/diary_docx_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! The renderer trait keeps the core independent of any concrete document
//! container library.

use crate::domain::FormattedDocument;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from the underlying libraries.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

pub trait DocumentRenderer: Send + Sync {
    /// Serializes a formatted document into the bytes of a binary document file.
    ///
    /// Implementations must render the title as one bold, centered paragraph and
    /// each body line as a justified, single-spaced paragraph whose italic runs
    /// stay italic.
    fn render(&self, document: &FormattedDocument) -> PortResult<Vec<u8>>;
}
