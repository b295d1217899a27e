pub mod domain;
pub mod error;
pub mod formatter;
pub mod ports;
pub mod resolver;

pub use domain::{DocumentHeader, FormattedDocument, FormattedLine, TextRun};
pub use error::ValidationError;
pub use formatter::format_document;
pub use ports::{DocumentRenderer, PortError, PortResult};
pub use resolver::{normalize_body, parse_raw_content};

use serde_json::Value;

/// Runs a resolved body through both stages: normalization, then formatting.
pub fn build_document(
    header: &DocumentHeader,
    body: Option<&Value>,
) -> Result<FormattedDocument, ValidationError> {
    let normalized = normalize_body(body);
    format_document(header, &normalized)
}
