pub mod docx;

pub use docx::{DocxRenderer, DOCX_MIME_TYPE};
