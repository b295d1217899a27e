//! services/api/src/web/protocol.rs
//!
//! Defines the JSON payloads exchanged between clients and the DOCX generator.

use diary_docx_core::DocumentHeader;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

//=========================================================================================
// Messages Sent FROM the Client TO the Server
//=========================================================================================

/// A request to generate one document.
///
/// `body` wins over `rawContent` when both are present.
#[derive(Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequest {
    pub city: Option<String>,
    pub author_name: Option<String>,
    pub date: Option<String>,
    /// A string, a list of entries or a mapping.
    #[schema(value_type = Option<Object>)]
    pub body: Option<Value>,
    /// The raw reply of a language model, usually a fenced JSON code block.
    #[schema(value_type = Option<String>)]
    pub raw_content: Option<Value>,
    pub document_name: Option<String>,
    pub return_base64: Option<bool>,
}

impl DocumentRequest {
    pub fn header(&self) -> DocumentHeader {
        DocumentHeader {
            city: self.city.clone(),
            author_name: self.author_name.clone(),
            date: self.date.clone(),
        }
    }
}

//=========================================================================================
// Messages Sent FROM the Server TO the Client
//=========================================================================================

/// Returned instead of the raw file when `returnBase64` is set.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Base64DocumentResponse {
    pub success: bool,
    pub file_name: String,
    pub mime_type: String,
    pub data: String,
}

/// Body of every error response.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ServiceEntry {
    pub name: String,
    pub endpoint: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct RootResponse {
    pub message: String,
    pub services: Vec<ServiceEntry>,
    pub documentation: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub ok: bool,
}
