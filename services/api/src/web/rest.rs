//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification.

use crate::adapters::DOCX_MIME_TYPE;
use crate::error::ApiError;
use crate::web::protocol::{
    Base64DocumentResponse, DocumentRequest, ErrorResponse, HealthResponse, RootResponse,
    ServiceEntry,
};
use crate::web::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
        HeaderValue, StatusCode,
    },
    response::{IntoResponse, Json, Response},
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use diary_docx_core::{build_document, parse_raw_content, ValidationError};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};
use utoipa::OpenApi;

const DEFAULT_DOCUMENT_NAME: &str = "document";
const DOCX_EXTENSION: &str = ".docx";

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DOCX Generator API",
        description = "API for generating DOCX documents",
        version = "1.0.0"
    ),
    paths(root_handler, health_handler, create_docx_handler),
    components(schemas(
        DocumentRequest,
        Base64DocumentResponse,
        ErrorResponse,
        RootResponse,
        ServiceEntry,
        HealthResponse
    )),
    tags(
        (name = "DOCX Generator", description = "Generates diary documents from JSON content.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// Helpers
//=========================================================================================

/// Picks the body to render: `body` when present, otherwise the parsed `rawContent`.
pub fn resolve_body(
    body: Option<Value>,
    raw_content: Option<&Value>,
) -> Result<Option<Value>, ValidationError> {
    if body.is_some() {
        return Ok(body);
    }
    match raw_content {
        None => Ok(None),
        Some(Value::String(text)) if text.is_empty() => Ok(None),
        Some(raw) => parse_raw_content(raw).map(Some),
    }
}

/// `documentName` without a trailing `.docx` (any case), with `.docx` appended.
pub fn output_file_name(document_name: Option<&str>) -> String {
    let base = document_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_DOCUMENT_NAME);

    let split = base.len().saturating_sub(DOCX_EXTENSION.len());
    let stem = match base.get(split..) {
        Some(tail) if tail.eq_ignore_ascii_case(DOCX_EXTENSION) => &base[..split],
        _ => base,
    };
    format!("{stem}{DOCX_EXTENSION}")
}

fn content_disposition(file_name: &str) -> Result<HeaderValue, ApiError> {
    let quoted: String = file_name
        .chars()
        .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
        .collect();
    HeaderValue::from_bytes(format!("attachment; filename=\"{quoted}\"").as_bytes())
        .map_err(|e| ApiError::Internal(format!("Invalid Content-Disposition header: {e}")))
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Describes the available services.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service index", body = RootResponse))
)]
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to the DOCX Generator API".to_string(),
        services: vec![ServiceEntry {
            name: "DOCX Generator".to_string(),
            endpoint: "/docx-generator".to_string(),
        }],
        documentation: "/docs".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "The service is up", body = HealthResponse))
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// Generate a DOCX document.
///
/// Returns the file as an attachment, or a JSON envelope with base64 data when
/// `returnBase64` is true.
#[utoipa::path(
    post,
    path = "/docx-generator/",
    request_body = DocumentRequest,
    responses(
        (status = 200, description = "The generated document (raw bytes, or this envelope when returnBase64 is set)", body = Base64DocumentResponse),
        (status = 400, description = "Invalid rawContent or diary casing", body = ErrorResponse),
        (status = 422, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "DOCX Generator"
)]
pub async fn create_docx_handler(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<DocumentRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(mut request) = payload?;

    let header = request.header();
    let file_name = output_file_name(request.document_name.as_deref());

    let document = resolve_body(request.body.take(), request.raw_content.as_ref())
        .and_then(|body| build_document(&header, body.as_ref()))
        .inspect_err(|e| warn!("Rejected document request: {}", e))?;

    let bytes = app_state.renderer.render(&document)?;
    info!(
        file_name = %file_name,
        lines = document.lines.len(),
        size = bytes.len(),
        "Generated document"
    );

    if request.return_base64.unwrap_or(false) {
        let response = Base64DocumentResponse {
            success: true,
            file_name,
            mime_type: DOCX_MIME_TYPE.to_string(),
            data: BASE64.encode(&bytes),
        };
        return Ok(Json(response).into_response());
    }

    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, HeaderValue::from_static(DOCX_MIME_TYPE)),
            (CONTENT_DISPOSITION, content_disposition(&file_name)?),
        ],
        bytes,
    )
        .into_response())
}
