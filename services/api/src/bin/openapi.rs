//! services/api/src/bin/openapi.rs
//!
//! Writes the OpenAPI document of the DOCX generator to disk, so clients can be
//! generated without starting the server. The output path defaults to
//! `openapi.json` and can be passed as the first argument.

use api_lib::web::ApiDoc;
use utoipa::OpenApi;

const DEFAULT_OUTPUT: &str = "openapi.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let api_doc = ApiDoc::openapi();
    std::fs::write(&output, api_doc.to_pretty_json()?)?;

    println!("OpenAPI document written to {}", output);
    for path in api_doc.paths.paths.keys() {
        println!("  {}", path);
    }
    Ok(())
}
