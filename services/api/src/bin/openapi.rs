//! services/api/src/bin/openapi.rs
//!
//! Writes the OpenAPI document for the MoodSense REST API.
//!
//! Usage: `openapi [OUTPUT_PATH]`; the path defaults to `openapi.json`.

use api_lib::web::rest::ApiDoc;
use utoipa::OpenApi;

const DEFAULT_OUTPUT: &str = "openapi.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let doc = ApiDoc::openapi();
    let path_count = doc.paths.paths.len();
    std::fs::write(&output, doc.to_pretty_json()?)?;

    println!("✅ Wrote {} API paths to {}", path_count, output);
    Ok(())
}
