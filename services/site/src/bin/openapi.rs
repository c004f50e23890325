//! services/site/src/bin/openapi.rs
//!
//! Writes the JSON API's OpenAPI document. Usage: `openapi [OUTPUT]`, where
//! `OUTPUT` defaults to `openapi.json` in the working directory.

use site_lib::error::ApiError;
use site_lib::web::rest::{write_openapi, OPENAPI_FILE};
use std::path::PathBuf;

fn main() -> Result<(), ApiError> {
    tracing_subscriber::fmt().with_target(false).init();

    let output = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(OPENAPI_FILE));
    write_openapi(&output)
}
