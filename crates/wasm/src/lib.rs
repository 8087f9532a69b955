mod dom;

use designdna_core::parsers::{ParseError, parse_auto};
use thiserror::Error;
use wasm_bindgen::prelude::*;

pub use dom::LiveDocument;

#[derive(Debug, Error)]
enum SnapshotError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("serialize: {0}")]
    Json(#[from] serde_json::Error),
}

/// Extract tokens from a capture (JSON) or stylesheet (CSS). Returns the
/// snapshot as JSON.
#[wasm_bindgen]
pub fn extract_from_capture(data: &[u8]) -> Result<String, JsError> {
    snapshot_json(data).map_err(|e| JsError::new(&e.to_string()))
}

/// Extract tokens from the page this module is running in. Returns the
/// snapshot as JSON.
#[wasm_bindgen]
pub fn extract_live_document() -> Result<String, JsError> {
    let document =
        LiveDocument::current().ok_or_else(|| JsError::new("no document in this context"))?;
    let snapshot = designdna_core::extract(&document);
    serde_json::to_string(&snapshot).map_err(|e| JsError::new(&e.to_string()))
}

fn snapshot_json(data: &[u8]) -> Result<String, SnapshotError> {
    let document = parse_auto(data)?;
    let snapshot = designdna_core::extract(&document);
    Ok(serde_json::to_string(&snapshot)?)
}
