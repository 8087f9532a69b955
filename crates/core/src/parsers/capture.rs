use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::model::{CapturedDocument, CapturedElement};

#[derive(Debug, Error)]
pub enum CaptureParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A capture file is either a full document object or a bare array of
/// elements (no URL, no stylesheets).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CaptureFile {
    Document(CapturedDocument),
    Elements(Vec<CapturedElement>),
}

/// Parse a browser capture into a [`CapturedDocument`].
///
/// Style keys may be written the way the CSSOM exposes them on a style
/// object (`backgroundColor`); they are normalized to hyphenated property
/// names (`background-color`). Custom properties are kept verbatim.
pub fn parse_capture(data: &[u8]) -> Result<CapturedDocument, CaptureParseError> {
    let file: CaptureFile = serde_json::from_slice(data)?;
    let mut document = match file {
        CaptureFile::Document(document) => document,
        CaptureFile::Elements(elements) => CapturedDocument {
            elements,
            ..CapturedDocument::default()
        },
    };

    for element in &mut document.elements {
        if element.style.keys().any(|k| needs_hyphenation(k)) {
            let style = std::mem::take(&mut element.style);
            element.style = normalize_style(style);
        }
    }

    Ok(document)
}

fn normalize_style(style: IndexMap<String, String>) -> IndexMap<String, String> {
    style
        .into_iter()
        .map(|(key, value)| {
            if needs_hyphenation(&key) {
                (hyphenate(&key), value)
            } else {
                (key, value)
            }
        })
        .collect()
}

fn needs_hyphenation(key: &str) -> bool {
    !key.starts_with("--") && key.chars().any(|c| c.is_ascii_uppercase())
}

/// `borderTopColor` → `border-top-color`, `WebkitTransition` →
/// `-webkit-transition`.
fn hyphenate(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
