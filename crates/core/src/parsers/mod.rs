pub mod capture;
pub mod stylesheet;

use crate::model::{CapturedDocument, CapturedSheet};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("capture: {0}")]
    Capture(#[from] capture::CaptureParseError),
    #[error("stylesheet: {0}")]
    Stylesheet(#[from] stylesheet::StylesheetParseError),
    #[error("unable to detect format")]
    UnknownFormat,
}

/// Auto-detect the input format and load it as a document.
///
/// Detection strategy:
/// 1. JSON object with `elements` or `styleSheets`: a document capture.
/// 2. JSON array whose entries all carry a `tag`: a bare element capture.
/// 3. Anything else that is not JSON: raw CSS, loaded as a document with
///    no elements and a single accessible stylesheet.
pub fn parse_auto(data: &[u8]) -> Result<CapturedDocument, ParseError> {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        if let Some(obj) = value.as_object()
            && (obj.contains_key("elements") || obj.contains_key("styleSheets"))
        {
            return Ok(capture::parse_capture(data)?);
        }

        if let Some(arr) = value.as_array()
            && arr.iter().all(|v| v.get("tag").is_some())
        {
            return Ok(capture::parse_capture(data)?);
        }

        return Err(ParseError::UnknownFormat);
    }

    let rules = stylesheet::parse_stylesheet(data)?;
    Ok(CapturedDocument::default().with_sheet(CapturedSheet::with_rules(rules)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_capture_object() {
        let doc = parse_auto(br#"{ "url": "x", "elements": [] }"#).unwrap();
        assert_eq!(doc.url, "x");
    }

    #[test]
    fn detects_element_array() {
        let doc = parse_auto(br#"[{ "tag": "DIV" }]"#).unwrap();
        assert_eq!(doc.elements.len(), 1);
    }

    #[test]
    fn falls_back_to_css() {
        let doc = parse_auto(b":root { --brand: #635bff; }").unwrap();
        assert!(doc.elements.is_empty());
        assert_eq!(doc.style_sheets.len(), 1);
        assert_eq!(doc.style_sheets[0].rules.len(), 1);
    }

    #[test]
    fn unrelated_json_is_unknown() {
        assert!(matches!(
            parse_auto(br#"{ "traceEvents": [] }"#),
            Err(ParseError::UnknownFormat)
        ));
    }
}
