use serde::{Deserialize, Serialize};

/// A distinct typographic style observed on an element with visible text.
///
/// The `sample_*` fields come from the first element that used this
/// (size, weight, line-height) combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    pub font_size: String,
    pub font_weight: String,
    pub line_height: String,
    pub letter_spacing: String,
    pub font_family: String,
    /// Lower-cased tag name, e.g. `h1`.
    pub sample_tag: String,
    /// Trimmed text content, at most 50 characters.
    pub sample_text: String,
}

impl TypeStyle {
    /// The identity of a type scale step.
    pub fn key(&self) -> (&str, &str, &str) {
        (&self.font_size, &self.font_weight, &self.line_height)
    }
}

/// One step of the deduplicated spacing scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleEntry {
    /// The computed value as it appeared on elements, e.g. `16px`.
    pub value: String,
    pub pixels: f64,
    /// How many element properties used exactly this value.
    pub usage_count: u32,
}
