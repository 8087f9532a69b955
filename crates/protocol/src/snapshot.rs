use chrono::{DateTime, Utc};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::types::{ScaleEntry, TypeStyle};

/// The design language of one document, captured in a single extraction pass.
///
/// This is the only record the extractor produces. It is built fresh on
/// every run and never mutated afterwards.
///
/// ```text
///   Document ──▶ traversal ──┬─▶ colors      ─┐
///   (elements,               ├─▶ typography  ─┤
///    computed styles,        ├─▶ spacing     ─┼─▶ StyleSnapshot ──▶ JSON
///    stylesheets)            └─▶ effects     ─┘       + stats
/// ```
///
/// Every collection is ordered. Sets keep first-seen order and maps keep
/// first-insertion order, so two runs over the same document serialize
/// identically apart from `extracted_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSnapshot {
    pub extracted_at: DateTime<Utc>,
    pub source_url: String,
    pub colors: ColorTokens,
    pub typography: TypographyTokens,
    pub spacing: SpacingTokens,
    pub effects: EffectTokens,
    pub stats: Stats,
}

impl StyleSnapshot {
    /// Number of element properties that used `color`. Colors that only
    /// appear in stylesheet text report zero.
    pub fn color_usage(&self, color: &str) -> u32 {
        self.colors.usage.get(color).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorTokens {
    /// Distinct colors ranked by usage, most used first. Ties keep the
    /// order in which the colors were discovered.
    pub raw: Vec<String>,
    /// Occurrence count per color across all inspected element properties.
    pub usage: IndexMap<String, u32>,
    /// Custom properties declared on `:root` or `html` rules.
    pub css_variables: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyTokens {
    pub font_families: IndexSet<String>,
    /// One entry per (size, weight, line-height) triple, largest size first.
    pub type_scale: Vec<TypeStyle>,
    /// Distinct weights, lightest first.
    pub font_weights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingTokens {
    /// Every distinct spacing value, ascending by pixel magnitude.
    pub all_values: Vec<String>,
    pub scale: Vec<ScaleEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectTokens {
    pub shadows: IndexSet<String>,
    /// Distinct radii, ascending by pixel magnitude.
    pub border_radii: Vec<String>,
    pub transitions: IndexSet<String>,
}

/// Summary counts over every token category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_colors: usize,
    pub total_css_vars: usize,
    pub total_fonts: usize,
    pub total_font_weights: usize,
    pub total_type_scale: usize,
    pub total_spacing_values: usize,
    pub total_spacing_scale: usize,
    pub total_shadows: usize,
    pub total_radii: usize,
    pub total_transitions: usize,
}

impl Stats {
    /// Labelled counts in display order.
    pub fn entries(&self) -> [(&'static str, usize); 10] {
        [
            ("colors", self.total_colors),
            ("css variables", self.total_css_vars),
            ("font families", self.total_fonts),
            ("font weights", self.total_font_weights),
            ("type scale", self.total_type_scale),
            ("spacing values", self.total_spacing_values),
            ("spacing scale", self.total_spacing_scale),
            ("shadows", self.total_shadows),
            ("border radii", self.total_radii),
            ("transitions", self.total_transitions),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_snapshot() -> StyleSnapshot {
        StyleSnapshot {
            extracted_at: DateTime::from_timestamp(0, 0).unwrap(),
            source_url: "https://example.com/".into(),
            colors: ColorTokens::default(),
            typography: TypographyTokens::default(),
            spacing: SpacingTokens::default(),
            effects: EffectTokens::default(),
            stats: Stats::default(),
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut snapshot = empty_snapshot();
        snapshot
            .colors
            .css_variables
            .insert("--brand".into(), "#635bff".into());
        snapshot.spacing.scale.push(ScaleEntry {
            value: "8px".into(),
            pixels: 8.0,
            usage_count: 3,
        });

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["sourceUrl"], "https://example.com/");
        assert_eq!(json["extractedAt"], "1970-01-01T00:00:00Z");
        assert_eq!(json["colors"]["cssVariables"]["--brand"], "#635bff");
        assert_eq!(json["spacing"]["scale"][0]["usageCount"], 3);
        assert_eq!(json["spacing"]["scale"][0]["pixels"], 8.0);
        assert!(json["spacing"]["allValues"].is_array());
        assert!(json["typography"]["fontFamilies"].is_array());
        assert!(json["effects"]["borderRadii"].is_array());
        assert_eq!(json["stats"]["totalCssVars"], 0);
    }

    #[test]
    fn usage_map_keeps_insertion_order() {
        let mut snapshot = empty_snapshot();
        for color in ["rgb(255, 255, 255)", "rgb(0, 0, 0)", "rgb(99, 91, 255)"] {
            snapshot.colors.usage.insert(color.into(), 1);
        }
        let json = serde_json::to_string(&snapshot.colors.usage).unwrap();
        assert_eq!(
            json,
            r#"{"rgb(255, 255, 255)":1,"rgb(0, 0, 0)":1,"rgb(99, 91, 255)":1}"#
        );
    }

    #[test]
    fn color_usage_defaults_to_zero() {
        let mut snapshot = empty_snapshot();
        snapshot.colors.usage.insert("#fff".into(), 4);
        assert_eq!(snapshot.color_usage("#fff"), 4);
        assert_eq!(snapshot.color_usage("#000"), 0);
    }
}
