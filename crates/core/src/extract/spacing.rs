use designdna_protocol::{ScaleEntry, SpacingTokens};
use indexmap::IndexMap;

use super::present;
use crate::model::ComputedStyle;
use crate::units::{cmp_magnitude, leading_float};

pub const SPACING_PROPERTIES: [&str; 11] = [
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
    "gap",
    "row-gap",
    "column-gap",
];

/// A scale step must exceed the previous step by more than this many pixels.
const SCALE_TOLERANCE_PX: f64 = 1.0;

fn is_excluded_spacing(value: &str) -> bool {
    matches!(value, "" | "0px" | "auto" | "normal")
}

#[derive(Debug, Default)]
pub struct SpacingCollector {
    usage: IndexMap<String, u32>,
}

impl SpacingCollector {
    pub fn observe<S: ComputedStyle + ?Sized>(&mut self, style: &S) {
        for property in SPACING_PROPERTIES {
            let Some(value) = present(style, property) else {
                continue;
            };
            if is_excluded_spacing(&value) {
                continue;
            }
            if let Some(count) = self.usage.get_mut(&*value) {
                *count += 1;
            } else {
                self.usage.insert(value.into_owned(), 1);
            }
        }
    }

    pub fn finish(self) -> SpacingTokens {
        let mut all_values: Vec<String> = self.usage.keys().cloned().collect();
        all_values.sort_by(|a, b| cmp_magnitude(leading_float(a), leading_float(b)));
        let scale = build_scale(&all_values, &self.usage);
        SpacingTokens { all_values, scale }
    }
}

/// Collapse ascending spacing values into a scale, dropping any value
/// within the tolerance of the last admitted step. Values without a
/// numeric magnitude are never admitted.
fn build_scale(sorted: &[String], usage: &IndexMap<String, u32>) -> Vec<ScaleEntry> {
    let mut scale = Vec::new();
    let mut last = 0.0;
    for value in sorted {
        let Some(pixels) = leading_float(value) else {
            continue;
        };
        if pixels > last + SCALE_TOLERANCE_PX {
            scale.push(ScaleEntry {
                value: value.clone(),
                pixels,
                usage_count: usage.get(value).copied().unwrap_or(0),
            });
            last = pixels;
        }
    }
    scale
}
