use std::borrow::Cow;

use designdna_protocol::{TypeStyle, TypographyTokens};
use indexmap::{IndexMap, IndexSet};

use super::present;
use crate::model::{ComputedStyle, Element};
use crate::units::{cmp_magnitude, cmp_magnitude_desc, leading_float, leading_integer};

/// Sample text is cut to this many characters.
const SAMPLE_LEN: usize = 50;

type ScaleKey = (String, String, String);

#[derive(Debug, Default)]
pub struct TypographyCollector {
    families: IndexSet<String>,
    weights: IndexSet<String>,
    scale: IndexMap<ScaleKey, TypeStyle>,
}

impl TypographyCollector {
    /// Record the type style of `element`. Elements without visible text
    /// are ignored.
    pub fn observe<E, S>(&mut self, element: &E, style: &S)
    where
        E: Element + ?Sized,
        S: ComputedStyle + ?Sized,
    {
        let text = element.text_content();
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        let read = |name: &str| {
            present(style, name)
                .map(Cow::into_owned)
                .unwrap_or_default()
        };
        let font_family = read("font-family");
        let font_weight = read("font-weight");
        let font_size = read("font-size");
        let line_height = read("line-height");

        if !font_family.is_empty() {
            self.families.insert(font_family.clone());
        }
        if !font_weight.is_empty() {
            self.weights.insert(font_weight.clone());
        }

        let key = (font_size, font_weight, line_height);
        if self.scale.contains_key(&key) {
            return;
        }
        let entry = TypeStyle {
            font_size: key.0.clone(),
            font_weight: key.1.clone(),
            line_height: key.2.clone(),
            letter_spacing: read("letter-spacing"),
            font_family,
            sample_tag: element.tag_name().to_lowercase(),
            sample_text: text.chars().take(SAMPLE_LEN).collect(),
        };
        self.scale.insert(key, entry);
    }

    pub fn finish(self) -> TypographyTokens {
        let mut type_scale: Vec<TypeStyle> = self.scale.into_values().collect();
        type_scale.sort_by(|a, b| {
            cmp_magnitude_desc(leading_float(&a.font_size), leading_float(&b.font_size))
        });

        let mut font_weights: Vec<String> = self.weights.into_iter().collect();
        font_weights.sort_by(|a, b| cmp_magnitude(weight_rank(a), weight_rank(b)));

        TypographyTokens {
            font_families: self.families,
            type_scale,
            font_weights,
        }
    }
}

/// Numeric rank of a computed font weight. `normal` and `bold` map to
/// their CSS equivalents; other keywords have no rank.
fn weight_rank(weight: &str) -> Option<f64> {
    match weight.trim() {
        "normal" => Some(400.0),
        "bold" => Some(700.0),
        w => leading_integer(w).map(|n| n as f64),
    }
}
