use std::cmp::Reverse;
use std::sync::LazyLock;

use designdna_protocol::ColorTokens;
use indexmap::{IndexMap, IndexSet};
use regex::Regex;

use super::present;
use crate::model::{ComputedStyle, CssRule};

/// Color-bearing properties read from every element.
pub const COLOR_PROPERTIES: [&str; 11] = [
    "color",
    "background-color",
    "border-color",
    "border-top-color",
    "border-right-color",
    "border-bottom-color",
    "border-left-color",
    "outline-color",
    "text-decoration-color",
    "fill",
    "stroke",
];

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| pattern(r"#[0-9a-fA-F]{3,8}(?-u:\b)"));
static RGB_COLOR: LazyLock<Regex> = LazyLock::new(|| pattern(r"rgba?\([^)]+\)"));
static HSL_COLOR: LazyLock<Regex> = LazyLock::new(|| pattern(r"hsla?\([^)]+\)"));
static CUSTOM_PROPERTY: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"--[0-9A-Za-z_-]+:\s*[^;]+"));

#[allow(clippy::expect_used)]
fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("color pattern is valid")
}

/// Values that paint nothing or defer to another property.
pub fn is_excluded_color(value: &str) -> bool {
    value.is_empty()
        || value == "rgba(0, 0, 0, 0)"
        || value == "transparent"
        || value == "inherit"
        || value.eq_ignore_ascii_case("currentcolor")
}

#[derive(Debug, Default)]
pub struct ColorCollector {
    candidates: IndexSet<String>,
    usage: IndexMap<String, u32>,
    css_variables: IndexMap<String, String>,
}

impl ColorCollector {
    pub fn observe<S: ComputedStyle + ?Sized>(&mut self, style: &S) {
        for property in COLOR_PROPERTIES {
            let Some(value) = present(style, property) else {
                continue;
            };
            if is_excluded_color(&value) {
                continue;
            }
            if let Some(count) = self.usage.get_mut(&*value) {
                *count += 1;
            } else {
                self.candidates.insert(value.to_string());
                self.usage.insert(value.into_owned(), 1);
            }
        }
    }

    /// Pick up colors written in rule text, and custom properties declared
    /// on the document root. Colors found here carry no usage weight.
    pub fn scan_rules(&mut self, rules: &[CssRule]) {
        for rule in rules {
            let text = rule.css_text.as_str();
            for re in [&*HEX_COLOR, &*RGB_COLOR, &*HSL_COLOR] {
                for m in re.find_iter(text) {
                    if !self.candidates.contains(m.as_str()) {
                        self.candidates.insert(m.as_str().to_string());
                    }
                }
            }

            if rule.is_root_scope() {
                for m in CUSTOM_PROPERTY.find_iter(text) {
                    if let Some((name, value)) = m.as_str().split_once(':') {
                        self.css_variables
                            .insert(name.trim().to_string(), value.trim().to_string());
                    }
                }
            }
        }
    }

    pub fn finish(self) -> ColorTokens {
        let Self {
            candidates,
            usage,
            css_variables,
        } = self;

        let mut raw: Vec<String> = candidates.into_iter().collect();
        // Stable: equal counts keep discovery order.
        raw.sort_by_key(|c| Reverse(usage.get(c).copied().unwrap_or(0)));

        ColorTokens {
            raw,
            usage,
            css_variables,
        }
    }
}
