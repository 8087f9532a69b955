//! Design token extraction.
//!
//! One traversal over the document feeds four collectors. Each element's
//! computed style is resolved exactly once. Stylesheet rules are scanned
//! afterwards for colors and root custom properties.

pub mod colors;
pub mod effects;
pub mod spacing;
pub mod stats;
pub mod typography;

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use designdna_protocol::StyleSnapshot;

use crate::model::{ComputedStyle, Document, Element, SheetAccess};

use colors::ColorCollector;
use effects::EffectCollector;
use spacing::SpacingCollector;
use typography::TypographyCollector;

/// Extract a snapshot of `document`, stamped with the current time.
pub fn extract<D: Document + ?Sized>(document: &D) -> StyleSnapshot {
    extract_at(document, Utc::now())
}

/// Extract a snapshot of `document` with an explicit capture timestamp.
///
/// Two calls over an unchanged document with the same timestamp return
/// equal snapshots.
pub fn extract_at<D: Document + ?Sized>(
    document: &D,
    extracted_at: DateTime<Utc>,
) -> StyleSnapshot {
    let mut colors = ColorCollector::default();
    let mut typography = TypographyCollector::default();
    let mut spacing = SpacingCollector::default();
    let mut effects = EffectCollector::default();

    let elements = document.elements();
    for element in &elements {
        let style = element.computed_style();
        colors.observe(&style);
        typography.observe(element, &style);
        spacing.observe(&style);
        effects.observe(&style);
    }

    let sheets = document.style_sheets();
    let mut blocked = 0usize;
    for sheet in &sheets {
        match sheet {
            SheetAccess::Rules(rules) => colors.scan_rules(rules),
            SheetAccess::Blocked { href } => {
                blocked += 1;
                log::debug!(
                    "skipping stylesheet {}: rules are not accessible",
                    href.as_deref().unwrap_or("<inline>")
                );
            }
        }
    }
    log::trace!(
        "scanned {} elements and {} stylesheets ({blocked} blocked)",
        elements.len(),
        sheets.len()
    );

    let colors = colors.finish();
    let typography = typography.finish();
    let spacing = spacing.finish();
    let effects = effects.finish();
    let stats = stats::tally(&colors, &typography, &spacing, &effects);

    StyleSnapshot {
        extracted_at,
        source_url: document.location().into_owned(),
        colors,
        typography,
        spacing,
        effects,
        stats,
    }
}

/// A property value, treating the empty string as absent.
fn present<'s, S: ComputedStyle + ?Sized>(style: &'s S, name: &str) -> Option<Cow<'s, str>> {
    style.property(name).filter(|v| !v.is_empty())
}
