//! Integration test: load a captured landing page and verify every token
//! category of the extracted snapshot, plus the end-to-end scenarios for
//! shared colors, root variables, spacing tolerance and blank text.

use chrono::{DateTime, Utc};
use designdna_core::model::{CapturedDocument, CapturedElement, CapturedSheet, CssRule};
use designdna_core::parsers::parse_auto;
use designdna_core::{extract, extract_at};

fn fixed_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1_760_000_000, 0).unwrap()
}

fn landing_page() -> CapturedDocument {
    let data = include_bytes!("fixtures/landing-page-capture.json");
    parse_auto(data).expect("failed to parse landing page capture")
}

#[test]
fn extracts_landing_page_tokens() {
    let snapshot = extract_at(&landing_page(), fixed_time());

    assert_eq!(snapshot.source_url, "https://payments.example.com/");
    assert_eq!(snapshot.extracted_at, fixed_time());

    // Colors: element usage first, stylesheet-only colors trail with zero weight.
    assert_eq!(
        snapshot.colors.raw,
        vec![
            "rgb(10, 37, 64)",
            "rgb(99, 91, 255)",
            "rgb(255, 255, 255)",
            "none",
            "rgb(66, 84, 102)",
            "#635bff",
            "#0a2540",
            "hsl(142, 71%, 45%)",
            "#7a73ff",
        ]
    );
    assert_eq!(snapshot.color_usage("rgb(10, 37, 64)"), 4);
    assert_eq!(snapshot.color_usage("rgb(99, 91, 255)"), 4);
    assert_eq!(snapshot.color_usage("#635bff"), 0);
    assert!(!snapshot.colors.raw.iter().any(|c| c == "rgba(0, 0, 0, 0)"));
    assert!(!snapshot.colors.raw.iter().any(|c| c == "currentcolor"));

    let vars: Vec<_> = snapshot
        .colors
        .css_variables
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(
        vars,
        vec![
            ("--brand", "#7a73ff"),
            ("--ink", "#0a2540"),
            ("--radius-md", "8px"),
        ]
    );

    // Typography: the blank 72px DIV never shows up.
    let scale: Vec<_> = snapshot
        .typography
        .type_scale
        .iter()
        .map(|t| (t.font_size.as_str(), t.sample_tag.as_str()))
        .collect();
    assert_eq!(scale, vec![("56px", "h1"), ("16px", "html"), ("15px", "a")]);
    assert_eq!(
        snapshot.typography.type_scale[1].sample_text,
        "Payments infrastructure for the internet Get start"
    );
    assert_eq!(snapshot.typography.type_scale[2].sample_text, "Get started");
    assert_eq!(snapshot.typography.type_scale[0].letter_spacing, "-1.5px");
    assert_eq!(snapshot.typography.font_weights, vec!["400", "600", "700"]);
    assert_eq!(
        snapshot.typography.font_families.iter().collect::<Vec<_>>(),
        vec!["Inter, sans-serif"]
    );

    // Spacing: 5px sits within a pixel of 4px.
    assert_eq!(
        snapshot.spacing.all_values,
        vec!["4px", "5px", "12px", "16px", "24px"]
    );
    let steps: Vec<_> = snapshot
        .spacing
        .scale
        .iter()
        .map(|s| (s.value.as_str(), s.usage_count))
        .collect();
    assert_eq!(
        steps,
        vec![("4px", 1), ("12px", 4), ("16px", 1), ("24px", 5)]
    );

    // Effects
    assert_eq!(snapshot.effects.shadows.len(), 2);
    assert_eq!(snapshot.effects.border_radii, vec!["8px", "9999px"]);
    assert_eq!(
        snapshot.effects.transitions.iter().collect::<Vec<_>>(),
        vec!["all 0.15s ease 0s"]
    );

    let stats = snapshot.stats;
    assert_eq!(stats.total_colors, 9);
    assert_eq!(stats.total_css_vars, 3);
    assert_eq!(stats.total_fonts, 1);
    assert_eq!(stats.total_font_weights, 3);
    assert_eq!(stats.total_type_scale, 3);
    assert_eq!(stats.total_spacing_values, 5);
    assert_eq!(stats.total_spacing_scale, 4);
    assert_eq!(stats.total_shadows, 2);
    assert_eq!(stats.total_radii, 2);
    assert_eq!(stats.total_transitions, 1);
}

#[test]
fn repeated_extraction_differs_only_in_timestamp() {
    let doc = landing_page();
    let first = extract(&doc);
    let mut second = extract(&doc);
    second.extracted_at = first.extracted_at;
    assert_eq!(first, second);

    let a = serde_json::to_string(&extract_at(&doc, fixed_time())).unwrap();
    let b = serde_json::to_string(&extract_at(&doc, fixed_time())).unwrap();
    assert_eq!(a, b);
}

#[test]
fn shared_color_across_properties_counts_twice() {
    let doc = CapturedDocument::new("https://example.com/")
        .with_element(CapturedElement::new("DIV").style("background-color", "rgb(99, 91, 255)"))
        .with_element(CapturedElement::new("SPAN").style("color", "rgb(99, 91, 255)"));
    let snapshot = extract_at(&doc, fixed_time());
    assert_eq!(snapshot.colors.usage["rgb(99, 91, 255)"], 2);
    assert_eq!(
        snapshot
            .colors
            .raw
            .iter()
            .filter(|c| *c == "rgb(99, 91, 255)")
            .count(),
        1
    );
}

#[test]
fn root_variable_is_collected() {
    let doc = CapturedDocument::new("https://example.com/").with_sheet(CapturedSheet::with_rules(
        vec![CssRule::new(Some(":root"), ":root { --brand: #635bff; }")],
    ));
    let snapshot = extract_at(&doc, fixed_time());
    assert_eq!(snapshot.colors.css_variables["--brand"], "#635bff");
}

#[test]
fn root_variable_from_raw_css() {
    let doc = parse_auto(b":root {\n  --brand: #635bff;\n}\n").unwrap();
    let snapshot = extract_at(&doc, fixed_time());
    assert_eq!(snapshot.colors.css_variables["--brand"], "#635bff");
}

#[test]
fn close_margins_collapse_in_scale() {
    let doc = ["4px", "5px", "8px"]
        .into_iter()
        .fold(CapturedDocument::new(""), |doc, margin| {
            doc.with_element(CapturedElement::new("DIV").style("margin-top", margin))
        });
    let snapshot = extract_at(&doc, fixed_time());
    let steps: Vec<_> = snapshot
        .spacing
        .scale
        .iter()
        .map(|s| s.value.as_str())
        .collect();
    assert_eq!(steps, vec!["4px", "8px"]);
}

#[test]
fn blank_element_adds_no_type_style() {
    let doc = CapturedDocument::new("").with_element(
        CapturedElement::new("DIV")
            .text("   ")
            .style("font-size", "48px")
            .style("font-weight", "700")
            .style("line-height", "56px")
            .style("font-family", "Inter"),
    );
    let snapshot = extract_at(&doc, fixed_time());
    assert!(snapshot.typography.type_scale.is_empty());
    assert_eq!(snapshot.stats.total_type_scale, 0);
}
