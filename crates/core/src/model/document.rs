use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A rendered document that can be walked for design tokens.
///
/// Implemented by [`CapturedDocument`](super::CapturedDocument) for
/// captures loaded from disk, and by the live DOM adapter in the wasm
/// bridge.
pub trait Document {
    type Element<'a>: Element
    where
        Self: 'a;

    /// Location identifier of the document, usually its URL.
    fn location(&self) -> Cow<'_, str>;

    /// Every element in document order, at any depth.
    fn elements(&self) -> Vec<Self::Element<'_>>;

    /// One entry per stylesheet attached to the document, in order.
    fn style_sheets(&self) -> Vec<SheetAccess>;
}

pub trait Element {
    type Style: ComputedStyle;

    fn tag_name(&self) -> Cow<'_, str>;

    /// Concatenated text of the element and all its descendants.
    fn text_content(&self) -> Cow<'_, str>;

    /// Resolve the fully computed style. Called once per element per
    /// extraction.
    fn computed_style(&self) -> Self::Style;
}

/// Resolved style values keyed by hyphenated CSS property name
/// (`background-color`, not `backgroundColor`).
pub trait ComputedStyle {
    /// `None` and the empty string both mean the property has no value.
    fn property(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl<T: ComputedStyle + ?Sized> ComputedStyle for &T {
    fn property(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).property(name)
    }
}

impl ComputedStyle for indexmap::IndexMap<String, String> {
    fn property(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

/// A single stylesheet rule as exposed by the CSS object model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssRule {
    /// Selector list of a style rule; `None` for at-rules.
    #[serde(default)]
    pub selector_text: Option<String>,
    /// Serialized rule, e.g. `:root { --brand: #635bff; }`.
    pub css_text: String,
}

impl CssRule {
    pub fn new(selector_text: Option<&str>, css_text: impl Into<String>) -> Self {
        Self {
            selector_text: selector_text.map(String::from),
            css_text: css_text.into(),
        }
    }

    /// Whether the selector is exactly the document root (`:root` or `html`).
    pub fn is_root_scope(&self) -> bool {
        matches!(self.selector_text.as_deref(), Some(":root" | "html"))
    }
}

/// Result of reading one stylesheet's rules.
///
/// Cross-origin sheets refuse access to their rules; that is an expected
/// outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetAccess {
    Rules(Vec<CssRule>),
    Blocked { href: Option<String> },
}

impl SheetAccess {
    pub fn rules(&self) -> Option<&[CssRule]> {
        match self {
            Self::Rules(rules) => Some(rules),
            Self::Blocked { .. } => None,
        }
    }
}
