use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::document::{CssRule, Document, Element, SheetAccess};

/// A document captured from a browser and held in memory: every element
/// with its computed style, plus the stylesheet rules that were readable
/// at capture time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturedDocument {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub elements: Vec<CapturedElement>,
    #[serde(default)]
    pub style_sheets: Vec<CapturedSheet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapturedElement {
    pub tag: String,
    /// Full `textContent`, descendants included.
    #[serde(default)]
    pub text: String,
    /// Computed style keyed by hyphenated property name.
    #[serde(default)]
    pub style: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapturedSheet {
    #[serde(default)]
    pub href: Option<String>,
    /// Set when the browser refused access to the sheet's rules.
    #[serde(default)]
    pub blocked: bool,
    #[serde(default)]
    pub rules: Vec<CssRule>,
}

impl CapturedDocument {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_element(mut self, element: CapturedElement) -> Self {
        self.elements.push(element);
        self
    }

    pub fn with_sheet(mut self, sheet: CapturedSheet) -> Self {
        self.style_sheets.push(sheet);
        self
    }
}

impl CapturedElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn style(mut self, property: &str, value: impl Into<String>) -> Self {
        self.style.insert(property.to_string(), value.into());
        self
    }
}

impl CapturedSheet {
    pub fn with_rules(rules: Vec<CssRule>) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    pub fn blocked(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            blocked: true,
            rules: Vec::new(),
        }
    }

    fn access(&self) -> SheetAccess {
        if self.blocked {
            SheetAccess::Blocked {
                href: self.href.clone(),
            }
        } else {
            SheetAccess::Rules(self.rules.clone())
        }
    }
}

impl Document for CapturedDocument {
    type Element<'a> = &'a CapturedElement;

    fn location(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.url)
    }

    fn elements(&self) -> Vec<Self::Element<'_>> {
        self.elements.iter().collect()
    }

    fn style_sheets(&self) -> Vec<SheetAccess> {
        self.style_sheets.iter().map(CapturedSheet::access).collect()
    }
}

impl<'a> Element for &'a CapturedElement {
    type Style = &'a IndexMap<String, String>;

    fn tag_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.tag)
    }

    fn text_content(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn computed_style(&self) -> Self::Style {
        &self.style
    }
}
