//! `Document` over the live browser DOM.

use std::borrow::Cow;

use designdna_core::model::{ComputedStyle, CssRule, Document, Element, SheetAccess};
use wasm_bindgen::JsCast;

pub struct LiveDocument {
    window: web_sys::Window,
    document: web_sys::Document,
}

impl LiveDocument {
    /// The document of the current browsing context, if there is one.
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }
}

pub struct LiveElement {
    window: web_sys::Window,
    element: web_sys::Element,
}

/// Computed style of one element; `None` when the browser returned no
/// declaration for it.
pub struct LiveStyle(Option<web_sys::CssStyleDeclaration>);

impl Document for LiveDocument {
    type Element<'a> = LiveElement;

    fn location(&self) -> Cow<'_, str> {
        Cow::Owned(self.document.url().unwrap_or_default())
    }

    fn elements(&self) -> Vec<LiveElement> {
        let all = self.document.get_elements_by_tag_name("*");
        (0..all.length())
            .filter_map(|i| all.item(i))
            .map(|element| LiveElement {
                window: self.window.clone(),
                element,
            })
            .collect()
    }

    fn style_sheets(&self) -> Vec<SheetAccess> {
        let sheets = self.document.style_sheets();
        (0..sheets.length())
            .filter_map(|i| sheets.item(i))
            .map(|sheet| read_sheet(&sheet))
            .collect()
    }
}

/// Cross-origin sheets throw on `cssRules`; those come back as blocked.
fn read_sheet(sheet: &web_sys::StyleSheet) -> SheetAccess {
    let href = sheet.href().ok().flatten();
    let Some(css_sheet) = sheet.dyn_ref::<web_sys::CssStyleSheet>() else {
        return SheetAccess::Blocked { href };
    };
    let Ok(list) = css_sheet.css_rules() else {
        return SheetAccess::Blocked { href };
    };
    let rules = (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|rule| CssRule {
            selector_text: rule
                .dyn_ref::<web_sys::CssStyleRule>()
                .map(web_sys::CssStyleRule::selector_text),
            css_text: rule.css_text(),
        })
        .collect();
    SheetAccess::Rules(rules)
}

impl Element for LiveElement {
    type Style = LiveStyle;

    fn tag_name(&self) -> Cow<'_, str> {
        Cow::Owned(self.element.tag_name())
    }

    fn text_content(&self) -> Cow<'_, str> {
        Cow::Owned(self.element.text_content().unwrap_or_default())
    }

    fn computed_style(&self) -> LiveStyle {
        LiveStyle(self.window.get_computed_style(&self.element).ok().flatten())
    }
}

impl ComputedStyle for LiveStyle {
    fn property(&self, name: &str) -> Option<Cow<'_, str>> {
        let declaration = self.0.as_ref()?;
        declaration.get_property_value(name).ok().map(Cow::Owned)
    }
}
