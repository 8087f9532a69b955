pub mod captured;
pub mod document;

pub use captured::{CapturedDocument, CapturedElement, CapturedSheet};
pub use document::{ComputedStyle, CssRule, Document, Element, SheetAccess};
