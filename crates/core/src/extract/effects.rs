use designdna_protocol::EffectTokens;
use indexmap::IndexSet;

use super::present;
use crate::model::ComputedStyle;
use crate::units::{cmp_magnitude, leading_float};

#[derive(Debug, Default)]
pub struct EffectCollector {
    shadows: IndexSet<String>,
    radii: IndexSet<String>,
    transitions: IndexSet<String>,
}

impl EffectCollector {
    pub fn observe<S: ComputedStyle + ?Sized>(&mut self, style: &S) {
        if let Some(shadow) = present(style, "box-shadow")
            && shadow != "none"
        {
            self.shadows.insert(shadow.into_owned());
        }
        if let Some(radius) = present(style, "border-radius")
            && radius != "0px"
        {
            self.radii.insert(radius.into_owned());
        }
        if let Some(transition) = present(style, "transition")
            && transition != "none"
            && transition != "all 0s ease 0s"
        {
            self.transitions.insert(transition.into_owned());
        }
    }

    pub fn finish(self) -> EffectTokens {
        let mut border_radii: Vec<String> = self.radii.into_iter().collect();
        border_radii.sort_by(|a, b| cmp_magnitude(leading_float(a), leading_float(b)));
        EffectTokens {
            shadows: self.shadows,
            border_radii,
            transitions: self.transitions,
        }
    }
}
