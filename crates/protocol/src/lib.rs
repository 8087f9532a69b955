pub mod snapshot;
pub mod types;

pub use snapshot::{
    ColorTokens, EffectTokens, SpacingTokens, Stats, StyleSnapshot, TypographyTokens,
};
pub use types::{ScaleEntry, TypeStyle};
