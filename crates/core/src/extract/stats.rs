use designdna_protocol::{ColorTokens, EffectTokens, SpacingTokens, Stats, TypographyTokens};

pub fn tally(
    colors: &ColorTokens,
    typography: &TypographyTokens,
    spacing: &SpacingTokens,
    effects: &EffectTokens,
) -> Stats {
    Stats {
        total_colors: colors.raw.len(),
        total_css_vars: colors.css_variables.len(),
        total_fonts: typography.font_families.len(),
        total_font_weights: typography.font_weights.len(),
        total_type_scale: typography.type_scale.len(),
        total_spacing_values: spacing.all_values.len(),
        total_spacing_scale: spacing.scale.len(),
        total_shadows: effects.shadows.len(),
        total_radii: effects.border_radii.len(),
        total_transitions: effects.transitions.len(),
    }
}
