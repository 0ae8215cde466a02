//! Theme Mapper: palette in, complete theme out.
//!
//! The pipeline, in order:
//!
//! 1. Profile every color ([`ColorProfile`]).
//! 2. [`classify_kind`]: light if the average relative luminance is above
//!    0.5.
//! 3. [`select_background_foreground`]: extremes of the luminance order,
//!    swapped for light themes.
//! 4. [`classify_background`]: coarse tone of the chosen background.
//! 5. Rank candidates by saturation, fill the table's ranked roles
//!    cyclically, and replace any candidate under
//!    [`MIN_ROLE_CONTRAST`] against the background with the foreground.
//! 6. Resolve derived roles through their fallback chains.
//!
//! Everything here is a pure function of its inputs.

use std::collections::BTreeMap;

use pf_term::Color;

use crate::contrast::{ColorProfile, MIN_ROLE_CONTRAST, contrast_ratio, is_dark_color};
use crate::error::ThemeError;
use crate::palette::Palette;
use crate::role::{RoleTable, ThemeRole, resolve_chain};
use crate::theme::{Theme, ThemeKind, Tone};

/// Map hex strings onto the canonical role table.
///
/// # Errors
///
/// [`ThemeError::EmptyPalette`] for zero colors (checked first), otherwise
/// [`ThemeError::InvalidColorFormat`] for the first unparseable string.
pub fn map_palette<S: AsRef<str>>(colors: &[S], name: &str) -> Result<Theme, ThemeError> {
    let palette = Palette::parse(colors)?;
    Ok(map_palette_with(&palette, name, &RoleTable::CANONICAL))
}

/// Map a parsed palette onto an arbitrary role table.
#[must_use]
pub fn map_palette_with(palette: &Palette, name: &str, table: &RoleTable) -> Theme {
    let profiles: Vec<ColorProfile> = palette.iter().copied().map(ColorProfile::of).collect();

    let kind = classify_kind(&profiles);
    let (background, foreground) = select_background_foreground(&profiles, kind);
    let background_tone = classify_background(background);
    let candidates = rank_candidates(&profiles);

    let mut roles = BTreeMap::new();
    roles.insert(ThemeRole::Background, background);
    roles.insert(ThemeRole::Foreground, foreground);

    for (slot, role) in table.ranked.iter().filter(|r| !r.is_base()).enumerate() {
        let candidate = candidates[slot % candidates.len()];
        roles.insert(*role, contrast_safe(candidate, background, foreground));
    }

    for role in table.derived.iter().filter(|r| !r.is_base()) {
        let color = resolve_chain(role.fallback_chain(), &roles);
        roles.insert(*role, color);
    }

    Theme::new(name, kind, background_tone, background, foreground, roles)
}

// ---------------------------------------------------------------------------
// Pipeline steps
// ---------------------------------------------------------------------------

/// Light when the average relative luminance exceeds 0.5.
///
/// An empty slice classifies as dark.
#[must_use]
pub fn classify_kind(profiles: &[ColorProfile]) -> ThemeKind {
    if profiles.is_empty() {
        return ThemeKind::Dark;
    }
    let average = profiles.iter().map(|p| p.luminance).sum::<f64>() / profiles.len() as f64;
    if average > 0.5 { ThemeKind::Light } else { ThemeKind::Dark }
}

/// Pick `(background, foreground)` from the luminance extremes.
///
/// Dark themes take the darkest color as background and the lightest as
/// foreground; light themes swap them. Ties keep palette order. A
/// one-color palette yields the same color twice.
#[must_use]
pub fn select_background_foreground(profiles: &[ColorProfile], kind: ThemeKind) -> (Color, Color) {
    let mut by_luminance: Vec<&ColorProfile> = profiles.iter().collect();
    by_luminance.sort_by(|a, b| a.luminance.total_cmp(&b.luminance));

    let darkest = by_luminance.first().map_or(Color::BLACK, |p| p.color);
    let lightest = by_luminance.last().map_or(Color::WHITE, |p| p.color);

    match kind {
        ThemeKind::Dark => (darkest, lightest),
        ThemeKind::Light => (lightest, darkest),
    }
}

/// Coarse tone of the chosen background.
#[must_use]
pub fn classify_background(background: Color) -> Tone {
    if is_dark_color(background) { Tone::Dark } else { Tone::Light }
}

/// All palette colors, most saturated first. Ties keep palette order.
#[must_use]
pub fn rank_candidates(profiles: &[ColorProfile]) -> Vec<Color> {
    let mut ranked: Vec<&ColorProfile> = profiles.iter().collect();
    ranked.sort_by(|a, b| b.hsl.s.total_cmp(&a.hsl.s));
    ranked.into_iter().map(|p| p.color).collect()
}

/// `candidate` if it reaches [`MIN_ROLE_CONTRAST`] against `background`,
/// otherwise `foreground`.
#[must_use]
pub fn contrast_safe(candidate: Color, background: Color, foreground: Color) -> Color {
    if contrast_ratio(background, candidate) < MIN_ROLE_CONTRAST {
        foreground
    } else {
        candidate
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
