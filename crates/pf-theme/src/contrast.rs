//! Luminance and contrast, the basis of every classification decision.
//!
//! Two brightness measures live here and they are intentionally not merged:
//!
//! - [`relative_luminance`]: the WCAG 2.1 definition (linearized sRGB,
//!   weighted 0.2126 / 0.7152 / 0.0722). Used for contrast ratios and for the
//!   theme-kind decision.
//! - [`coarse_luminance`]: gamma-encoded channels weighted
//!   0.299 / 0.587 / 0.114. Used only for quick dark/light classification of
//!   a single color (the chosen background's tone).
//!
//! Contrast-critical decisions must go through [`relative_luminance`].

use pf_term::color::{Color, Hsl};

use crate::error::ThemeError;

/// Minimum background contrast a syntax-role color must reach before the
/// mapper substitutes the foreground.
pub const MIN_ROLE_CONTRAST: f64 = 3.0;

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_linear_srgb();
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// [`relative_luminance`] for a hex string.
///
/// # Errors
///
/// Returns [`ThemeError::InvalidColorFormat`] if `hex` is not a 6-digit color.
pub fn relative_luminance_hex(hex: &str) -> Result<f64, ThemeError> {
    Ok(relative_luminance(hex.parse()?))
}

/// Cheap perceived brightness: `(0.299 R + 0.587 G + 0.114 B) / 255`.
#[must_use]
pub fn coarse_luminance(color: Color) -> f64 {
    let (r, g, b) = (f64::from(color.r), f64::from(color.g), f64::from(color.b));
    0.299f64.mul_add(r, 0.587f64.mul_add(g, 0.114 * b)) / 255.0
}

/// Whether a color reads as dark under the coarse measure (`< 0.5`).
#[must_use]
pub fn is_dark_color(color: Color) -> bool {
    coarse_luminance(color) < 0.5
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// Symmetric in its arguments.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// [`contrast_ratio`] for two hex strings.
///
/// # Errors
///
/// Returns [`ThemeError::InvalidColorFormat`] for the first argument that
/// does not parse.
pub fn contrast_ratio_hex(a: &str, b: &str) -> Result<f64, ThemeError> {
    Ok(contrast_ratio(a.parse()?, b.parse()?))
}

// ---------------------------------------------------------------------------
// ColorProfile
// ---------------------------------------------------------------------------

/// Everything the mapper needs to know about one palette entry.
///
/// Derived on demand from its source color; never stored beyond a single
/// mapping call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorProfile {
    pub color: Color,
    /// WCAG relative luminance.
    pub luminance: f64,
    pub hsl: Hsl,
    /// Coarse dark/light classification.
    pub is_dark: bool,
}

impl ColorProfile {
    /// Profile a single color.
    #[must_use]
    pub fn of(color: Color) -> Self {
        Self {
            color,
            luminance: relative_luminance(color),
            hsl: color.to_hsl(),
            is_dark: is_dark_color(color),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn hex(s: &str) -> Color {
        Color::hex(s).unwrap()
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        assert_eq!(relative_luminance(Color::BLACK), 0.0);
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance(Color::WHITE);
        assert!(approx_eq(lum, 1.0, 1e-12), "White luminance: {lum}");
    }

    #[test]
    fn luminance_pure_red() {
        let lum = relative_luminance(hex("#ff0000"));
        assert!(approx_eq(lum, 0.2126, 1e-9), "Red luminance: {lum}");
    }

    #[test]
    fn luminance_pure_green() {
        let lum = relative_luminance(hex("#00ff00"));
        assert!(approx_eq(lum, 0.7152, 1e-9), "Green luminance: {lum}");
    }

    #[test]
    fn luminance_mid_gray() {
        let lum = relative_luminance(hex("#808080"));
        assert!(lum > 0.20 && lum < 0.23, "Mid-gray luminance: {lum}");
    }

    #[test]
    fn luminance_hex_rejects_garbage() {
        assert_eq!(
            relative_luminance_hex("not-a-color"),
            Err(ThemeError::InvalidColorFormat("not-a-color".into()))
        );
    }

    #[test]
    fn luminance_hex_accepts_uppercase() {
        let upper = relative_luminance_hex("#D4D4D4").unwrap();
        let lower = relative_luminance_hex("d4d4d4").unwrap();
        assert_eq!(upper, lower);
    }

    // ── Coarse classification ───────────────────────────────────────

    #[test]
    fn coarse_extremes() {
        assert_eq!(coarse_luminance(Color::BLACK), 0.0);
        assert!(approx_eq(coarse_luminance(Color::WHITE), 1.0, 1e-12));
        assert!(is_dark_color(hex("#1e1e1e")));
        assert!(!is_dark_color(hex("#d4d4d4")));
    }

    #[test]
    fn coarse_and_relative_disagree_on_mid_tones() {
        // Coarse puts #808080 at 0.502, relative luminance at ~0.216.
        let c = hex("#808080");
        assert!(!is_dark_color(c));
        assert!(relative_luminance(c) < 0.5);
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        let c = hex("#569cd6");
        assert_eq!(contrast_ratio(c, c), 1.0);
    }

    #[test]
    fn contrast_hex_symmetric() {
        let ab = contrast_ratio_hex("#ce9178", "#1e1e1e").unwrap();
        let ba = contrast_ratio_hex("#1e1e1e", "#ce9178").unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn contrast_hex_reports_bad_argument() {
        assert_eq!(
            contrast_ratio_hex("#000000", "#xyz"),
            Err(ThemeError::InvalidColorFormat("#xyz".into()))
        );
    }

    // ── ColorProfile ────────────────────────────────────────────────

    #[test]
    fn profile_matches_free_functions() {
        let c = hex("#4ec9b0");
        let p = ColorProfile::of(c);
        assert_eq!(p.color, c);
        assert_eq!(p.luminance, relative_luminance(c));
        assert_eq!(p.hsl, c.to_hsl());
        assert_eq!(p.is_dark, is_dark_color(c));
    }

    // ── Properties ──────────────────────────────────────────────────

    proptest::proptest! {
        #[test]
        fn luminance_in_unit_range(r: u8, g: u8, b: u8) {
            let lum = relative_luminance(Color::rgb(r, g, b));
            proptest::prop_assert!((0.0..=1.0 + 1e-12).contains(&lum));
        }

        #[test]
        fn contrast_symmetric_and_bounded(a: (u8, u8, u8), b: (u8, u8, u8)) {
            let ca = Color::rgb(a.0, a.1, a.2);
            let cb = Color::rgb(b.0, b.1, b.2);
            let ab = contrast_ratio(ca, cb);
            proptest::prop_assert_eq!(ab, contrast_ratio(cb, ca));
            proptest::prop_assert!(ab >= 1.0);
            proptest::prop_assert!(ab <= 21.0 + 1e-9);
        }

        #[test]
        fn contrast_with_self_is_one(r: u8, g: u8, b: u8) {
            let c = Color::rgb(r, g, b);
            proptest::prop_assert_eq!(contrast_ratio(c, c), 1.0);
        }
    }
}
