//! Ordered, non-empty color sequences.

use std::ops::Deref;
use std::str::FromStr;

use pf_term::Color;

use crate::error::ThemeError;

/// An ordered, non-empty sequence of colors.
///
/// Index 0 is the most dominant color. Order is preserved and duplicates are
/// kept: the mapper depends on both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette(Vec<Color>);

impl Palette {
    /// Wrap a list of colors.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::EmptyPalette`] if `colors` is empty.
    pub fn new(colors: Vec<Color>) -> Result<Self, ThemeError> {
        if colors.is_empty() {
            return Err(ThemeError::EmptyPalette);
        }
        Ok(Self(colors))
    }

    /// Parse a list of hex strings.
    ///
    /// Emptiness is checked before any string is parsed.
    ///
    /// # Errors
    ///
    /// [`ThemeError::EmptyPalette`] for an empty slice, otherwise
    /// [`ThemeError::InvalidColorFormat`] for the first bad string.
    pub fn parse<S: AsRef<str>>(colors: &[S]) -> Result<Self, ThemeError> {
        if colors.is_empty() {
            return Err(ThemeError::EmptyPalette);
        }
        colors
            .iter()
            .map(|s| s.as_ref().parse::<Color>().map_err(ThemeError::from))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    /// Colors as lowercase `#rrggbb` strings.
    #[must_use]
    pub fn to_hex(&self) -> Vec<String> {
        self.0.iter().map(|c| c.to_hex()).collect()
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Color> {
        self.0
    }
}

impl Deref for Palette {
    type Target = [Color];

    fn deref(&self) -> &[Color] {
        &self.0
    }
}

/// Comma- or whitespace-separated hex colors.
impl FromStr for Palette {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        Self::parse(&parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_is_rejected() {
        assert_eq!(Palette::new(Vec::new()), Err(ThemeError::EmptyPalette));
        assert_eq!(Palette::parse::<&str>(&[]), Err(ThemeError::EmptyPalette));
    }

    #[test]
    fn parse_reports_first_bad_color() {
        assert_eq!(
            Palette::parse(&["#000000", "nope", "#zzzzzz"]),
            Err(ThemeError::InvalidColorFormat("nope".into()))
        );
    }

    #[test]
    fn order_and_duplicates_preserved() {
        let p = Palette::parse(&["#FF0000", "#00ff00", "#ff0000"]).unwrap();
        assert_eq!(p.to_hex(), vec!["#ff0000", "#00ff00", "#ff0000"]);
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn from_str_accepts_commas_and_spaces() {
        let p: Palette = "#111111, 222222  #333333".parse().unwrap();
        assert_eq!(p.to_hex(), vec!["#111111", "#222222", "#333333"]);
    }

    #[test]
    fn from_str_blank_is_empty() {
        assert_eq!(" , ".parse::<Palette>(), Err(ThemeError::EmptyPalette));
    }
}
