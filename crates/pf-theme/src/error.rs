//! Failure modes of the mapping core.
//!
//! There are exactly two: a color string that does not parse, and an empty
//! palette. Low contrast and short palettes are corrected, never rejected.

use pf_term::ParseColorError;

/// Error returned by palette parsing and [`map_palette`](crate::map_palette).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// A supplied string is not a 6-hex-digit color.
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),

    /// Mapping was attempted on zero colors.
    #[error("palette is empty")]
    EmptyPalette,
}

impl From<ParseColorError> for ThemeError {
    fn from(err: ParseColorError) -> Self {
        Self::InvalidColorFormat(err.input)
    }
}
