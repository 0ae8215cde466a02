// SPDX-License-Identifier: MIT
//
// Style: foreground, background and attributes for a run of text.
//
// Previews are written as a stream of styled runs rather than a cell grid:
// each run carries the colors it needs, and `Style::paint` emits exactly the
// SGR sequences for that run followed by a reset. Absent colors leave the
// terminal default in place.

use std::io::{self, Write};

use crate::ansi;
use crate::color::Color;

// ─── Text Attributes ─────────────────────────────────────────────────────────

bitflags::bitflags! {
    /// Text attributes stored as a compact bitfield.
    ///
    /// These map directly to SGR parameters and to the `fontStyle` keywords
    /// editor themes use:
    ///
    /// ```
    /// use pf_term::style::Attr;
    ///
    /// let style = Attr::BOLD | Attr::ITALIC;
    /// assert!(style.contains(Attr::BOLD));
    /// assert!(!style.contains(Attr::UNDERLINE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        /// SGR 1: increased intensity.
        const BOLD          = 1 << 0;
        /// SGR 2: decreased intensity (faint).
        const DIM           = 1 << 1;
        /// SGR 3: italic or oblique.
        const ITALIC        = 1 << 2;
        /// SGR 4: straight underline.
        const UNDERLINE     = 1 << 3;
        /// SGR 7: swap foreground and background.
        const INVERSE       = 1 << 4;
    }
}

impl Attr {
    /// Space-separated editor `fontStyle` keywords (`"italic bold"`), or
    /// `None` when no theme-relevant attribute is set.
    #[must_use]
    pub fn font_style(self) -> Option<String> {
        let words: Vec<&str> = [
            (Self::ITALIC, "italic"),
            (Self::BOLD, "bold"),
            (Self::UNDERLINE, "underline"),
        ]
        .iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, word)| *word)
        .collect();

        if words.is_empty() { None } else { Some(words.join(" ")) }
    }
}

// ─── Style ───────────────────────────────────────────────────────────────────

/// Colors and attributes for one run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub attrs: Attr,
}

impl Style {
    /// Style with only a foreground color.
    #[must_use]
    pub const fn fg(fg: Color) -> Self {
        Self {
            fg: Some(fg),
            bg: None,
            attrs: Attr::empty(),
        }
    }

    /// Style with foreground and background.
    #[must_use]
    pub const fn fg_bg(fg: Color, bg: Color) -> Self {
        Self {
            fg: Some(fg),
            bg: Some(bg),
            attrs: Attr::empty(),
        }
    }

    /// Return a copy with the given attributes added.
    #[must_use]
    pub fn with_attrs(self, attrs: Attr) -> Self {
        Self {
            attrs: self.attrs | attrs,
            ..self
        }
    }

    /// Write `text` in this style, then reset.
    ///
    /// # Errors
    ///
    /// Propagates any error from the underlying writer.
    pub fn paint(&self, w: &mut impl Write, text: &str) -> io::Result<()> {
        if let Some(fg) = self.fg {
            ansi::fg(w, fg)?;
        }
        if let Some(bg) = self.bg {
            ansi::bg(w, bg)?;
        }
        ansi::attrs(w, self.attrs)?;
        w.write_all(text.as_bytes())?;
        ansi::reset(w)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn font_style_empty() {
        assert_eq!(Attr::empty().font_style(), None);
        assert_eq!(Attr::DIM.font_style(), None);
    }

    #[test]
    fn font_style_order_is_stable() {
        assert_eq!(
            (Attr::BOLD | Attr::ITALIC).font_style().as_deref(),
            Some("italic bold")
        );
    }

    #[test]
    fn paint_plain_text_only_resets() {
        let mut out = Vec::new();
        Style::default().paint(&mut out, "hi").unwrap();
        assert_eq!(out, b"hi\x1b[0m");
    }

    #[test]
    fn paint_emits_colors_attrs_then_text() {
        let mut out = Vec::new();
        Style::fg_bg(Color::rgb(1, 2, 3), Color::rgb(4, 5, 6))
            .with_attrs(Attr::BOLD)
            .paint(&mut out, "x")
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\x1b[38;2;1;2;3m\x1b[48;2;4;5;6m\x1b[1mx\x1b[0m"
        );
    }

    #[test]
    fn with_attrs_accumulates() {
        let s = Style::fg(Color::WHITE)
            .with_attrs(Attr::BOLD)
            .with_attrs(Attr::ITALIC);
        assert!(s.attrs.contains(Attr::BOLD | Attr::ITALIC));
    }
}
