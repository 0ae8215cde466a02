//! Terminal rendering of palettes and themed code.
//!
//! Output is plain ANSI true-color text written to any `impl Write`, so the
//! same functions serve stdout and tests.

use std::io::{self, Write};

use pf_term::{Attr, Color, Style};
use pf_theme::{Theme, ThemeRole, relative_luminance};
use unicode_width::UnicodeWidthStr;

use crate::error::PreviewError;
use crate::highlight::Highlighter;
use crate::snippets::Language;

/// Columns of padding on each side of the code block.
const GUTTER: usize = 2;

/// Width of one swatch bar.
const SWATCH_WIDTH: usize = 8;

// ---------------------------------------------------------------------------
// Spans
// ---------------------------------------------------------------------------

/// A run of characters sharing one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub role: Option<ThemeRole>,
}

/// Split `line` into runs of equal role.
///
/// `roles` is indexed by char; characters past its end get `None`.
#[must_use]
pub fn spans(line: &str, roles: &[Option<ThemeRole>]) -> Vec<Span> {
    let mut out: Vec<Span> = Vec::new();
    for (i, ch) in line.chars().enumerate() {
        let role = roles.get(i).copied().flatten();
        match out.last_mut() {
            Some(span) if span.role == role => span.text.push(ch),
            _ => out.push(Span {
                text: ch.to_string(),
                role,
            }),
        }
    }
    out
}

/// Style for a role painted on the theme background.
#[must_use]
pub fn role_style(theme: &Theme, role: Option<ThemeRole>) -> Style {
    let role = role.unwrap_or(ThemeRole::Foreground);
    Style::fg_bg(theme.color(role), theme.background()).with_attrs(role.emphasis())
}

// ---------------------------------------------------------------------------
// Preview
// ---------------------------------------------------------------------------

/// Write `source` highlighted under `theme`.
///
/// Every line sits on the theme background and is padded to a common width.
///
/// # Errors
///
/// Highlighting failures and writer errors.
pub fn render_code(
    theme: &Theme,
    highlighter: &mut Highlighter,
    source: &str,
    w: &mut impl Write,
) -> Result<(), PreviewError> {
    let roles = highlighter.highlight(source)?;
    let width = source.lines().map(UnicodeWidthStr::width).max().unwrap_or(0);
    let blank = Style::fg_bg(theme.foreground(), theme.background());
    let empty = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        let line_roles = roles.get(idx).unwrap_or(&empty);
        blank.paint(w, &" ".repeat(GUTTER))?;
        for span in spans(line, line_roles) {
            role_style(theme, span.role).paint(w, &span.text)?;
        }
        let pad = width - line.width() + GUTTER;
        blank.paint(w, &" ".repeat(pad))?;
        writeln!(w)?;
    }
    Ok(())
}

/// Write a titled preview of the built-in `language` snippet under `theme`.
///
/// # Errors
///
/// Highlighting failures and writer errors.
pub fn render_preview(theme: &Theme, language: Language, w: &mut impl Write) -> Result<(), PreviewError> {
    let mut highlighter = Highlighter::new(language)?;
    let title = format!(
        "{} ({}, {})",
        if theme.name().is_empty() { "untitled" } else { theme.name() },
        theme.kind(),
        language
    );
    Style::fg(theme.foreground())
        .with_attrs(Attr::BOLD)
        .paint(w, &title)?;
    writeln!(w)?;
    render_code(theme, &mut highlighter, language.snippet(), w)
}

/// Write a role legend: each role name in its own color.
///
/// # Errors
///
/// Propagates writer errors.
pub fn render_legend(theme: &Theme, w: &mut impl Write) -> io::Result<()> {
    for (role, color) in theme.roles() {
        Style::fg_bg(color, theme.background())
            .with_attrs(role.emphasis())
            .paint(w, &format!(" {:<12}", role.name()))?;
        writeln!(w, " {color}")?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Swatches
// ---------------------------------------------------------------------------

/// Write one bar per color with its hex code and relative luminance.
///
/// # Errors
///
/// Propagates writer errors.
pub fn render_swatches(colors: &[Color], w: &mut impl Write) -> io::Result<()> {
    for (idx, &color) in colors.iter().enumerate() {
        write!(w, "{:>2} ", idx + 1)?;
        Style {
            bg: Some(color),
            ..Style::default()
        }
        .paint(w, &" ".repeat(SWATCH_WIDTH))?;
        writeln!(w, " {color}  L={:.3}", relative_luminance(color))?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pf_theme::map_palette;
    use pretty_assertions::assert_eq;

    fn theme() -> Theme {
        map_palette(&["#1e1e1e", "#d4d4d4", "#569cd6", "#ce9178"], "Test").unwrap()
    }

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut in_escape = false;
        for ch in s.chars() {
            match (in_escape, ch) {
                (false, '\x1b') => in_escape = true,
                (true, 'm') => in_escape = false,
                (false, c) => out.push(c),
                (true, _) => {}
            }
        }
        out
    }

    // ── Spans ───────────────────────────────────────────────────────

    #[test]
    fn spans_group_equal_roles() {
        let k = Some(ThemeRole::Keyword);
        let got = spans("fn x", &[k, k, None, None]);
        assert_eq!(
            got,
            vec![
                Span { text: "fn".into(), role: k },
                Span { text: " x".into(), role: None },
            ]
        );
    }

    #[test]
    fn spans_past_roles_are_plain() {
        let got = spans("ab", &[Some(ThemeRole::String)]);
        assert_eq!(got.len(), 2);
        assert_eq!(got[1].role, None);
    }

    #[test]
    fn role_style_uses_emphasis_and_background() {
        let theme = theme();
        let style = role_style(&theme, Some(ThemeRole::Comment));
        assert_eq!(style.fg, theme.get(ThemeRole::Comment));
        assert_eq!(style.bg, Some(theme.background()));
        assert!(style.attrs.contains(Attr::ITALIC));

        let plain = role_style(&theme, None);
        assert_eq!(plain.fg, Some(theme.foreground()));
    }

    // ── Rendering ───────────────────────────────────────────────────

    #[test]
    fn code_lines_are_padded_to_common_width() {
        let theme = theme();
        let mut hl = Highlighter::new(Language::Rust).unwrap();
        let mut out = Vec::new();
        render_code(&theme, &mut hl, "fn a() {}\nlet long_name = 1;\n", &mut out).unwrap();

        let text = strip_ansi(&String::from_utf8(out).unwrap());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), lines[1].len());
        assert_eq!(lines[1], "  let long_name = 1;  ");
    }

    #[test]
    fn preview_has_title_and_snippet() {
        let mut out = Vec::new();
        render_preview(&theme(), Language::Python, &mut out).unwrap();
        let text = strip_ansi(&String::from_utf8(out).unwrap());
        assert!(text.starts_with("Test (dark, python)\n"));
        assert!(text.contains("class Person:"));
    }

    #[test]
    fn swatches_list_every_color() {
        let colors = [Color::BLACK, Color::WHITE];
        let mut out = Vec::new();
        render_swatches(&colors, &mut out).unwrap();
        let text = strip_ansi(&String::from_utf8(out).unwrap());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], " 1          #000000  L=0.000");
        assert_eq!(lines[1], " 2          #ffffff  L=1.000");
    }

    #[test]
    fn legend_covers_every_role() {
        let theme = theme();
        let mut out = Vec::new();
        render_legend(&theme, &mut out).unwrap();
        let text = strip_ansi(&String::from_utf8(out).unwrap());
        assert_eq!(text.lines().count(), theme.roles().count());
        assert!(text.contains(" comment "));
    }
}
