//! Vim colorscheme script.
//!
//! One `highlight` line per group. Syntax groups point at theme roles;
//! window chrome, diff and spell groups use a fixed preset picked by the
//! background's coarse tone, which also drives `set background=`.

use pf_term::Color;

use super::{has_word, slugify};
use crate::role::ThemeRole;
use crate::theme::{Theme, Tone};

const DEFAULT_NAME: &str = "Generated Palette Theme";
const DEFAULT_COLORS_NAME: &str = "generated_palette_theme";

/// Where a highlight color comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ink {
    Role(ThemeRole),
    Fixed(Color),
}

use Ink::{Fixed, Role};

const BG: Ink = Role(ThemeRole::Background);
const FG: Ink = Role(ThemeRole::Foreground);

// Preset chrome and diagnostic colors.
const ACCENT: Ink = Fixed(Color::rgb(0x0e, 0x63, 0x9c));
const AMBER: Ink = Fixed(Color::rgb(0xbf, 0x88, 0x03));
const BRICK: Ink = Fixed(Color::rgb(0xbe, 0x11, 0x00));
const CARET: Ink = Fixed(Color::rgb(0xae, 0xaf, 0xad));
const CHARCOAL: Ink = Fixed(Color::rgb(0x1e, 0x1e, 0x1e));
const CHROME_LIGHT: Ink = Fixed(Color::rgb(0xf3, 0xf3, 0xf3));
const CORAL: Ink = Fixed(Color::rgb(0xf4, 0x47, 0x47));
const DIFF_GREEN: Ink = Fixed(Color::rgb(0x0d, 0xbc, 0x79));
const DIFF_RED: Ink = Fixed(Color::rgb(0xcd, 0x31, 0x31));
const DIFF_YELLOW: Ink = Fixed(Color::rgb(0xe5, 0xe5, 0x10));
const GOLD: Ink = Fixed(Color::rgb(0xff, 0xcc, 0x02));
const GRAPHITE: Ink = Fixed(Color::rgb(0x33, 0x33, 0x33));
const GREY: Ink = Fixed(Color::rgb(0x85, 0x85, 0x85));
const MIST: Ink = Fixed(Color::rgb(0xcc, 0xcc, 0xcc));
const MUTED: Ink = Fixed(Color::rgb(0x96, 0x96, 0x96));
const NAVY: Ink = Fixed(Color::rgb(0x0b, 0x21, 0x6f));
const ORCHID: Ink = Fixed(Color::rgb(0xc5, 0x86, 0xc0));
const SELECTION_DARK: Ink = Fixed(Color::rgb(0x26, 0x4f, 0x78));
const SELECTION_LIGHT: Ink = Fixed(Color::rgb(0xad, 0xd6, 0xff));
const SHADE_DARK: Ink = Fixed(Color::rgb(0x2a, 0x2d, 0x2e));
const SHADE_LIGHT: Ink = Fixed(Color::rgb(0xf0, 0xf0, 0xf0));
const SILVER: Ink = Fixed(Color::rgb(0xc6, 0xc6, 0xc6));
const SPLIT_DARK: Ink = Fixed(Color::rgb(0x45, 0x45, 0x45));
const SPLIT_LIGHT: Ink = Fixed(Color::rgb(0xc8, 0xc8, 0xc8));
const STATUS_DARK: Ink = Fixed(Color::rgb(0x25, 0x25, 0x26));
const STEEL: Ink = Fixed(Color::rgb(0x23, 0x78, 0x93));
const TAB_DARK: Ink = Fixed(Color::rgb(0x2d, 0x2d, 0x30));
const TEAL: Ink = Fixed(Color::rgb(0x4e, 0xc9, 0xb0));
const WHITE: Ink = Fixed(Color::rgb(0xff, 0xff, 0xff));

type Group = (&'static str, Ink, Ink);

const BASE: &[Group] = &[
    ("Normal", FG, BG),
    ("NormalNC", FG, BG),
    ("NormalFloat", FG, BG),
    ("EndOfBuffer", BG, BG),
    ("NonText", BG, BG),
    ("SignColumn", BG, BG),
    ("FoldColumn", BG, BG),
];

const DARK_CHROME: &[Group] = &[
    ("StatusLine", MIST, STATUS_DARK),
    ("StatusLineNC", MUTED, TAB_DARK),
    ("TabLine", MUTED, TAB_DARK),
    ("TabLineFill", TAB_DARK, TAB_DARK),
    ("TabLineSel", WHITE, CHARCOAL),
    ("WinSeparator", SPLIT_DARK, SPLIT_DARK),
    ("VertSplit", SPLIT_DARK, SPLIT_DARK),
    ("LineNr", GREY, BG),
    ("CursorLineNr", SILVER, BG),
    ("Folded", MUTED, SHADE_DARK),
    ("Visual", WHITE, SELECTION_DARK),
    ("VisualNOS", WHITE, SELECTION_DARK),
    ("Cursor", CARET, CARET),
    ("lCursor", CARET, CARET),
    ("CursorLine", SHADE_DARK, SHADE_DARK),
    ("CursorColumn", SHADE_DARK, SHADE_DARK),
    ("Search", WHITE, ACCENT),
    ("IncSearch", WHITE, ACCENT),
    ("MatchParen", WHITE, ACCENT),
];

const LIGHT_CHROME: &[Group] = &[
    ("StatusLine", GRAPHITE, CHROME_LIGHT),
    ("StatusLineNC", MUTED, CHROME_LIGHT),
    ("TabLine", MUTED, CHROME_LIGHT),
    ("TabLineFill", CHROME_LIGHT, CHROME_LIGHT),
    ("TabLineSel", GRAPHITE, WHITE),
    ("WinSeparator", SPLIT_LIGHT, SPLIT_LIGHT),
    ("VertSplit", SPLIT_LIGHT, SPLIT_LIGHT),
    ("LineNr", STEEL, BG),
    ("CursorLineNr", NAVY, BG),
    ("Folded", MUTED, SHADE_LIGHT),
    ("Visual", WHITE, SELECTION_LIGHT),
    ("VisualNOS", WHITE, SELECTION_LIGHT),
    ("Cursor", GRAPHITE, GRAPHITE),
    ("lCursor", GRAPHITE, GRAPHITE),
    ("CursorLine", SHADE_LIGHT, SHADE_LIGHT),
    ("CursorColumn", SHADE_LIGHT, SHADE_LIGHT),
    ("Search", WHITE, ACCENT),
    ("IncSearch", WHITE, ACCENT),
    ("MatchParen", WHITE, ACCENT),
];

/// Standard syntax groups and the role each one shows.
const SYNTAX: &[(&str, ThemeRole)] = &[
    ("Comment", ThemeRole::Comment),
    ("Constant", ThemeRole::Constant),
    ("String", ThemeRole::String),
    ("Character", ThemeRole::Char),
    ("Number", ThemeRole::Number),
    ("Boolean", ThemeRole::Boolean),
    ("Float", ThemeRole::Number),
    ("Identifier", ThemeRole::Variable),
    ("Function", ThemeRole::Function),
    ("Statement", ThemeRole::Keyword),
    ("Conditional", ThemeRole::Keyword),
    ("Repeat", ThemeRole::Keyword),
    ("Label", ThemeRole::Keyword),
    ("Operator", ThemeRole::Operator),
    ("Keyword", ThemeRole::Keyword),
    ("Exception", ThemeRole::Keyword),
    ("PreProc", ThemeRole::Builtin),
    ("Include", ThemeRole::Keyword),
    ("Define", ThemeRole::Keyword),
    ("Macro", ThemeRole::Builtin),
    ("PreCondit", ThemeRole::Keyword),
    ("Type", ThemeRole::Class),
    ("StorageClass", ThemeRole::Keyword),
    ("Structure", ThemeRole::Class),
    ("Typedef", ThemeRole::Class),
    ("Special", ThemeRole::Symbol),
    ("SpecialChar", ThemeRole::Regex),
    ("Tag", ThemeRole::Property),
    ("Delimiter", ThemeRole::Punctuation),
    ("SpecialComment", ThemeRole::Comment),
    ("Debug", ThemeRole::Builtin),
    ("Underlined", ThemeRole::Function),
    ("Ignore", ThemeRole::Comment),
    ("Todo", ThemeRole::Function),
];

const DARK_DIAGNOSTICS: &[Group] = &[
    ("Error", CORAL, BG),
    ("DiffAdd", DIFF_GREEN, DIFF_GREEN),
    ("DiffChange", DIFF_YELLOW, DIFF_YELLOW),
    ("DiffDelete", DIFF_RED, DIFF_RED),
    ("DiffText", WHITE, ACCENT),
    ("SpellBad", CORAL, CORAL),
    ("SpellCap", GOLD, GOLD),
    ("SpellRare", ORCHID, ORCHID),
    ("SpellLocal", TEAL, TEAL),
];

const LIGHT_DIAGNOSTICS: &[Group] = &[
    ("Error", BRICK, BG),
    ("DiffAdd", DIFF_GREEN, DIFF_GREEN),
    ("DiffChange", DIFF_YELLOW, DIFF_YELLOW),
    ("DiffDelete", DIFF_RED, DIFF_RED),
    ("DiffText", WHITE, ACCENT),
    ("SpellBad", BRICK, BRICK),
    ("SpellCap", AMBER, AMBER),
    ("SpellRare", ORCHID, ORCHID),
    ("SpellLocal", TEAL, TEAL),
];

/// `g:colors_name`: lowercase ASCII letters and digits, every other run
/// replaced by `_`. Names with no letters or digits use the default.
#[must_use]
pub fn colors_name(name: &str) -> String {
    let slug = slugify(name, '_');
    if has_word(&slug) { slug } else { DEFAULT_COLORS_NAME.to_string() }
}

/// The display name as one line of a `"` comment: control characters become
/// spaces, `\` and `"` are backslash-escaped.
fn comment_text(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '\\' | '"' => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push(' '),
            c => out.push(c),
        }
    }
    out
}

/// Every group as `(name, guifg, guibg)`, in output order.
#[must_use]
pub fn highlight_groups(theme: &Theme) -> Vec<(&'static str, Color, Color)> {
    let (chrome, diagnostics) = match theme.background_tone() {
        Tone::Dark => (DARK_CHROME, DARK_DIAGNOSTICS),
        Tone::Light => (LIGHT_CHROME, LIGHT_DIAGNOSTICS),
    };
    let syntax = SYNTAX.iter().map(|&(group, role)| (group, Role(role), BG));

    BASE.iter()
        .chain(chrome)
        .copied()
        .chain(syntax)
        .chain(diagnostics.iter().copied())
        .map(|(group, fg, bg)| (group, ink(theme, fg), ink(theme, bg)))
        .collect()
}

fn ink(theme: &Theme, ink: Ink) -> Color {
    match ink {
        Role(role) => theme.color(role),
        Fixed(color) => color,
    }
}

/// Render the full colorscheme script.
#[must_use]
pub fn render(theme: &Theme) -> String {
    let title = if theme.name().is_empty() { DEFAULT_NAME } else { theme.name() };
    let title = comment_text(title);
    let tone = theme.background_tone();

    let mut lines = vec![
        format!("\" {title}"),
        "\" Generated by palette-forge".to_string(),
        format!("\" Type: {tone}"),
        String::new(),
        format!("set background={tone}"),
        String::new(),
        "highlight clear".to_string(),
        "if exists(\"syntax_on\")".to_string(),
        "    syntax reset".to_string(),
        "endif".to_string(),
        String::new(),
        format!("let g:colors_name = \"{}\"", colors_name(theme.name())),
        String::new(),
    ];
    lines.extend(
        highlight_groups(theme)
            .into_iter()
            .map(|(group, fg, bg)| format!("highlight {group} guifg={fg} guibg={bg}")),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map_palette;
    use pretty_assertions::assert_eq;

    fn dark() -> Theme {
        map_palette(&["#1e1e1e", "#d4d4d4", "#569cd6", "#ce9178"], "Ocean Night").unwrap()
    }

    #[test]
    fn header_and_preamble() {
        let out = render(&dark());
        let head: Vec<&str> = out.lines().take(13).collect();
        assert_eq!(
            head,
            vec![
                "\" Ocean Night",
                "\" Generated by palette-forge",
                "\" Type: dark",
                "",
                "set background=dark",
                "",
                "highlight clear",
                "if exists(\"syntax_on\")",
                "    syntax reset",
                "endif",
                "",
                "let g:colors_name = \"ocean_night\"",
                "",
            ]
        );
    }

    #[test]
    fn normal_uses_theme_pair() {
        let theme = dark();
        let out = render(&theme);
        let normal = format!(
            "highlight Normal guifg={} guibg={}",
            theme.foreground(),
            theme.background()
        );
        assert!(out.contains(&normal), "missing {normal}");
    }

    #[test]
    fn syntax_groups_follow_roles() {
        let theme = dark();
        let groups = highlight_groups(&theme);
        let find = |name: &str| groups.iter().find(|g| g.0 == name).copied().unwrap();

        assert_eq!(find("Comment").1, theme.color(ThemeRole::Comment));
        assert_eq!(find("Statement").1, theme.color(ThemeRole::Keyword));
        assert_eq!(find("Type").1, theme.color(ThemeRole::Class));
        assert_eq!(find("Comment").2, theme.background());
        assert_eq!(find("LineNr").2, theme.background());
    }

    #[test]
    fn every_group_is_one_line() {
        let theme = dark();
        let out = render(&theme);
        let count = out.lines().filter(|l| l.starts_with("highlight ")).count();
        assert_eq!(count, highlight_groups(&theme).len());
        assert_eq!(count, BASE.len() + DARK_CHROME.len() + SYNTAX.len() + DARK_DIAGNOSTICS.len());
    }

    #[test]
    fn tone_selects_preset() {
        // Relative luminance calls #909090 dark; the coarse tone is light.
        let theme = map_palette(&["#909090"], "Grey").unwrap();
        let out = render(&theme);
        assert!(out.contains("set background=light"));
        assert!(out.contains("highlight StatusLine guifg=#333333 guibg=#f3f3f3"));
        assert!(out.contains("highlight Error guifg=#be1100 guibg=#909090"));
    }

    #[test]
    fn colors_name_defaults_when_empty() {
        assert_eq!(colors_name(""), "generated_palette_theme");
        assert_eq!(colors_name("Deep  Sea"), "deep_sea");
        let theme = map_palette(&["#000000"], "").unwrap();
        assert!(render(&theme).starts_with("\" Generated Palette Theme\n"));
        assert_eq!(colors_name("!!!"), "generated_palette_theme");
    }

    #[test]
    fn quoted_name_keeps_script_valid() {
        let theme =
            map_palette(&["#1e1e1e", "#d4d4d4"], "Bob's \"Best\"\nhighlight clear").unwrap();
        let out = render(&theme);

        let let_line = out.lines().find(|l| l.starts_with("let g:colors_name")).unwrap();
        assert_eq!(let_line, "let g:colors_name = \"bob_s_best_highlight_clear\"");
        assert_eq!(let_line.matches('"').count(), 2);

        // The title stays a single comment line.
        assert_eq!(
            out.lines().next().unwrap(),
            "\" Bob's \\\"Best\\\" highlight clear"
        );
        assert_eq!(out.lines().filter(|l| *l == "highlight clear").count(), 1);
    }

    #[test]
    fn preset_colors_are_fixed() {
        let theme = dark();
        let groups = highlight_groups(&theme);
        let find = |name: &str| groups.iter().find(|g| g.0 == name).copied().unwrap();
        assert_eq!(find("StatusLine").1, Color::rgb(0xcc, 0xcc, 0xcc));
        assert_eq!(find("Search").2, Color::rgb(0x0e, 0x63, 0x9c));
        assert_eq!(find("SpellCap").1, Color::rgb(0xff, 0xcc, 0x02));
    }
}
