//! VS Code color theme, extension manifest and `.vsix` package.
//!
//! Editor and terminal background/foreground come from the theme; the rest
//! of the workbench chrome uses a fixed Dark Modern or Light Modern preset
//! chosen by [`ThemeKind`]. Token colors are one rule per canonical role.

use std::collections::BTreeMap;
use std::io::{Seek, Write};

use pf_term::Color;
use serde::Serialize;
use serde_json::json;
use zip::write::SimpleFileOptions;

use super::{FormatError, has_word, slugify};
use crate::role::ThemeRole;
use crate::theme::{Theme, ThemeKind};

/// Display name used when a theme has an empty name.
pub const DEFAULT_NAME: &str = "Generated Palette Theme";

/// Path of the theme inside the extension.
pub const THEME_PATH: &str = "themes/theme.json";

// ---------------------------------------------------------------------------
// theme.json
// ---------------------------------------------------------------------------

/// Serializable `theme.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VsCodeTheme {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub colors: BTreeMap<&'static str, String>,
    pub token_colors: Vec<TokenColor>,
}

/// One `tokenColors` rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenColor {
    pub name: &'static str,
    pub scope: &'static [&'static str],
    pub settings: TokenSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSettings {
    pub foreground: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
}

/// TextMate scopes per role, in output order.
const TOKEN_SCOPES: &[(ThemeRole, &str, &[&str])] = &[
    (ThemeRole::Comment, "Comment", &["comment", "punctuation.definition.comment"]),
    (ThemeRole::Keyword, "Keyword", &["keyword", "storage.type", "storage.modifier"]),
    (ThemeRole::String, "String", &["string"]),
    (ThemeRole::Number, "Number", &["constant.numeric"]),
    (ThemeRole::Function, "Function", &["entity.name.function", "meta.function-call"]),
    (ThemeRole::Class, "Class", &["entity.name.type.class", "entity.name.type"]),
    (ThemeRole::Variable, "Variable", &["variable", "variable.other"]),
    (ThemeRole::Symbol, "Symbol", &["constant.other.symbol"]),
    (ThemeRole::Builtin, "Builtin", &["support.function", "support.type"]),
    (
        ThemeRole::Property,
        "Property",
        &["variable.other.property", "variable.other.object.property", "support.type.property-name"],
    ),
    (ThemeRole::Char, "Character", &["constant.character"]),
    (ThemeRole::Regex, "Regular Expression", &["string.regexp"]),
    (ThemeRole::Constant, "Constant", &["constant.language", "variable.other.constant"]),
    (ThemeRole::Boolean, "Boolean", &["constant.language.boolean"]),
    (ThemeRole::Operator, "Operator", &["keyword.operator"]),
    (ThemeRole::Punctuation, "Punctuation", &["punctuation"]),
];

/// Build the `theme.json` document for `theme`.
#[must_use]
pub fn theme_document(theme: &Theme) -> VsCodeTheme {
    let chrome = match theme.kind() {
        ThemeKind::Dark => DARK_MODERN,
        ThemeKind::Light => LIGHT_MODERN,
    };

    let mut colors: BTreeMap<&'static str, String> = chrome
        .iter()
        .map(|(key, value)| (*key, (*value).to_string()))
        .collect();
    for key in ["editor.background", "terminal.background"] {
        colors.insert(key, theme.background().to_hex());
    }
    for key in ["editor.foreground", "terminal.foreground"] {
        colors.insert(key, theme.foreground().to_hex());
    }

    let token_colors = TOKEN_SCOPES
        .iter()
        .filter_map(|&(role, name, scope)| {
            theme.get(role).map(|foreground| TokenColor {
                name,
                scope,
                settings: TokenSettings {
                    foreground,
                    font_style: role.emphasis().font_style(),
                },
            })
        })
        .collect();

    VsCodeTheme {
        name: display_name(theme).to_string(),
        kind: theme.kind().as_str(),
        colors,
        token_colors,
    }
}

/// Render `theme.json` as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`FormatError::Json`] if encoding fails.
pub fn render(theme: &Theme) -> Result<String, FormatError> {
    Ok(serde_json::to_string_pretty(&theme_document(theme))?)
}

// ---------------------------------------------------------------------------
// Extension packaging
// ---------------------------------------------------------------------------

/// Package name: lowercase ASCII letters and digits, every other run
/// replaced by `-`. Names with no letters or digits use the default.
#[must_use]
pub fn slug(name: &str) -> String {
    let slug = slugify(name, '-');
    if has_word(&slug) { slug } else { slugify(DEFAULT_NAME, '-') }
}

fn display_name(theme: &Theme) -> &str {
    if theme.name().is_empty() { DEFAULT_NAME } else { theme.name() }
}

/// The extension's `package.json`.
#[must_use]
pub fn manifest(theme: &Theme) -> serde_json::Value {
    let name = display_name(theme);
    let ui_theme = match theme.kind() {
        ThemeKind::Dark => "vs-dark",
        ThemeKind::Light => "vs",
    };

    json!({
        "name": slug(name),
        "displayName": name,
        "description": "Generated theme from color palette",
        "version": "1.0.0",
        "publisher": "palette-forge",
        "engines": { "vscode": "^1.74.0" },
        "categories": ["Themes"],
        "contributes": {
            "themes": [{
                "label": name,
                "uiTheme": ui_theme,
                "path": format!("./{THEME_PATH}"),
            }]
        }
    })
}

/// Write a `.vsix` archive holding `extension/package.json` and
/// `extension/themes/theme.json`.
///
/// # Errors
///
/// Propagates JSON encoding, zip and I/O failures.
pub fn write_vsix<W: Write + Seek>(theme: &Theme, w: W) -> Result<(), FormatError> {
    let package = serde_json::to_string_pretty(&manifest(theme))?;
    let document = render(theme)?;

    let mut zip = zip::ZipWriter::new(w);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file("extension/package.json", options)?;
    zip.write_all(package.as_bytes())?;
    zip.start_file(format!("extension/{THEME_PATH}"), options)?;
    zip.write_all(document.as_bytes())?;
    zip.finish()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Chrome presets
// ---------------------------------------------------------------------------

const DARK_MODERN: &[(&str, &str)] = &[
    ("sideBar.background", "#252526"),
    ("sideBar.foreground", "#cccccc"),
    ("activityBar.background", "#333333"),
    ("statusBar.background", "#007acc"),
    ("statusBar.foreground", "#ffffff"),
    ("titleBar.activeBackground", "#3c3c3c"),
    ("titleBar.activeForeground", "#cccccc"),
    ("titleBar.inactiveBackground", "#3c3c3c"),
    ("titleBar.inactiveForeground", "#969696"),
    ("titleBar.border", "#454545"),
    ("panel.background", "#1e1e1e"),
    ("panel.foreground", "#d4d4d4"),
    ("editorCursor.foreground", "#aeafad"),
    ("editor.selectionBackground", "#264f78"),
    ("editor.lineHighlightBackground", "#2a2d2e"),
    ("editorBracketMatch.background", "#0e639c"),
    ("editorBracketMatch.border", "#888888"),
    ("editorIndentGuide.background", "#404040"),
    ("editorIndentGuide.activeBackground", "#707070"),
    ("editorLineNumber.foreground", "#858585"),
    ("editorLineNumber.activeForeground", "#c6c6c6"),
    ("editorWidget.background", "#252526"),
    ("editorWidget.border", "#454545"),
    ("input.background", "#3c3c3c"),
    ("input.border", "#454545"),
    ("input.foreground", "#cccccc"),
    ("list.activeSelectionBackground", "#094771"),
    ("list.activeSelectionForeground", "#ffffff"),
    ("list.hoverBackground", "#2a2d2e"),
    ("list.inactiveSelectionBackground", "#3c3c3c"),
    ("list.errorForeground", "#f44747"),
    ("list.warningForeground", "#ffcc02"),
    ("menu.background", "#3c3c3c"),
    ("menu.foreground", "#cccccc"),
    ("menu.selectionBackground", "#094771"),
    ("quickInput.background", "#3c3c3c"),
    ("quickInput.foreground", "#cccccc"),
    ("scrollbarSlider.background", "#79797966"),
    ("scrollbarSlider.hoverBackground", "#646464b3"),
    ("scrollbarSlider.activeBackground", "#6a6a6a"),
    ("selection.background", "#264f78"),
    ("tab.activeBackground", "#1e1e1e"),
    ("tab.activeForeground", "#ffffff"),
    ("tab.inactiveBackground", "#2d2d30"),
    ("tab.inactiveForeground", "#969696"),
    ("tab.border", "#252526"),
    ("tab.activeBorderTop", "#007acc"),
    ("terminal.ansiBlack", "#000000"),
    ("terminal.ansiRed", "#cd3131"),
    ("terminal.ansiGreen", "#0dbc79"),
    ("terminal.ansiYellow", "#e5e510"),
    ("terminal.ansiBlue", "#2472c8"),
    ("terminal.ansiMagenta", "#bc3fbc"),
    ("terminal.ansiCyan", "#11a8cd"),
    ("terminal.ansiWhite", "#e5e5e5"),
    ("terminal.ansiBrightBlack", "#666666"),
    ("terminal.ansiBrightRed", "#f14c4c"),
    ("terminal.ansiBrightGreen", "#23d18b"),
    ("terminal.ansiBrightYellow", "#f5f543"),
    ("terminal.ansiBrightBlue", "#3b8eea"),
    ("terminal.ansiBrightMagenta", "#d670d6"),
    ("terminal.ansiBrightCyan", "#29b8db"),
    ("terminal.ansiBrightWhite", "#e5e5e5"),
    ("terminal.selectionBackground", "#ffffff40"),
    ("terminalCursor.background", "#ffffff"),
    ("terminalCursor.foreground", "#000000"),
    ("widget.shadow", "#000000"),
];

const LIGHT_MODERN: &[(&str, &str)] = &[
    ("sideBar.background", "#f3f3f3"),
    ("sideBar.foreground", "#616161"),
    ("activityBar.background", "#2c2c2c"),
    ("statusBar.background", "#007acc"),
    ("statusBar.foreground", "#ffffff"),
    ("titleBar.activeBackground", "#ffffff"),
    ("titleBar.activeForeground", "#333333"),
    ("titleBar.inactiveBackground", "#ffffff"),
    ("titleBar.inactiveForeground", "#969696"),
    ("titleBar.border", "#c8c8c8"),
    ("panel.background", "#ffffff"),
    ("panel.foreground", "#333333"),
    ("editorCursor.foreground", "#333333"),
    ("editor.selectionBackground", "#add6ff"),
    ("editor.lineHighlightBackground", "#f0f0f0"),
    ("editorBracketMatch.background", "#0e639c"),
    ("editorBracketMatch.border", "#888888"),
    ("editorIndentGuide.background", "#d3d3d3"),
    ("editorIndentGuide.activeBackground", "#939393"),
    ("editorLineNumber.foreground", "#237893"),
    ("editorLineNumber.activeForeground", "#0b216f"),
    ("editorWidget.background", "#f3f3f3"),
    ("editorWidget.border", "#c8c8c8"),
    ("input.background", "#ffffff"),
    ("input.border", "#c8c8c8"),
    ("input.foreground", "#333333"),
    ("list.activeSelectionBackground", "#007acc"),
    ("list.activeSelectionForeground", "#ffffff"),
    ("list.hoverBackground", "#e8e8e8"),
    ("list.inactiveSelectionBackground", "#e5e5e5"),
    ("list.errorForeground", "#be1100"),
    ("list.warningForeground", "#bf8803"),
    ("menu.background", "#ffffff"),
    ("menu.foreground", "#333333"),
    ("menu.selectionBackground", "#007acc"),
    ("quickInput.background", "#ffffff"),
    ("quickInput.foreground", "#333333"),
    ("scrollbarSlider.background", "#79797966"),
    ("scrollbarSlider.hoverBackground", "#646464b3"),
    ("scrollbarSlider.activeBackground", "#6a6a6a"),
    ("selection.background", "#add6ff"),
    ("tab.activeBackground", "#ffffff"),
    ("tab.activeForeground", "#333333"),
    ("tab.inactiveBackground", "#f3f3f3"),
    ("tab.inactiveForeground", "#969696"),
    ("tab.border", "#f3f3f3"),
    ("tab.activeBorderTop", "#007acc"),
    ("terminal.ansiBlack", "#000000"),
    ("terminal.ansiRed", "#cd3131"),
    ("terminal.ansiGreen", "#0dbc79"),
    ("terminal.ansiYellow", "#e5e510"),
    ("terminal.ansiBlue", "#2472c8"),
    ("terminal.ansiMagenta", "#bc3fbc"),
    ("terminal.ansiCyan", "#11a8cd"),
    ("terminal.ansiWhite", "#e5e5e5"),
    ("terminal.ansiBrightBlack", "#666666"),
    ("terminal.ansiBrightRed", "#f14c4c"),
    ("terminal.ansiBrightGreen", "#23d18b"),
    ("terminal.ansiBrightYellow", "#f5f543"),
    ("terminal.ansiBrightBlue", "#3b8eea"),
    ("terminal.ansiBrightMagenta", "#d670d6"),
    ("terminal.ansiBrightCyan", "#29b8db"),
    ("terminal.ansiBrightWhite", "#e5e5e5"),
    ("terminal.selectionBackground", "#ffffff40"),
    ("terminalCursor.background", "#000000"),
    ("terminalCursor.foreground", "#ffffff"),
    ("widget.shadow", "#000000"),
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
