//! The format-agnostic theme record handed to serializers.

use std::collections::BTreeMap;
use std::fmt;

use pf_term::Color;

use crate::role::ThemeRole;

/// Light or dark classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeKind {
    Dark,
    Light,
}

/// Tone of a single chosen color, as classified by the coarse check.
pub type Tone = ThemeKind;

impl ThemeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete role-to-color assignment.
///
/// Immutable once built by the mapper. `background` and `foreground` are
/// also present in the role map, so iteration covers every declared role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    kind: ThemeKind,
    background_tone: Tone,
    background: Color,
    foreground: Color,
    roles: BTreeMap<ThemeRole, Color>,
}

impl Theme {
    /// Assemble a theme. Called by the mapper only.
    pub(crate) fn new(
        name: &str,
        kind: ThemeKind,
        background_tone: Tone,
        background: Color,
        foreground: Color,
        mut roles: BTreeMap<ThemeRole, Color>,
    ) -> Self {
        roles.insert(ThemeRole::Background, background);
        roles.insert(ThemeRole::Foreground, foreground);
        Self {
            name: name.to_string(),
            kind,
            background_tone,
            background,
            foreground,
            roles,
        }
    }

    /// Display name, exactly as supplied.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Overall kind, from the palette's average relative luminance.
    #[must_use]
    pub const fn kind(&self) -> ThemeKind {
        self.kind
    }

    /// Tone of the chosen background under the coarse check.
    #[must_use]
    pub const fn background_tone(&self) -> Tone {
        self.background_tone
    }

    #[must_use]
    pub const fn background(&self) -> Color {
        self.background
    }

    #[must_use]
    pub const fn foreground(&self) -> Color {
        self.foreground
    }

    /// Color assigned to `role`, if the role table declared it.
    #[must_use]
    pub fn get(&self, role: ThemeRole) -> Option<Color> {
        self.roles.get(&role).copied()
    }

    /// Color for `role`, or the foreground when the role is undeclared.
    #[must_use]
    pub fn color(&self, role: ThemeRole) -> Color {
        self.get(role).unwrap_or(self.foreground)
    }

    /// Every assigned role in canonical order.
    pub fn roles(&self) -> impl Iterator<Item = (ThemeRole, Color)> + '_ {
        self.roles.iter().map(|(role, color)| (*role, *color))
    }
}
