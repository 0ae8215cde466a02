//! Semantic color slots and the table that decides how they are filled.
//!
//! A [`RoleTable`] has two halves:
//!
//! - **ranked** roles take colors straight from the saturation-ordered
//!   candidate list; position `i` in the table reads candidate `i mod len`.
//! - **derived** roles copy an already-assigned role, walking a fixed
//!   fallback chain that always ends in the foreground and then a literal.
//!
//! Every format consumes the same [`RoleTable::CANONICAL`] output, so the
//! selection logic exists once.

use std::collections::BTreeMap;

use pf_term::{Attr, Color};

// ---------------------------------------------------------------------------
// ThemeRole
// ---------------------------------------------------------------------------

/// A named semantic slot a theme color can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ThemeRole {
    Background,
    Foreground,
    Comment,
    Keyword,
    String,
    Number,
    Function,
    Class,
    Variable,
    Symbol,
    Builtin,
    Property,
    Char,
    Regex,
    Constant,
    Boolean,
    Operator,
    Punctuation,
}

impl ThemeRole {
    /// Every role, in canonical order.
    pub const ALL: [Self; 18] = [
        Self::Background,
        Self::Foreground,
        Self::Comment,
        Self::Keyword,
        Self::String,
        Self::Number,
        Self::Function,
        Self::Class,
        Self::Variable,
        Self::Symbol,
        Self::Builtin,
        Self::Property,
        Self::Char,
        Self::Regex,
        Self::Constant,
        Self::Boolean,
        Self::Operator,
        Self::Punctuation,
    ];

    /// Lowercase role name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Comment => "comment",
            Self::Keyword => "keyword",
            Self::String => "string",
            Self::Number => "number",
            Self::Function => "function",
            Self::Class => "class",
            Self::Variable => "variable",
            Self::Symbol => "symbol",
            Self::Builtin => "builtin",
            Self::Property => "property",
            Self::Char => "char",
            Self::Regex => "regex",
            Self::Constant => "constant",
            Self::Boolean => "boolean",
            Self::Operator => "operator",
            Self::Punctuation => "punctuation",
        }
    }

    /// Look up a role by its lowercase name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.name() == name)
    }

    /// Background and foreground are chosen by luminance, not by the table.
    #[must_use]
    pub const fn is_base(self) -> bool {
        matches!(self, Self::Background | Self::Foreground)
    }

    /// Font emphasis editors should apply to this role.
    #[must_use]
    pub const fn emphasis(self) -> Attr {
        match self {
            Self::Comment => Attr::ITALIC,
            Self::Keyword | Self::Class => Attr::BOLD,
            _ => Attr::empty(),
        }
    }

    /// Ordered sources to try when this role is not assigned directly.
    ///
    /// Each chain ends with the foreground and then a literal color, so
    /// resolution always yields something.
    #[must_use]
    pub const fn fallback_chain(self) -> &'static [Fallback] {
        match self {
            Self::Background => chains::BACKGROUND,
            Self::Foreground => chains::FOREGROUND,
            Self::Comment => chains::COMMENT,
            Self::Keyword => chains::KEYWORD,
            Self::String => chains::STRING,
            Self::Number => chains::NUMBER,
            Self::Function => chains::FUNCTION,
            Self::Class => chains::CLASS,
            Self::Variable => chains::VARIABLE,
            Self::Symbol | Self::Property => chains::LIKE_VARIABLE,
            Self::Builtin => chains::LIKE_FUNCTION,
            Self::Char | Self::Regex => chains::LIKE_STRING,
            Self::Constant => chains::LIKE_CLASS,
            Self::Boolean => chains::LIKE_KEYWORD,
            Self::Operator | Self::Punctuation => chains::LIKE_COMMENT,
        }
    }
}

mod chains {
    use super::Fallback::{Literal, Role};
    use super::{Color, Fallback, ThemeRole};

    const FG: Fallback = Role(ThemeRole::Foreground);

    const DARK_BG: Color = Color::rgb(0x1e, 0x1e, 0x1e);
    const LIGHT_FG: Color = Color::rgb(0xd4, 0xd4, 0xd4);
    const GREEN: Color = Color::rgb(0x6a, 0x99, 0x55);
    const BLUE: Color = Color::rgb(0x56, 0x9c, 0xd6);
    const ORANGE: Color = Color::rgb(0xce, 0x91, 0x78);
    const SAGE: Color = Color::rgb(0xb5, 0xce, 0xa8);
    const YELLOW: Color = Color::rgb(0xdc, 0xdc, 0xaa);
    const TEAL: Color = Color::rgb(0x4e, 0xc9, 0xb0);
    const SKY: Color = Color::rgb(0x9c, 0xdc, 0xfe);
    const CYAN: Color = Color::rgb(0x4f, 0xc1, 0xff);

    pub const BACKGROUND: &[Fallback] = &[Literal(DARK_BG)];
    pub const FOREGROUND: &[Fallback] = &[Literal(LIGHT_FG)];
    pub const COMMENT: &[Fallback] = &[FG, Literal(GREEN)];
    pub const KEYWORD: &[Fallback] = &[FG, Literal(BLUE)];
    pub const STRING: &[Fallback] = &[FG, Literal(ORANGE)];
    pub const NUMBER: &[Fallback] = &[FG, Literal(SAGE)];
    pub const FUNCTION: &[Fallback] = &[FG, Literal(YELLOW)];
    pub const CLASS: &[Fallback] = &[FG, Literal(TEAL)];
    pub const VARIABLE: &[Fallback] = &[FG, Literal(SKY)];

    pub const LIKE_VARIABLE: &[Fallback] = &[Role(ThemeRole::Variable), FG, Literal(SKY)];
    pub const LIKE_FUNCTION: &[Fallback] = &[Role(ThemeRole::Function), FG, Literal(YELLOW)];
    pub const LIKE_STRING: &[Fallback] = &[Role(ThemeRole::String), FG, Literal(ORANGE)];
    pub const LIKE_CLASS: &[Fallback] = &[Role(ThemeRole::Class), FG, Literal(CYAN)];
    pub const LIKE_KEYWORD: &[Fallback] = &[Role(ThemeRole::Keyword), FG, Literal(BLUE)];
    pub const LIKE_COMMENT: &[Fallback] = &[Role(ThemeRole::Comment), FG, Literal(LIGHT_FG)];
}

impl std::fmt::Display for ThemeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Fallback chains
// ---------------------------------------------------------------------------

/// One step of a fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Copy another role's color if it has been assigned.
    Role(ThemeRole),
    /// Terminal default.
    Literal(Color),
}

/// Walk `chain` against the roles assigned so far.
///
/// Returns the first assigned role's color, or the first literal reached.
/// A chain with neither yields black.
#[must_use]
pub fn resolve_chain(chain: &[Fallback], assigned: &BTreeMap<ThemeRole, Color>) -> Color {
    chain
        .iter()
        .find_map(|step| match *step {
            Fallback::Role(role) => assigned.get(&role).copied(),
            Fallback::Literal(color) => Some(color),
        })
        .unwrap_or(Color::BLACK)
}

// ---------------------------------------------------------------------------
// RoleTable
// ---------------------------------------------------------------------------

/// Which roles a mapping fills and how.
///
/// Background and foreground are always assigned; listing them here has no
/// effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleTable {
    /// Roles filled from the saturation-ranked candidates, by position.
    pub ranked: &'static [ThemeRole],
    /// Roles resolved through their fallback chain, in this order.
    pub derived: &'static [ThemeRole],
}

impl RoleTable {
    /// The table every serializer in this crate consumes.
    pub const CANONICAL: Self = Self {
        ranked: &[
            ThemeRole::Comment,
            ThemeRole::Keyword,
            ThemeRole::String,
            ThemeRole::Number,
            ThemeRole::Function,
            ThemeRole::Class,
            ThemeRole::Variable,
            ThemeRole::Symbol,
        ],
        derived: &[
            ThemeRole::Builtin,
            ThemeRole::Property,
            ThemeRole::Char,
            ThemeRole::Regex,
            ThemeRole::Constant,
            ThemeRole::Boolean,
            ThemeRole::Operator,
            ThemeRole::Punctuation,
        ],
    };

    /// Whether a mapping with this table populates `role`.
    #[must_use]
    pub fn declares(&self, role: ThemeRole) -> bool {
        role.is_base() || self.ranked.contains(&role) || self.derived.contains(&role)
    }

    /// Every populated role in canonical order.
    pub fn declared(&self) -> impl Iterator<Item = ThemeRole> + '_ {
        ThemeRole::ALL.into_iter().filter(|role| self.declares(*role))
    }
}

impl Default for RoleTable {
    fn default() -> Self {
        Self::CANONICAL
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Names ───────────────────────────────────────────────────────

    #[test]
    fn names_round_trip() {
        for role in ThemeRole::ALL {
            assert_eq!(ThemeRole::from_name(role.name()), Some(role));
        }
        assert_eq!(ThemeRole::from_name("markup"), None);
    }

    #[test]
    fn all_is_in_ord_order() {
        let mut sorted = ThemeRole::ALL;
        sorted.sort();
        assert_eq!(sorted, ThemeRole::ALL);
    }

    #[test]
    fn emphasis_matches_editor_conventions() {
        assert_eq!(ThemeRole::Comment.emphasis(), Attr::ITALIC);
        assert_eq!(ThemeRole::Keyword.emphasis(), Attr::BOLD);
        assert_eq!(ThemeRole::Class.emphasis(), Attr::BOLD);
        assert_eq!(ThemeRole::String.emphasis(), Attr::empty());
    }

    // ── Fallback chains ─────────────────────────────────────────────

    #[test]
    fn every_chain_ends_in_a_literal() {
        for role in ThemeRole::ALL {
            let chain = role.fallback_chain();
            assert!(
                matches!(chain.last(), Some(Fallback::Literal(_))),
                "{role} chain has no literal default"
            );
        }
    }

    #[test]
    fn non_base_chains_pass_through_foreground() {
        for role in ThemeRole::ALL.into_iter().filter(|r| !r.is_base()) {
            assert!(
                role.fallback_chain()
                    .contains(&Fallback::Role(ThemeRole::Foreground)),
                "{role} chain skips foreground"
            );
        }
    }

    #[test]
    fn resolve_prefers_first_assigned_role() {
        let mut assigned = BTreeMap::new();
        assigned.insert(ThemeRole::Foreground, Color::WHITE);
        assigned.insert(ThemeRole::Variable, Color::rgb(1, 2, 3));

        let color = resolve_chain(ThemeRole::Symbol.fallback_chain(), &assigned);
        assert_eq!(color, Color::rgb(1, 2, 3));
    }

    #[test]
    fn resolve_skips_unassigned_to_foreground() {
        let mut assigned = BTreeMap::new();
        assigned.insert(ThemeRole::Foreground, Color::WHITE);

        let color = resolve_chain(ThemeRole::Builtin.fallback_chain(), &assigned);
        assert_eq!(color, Color::WHITE);
    }

    #[test]
    fn resolve_reaches_literal_when_nothing_assigned() {
        let color = resolve_chain(ThemeRole::Constant.fallback_chain(), &BTreeMap::new());
        assert_eq!(color, Color::rgb(0x4f, 0xc1, 0xff));
    }

    #[test]
    fn resolve_empty_chain_is_black() {
        assert_eq!(resolve_chain(&[], &BTreeMap::new()), Color::BLACK);
    }

    // ── RoleTable ───────────────────────────────────────────────────

    #[test]
    fn canonical_declares_every_role() {
        let declared: Vec<_> = RoleTable::CANONICAL.declared().collect();
        assert_eq!(declared, ThemeRole::ALL.to_vec());
    }

    #[test]
    fn narrow_table_still_declares_base_roles() {
        let table = RoleTable {
            ranked: &[ThemeRole::Keyword],
            derived: &[],
        };
        let declared: Vec<_> = table.declared().collect();
        assert_eq!(
            declared,
            vec![ThemeRole::Background, ThemeRole::Foreground, ThemeRole::Keyword]
        );
    }
}
