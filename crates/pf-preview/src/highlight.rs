//! Syntax highlighting via tree-sitter.
//!
//! The [`Highlighter`] parses a source string with the language's bundled
//! highlight query and assigns a [`ThemeRole`] to every character. Capture
//! names are mapped to roles once, when the query is compiled; painting a
//! theme over the result is left to [`render`](crate::render).
//!
//! Later captures (more specific patterns) override earlier ones for the
//! same character. Characters with no capture get `None`, which renders in
//! the theme foreground.

use std::ops::Range;

use pf_theme::ThemeRole;
use ropey::Rope;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

use crate::error::PreviewError;
use crate::snippets::Language;

/// Per-line, per-character roles.
pub type RoleLines = Vec<Vec<Option<ThemeRole>>>;

// ---------------------------------------------------------------------------
// Highlighter
// ---------------------------------------------------------------------------

/// Highlighter for one language.
pub struct Highlighter {
    language: Language,
    parser: Parser,
    query: Query,
    /// Role for each capture index. `None` = no highlighting.
    capture_roles: Vec<Option<ThemeRole>>,
}

impl Highlighter {
    /// Create a highlighter for `language`.
    ///
    /// # Errors
    ///
    /// Fails if the grammar cannot be loaded or its highlight query does not
    /// compile.
    pub fn new(language: Language) -> Result<Self, PreviewError> {
        let grammar = language.grammar();
        let mut parser = Parser::new();
        parser.set_language(&grammar)?;
        let query = Query::new(&grammar, language.highlights_query())?;
        let capture_roles = query.capture_names().iter().map(|name| capture_role(name)).collect();

        Ok(Self {
            language,
            parser,
            query,
            capture_roles,
        })
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Compute a role for every character of `source`.
    ///
    /// Returns one entry per line (as [`Rope::len_lines`] counts them),
    /// indexed by char column, excluding line terminators.
    ///
    /// # Errors
    ///
    /// [`PreviewError::Parse`] if tree-sitter returns no tree.
    pub fn highlight(&mut self, source: &str) -> Result<RoleLines, PreviewError> {
        let tree = self.parser.parse(source, None).ok_or(PreviewError::Parse)?;
        let mut grid = RoleGrid::new(source);

        let mut cursor = QueryCursor::new();
        let mut captures = cursor.captures(&self.query, tree.root_node(), source.as_bytes());
        while let Some((m, _)) = captures.next() {
            for capture in m.captures {
                if let Some(role) = self.capture_roles[capture.index as usize] {
                    grid.paint(capture.node.byte_range(), role);
                }
            }
        }

        Ok(grid.into_lines())
    }
}

// ---------------------------------------------------------------------------
// Role grid
// ---------------------------------------------------------------------------

/// Roles for every visible char of a source text, addressed by byte range.
struct RoleGrid {
    rope: Rope,
    lines: RoleLines,
}

impl RoleGrid {
    fn new(source: &str) -> Self {
        let rope = Rope::from_str(source);
        let lines = (0..rope.len_lines())
            .map(|line| vec![None; visible_chars(&rope, line)])
            .collect();
        Self { rope, lines }
    }

    /// Set `role` on the chars in `bytes`, which may cross lines. Line
    /// terminators inside the range are skipped.
    fn paint(&mut self, bytes: Range<usize>, role: ThemeRole) {
        let end = bytes.end.min(self.rope.len_bytes());
        if bytes.start >= end {
            return;
        }
        let first = self.rope.byte_to_char(bytes.start);
        let last = self.rope.byte_to_char(end);

        let first_line = self.rope.char_to_line(first);
        for (line, roles) in self.lines.iter_mut().enumerate().skip(first_line) {
            let line_start = self.rope.line_to_char(line);
            if line_start >= last {
                break;
            }
            let from = first.saturating_sub(line_start);
            let to = (last - line_start).min(roles.len());
            if from < to {
                roles[from..to].fill(Some(role));
            }
        }
    }

    fn into_lines(self) -> RoleLines {
        self.lines
    }
}

/// Chars on a line, not counting `\n` or `\r\n`.
fn visible_chars(rope: &Rope, line_idx: usize) -> usize {
    let line = rope.line(line_idx);
    let mut len = line.len_chars();
    if len > 0 && line.char(len - 1) == '\n' {
        len -= 1;
        if len > 0 && line.char(len - 1) == '\r' {
            len -= 1;
        }
    }
    len
}

// ---------------------------------------------------------------------------
// Capture-to-role mapping
// ---------------------------------------------------------------------------

/// Map a highlight capture name to a theme role.
///
/// Covers the capture vocabulary of the bundled Rust, Python and Go queries.
/// Unknown captures return `None`.
#[must_use]
#[allow(clippy::match_same_arms)]
pub fn capture_role(name: &str) -> Option<ThemeRole> {
    let role = match name {
        "comment" | "comment.documentation" => ThemeRole::Comment,

        "string.regexp" | "string.regex" => ThemeRole::Regex,
        "escape" | "string.escape" | "character" | "char" => ThemeRole::Char,
        "string" | "string.special" => ThemeRole::String,

        "number" | "float" | "constant.numeric" => ThemeRole::Number,
        "boolean" | "constant.builtin.boolean" => ThemeRole::Boolean,
        "constant" | "constant.builtin" => ThemeRole::Constant,

        "function.builtin" | "function.macro" | "type.builtin" | "variable.builtin" => {
            ThemeRole::Builtin
        }
        "function" | "function.method" | "function.call" | "method" => ThemeRole::Function,
        "type" | "type.definition" | "constructor" => ThemeRole::Class,

        "property" | "field" | "variable.member" => ThemeRole::Property,
        "variable" | "variable.parameter" => ThemeRole::Variable,

        "label" | "attribute" | "tag" => ThemeRole::Symbol,
        "operator" => ThemeRole::Operator,

        _ => {
            return match name.split('.').next() {
                Some("keyword") => Some(ThemeRole::Keyword),
                Some("punctuation") => Some(ThemeRole::Punctuation),
                _ => None,
            };
        }
    };
    Some(role)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
