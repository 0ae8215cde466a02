//! Serializers from a [`Theme`] to editor theme files.
//!
//! Serializers only format what the mapper assigned; none of them look at the
//! palette or recompute a role.

pub mod vim;
pub mod vscode;

use std::fmt;
use std::io;
use std::str::FromStr;

use crate::theme::Theme;

/// Errors produced while writing theme files.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("failed to encode theme JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write theme package: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("unknown theme format {0:?} (expected vscode, vim or vsix)")]
    UnknownFormat(String),
}

/// Output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeFormat {
    /// VS Code color theme JSON.
    VsCode,
    /// Vim colorscheme script.
    Vim,
    /// VS Code extension package (binary zip).
    Vsix,
}

impl ThemeFormat {
    pub const ALL: [Self; 3] = [Self::VsCode, Self::Vim, Self::Vsix];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::VsCode => "vscode",
            Self::Vim => "vim",
            Self::Vsix => "vsix",
        }
    }

    /// Default file name for a theme written in this format.
    #[must_use]
    pub fn file_name(self, theme: &Theme) -> String {
        match self {
            Self::VsCode => format!("{}.json", vscode::slug(theme.name())),
            Self::Vim => format!("{}.vim", vim::colors_name(theme.name())),
            Self::Vsix => format!("{}.vsix", vscode::slug(theme.name())),
        }
    }

    /// Whether the output is text (printable to a terminal).
    #[must_use]
    pub const fn is_text(self) -> bool {
        !matches!(self, Self::Vsix)
    }

    /// Write `theme` in this format.
    ///
    /// # Errors
    ///
    /// Propagates encoding and I/O failures.
    pub fn write<W: io::Write + io::Seek>(self, theme: &Theme, w: &mut W) -> Result<(), FormatError> {
        match self {
            Self::VsCode => {
                w.write_all(vscode::render(theme)?.as_bytes())?;
                Ok(())
            }
            Self::Vim => {
                w.write_all(vim::render(theme).as_bytes())?;
                Ok(())
            }
            Self::Vsix => vscode::write_vsix(theme, w),
        }
    }
}

impl fmt::Display for ThemeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vscode" | "code" | "json" => Ok(Self::VsCode),
            "vim" | "nvim" | "neovim" => Ok(Self::Vim),
            "vsix" => Ok(Self::Vsix),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Lowercase `name`, keeping ASCII letters and digits. Every other run of
/// characters becomes a single `sep`, so the result is always a plain file
/// name component.
pub(crate) fn slugify(name: &str, sep: char) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_gap = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            in_gap = false;
        } else if !in_gap {
            out.push(sep);
            in_gap = true;
        }
    }
    out
}

/// Whether a slug has anything besides separators.
pub(crate) fn has_word(slug: &str) -> bool {
    slug.chars().any(|c| c.is_ascii_alphanumeric())
}
