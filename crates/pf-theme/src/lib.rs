//! # pf-theme: palette-to-theme mapping engine
//!
//! Turns an ordered palette of raw colors into a complete editor theme:
//! background and foreground selection, contrast-safe syntax roles, and a
//! light/dark classification. Two serializers format the result.
//!
//! # Architecture
//!
//! ```text
//! ["#1e1e1e", "#d4d4d4", ...] + name
//!     │
//!     ▼
//! palette.rs:  parse, reject empty input
//!     │
//!     ▼
//! contrast.rs: relative luminance, coarse luminance, contrast ratio
//!     │
//!     ▼
//! mapper.rs:   kind, background/foreground, saturation-ranked roles,
//!              3:1 contrast gate, fallback chains (role.rs)
//!     │
//!     ▼
//! theme.rs:    immutable Theme record
//!     │
//!     ▼
//! format/:     VS Code theme.json + .vsix, Vim colorscheme
//! ```
//!
//! Nothing in this crate logs or touches global state. The only I/O is the
//! writer handed to a serializer.

// Color math converts small counts to f64.
#![allow(clippy::cast_precision_loss)]
// Role and preset tables run long: one entry per group.
#![allow(clippy::too_many_lines)]

pub mod contrast;
pub mod error;
pub mod format;
pub mod mapper;
pub mod palette;
pub mod role;
pub mod theme;

pub use contrast::{
    ColorProfile, MIN_ROLE_CONTRAST, coarse_luminance, contrast_ratio, is_dark_color,
    relative_luminance,
};
pub use error::ThemeError;
pub use format::{FormatError, ThemeFormat};
pub use mapper::{map_palette, map_palette_with};
pub use palette::Palette;
pub use pf_term::Color;
pub use role::{RoleTable, ThemeRole};
pub use theme::{Theme, ThemeKind, Tone};
