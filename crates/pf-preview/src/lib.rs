//! # pf-preview: see a palette and its theme in the terminal
//!
//! - [`snippets`]: built-in sample programs (Rust, Python, Go).
//! - [`highlight`]: tree-sitter captures mapped onto theme roles.
//! - [`render`]: ANSI true-color output of swatches, legends and code.

pub mod error;
pub mod highlight;
pub mod render;
pub mod snippets;

pub use error::PreviewError;
pub use highlight::Highlighter;
pub use render::{render_code, render_legend, render_preview, render_swatches};
pub use snippets::Language;
