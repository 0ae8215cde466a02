// SPDX-License-Identifier: MIT
//
// pf-term: color values and terminal styling for palette-forge.
//
// The `Color` type here is the currency of the whole workspace: palettes,
// themes, history entries and previews all carry it. The `ansi` and `style`
// modules write those colors to a true-color terminal so palettes and
// themed code can be inspected without leaving the shell.

pub mod ansi;
pub mod color;
pub mod style;

pub use color::{Color, Hsl, ParseColorError};
pub use style::{Attr, Style};
