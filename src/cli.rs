// SPDX-License-Identifier: MIT
//
// Command-line surface. Parsing only; see commands.rs for behavior.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pf_preview::Language;
use pf_theme::ThemeFormat;

#[derive(Debug, Parser)]
#[command(
    name = "pforge",
    about = "Turn a text prompt into a color palette and matching editor themes",
    version
)]
pub struct Cli {
    /// Log at debug level (RUST_LOG still wins when set).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of the default location.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a palette from a prompt and preview its theme.
    Generate(GenerateArgs),

    /// Map a palette to a theme and write it out.
    Theme(ThemeArgs),

    /// Preview the theme derived from a palette.
    Preview(PreviewArgs),

    /// Browse previously generated palettes.
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// What the palette should evoke, e.g. "ocean sunset".
    pub prompt: String,

    /// Theme name (defaults to the prompt).
    #[arg(long)]
    pub name: Option<String>,

    /// Also write the theme in this format (vscode, vim, vsix).
    #[arg(long)]
    pub format: Option<ThemeFormat>,

    /// Output file or directory for --format.
    #[arg(long, value_name = "PATH", requires = "format")]
    pub out: Option<PathBuf>,

    /// Preview language (rust, python, go).
    #[arg(long)]
    pub language: Option<Language>,

    /// Keep the generated image.
    #[arg(long, value_name = "PATH")]
    pub save_image: Option<PathBuf>,

    /// Maximum number of palette colors.
    #[arg(long, default_value_t = pf_source::DEFAULT_MAX_COLORS)]
    pub colors: usize,
}

#[derive(Debug, Args)]
pub struct ThemeArgs {
    /// Palette colors as #rrggbb.
    #[arg(required = true, num_args = 1..)]
    pub colors: Vec<String>,

    #[arg(long, default_value = pf_theme::format::vscode::DEFAULT_NAME)]
    pub name: String,

    #[arg(long, default_value = "vscode")]
    pub format: ThemeFormat,

    /// Output file or directory. Text formats print to stdout without it.
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Palette colors as #rrggbb.
    #[arg(required = true, num_args = 1..)]
    pub colors: Vec<String>,

    #[arg(long, default_value = "Preview")]
    pub name: String,

    /// Preview language (rust, python, go).
    #[arg(long)]
    pub language: Option<Language>,

    /// Highlight this source file instead of the built-in sample.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum HistoryAction {
    /// List saved palettes, newest first.
    List,
    /// Show one palette by id.
    Show { id: String },
    /// Show the most recent palette.
    Last,
}
