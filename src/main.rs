// SPDX-License-Identifier: MIT
//
// palette-forge: text prompt → color palette → editor theme.
//
// This binary wires the crates together:
//
//   pf-source  → image generation, dominant-color extraction
//   pf-theme   → palette → Theme, VS Code / Vim serializers
//   pf-preview → swatches and highlighted code in the terminal
//   pf-history → recently generated palettes
//
// Flow of `pforge generate "ocean sunset"`:
//
//   prompt → Hugging Face → image bytes → extract_palette → history
//          → map_palette → render_swatches + render_preview [→ theme file]

mod cli;
mod commands;
mod config;

use std::env;
use std::io::{self, Write};
use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::{Config, TOKEN_ENV};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("pforge: {err:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_env_token(env::var(TOKEN_ENV).ok());
    config.validate()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Generate(args) => commands::generate(args, &config, &mut out)?,
        Command::Theme(args) => commands::theme(args, &mut out)?,
        Command::Preview(args) => commands::preview(args, &config, &mut out)?,
        Command::History { action } => commands::history(action, &config, &mut out)?,
    }
    out.flush()?;
    Ok(())
}
