// SPDX-License-Identifier: MIT
//
// Subcommand bodies. Each takes parsed arguments plus the loaded config and
// writes its human-facing output to the given writer.

use std::fs::{self, File};
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Utc;
use log::{info, warn};
use pf_history::{HistoryEntry, JsonFileStore, PaletteHistory, time_ago, truncate_prompt};
use pf_preview::{
    Highlighter, Language, render_code, render_legend, render_preview, render_swatches,
};
use pf_source::{HuggingFaceClient, palette_from_prompt};
use pf_term::{Color, Style};
use pf_theme::{Palette, RoleTable, Theme, ThemeFormat, map_palette_with};

use crate::cli::{GenerateArgs, HistoryAction, PreviewArgs, ThemeArgs};
use crate::config::Config;

// ─── generate ───────────────────────────────────────────────────────────────

pub fn generate(args: GenerateArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let client = HuggingFaceClient::new(&config.hugging_face()?)?;
    let generated = palette_from_prompt(&client, &args.prompt, args.colors)?;

    if let Some(path) = &args.save_image {
        fs::write(path, &generated.image)
            .with_context(|| format!("saving image to {}", path.display()))?;
        info!("saved image to {}", path.display());
    }

    // History failures are logged, not fatal.
    match open_history(config) {
        Ok(mut history) => {
            if let Err(err) = history.record(&generated.prompt, generated.colors.clone(), Utc::now()) {
                warn!("could not save history: {err}");
            }
        }
        Err(err) => warn!("could not load history: {err:#}"),
    }

    let name = args.name.unwrap_or_else(|| generated.prompt.clone());
    let theme = theme_from_colors(generated.colors.clone(), &name)?;
    let language = match args.language {
        Some(language) => language,
        None => config.preview_language()?,
    };

    show(&theme, &generated.colors, language, out)?;

    if let Some(format) = args.format {
        let path = write_theme_file(&theme, format, args.out.as_deref())?;
        writeln!(out, "wrote {}", path.display())?;
    }
    Ok(())
}

// ─── theme ──────────────────────────────────────────────────────────────────

pub fn theme(args: ThemeArgs, out: &mut impl Write) -> Result<()> {
    let palette = Palette::parse(args.colors.as_slice())?;
    let theme = map_palette_with(&palette, &args.name, &RoleTable::CANONICAL);

    match args.out {
        None if args.format.is_text() => {
            let mut buf = Cursor::new(Vec::new());
            args.format.write(&theme, &mut buf)?;
            out.write_all(buf.get_ref())?;
        }
        target => {
            let path = write_theme_file(&theme, args.format, target.as_deref())?;
            writeln!(out, "wrote {}", path.display())?;
        }
    }
    Ok(())
}

// ─── preview ────────────────────────────────────────────────────────────────

pub fn preview(args: PreviewArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let palette = Palette::parse(args.colors.as_slice())?;
    let theme = map_palette_with(&palette, &args.name, &RoleTable::CANONICAL);
    let language = match args.language.or_else(|| args.file.as_deref().and_then(Language::detect)) {
        Some(language) => language,
        None => config.preview_language()?,
    };

    match &args.file {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            render_swatches(palette.colors(), out)?;
            writeln!(out)?;
            let mut highlighter = Highlighter::new(language)?;
            render_code(&theme, &mut highlighter, &source, out)?;
        }
        None => show(&theme, palette.colors(), language, out)?,
    }
    writeln!(out)?;
    render_legend(&theme, out)?;
    Ok(())
}

// ─── history ────────────────────────────────────────────────────────────────

pub fn history(action: Option<HistoryAction>, config: &Config, out: &mut impl Write) -> Result<()> {
    let history = open_history(config)?;

    match action.unwrap_or(HistoryAction::List) {
        HistoryAction::List => list_history(history.entries(), out),
        HistoryAction::Show { id } => {
            let Some(entry) = history.get(&id) else {
                bail!("no palette with id {id}");
            };
            show_entry(entry, config, out)
        }
        HistoryAction::Last => {
            let Some(entry) = history.last() else {
                bail!("history is empty");
            };
            show_entry(entry, config, out)
        }
    }
}

fn list_history(entries: &[HistoryEntry], out: &mut impl Write) -> Result<()> {
    if entries.is_empty() {
        writeln!(out, "no palettes yet")?;
        return Ok(());
    }
    let now = Utc::now();
    for entry in entries {
        write!(out, "{:<15} {:>10}  ", entry.id, time_ago(entry.timestamp, now))?;
        for &color in &entry.colors {
            Style {
                bg: Some(color),
                ..Style::default()
            }
            .paint(out, "  ")?;
        }
        writeln!(out, "  {}", truncate_prompt(&entry.prompt))?;
    }
    Ok(())
}

fn show_entry(entry: &HistoryEntry, config: &Config, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}  {}", entry.id, entry.timestamp.format("%Y-%m-%d %H:%M"))?;
    let theme = theme_from_colors(entry.colors.clone(), &entry.prompt)?;
    show(&theme, &entry.colors, config.preview_language()?, out)
}

// ─── Shared ─────────────────────────────────────────────────────────────────

fn open_history(config: &Config) -> Result<PaletteHistory<JsonFileStore>> {
    let path = config.history_path();
    PaletteHistory::load(JsonFileStore::new(&path), config.history.limit)
        .with_context(|| format!("loading history from {}", path.display()))
}

fn theme_from_colors(colors: Vec<Color>, name: &str) -> Result<Theme> {
    let palette = Palette::new(colors)?;
    Ok(map_palette_with(&palette, name, &RoleTable::CANONICAL))
}

fn show(theme: &Theme, colors: &[Color], language: Language, out: &mut impl Write) -> Result<()> {
    render_swatches(colors, out)?;
    writeln!(out)?;
    render_preview(theme, language, out)?;
    Ok(())
}

/// Write `theme` to `target`, or to its default file name in the current
/// directory. A directory target receives the default file name.
fn write_theme_file(theme: &Theme, format: ThemeFormat, target: Option<&Path>) -> Result<PathBuf> {
    let default_name = format.file_name(theme);
    let path = match target {
        Some(dir) if dir.is_dir() => dir.join(default_name),
        Some(file) => file.to_path_buf(),
        None => PathBuf::from(default_name),
    };

    let mut file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    format
        .write(theme, &mut file)
        .with_context(|| format!("writing {format} theme to {}", path.display()))?;
    file.flush()?;
    info!("wrote {format} theme to {}", path.display());
    Ok(path)
}
