//! Persistence backends.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::HistoryError;
use crate::history::HistoryEntry;

/// Where history entries live between runs.
pub trait HistoryStore {
    /// Read all stored entries, most recent first.
    ///
    /// # Errors
    ///
    /// Backend-specific read or decode failures.
    fn load(&self) -> Result<Vec<HistoryEntry>, HistoryError>;

    /// Replace the stored entries.
    ///
    /// # Errors
    ///
    /// Backend-specific write failures.
    fn save(&mut self, entries: &[HistoryEntry]) -> Result<(), HistoryError>;
}

// ---------------------------------------------------------------------------
// JSON file
// ---------------------------------------------------------------------------

/// Entries as a pretty-printed JSON array in a single file.
///
/// A missing file reads as an empty history. Parent directories are created
/// on the first save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> HistoryError {
        HistoryError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no history file at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(err) => return Err(self.io_error(err)),
        };
        serde_json::from_str(&text).map_err(|source| HistoryError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&mut self, entries: &[HistoryEntry]) -> Result<(), HistoryError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|err| self.io_error(err))?;
        }
        let json = serde_json::to_string_pretty(entries).map_err(|source| HistoryError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|err| self.io_error(err))?;
        debug!("saved {} history entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Memory
// ---------------------------------------------------------------------------

/// Keeps entries in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<HistoryEntry>,
}

impl MemoryStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// A store pre-filled with `entries`.
    #[must_use]
    pub const fn with_entries(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        Ok(self.entries.clone())
    }

    fn save(&mut self, entries: &[HistoryEntry]) -> Result<(), HistoryError> {
        self.entries = entries.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pf_term::Color;
    use pretty_assertions::assert_eq;

    fn entry(id: &str) -> HistoryEntry {
        HistoryEntry {
            id: id.into(),
            prompt: "dusk".into(),
            colors: vec![Color::rgb(0x1e, 0x1e, 0x1e), Color::WHITE],
            timestamp: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
        }
    }

    // ── JSON file ───────────────────────────────────────────────────

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("none.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn file_roundtrip_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.json");
        let mut store = JsonFileStore::new(&path);

        store.save(&[entry("2"), entry("1")]).unwrap();
        assert!(path.exists());
        assert_eq!(store.load().unwrap(), vec![entry("2"), entry("1")]);
    }

    #[test]
    fn colors_are_stored_as_hex() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let mut store = JsonFileStore::new(&path);
        store.save(&[entry("1")]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"#1e1e1e\""));
        assert!(raw.contains("\"#ffffff\""));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "{ not json").unwrap();
        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, HistoryError::Json { .. }));
    }

    // ── Memory ──────────────────────────────────────────────────────

    #[test]
    fn memory_store_keeps_last_save() {
        let mut store = MemoryStore::with_entries(vec![entry("1")]);
        assert_eq!(store.load().unwrap().len(), 1);
        store.save(&[]).unwrap();
        assert!(store.entries().is_empty());
    }
}
