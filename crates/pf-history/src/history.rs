//! The bounded history list.

use chrono::{DateTime, Utc};
use log::info;
use pf_term::Color;
use serde::{Deserialize, Serialize};

use crate::error::HistoryError;
use crate::store::HistoryStore;

/// Entries kept unless configured otherwise.
pub const DEFAULT_LIMIT: usize = 20;

/// One generated palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Creation time in Unix milliseconds, as a string.
    pub id: String,
    pub prompt: String,
    pub colors: Vec<Color>,
    pub timestamp: DateTime<Utc>,
}

/// Most-recent-first palette history backed by a [`HistoryStore`].
#[derive(Debug)]
pub struct PaletteHistory<S> {
    store: S,
    entries: Vec<HistoryEntry>,
    limit: usize,
}

impl<S: HistoryStore> PaletteHistory<S> {
    /// Load existing entries from `store`, keeping at most `limit`.
    ///
    /// A zero `limit` is treated as 1.
    ///
    /// # Errors
    ///
    /// Whatever the store reports.
    pub fn load(store: S, limit: usize) -> Result<Self, HistoryError> {
        let mut entries = store.load()?;
        let limit = limit.max(1);
        entries.truncate(limit);
        Ok(Self {
            store,
            entries,
            limit,
        })
    }

    /// Prepend a new entry, trim to the limit and persist.
    ///
    /// # Errors
    ///
    /// Store write failures. The in-memory list is updated either way.
    pub fn record(
        &mut self,
        prompt: &str,
        colors: Vec<Color>,
        now: DateTime<Utc>,
    ) -> Result<&HistoryEntry, HistoryError> {
        let entry = HistoryEntry {
            id: self.next_id(now),
            prompt: prompt.to_string(),
            colors,
            timestamp: now,
        };
        info!("recording palette {} for {:?}", entry.id, entry.prompt);

        self.entries.insert(0, entry);
        self.entries.truncate(self.limit);
        self.store.save(&self.entries)?;
        Ok(&self.entries[0])
    }

    /// The most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Millisecond timestamp, bumped past any id already in use.
    fn next_id(&self, now: DateTime<Utc>) -> String {
        let mut millis = now.timestamp_millis();
        loop {
            let id = millis.to_string();
            if self.get(&id).is_none() {
                return id;
            }
            millis += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{JsonFileStore, MemoryStore};
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 1, 9, 30, 0).unwrap()
    }

    fn history() -> PaletteHistory<MemoryStore> {
        PaletteHistory::load(MemoryStore::new(), DEFAULT_LIMIT).unwrap()
    }

    // ── Recording ───────────────────────────────────────────────────

    #[test]
    fn newest_first() {
        let mut h = history();
        h.record("first", vec![Color::BLACK], t0()).unwrap();
        h.record("second", vec![Color::WHITE], t0() + Duration::seconds(5)).unwrap();

        let prompts: Vec<&str> = h.entries().iter().map(|e| e.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["second", "first"]);
        assert_eq!(h.last().unwrap().prompt, "second");
    }

    #[test]
    fn id_is_unix_millis() {
        let mut h = history();
        let id = h.record("x", vec![], t0()).unwrap().id.clone();
        assert_eq!(id, t0().timestamp_millis().to_string());
        assert_eq!(h.get(&id).unwrap().prompt, "x");
        assert!(h.get("nope").is_none());
    }

    #[test]
    fn same_instant_gets_distinct_ids() {
        let mut h = history();
        h.record("a", vec![], t0()).unwrap();
        h.record("b", vec![], t0()).unwrap();
        assert_ne!(h.entries()[0].id, h.entries()[1].id);
    }

    #[test]
    fn trimmed_to_limit() {
        let mut h = history();
        for i in 0..25 {
            h.record(&format!("p{i}"), vec![], t0() + Duration::minutes(i)).unwrap();
        }
        assert_eq!(h.entries().len(), DEFAULT_LIMIT);
        assert_eq!(h.entries()[0].prompt, "p24");
        assert_eq!(h.entries()[DEFAULT_LIMIT - 1].prompt, "p5");
        assert_eq!(h.store().entries().len(), DEFAULT_LIMIT);
    }

    #[test]
    fn empty_history() {
        let h = history();
        assert!(h.last().is_none());
        assert!(h.entries().is_empty());
    }

    // ── Persistence ─────────────────────────────────────────────────

    #[test]
    fn reload_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut h = PaletteHistory::load(JsonFileStore::new(&path), DEFAULT_LIMIT).unwrap();
        h.record("forest", vec![Color::rgb(0x22, 0x8b, 0x22)], t0()).unwrap();

        let again = PaletteHistory::load(JsonFileStore::new(&path), DEFAULT_LIMIT).unwrap();
        assert_eq!(again.entries(), h.entries());
    }

    #[test]
    fn load_respects_smaller_limit() {
        let mut h = PaletteHistory::load(MemoryStore::new(), 5).unwrap();
        for i in 0..5 {
            h.record("p", vec![], t0() + Duration::minutes(i)).unwrap();
        }
        let store = MemoryStore::with_entries(h.entries().to_vec());
        let smaller = PaletteHistory::load(store, 2).unwrap();
        assert_eq!(smaller.entries().len(), 2);
        assert_eq!(smaller.limit(), 2);
    }
}
