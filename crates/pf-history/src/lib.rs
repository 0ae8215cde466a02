//! # pf-history: recently generated palettes
//!
//! A most-recent-first list of prompts and the palettes they produced,
//! capped at [`DEFAULT_LIMIT`] entries. Persistence goes through the
//! [`HistoryStore`] trait so the list logic never touches the filesystem
//! directly.

pub mod error;
pub mod history;
pub mod label;
pub mod store;

pub use error::HistoryError;
pub use history::{DEFAULT_LIMIT, HistoryEntry, PaletteHistory};
pub use label::{PROMPT_LABEL_WIDTH, time_ago, truncate_prompt};
pub use store::{HistoryStore, JsonFileStore, MemoryStore};
