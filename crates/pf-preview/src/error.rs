//! Preview errors.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error("unsupported preview language {0:?} (expected rust, python or go)")]
    UnsupportedLanguage(String),

    #[error("failed to load grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    #[error("failed to compile highlight query: {0}")]
    Query(#[from] tree_sitter::QueryError),

    #[error("parser produced no syntax tree")]
    Parse,

    #[error(transparent)]
    Io(#[from] io::Error),
}
