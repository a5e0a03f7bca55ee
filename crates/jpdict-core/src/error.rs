use std::path::PathBuf;

use crate::types::EntryId;

/// Failure to produce a table or entry from its backing data
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Parse error in {path}: {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No stored entry for id {0}")]
    MissingEntry(EntryId),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// No romaji prefix matched at some position of `word`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot convert {word} to kana")]
pub struct TranslitError {
    pub word: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("{table} index unavailable: {source}")]
    TableUnavailable {
        table: &'static str,
        #[source]
        source: LoadError,
    },

    #[error("failed to load entries: {0}")]
    Entries(#[source] LoadError),
}

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("no backup query configured")]
    NoBackupQuery,

    #[error(transparent)]
    Search(#[from] SearchError),
}
