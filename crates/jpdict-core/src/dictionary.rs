use crate::error::{LoadError, SearchError};
use crate::types::{Entry, EntryId};

/// Query-to-entries lookup
pub trait Dictionary: Send + Sync {
    /// Entries matching `query`, most relevant first. Callers must not re-sort.
    fn search(&self, query: &str) -> Result<Vec<Entry>, SearchError>;
}

/// Fetch full entries once the final ranking is known
pub trait EntryLoader: Send + Sync {
    /// Load entries for `ids`, preserving their order
    fn load_entries(&self, ids: &[EntryId]) -> Result<Vec<Entry>, LoadError>;
}
