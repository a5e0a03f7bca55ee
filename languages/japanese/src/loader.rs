use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use jpdict_core::{Entry, EntryId, EntryLoader, LoadError};

use crate::tables::load_json_table;

pub const ENTRIES_DIR: &str = "entries";

/// Loads per-entry JSON records from `<data_dir>/entries/<id>.json`
pub struct JsonEntryLoader {
    entries_dir: PathBuf,
}

impl JsonEntryLoader {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            entries_dir: data_dir.join(ENTRIES_DIR),
        }
    }

    pub fn load_entry(&self, id: EntryId) -> Result<Entry, LoadError> {
        let path = self.entries_dir.join(format!("{id}.json"));
        load_json_table(&path).map_err(|e| match e {
            LoadError::FileNotFound(_) => LoadError::MissingEntry(id),
            LoadError::IoError(io) if io.kind() == ErrorKind::NotFound => LoadError::MissingEntry(id),
            other => other,
        })
    }
}

impl EntryLoader for JsonEntryLoader {
    fn load_entries(&self, ids: &[EntryId]) -> Result<Vec<Entry>, LoadError> {
        tracing::debug!("Loading {} entries from {}", ids.len(), self.entries_dir.display());
        ids.iter().map(|&id| self.load_entry(id)).collect()
    }
}
