use std::path::Path;
use std::time::Duration;

use jpdict_core::{Dictionary, Entry, EntryId, EntryLoader, SearchError};
use tokio::runtime::Handle;

use crate::loader::JsonEntryLoader;
use crate::query::QueryResolver;
use crate::romaji::Romanizer;
use crate::search::TermSearch;
use crate::tables::IndexTables;

/// Japanese-English dictionary: query resolution plus entry loading
pub struct JapaneseDictionary {
    resolver: QueryResolver,
    entries: Box<dyn EntryLoader>,
}

impl JapaneseDictionary {
    pub fn new(tables: IndexTables, romanizer: Romanizer, entries: Box<dyn EntryLoader>) -> Self {
        Self {
            resolver: QueryResolver::new(TermSearch::new(tables, romanizer)),
            entries,
        }
    }

    /// Dictionary over the JSON indices and entry files in `data_dir`
    pub fn open(data_dir: &Path, ttl: Duration, runtime: Handle) -> Self {
        Self::new(
            IndexTables::from_data_dir(data_dir, ttl, runtime),
            Romanizer::new(),
            Box::new(JsonEntryLoader::new(data_dir)),
        )
    }

    pub fn resolver(&self) -> &QueryResolver {
        &self.resolver
    }

    pub fn tables(&self) -> &IndexTables {
        self.resolver.search().tables()
    }

    /// Ranked entries for `query`; empty or blank queries give no entries
    pub fn search_dictionary(&self, query: &str) -> Result<Vec<Entry>, SearchError> {
        let ids = self.resolver.resolve(query)?;
        self.load(&ids)
    }

    /// Like `search_dictionary`, with every term read as English
    pub fn search_english(&self, query: &str) -> Result<Vec<Entry>, SearchError> {
        let ids = self.resolver.resolve_english(query)?;
        self.load(&ids)
    }

    fn load(&self, ids: &[EntryId]) -> Result<Vec<Entry>, SearchError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.entries.load_entries(ids).map_err(SearchError::Entries)
    }
}

impl Dictionary for JapaneseDictionary {
    fn search(&self, query: &str) -> Result<Vec<Entry>, SearchError> {
        self.search_dictionary(query)
    }
}
