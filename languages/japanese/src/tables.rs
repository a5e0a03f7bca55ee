//! Index registry: the four lazily loaded tables the search engine reads.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use jpdict_core::{EntryId, LazyTable, LoadError, Rank};
use serde::de::DeserializeOwned;
use tokio::runtime::Handle;

/// Entry id -> surface forms (kana or kanji), in entry order
pub type FormIndex = BTreeMap<EntryId, Vec<String>>;

/// Entry id -> popularity rank
pub type RankIndex = BTreeMap<EntryId, Rank>;

/// Entry id -> English term stems, in order of appearance across the entry's meanings
pub type EnTermIndex = BTreeMap<EntryId, Vec<String>>;

pub const KANA_TABLE_JSON: &str = "kana.json";
pub const KANJI_TABLE_JSON: &str = "kanji.json";
pub const RANK_TABLE_JSON: &str = "ranks.json";
pub const EN_TERMS_TABLE_JSON: &str = "en_terms.json";

/// Read one JSON table file
pub fn load_json_table<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let data = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::FileNotFound(path.display().to_string()),
        _ => LoadError::IoError(e),
    })?;
    serde_json::from_str(&data).map_err(|source| LoadError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}

fn json_loader<T: DeserializeOwned>(path: PathBuf) -> impl Fn() -> Result<T, LoadError> + Send + Sync + 'static {
    move || load_json_table(&path)
}

pub struct IndexTables {
    pub kana: LazyTable<FormIndex>,
    pub kanji: LazyTable<FormIndex>,
    pub ranks: LazyTable<RankIndex>,
    pub en_terms: LazyTable<EnTermIndex>,
}

impl IndexTables {
    /// Tables backed by the JSON files in `data_dir`
    pub fn from_data_dir(data_dir: &Path, ttl: Duration, runtime: Handle) -> Self {
        tracing::info!("Using dictionary indices in {}", data_dir.display());
        Self::from_loaders(
            ttl,
            runtime,
            json_loader::<FormIndex>(data_dir.join(KANA_TABLE_JSON)),
            json_loader::<FormIndex>(data_dir.join(KANJI_TABLE_JSON)),
            json_loader::<RankIndex>(data_dir.join(RANK_TABLE_JSON)),
            json_loader::<EnTermIndex>(data_dir.join(EN_TERMS_TABLE_JSON)),
        )
    }

    pub fn from_loaders<K, J, R, E>(
        ttl: Duration,
        runtime: Handle,
        kana: K,
        kanji: J,
        ranks: R,
        en_terms: E,
    ) -> Self
    where
        K: Fn() -> Result<FormIndex, LoadError> + Send + Sync + 'static,
        J: Fn() -> Result<FormIndex, LoadError> + Send + Sync + 'static,
        R: Fn() -> Result<RankIndex, LoadError> + Send + Sync + 'static,
        E: Fn() -> Result<EnTermIndex, LoadError> + Send + Sync + 'static,
    {
        Self {
            kana: LazyTable::new("kana", ttl, runtime.clone(), kana),
            kanji: LazyTable::new("kanji", ttl, runtime.clone(), kanji),
            ranks: LazyTable::new("rank", ttl, runtime.clone(), ranks),
            en_terms: LazyTable::new("en_terms", ttl, runtime, en_terms),
        }
    }

    /// Drop every cached table
    pub fn evict_all(&self) {
        self.kana.evict();
        self.kanji.evict();
        self.ranks.evict();
        self.en_terms.evict();
    }
}
