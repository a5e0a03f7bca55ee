use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_table_ttl_secs() -> u64 {
    30 * 60
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Directory holding the index files and the `entries/` folder
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Idle seconds before a loaded index is dropped
    #[serde(default = "default_table_ttl_secs")]
    pub table_ttl_secs: u64,
}

impl DictionaryConfig {
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    pub fn table_ttl(&self) -> Duration {
        Duration::from_secs(self.table_ttl_secs)
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            table_ttl_secs: default_table_ttl_secs(),
        }
    }
}
