use std::sync::Arc;

use jpdict_config::Config;
use jpdict_lang_japanese::JapaneseDictionary;
use tokio::runtime::Handle;

use crate::session::QuerySession;

pub struct AppState {
    pub config: Config,
    pub dictionary: Arc<JapaneseDictionary>,
}

impl AppState {
    pub fn new(config: Config, runtime: Handle) -> Self {
        let dictionary = JapaneseDictionary::open(
            &config.dictionary.data_path(),
            config.dictionary.table_ttl(),
            runtime,
        );

        Self {
            config,
            dictionary: Arc::new(dictionary),
        }
    }

    /// Session with the full resolver as primary and English-only as backup
    pub fn session(&self) -> QuerySession {
        let primary = Arc::clone(&self.dictionary);
        let backup = Arc::clone(&self.dictionary);
        QuerySession::new(Box::new(move |query: &str| primary.search_dictionary(query)))
            .with_backup(Box::new(move |query: &str| backup.search_english(query)))
    }
}
