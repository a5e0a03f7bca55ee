use jpdict_core::{Entry, QueryError, SearchError};

pub type QueryFn = Box<dyn Fn(&str) -> Result<Vec<Entry>, SearchError> + Send + Sync>;

/// Last query, its results and a cursor over them
pub struct QuerySession {
    primary: QueryFn,
    backup: Option<QueryFn>,
    query: String,
    results: Vec<Entry>,
    cursor: usize,
}

impl QuerySession {
    pub fn new(primary: QueryFn) -> Self {
        Self {
            primary,
            backup: None,
            query: String::new(),
            results: Vec::new(),
            cursor: 0,
        }
    }

    pub fn with_backup(mut self, backup: QueryFn) -> Self {
        self.backup = Some(backup);
        self
    }

    /// Run the primary strategy; returns the best result
    pub fn query(&mut self, text: &str) -> Result<Option<&Entry>, QueryError> {
        self.query = text.to_string();
        self.results = (self.primary)(&self.query)?;
        self.cursor = 0;
        Ok(self.current())
    }

    /// Run the backup strategy on `text`, or on the previous query when `None`
    pub fn backup_query(&mut self, text: Option<&str>) -> Result<Option<&Entry>, QueryError> {
        let Some(backup) = &self.backup else {
            return Err(QueryError::NoBackupQuery);
        };
        if let Some(text) = text {
            self.query = text.to_string();
        }
        tracing::debug!("Backup query: {}", self.query);
        self.results = backup(&self.query)?;
        self.cursor = 0;
        Ok(self.current())
    }

    pub fn last_query(&self) -> &str {
        &self.query
    }

    pub fn current(&self) -> Option<&Entry> {
        self.results.get(self.cursor)
    }

    /// 1-based number of the current result
    pub fn position(&self) -> usize {
        self.cursor + 1
    }

    /// Move to the next result; `None` (cursor unchanged) at the end
    pub fn next_result(&mut self) -> Option<&Entry> {
        if self.cursor + 1 >= self.results.len() {
            return None;
        }
        self.cursor += 1;
        self.current()
    }

    /// Move to the previous result; `None` (cursor unchanged) at the start
    pub fn previous_result(&mut self) -> Option<&Entry> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.current()
    }

    pub fn all(&self) -> &[Entry] {
        &self.results
    }

    pub fn into_results(self) -> Vec<Entry> {
        self.results
    }
}
