pub mod dictionary;
pub mod error;
pub mod lazy_table;
pub mod preprocess;
pub mod types;

pub use dictionary::{Dictionary, EntryLoader};
pub use error::{LoadError, QueryError, SearchError, TranslitError};
pub use lazy_table::{DEFAULT_TTL, LazyTable};
pub use preprocess::{DefaultPreprocessor, Preprocessor};
pub use types::{DEFAULT_RANK, Entry, EntryId, Meaning, Rank};
