pub mod dictionary;
pub mod en_terms;
pub mod loader;
pub mod query;
pub mod romaji;
pub mod search;
pub mod tables;

#[cfg(test)]
mod tests;

pub use dictionary::JapaneseDictionary;
pub use en_terms::{make_en_terms, stem_word};
pub use loader::JsonEntryLoader;
pub use query::{QueryResolver, merge_term_results};
pub use romaji::Romanizer;
pub use search::{RankedIds, TermSearch, Tier};
pub use tables::{EnTermIndex, FormIndex, IndexTables, RankIndex};
