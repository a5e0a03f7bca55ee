//! Single-term search over the index tables.
//!
//! Native-script terms are matched by a tiered scan (exact, then prefix, then
//! substring, each tier ordered by popularity). English terms are matched by
//! stem membership, ordered by popularity and then by how early the stem
//! appears in the entry's meanings.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use jpdict_core::{DEFAULT_RANK, EntryId, LazyTable, Rank, SearchError};

use crate::en_terms::stem_word;
use crate::romaji::Romanizer;
use crate::tables::{FormIndex, IndexTables, RankIndex};

/// Candidate ids for one term, best first.
///
/// An id's position doubles as its relative quality (lower = better).
/// Each id appears once, at its best position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedIds {
    ids: Vec<EntryId>,
}

impl RankedIds {
    pub fn ids(&self) -> &[EntryId] {
        &self.ids
    }

    pub fn into_ids(self) -> Vec<EntryId> {
        self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// id -> zero-based position
    pub fn positions(&self) -> HashMap<EntryId, usize> {
        self.ids.iter().enumerate().map(|(pos, &id)| (id, pos)).collect()
    }
}

impl FromIterator<EntryId> for RankedIds {
    /// Keeps the first occurrence of each id
    fn from_iter<I: IntoIterator<Item = EntryId>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let ids = iter.into_iter().filter(|id| seen.insert(*id)).collect();
        Self { ids }
    }
}

/// Native-script match class, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Exact = 0,
    Prefix = 1,
    Substring = 2,
}

impl Tier {
    pub fn classify(value: &str, term: &str) -> Option<Tier> {
        if value == term {
            Some(Tier::Exact)
        } else if value.starts_with(term) {
            Some(Tier::Prefix)
        } else if value.contains(term) {
            Some(Tier::Substring)
        } else {
            None
        }
    }
}

fn rank_of(ranks: &RankIndex, id: EntryId) -> Rank {
    ranks.get(&id).copied().unwrap_or(DEFAULT_RANK)
}

fn contents<T: Send + Sync + 'static>(table: &LazyTable<T>) -> Result<Arc<T>, SearchError> {
    table.contents().map_err(|source| SearchError::TableUnavailable {
        table: table.name(),
        source,
    })
}

pub struct TermSearch {
    tables: IndexTables,
    romanizer: Romanizer,
}

impl TermSearch {
    pub fn new(tables: IndexTables, romanizer: Romanizer) -> Self {
        Self { tables, romanizer }
    }

    pub fn tables(&self) -> &IndexTables {
        &self.tables
    }

    pub fn romanizer(&self) -> &Romanizer {
        &self.romanizer
    }

    /// Tiered scan of a kana or kanji index
    pub fn search_native(&self, term: &str, table: &LazyTable<FormIndex>) -> Result<RankedIds, SearchError> {
        if term.is_empty() {
            return Ok(RankedIds::default());
        }

        let index = contents(table)?;
        let ranks = contents(&self.tables.ranks)?;

        let mut tiers: [Vec<EntryId>; 3] = Default::default();
        for (&id, values) in index.iter() {
            for value in values {
                if let Some(tier) = Tier::classify(value, term) {
                    tiers[tier as usize].push(id);
                }
            }
        }

        for tier in &mut tiers {
            tier.sort_by_key(|&id| rank_of(&ranks, id));
        }

        let ranked: RankedIds = tiers.into_iter().flatten().collect();
        tracing::debug!("{} search for '{}': {} results", table.name(), term, ranked.len());
        Ok(ranked)
    }

    pub fn search_kana(&self, term: &str) -> Result<RankedIds, SearchError> {
        self.search_native(term, &self.tables.kana)
    }

    /// Kanji search, falling back to kana when no kanji form matches
    pub fn search_kanji(&self, term: &str) -> Result<RankedIds, SearchError> {
        let ranked = self.search_native(term, &self.tables.kanji)?;
        if !ranked.is_empty() {
            return Ok(ranked);
        }
        self.search_kana(term)
    }

    /// Exact stem membership in each entry's English terms
    pub fn search_english(&self, term: &str) -> Result<RankedIds, SearchError> {
        let stem = stem_word(term);
        if stem.is_empty() {
            return Ok(RankedIds::default());
        }

        let index = contents(&self.tables.en_terms)?;
        let ranks = contents(&self.tables.ranks)?;

        let mut scored: Vec<(Rank, f64, EntryId)> = index
            .iter()
            .filter_map(|(&id, terms)| {
                let at = terms.iter().position(|t| *t == stem)?;
                Some((rank_of(&ranks, id), at as f64 / terms.len() as f64, id))
            })
            .collect();
        scored.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));

        tracing::debug!("English search for '{}': {} results", stem, scored.len());
        Ok(scored.into_iter().map(|(_, _, id)| id).collect())
    }

    /// Romaji if it transliterates, English otherwise; never both
    pub fn search_ascii(&self, term: &str) -> Result<RankedIds, SearchError> {
        match self.romanizer.convert(term) {
            Ok(kana) => {
                tracing::debug!("'{}' read as romaji: {}", term, kana);
                self.search_kana(&kana)
            }
            Err(e) => {
                tracing::debug!("{e}; searching as English");
                self.search_english(term)
            }
        }
    }

    pub fn search_single_term(&self, term: &str) -> Result<RankedIds, SearchError> {
        if term.is_ascii() {
            self.search_ascii(term)
        } else {
            self.search_kanji(term)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_tiers() {
        assert_eq!(Tier::classify("まじょ", "まじょ"), Some(Tier::Exact));
        assert_eq!(Tier::classify("まじょっこ", "まじょ"), Some(Tier::Prefix));
        assert_eq!(Tier::classify("しろまじょ", "まじょ"), Some(Tier::Substring));
        assert_eq!(Tier::classify("まほう", "まじょ"), None);
        assert!(Tier::Exact < Tier::Prefix && Tier::Prefix < Tier::Substring);
    }

    #[test]
    fn ranked_ids_keep_first_occurrence() {
        let ranked: RankedIds = [5, 3, 5, 9, 3].into_iter().collect();
        assert_eq!(ranked.ids(), &[5, 3, 9]);
        assert_eq!(ranked.positions()[&9], 2);
    }
}
