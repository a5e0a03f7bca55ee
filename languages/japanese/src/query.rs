use std::collections::{HashMap, HashSet};

use jpdict_core::{DefaultPreprocessor, EntryId, Preprocessor, SearchError};

use crate::search::{RankedIds, TermSearch};

/// Merge independent per-term results.
///
/// Ids matching more terms come first; ties go to the lower of each id's
/// worst per-term position. Equal scores keep first-seen order.
pub fn merge_term_results(per_term: &[RankedIds]) -> Vec<EntryId> {
    let positions: Vec<HashMap<EntryId, usize>> = per_term.iter().map(RankedIds::positions).collect();

    let mut seen = HashSet::new();
    let mut candidates: Vec<EntryId> = per_term
        .iter()
        .flat_map(|ranked| ranked.ids().iter().copied())
        .filter(|id| seen.insert(*id))
        .collect();

    let total = per_term.len();
    candidates.sort_by_cached_key(|id| {
        let matched: Vec<usize> = positions.iter().filter_map(|p| p.get(id).copied()).collect();
        let missing = total - matched.len();
        // Worst position among the matched terms, not the best
        let tie_break = matched.into_iter().max().unwrap_or(usize::MAX);
        (missing, tie_break)
    });

    candidates
}

/// Splits a query into terms and ranks the combined matches
pub struct QueryResolver {
    search: TermSearch,
    preprocessor: DefaultPreprocessor,
}

impl QueryResolver {
    pub fn new(search: TermSearch) -> Self {
        Self {
            search,
            preprocessor: DefaultPreprocessor,
        }
    }

    pub fn search(&self) -> &TermSearch {
        &self.search
    }

    /// Each term classified on its own as romaji, English or native script
    pub fn resolve(&self, query: &str) -> Result<Vec<EntryId>, SearchError> {
        self.resolve_with(query, |term| self.search.search_single_term(term))
    }

    /// Every term treated as English, even when it reads as romaji
    pub fn resolve_english(&self, query: &str) -> Result<Vec<EntryId>, SearchError> {
        self.resolve_with(query, |term| self.search.search_english(term))
    }

    fn resolve_with<F>(&self, query: &str, search_term: F) -> Result<Vec<EntryId>, SearchError>
    where
        F: Fn(&str) -> Result<RankedIds, SearchError>,
    {
        let query = self.preprocessor.process(query);
        let terms: Vec<&str> = query.split_whitespace().collect();
        tracing::debug!("Resolving {} term(s): {:?}", terms.len(), terms);

        match terms.as_slice() {
            [] => Ok(Vec::new()),
            [term] => Ok(search_term(*term)?.into_ids()),
            _ => {
                let per_term = terms
                    .iter()
                    .map(|term| search_term(*term))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(merge_term_results(&per_term))
            }
        }
    }
}
