use jpdict_core::{DEFAULT_TTL, EntryId, LoadError, SearchError};
use tokio::runtime::Handle;

use super::fixtures::*;
use crate::search::{TermSearch, Tier};
use crate::tables::{FormIndex, IndexTables};
use crate::Romanizer;

/// Best tier an id reaches for `term` over `index`
fn best_tier(index: &FormIndex, id: EntryId, term: &str) -> Tier {
    index[&id]
        .iter()
        .filter_map(|value| Tier::classify(value, term))
        .min()
        .expect("id was returned without matching")
}

fn assert_tiered(index: &FormIndex, term: &str, ids: &[EntryId]) {
    let keys: Vec<(Tier, u32)> = ids.iter().map(|&id| (best_tier(index, id, term), rank(id))).collect();
    for pair in keys.windows(2) {
        assert!(pair[0] <= pair[1], "'{term}' out of order: {keys:?}");
    }
}

#[tokio::test]
async fn native_results_are_tiered_then_ranked() {
    let search = term_search();
    let kana = kana_index();
    let kanji = kanji_index();

    for term in ["まじ", "まじょ", "こん", "こんばん", "じょ", "ま"] {
        let ranked = search.search_kana(term).unwrap();
        assert!(!ranked.is_empty(), "no kana results for {term}");
        assert_tiered(&kana, term, ranked.ids());
    }

    for term in ["魔", "魔女", "今晩", "少女"] {
        let ranked = search.search_native(term, &search.tables().kanji).unwrap();
        assert_tiered(&kanji, term, ranked.ids());
    }
}

#[tokio::test]
async fn kana_prefix_tier_by_rank() {
    let search = term_search();
    // こんちは and こんにちは both prefix-match but the entry is listed once
    assert_eq!(search.search_kana("こん").unwrap().ids(), &[KONBAN, KONNICHIWA, KONBANWA]);
}

#[tokio::test]
async fn id_keeps_only_its_best_tier() {
    let search = term_search();
    let ranked = search.search_kanji("魔女").unwrap();
    // 白魔女 would put SHIROMAJO in the substring tier too; its exact form wins
    assert_eq!(ranked.ids(), &[MAJO, SHIROMAJO, MAJOKKO]);
}

#[tokio::test]
async fn kanji_falls_back_to_kana() {
    let search = term_search();
    assert!(search.search_native("まじ", &search.tables().kanji).unwrap().is_empty());

    let ranked = search.search_kanji("まじ").unwrap();
    assert_eq!(ranked.ids()[0], MAJI);
    assert!(ranked.ids().contains(&MAJO));
}

#[tokio::test]
async fn english_ranks_by_popularity_then_position() {
    let search = term_search();
    assert_eq!(
        search.search_english("witch").unwrap().ids(),
        &[MAJO, MAHOUTSUKAI, MAJOKKO, SHIROMAJO]
    );
    // Equal rank: "girl" is 2nd of 2 terms in 魔法少女 but 4th of 4 in 魔女っ子
    assert_eq!(search.search_english("girl").unwrap().ids(), &[SHOUJO, MAHOU_SHOUJO, MAJOKKO]);
}

#[tokio::test]
async fn english_term_is_stemmed() {
    let search = term_search();
    assert_eq!(search.search_english("Witch!").unwrap().ids()[0], MAJO);
    assert!(search.search_english("...").unwrap().is_empty());
    assert!(search.search_english("wit").unwrap().is_empty());
}

#[tokio::test]
async fn ascii_is_romaji_or_english_never_both() {
    let search = term_search();

    assert_eq!(search.search_ascii("majo").unwrap().ids()[0], MAJO);
    assert_eq!(search.search_ascii("witch").unwrap().ids()[0], MAJO);
    assert_eq!(search.search_ascii("hello").unwrap().ids(), &[KONNICHIWA]);

    // "tonight" fails as romaji only at "ght", so it goes to English
    assert_eq!(search.search_ascii("tonight").unwrap().ids(), &[KONBAN]);

    // Transliterates to いた; no kana match and no English retry
    assert!(search.search_ascii("ita").unwrap().is_empty());
}

#[tokio::test]
async fn single_term_classification() {
    let search = term_search();
    assert_eq!(search.search_single_term("konban").unwrap().ids(), &[KONBAN, KONBANWA]);
    assert_eq!(search.search_single_term("魔女").unwrap().ids()[0], MAJO);
    assert_eq!(search.search_single_term("まじょ").unwrap().ids()[0], MAJO);
}

#[tokio::test]
async fn tables_load_once_across_searches() {
    let (tables, counts) = tables();
    let search = TermSearch::new(tables, Romanizer::new());

    search.search_single_term("majo").unwrap();
    search.search_single_term("konban").unwrap();
    search.search_single_term("witch").unwrap();

    assert_eq!(LoadCounts::get(&counts.kana), 1);
    assert_eq!(LoadCounts::get(&counts.ranks), 1);
    assert_eq!(LoadCounts::get(&counts.en_terms), 1);
    // Only romaji and English so far
    assert_eq!(LoadCounts::get(&counts.kanji), 0);
}

#[tokio::test]
async fn unavailable_index_is_an_error_not_empty() {
    let tables = IndexTables::from_loaders(
        DEFAULT_TTL,
        Handle::current(),
        || Ok(kana_index()),
        || Err(LoadError::FileNotFound("kanji.json".to_string())),
        || Ok(rank_index()),
        || Ok(en_terms_index()),
    );
    let search = TermSearch::new(tables, Romanizer::new());

    assert!(matches!(
        search.search_single_term("魔女"),
        Err(SearchError::TableUnavailable { table: "kanji", .. })
    ));
    // Other tables are unaffected
    assert_eq!(search.search_single_term("majo").unwrap().ids()[0], MAJO);
}
