use jpdict_core::{Dictionary, EntryId, LoadError, SearchError};

use super::fixtures::*;
use crate::{JapaneseDictionary, Romanizer};

fn first_id(dict: &JapaneseDictionary, query: &str) -> EntryId {
    dict.search_dictionary(query).unwrap()[0].id
}

#[tokio::test]
async fn blank_query_is_empty_not_error() {
    let dict = dictionary();
    assert!(dict.search_dictionary("").unwrap().is_empty());
    assert!(dict.search_dictionary("  \t ").unwrap().is_empty());
}

#[tokio::test]
async fn english_query() {
    let dict = dictionary();
    assert_eq!(first_id(&dict, "witch"), MAJO);
    assert_eq!(first_id(&dict, "hello"), KONNICHIWA);
}

#[tokio::test]
async fn romaji_query() {
    let dict = dictionary();
    assert_eq!(first_id(&dict, "majo"), MAJO);
    assert_eq!(first_id(&dict, "konban"), KONBAN);
}

#[tokio::test]
async fn native_queries() {
    let dict = dictionary();
    assert_eq!(first_id(&dict, "魔女"), MAJO);
    assert_eq!(first_id(&dict, "まじょ"), MAJO);
}

#[tokio::test]
async fn query_is_normalized() {
    let dict = dictionary();
    assert_eq!(first_id(&dict, "  ＭＡＪＯ "), MAJO);
    assert_eq!(first_id(&dict, "Witch"), MAJO);
}

#[tokio::test]
async fn full_coverage_ranks_above_partial() {
    let dict = dictionary();
    let ids: Vec<EntryId> = dict
        .search_dictionary("magical girl")
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect();

    assert_eq!(ids, vec![MAHOU_SHOUJO, MAJOKKO, MAJIKARU, SHOUJO]);

    let both = [MAHOU_SHOUJO, MAJOKKO];
    let split = ids.iter().position(|id| !both.contains(id)).unwrap();
    assert!(ids[..split].iter().all(|id| both.contains(id)));
    assert!(ids[split..].iter().all(|id| !both.contains(id)));
}

#[tokio::test]
async fn terms_are_classified_independently() {
    let dict = dictionary();
    // romaji + english + kanji in one query
    let ids: Vec<EntryId> = dict
        .resolver()
        .resolve("majo witch 魔女")
        .unwrap();
    assert_eq!(ids[0], MAJO);
    assert!(ids.contains(&MAHOUTSUKAI));
}

#[tokio::test]
async fn single_term_keeps_term_order() {
    let dict = dictionary();
    let single = dict.resolver().resolve("witch").unwrap();
    let direct = dict.resolver().search().search_single_term("witch").unwrap();
    assert_eq!(single, direct.into_ids());
}

#[tokio::test]
async fn entries_come_back_in_ranked_order() {
    let dict = dictionary();
    let entries = dict.search_dictionary("witch").unwrap();
    let ids: Vec<EntryId> = entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, dict.resolver().resolve("witch").unwrap());
    assert_eq!(entries[0].kanji(), "魔女");
    assert_eq!(entries[0].kana(), "まじょ");
}

#[tokio::test]
async fn english_only_resolution_skips_romaji() {
    let dict = dictionary();
    // "majo" transliterates, so only the English resolution misses it
    assert!(!dict.search_dictionary("majo").unwrap().is_empty());
    assert!(dict.search_english("majo").unwrap().is_empty());

    let ids: Vec<EntryId> = dict
        .search_english("young witch")
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids[0], MAJOKKO);
}

#[tokio::test]
async fn missing_entry_record_is_an_error() {
    let mut records = entries();
    records.remove(&MAJO);
    let (tables, _) = tables();
    let dict = JapaneseDictionary::new(tables, Romanizer::new(), Box::new(MemoryEntries(records)));

    assert!(matches!(
        dict.search_dictionary("witch"),
        Err(SearchError::Entries(LoadError::MissingEntry(MAJO)))
    ));
}

#[tokio::test]
async fn usable_through_dictionary_trait() {
    let dict: Box<dyn Dictionary> = Box::new(dictionary());
    assert_eq!(dict.search("魔女").unwrap()[0].id, MAJO);
}
