/// Characters trimmed from both ends of an English word
const PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}', '<', '>',
];

/// Stems of this many characters or fewer are not indexed
const MIN_INDEXED_LEN: usize = 2;

// TODO: real stemming (running -> run); both the index and queries go through here
/// Reduce a word to its normalized stem
pub fn stem_word(word: &str) -> String {
    word.to_lowercase().trim_matches(PUNCTUATION).to_string()
}

/// Split a gloss into the stems the English-term index stores
pub fn make_en_terms(sentence: &str) -> Vec<String> {
    sentence
        .split_whitespace()
        .map(stem_word)
        .filter(|stem| stem.chars().count() > MIN_INDEXED_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_strip_case_and_punctuation() {
        assert_eq!(stem_word("Witch,"), "witch");
        assert_eq!(stem_word("(magical)"), "magical");
        assert_eq!(stem_word("girl's"), "girl's");
        assert_eq!(stem_word("!?"), "");
    }

    #[test]
    fn short_words_are_dropped() {
        assert_eq!(
            make_en_terms("good evening; tonight (to be)"),
            vec!["good", "evening", "tonight"]
        );
        assert!(make_en_terms("a an of").is_empty());
    }
}
