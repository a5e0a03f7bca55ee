use serde::{Deserialize, Serialize};

/// Dictionary entry sequence number
pub type EntryId = u32;

/// Popularity score, lower = more common
pub type Rank = u32;

/// Rank used when the source carries no frequency data
pub const DEFAULT_RANK: Rank = 50;

fn default_rank() -> Rank {
    DEFAULT_RANK
}

/// One sense of an entry: part of speech and its gloss.
///
/// Stored on disk as a `[pos, gloss]` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Meaning {
    pub part_of_speech: String,
    pub gloss: String,
}

impl Meaning {
    pub fn new(part_of_speech: impl Into<String>, gloss: impl Into<String>) -> Self {
        Self {
            part_of_speech: part_of_speech.into(),
            gloss: gloss.into(),
        }
    }
}

impl From<(String, String)> for Meaning {
    fn from((part_of_speech, gloss): (String, String)) -> Self {
        Self {
            part_of_speech,
            gloss,
        }
    }
}

impl From<Meaning> for (String, String) {
    fn from(meaning: Meaning) -> Self {
        (meaning.part_of_speech, meaning.gloss)
    }
}

/// Full dictionary entry as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    #[serde(default = "default_rank")]
    pub rank: Rank,
    #[serde(rename = "kanjis", default)]
    pub kanji_forms: Vec<String>,
    #[serde(rename = "kanas")]
    pub kana_forms: Vec<String>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

impl Entry {
    /// First kanji form, empty for kana-only words
    pub fn kanji(&self) -> &str {
        self.kanji_forms.first().map(String::as_str).unwrap_or_default()
    }

    /// First kana form
    pub fn kana(&self) -> &str {
        self.kana_forms.first().map(String::as_str).unwrap_or_default()
    }

    /// Subsequent kanji forms, with the second kana form slotted in after the first of them
    pub fn alt_forms(&self) -> Vec<&str> {
        let mut forms: Vec<&str> = self.kanji_forms.iter().skip(1).map(String::as_str).collect();
        if let Some(kana) = self.kana_forms.get(1) {
            let at = forms.len().min(1);
            forms.insert(at, kana);
        }
        forms
    }
}
