//! Romaji to hiragana transducer.
//!
//! Conversion is greedy longest-match: at each position the longest
//! registered syllable wins, which is what keeps "nna" as んな rather than
//! ん + な, and "kya" as きゃ rather than き + や.

use std::collections::HashMap;

use jpdict_core::TranslitError;

/// (romaji, kana) pairs
const ROMAJI_TABLE: &[(&str, &str)] = &[
    ("a", "あ"),
    ("i", "い"),
    ("u", "う"),
    ("e", "え"),
    ("o", "お"),
    // k / g
    ("ka", "か"),
    ("kka", "っか"),
    ("ga", "が"),
    ("ki", "き"),
    ("kki", "っき"),
    ("kya", "きゃ"),
    ("kyu", "きゅ"),
    ("kyo", "きょ"),
    ("gi", "ぎ"),
    ("gya", "ぎゃ"),
    ("gyu", "ぎゅ"),
    ("gyo", "ぎょ"),
    ("ku", "く"),
    ("kku", "っく"),
    ("gu", "ぐ"),
    ("ke", "け"),
    ("kke", "っけ"),
    ("ge", "げ"),
    ("ko", "こ"),
    ("kko", "っこ"),
    ("go", "ご"),
    // s / z / j
    ("sa", "さ"),
    ("ssa", "っさ"),
    ("za", "ざ"),
    ("si", "し"),
    ("shi", "し"),
    ("ssi", "っし"),
    ("sshi", "っし"),
    ("sya", "しゃ"),
    ("sha", "しゃ"),
    ("shya", "しゃ"),
    ("ssha", "っしゃ"),
    ("syu", "しゅ"),
    ("shu", "しゅ"),
    ("shyu", "しゅ"),
    ("sshu", "っしゅ"),
    ("syo", "しょ"),
    ("sho", "しょ"),
    ("shyo", "しょ"),
    ("ssho", "っしょ"),
    ("ji", "じ"),
    ("ja", "じゃ"),
    ("jya", "じゃ"),
    ("ju", "じゅ"),
    ("jyu", "じゅ"),
    ("jo", "じょ"),
    ("jyo", "じょ"),
    ("su", "す"),
    ("ssu", "っす"),
    ("zu", "ず"),
    ("se", "せ"),
    ("sse", "っせ"),
    ("ze", "ぜ"),
    ("so", "そ"),
    ("sso", "っそ"),
    ("zo", "ぞ"),
    // t / d
    ("ta", "た"),
    ("tta", "った"),
    ("da", "だ"),
    ("ti", "ち"),
    ("chi", "ち"),
    ("cchi", "っち"),
    ("cha", "ちゃ"),
    ("chya", "ちゃ"),
    ("ccha", "っちゃ"),
    ("chu", "ちゅ"),
    ("chyu", "ちゅ"),
    ("cchu", "っちゅ"),
    ("cho", "ちょ"),
    ("chyo", "ちょ"),
    ("ccho", "っちょ"),
    // "ji" stays じ, so ぢ is only reachable as "di"
    ("di", "ぢ"),
    ("tu", "つ"),
    ("tsu", "つ"),
    ("ttu", "っつ"),
    ("ttsu", "っつ"),
    ("du", "づ"),
    ("te", "て"),
    ("tte", "って"),
    ("de", "で"),
    ("to", "と"),
    ("tto", "っと"),
    ("do", "ど"),
    // n
    ("na", "な"),
    ("nna", "んな"),
    ("ni", "に"),
    ("nni", "んに"),
    ("nya", "にゃ"),
    ("nyu", "にゅ"),
    ("nyo", "にょ"),
    ("nu", "ぬ"),
    ("nnu", "んぬ"),
    ("ne", "ね"),
    ("nne", "んね"),
    ("no", "の"),
    ("nno", "んの"),
    ("n'", "ん"),
    ("nn", "ん"),
    ("n", "ん"),
    // h / b / p
    ("ha", "は"),
    ("ba", "ば"),
    ("pa", "ぱ"),
    ("ppa", "っぱ"),
    ("hi", "ひ"),
    ("hya", "ひゃ"),
    ("hyu", "ひゅ"),
    ("hyo", "ひょ"),
    ("bi", "び"),
    ("bya", "びゃ"),
    ("byu", "びゅ"),
    ("byo", "びょ"),
    ("pi", "ぴ"),
    ("ppi", "っぴ"),
    ("pya", "ぴゃ"),
    ("ppya", "っぴゃ"),
    ("pyu", "ぴゅ"),
    ("ppyu", "っぴゅ"),
    ("pyo", "ぴょ"),
    ("ppyo", "っぴょ"),
    // "hu" is deliberately absent
    ("fu", "ふ"),
    ("bu", "ぶ"),
    ("pu", "ぷ"),
    ("ppu", "っぷ"),
    ("he", "へ"),
    ("be", "べ"),
    ("pe", "ぺ"),
    ("ppe", "っぺ"),
    ("ho", "ほ"),
    ("bo", "ぼ"),
    ("po", "ぽ"),
    ("ppo", "っぽ"),
    // m
    ("ma", "ま"),
    ("mi", "み"),
    ("mya", "みゃ"),
    ("myu", "みゅ"),
    ("myo", "みょ"),
    ("mu", "む"),
    ("me", "め"),
    ("mo", "も"),
    // y
    ("ya", "や"),
    ("yu", "ゆ"),
    ("yo", "よ"),
    // r / l
    ("ra", "ら"),
    ("la", "ら"),
    ("ri", "り"),
    ("rya", "りゃ"),
    ("ryu", "りゅ"),
    ("ryo", "りょ"),
    ("li", "り"),
    ("lya", "りゃ"),
    ("lyu", "りゅ"),
    ("lyo", "りょ"),
    ("ru", "る"),
    ("lu", "る"),
    ("re", "れ"),
    ("le", "れ"),
    ("ro", "ろ"),
    ("lo", "ろ"),
    // w
    ("wa", "わ"),
    ("wi", "ゐ"),
    ("wo", "を"),
];

/// Greedy longest-match romaji converter
#[derive(Debug, Clone)]
pub struct Romanizer {
    table: HashMap<&'static str, &'static str>,
    longest: usize,
}

impl Romanizer {
    pub fn new() -> Self {
        Self::from_pairs(ROMAJI_TABLE)
    }

    /// Build from an arbitrary syllable table
    pub fn from_pairs(pairs: &[(&'static str, &'static str)]) -> Self {
        let table: HashMap<_, _> = pairs.iter().copied().collect();
        let longest = table.keys().map(|k| k.len()).max().unwrap_or(0);
        Self { table, longest }
    }

    /// Registered (romaji, kana) pairs
    pub fn syllables(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.table.iter().map(|(r, k)| (*r, *k))
    }

    /// Pop one syllable off the front of `word`, returning its kana and the rest
    pub fn pop_one<'a>(&self, word: &'a str) -> Result<(&'static str, &'a str), TranslitError> {
        for len in (1..=self.longest.min(word.len())).rev() {
            // Non-char-boundary prefixes can't be keys; keys are ascii
            let Some(prefix) = word.get(..len) else {
                continue;
            };
            if let Some(kana) = self.table.get(prefix) {
                return Ok((*kana, &word[len..]));
            }
        }
        Err(TranslitError {
            word: word.to_string(),
        })
    }

    /// Convert a whole word, failing if any position has no matching syllable.
    ///
    /// `nn` and `n'` always give ん; a bare `n` gives ん only when no
    /// n-syllable matches the following characters.
    pub fn convert(&self, word: &str) -> Result<String, TranslitError> {
        let mut rest = word.trim();
        let mut kana = String::with_capacity(rest.len() * 3);

        while !rest.is_empty() {
            let (syllable, remainder) = self.pop_one(rest).map_err(|_| TranslitError {
                word: word.to_string(),
            })?;
            kana.push_str(syllable);
            rest = remainder;
        }

        Ok(kana)
    }
}

impl Default for Romanizer {
    fn default() -> Self {
        Self::new()
    }
}
