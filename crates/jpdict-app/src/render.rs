use jpdict_core::Entry;

const SEPARATOR: &str = "\n\n---\n";

/// Plain-text block for one numbered result
pub fn dump_entry(entry: &Entry, num: usize) -> String {
    let mut sections = Vec::new();

    let headword = if entry.kanji().is_empty() {
        entry.kana().to_string()
    } else {
        format!("{}\n    {}", entry.kanji(), entry.kana())
    };
    sections.push(format!("{:<4}{}", format!("{num})"), headword));

    for (i, meaning) in entry.meanings.iter().enumerate() {
        sections.push(format!("    {}. [{}]\n    {}", i + 1, meaning.part_of_speech, meaning.gloss));
    }

    let alt_forms = entry.alt_forms();
    if !alt_forms.is_empty() {
        sections.push(format!("    Other Forms: {}", alt_forms.join("、")));
    }

    sections.join("\n\n")
}

pub fn dump_all_entries(entries: &[Entry]) -> String {
    let blocks: Vec<String> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| dump_entry(entry, i + 1))
        .collect();
    format!("{SEPARATOR}{}{SEPARATOR}", blocks.join(SEPARATOR))
}
