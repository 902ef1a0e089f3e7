//! One-way sync: app source -> bank
//!
//! The app embeds its live word packs as a JSON array literal. This pulls
//! that literal back out by pattern match and overwrites bank rows
//! positionally, making the bank a mirror of what is actually shipping.
//! Whole-record overwrite only: no merge, no conflict detection.

use crate::config::WORD_PACKS_PATTERN;
use crate::core::word::WordEntry;
use crate::core::Pack;
use crate::store::{Row, Sheet};
use anyhow::{Context, bail};
use regex::Regex;

/// Result of a sync run: (id, title, word count) per updated row
pub struct SyncResult {
    pub updated: Vec<(u32, String, usize)>,
}

/// Pull the embedded `wordPacks` array out of the app source
///
/// # Errors
/// Fails when the marker is missing or the bracketed literal is not valid
/// JSON; either way the whole run aborts, no partial sync.
pub fn extract_word_packs(source: &str) -> anyhow::Result<Vec<Pack>> {
    let marker = Regex::new(WORD_PACKS_PATTERN).expect("word packs pattern is valid");

    let captures = marker
        .captures(source)
        .context("could not find the wordPacks array in the app source")?;
    let literal = captures
        .get(1)
        .context("wordPacks marker matched without a payload")?
        .as_str();

    serde_json::from_str(literal).context("wordPacks array is not valid JSON")
}

/// Overwrite bank rows from pack records, keyed by id
///
/// Pack id `n` lands on bank row `n + 1` (row 1 is the header), so the
/// sheet's data index is `n - 1`. The sheet grows as needed.
///
/// # Errors
/// Fails on a pack id of 0 (there is no bank row above the header) or on a
/// word the bank format cannot store; nothing is applied partially —
/// callers only save on success.
pub fn apply(sheet: &mut Sheet, packs: &[Pack]) -> anyhow::Result<SyncResult> {
    // Validate everything before touching the sheet
    for pack in packs {
        if pack.id == 0 {
            bail!("pack id 0 has no bank row (ids start at 1)");
        }

        for word in &pack.words {
            WordEntry::new(word.as_str())
                .with_context(|| format!("pack {} has an unstorable word", pack.id))?;
        }
    }

    let mut updated = Vec::new();
    for pack in packs {
        let index = pack.id as usize - 1;
        sheet.set_row(
            index,
            Row::new(
                pack.title.clone(),
                pack.description.clone(),
                pack.words.join(", "),
            ),
        );
        updated.push((pack.id, pack.title.clone(), pack.word_count()));
    }

    Ok(SyncResult { updated })
}

#[cfg(test)]
mod tests {
    use super::*;

    const APP_SOURCE: &str = r#"
const appName = "Reading App";
let wordPacks = [
  {"id": 1, "title": "P1: 1A. SHORT A", "description": "cat pattern", "words": ["cat", "bat"]},
  {"id": 3, "title": "P3: 1B. SHORT E", "description": "bed pattern", "words": ["bed", "red"]}
];
startApp(wordPacks);
"#;

    #[test]
    fn extracts_the_embedded_array() {
        let packs = extract_word_packs(APP_SOURCE).unwrap();

        assert_eq!(packs.len(), 2);
        assert_eq!(packs[0].id, 1);
        assert_eq!(packs[1].title, "P3: 1B. SHORT E");
    }

    #[test]
    fn missing_marker_aborts() {
        let result = extract_word_packs("const wordPacks = [1, 2];");
        assert!(result.is_err());
    }

    #[test]
    fn malformed_json_aborts() {
        let source = "let wordPacks = [ {id: 1, broken} ];";
        let result = extract_word_packs(source);
        assert!(result.is_err());
    }

    #[test]
    fn apply_lands_on_id_keyed_rows() {
        let mut sheet = Sheet::new();
        let packs = extract_word_packs(APP_SOURCE).unwrap();

        let result = apply(&mut sheet, &packs).unwrap();

        assert_eq!(result.updated.len(), 2);
        // id 3 -> bank row 4 -> data index 2; the gap row stays blank
        assert_eq!(sheet.len(), 3);
        assert_eq!(sheet.rows()[0].category, "P1: 1A. SHORT A");
        assert!(!sheet.rows()[1].is_data());
        assert_eq!(sheet.rows()[2].words, "bed, red");
    }

    #[test]
    fn apply_overwrites_existing_rows_whole() {
        let mut sheet = Sheet::from_rows(vec![Row::new("OLD", "old desc", "old, words")]);
        let packs = vec![Pack {
            id: 1,
            title: "NEW".to_string(),
            description: "new desc".to_string(),
            category: None,
            sub_pack: None,
            sub_pack_description: None,
            words: vec!["fresh".to_string()],
        }];

        apply(&mut sheet, &packs).unwrap();

        assert_eq!(sheet.rows()[0], Row::new("NEW", "new desc", "fresh"));
    }

    #[test]
    fn apply_rejects_id_zero() {
        let mut sheet = Sheet::new();
        let packs = vec![Pack {
            id: 0,
            title: "X".to_string(),
            description: String::new(),
            category: None,
            sub_pack: None,
            sub_pack_description: None,
            words: vec!["cat".to_string()],
        }];

        assert!(apply(&mut sheet, &packs).is_err());
    }

    #[test]
    fn apply_rejects_unstorable_words() {
        let mut sheet = Sheet::new();
        let packs = vec![Pack {
            id: 1,
            title: "X".to_string(),
            description: String::new(),
            category: None,
            sub_pack: None,
            sub_pack_description: None,
            words: vec!["cat, bat".to_string()],
        }];

        assert!(apply(&mut sheet, &packs).is_err());
    }
}
