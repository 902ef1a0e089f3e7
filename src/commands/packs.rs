//! Rebuild clean, alphabetized packs from a reshaped bank
//!
//! Collapses whatever level/part decorations earlier runs added, folds all
//! words back into per-category sets, and re-chunks each category into
//! evenly sized packs. Word case is normalized to lower-case here; this is
//! the "start over from the words themselves" operation.

use crate::core::category::{base_description, base_name};
use crate::core::word::parse_words;
use crate::organize::chunker;
use crate::store::{Row, Sheet};
use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, BTreeSet};

/// Result of a pack rebuild
pub struct PacksResult {
    pub sheet: Sheet,
    pub categories: usize,
    pub packs: usize,
    /// Categories left out for having too few words: (name, word count)
    pub skipped: Vec<(String, usize)>,
}

/// Rebuild packs of at most `pack_size` alphabetized words per category
///
/// Categories with fewer than `min_words` unique words are skipped and
/// reported, not padded or merged.
#[must_use]
pub fn rebuild_packs(sheet: &Sheet, pack_size: usize, min_words: usize) -> PacksResult {
    // Pure fold: base category -> sorted unique lower-cased words
    let mut collections: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut descriptions: FxHashMap<String, String> = FxHashMap::default();

    for row in sheet.data_rows() {
        let base = base_name(&row.category).to_string();

        let words = collections.entry(base.clone()).or_default();
        for word in parse_words(&row.words) {
            words.insert(word.key());
        }

        if !row.description.trim().is_empty() {
            descriptions
                .entry(base)
                .or_insert_with(|| base_description(&row.description).to_string());
        }
    }

    let mut out = Sheet::new();
    let mut categories = 0usize;
    let mut packs = 0usize;
    let mut skipped = Vec::new();

    for (base, words) in &collections {
        let words: Vec<&String> = words.iter().collect();
        if words.len() < min_words {
            skipped.push((base.clone(), words.len()));
            continue;
        }

        categories += 1;
        let description = descriptions.get(base).cloned().unwrap_or_default();
        let chunks = chunker::split(&words, pack_size);
        let total = chunks.len();

        for (idx, chunk) in chunks.iter().enumerate() {
            let cell = chunk
                .iter()
                .map(|word| word.as_str())
                .collect::<Vec<_>>()
                .join(", ");

            if total == 1 {
                out.push(Row::new(base.clone(), description.clone(), cell));
            } else {
                out.push(Row::new(
                    format!("{} - Pack {}", base, idx + 1),
                    format!("{} (Pack {} of {})", description, idx + 1, total),
                    cell,
                ));
            }
            packs += 1;
        }
    }

    PacksResult {
        sheet: out,
        categories,
        packs,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_cell(prefix: &str, n: usize) -> String {
        (0..n)
            .map(|i| format!("{prefix}{i}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    #[test]
    fn collapses_leveled_rows_into_one_category() {
        let sheet = Sheet::from_rows(vec![
            Row::new("1A. SHORT A - Level 1", "cat pattern - Easy (1 syllable)", word_cell("a", 8)),
            Row::new("1A. SHORT A - Level 2", "cat pattern - Medium (2 syllables)", word_cell("b", 6)),
        ]);
        let result = rebuild_packs(&sheet, 30, 10);

        assert_eq!(result.categories, 1);
        assert_eq!(result.packs, 1);
        assert_eq!(result.sheet.rows()[0].category, "1A. SHORT A");
        assert_eq!(result.sheet.rows()[0].description, "cat pattern");
    }

    #[test]
    fn words_come_out_lowercased_and_sorted() {
        let sheet = Sheet::from_rows(vec![Row::new(
            "X",
            "d",
            "Zebra, apple, Mango, apple, kiwi, fig, plum, pear, lime, date",
        )]);
        let result = rebuild_packs(&sheet, 30, 10);

        // "apple" deduplicates case-insensitively, leaving 9 words
        assert_eq!(result.categories, 0);
        assert_eq!(result.skipped, vec![("X".to_string(), 9)]);
    }

    #[test]
    fn alphabetical_order_within_pack() {
        let sheet = Sheet::from_rows(vec![Row::new(
            "X",
            "d",
            "zebra, apple, mango, kiwi, fig, plum, pear, lime, date, yam",
        )]);
        let result = rebuild_packs(&sheet, 30, 10);

        assert_eq!(
            result.sheet.rows()[0].words,
            "apple, date, fig, kiwi, lime, mango, pear, plum, yam, zebra"
        );
    }

    #[test]
    fn large_categories_split_into_numbered_packs() {
        let sheet = Sheet::from_rows(vec![Row::new("BIG", "many words", word_cell("w", 65))]);
        let result = rebuild_packs(&sheet, 30, 10);

        assert_eq!(result.packs, 3);
        assert_eq!(result.sheet.rows()[0].category, "BIG - Pack 1");
        assert_eq!(result.sheet.rows()[0].description, "many words (Pack 1 of 3)");
        assert_eq!(result.sheet.rows()[2].category, "BIG - Pack 3");
    }

    #[test]
    fn under_minimum_categories_are_reported() {
        let sheet = Sheet::from_rows(vec![
            Row::new("TINY", "few", "one, two, three"),
            Row::new("OK", "enough", word_cell("w", 12)),
        ]);
        let result = rebuild_packs(&sheet, 30, 10);

        assert_eq!(result.categories, 1);
        assert_eq!(result.skipped, vec![("TINY".to_string(), 3)]);
        assert_eq!(result.sheet.rows()[0].category, "OK");
    }

    #[test]
    fn categories_emit_in_alphabetical_order() {
        let sheet = Sheet::from_rows(vec![
            Row::new("ZULU", "z", word_cell("z", 10)),
            Row::new("ALPHA", "a", word_cell("a", 10)),
        ]);
        let result = rebuild_packs(&sheet, 30, 10);

        assert_eq!(result.sheet.rows()[0].category, "ALPHA");
        assert_eq!(result.sheet.rows()[1].category, "ZULU");
    }

    #[test]
    fn first_description_wins() {
        let sheet = Sheet::from_rows(vec![
            Row::new("X (Part 1/2)", "first desc - Part 1 of 2", word_cell("a", 6)),
            Row::new("X (Part 2/2)", "other desc - Part 2 of 2", word_cell("b", 6)),
        ]);
        let result = rebuild_packs(&sheet, 30, 10);

        assert_eq!(result.sheet.rows()[0].description, "first desc");
    }
}
