//! Split oversized rows into part-numbered chunks

use crate::core::word::{join_words, parse_words};
use crate::organize::chunker;
use crate::store::{Row, Sheet};

/// Result of a splitting run
pub struct SplitResult {
    pub sheet: Sheet,
    pub rows_in: usize,
    pub rows_out: usize,
    pub categories_split: usize,
}

/// Derive a new bank where no row holds more than `max_words` words
///
/// Rows already within the ceiling pass through untouched. Oversized rows
/// become `(Part i/n)` rows; every word is preserved, in order.
#[must_use]
pub fn split_bank(sheet: &Sheet, max_words: usize) -> SplitResult {
    let mut out = Sheet::new();
    let mut rows_in = 0usize;
    let mut categories_split = 0usize;

    for row in sheet.data_rows() {
        rows_in += 1;
        let words = parse_words(&row.words);

        if words.len() <= max_words {
            out.push(row.clone());
            continue;
        }

        categories_split += 1;
        let chunks = chunker::split(&words, max_words);
        let total = chunks.len();
        for (idx, chunk) in chunks.iter().enumerate() {
            out.push(Row::new(
                chunker::part_name(&row.category, idx + 1, total),
                chunker::part_description(&row.description, idx + 1, total),
                join_words(chunk),
            ));
        }
    }

    let rows_out = out.len();
    SplitResult {
        sheet: out,
        rows_in,
        rows_out,
        categories_split,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_cell(n: usize) -> String {
        (0..n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(", ")
    }

    #[test]
    fn small_rows_pass_through_unchanged() {
        let sheet = Sheet::from_rows(vec![Row::new("1A. SHORT A", "cat pattern", "cat, bat")]);
        let result = split_bank(&sheet, 40);

        assert_eq!(result.rows_out, 1);
        assert_eq!(result.categories_split, 0);
        assert_eq!(result.sheet.rows()[0], sheet.rows()[0]);
    }

    #[test]
    fn oversized_rows_get_part_labels() {
        let sheet = Sheet::from_rows(vec![Row::new("BIG", "lots of words", word_cell(85))]);
        let result = split_bank(&sheet, 40);

        assert_eq!(result.categories_split, 1);
        assert_eq!(result.rows_out, 3);
        assert_eq!(result.sheet.rows()[0].category, "BIG (Part 1/3)");
        assert_eq!(result.sheet.rows()[2].category, "BIG (Part 3/3)");
        assert_eq!(
            result.sheet.rows()[1].description,
            "lots of words - Part 2 of 3"
        );
    }

    #[test]
    fn splitting_preserves_every_word_in_order() {
        let sheet = Sheet::from_rows(vec![Row::new("BIG", "d", word_cell(85))]);
        let result = split_bank(&sheet, 40);

        let rejoined: Vec<String> = result
            .sheet
            .rows()
            .iter()
            .flat_map(|row| parse_words(&row.words))
            .map(|w| w.text().to_string())
            .collect();
        let original: Vec<String> = parse_words(&word_cell(85))
            .iter()
            .map(|w| w.text().to_string())
            .collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn non_data_rows_are_dropped() {
        let sheet = Sheet::from_rows(vec![
            Row::new("", "", ""),
            Row::new("1A. SHORT A", "cat pattern", "cat"),
            Row::new("EMPTY", "no words yet", ""),
        ]);
        let result = split_bank(&sheet, 40);

        assert_eq!(result.rows_in, 1);
        assert_eq!(result.rows_out, 1);
    }

    #[test]
    fn boundary_row_is_not_split() {
        let sheet = Sheet::from_rows(vec![Row::new("EDGE", "d", word_cell(40))]);
        let result = split_bank(&sheet, 40);

        assert_eq!(result.rows_out, 1);
        assert_eq!(result.sheet.rows()[0].category, "EDGE");
    }
}
