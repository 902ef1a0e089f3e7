//! Quick look at the front of the bank

use crate::core::word::parse_words;
use crate::core::WordEntry;
use crate::store::Sheet;

/// One previewed row
pub struct PreviewLine {
    pub category: String,
    pub word_count: usize,
    pub preview: String,
}

/// Preview the first `limit` rows, showing at most `words_shown` words each
///
/// Every physical row is shown, data or not; rows past the word ceiling get
/// a `... (n total)` marker.
#[must_use]
pub fn preview_rows(sheet: &Sheet, limit: usize, words_shown: usize) -> Vec<PreviewLine> {
    sheet
        .rows()
        .iter()
        .take(limit)
        .map(|row| {
            let words = parse_words(&row.words);
            let mut preview = words
                .iter()
                .take(words_shown)
                .map(WordEntry::text)
                .collect::<Vec<_>>()
                .join(", ");
            if words.len() > words_shown {
                preview.push_str(&format!("... ({} total)", words.len()));
            }

            PreviewLine {
                category: row.category.clone(),
                word_count: words.len(),
                preview,
            }
        })
        .collect()
}
