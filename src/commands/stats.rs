//! Word bank statistics

use crate::core::word::parse_words;
use crate::core::WordEntry;
use crate::store::Sheet;
use rustc_hash::FxHashSet;

/// One line of the per-category table
pub struct CategoryCount {
    pub category: String,
    pub words: usize,
}

/// Result of a stats run
pub struct StatsResult {
    pub per_category: Vec<CategoryCount>,
    pub sections: usize,
    pub entries: usize,
    pub unique: usize,
}

/// Count word entries per category and unique words overall
#[must_use]
pub fn collect_stats(sheet: &Sheet) -> StatsResult {
    let mut per_category = Vec::new();
    let mut entries = 0usize;
    let mut all_words: FxHashSet<String> = FxHashSet::default();

    for row in sheet.data_rows() {
        let words = parse_words(&row.words);
        entries += words.len();
        all_words.extend(words.iter().map(WordEntry::key));

        per_category.push(CategoryCount {
            category: row.category.clone(),
            words: words.len(),
        });
    }

    StatsResult {
        sections: per_category.len(),
        per_category,
        entries,
        unique: all_words.len(),
    }
}
