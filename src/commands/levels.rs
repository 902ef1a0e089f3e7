//! Reorganize the bank by difficulty level
//!
//! One pass to find words repeated across categories, a second to rebuild
//! every category deduplicated and leveled. High-frequency and statutory
//! exception lists are exempt from cross-category deduplication: those
//! lists intentionally repeat words that also appear under phonics
//! patterns.

use crate::config::KEEP_CATEGORY_MARKERS;
use crate::core::category::part_base_name;
use crate::core::word::{join_words, parse_words};
use crate::core::Category;
use crate::organize::leveler;
use crate::store::{Row, Sheet};
use rustc_hash::{FxHashMap, FxHashSet};

/// Result of a leveling run
pub struct LevelsResult {
    pub sheet: Sheet,
    pub sections: usize,
    /// Words appearing in more than one source category, with their homes
    pub duplicates: Vec<(String, Vec<String>)>,
}

/// Rebuild the bank with difficulty levels and cross-category dedup
#[must_use]
pub fn reorganize(sheet: &Sheet, chunk_size: usize) -> LevelsResult {
    let duplicates = find_duplicates(sheet);

    let mut out = Sheet::new();
    let mut processed: FxHashSet<String> = FxHashSet::default();

    for row in sheet.data_rows() {
        let name = part_base_name(&row.category);
        let keep_all = KEEP_CATEGORY_MARKERS
            .iter()
            .any(|marker| name.contains(marker));

        let unique: Vec<_> = parse_words(&row.words)
            .into_iter()
            .filter(|word| {
                let key = word.key();
                if keep_all || !processed.contains(&key) {
                    processed.insert(key);
                    true
                } else {
                    false
                }
            })
            .collect();

        if unique.is_empty() {
            continue;
        }

        let category = Category::assemble(name, &row.description, unique);
        for leveled in leveler::level(&category, chunk_size) {
            out.push(Row::new(
                leveled.name,
                leveled.description,
                join_words(&leveled.words),
            ));
        }
    }

    LevelsResult {
        sections: out.len(),
        sheet: out,
        duplicates,
    }
}

/// Words that appear in more than one category, sorted by word
fn find_duplicates(sheet: &Sheet) -> Vec<(String, Vec<String>)> {
    let mut homes: FxHashMap<String, Vec<String>> = FxHashMap::default();

    for row in sheet.data_rows() {
        for word in parse_words(&row.words) {
            homes.entry(word.key()).or_default().push(row.category.clone());
        }
    }

    let mut duplicates: Vec<(String, Vec<String>)> = homes
        .into_iter()
        .filter(|(_, categories)| categories.len() > 1)
        .collect();
    duplicates.sort();
    duplicates
}

/// Render the duplicate report written beside the bank file
#[must_use]
pub fn duplicate_report(duplicates: &[(String, Vec<String>)]) -> String {
    let mut report = String::new();
    report.push_str("DUPLICATE WORDS REPORT\n");
    report.push_str(&"=".repeat(50));
    report.push_str("\n\n");
    report.push_str(&format!(
        "Total duplicate words found: {}\n\n",
        duplicates.len()
    ));

    for (word, categories) in duplicates {
        report.push_str(&format!("'{word}' appears in:\n"));
        for category in categories {
            report.push_str(&format!("  - {category}\n"));
        }
        report.push('\n');
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_category_loses_shared_words() {
        let sheet = Sheet::from_rows(vec![
            Row::new("FIRST", "d1", "cat, bat, hat"),
            Row::new("SECOND", "d2", "cat, dog, pig"),
        ]);
        let result = reorganize(&sheet, 35);

        let second = result
            .sheet
            .rows()
            .iter()
            .find(|row| row.category.starts_with("SECOND"))
            .unwrap();
        assert_eq!(second.words, "dog, pig");
    }

    #[test]
    fn keep_list_categories_keep_seen_words() {
        let sheet = Sheet::from_rows(vec![
            Row::new("1A. SHORT A", "d1", "the, cat, bat"),
            Row::new("0A. YEAR 1 HIGH FREQUENCY", "d2", "the, a, to"),
        ]);
        let result = reorganize(&sheet, 35);

        let hf = result
            .sheet
            .rows()
            .iter()
            .find(|row| row.category.starts_with("0A."))
            .unwrap();
        assert!(hf.words.contains("the"));
    }

    #[test]
    fn fully_duplicated_category_vanishes() {
        let sheet = Sheet::from_rows(vec![
            Row::new("FIRST", "d1", "cat, bat"),
            Row::new("COPY", "d2", "cat, bat"),
        ]);
        let result = reorganize(&sheet, 35);

        assert!(
            result
                .sheet
                .rows()
                .iter()
                .all(|row| !row.category.starts_with("COPY"))
        );
    }

    #[test]
    fn part_decorations_collapse_before_leveling() {
        let sheet = Sheet::from_rows(vec![Row::new(
            "1A. SHORT A (Part 2/3)",
            "cat pattern",
            "cat, bat",
        )]);
        let result = reorganize(&sheet, 35);

        assert_eq!(result.sheet.rows()[0].category, "1A. SHORT A");
    }

    #[test]
    fn wide_spread_category_levels_up() {
        let sheet = Sheet::from_rows(vec![Row::new(
            "MIXED",
            "everything",
            "cat, bat, elephant, telephone",
        )]);
        let result = reorganize(&sheet, 35);

        let names: Vec<_> = result
            .sheet
            .rows()
            .iter()
            .map(|row| row.category.as_str())
            .collect();
        assert_eq!(names, ["MIXED - Level 1", "MIXED - Level 3"]);
    }

    #[test]
    fn duplicates_are_collected_with_homes() {
        let sheet = Sheet::from_rows(vec![
            Row::new("FIRST", "d1", "cat, bat"),
            Row::new("SECOND", "d2", "Cat, dog"),
        ]);
        let result = reorganize(&sheet, 35);

        assert_eq!(result.duplicates.len(), 1);
        let (word, homes) = &result.duplicates[0];
        assert_eq!(word, "cat");
        assert_eq!(homes, &["FIRST".to_string(), "SECOND".to_string()]);
    }

    #[test]
    fn report_lists_each_duplicate() {
        let duplicates = vec![(
            "cat".to_string(),
            vec!["FIRST".to_string(), "SECOND".to_string()],
        )];
        let report = duplicate_report(&duplicates);

        assert!(report.starts_with("DUPLICATE WORDS REPORT"));
        assert!(report.contains("Total duplicate words found: 1"));
        assert!(report.contains("'cat' appears in:"));
        assert!(report.contains("  - FIRST"));
        assert!(report.contains("  - SECOND"));
    }
}
