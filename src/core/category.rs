//! Category assembly and name surgery
//!
//! Categories are rebuilt from stored rows on every run. Reshaping commands
//! first strip the decorations earlier runs appended to names and
//! descriptions (`P{n}:` prefixes, `" (Part i/n)"`, `" - Level 2A"`, band
//! annotations) to recover the base category, then derive fresh rows.

use crate::core::word::WordEntry;
use regex::Regex;
use rustc_hash::FxHashSet;
use std::sync::LazyLock;

/// One or more `P{n}:` numbering prefixes at the start of a category name
static PACK_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(P\d+:\s*)+").expect("pack prefix pattern is valid"));

/// A named phonics pattern grouping with a deduplicated word list
///
/// Immutable once assembled; reshaping operations derive new categories
/// instead of mutating existing ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    description: String,
    words: Vec<WordEntry>,
}

impl Category {
    /// Assemble a category from source words
    ///
    /// Duplicates are removed case-insensitively; the first occurrence wins
    /// and keeps its authored spelling.
    #[must_use]
    pub fn assemble(
        name: impl Into<String>,
        description: impl Into<String>,
        words: impl IntoIterator<Item = WordEntry>,
    ) -> Self {
        let mut seen = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|word| seen.insert(word.key()))
            .collect();

        Self {
            name: name.into(),
            description: description.into(),
            words,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// Everything before the first occurrence of `marker`, or the whole string
fn before<'a>(text: &'a str, marker: &str) -> &'a str {
    text.find(marker).map_or(text, |at| &text[..at])
}

/// Recover a base category name from a decorated one
///
/// Strips `" - Level …"` and `" (Part …)"` decorations appended by earlier
/// leveling or splitting runs.
#[must_use]
pub fn base_name(name: &str) -> &str {
    before(before(name, " - Level"), " (Part").trim()
}

/// Recover a base category name from a `" - Pack {n}"` decorated one
#[must_use]
pub fn pack_base_name(name: &str) -> &str {
    before(name, " - Pack").trim()
}

/// Strip only a `" (Part …)"` decoration, keeping level suffixes
///
/// Used when releveling: a previous split run decorated names with part
/// markers, but distinct levels of one category stay distinct.
#[must_use]
pub fn part_base_name(name: &str) -> &str {
    before(name, " (Part").trim()
}

/// Recover a base description from a decorated one
///
/// Strips part and difficulty-band annotations appended by earlier runs.
#[must_use]
pub fn base_description(description: &str) -> &str {
    let mut base = description;
    for marker in [" - Part", " - Level", " - Easy", " - Medium", " - Hard"] {
        base = before(base, marker);
    }
    base.trim()
}

/// Remove any `P{n}:` numbering prefixes from a category name
///
/// Repeated prefixes (left behind by repeated numbering runs) are all
/// removed in one pass.
#[must_use]
pub fn strip_pack_prefix(name: &str) -> String {
    PACK_PREFIX.replace(name, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::word::parse_words;

    #[test]
    fn assemble_dedupes_case_insensitively() {
        let category = Category::assemble(
            "1A. SHORT A",
            "cat pattern",
            parse_words("cat, Cat, bat, CAT, rat"),
        );

        assert_eq!(category.word_count(), 3);
        assert_eq!(category.words()[0].text(), "cat");
        assert_eq!(category.words()[1].text(), "bat");
        assert_eq!(category.words()[2].text(), "rat");
    }

    #[test]
    fn assemble_keeps_input_order() {
        let category = Category::assemble("X", "", parse_words("zebra, apple, mango"));
        let texts: Vec<_> = category.words().iter().map(WordEntry::text).collect();
        assert_eq!(texts, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn base_name_strips_level_and_part() {
        assert_eq!(base_name("3A. CH DIGRAPH - Level 2A"), "3A. CH DIGRAPH");
        assert_eq!(base_name("3A. CH DIGRAPH (Part 2/3)"), "3A. CH DIGRAPH");
        assert_eq!(base_name("3A. CH DIGRAPH"), "3A. CH DIGRAPH");
    }

    #[test]
    fn pack_base_name_strips_pack_suffix() {
        assert_eq!(pack_base_name("1. SHORT VOWEL A - Pack 2"), "1. SHORT VOWEL A");
        assert_eq!(pack_base_name("1. SHORT VOWEL A"), "1. SHORT VOWEL A");
    }

    #[test]
    fn base_description_strips_annotations() {
        assert_eq!(base_description("ch words - Easy (1 syllable)"), "ch words");
        assert_eq!(base_description("ch words - Part 2 of 3"), "ch words");
        assert_eq!(base_description("ch words - Medium Part 1"), "ch words");
        assert_eq!(base_description("ch words"), "ch words");
    }

    #[test]
    fn strip_pack_prefix_removes_single_prefix() {
        assert_eq!(strip_pack_prefix("P12: 1A. SHORT A"), "1A. SHORT A");
    }

    #[test]
    fn strip_pack_prefix_removes_stacked_prefixes() {
        assert_eq!(strip_pack_prefix("P3: P12: 1A. SHORT A"), "1A. SHORT A");
    }

    #[test]
    fn strip_pack_prefix_leaves_plain_names() {
        assert_eq!(strip_pack_prefix("1A. SHORT A"), "1A. SHORT A");
    }
}
