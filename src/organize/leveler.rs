//! Difficulty-leveled re-bucketing of a category
//!
//! Scores every word, decides whether the category spans real difficulty
//! bands, and emits size-bounded leveled rows. Words are never dropped or
//! duplicated: the union of the emitted rows is exactly the category's
//! deduplicated word list.

use crate::core::{Category, WordEntry};
use crate::organize::chunker;
use crate::organize::difficulty::{Band, difficulty_score};

/// One leveled output row, ready for the bank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeveledRow {
    pub name: String,
    pub description: String,
    pub words: Vec<WordEntry>,
}

/// Chunk letter suffix: `A`, `B`, `C`, …
fn chunk_letter(index: usize) -> char {
    (b'A' + index as u8) as char
}

/// Re-bucket a category's words into leveled, size-capped rows
///
/// When the score spread is at most [`SINGLE_BAND_SPREAD`], the whole
/// category is one band: a single chunk keeps the original name and
/// description untouched, while multiple chunks become `Level 1A`,
/// `Level 1B`, … Otherwise words partition into Easy/Medium/Hard bands by
/// their own score; empty bands are omitted.
///
/// Within any band, words sort ascending by score; the sort is stable, so
/// ties keep their input order.
///
/// [`SINGLE_BAND_SPREAD`]: crate::config::SINGLE_BAND_SPREAD
///
/// # Panics
/// Panics if `max_size` is zero (propagated from the chunker).
#[must_use]
pub fn level(category: &Category, max_size: usize) -> Vec<LeveledRow> {
    if category.words().is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(WordEntry, u32)> = category
        .words()
        .iter()
        .map(|word| (word.clone(), difficulty_score(word)))
        .collect();
    scored.sort_by_key(|&(_, score)| score);

    let min_score = scored[0].1;
    let max_score = scored[scored.len() - 1].1;

    if max_score - min_score <= crate::config::SINGLE_BAND_SPREAD {
        return level_uniform(category, &scored, max_size);
    }

    let mut rows = Vec::new();
    for band in Band::ALL {
        let members: Vec<WordEntry> = scored
            .iter()
            .filter(|&&(_, score)| Band::for_score(score) == band)
            .map(|(word, _)| word.clone())
            .collect();

        if members.is_empty() {
            continue;
        }

        let chunks = chunker::split(&members, max_size);
        if chunks.len() == 1 {
            rows.push(LeveledRow {
                name: format!("{} - Level {}", category.name(), band.level()),
                description: format!("{} - {}", category.description(), band.label()),
                words: members.clone(),
            });
        } else {
            for (idx, chunk) in chunks.iter().enumerate() {
                rows.push(LeveledRow {
                    name: format!(
                        "{} - Level {}{}",
                        category.name(),
                        band.level(),
                        chunk_letter(idx)
                    ),
                    description: format!(
                        "{} - {} Part {}",
                        category.description(),
                        band.name(),
                        idx + 1
                    ),
                    words: chunk.to_vec(),
                });
            }
        }
    }

    rows
}

/// All words score within the single-band spread: split by quantity only
fn level_uniform(
    category: &Category,
    scored: &[(WordEntry, u32)],
    max_size: usize,
) -> Vec<LeveledRow> {
    let words: Vec<WordEntry> = scored.iter().map(|(word, _)| word.clone()).collect();
    let chunks = chunker::split(&words, max_size);

    if chunks.len() == 1 {
        return vec![LeveledRow {
            name: category.name().to_string(),
            description: category.description().to_string(),
            words,
        }];
    }

    chunks
        .iter()
        .enumerate()
        .map(|(idx, chunk)| LeveledRow {
            name: format!("{} - Level 1{}", category.name(), chunk_letter(idx)),
            description: format!(
                "{} - Part {} (same difficulty)",
                category.description(),
                idx + 1
            ),
            words: chunk.to_vec(),
        })
        .collect()
}
