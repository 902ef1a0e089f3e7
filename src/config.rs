//! Named defaults for every tunable the commands share
//!
//! The thresholds below were tuned by hand against the live word bank;
//! commands expose them as flags so a one-off run can override without
//! touching code.

/// Default bank file, relative to the working directory
pub const DEFAULT_BANK_FILE: &str = "Phonics_Word_Bank.tsv";

/// Default duplicate report written by `levels`, beside the bank file
pub const DUPLICATE_REPORT_FILE: &str = "Duplicate_Report.txt";

/// Default JSON snapshot written by `extract`
pub const DEFAULT_EXPORT_FILE: &str = "all_packs_extracted.json";

/// Default regrouped JSON written by `group`
pub const DEFAULT_GROUPED_FILE: &str = "packs_reorganized.json";

/// Categories with fewer words than this are skipped by `packs`
pub const MIN_PACK_WORDS: usize = 10;

/// Chunk ceiling used by `packs`
pub const SIMPLE_PACK_SIZE: usize = 30;

/// Chunk ceiling used by `levels`
pub const LEVEL_CHUNK_SIZE: usize = 35;

/// Chunk ceiling used by `split`
pub const SPLIT_CHUNK_SIZE: usize = 40;

/// Rows shown by `preview`
pub const PREVIEW_ROWS: usize = 40;

/// Words shown per row by `preview` before truncating
pub const PREVIEW_WORDS: usize = 10;

/// Highest difficulty score still considered Easy
pub const EASY_MAX_SCORE: u32 = 15;

/// Highest difficulty score still considered Medium
pub const MEDIUM_MAX_SCORE: u32 = 25;

/// Score spread at or below which a category collapses to a single band
pub const SINGLE_BAND_SPREAD: u32 = 5;

/// Category-name markers whose rows keep words already seen elsewhere
///
/// High-frequency and statutory exception lists intentionally repeat words
/// that also appear in phonics pattern rows.
pub const KEEP_CATEGORY_MARKERS: [&str; 3] = ["FREQUENCY", "EXCEPTION", "STATUTORY"];

/// Pattern locating the word pack literal inside the app source
pub const WORD_PACKS_PATTERN: &str = r"let wordPacks = (\[[\s\S]*?\]);";
