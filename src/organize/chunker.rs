//! Bounded chunk splitting
//!
//! Splits an ordered word sequence into contiguous, order-preserving chunks
//! no longer than a configured ceiling. Concatenating the chunks in order
//! reproduces the input exactly; callers label multi-chunk output with the
//! part helpers below.

/// Split a sequence into contiguous chunks of at most `max_size` items
///
/// Empty input yields no chunks; non-empty input never yields an empty
/// chunk, and `len <= max_size` yields the input as a single chunk.
///
/// # Panics
/// Panics if `max_size` is zero — a caller contract violation.
#[must_use]
pub fn split<T>(words: &[T], max_size: usize) -> Vec<&[T]> {
    assert!(max_size > 0, "chunk size must be at least 1");
    words.chunks(max_size).collect()
}

/// Category name for chunk `index` (1-based) of `total`
#[must_use]
pub fn part_name(name: &str, index: usize, total: usize) -> String {
    format!("{name} (Part {index}/{total})")
}

/// Description for chunk `index` (1-based) of `total`
#[must_use]
pub fn part_description(description: &str, index: usize, total: usize) -> String {
    format!("{description} - Part {index} of {total}")
}
