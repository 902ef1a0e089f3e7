//! Lexical entries in the word bank
//!
//! A `WordEntry` keeps the display spelling exactly as authored while
//! deduplication and lookups run on a lower-cased key.

use std::fmt;

/// A single word from a category's word list
///
/// Case-preserving for display, case-insensitive for deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    text: String,
}

/// Error type for invalid word entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    EmbeddedComma(String),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::EmbeddedComma(word) => {
                write!(f, "Word '{word}' contains a comma, which the bank format cannot store")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl WordEntry {
    /// Create a new entry from a raw string
    ///
    /// Surrounding whitespace is trimmed. The stored word list format uses
    /// commas as separators with no escaping, so comma-bearing words are
    /// rejected rather than silently corrupting a row.
    ///
    /// # Errors
    /// Returns `WordError` if the trimmed text is empty or contains a comma.
    ///
    /// # Examples
    /// ```
    /// use phonics_wordbank::core::WordEntry;
    ///
    /// let word = WordEntry::new("  Christmas ").unwrap();
    /// assert_eq!(word.text(), "Christmas");
    ///
    /// assert!(WordEntry::new("   ").is_err());
    /// assert!(WordEntry::new("one, two").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into().trim().to_string();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if text.contains(',') {
            return Err(WordError::EmbeddedComma(text));
        }

        Ok(Self { text })
    }

    /// The word as authored
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lower-cased key used for case-insensitive deduplication
    #[inline]
    #[must_use]
    pub fn key(&self) -> String {
        self.text.to_lowercase()
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Parse a stored word cell into entries
///
/// Splits on commas, trims each piece, and drops empty pieces (a trailing
/// comma or doubled separator in hand-authored data is not a word).
#[must_use]
pub fn parse_words(cell: &str) -> Vec<WordEntry> {
    cell.split(',')
        .filter_map(|piece| WordEntry::new(piece).ok())
        .collect()
}

/// Serialize entries back into the stored cell format
#[must_use]
pub fn join_words(words: &[WordEntry]) -> String {
    words
        .iter()
        .map(WordEntry::text)
        .collect::<Vec<_>>()
        .join(", ")
}
