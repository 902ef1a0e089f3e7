//! Phonics Word Bank Toolkit
//!
//! Builds, reshapes, and exports the tabular word bank behind a children's
//! reading app. Each command is a short batch run: load the whole bank,
//! transform it in memory, write the whole result back (or emit a JSON
//! snapshot for the app).
//!
//! # Quick Start
//!
//! ```rust
//! use phonics_wordbank::core::{Category, WordEntry};
//! use phonics_wordbank::organize::{level, syllables};
//!
//! assert_eq!(syllables("elephant"), 3);
//!
//! let words = ["cat", "elephant"].map(|w| WordEntry::new(w).unwrap());
//! let category = Category::assemble("DEMO", "demo words", words);
//! let leveled = level(&category, 35);
//! assert_eq!(leveled.len(), 2);
//! ```

// Core domain types
pub mod core;

// Word list reshaping
pub mod organize;

// Bank persistence and embedded seed data
pub mod store;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Shared defaults
pub mod config;
