//! Core domain types

pub mod category;
pub mod pack;
pub mod word;

pub use category::Category;
pub use pack::Pack;
pub use word::{WordEntry, WordError, join_words, parse_words};
