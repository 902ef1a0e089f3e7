//! Word list reshaping: chunking, difficulty scoring, leveling

pub mod chunker;
pub mod difficulty;
pub mod leveler;

pub use chunker::split;
pub use difficulty::{Band, difficulty_score, syllables};
pub use leveler::{LeveledRow, level};
