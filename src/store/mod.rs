//! Word bank persistence

mod embedded;
pub mod sheet;

pub use embedded::SEED_ROWS;
pub use sheet::{Row, Sheet};
