//! Core domain types for the game

mod difficulty;
mod player;

pub use difficulty::Difficulty;
pub use player::{PlayerRecord, RecordParseError};
