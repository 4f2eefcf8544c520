//! Persisted top-3 leaderboard of best (fewest-attempt) wins

mod board;
mod store;

pub use board::{Leaderboard, MAX_ENTRIES};
pub use store::LeaderboardStore;
