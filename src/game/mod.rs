//! The guessing game itself

pub mod round;

pub use round::{ATTEMPT_BUDGET, RoundOutcome, play_round, prompt_difficulty};
