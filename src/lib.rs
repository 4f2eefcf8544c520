//! hilo - a console number-guessing game with a persisted leaderboard
//!
//! The game picks a random target scaled by a difficulty choice, gives
//! too-low / too-high feedback across a fixed budget of 7 guesses, and
//! records wins on a top-3 leaderboard persisted as `name,attempts` lines
//! in a plain text file.
//!
//! The binary is a thin wrapper over this library so the whole session can
//! be driven from tests with scripted console input.

pub mod console;
pub mod domain;
pub mod game;
pub mod leaderboard;
pub mod session;

pub use domain::*;
