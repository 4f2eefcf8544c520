//! The interactive session: rounds repeat until the player declines.

use std::io::{BufRead, Write};

use anyhow::Result;
use rand::Rng;
use tracing::warn;

use crate::console::Console;
use crate::domain::PlayerRecord;
use crate::game::round;
use crate::leaderboard::LeaderboardStore;

/// Run the whole session against the given console, RNG and store.
///
/// The leaderboard is loaded once up front and carried through as a value;
/// wins update it and trigger a synchronous save. Save failures are logged
/// and the session continues with the in-memory board.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    rng: &mut impl Rng,
    store: &LeaderboardStore,
) -> Result<()> {
    let mut board = store.load();

    console.line("Welcome to the Number Guessing Game with Leaderboard!")?;

    loop {
        let name = loop {
            let name = console.prompt("\nEnter your name: ")?;
            if !name.is_empty() {
                break name;
            }
            console.line("Please enter a name.")?;
        };

        let difficulty = round::prompt_difficulty(console)?;
        let outcome = round::play_round(console, rng, &name, difficulty)?;

        if outcome.won {
            board.record_win(PlayerRecord::new(name, outcome.attempts_used));
            if let Err(err) = store.save(&board) {
                warn!("Failed to save leaderboard: {err:#}");
            }
        }

        console.line("")?;
        console.text(&board.render())?;

        let again = console.prompt("\nDo you want to play again? (yes/no): ")?;
        if !again.eq_ignore_ascii_case("yes") {
            break;
        }
    }

    console.line("\nThanks for playing!")?;
    Ok(())
}
