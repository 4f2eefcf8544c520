//! A single round: difficulty menu, target selection, guess loop, summary.

use std::io::{BufRead, Write};

use anyhow::Result;
use rand::Rng;

use crate::console::Console;
use crate::domain::Difficulty;

/// Guesses allowed per round.
pub const ATTEMPT_BUDGET: u32 = 7;

/// What happened in one round, for the summary and the leaderboard update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub player: String,
    pub difficulty: Difficulty,
    pub target: u32,
    /// The last guess entered, win or lose.
    pub final_guess: i64,
    pub attempts_used: u32,
    pub won: bool,
}

/// Pick the round's target: uniform in `[1, upper_bound]` inclusive.
pub fn roll_target(rng: &mut impl Rng, difficulty: Difficulty) -> u32 {
    rng.gen_range(1..=difficulty.upper_bound())
}

/// Show the difficulty menu and read the choice. Anything outside 1-3,
/// including non-numeric input, falls back to Medium with a notice.
pub fn prompt_difficulty<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Difficulty> {
    console.line("\nSelect Difficulty Level:")?;
    console.line("1. Easy (1 to 50)")?;
    console.line("2. Medium (1 to 100)")?;
    console.line("3. Hard (1 to 500)")?;
    let reply = console.prompt("Enter your choice (1-3): ")?;

    match reply.parse().ok().and_then(Difficulty::from_choice) {
        Some(difficulty) => Ok(difficulty),
        None => {
            console.line("Invalid choice. Defaulting to Medium.")?;
            Ok(Difficulty::Medium)
        }
    }
}

/// Run the guess loop for one player and print the post-round summary.
///
/// A guess that does not parse as an integer is re-prompted and does not
/// consume an attempt.
pub fn play_round<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    rng: &mut impl Rng,
    player: &str,
    difficulty: Difficulty,
) -> Result<RoundOutcome> {
    let target = roll_target(rng, difficulty);

    console.line(&format!(
        "\nI've selected a number between 1 and {}.",
        difficulty.upper_bound()
    ))?;
    console.line(&format!("You have {ATTEMPT_BUDGET} attempts. Good luck!"))?;

    let mut attempts_used = 0;
    let mut final_guess = 0_i64;
    let mut won = false;

    while attempts_used < ATTEMPT_BUDGET {
        let guess =
            console.prompt_int(&format!("Attempt {}: Enter your guess: ", attempts_used + 1))?;
        final_guess = guess;
        attempts_used += 1;

        if guess < i64::from(target) {
            console.line("Too low!")?;
        } else if guess > i64::from(target) {
            console.line("Too high!")?;
        } else {
            won = true;
            console.line(&format!(
                "Correct! You guessed the number in {attempts_used} tries."
            ))?;
            break;
        }
    }

    if !won {
        console.line(&format!("Out of attempts! The number was: {target}"))?;
    }

    let outcome = RoundOutcome {
        player: player.to_string(),
        difficulty,
        target,
        final_guess,
        attempts_used,
        won,
    };
    print_summary(console, &outcome)?;
    Ok(outcome)
}

fn print_summary<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    outcome: &RoundOutcome,
) -> Result<()> {
    console.line("\nGame Summary:")?;
    console.line(&format!("Player: {}", outcome.player))?;
    console.line(&format!("Level: {}", outcome.difficulty))?;
    console.line(&format!("Number to guess: {}", outcome.target))?;
    console.line(&format!("Your final guess: {}", outcome.final_guess))?;
    console.line(&format!("Total attempts used: {}", outcome.attempts_used))?;
    console.line(&format!(
        "Result: {}",
        if outcome.won { "Win" } else { "Loss" }
    ))?;
    Ok(())
}
