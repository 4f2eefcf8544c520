use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;

use hilo::console::Console;
use hilo::leaderboard::LeaderboardStore;
use hilo::session;

#[derive(Parser)]
#[command(name = "hilo")]
#[command(about = "Console number-guessing game with a persistent top-3 leaderboard")]
#[command(version)]
struct Cli {
    /// Path to the leaderboard file
    #[arg(short, long, default_value = "leaderboard.txt")]
    leaderboard: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let store = LeaderboardStore::new(cli.leaderboard);
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut rng = rand::thread_rng();

    session::run(&mut console, &mut rng, &store)
}
