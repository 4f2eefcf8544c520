use std::fmt::Write;

use crate::domain::PlayerRecord;

/// Maximum number of entries the leaderboard retains.
pub const MAX_ENTRIES: usize = 3;

/// The in-memory leaderboard: best wins first, capped at [`MAX_ENTRIES`].
///
/// This is a plain value passed through the session; persistence lives in
/// [`super::LeaderboardStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<PlayerRecord>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from records in their stored order. The order is kept as-is
    /// until the next win re-sorts it.
    pub fn from_records(entries: Vec<PlayerRecord>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PlayerRecord] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a win, keeping the list sorted ascending by attempts and
    /// capped at [`MAX_ENTRIES`]. The sort is stable, so ties keep their
    /// earlier relative order.
    pub fn record_win(&mut self, entry: PlayerRecord) {
        self.entries.push(entry);
        self.entries.sort_by_key(|record| record.attempts);
        self.entries.truncate(MAX_ENTRIES);
    }

    /// Player-facing rendering, one rank per line.
    pub fn render(&self) -> String {
        let mut out = String::from("Leaderboard (Top 3 Players):\n");
        if self.entries.is_empty() {
            out.push_str("No winners yet.\n");
            return out;
        }
        for (rank, record) in self.entries.iter().enumerate() {
            // Infallible for String, but Write wants the Result used.
            let _ = writeln!(
                out,
                "{}. {} - {} attempts",
                rank + 1,
                record.name,
                record.attempts
            );
        }
        out
    }
}
