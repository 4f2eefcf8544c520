use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use super::Leaderboard;
use crate::domain::PlayerRecord;

/// Reads and writes the plain-text leaderboard file, one `name,attempts`
/// record per line.
#[derive(Debug, Clone)]
pub struct LeaderboardStore {
    path: PathBuf,
}

impl LeaderboardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the leaderboard, best-effort. A missing file is an empty board.
    /// An unreadable file is logged and treated as empty; a malformed line
    /// is logged and skipped so one bad line does not lose the rest. The
    /// session continues in every case.
    pub fn load(&self) -> Leaderboard {
        if !self.path.exists() {
            return Leaderboard::new();
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                warn!(
                    "Failed to read leaderboard file {}: {}",
                    self.path.display(),
                    err
                );
                return Leaderboard::new();
            }
        };

        let mut records = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            match line.parse::<PlayerRecord>() {
                Ok(record) => records.push(record),
                Err(err) => warn!(
                    "Skipping malformed leaderboard line {} in {}: {}",
                    index + 1,
                    self.path.display(),
                    err
                ),
            }
        }

        Leaderboard::from_records(records)
    }

    /// Overwrite the file with the current leaderboard, in board order.
    /// The file handle is scoped to this call; no retry on failure.
    pub fn save(&self, board: &Leaderboard) -> Result<()> {
        let mut content = String::new();
        for record in board.entries() {
            content.push_str(&record.to_string());
            content.push('\n');
        }

        std::fs::write(&self.path, content).with_context(|| {
            format!(
                "failed to write leaderboard file: {}",
                self.path.display()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> LeaderboardStore {
        LeaderboardStore::new(dir.path().join("leaderboard.txt"))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(store_in(&dir).load().is_empty());
    }

    #[test]
    fn test_load_keeps_file_order() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "A,3\nB,2\n").unwrap();

        let board = store.load();
        assert_eq!(
            board.entries(),
            &[PlayerRecord::new("A", 3), PlayerRecord::new("B", 2)]
        );
    }

    #[test]
    fn test_load_skips_malformed_lines() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "A,3\nnot a record\nB,2\n,5\nC,zero\n").unwrap();

        let board = store.load();
        assert_eq!(
            board.entries(),
            &[PlayerRecord::new("A", 3), PlayerRecord::new("B", 2)]
        );
    }

    #[test]
    fn test_save_writes_one_line_per_record() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut board = Leaderboard::new();
        board.record_win(PlayerRecord::new("bob", 5));
        board.record_win(PlayerRecord::new("alice", 2));
        store.save(&board).unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "alice,2\nbob,5\n");
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "stale,9\nstale,9\nstale,9\n").unwrap();

        let mut board = Leaderboard::new();
        board.record_win(PlayerRecord::new("fresh", 1));
        store.save(&board).unwrap();

        assert_eq!(
            std::fs::read_to_string(store.path()).unwrap(),
            "fresh,1\n"
        );
    }
}
