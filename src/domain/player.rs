use std::fmt;
use std::str::FromStr;

/// Error type for parsing a persisted leaderboard line
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordParseError {
    #[error("expected `name,attempts`, got {0:?}")]
    MissingField(String),

    #[error("empty player name")]
    EmptyName,

    #[error("invalid attempt count {0:?}")]
    InvalidAttempts(String),

    #[error("attempt count must be at least 1")]
    ZeroAttempts,
}

/// A single recorded win: who won and in how many guesses.
///
/// Persisted one per line as `name,attempts`. The format has no escaping,
/// so a name containing a comma is unsupported: the record saves, but the
/// line is dropped as malformed on the next load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub name: String,
    pub attempts: u32,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>, attempts: u32) -> Self {
        Self {
            name: name.into(),
            attempts,
        }
    }
}

impl fmt::Display for PlayerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.name, self.attempts)
    }
}

impl FromStr for PlayerRecord {
    type Err = RecordParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        // Split on the first comma only; extra fields make the attempt
        // count unparseable and fail below.
        let (name, attempts) = line
            .split_once(',')
            .ok_or_else(|| RecordParseError::MissingField(line.to_string()))?;

        if name.is_empty() {
            return Err(RecordParseError::EmptyName);
        }

        let attempts: u32 = attempts
            .trim()
            .parse()
            .map_err(|_| RecordParseError::InvalidAttempts(attempts.to_string()))?;

        if attempts == 0 {
            return Err(RecordParseError::ZeroAttempts);
        }

        Ok(Self {
            name: name.to_string(),
            attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record() {
        let record: PlayerRecord = "alice,3".parse().unwrap();
        assert_eq!(record, PlayerRecord::new("alice", 3));
    }

    #[test]
    fn test_parse_rejects_missing_comma() {
        let err = "alice 3".parse::<PlayerRecord>().unwrap_err();
        assert!(matches!(err, RecordParseError::MissingField(_)));
    }

    #[test]
    fn test_parse_rejects_extra_fields() {
        // A comma in the name shifts the attempt field; there is no escaping.
        let err = "a,b,3".parse::<PlayerRecord>().unwrap_err();
        assert!(matches!(err, RecordParseError::InvalidAttempts(_)));
    }

    #[test]
    fn test_parse_rejects_bad_attempts() {
        let err = "alice,many".parse::<PlayerRecord>().unwrap_err();
        assert!(matches!(err, RecordParseError::InvalidAttempts(_)));

        let err = "alice,0".parse::<PlayerRecord>().unwrap_err();
        assert_eq!(err, RecordParseError::ZeroAttempts);
    }

    #[test]
    fn test_parse_rejects_empty_name() {
        let err = ",4".parse::<PlayerRecord>().unwrap_err();
        assert_eq!(err, RecordParseError::EmptyName);
    }

    #[test]
    fn test_display_matches_line_format() {
        assert_eq!(PlayerRecord::new("bob", 7).to_string(), "bob,7");
    }
}
