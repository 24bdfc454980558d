use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("No score recorded")]
    Missing,

    #[error("Unable to decode score '{0}'")]
    Malformed(String)
}

/// Full-time goals of a played fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    pub home: u32,
    pub away: u32
}

impl Score {
    pub fn new(home: u32, away: u32) -> Score {
        Score { home, away }
    }

    /// Decodes the optional score text of a fixture. Empty text is treated the same
    /// as an absent score (unplayed or cancelled fixtures).
    pub fn decode(raw: Option<&str>) -> Result<Score, ScoreError> {
        match raw {
            Some(text) if !text.trim().is_empty() => text.parse(),
            _ => Err(ScoreError::Missing)
        }
    }
}

impl FromStr for Score {
    type Err = ScoreError;

    /// Parses scores of the form `3 - 1`. All whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let malformed = || ScoreError::Malformed(s.to_string());

        let mut parts = compact.split('-');
        let (home, away) = match (parts.next(), parts.next(), parts.next()) {
            (Some(home), Some(away), None) => (home, away),
            _ => return Err(malformed())
        };

        Ok(Score {
            home: home.parse().map_err(|_| malformed())?,
            away: away.parse().map_err(|_| malformed())?
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::model::structures::score::{Score, ScoreError};

    #[test]
    fn test_parse_spaced_score() {
        assert_eq!("3 - 1".parse::<Score>(), Ok(Score::new(3, 1)));
    }

    #[test]
    fn test_parse_compact_score() {
        assert_eq!("0-0".parse::<Score>(), Ok(Score::new(0, 0)));
        assert_eq!(" 10 -2 ".parse::<Score>(), Ok(Score::new(10, 2)));
    }

    #[test]
    fn test_parse_malformed() {
        for raw in ["3 : 1", "3 - 1 - 0", "a - b", "-1 - 2", "3 -", "17:00", "P - P"] {
            assert_eq!(
                raw.parse::<Score>(),
                Err(ScoreError::Malformed(raw.to_string())),
                "expected '{}' to be malformed",
                raw
            );
        }
    }

    #[test]
    fn test_decode_missing() {
        assert_eq!(Score::decode(None), Err(ScoreError::Missing));
        assert_eq!(Score::decode(Some("")), Err(ScoreError::Missing));
        assert_eq!(Score::decode(Some("   ")), Err(ScoreError::Missing));
    }

    #[test]
    fn test_decode_present() {
        assert_eq!(Score::decode(Some("2 - 2")), Ok(Score::new(2, 2)));
    }
}
