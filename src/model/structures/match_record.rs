use chrono::NaiveDate;

use crate::model::structures::{
    competition::Competition,
    score::{Score, ScoreError}
};

/// Clubs are identified by their name as written in the results data.
/// Clubs sharing a name across countries (e.g. "Aris") share a single id.
pub type EntityId = String;

/// A single fixture as harvested from the results listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub date: NaiveDate,
    pub competition: Competition,
    pub home: EntityId,
    pub away: EntityId,
    /// Raw score text, e.g. `3 - 1`. Absent for fixtures that were not played.
    pub score: Option<String>
}

impl MatchRecord {
    pub fn score(&self) -> Result<Score, ScoreError> {
        Score::decode(self.score.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        model::structures::score::{Score, ScoreError},
        utils::test_utils::{date, generate_domestic_record}
    };

    #[test]
    fn test_score_decoding() {
        let played = generate_domestic_record(date(2019, 8, 10), "France", "PSG", "Nimes", Some("3 - 0"));
        let unplayed = generate_domestic_record(date(2019, 8, 10), "France", "PSG", "Nimes", None);

        assert_eq!(played.score(), Ok(Score::new(3, 0)));
        assert_eq!(unplayed.score(), Err(ScoreError::Missing));
    }
}
