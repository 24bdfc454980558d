use crate::model::structures::{rating_observation::RatingObservation, skip_reason::SkipReason};

/// Result of feeding a single fixture to the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Rated {
        home: RatingObservation,
        away: RatingObservation
    },
    Skipped(SkipReason)
}

impl MatchOutcome {
    pub fn is_rated(&self) -> bool {
        matches!(self, MatchOutcome::Rated { .. })
    }
}
