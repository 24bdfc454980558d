use std::collections::HashMap;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::model::{country_resolver::ResolveError, structures::score::ScoreError};

/// Why a fixture did not contribute to the ratings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SkipReason {
    /// One of the clubs never appeared as a home side in a domestic league
    #[strum(serialize = "unresolved entity")]
    UnresolvedEntity,
    #[strum(serialize = "malformed score")]
    MalformedScore,
    /// Unplayed or cancelled fixture
    #[strum(serialize = "missing score")]
    MissingScore
}

impl From<ScoreError> for SkipReason {
    fn from(e: ScoreError) -> Self {
        match e {
            ScoreError::Missing => SkipReason::MissingScore,
            ScoreError::Malformed(_) => SkipReason::MalformedScore
        }
    }
}

impl From<ResolveError> for SkipReason {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::UnresolvedEntity(_) => SkipReason::UnresolvedEntity
        }
    }
}

/// Number of skipped fixtures per reason
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipTally {
    counts: HashMap<SkipReason, usize>
}

impl SkipTally {
    pub fn record(&mut self, reason: SkipReason) {
        *self.counts.entry(reason).or_insert(0) += 1;
    }

    pub fn count(&self, reason: SkipReason) -> usize {
        self.counts.get(&reason).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Counts for every reason, in declaration order
    pub fn entries(&self) -> Vec<(SkipReason, usize)> {
        SkipReason::iter().map(|reason| (reason, self.count(reason))).collect()
    }
}
