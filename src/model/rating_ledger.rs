use tracing::{debug, info, Span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::{
    model::{
        constants::{DEFAULT_RATING, K_FACTOR},
        country_membership::CountryMembership,
        country_resolver::resolve_pair,
        elo::update_paired_ratings,
        rating_state::RatingState,
        structures::{
            match_record::{EntityId, MatchRecord},
            processing::MatchOutcome,
            rating_observation::RatingObservation,
            skip_reason::{SkipReason, SkipTally}
        }
    },
    utils::progress_utils::progress_span
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EloConfig {
    pub k_factor: f64,
    /// Rating of a club before its first match
    pub default_rating: i64
}

impl Default for EloConfig {
    fn default() -> Self {
        EloConfig {
            k_factor: K_FACTOR,
            default_rating: DEFAULT_RATING
        }
    }
}

/// Folds a chronologically sorted sequence of fixtures into ratings.
///
/// The ledger owns the rating of every club and records one [`RatingObservation`] per
/// club per rated fixture. Fixtures that cannot be rated are skipped and tallied,
/// they never interrupt processing.
///
/// # Notes
/// Fixtures are rated in the order they are given. Sorting them is up to the caller.
pub struct RatingLedger {
    config: EloConfig,
    state: RatingState,
    observations: Vec<RatingObservation>,
    skips: SkipTally,
    rated_matches: usize
}

impl RatingLedger {
    pub fn new(config: EloConfig) -> RatingLedger {
        RatingLedger::with_state(config, RatingState::new())
    }

    /// Starts from existing ratings instead of an empty table
    pub fn with_state(config: EloConfig, state: RatingState) -> RatingLedger {
        RatingLedger {
            config,
            state,
            observations: Vec::new(),
            skips: SkipTally::default(),
            rated_matches: 0
        }
    }

    pub fn process(&mut self, records: &[MatchRecord], membership: &CountryMembership) {
        let span = progress_span(records.len() as u64, "Rating matches");
        let _entered = span.as_ref().map(Span::enter);

        for record in records {
            self.step(record, membership);

            if let Some(span) = &span {
                span.pb_inc(1);
            }
        }
    }

    /// Rates a single fixture.
    ///
    /// Steps:
    /// 1. Both clubs must have a known domestic country, otherwise the fixture is skipped.
    /// 2. The score must be present and decodable, otherwise the fixture is skipped.
    /// 3. Both clubs are updated from their pre-match ratings and their observations
    ///     are appended, home side first.
    pub fn step(&mut self, record: &MatchRecord, membership: &CountryMembership) -> MatchOutcome {
        match self.rate(record, membership) {
            Ok((home, away)) => {
                self.state.set(&home.entity, home.rating);
                self.state.set(&away.entity, away.rating);
                self.observations.push(home.clone());
                self.observations.push(away.clone());
                self.rated_matches += 1;

                MatchOutcome::Rated { home, away }
            }
            Err(reason) => {
                debug!(
                    "Skipping {} vs {} on {} ({}): {}",
                    record.home, record.away, record.date, record.competition, reason
                );
                self.skips.record(reason);

                MatchOutcome::Skipped(reason)
            }
        }
    }

    /// Computes both observations for a fixture without touching the ledger
    fn rate(
        &self,
        record: &MatchRecord,
        membership: &CountryMembership
    ) -> Result<(RatingObservation, RatingObservation), SkipReason> {
        if !membership.contains(&record.home) || !membership.contains(&record.away) {
            return Err(SkipReason::UnresolvedEntity);
        }

        let score = record.score()?;
        let countries = resolve_pair(&record.competition, &record.home, &record.away, membership)?;

        let rating_home = self.state.get_or(&record.home, self.config.default_rating);
        let rating_away = self.state.get_or(&record.away, self.config.default_rating);
        let (new_home, new_away) = update_paired_ratings(rating_home, rating_away, score, self.config.k_factor);

        Ok((
            RatingObservation {
                date: record.date,
                country: countries.home_country,
                entity: record.home.clone(),
                rating: new_home
            },
            RatingObservation {
                date: record.date,
                country: countries.away_country,
                entity: record.away.clone(),
                rating: new_away
            }
        ))
    }

    pub fn state(&self) -> &RatingState {
        &self.state
    }

    pub fn observations(&self) -> &[RatingObservation] {
        &self.observations
    }

    pub fn skips(&self) -> &SkipTally {
        &self.skips
    }

    pub fn finish(self) -> LedgerReport {
        info!(
            "Rated {} matches ({} skipped), {} clubs rated",
            self.rated_matches,
            self.skips.total(),
            self.state.len()
        );

        LedgerReport {
            observations: self.observations,
            skips: self.skips,
            rated_matches: self.rated_matches,
            state: self.state
        }
    }
}

/// Everything a finished ledger run produced
#[derive(Debug, Clone)]
pub struct LedgerReport {
    /// Rating time series, in emission order
    pub observations: Vec<RatingObservation>,
    pub skips: SkipTally,
    pub rated_matches: usize,
    /// Ratings after the last fixture
    pub state: RatingState
}

impl LedgerReport {
    /// Rating history of a single club
    pub fn entity_history(&self, entity: &str) -> Vec<&RatingObservation> {
        self.observations.iter().filter(|o| o.entity == entity).collect()
    }

    /// Every observation attributed to a country
    pub fn country_observations(&self, country: &str) -> Vec<&RatingObservation> {
        self.observations.iter().filter(|o| o.country == country).collect()
    }

    pub fn standings(&self) -> Vec<(&EntityId, i64)> {
        self.state.standings()
    }
}

/// Rates `records` in order, starting from an empty rating table
pub fn process(records: &[MatchRecord], membership: &CountryMembership, config: EloConfig) -> LedgerReport {
    let mut ledger = RatingLedger::new(config);
    ledger.process(records, membership);
    ledger.finish()
}
