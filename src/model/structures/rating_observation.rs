use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::structures::match_record::EntityId;

/// A club's rating right after one of its matches. Observations are emitted in match order,
/// the home side's before the away side's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingObservation {
    pub date: NaiveDate,
    pub country: String,
    #[serde(rename = "team")]
    pub entity: EntityId,
    pub rating: i64
}
