pub mod competition;
pub mod match_record;
pub mod processing;
pub mod rating_observation;
pub mod score;
pub mod skip_reason;
