use serde::{Deserialize, Serialize};

/// One line of a season file (`<countries dir>/<country>/<season>`).
/// The competition is implied by the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonRow {
    /// `dd/mm/yyyy`
    pub date: String,
    pub score: Option<String>,
    pub home_team: String,
    pub away_team: String
}

/// One line of the merged all-time results file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllTimeRow {
    /// `dd/mm/yyyy`
    pub date: String,
    pub country: String,
    pub home_team: String,
    pub score: Option<String>,
    pub away_team: String
}
