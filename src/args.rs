use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::{
    dataset::ratings::OutputFormat,
    model::{
        constants::{DEFAULT_CONTINENTAL_CONTEXT, DEFAULT_RATING, K_FACTOR},
        rating_ledger::EloConfig
    }
};

#[derive(Parser, Clone, Debug)]
#[command(
    display_name = "Football Elo Processor",
    long_about = "Generates historical Elo ratings for football clubs from match results"
)]
#[command(group(ArgGroup::new("input").required(true).args(["results", "countries_dir"])))]
pub struct Args {
    /// Merged results file with the columns date,country,home_team,score,away_team
    #[arg(short, long, env = "RESULTS_FILE")]
    pub results: Option<PathBuf>,

    /// Directory of per-country season files, laid out as <DIR>/<country>/<season>.
    /// Season files have the columns date,score,home_team,away_team
    #[arg(short = 'd', long, env = "COUNTRIES_DIR")]
    pub countries_dir: Option<PathBuf>,

    /// Also save the merged, date-sorted results to this file
    #[arg(long, env = "SAVE_RESULTS")]
    pub save_results: Option<PathBuf>,

    /// Where to write the rating time series
    #[arg(short, long, env = "RATINGS_FILE", default_value = "all_time_ratings.csv")]
    pub output: PathBuf,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Controls how much a single result moves a rating
    #[arg(short, long, env = "K_FACTOR", default_value_t = K_FACTOR)]
    pub k_factor: f64,

    /// Rating of a club before its first match
    #[arg(long, env = "DEFAULT_RATING", default_value_t = DEFAULT_RATING)]
    pub default_rating: i64,

    /// Name of the competition context holding cross-country fixtures
    #[arg(long, env = "CONTINENTAL_CONTEXT", default_value = DEFAULT_CONTINENTAL_CONTEXT)]
    pub continental: String,

    /// Log level (trace, debug, info, warn, error) or a full filter directive,
    /// e.g. `elo_processor::model=debug`
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}

impl Args {
    pub fn elo_config(&self) -> EloConfig {
        EloConfig {
            k_factor: self.k_factor,
            default_rating: self.default_rating
        }
    }
}
