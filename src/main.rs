use anyhow::{Context, Result};
use clap::Parser;
use elo_processor::{
    args::Args,
    dataset::{
        ratings::save_ratings,
        results::{read_all_time_results, read_countries_dir, sort_chronologically, write_all_time_results}
    },
    model::{country_membership::CountryMembership, rating_ledger::process, structures::match_record::MatchRecord},
    utils::logging::logging_subscriber
};
use itertools::Itertools;
use tracing::{info, warn};
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    logging_subscriber(&args.log_level).init();

    // 1. Load and order every fixture
    let mut records = load_results(&args)?;
    sort_chronologically(&mut records);

    if let Some(path) = &args.save_results {
        write_all_time_results(path, &records, &args.continental)
            .with_context(|| format!("Failed to save results to {}", path.display()))?;
    }

    // 2. Attribute clubs to the leagues they host fixtures in
    let membership = CountryMembership::from_records(&records);
    info!("{} clubs found in domestic leagues", membership.len());

    for (club, countries) in membership.ambiguous() {
        warn!("'{}' plays in several countries: {}", club, countries.iter().join(", "));
    }

    // 3. Rate
    let report = process(&records, &membership, args.elo_config());

    for (reason, count) in report.skips.entries() {
        info!("Skipped {} matches: {}", count, reason);
    }

    // 4. Save the rating time series
    save_ratings(&args.output, &report.observations, args.format)
        .with_context(|| format!("Failed to save ratings to {}", args.output.display()))?;

    Ok(())
}

fn load_results(args: &Args) -> Result<Vec<MatchRecord>> {
    match (&args.results, &args.countries_dir) {
        (Some(path), _) => read_all_time_results(path, &args.continental)
            .with_context(|| format!("Failed to read results from {}", path.display())),
        (None, Some(dir)) => read_countries_dir(dir, &args.continental)
            .with_context(|| format!("Failed to read season files below {}", dir.display())),
        (None, None) => anyhow::bail!("Either --results or --countries-dir must be given")
    }
}
