use std::{
    fs,
    path::{Path, PathBuf}
};

use chrono::NaiveDate;
use tracing::{info, warn, Span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::{
    dataset::{
        dataset_structs::{AllTimeRow, SeasonRow},
        DatasetError
    },
    model::structures::{competition::Competition, match_record::MatchRecord},
    utils::progress_utils::progress_span
};

const DATE_FORMAT: &str = "%d/%m/%Y";

fn parse_date(value: &str, path: &Path) -> Result<NaiveDate, DatasetError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| DatasetError::InvalidDate {
        value: value.to_string(),
        path: path.to_path_buf()
    })
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Competition context named by a country directory
fn context_name(country_dir: &Path) -> Result<&str, DatasetError> {
    country_dir
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| DatasetError::InvalidDirectory(country_dir.to_path_buf()))
}

/// Sorted entries of a directory, keeping only directories or only files
fn sorted_entries(dir: &Path, directories: bool) -> Result<Vec<PathBuf>, DatasetError> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| DatasetError::io(dir, e))? {
        let path = entry.map_err(|e| DatasetError::io(dir, e))?.path();
        if path.is_dir() == directories {
            entries.push(path);
        }
    }

    entries.sort();
    Ok(entries)
}

/// Reads a single season file. Every fixture is attributed `competition`.
pub fn read_season_file(path: &Path, competition: &Competition) -> Result<Vec<MatchRecord>, DatasetError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();

    for row in reader.deserialize() {
        let row: SeasonRow = row?;
        records.push(MatchRecord {
            date: parse_date(&row.date, path)?,
            competition: competition.clone(),
            home: row.home_team,
            away: row.away_team,
            score: row.score
        });
    }

    Ok(records)
}

/// Reads every season file below `dir`, laid out as `<dir>/<country>/<season>`.
///
/// The directory named `continental` holds continental fixtures, every other
/// directory is a domestic league named after its country.
pub fn read_countries_dir(dir: &Path, continental: &str) -> Result<Vec<MatchRecord>, DatasetError> {
    let countries = sorted_entries(dir, true)?;
    let span = progress_span(countries.len() as u64, "Loading countries");
    let _entered = span.as_ref().map(Span::enter);
    let mut records = Vec::new();

    for country_dir in countries {
        let name = context_name(&country_dir)?;
        let competition = Competition::from_context(name, continental);

        let seasons = sorted_entries(&country_dir, false)?;
        if seasons.is_empty() {
            warn!("No season files found for {}", name);
        }

        let before = records.len();
        for season in seasons {
            records.extend(read_season_file(&season, &competition)?);
        }

        info!("Loaded {} fixtures for {}", records.len() - before, name);

        if let Some(span) = &span {
            span.pb_inc(1);
        }
    }

    Ok(records)
}

/// Reads a merged results file (`date,country,home_team,score,away_team`)
pub fn read_all_time_results(path: &Path, continental: &str) -> Result<Vec<MatchRecord>, DatasetError> {
    info!("Reading results from {}", path.display());

    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();

    for row in reader.deserialize() {
        let row: AllTimeRow = row?;
        records.push(MatchRecord {
            date: parse_date(&row.date, path)?,
            competition: Competition::from_context(&row.country, continental),
            home: row.home_team,
            away: row.away_team,
            score: row.score
        });
    }

    info!("Read {} fixtures", records.len());
    Ok(records)
}

/// Writes fixtures as a merged results file, readable by [`read_all_time_results`]
pub fn write_all_time_results(path: &Path, records: &[MatchRecord], continental: &str) -> Result<(), DatasetError> {
    let mut writer = csv::Writer::from_path(path)?;

    for record in records {
        writer.serialize(AllTimeRow {
            date: format_date(record.date),
            country: record.competition.context_name(continental).to_string(),
            home_team: record.home.clone(),
            score: record.score.clone(),
            away_team: record.away.clone()
        })?;
    }

    writer.flush().map_err(|e| DatasetError::io(path, e))?;
    info!("Saved {} fixtures to {}", records.len(), path.display());

    Ok(())
}

/// Orders fixtures by date. Fixtures on the same day keep their relative order.
pub fn sort_chronologically(records: &mut [MatchRecord]) {
    records.sort_by_key(|r| r.date);
}
