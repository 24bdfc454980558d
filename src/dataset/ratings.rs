use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path
};

use clap::ValueEnum;
use tracing::info;

use crate::{dataset::DatasetError, model::structures::rating_observation::RatingObservation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `date,country,team,rating`
    #[default]
    Csv,
    /// Array of observation objects
    Json
}

/// Writes the rating time series in emission order
pub fn write_ratings<W: Write>(
    writer: W,
    observations: &[RatingObservation],
    format: OutputFormat
) -> Result<(), DatasetError> {
    match format {
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(writer);
            for observation in observations {
                writer.serialize(observation)?;
            }
            writer.flush().map_err(|e| DatasetError::io("ratings output", e))?;
        }
        OutputFormat::Json => {
            let mut writer = writer;
            serde_json::to_writer_pretty(&mut writer, observations)?;
            writer.flush().map_err(|e| DatasetError::io("ratings output", e))?;
        }
    }

    Ok(())
}

pub fn save_ratings(path: &Path, observations: &[RatingObservation], format: OutputFormat) -> Result<(), DatasetError> {
    let file = File::create(path).map_err(|e| DatasetError::io(path, e))?;
    write_ratings(BufWriter::new(file), observations, format)?;

    info!("Saved {} rating observations to {}", observations.len(), path.display());
    Ok(())
}
