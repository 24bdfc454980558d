use std::path::PathBuf;

use thiserror::Error;

pub mod dataset_structs;
pub mod ratings;
pub mod results;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },

    #[error("Failed to read or write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to serialize ratings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Country directory {0:?} is not a valid context name")]
    InvalidDirectory(PathBuf),

    #[error("Invalid date '{value}' in {path}")]
    InvalidDate { value: String, path: PathBuf }
}

impl DatasetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> DatasetError {
        DatasetError::Io {
            path: path.into(),
            source
        }
    }
}
