//! Dataset loading errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the dataset.
///
/// The original dashboard hung silently on a missing or malformed file;
/// here every failure mode is a typed, reportable error.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}: field {field} is not a finite number")]
    InvalidNumber { row: usize, field: &'static str },

    #[error("dataset contains no rows")]
    Empty,
}
