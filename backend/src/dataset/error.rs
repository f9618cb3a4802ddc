//! Error types for loading the launch dataset.
//!
//! All of these are fatal at startup; nothing at request time produces them.

use std::path::PathBuf;

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The dataset file could not be opened or read.
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV itself is malformed (bad quoting, ragged rows, bad UTF-8).
    #[error("Malformed CSV at line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// A required column is absent from the header row.
    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(&'static str),

    /// A payload mass cell is not a finite number.
    #[error("Invalid payload mass '{value}' at line {line}")]
    InvalidPayload { line: u64, value: String },

    /// A class cell is neither 0 nor 1.
    #[error("Invalid class value '{value}' at line {line} (expected 0 or 1)")]
    InvalidClass { line: u64, value: String },

    /// The file parsed but holds no records, so payload bounds are undefined.
    #[error("Dataset contains no launch records")]
    Empty,
}

impl DatasetError {
    pub(crate) fn csv(source: csv::Error) -> Self {
        let line = source.position().map(|p| p.line()).unwrap_or(0);
        DatasetError::Csv { line, source }
    }
}
