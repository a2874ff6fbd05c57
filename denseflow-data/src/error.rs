use denseflow_core::DenseFlowError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or batching data.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Unable to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid number '{value}' at row {row}, column {column}")]
    Parse {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("Row {row} has {actual} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("No data rows found")]
    Empty,

    #[error("{features} feature rows but {targets} target rows")]
    LengthMismatch { features: usize, targets: usize },

    #[error("Index {index} out of bounds for dataset of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Batch size must be at least 1")]
    InvalidBatchSize,

    #[error(transparent)]
    Core(#[from] DenseFlowError),
}
