//! Dataset error types
//!
//! Everything that can go wrong turning the JSON literal into a table.

use thiserror::Error;

/// Errors raised while loading the observation table
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The literal is not the expected JSON shape
    #[error("Malformed dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A row carries a date that is not `YYYY-MM-DD`
    #[error("Invalid date '{value}' in row {row}")]
    InvalidDate { row: usize, value: String },

    /// A row has a zero population, which would divide by zero in rates
    #[error("Population must be positive for '{country}' in row {row}")]
    InvalidPopulation { row: usize, country: String },

    /// The literal has no rows at all
    #[error("Dataset contains no observations")]
    Empty,
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
