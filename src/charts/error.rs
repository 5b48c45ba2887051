//! Chart error types

use thiserror::Error;

/// Errors raised while deriving a chart
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// The derivation needs at least one row for the country
    #[error("No observations for country: {0}")]
    NoObservations(String),

    /// The requested chart name matches no panel
    #[error("Unknown chart: {0}")]
    UnknownChart(String),
}

/// Result type alias for chart derivations
pub type ChartResult<T> = Result<T, ChartError>;
