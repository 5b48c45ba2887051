//! Active vs recovered pie chart
//!
//! Built from the country's last row in table order, which is not
//! necessarily its most recent date.

use chrono::NaiveDate;
use serde::Serialize;

use super::error::{ChartError, ChartResult};
use super::figure::{Figure, PieTrace, Trace};
use super::ChartSpec;
use crate::dataset::Dataset;

/// Two-slice split of a country's cases
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ActiveRecovered {
    pub country: String,
    pub date: NaiveDate,
    /// Negative when deaths plus recoveries exceed total cases
    pub active_cases: i64,
    pub recovered_cases: u64,
}

/// Derive the active/recovered split for `country`.
///
/// Fails with [`ChartError::NoObservations`] when the country has no rows.
pub fn active_recovered(dataset: &Dataset, country: &str) -> ChartResult<ActiveRecovered> {
    let last = dataset
        .for_country(country)
        .last()
        .ok_or_else(|| ChartError::NoObservations(country.to_string()))?;

    Ok(ActiveRecovered {
        country: country.to_string(),
        date: last.date,
        active_cases: last.active_cases(),
        recovered_cases: last.total_recoveries,
    })
}

impl ChartSpec for ActiveRecovered {
    fn to_figure(&self) -> Figure {
        Figure::new(format!("Active vs Recovered Cases in {}", self.country)).trace(Trace::Pie(
            PieTrace {
                labels: vec!["Active Cases".to_string(), "Recovered Cases".to_string()],
                values: vec![self.active_cases, self.recovered_cases as i64],
            },
        ))
    }
}
