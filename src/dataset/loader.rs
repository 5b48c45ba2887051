//! Dataset loader
//!
//! Parses the `{"data": [...]}` JSON literal into a [`Dataset`]. Dates are
//! `YYYY-MM-DD` strings converted to `NaiveDate`.

use chrono::NaiveDate;
use serde::Deserialize;

use super::error::{DatasetError, DatasetResult};
use super::types::{Dataset, Observation};

/// The dataset compiled into the binary
pub static EMBEDDED_DATA: &str = include_str!("../../assets/covid_data.json");

/// Date format of the `date` field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize)]
struct RawDocument {
    data: Vec<RawObservation>,
}

#[derive(Debug, Deserialize)]
struct RawObservation {
    country: String,
    date: String,
    total_cases: u64,
    new_cases: u64,
    total_deaths: u64,
    total_recoveries: u64,
    population: u64,
}

impl RawObservation {
    fn into_observation(self, row: usize) -> DatasetResult<Observation> {
        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|_| {
            DatasetError::InvalidDate {
                row,
                value: self.date.clone(),
            }
        })?;

        if self.population == 0 {
            return Err(DatasetError::InvalidPopulation {
                row,
                country: self.country,
            });
        }

        Ok(Observation {
            country: self.country,
            date,
            total_cases: self.total_cases,
            new_cases: self.new_cases,
            total_deaths: self.total_deaths,
            total_recoveries: self.total_recoveries,
            population: self.population,
        })
    }
}

impl Dataset {
    /// Parse a JSON literal into a table
    pub fn from_json(json: &str) -> DatasetResult<Self> {
        let document: RawDocument = serde_json::from_str(json)?;

        if document.data.is_empty() {
            return Err(DatasetError::Empty);
        }

        let observations = document
            .data
            .into_iter()
            .enumerate()
            .map(|(row, raw)| raw.into_observation(row))
            .collect::<DatasetResult<Vec<_>>>()?;

        tracing::debug!(rows = observations.len(), "Parsed dataset");

        Ok(Dataset::new(observations))
    }

    /// Load the dataset compiled into the binary
    pub fn embedded() -> DatasetResult<Self> {
        Self::from_json(EMBEDDED_DATA)
    }
}
