//! Core data types for the observation table
//!
//! - `Observation`: one country's COVID-19 figures on one date
//! - `Dataset`: the ordered, immutable table of observations

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single row of the dataset
///
/// `total_deaths + total_recoveries <= total_cases` is expected to hold but
/// is not enforced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Observation {
    /// Country name, as used for the selector and choropleth locations
    pub country: String,
    /// Reporting date
    pub date: NaiveDate,
    /// Cumulative confirmed cases
    pub total_cases: u64,
    /// Cases confirmed on this date
    pub new_cases: u64,
    /// Cumulative deaths
    pub total_deaths: u64,
    /// Cumulative recoveries
    pub total_recoveries: u64,
    /// Country population, always positive
    pub population: u64,
}

impl Observation {
    /// Create an observation with all counters at zero and a population of one
    pub fn new(country: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            country: country.into(),
            date,
            total_cases: 0,
            new_cases: 0,
            total_deaths: 0,
            total_recoveries: 0,
            population: 1,
        }
    }

    /// Builder: set cumulative and daily case counts
    pub fn cases(mut self, total_cases: u64, new_cases: u64) -> Self {
        self.total_cases = total_cases;
        self.new_cases = new_cases;
        self
    }

    /// Builder: set cumulative deaths and recoveries
    pub fn outcomes(mut self, total_deaths: u64, total_recoveries: u64) -> Self {
        self.total_deaths = total_deaths;
        self.total_recoveries = total_recoveries;
        self
    }

    /// Builder: set population
    pub fn population(mut self, population: u64) -> Self {
        self.population = population;
        self
    }

    /// Cases neither recovered nor fatal.
    ///
    /// Signed: goes negative when deaths plus recoveries exceed total cases.
    pub fn active_cases(&self) -> i64 {
        self.total_cases as i64 - (self.total_recoveries as i64 + self.total_deaths as i64)
    }

    /// New cases per million inhabitants
    pub fn new_case_rate(&self) -> f64 {
        self.new_cases as f64 / self.population as f64 * 1_000_000.0
    }
}

/// The immutable observation table
///
/// Rows keep the order they were loaded in; "last row" semantics elsewhere
/// depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    observations: Vec<Observation>,
}

impl Dataset {
    /// Build a table from rows, preserving their order
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    /// All rows in table order
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Rows for one country, in table order
    pub fn for_country<'a>(
        &'a self,
        country: &'a str,
    ) -> impl Iterator<Item = &'a Observation> + 'a {
        self.observations.iter().filter(move |o| o.country == country)
    }

    /// Distinct countries in order of first appearance
    pub fn countries(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for obs in &self.observations {
            if !seen.contains(&obs.country.as_str()) {
                seen.push(&obs.country);
            }
        }
        seen
    }

    /// Whether any row belongs to `country`
    pub fn contains_country(&self, country: &str) -> bool {
        self.observations.iter().any(|o| o.country == country)
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample() -> Dataset {
        Dataset::new(vec![
            Observation::new("Brazil", date("2020-04-01")).cases(10, 2),
            Observation::new("Chile", date("2020-04-01")).cases(5, 1),
            Observation::new("Brazil", date("2020-03-01")).cases(4, 4),
        ])
    }

    #[test]
    fn test_active_cases() {
        let obs = Observation::new("United States", date("2020-05-01"))
            .cases(50000, 3000)
            .outcomes(1000, 25000);
        assert_eq!(obs.active_cases(), 24000);
    }

    #[test]
    fn test_active_cases_can_go_negative() {
        let obs = Observation::new("Nowhere", date("2020-05-01"))
            .cases(10, 0)
            .outcomes(8, 8);
        assert_eq!(obs.active_cases(), -6);
    }

    #[test]
    fn test_new_case_rate() {
        let obs = Observation::new("United States", date("2020-03-01"))
            .cases(100, 20)
            .population(331_000_000);
        assert!((obs.new_case_rate() - 0.060_422_96).abs() < 1e-6);
    }

    #[test]
    fn test_countries_in_first_appearance_order() {
        assert_eq!(sample().countries(), vec!["Brazil", "Chile"]);
    }

    #[test]
    fn test_for_country_keeps_table_order() {
        let dataset = sample();
        let dates: Vec<NaiveDate> = dataset.for_country("Brazil").map(|o| o.date).collect();
        assert_eq!(dates, vec![date("2020-04-01"), date("2020-03-01")]);
    }

    #[test]
    fn test_unknown_country() {
        let dataset = sample();
        assert_eq!(dataset.for_country("Atlantis").count(), 0);
        assert!(!dataset.contains_country("Atlantis"));
        assert!(dataset.contains_country("Chile"));
    }

    #[test]
    fn test_len() {
        assert_eq!(sample().len(), 3);
        assert!(Dataset::default().is_empty());
    }
}
