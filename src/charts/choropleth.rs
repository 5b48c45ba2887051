//! Cases-by-country choropleth map
//!
//! Ignores the selector. Each country is reduced to a column-wise maximum of
//! its rows: the latest date, the largest total, the largest daily count and
//! so on, taken independently. That matches the most recent row only when
//! every column grows monotonically per country, which is not checked.

use serde::Serialize;
use std::collections::BTreeMap;

use super::figure::{ChoroplethTrace, Figure, Trace};
use super::ChartSpec;
use crate::dataset::{Dataset, Observation};

/// Per-country column-wise maxima, sorted by country name
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CasesByCountry {
    pub snapshots: Vec<Observation>,
}

impl CasesByCountry {
    /// Snapshot for one country, if present
    pub fn get(&self, country: &str) -> Option<&Observation> {
        self.snapshots.iter().find(|s| s.country == country)
    }
}

/// Reduce every country to its column-wise maxima
pub fn cases_by_country(dataset: &Dataset) -> CasesByCountry {
    let mut grouped: BTreeMap<&str, Observation> = BTreeMap::new();

    for obs in dataset.observations() {
        grouped
            .entry(obs.country.as_str())
            .and_modify(|max| {
                max.date = max.date.max(obs.date);
                max.total_cases = max.total_cases.max(obs.total_cases);
                max.new_cases = max.new_cases.max(obs.new_cases);
                max.total_deaths = max.total_deaths.max(obs.total_deaths);
                max.total_recoveries = max.total_recoveries.max(obs.total_recoveries);
                max.population = max.population.max(obs.population);
            })
            .or_insert_with(|| obs.clone());
    }

    CasesByCountry {
        snapshots: grouped.into_values().collect(),
    }
}

impl ChartSpec for CasesByCountry {
    fn to_figure(&self) -> Figure {
        let countries: Vec<String> = self.snapshots.iter().map(|s| s.country.clone()).collect();

        Figure::new("Total COVID-19 Cases by Country").trace(Trace::Choropleth(ChoroplethTrace {
            locations: countries.clone(),
            z: self.snapshots.iter().map(|s| s.total_cases).collect(),
            locationmode: "country names".to_string(),
            colorscale: "Blues".to_string(),
            hovertext: countries,
        }))
    }
}
