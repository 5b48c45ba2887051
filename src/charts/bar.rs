//! Death vs recovery grouped bar chart

use chrono::NaiveDate;
use serde::Serialize;

use super::figure::{BarMode, BarTrace, Figure, Trace};
use super::ChartSpec;
use crate::dataset::Dataset;

/// Parallel death and recovery series for one country, in table order
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DeathRecovery {
    pub country: String,
    pub dates: Vec<NaiveDate>,
    pub deaths: Vec<u64>,
    pub recoveries: Vec<u64>,
}

/// Derive the death and recovery series for `country`
pub fn death_recovery(dataset: &Dataset, country: &str) -> DeathRecovery {
    let mut series = DeathRecovery {
        country: country.to_string(),
        dates: Vec::new(),
        deaths: Vec::new(),
        recoveries: Vec::new(),
    };

    for obs in dataset.for_country(country) {
        series.dates.push(obs.date);
        series.deaths.push(obs.total_deaths);
        series.recoveries.push(obs.total_recoveries);
    }

    series
}

impl ChartSpec for DeathRecovery {
    fn to_figure(&self) -> Figure {
        Figure::new(format!("Death vs Recovery Rates in {}", self.country))
            .trace(Trace::Bar(BarTrace {
                name: "Total Deaths".to_string(),
                x: self.dates.clone(),
                y: self.deaths.clone(),
            }))
            .trace(Trace::Bar(BarTrace {
                name: "Total Recoveries".to_string(),
                x: self.dates.clone(),
                y: self.recoveries.clone(),
            }))
            .barmode(BarMode::Group)
    }
}
