//! Case density heatmap
//!
//! New cases per million inhabitants, binned by Plotly as a 2D histogram.

use chrono::NaiveDate;
use serde::Serialize;

use super::figure::{Figure, Histogram2dTrace, Trace};
use super::ChartSpec;
use crate::dataset::Dataset;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct RatePoint {
    pub date: NaiveDate,
    pub new_case_rate: f64,
}

/// New case rates for one country, in table order
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CaseDensity {
    pub country: String,
    pub points: Vec<RatePoint>,
}

/// Derive `new_cases / population * 1e6` for every row of `country`
pub fn case_density(dataset: &Dataset, country: &str) -> CaseDensity {
    CaseDensity {
        country: country.to_string(),
        points: dataset
            .for_country(country)
            .map(|o| RatePoint {
                date: o.date,
                new_case_rate: o.new_case_rate(),
            })
            .collect(),
    }
}

impl ChartSpec for CaseDensity {
    fn to_figure(&self) -> Figure {
        Figure::new(format!("Case Density in {}", self.country))
            .trace(Trace::Histogram2d(Histogram2dTrace {
                x: self.points.iter().map(|p| p.date).collect(),
                y: self.points.iter().map(|p| p.new_case_rate).collect(),
            }))
            .axes("date", "new_case_rate")
    }
}
