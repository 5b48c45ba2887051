//! Case progression line chart
//!
//! Cumulative cases over time for the selected country.

use chrono::NaiveDate;
use serde::Serialize;

use super::figure::{Figure, ScatterTrace, Trace};
use super::ChartSpec;
use crate::dataset::Dataset;

/// One point on the case progression line
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CasePoint {
    pub date: NaiveDate,
    pub total_cases: u64,
}

/// Cumulative cases for one country, ordered by date
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CaseProgression {
    pub country: String,
    pub points: Vec<CasePoint>,
}

/// Derive the case progression for `country`.
///
/// Unknown countries produce an empty series.
pub fn case_progression(dataset: &Dataset, country: &str) -> CaseProgression {
    let mut points: Vec<CasePoint> = dataset
        .for_country(country)
        .map(|o| CasePoint {
            date: o.date,
            total_cases: o.total_cases,
        })
        .collect();

    // Stable: rows sharing a date keep table order
    points.sort_by_key(|p| p.date);

    CaseProgression {
        country: country.to_string(),
        points,
    }
}

impl ChartSpec for CaseProgression {
    fn to_figure(&self) -> Figure {
        Figure::new(format!("COVID-19 Case Progression in {}", self.country))
            .trace(Trace::Scatter(ScatterTrace {
                name: None,
                x: self.points.iter().map(|p| p.date).collect(),
                y: self.points.iter().map(|p| p.total_cases).collect(),
                mode: "lines".to_string(),
            }))
            .axes("date", "total_cases")
    }
}
