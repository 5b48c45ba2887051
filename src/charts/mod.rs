//! Charts
//!
//! The five dashboard panels. Each panel is a pure derivation from the
//! dataset and a selected country to a typed series, plus a [`ChartSpec`]
//! impl that renders the series as a Plotly [`Figure`]:
//!
//! - **line**: case progression over time
//! - **bar**: deaths vs recoveries, grouped by date
//! - **choropleth**: total cases per country (ignores the selector)
//! - **heatmap**: new cases per million
//! - **pie**: active vs recovered cases
//!
//! # Example
//!
//! ```rust
//! use covid_dashboard::charts::ChartKind;
//! use covid_dashboard::dataset::Dataset;
//!
//! let dataset = Dataset::embedded().unwrap();
//! let figure = ChartKind::CasesLine.derive(&dataset, "India").unwrap();
//! assert_eq!(figure.title(), "COVID-19 Case Progression in India");
//! ```

pub mod bar;
pub mod choropleth;
pub mod error;
pub mod figure;
pub mod heatmap;
pub mod line;
pub mod pie;

pub use bar::{death_recovery, DeathRecovery};
pub use choropleth::{cases_by_country, CasesByCountry};
pub use error::{ChartError, ChartResult};
pub use figure::{BarMode, Figure, Layout, Trace};
pub use heatmap::{case_density, CaseDensity, RatePoint};
pub use line::{case_progression, CasePoint, CaseProgression};
pub use pie::{active_recovered, ActiveRecovered};

use crate::dataset::Dataset;
use std::str::FromStr;

/// Anything that can be drawn as a dashboard panel
pub trait ChartSpec {
    fn to_figure(&self) -> Figure;
}

/// The dashboard's chart panels, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    CasesLine,
    DeathRecoveryBar,
    ChoroplethMap,
    CasesHeatmap,
    ActiveRecoveredPie,
}

impl ChartKind {
    /// All panels in the order they appear on the page
    pub fn all() -> &'static [ChartKind] {
        &[
            ChartKind::CasesLine,
            ChartKind::DeathRecoveryBar,
            ChartKind::ChoroplethMap,
            ChartKind::CasesHeatmap,
            ChartKind::ActiveRecoveredPie,
        ]
    }

    /// DOM id of the panel on the dashboard page
    pub fn panel_id(&self) -> &'static str {
        match self {
            ChartKind::CasesLine => "cases-line-chart",
            ChartKind::DeathRecoveryBar => "death-recovery-bar-chart",
            ChartKind::ChoroplethMap => "choropleth-map",
            ChartKind::CasesHeatmap => "cases-heatmap",
            ChartKind::ActiveRecoveredPie => "active-recovered-pie-chart",
        }
    }

    /// Short name used by the CLI
    pub fn short_name(&self) -> &'static str {
        match self {
            ChartKind::CasesLine => "line",
            ChartKind::DeathRecoveryBar => "bar",
            ChartKind::ChoroplethMap => "choropleth",
            ChartKind::CasesHeatmap => "heatmap",
            ChartKind::ActiveRecoveredPie => "pie",
        }
    }

    /// Run this panel's derivation and render it
    pub fn derive(&self, dataset: &Dataset, country: &str) -> ChartResult<Figure> {
        tracing::debug!(chart = %self, country = %country, "Deriving chart");

        let figure = match self {
            ChartKind::CasesLine => case_progression(dataset, country).to_figure(),
            ChartKind::DeathRecoveryBar => death_recovery(dataset, country).to_figure(),
            ChartKind::ChoroplethMap => cases_by_country(dataset).to_figure(),
            ChartKind::CasesHeatmap => case_density(dataset, country).to_figure(),
            ChartKind::ActiveRecoveredPie => active_recovered(dataset, country)?.to_figure(),
        };

        Ok(figure)
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    /// Accepts either the panel id or the short name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ChartKind::all()
            .iter()
            .copied()
            .find(|k| k.panel_id() == wanted || k.short_name() == wanted)
            .ok_or_else(|| ChartError::UnknownChart(s.to_string()))
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.panel_id())
    }
}
