//! # COVID-19 Dashboard
//!
//! A single-page web dashboard charting a small embedded COVID-19 dataset.
//!
//! ## Features
//!
//! - **Embedded data**: six observations compiled into the binary
//! - **Five panels**: case progression, deaths vs recoveries, a choropleth
//!   map, a case density heatmap and an active/recovered pie
//! - **Country selector**: every panel except the map follows the dropdown
//! - **Plotly figures**: charts are derived server-side and served as JSON
//!
//! ## Modules
//!
//! - [`dataset`]: Observation table and loader
//! - [`charts`]: Pure chart derivations and figure documents
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use covid_dashboard::charts::{active_recovered, ChartKind};
//! use covid_dashboard::dataset::Dataset;
//!
//! let dataset = Dataset::embedded().unwrap();
//!
//! let split = active_recovered(&dataset, "United States").unwrap();
//! assert_eq!(split.active_cases, 24000);
//!
//! let figure = ChartKind::ChoroplethMap.derive(&dataset, "United States").unwrap();
//! assert_eq!(figure.title(), "Total COVID-19 Cases by Country");
//! ```

pub mod api;
pub mod charts;
pub mod config;
pub mod dataset;

// Re-export top-level types for convenience
pub use dataset::{Dataset, DatasetError, DatasetResult, Observation};

pub use charts::{ChartError, ChartKind, ChartResult, ChartSpec, Figure};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{
    generate_default_config, ApiConfig, Config, ConfigError, DashboardConfig, LoggingConfig,
};
