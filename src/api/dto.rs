//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::charts::Figure;
use crate::dataset::Observation;

// ============================================
// QUERY PARAMETERS
// ============================================

/// `?country=` selector for chart endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ChartParams {
    /// Selected country, defaults to the configured default
    #[serde(default)]
    pub country: Option<String>,
}

/// Parameters for the raw observation listing
#[derive(Debug, Deserialize)]
pub struct ObservationParams {
    /// Only rows for this country; all rows when absent
    #[serde(default)]
    pub country: Option<String>,
    /// Output format: json, csv
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "json".to_string()
}

// ============================================
// RESPONSES
// ============================================

/// Selector options
#[derive(Debug, Serialize, Deserialize)]
pub struct CountryListResponse {
    /// Distinct countries in table order
    pub countries: Vec<String>,
    /// Country selected on page load
    pub default: String,
}

/// All five panels for one selection
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub country: String,
    /// Figures keyed by panel id
    pub figures: BTreeMap<String, Figure>,
    /// Panels that could not be derived, keyed by panel id
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub unavailable: BTreeMap<String, String>,
}

/// Raw observation listing
#[derive(Debug, Serialize, Deserialize)]
pub struct ObservationListResponse {
    pub observations: Vec<Observation>,
    pub total: usize,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Number of rows loaded
    pub observations: usize,
    /// Number of distinct countries
    pub countries: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}
