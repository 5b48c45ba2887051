//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::config::Config;
use crate::dataset::Dataset;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only observation table
    pub dataset: Arc<Dataset>,
    /// Server, dashboard and logging configuration
    pub config: Arc<Config>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, config: Config) -> Self {
        if !dataset.contains_country(&config.dashboard.default_country) {
            tracing::warn!(
                country = %config.dashboard.default_country,
                "Default country has no observations; its charts will be empty"
            );
        }

        Self {
            dataset,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// The country to use when a request does not name one
    pub fn default_country(&self) -> &str {
        &self.config.dashboard.default_country
    }

    /// Resolve an optional `country` query parameter
    pub fn selected_country<'a>(&'a self, requested: &'a Option<String>) -> &'a str {
        requested.as_deref().unwrap_or_else(|| self.default_country())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_country_falls_back_to_default() {
        let dataset = Arc::new(Dataset::embedded().unwrap());
        let state = AppState::new(dataset, Config::default());

        assert_eq!(state.selected_country(&None), "United States");
        assert_eq!(state.selected_country(&Some("India".to_string())), "India");
    }
}
