//! Country Routes
//!
//! - GET /api/v1/countries - Selector options and default

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::CountryListResponse;
use crate::api::state::AppState;

/// GET /api/v1/countries
pub async fn list_countries(State(state): State<Arc<AppState>>) -> Json<CountryListResponse> {
    Json(CountryListResponse {
        countries: state
            .dataset
            .countries()
            .into_iter()
            .map(String::from)
            .collect(),
        default: state.default_country().to_string(),
    })
}
