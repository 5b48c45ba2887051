//! Observation Routes
//!
//! Raw rows behind the charts.
//!
//! - GET /api/v1/observations - List rows as JSON or CSV

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ObservationListResponse, ObservationParams};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dataset::Observation;

/// GET /api/v1/observations?country=&format=
pub async fn list_observations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ObservationParams>,
) -> ApiResult<Response> {
    let observations: Vec<Observation> = match &params.country {
        Some(country) => state.dataset.for_country(country).cloned().collect(),
        None => state.dataset.observations().to_vec(),
    };

    match params.format.to_lowercase().as_str() {
        "json" => Ok(Json(ObservationListResponse {
            total: observations.len(),
            observations,
        })
        .into_response()),
        "csv" => {
            let body = to_csv(&observations)?;
            Ok((StatusCode::OK, [(header::CONTENT_TYPE, "text/csv")], body).into_response())
        }
        other => Err(ApiError::Validation(format!(
            "Unsupported format '{}', expected json or csv",
            other
        ))),
    }
}

/// Serialize rows as CSV with a header line
fn to_csv(observations: &[Observation]) -> ApiResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for obs in observations {
        writer
            .serialize(obs)
            .map_err(|e| ApiError::Internal(format!("CSV encoding failed: {}", e)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ApiError::Internal(format!("CSV flush failed: {}", e)))?;

    String::from_utf8(bytes).map_err(|e| ApiError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn test_csv_layout() {
        let dataset = Dataset::embedded().unwrap();
        let rows: Vec<Observation> = dataset.for_country("India").cloned().collect();

        let csv = to_csv(&rows).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "country,date,total_cases,new_cases,total_deaths,total_recoveries,population"
        );
        assert_eq!(lines[1], "India,2020-03-01,50,10,2,5,1380000000");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_empty_csv() {
        assert_eq!(to_csv(&[]).unwrap(), "");
    }
}
