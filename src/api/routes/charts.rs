//! Chart Routes
//!
//! Figure endpoints the dashboard page polls on every selector change.
//!
//! - GET /api/v1/charts/:kind - One panel's figure
//! - GET /api/v1/dashboard - All panels at once

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::dto::{ChartParams, DashboardResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::charts::{ChartKind, Figure};

/// GET /api/v1/charts/:kind?country=
///
/// `kind` is a panel id (`cases-line-chart`) or a short name (`line`).
pub async fn get_chart(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    Query(params): Query<ChartParams>,
) -> ApiResult<Json<Figure>> {
    let kind: ChartKind = kind.parse()?;
    let country = state.selected_country(&params.country);

    let figure = kind.derive(&state.dataset, country)?;

    tracing::debug!(chart = %kind, country = %country, traces = figure.data.len(), "Served chart");

    Ok(Json(figure))
}

/// GET /api/v1/dashboard?country=
///
/// Panels whose derivation fails are listed under `unavailable`
/// instead of failing the whole response.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChartParams>,
) -> Json<DashboardResponse> {
    let country = state.selected_country(&params.country);

    let mut figures = BTreeMap::new();
    let mut unavailable = BTreeMap::new();

    for kind in ChartKind::all() {
        match kind.derive(&state.dataset, country) {
            Ok(figure) => {
                figures.insert(kind.panel_id().to_string(), figure);
            }
            Err(e) => {
                tracing::debug!(chart = %kind, country = %country, error = %e, "Panel unavailable");
                unavailable.insert(kind.panel_id().to_string(), e.to_string());
            }
        }
    }

    Json(DashboardResponse {
        country: country.to_string(),
        figures,
        unavailable,
    })
}
