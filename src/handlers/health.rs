use axum::{extract::State, response::Json};
use tracing::{instrument, warn};

use crate::schemas::{AppState, HealthResponse};

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is running; body reports data availability", body = HealthResponse)
    )
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let dataset = match state.store.dataset().await {
        Ok(_) => "loaded",
        Err(err) => {
            warn!(error = %err, "Dataset unavailable");
            "unavailable"
        }
    };

    let forecast = match state.store.forecast().await {
        Ok(Some(_)) => "loaded",
        Ok(None) => "missing",
        Err(err) => {
            warn!(error = %err, "Forecast table unavailable");
            "unavailable"
        }
    };

    let status = if dataset == "loaded" { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dataset: dataset.to_string(),
        forecast: forecast.to_string(),
    })
}
