use axum::{extract::State, response::Json};
use common::{ApiResponse, OverviewResponse};
use tracing::{debug, instrument, warn};

#[allow(unused_imports)] // referenced only inside #[utoipa::path] responses
use crate::schemas::ErrorResponse;
use crate::error::ApiError;
use crate::helpers::views;
use crate::schemas::AppState;

/// Sidebar choices and dataset summary
#[utoipa::path(
    get,
    path = "/api/v1/overview",
    tag = "dashboard",
    responses(
        (status = 200, description = "Indicator choices, date bounds and scenarios", body = OverviewResponse),
        (status = 503, description = "Dataset not available", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_overview(State(state): State<AppState>) -> Result<Json<OverviewResponse>, ApiError> {
    let dataset = state.store.dataset().await?;
    let forecast_available = match state.store.forecast().await {
        Ok(forecast) => forecast.is_some(),
        Err(err) => {
            warn!(error = %err, "Forecast table could not be loaded");
            false
        }
    };

    let overview = views::overview(&dataset, forecast_available);
    debug!(
        indicators = overview.indicator_choices.len(),
        observations = overview.observation_count,
        events = overview.event_count,
        "Overview assembled"
    );

    Ok(Json(ApiResponse::ok(overview, "Overview retrieved successfully")))
}
