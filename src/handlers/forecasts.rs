use axum::{
    extract::{Query, State},
    response::Json,
};
use common::{ApiResponse, ForecastResponse};
use tracing::{info, instrument};

#[allow(unused_imports)] // referenced only inside #[utoipa::path] responses
use crate::schemas::ErrorResponse;
use crate::error::ApiError;
use crate::helpers::views;
use crate::schemas::{AppState, ScenarioQuery};

/// Scenario forecast charts, table and progress toward the target
///
/// A missing forecast table or scenario is reported in `notices`, not as an
/// error.
#[utoipa::path(
    get,
    path = "/api/v1/forecasts",
    tag = "charts",
    params(ScenarioQuery),
    responses(
        (status = 200, description = "Forecast view", body = ForecastResponse),
        (status = 400, description = "Unknown scenario"),
        (status = 500, description = "Forecast table unreadable", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_forecasts(
    Query(query): Query<ScenarioQuery>,
    State(state): State<AppState>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let scenario = query.scenario.unwrap_or_default();
    let table = state.store.forecast().await?;

    let view = views::forecasts(table.as_deref(), scenario, state.settings.progress_target)?;
    info!(%scenario, years = view.years.len(), notices = view.notices.len(), "Forecast view rendered");
    Ok(Json(ApiResponse::ok(view, "Forecasts retrieved successfully")))
}
