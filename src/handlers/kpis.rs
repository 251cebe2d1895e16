use axum::{
    extract::{Path, State},
    response::Json,
};
use common::{ApiResponse, KpiBoardResponse, KpiSummaryResponse};
use compute::kpi::latest_value;
use tracing::{debug, instrument};

#[allow(unused_imports)] // referenced only inside #[utoipa::path] responses
use crate::schemas::ErrorResponse;
use crate::error::ApiError;
use crate::helpers::views;
use crate::schemas::AppState;

/// Headline KPI cards
///
/// Latest value of each headline indicator over the whole dataset; the date
/// filter does not apply.
#[utoipa::path(
    get,
    path = "/api/v1/kpis",
    tag = "dashboard",
    responses(
        (status = 200, description = "Headline KPI cards", body = KpiBoardResponse),
        (status = 503, description = "Dataset not available", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_headline_kpis(
    State(state): State<AppState>,
) -> Result<Json<KpiBoardResponse>, ApiError> {
    let dataset = state.store.dataset().await?;
    let board = views::kpis(&dataset);
    debug!(cards = board.cards.len(), "Headline KPIs computed");
    Ok(Json(ApiResponse::ok(board, "KPIs retrieved successfully")))
}

/// Latest value of a single indicator
#[utoipa::path(
    get,
    path = "/api/v1/kpis/{indicator_code}",
    tag = "dashboard",
    params(
        ("indicator_code" = String, Path, description = "Indicator code, e.g. ACC_OWNERSHIP")
    ),
    responses(
        (status = 200, description = "Latest value, or no data", body = KpiSummaryResponse),
        (status = 503, description = "Dataset not available", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_indicator_kpi(
    Path(indicator_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<KpiSummaryResponse>, ApiError> {
    let dataset = state.store.dataset().await?;
    let summary = latest_value(dataset.observations(), &indicator_code);

    let message = if summary.has_data() {
        format!("Latest value for {} retrieved successfully", indicator_code)
    } else {
        format!("No data for {}", indicator_code)
    };
    Ok(Json(ApiResponse::ok(summary, message)))
}
