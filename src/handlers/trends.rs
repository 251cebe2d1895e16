use axum::{
    extract::{Query, State},
    response::Json,
};
use axum_valid::Valid;
use common::{ApiResponse, TrendResponse};
use tracing::{info, instrument};

#[allow(unused_imports)] // referenced only inside #[utoipa::path] responses
use crate::schemas::ErrorResponse;
use crate::error::ApiError;
use crate::helpers::{params::resolve_indicators, views};
use crate::schemas::{AppState, RangeQuery};

/// Indicator trend chart
///
/// Without `indicators` the default selection is used; `indicators=` (empty)
/// selects nothing and yields a prompt instead of a chart. A window needs both
/// bounds; a single bound is ignored.
#[utoipa::path(
    get,
    path = "/api/v1/trends",
    tag = "charts",
    params(RangeQuery),
    responses(
        (status = 200, description = "Trend chart or notice", body = TrendResponse),
        (status = 400, description = "Invalid date range"),
        (status = 503, description = "Dataset not available", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_trends(
    Valid(Query(query)): Valid<Query<RangeQuery>>,
    State(state): State<AppState>,
) -> Result<Json<TrendResponse>, ApiError> {
    let dataset = state.store.dataset().await?;
    let indicators = resolve_indicators(query.indicators.as_deref(), &dataset);

    let view = views::trends(&dataset, query.range(), &indicators)?;
    info!(
        indicators = view.indicators.len(),
        charted = view.chart.is_some(),
        "Trend view rendered"
    );
    Ok(Json(ApiResponse::ok(view, "Trends retrieved successfully")))
}
