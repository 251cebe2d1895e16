use axum::{
    extract::{Query, State},
    response::Json,
};
use axum_valid::Valid;
use common::{ApiResponse, EventsResponse};
use tracing::{info, instrument};

#[allow(unused_imports)] // referenced only inside #[utoipa::path] responses
use crate::schemas::ErrorResponse;
use crate::error::ApiError;
use crate::helpers::views;
use crate::schemas::{AppState, RangeQuery};

/// Event timeline and listing
#[utoipa::path(
    get,
    path = "/api/v1/events",
    tag = "charts",
    params(RangeQuery),
    responses(
        (status = 200, description = "Event timeline and rows", body = EventsResponse),
        (status = 400, description = "Invalid date range"),
        (status = 503, description = "Dataset not available", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_events(
    Valid(Query(query)): Valid<Query<RangeQuery>>,
    State(state): State<AppState>,
) -> Result<Json<EventsResponse>, ApiError> {
    let dataset = state.store.dataset().await?;
    let view = views::events(&dataset, query.range())?;
    info!(rows = view.rows.len(), "Events view rendered");
    Ok(Json(ApiResponse::ok(view, "Events retrieved successfully")))
}
