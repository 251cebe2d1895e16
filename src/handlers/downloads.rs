use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use compute::ComputeError;
use compute::export::{dataset_csv, forecast_csv};
use tracing::{info, instrument};

#[allow(unused_imports)] // referenced only inside #[utoipa::path] responses
use crate::schemas::ErrorResponse;
use crate::error::ApiError;
use crate::schemas::AppState;

fn csv_attachment(file_name: &str, body: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name.replace('"', "")),
            ),
        ],
        body,
    )
        .into_response()
}

/// Download the unified dataset as CSV
#[utoipa::path(
    get,
    path = "/downloads/dataset.csv",
    tag = "downloads",
    responses(
        (status = 200, description = "Dataset CSV", content_type = "text/csv", body = String),
        (status = 503, description = "Dataset not available", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn download_dataset(State(state): State<AppState>) -> Result<Response, ApiError> {
    let dataset = state.store.dataset().await?;
    let body = dataset_csv(&dataset)?;
    let file_name = state.store.paths().dataset_file_name();
    info!(file = %file_name, bytes = body.len(), "Serving dataset download");
    Ok(csv_attachment(&file_name, body))
}

/// Download the forecast table as CSV
#[utoipa::path(
    get,
    path = "/downloads/forecast.csv",
    tag = "downloads",
    responses(
        (status = 200, description = "Forecast CSV", content_type = "text/csv", body = String),
        (status = 404, description = "Forecast table not present", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn download_forecast(State(state): State<AppState>) -> Result<Response, ApiError> {
    let file_name = state.store.paths().forecast_file_name();
    let Some(table) = state.store.forecast().await? else {
        return Err(ComputeError::MissingOptionalFile(file_name).into());
    };
    let body = forecast_csv(&table)?;
    info!(file = %file_name, bytes = body.len(), "Serving forecast download");
    Ok(csv_attachment(&file_name, body))
}
