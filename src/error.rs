use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use compute::ComputeError;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, warn};

use crate::schemas::ErrorResponse;

/// Errors returned by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Data(Arc<ComputeError>),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Data(err) => {
                let status = match err.as_ref() {
                    ComputeError::MissingOptionalFile(_) => StatusCode::NOT_FOUND,
                    ComputeError::MissingRequiredFile(_) => StatusCode::SERVICE_UNAVAILABLE,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, err.code())
            }
        }
    }
}

impl From<ComputeError> for ApiError {
    fn from(err: ComputeError) -> Self {
        ApiError::Data(Arc::new(err))
    }
}

impl From<Arc<ComputeError>> for ApiError {
    fn from(err: Arc<ComputeError>) -> Self {
        ApiError::Data(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            error!(%status, code, error = %self, "Request failed");
        } else {
            warn!(%status, code, error = %self, "Request rejected");
        }

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
            success: false,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::BadRequest("x".into()).status_and_code().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ComputeError::MissingOptionalFile("f.csv".into())).status_and_code(),
            (StatusCode::NOT_FOUND, "MISSING_OPTIONAL_FILE")
        );
        assert_eq!(
            ApiError::from(ComputeError::MissingRequiredFile("d.csv".into())).status_and_code().0,
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::from(ComputeError::DataFrame("boom".into())).status_and_code().0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
