use thiserror::Error;
use tracing::error;

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// The primary dataset file does not exist; the dashboard cannot start
    #[error("Required data file not found: {0}")]
    MissingRequiredFile(String),

    /// An optional input (the forecast table) is absent
    #[error("Optional data file not found: {0}")]
    MissingOptionalFile(String),

    /// A loaded table lacks a column the dashboard depends on
    #[error("Schema error: {0}")]
    Schema(String),

    /// Error from Polars DataFrame operations
    #[error("DataFrame error: {0}")]
    DataFrame(String),

    /// Error while building a chart specification
    #[error("Chart error: {0}")]
    Chart(String),
}

impl ComputeError {
    /// Stable machine-readable code used in API error payloads.
    pub fn code(&self) -> &'static str {
        match self {
            ComputeError::MissingRequiredFile(_) => "MISSING_REQUIRED_FILE",
            ComputeError::MissingOptionalFile(_) => "MISSING_OPTIONAL_FILE",
            ComputeError::Schema(_) => "SCHEMA_ERROR",
            ComputeError::DataFrame(_) => "DATAFRAME_ERROR",
            ComputeError::Chart(_) => "CHART_ERROR",
        }
    }
}

impl From<polars::error::PolarsError> for ComputeError {
    fn from(error: polars::error::PolarsError) -> Self {
        let compute_error = match error {
            polars::error::PolarsError::ColumnNotFound(_) => {
                let err = ComputeError::Schema(format!("Column not found: {}", error));
                error!(?err, "DataFrame error: Column not found");
                err
            }
            polars::error::PolarsError::NoData(_) => {
                let err = ComputeError::DataFrame(format!("No data: {}", error));
                error!(?err, "DataFrame error: No data");
                err
            }
            polars::error::PolarsError::SchemaMismatch(_) => {
                let err = ComputeError::DataFrame(format!("Schema mismatch: {}", error));
                error!(?err, "DataFrame error: Schema mismatch");
                err
            }
            polars::error::PolarsError::ComputeError(_) => {
                let err = ComputeError::DataFrame(format!("Compute error: {}", error));
                error!(?err, "DataFrame error: Compute error");
                err
            }
            _ => {
                let err = ComputeError::DataFrame(error.to_string());
                error!(?err, "DataFrame error");
                err
            }
        };
        compute_error
    }
}

impl From<serde_json::Error> for ComputeError {
    fn from(error: serde_json::Error) -> Self {
        ComputeError::Chart(format!("Invalid figure JSON: {}", error))
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
