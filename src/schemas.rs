use chrono::NaiveDate;
use common::{
    ChartSpec, DateRange, EventRow, EventsView, EventsResponse, ForecastRecord, ForecastResponse,
    ForecastView, KpiBoard, KpiBoardResponse, KpiCard, KpiPoint, KpiSummary, KpiSummaryResponse,
    Notice, NoticeLevel, Overview, OverviewResponse, Progress, Scenario, TrendResponse, TrendView,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi, ToSchema};
use validator::{Validate, ValidationError};

use crate::config::Settings;
use crate::data_store::DataStore;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Loaded tables
    pub store: DataStore,
    /// Resolved configuration
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let store = DataStore::new(settings.data_paths());
        Self {
            store,
            settings: Arc::new(settings),
        }
    }
}

/// Date window and indicator selection for the filtered views
#[derive(Debug, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
#[validate(schema(function = "validate_range_order"))]
pub struct RangeQuery {
    /// First day of the window (YYYY-MM-DD)
    pub start_date: Option<NaiveDate>,
    /// Last day of the window (YYYY-MM-DD)
    pub end_date: Option<NaiveDate>,
    /// Indicator codes (comma-separated). Omit for the default selection;
    /// an empty value selects nothing.
    pub indicators: Option<String>,
}

impl RangeQuery {
    /// The requested window; a single bound means no window.
    pub fn range(&self) -> Option<DateRange> {
        DateRange::from_bounds(self.start_date, self.end_date)
            .ok()
            .flatten()
    }
}

fn validate_range_order(query: &RangeQuery) -> Result<(), ValidationError> {
    match DateRange::from_bounds(query.start_date, query.end_date) {
        Ok(_) => Ok(()),
        Err(_) => {
            let mut error = ValidationError::new("date_range_order");
            error.message = Some("start_date must not be after end_date".into());
            Err(error)
        }
    }
}

/// Forecast scenario choice
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScenarioQuery {
    /// One of base, pessimistic, optimistic (default pessimistic)
    pub scenario: Option<Scenario>,
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Dataset status ("loaded" or "unavailable")
    pub dataset: String,
    /// Forecast table status ("loaded", "missing" or "unavailable")
    pub forecast: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::overview::get_overview,
        crate::handlers::kpis::get_headline_kpis,
        crate::handlers::kpis::get_indicator_kpi,
        crate::handlers::trends::get_trends,
        crate::handlers::events::get_events,
        crate::handlers::forecasts::get_forecasts,
        crate::handlers::downloads::download_dataset,
        crate::handlers::downloads::download_forecast,
    ),
    components(
        schemas(
            OverviewResponse,
            KpiBoardResponse,
            KpiSummaryResponse,
            TrendResponse,
            EventsResponse,
            ForecastResponse,
            ErrorResponse,
            HealthResponse,
            RangeQuery,
            ScenarioQuery,
            Overview,
            KpiBoard,
            KpiCard,
            KpiSummary,
            KpiPoint,
            TrendView,
            EventsView,
            EventRow,
            ForecastView,
            ForecastRecord,
            Progress,
            ChartSpec,
            Notice,
            NoticeLevel,
            DateRange,
            Scenario,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "dashboard", description = "Dashboard controls and KPI endpoints"),
        (name = "charts", description = "Trend, event and forecast chart endpoints"),
        (name = "downloads", description = "CSV download endpoints"),
    ),
    info(
        title = "Financial Inclusion Dashboard API",
        description = "Trends, events and scenario forecasts of financial inclusion indicators",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
