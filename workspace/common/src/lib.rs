//! Common transport-layer types shared between the compute crate, the JSON API
//! and the server-rendered dashboard page.
//! These structs are the payloads the handlers return, so the page and the API
//! render from exactly the same shapes.

mod kpi;
mod range;
mod scenario;
mod views;

pub use kpi::{KpiBoard, KpiCard, KpiPoint, KpiSummary};
pub use range::{DateRange, InvalidDateRange};
pub use scenario::{Metric, Scenario, UnknownScenario};
pub use views::{
    ChartSpec, EventRow, EventsView, ForecastRecord, ForecastView, Notice, NoticeLevel,
    Overview, Progress, TrendView,
};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by every JSON endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(
    OverviewResponse = ApiResponse<Overview>,
    KpiBoardResponse = ApiResponse<KpiBoard>,
    KpiSummaryResponse = ApiResponse<KpiSummary>,
    TrendResponse = ApiResponse<TrendView>,
    EventsResponse = ApiResponse<EventsView>,
    ForecastResponse = ApiResponse<ForecastView>,
)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

impl<T> ApiResponse<T> {
    /// Wraps `data` in a successful response.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
            success: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_serialization() {
        let response = ApiResponse::ok(vec![1, 2, 3], "Numbers retrieved");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
        assert_eq!(json["message"], "Numbers retrieved");
        assert_eq!(json["success"], true);
    }
}
