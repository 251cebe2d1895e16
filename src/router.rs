use crate::handlers::{
    dashboard::{dashboard_page, dashboard_script},
    downloads::{download_dataset, download_forecast},
    events::get_events,
    forecasts::get_forecasts,
    health::health_check,
    kpis::{get_headline_kpis, get_indicator_kpi},
    overview::get_overview,
    trends::get_trends,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{Router, routing::get};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Dashboard page
        .route("/", get(dashboard_page))
        .route("/assets/dashboard.js", get(dashboard_script))
        // Health check
        .route("/health", get(health_check))
        // Dashboard data
        .route("/api/v1/overview", get(get_overview))
        .route("/api/v1/kpis", get(get_headline_kpis))
        .route("/api/v1/kpis/:indicator_code", get(get_indicator_kpi))
        // Charts
        .route("/api/v1/trends", get(get_trends))
        .route("/api/v1/events", get(get_events))
        .route("/api/v1/forecasts", get(get_forecasts))
        // Downloads
        .route("/downloads/dataset.csv", get(download_dataset))
        .route("/downloads/forecast.csv", get(download_forecast))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
