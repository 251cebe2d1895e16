use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
};
use common::{DateRange, Notice};
use compute::default_trend_indicators;
use tracing::{debug, instrument, warn};

use crate::error::ApiError;
use crate::helpers::params::{PageParams, Tab};
use crate::helpers::views;
use crate::page::{Controls, DASHBOARD_JS, DashboardPage, Downloads, TabContent, render_dashboard};
use crate::schemas::AppState;

/// Interactive dashboard page.
///
/// Every control is read from the query string. With neither date given the
/// window spans the observed dates; an inverted window is reported and the
/// page renders unfiltered.
#[instrument(skip(state))]
pub async fn dashboard_page(
    Query(pairs): Query<Vec<(String, String)>>,
    State(state): State<AppState>,
) -> Result<Html<String>, ApiError> {
    let params = PageParams::from_pairs(&pairs);
    let dataset = state.store.dataset().await?;

    let mut notices: Vec<Notice> = params
        .problems
        .iter()
        .map(|problem| Notice::warning(problem.as_str()))
        .collect();

    let forecast = match state.store.forecast().await {
        Ok(forecast) => forecast,
        Err(err) => {
            warn!(error = %err, "Forecast table could not be loaded");
            notices.push(Notice::error(format!("Forecast table could not be loaded: {}", err)));
            None
        }
    };

    let (start_date, end_date) = match (params.start_date, params.end_date) {
        (None, None) => match dataset.observation_date_bounds() {
            Some((min, max)) => (Some(min), Some(max)),
            None => (None, None),
        },
        bounds => bounds,
    };

    let range = match DateRange::from_bounds(start_date, end_date) {
        Ok(range) => range,
        Err(err) => {
            notices.push(Notice::error(format!("Invalid date range: {}. Showing all dates.", err)));
            None
        }
    };

    let scenario = params.scenario.unwrap_or_default();
    let selected = params
        .indicators
        .clone()
        .unwrap_or_else(|| default_trend_indicators(&dataset));
    debug!(tab = %params.tab, ?range, %scenario, selected = selected.len(), "Rendering dashboard");

    let content = match params.tab {
        Tab::Trends => TabContent::Trends(views::trends(&dataset, range, &selected)?),
        Tab::Events => TabContent::Events(views::events(&dataset, range)?),
        Tab::Forecasts => TabContent::Forecasts(views::forecasts(
            forecast.as_deref(),
            scenario,
            state.settings.progress_target,
        )?),
        Tab::Download => TabContent::Download(Downloads {
            dataset_file: state.store.paths().dataset_file_name(),
            forecast_file: forecast
                .as_ref()
                .map(|_| state.store.paths().forecast_file_name()),
        }),
    };

    let page = DashboardPage {
        controls: Controls {
            start_date,
            end_date,
            scenario,
            indicator_choices: dataset.indicator_codes(),
            selected,
            tab: params.tab,
        },
        kpis: views::kpis(&dataset),
        notices,
        content,
    };

    Ok(Html(render_dashboard(page).await))
}

/// Script that draws the page's Plotly figures.
pub async fn dashboard_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        DASHBOARD_JS,
    )
}
