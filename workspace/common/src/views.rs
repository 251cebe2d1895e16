use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{DateRange, Scenario};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// User-facing message rendered in place of (or next to) a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// A rendered chart: a Plotly figure (`{"data": [...], "layout": {...}}`)
/// plus the element id the page mounts it on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartSpec {
    pub id: String,
    pub title: String,
    #[schema(value_type = Object)]
    pub figure: serde_json::Value,
}

/// Trends tab content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrendView {
    /// Indicator codes the chart was asked for
    pub indicators: Vec<String>,
    /// Date filter applied, if any
    pub range: Option<DateRange>,
    pub chart: Option<ChartSpec>,
    pub notice: Option<Notice>,
}

/// One line of the event listing table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventRow {
    pub record_id: Option<String>,
    pub category: Option<String>,
    pub event_title: Option<String>,
    pub event_date: NaiveDate,
    pub source_name: Option<String>,
    pub confidence: Option<String>,
}

/// Events tab content: timeline chart and the same rows as a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventsView {
    pub range: Option<DateRange>,
    pub chart: Option<ChartSpec>,
    pub rows: Vec<EventRow>,
    pub notice: Option<Notice>,
}

/// One forecast year with every scenario column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastRecord {
    pub year: i32,
    pub access_base: Option<f64>,
    pub access_pessimistic: Option<f64>,
    pub access_optimistic: Option<f64>,
    pub usage_base: Option<f64>,
    pub usage_pessimistic: Option<f64>,
    pub usage_optimistic: Option<f64>,
}

/// Progress of the base access forecast toward the inclusion target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Progress {
    /// Fraction of the target reached, clamped to [0, 1]
    pub value: f64,
    pub base_access_2027: f64,
    pub target: f64,
    pub caption: String,
}

/// Forecasts tab content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastView {
    pub scenario: Scenario,
    /// Scenarios the loaded forecast table has columns for
    pub available_scenarios: Vec<Scenario>,
    pub years: Vec<i32>,
    pub access_chart: Option<ChartSpec>,
    pub usage_chart: Option<ChartSpec>,
    pub rows: Vec<ForecastRecord>,
    pub progress: Option<Progress>,
    pub notices: Vec<Notice>,
}

/// Sidebar choices and dataset summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Overview {
    /// Distinct observation indicator codes, sorted
    pub indicator_choices: Vec<String>,
    /// Indicators preselected on the Trends tab
    pub default_indicators: Vec<String>,
    /// Earliest observation date
    pub min_date: Option<NaiveDate>,
    /// Latest observation date
    pub max_date: Option<NaiveDate>,
    pub scenarios: Vec<Scenario>,
    pub default_scenario: Scenario,
    pub forecast_available: bool,
    pub observation_count: usize,
    pub event_count: usize,
}
