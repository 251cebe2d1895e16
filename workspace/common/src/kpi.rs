use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Most recent observed value of an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct KpiPoint {
    pub value: f64,
    pub date: NaiveDate,
}

/// Latest-value lookup result for one indicator.
///
/// `latest` is `None` when the indicator has no dated row with a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct KpiSummary {
    pub indicator_code: String,
    pub latest: Option<KpiPoint>,
}

impl KpiSummary {
    pub fn no_data(indicator_code: impl Into<String>) -> Self {
        Self {
            indicator_code: indicator_code.into(),
            latest: None,
        }
    }

    pub fn has_data(&self) -> bool {
        self.latest.is_some()
    }
}

/// A headline metric card as shown in the overview row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct KpiCard {
    /// Card caption
    pub label: String,
    /// Formatted value, or an em dash when there is no data
    pub display: String,
    /// Hover help, e.g. "Date: 2021-12-31"
    pub help: Option<String>,
    pub summary: KpiSummary,
}

/// The headline KPI cards in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct KpiBoard {
    pub cards: Vec<KpiCard>,
}
