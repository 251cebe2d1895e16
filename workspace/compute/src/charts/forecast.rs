use common::{ForecastRecord, ForecastView, Metric, Notice, Progress, Scenario};
use plotly::common::Mode;
use plotly::{Plot, Scatter};
use tracing::{debug, warn};

use super::{chart_spec, titled_layout};
use crate::error::Result;
use crate::loader::ForecastTable;

pub const ACCESS_CHART_ID: &str = "forecast-access-chart";
pub const USAGE_CHART_ID: &str = "forecast-usage-chart";
pub const ACCESS_CHART_TITLE: &str = "Access forecast: Account Ownership (ACC_OWNERSHIP)";
pub const USAGE_CHART_TITLE: &str = "Usage forecast: Active Rate (USG_ACTIVE_RATE)";

/// Account ownership share (%) the progress indicator measures against.
pub const DEFAULT_PROGRESS_TARGET: f64 = 60.0;
/// Forecast year whose base access value feeds the progress indicator.
pub const PROGRESS_YEAR: i32 = 2027;

pub const FORECAST_MISSING_WARNING: &str =
    "Forecast table not found in the data directory. Generate forecast_2025_2027.csv to enable forecasts.";

/// Forecast curves for `scenario`, the table listing and the progress toward
/// the inclusion target.
///
/// A missing table or an unavailable scenario produce warnings, not errors.
pub fn render_forecast(
    table: Option<&ForecastTable>,
    scenario: Scenario,
    target: f64,
) -> Result<ForecastView> {
    let Some(table) = table else {
        return Ok(ForecastView {
            scenario,
            available_scenarios: Vec::new(),
            years: Vec::new(),
            access_chart: None,
            usage_chart: None,
            rows: Vec::new(),
            progress: None,
            notices: vec![Notice::warning(FORECAST_MISSING_WARNING)],
        });
    };

    let years = table.years();
    let mut notices = Vec::new();

    let (access_chart, usage_chart) = if table.supports(scenario) {
        (
            Some(metric_chart(table, Metric::Access, scenario)?),
            Some(metric_chart(table, Metric::Usage, scenario)?),
        )
    } else {
        warn!(%scenario, "Scenario columns missing from forecast table");
        notices.push(Notice::warning(format!(
            "Scenario '{}' is not available in the forecast table.",
            scenario
        )));
        (None, None)
    };

    let progress = progress_toward_target(table, target);
    if progress.is_none() && table.has_column(Metric::Access, Scenario::Base) {
        notices.push(Notice::info(format!(
            "No base access value for {}; progress toward the target is unavailable.",
            PROGRESS_YEAR
        )));
    }

    debug!(%scenario, years = years.len(), "Rendered forecast view");
    Ok(ForecastView {
        scenario,
        available_scenarios: table.scenarios().to_vec(),
        years,
        access_chart,
        usage_chart,
        rows: table.rows().iter().map(ForecastRecord::from).collect(),
        progress,
        notices,
    })
}

/// Share of `target` reached by the base access forecast in the progress
/// year, clamped to `[0, 1]`.
///
/// `None` when the table has no `access_base` column or no value for that year.
pub fn progress_toward_target(table: &ForecastTable, target: f64) -> Option<Progress> {
    if !table.has_column(Metric::Access, Scenario::Base) || target <= 0.0 {
        return None;
    }
    let base_access = table.base_access(PROGRESS_YEAR)?;
    Some(Progress {
        value: (base_access / target).clamp(0.0, 1.0),
        base_access_2027: base_access,
        target,
        caption: format!(
            "Base Access ({}): {:.1}% vs Target: {:.0}%",
            PROGRESS_YEAR, base_access, target
        ),
    })
}

fn metric_chart(
    table: &ForecastTable,
    metric: Metric,
    scenario: Scenario,
) -> Result<common::ChartSpec> {
    let (id, title, trace_name, y_title) = match metric {
        Metric::Access => (ACCESS_CHART_ID, ACCESS_CHART_TITLE, "Access", "% of adults"),
        Metric::Usage => (USAGE_CHART_ID, USAGE_CHART_TITLE, "Usage", "Rate / %"),
    };
    let years = table.years();
    let values: Vec<Option<f64>> = table
        .rows()
        .iter()
        .map(|row| row.value(metric, scenario))
        .collect();

    let mut plot = Plot::new();
    plot.add_trace(
        Scatter::new(years, values)
            .mode(Mode::LinesMarkers)
            .name(trace_name),
    );
    plot.set_layout(titled_layout(title, "Year", y_title));
    chart_spec(id, title, &plot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_forecast;
    use crate::testing::{FORECAST_CSV, write_fixture};
    use common::NoticeLevel;

    fn fixture_table(csv: &str) -> ForecastTable {
        let (_dir, path) = write_fixture("forecast.csv", csv);
        load_forecast(&path).unwrap().unwrap()
    }

    #[test]
    fn test_missing_table_warns() {
        let view = render_forecast(None, Scenario::Base, DEFAULT_PROGRESS_TARGET).unwrap();
        assert!(view.access_chart.is_none());
        assert!(view.usage_chart.is_none());
        assert!(view.progress.is_none());
        assert_eq!(view.notices.len(), 1);
        assert_eq!(view.notices[0].level, NoticeLevel::Warning);
    }

    #[test]
    fn test_scenario_picks_columns() {
        let table = fixture_table(FORECAST_CSV);

        let view = render_forecast(Some(&table), Scenario::Pessimistic, 60.0).unwrap();
        let access = view.access_chart.unwrap();
        assert_eq!(access.id, ACCESS_CHART_ID);
        assert_eq!(access.figure["data"][0]["x"], serde_json::json!([2025, 2026, 2027]));
        assert_eq!(access.figure["data"][0]["y"], serde_json::json!([47.0, 48.5, 50.0]));

        let usage = view.usage_chart.unwrap();
        assert_eq!(usage.figure["data"][0]["y"], serde_json::json!([10.5, 12.0, 13.5]));
        assert_eq!(view.rows.len(), 3);
    }

    #[test]
    fn test_scenario_switch_changes_values_not_years() {
        let table = fixture_table(FORECAST_CSV);

        let base = render_forecast(Some(&table), Scenario::Base, 60.0).unwrap();
        let optimistic = render_forecast(Some(&table), Scenario::Optimistic, 60.0).unwrap();

        assert_eq!(base.years, optimistic.years);
        let base_chart = base.access_chart.unwrap();
        let optimistic_chart = optimistic.access_chart.unwrap();
        assert_eq!(base_chart.figure["data"][0]["x"], optimistic_chart.figure["data"][0]["x"]);
        assert_ne!(base_chart.figure["data"][0]["y"], optimistic_chart.figure["data"][0]["y"]);
    }

    #[test]
    fn test_progress_toward_target() {
        let table = fixture_table("year,access_base\n2027,55.0\n");

        let progress = progress_toward_target(&table, 60.0).unwrap();
        assert!((progress.value - 0.9167).abs() < 1e-4);
        assert_eq!(progress.base_access_2027, 55.0);
        assert_eq!(progress.caption, "Base Access (2027): 55.0% vs Target: 60%");
    }

    #[test]
    fn test_progress_is_clamped() {
        let over = fixture_table("year,access_base\n2027,75.0\n");
        assert_eq!(progress_toward_target(&over, 60.0).unwrap().value, 1.0);

        let under = fixture_table("year,access_base\n2027,-5.0\n");
        assert_eq!(progress_toward_target(&under, 60.0).unwrap().value, 0.0);
    }

    #[test]
    fn test_progress_requires_access_base_and_2027_row() {
        let no_column = fixture_table("year,access_optimistic\n2027,60.5\n");
        assert!(progress_toward_target(&no_column, 60.0).is_none());

        let no_year = fixture_table("year,access_base\n2025,49.5\n2026,52.0\n");
        assert!(progress_toward_target(&no_year, 60.0).is_none());
        let view = render_forecast(Some(&no_year), Scenario::Base, 60.0).unwrap();
        assert!(view.notices.iter().any(|n| n.level == NoticeLevel::Info));
    }

    #[test]
    fn test_unavailable_scenario_warns_but_lists_rows() {
        let table = fixture_table("year,access_base,usage_base\n2025,49.5,12.0\n2027,55.0,17.0\n");

        let view = render_forecast(Some(&table), Scenario::Optimistic, 60.0).unwrap();
        assert!(view.access_chart.is_none());
        assert_eq!(view.available_scenarios, vec![Scenario::Base]);
        assert_eq!(view.rows.len(), 2);
        assert!(view.progress.is_some());
        assert_eq!(view.notices[0].level, NoticeLevel::Warning);
    }
}
