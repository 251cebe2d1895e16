//! View assembly shared by the JSON endpoints and the dashboard page.

use common::{DateRange, EventsView, ForecastView, KpiBoard, Overview, Scenario, TrendView};
use compute::charts::{render_events, render_forecast, render_trends};
use compute::kpi::headline_board;
use compute::records::RecordType;
use compute::{Dataset, ForecastTable, default_trend_indicators};
use tracing::debug;

use crate::error::ApiError;

pub fn overview(dataset: &Dataset, forecast_available: bool) -> Overview {
    let bounds = dataset.observation_date_bounds();
    Overview {
        indicator_choices: dataset.indicator_codes(),
        default_indicators: default_trend_indicators(dataset),
        min_date: bounds.map(|(min, _)| min),
        max_date: bounds.map(|(_, max)| max),
        scenarios: Scenario::ALL.to_vec(),
        default_scenario: Scenario::default(),
        forecast_available,
        observation_count: dataset.count(RecordType::Observation, None),
        event_count: dataset.count(RecordType::Event, None),
    }
}

/// Headline cards over every observation in `dataset`. Takes no range so a
/// date window can never narrow them.
pub fn kpis(dataset: &Dataset) -> KpiBoard {
    headline_board(dataset.observations())
}

/// Trend chart for `indicators` over the observations inside `range`.
pub fn trends(
    dataset: &Dataset,
    range: Option<DateRange>,
    indicators: &[String],
) -> Result<TrendView, ApiError> {
    let observations = dataset.observations_in(range.as_ref());
    debug!(rows = observations.len(), ?range, "Observations selected for trends");
    let mut view = render_trends(&observations, indicators)?;
    view.range = range;
    Ok(view)
}

/// Event timeline and listing for the events inside `range`.
pub fn events(dataset: &Dataset, range: Option<DateRange>) -> Result<EventsView, ApiError> {
    let events = dataset.events_in(range.as_ref());
    debug!(rows = events.len(), ?range, "Events selected for timeline");
    let mut view = render_events(&events)?;
    view.range = range;
    Ok(view)
}

pub fn forecasts(
    table: Option<&ForecastTable>,
    scenario: Scenario,
    target: f64,
) -> Result<ForecastView, ApiError> {
    Ok(render_forecast(table, scenario, target)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_utils::write_data_dir;
    use chrono::NaiveDate;
    use compute::load_dataset;

    fn dataset() -> (tempfile::TempDir, Dataset) {
        let (dir, settings) = write_data_dir(false);
        let dataset = load_dataset(&settings.data_paths().dataset).unwrap();
        (dir, dataset)
    }

    #[test]
    fn test_kpis_use_unfiltered_observations() {
        let (_dir, dataset) = dataset();
        let window = DateRange::new(
            NaiveDate::from_ymd_opt(2014, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
        )
        .unwrap();

        let board = kpis(&dataset);
        let windowed = headline_board(&dataset.observations_in(Some(&window)));

        assert_eq!(board, headline_board(dataset.observations()));
        assert_eq!(board.cards[0].display, "46.0%");
        // Inside the window only the 2014 round is visible.
        assert_eq!(windowed.cards[0].display, "22.0%");
        assert_ne!(board, windowed);
    }

    #[test]
    fn test_trends_keep_requested_range() {
        let (_dir, dataset) = dataset();
        let window = DateRange::new(
            NaiveDate::from_ymd_opt(2014, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
        )
        .unwrap();

        let view = trends(&dataset, Some(window), &["ACC_OWNERSHIP".to_string()]).unwrap();
        assert_eq!(view.range, Some(window));
    }
}
