use chrono::NaiveDate;
use common::{Notice, TrendView};
use plotly::common::{Mode, Title};
use plotly::layout::Legend;
use plotly::{Plot, Scatter};
use tracing::debug;

use super::{chart_spec, titled_layout};
use crate::error::Result;
use crate::records::Observation;

pub const TREND_CHART_ID: &str = "trend-chart";
pub const TREND_CHART_TITLE: &str = "Selected indicators over time";
pub const SELECT_INDICATOR_PROMPT: &str = "Select at least one indicator.";
pub const NO_TREND_DATA_MESSAGE: &str =
    "No observations with values for the selected indicators in the selected range.";

/// Line chart of the selected indicators, one series per indicator code.
///
/// Series appear in order of first appearance in `observations`; points of a
/// series are ordered by date. Rows without a date or a value are skipped.
pub fn render_trends(observations: &[Observation], indicators: &[String]) -> Result<TrendView> {
    if indicators.is_empty() {
        return Ok(TrendView {
            indicators: Vec::new(),
            range: None,
            chart: None,
            notice: Some(Notice::info(SELECT_INDICATOR_PROMPT)),
        });
    }

    let mut series: Vec<(&str, Vec<(NaiveDate, f64)>)> = Vec::new();
    for observation in observations {
        let (Some(code), Some(date), Some(value)) = (
            observation.indicator_code.as_deref(),
            observation.observation_date,
            observation.value_numeric,
        ) else {
            continue;
        };
        if !indicators.iter().any(|selected| selected == code) {
            continue;
        }
        match series.iter_mut().find(|(existing, _)| *existing == code) {
            Some((_, points)) => points.push((date, value)),
            None => series.push((code, vec![(date, value)])),
        }
    }

    if series.is_empty() {
        debug!(?indicators, "No plottable observations for selection");
        return Ok(TrendView {
            indicators: indicators.to_vec(),
            range: None,
            chart: None,
            notice: Some(Notice::info(NO_TREND_DATA_MESSAGE)),
        });
    }

    let mut plot = Plot::new();
    for (code, mut points) in series {
        points.sort_by_key(|(date, _)| *date);
        let (dates, values): (Vec<String>, Vec<f64>) = points
            .into_iter()
            .map(|(date, value)| (date.to_string(), value))
            .unzip();
        plot.add_trace(Scatter::new(dates, values).mode(Mode::LinesMarkers).name(code));
    }
    plot.set_layout(
        titled_layout(TREND_CHART_TITLE, "Date", "Value")
            .legend(Legend::new().title(Title::with_text("Indicator"))),
    );

    Ok(TrendView {
        indicators: indicators.to_vec(),
        range: None,
        chart: Some(chart_spec(TREND_CHART_ID, TREND_CHART_TITLE, &plot)?),
        notice: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{date, observation};
    use common::NoticeLevel;

    fn codes(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_empty_selection_prompts() {
        let rows = vec![observation("a", "X", Some(1.0), Some(date(2020, 1, 1)))];

        let view = render_trends(&rows, &[]).unwrap();
        assert!(view.chart.is_none());
        let notice = view.notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Info);
        assert_eq!(notice.message, SELECT_INDICATOR_PROMPT);
    }

    #[test]
    fn test_one_series_per_selected_indicator() {
        let rows = vec![
            observation("a", "ACC_OWNERSHIP", Some(35.0), Some(date(2017, 12, 31))),
            observation("b", "USG_ACTIVE_RATE", Some(0.4), Some(date(2022, 1, 1))),
            observation("c", "ACC_OWNERSHIP", Some(22.0), Some(date(2014, 12, 31))),
            observation("d", "ACC_MM_ACCOUNT", Some(4.7), Some(date(2021, 12, 31))),
        ];

        let view = render_trends(&rows, &codes(&["ACC_OWNERSHIP", "USG_ACTIVE_RATE"])).unwrap();
        let chart = view.chart.unwrap();
        assert_eq!(chart.id, TREND_CHART_ID);
        assert_eq!(chart.title, TREND_CHART_TITLE);

        let data = chart.figure["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["name"], "ACC_OWNERSHIP");
        assert_eq!(data[0]["mode"], "lines+markers");
        assert_eq!(data[0]["x"], serde_json::json!(["2014-12-31", "2017-12-31"]));
        assert_eq!(data[0]["y"], serde_json::json!([22.0, 35.0]));
        assert_eq!(data[1]["name"], "USG_ACTIVE_RATE");
    }

    #[test]
    fn test_rows_without_date_or_value_are_not_plotted() {
        let rows = vec![
            observation("a", "X", Some(1.0), Some(date(2020, 1, 1))),
            observation("b", "X", None, Some(date(2021, 1, 1))),
            observation("c", "X", Some(3.0), None),
        ];

        let view = render_trends(&rows, &codes(&["X"])).unwrap();
        let chart = view.chart.unwrap();
        assert_eq!(chart.figure["data"][0]["y"], serde_json::json!([1.0]));
    }

    #[test]
    fn test_nothing_to_plot_shows_message() {
        let rows = vec![observation("a", "X", None, Some(date(2020, 1, 1)))];

        let view = render_trends(&rows, &codes(&["X", "Y"])).unwrap();
        assert!(view.chart.is_none());
        assert_eq!(view.indicators, codes(&["X", "Y"]));
        assert_eq!(view.notice.unwrap().message, NO_TREND_DATA_MESSAGE);
    }
}
