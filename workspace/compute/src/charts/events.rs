use common::{EventRow, EventsView, Notice};
use plotly::common::Mode;
use plotly::{Plot, Scatter};

use super::{chart_spec, titled_layout};
use crate::error::Result;
use crate::records::Event;

pub const EVENTS_CHART_ID: &str = "events-chart";
pub const EVENTS_CHART_TITLE: &str = "Cataloged events by category";
pub const NO_EVENTS_MESSAGE: &str = "No events in the selected range.";
const UNCATEGORIZED: &str = "uncategorized";

/// Event timeline: one marker per dated event at (date, category), plus the
/// same events as table rows. Undated events appear in neither.
pub fn render_events(events: &[Event]) -> Result<EventsView> {
    let mut rows: Vec<EventRow> = events
        .iter()
        .filter_map(|event| {
            event.event_date.map(|event_date| EventRow {
                record_id: event.record_id.clone(),
                category: event.category.clone(),
                event_title: event.title.clone(),
                event_date,
                source_name: event.source_name.clone(),
                confidence: event.confidence.clone(),
            })
        })
        .collect();

    if rows.is_empty() {
        return Ok(EventsView {
            range: None,
            chart: None,
            rows,
            notice: Some(Notice::info(NO_EVENTS_MESSAGE)),
        });
    }

    // stable: same-day events keep source order
    rows.sort_by_key(|row| row.event_date);

    let dates: Vec<String> = rows.iter().map(|row| row.event_date.to_string()).collect();
    let categories: Vec<String> = rows
        .iter()
        .map(|row| row.category.clone().unwrap_or_else(|| UNCATEGORIZED.to_string()))
        .collect();
    let hover: Vec<String> = rows.iter().map(hover_text).collect();

    let mut plot = Plot::new();
    plot.add_trace(
        Scatter::new(dates, categories)
            .mode(Mode::Markers)
            .name("Events")
            .hover_text_array(hover),
    );
    plot.set_layout(titled_layout(EVENTS_CHART_TITLE, "Event date", "Event category"));

    Ok(EventsView {
        range: None,
        chart: Some(chart_spec(EVENTS_CHART_ID, EVENTS_CHART_TITLE, &plot)?),
        rows,
        notice: None,
    })
}

fn hover_text(row: &EventRow) -> String {
    format!(
        "{}<br>Source: {}<br>Confidence: {}",
        row.event_title.as_deref().unwrap_or("(untitled)"),
        row.source_name.as_deref().unwrap_or("unknown"),
        row.confidence.as_deref().unwrap_or("unknown"),
    )
}
