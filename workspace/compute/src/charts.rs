//! Chart rendering.
//!
//! Every renderer is a pure function from already-filtered rows to a view
//! holding Plotly figures. When there is nothing to draw the view carries a
//! notice instead of an empty chart.

pub mod events;
pub mod forecast;
pub mod trend;

pub use events::{EVENTS_CHART_ID, NO_EVENTS_MESSAGE, render_events};
pub use forecast::{
    ACCESS_CHART_ID, DEFAULT_PROGRESS_TARGET, PROGRESS_YEAR, USAGE_CHART_ID, progress_toward_target,
    render_forecast,
};
pub use trend::{NO_TREND_DATA_MESSAGE, SELECT_INDICATOR_PROMPT, TREND_CHART_ID, render_trends};

use common::ChartSpec;
use plotly::common::Title;
use plotly::layout::Axis;
use plotly::{Layout, Plot};

use crate::error::Result;

/// Layout with a title and both axis titles set.
fn titled_layout(title: &str, x_title: &str, y_title: &str) -> Layout {
    Layout::new()
        .title(Title::with_text(title))
        .x_axis(Axis::new().title(Title::with_text(x_title)))
        .y_axis(Axis::new().title(Title::with_text(y_title)))
        .height(420)
}

/// Serializes `plot` into a chart spec mounted on element `id`.
fn chart_spec(id: &str, title: &str, plot: &Plot) -> Result<ChartSpec> {
    let figure: serde_json::Value = serde_json::from_str(&plot.to_json())?;
    Ok(ChartSpec {
        id: id.to_string(),
        title: title.to_string(),
        figure,
    })
}
