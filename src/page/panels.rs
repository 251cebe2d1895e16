//! Content of each dashboard tab.

use common::{EventsView, ForecastRecord, ForecastView, TrendView};
use yew::prelude::*;

use super::chart::Chart;
use super::{Downloads, NoticeBox};

#[derive(Properties, PartialEq)]
pub struct TrendsProps {
    pub view: TrendView,
}

#[function_component(TrendsPanel)]
pub fn trends_panel(props: &TrendsProps) -> Html {
    let view = &props.view;

    html! {
        <>
            <h3 class="card-title">{"Trends (Observations)"}</h3>
            if let Some(notice) = &view.notice {
                <NoticeBox notice={notice.clone()} />
            }
            if let Some(chart) = &view.chart {
                <Chart chart={chart.clone()} />
            }
            <p class="text-sm text-gray-500">{"Tip: use the sidebar date range to focus on recent years."}</p>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct EventsProps {
    pub view: EventsView,
}

#[function_component(EventsPanel)]
pub fn events_panel(props: &EventsProps) -> Html {
    let view = &props.view;

    html! {
        <>
            <h3 class="card-title">{"Events timeline"}</h3>
            if let Some(notice) = &view.notice {
                <NoticeBox notice={notice.clone()} />
            }
            if let Some(chart) = &view.chart {
                <Chart chart={chart.clone()} />
            }
            if !view.rows.is_empty() {
                <div class="overflow-x-auto mt-4">
                    <table class="table table-zebra">
                        <thead>
                            <tr>
                                <th>{"Record"}</th>
                                <th>{"Category"}</th>
                                <th>{"Event"}</th>
                                <th>{"Date"}</th>
                                <th>{"Source"}</th>
                                <th>{"Confidence"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for view.rows.iter().map(|row| html! {
                                <tr>
                                    <td>{ text(&row.record_id) }</td>
                                    <td>{ text(&row.category) }</td>
                                    <td>{ text(&row.event_title) }</td>
                                    <td>{ row.event_date.to_string() }</td>
                                    <td>{ text(&row.source_name) }</td>
                                    <td>{ text(&row.confidence) }</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct ForecastProps {
    pub view: ForecastView,
}

/// Scenario charts, the forecast table and progress toward the target. Only
/// the notices show when no forecast table was loaded.
#[function_component(ForecastsPanel)]
pub fn forecasts_panel(props: &ForecastProps) -> Html {
    let view = &props.view;
    let loaded = !(view.years.is_empty() && view.available_scenarios.is_empty());

    html! {
        <>
            <h3 class="card-title">{"Forecasts (2025–2027)"}</h3>
            { for view.notices.iter().map(|notice| html! { <NoticeBox notice={notice.clone()} /> }) }
            if loaded {
                <>
                    <p>{"Scenario: "}<strong>{ view.scenario.as_str() }</strong></p>
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                        if let Some(chart) = &view.access_chart {
                            <div><Chart chart={chart.clone()} /></div>
                        }
                        if let Some(chart) = &view.usage_chart {
                            <div><Chart chart={chart.clone()} /></div>
                        }
                    </div>
                    if !view.rows.is_empty() {
                        <ForecastTable rows={view.rows.clone()} />
                    }
                    if let Some(progress) = &view.progress {
                        <>
                            <h3 class="text-lg font-semibold mt-4">
                                { format!("Progress toward {:.0}% inclusion target (illustrative)", progress.target) }
                            </h3>
                            <progress
                                class="progress progress-primary w-full"
                                value={format!("{:.4}", progress.value)}
                                max="1"
                            ></progress>
                            <p class="text-sm text-gray-500">{ progress.caption.clone() }</p>
                        </>
                    }
                </>
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
struct ForecastTableProps {
    rows: Vec<ForecastRecord>,
}

#[function_component(ForecastTable)]
fn forecast_table(props: &ForecastTableProps) -> Html {
    html! {
        <div class="overflow-x-auto mt-4">
            <table class="table table-zebra">
                <thead>
                    <tr>
                        <th>{"year"}</th>
                        <th>{"access_base"}</th>
                        <th>{"access_pessimistic"}</th>
                        <th>{"access_optimistic"}</th>
                        <th>{"usage_base"}</th>
                        <th>{"usage_pessimistic"}</th>
                        <th>{"usage_optimistic"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.rows.iter().map(|row| html! {
                        <tr>
                            <td>{ row.year.to_string() }</td>
                            <td>{ number(row.access_base) }</td>
                            <td>{ number(row.access_pessimistic) }</td>
                            <td>{ number(row.access_optimistic) }</td>
                            <td>{ number(row.usage_base) }</td>
                            <td>{ number(row.usage_pessimistic) }</td>
                            <td>{ number(row.usage_optimistic) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DownloadsProps {
    pub downloads: Downloads,
}

#[function_component(DownloadsPanel)]
pub fn downloads_panel(props: &DownloadsProps) -> Html {
    let downloads = &props.downloads;

    html! {
        <>
            <h3 class="card-title">{"Download data"}</h3>
            <div class="flex gap-2 mt-2">
                <a class="btn btn-outline" href="/downloads/dataset.csv" download={downloads.dataset_file.clone()}>
                    {"Download enriched dataset (CSV)"}
                </a>
                if let Some(forecast_file) = &downloads.forecast_file {
                    <a class="btn btn-outline" href="/downloads/forecast.csv" download={forecast_file.clone()}>
                        {"Download forecast table (CSV)"}
                    </a>
                }
            </div>
            <p class="text-sm text-gray-500 mt-2">{"Files are served as-is from the processed data directory."}</p>
        </>
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn number(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_default()
}
