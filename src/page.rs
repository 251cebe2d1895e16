//! Server-rendered dashboard page.
//!
//! The body is a tree of yew function components rendered to a string with
//! `ServerRenderer` and placed into the static document shell. Charts carry
//! their Plotly figure as JSON in a `data-figure` attribute and
//! `assets/dashboard.js` draws them in the browser.

mod chart;
mod kpis;
mod panels;
mod sidebar;
mod tabs;

use chrono::NaiveDate;
use common::{EventsView, ForecastView, KpiBoard, Notice, NoticeLevel, Scenario, TrendView};
use url::form_urlencoded;
use yew::ServerRenderer;
use yew::prelude::*;

use crate::helpers::params::Tab;
use kpis::KpiRow;
use panels::{DownloadsPanel, EventsPanel, ForecastsPanel, TrendsPanel};
use sidebar::Sidebar;
use tabs::TabBar;

const DOCUMENT: &str = include_str!("../assets/index.html");
const BODY_SLOT: &str = "<!-- dashboard -->";

pub const DASHBOARD_JS: &str = include_str!("../assets/dashboard.js");

/// Sidebar state echoed back into the form and tab links.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub scenario: Scenario,
    pub indicator_choices: Vec<String>,
    pub selected: Vec<String>,
    pub tab: Tab,
}

impl Controls {
    /// Query string reproducing these controls with `tab` active.
    pub fn query_for(&self, tab: Tab) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("tab", tab.as_str());
        if let Some(start) = self.start_date {
            query.append_pair("start_date", &start.to_string());
        }
        if let Some(end) = self.end_date {
            query.append_pair("end_date", &end.to_string());
        }
        query.append_pair("scenario", self.scenario.as_str());
        // The empty marker keeps an empty selection distinct from "use defaults".
        query.append_pair("indicators", "");
        for code in &self.selected {
            query.append_pair("indicators", code);
        }
        query.finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Downloads {
    pub dataset_file: String,
    pub forecast_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TabContent {
    Trends(TrendView),
    Events(EventsView),
    Forecasts(ForecastView),
    Download(Downloads),
}

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct DashboardPage {
    pub controls: Controls,
    pub kpis: KpiBoard,
    pub notices: Vec<Notice>,
    pub content: TabContent,
}

/// Renders `page` into the full HTML document.
pub async fn render_dashboard(page: DashboardPage) -> String {
    let body = ServerRenderer::<Dashboard>::with_props(move || page)
        .hydratable(false)
        .render()
        .await;
    DOCUMENT.replacen(BODY_SLOT, &body, 1)
}

#[function_component(Dashboard)]
fn dashboard(page: &DashboardPage) -> Html {
    let content = match &page.content {
        TabContent::Trends(view) => html! { <TrendsPanel view={view.clone()} /> },
        TabContent::Events(view) => html! { <EventsPanel view={view.clone()} /> },
        TabContent::Forecasts(view) => html! { <ForecastsPanel view={view.clone()} /> },
        TabContent::Download(downloads) => html! { <DownloadsPanel downloads={downloads.clone()} /> },
    };

    html! {
        <div class="drawer lg:drawer-open">
            <input id="controls-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col min-h-screen bg-base-200">
                <main class="flex-1 p-6">
                    <h1 class="text-3xl font-bold">{"Forecasting Financial Inclusion in Ethiopia"}</h1>
                    <p class="text-sm text-gray-500 mb-4">
                        {"Trends, events, and scenario forecasts for Access (account ownership) and Usage (digital payments)."}
                    </p>
                    { for page.notices.iter().map(|notice| html! { <NoticeBox notice={notice.clone()} /> }) }

                    <h2 class="text-xl font-semibold mt-4">{"Overview"}</h2>
                    <KpiRow board={page.kpis.clone()} />
                    <TabBar controls={page.controls.clone()} />

                    <section class="card bg-base-100 shadow mt-4">
                        <div class="card-body">
                            { content }
                        </div>
                    </section>
                </main>
            </div>
            <Sidebar controls={page.controls.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NoticeProps {
    pub notice: Notice,
}

#[function_component(NoticeBox)]
fn notice_box(props: &NoticeProps) -> Html {
    let level = match props.notice.level {
        NoticeLevel::Info => "alert-info",
        NoticeLevel::Warning => "alert-warning",
        NoticeLevel::Error => "alert-error",
    };

    html! {
        <div role="alert" class={classes!("alert", level, "my-2")}>
            <span>{ props.notice.message.clone() }</span>
        </div>
    }
}
