use common::ChartSpec;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub chart: ChartSpec,
}

/// Mount point for one Plotly figure; the browser script reads `data-figure`.
#[function_component(Chart)]
pub fn chart(props: &Props) -> Html {
    html! {
        <div
            id={props.chart.id.clone()}
            class="chart w-full min-h-96"
            data-figure={props.chart.figure.to_string()}
        ></div>
    }
}
