use common::KpiBoard;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub board: KpiBoard,
}

#[function_component(KpiRow)]
pub fn kpi_row(props: &Props) -> Html {
    html! {
        <div class="stats stats-vertical lg:stats-horizontal shadow w-full my-4">
            { for props.board.cards.iter().map(|card| html! {
                <div class="stat" title={card.help.clone()}>
                    <div class="stat-title">{ card.label.clone() }</div>
                    <div class="stat-value text-2xl">{ card.display.clone() }</div>
                    if let Some(help) = &card.help {
                        <div class="stat-desc">{ help.clone() }</div>
                    }
                </div>
            }) }
        </div>
    }
}
