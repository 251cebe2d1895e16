use chrono::NaiveDate;
use common::Scenario;
use yew::prelude::*;

use super::Controls;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub controls: Controls,
}

/// Control form. Submits back to `/` with GET so every choice lands in the
/// query string.
#[function_component(Sidebar)]
pub fn sidebar(props: &Props) -> Html {
    let controls = &props.controls;

    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for="controls-drawer"></label>
            <aside class="p-4 w-80 min-h-full bg-base-100 text-base-content border-r border-base-300">
                <h2 class="text-xl font-bold mb-4">{"Controls"}</h2>
                <form method="get" action="/">
                    <input type="hidden" name="tab" value={controls.tab.as_str()} />
                    <DateField name="start_date" label="Start date" value={controls.start_date} />
                    <DateField name="end_date" label="End date" value={controls.end_date} />

                    <label class="label mt-2" for="scenario">
                        <span class="label-text font-semibold">{"Forecast scenario"}</span>
                    </label>
                    <select id="scenario" name="scenario" class="select select-bordered w-full">
                        { for Scenario::ALL.iter().map(|scenario| html! {
                            <option value={scenario.as_str()} selected={*scenario == controls.scenario}>
                                { scenario.as_str() }
                            </option>
                        }) }
                    </select>

                    <label class="label mt-2" for="indicators">
                        <span class="label-text font-semibold">{"Select indicators"}</span>
                    </label>
                    // Sent even with nothing selected, so an empty selection stays explicit.
                    <input type="hidden" name="indicators" value="" />
                    <select id="indicators" name="indicators" multiple={true} size="8" class="select select-bordered w-full h-48">
                        { for controls.indicator_choices.iter().map(|code| html! {
                            <option value={code.clone()} selected={controls.selected.contains(code)}>
                                { code.clone() }
                            </option>
                        }) }
                    </select>

                    <button type="submit" class="btn btn-primary w-full mt-4">{"Apply"}</button>
                </form>
            </aside>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DateFieldProps {
    name: AttrValue,
    label: AttrValue,
    value: Option<NaiveDate>,
}

#[function_component(DateField)]
fn date_field(props: &DateFieldProps) -> Html {
    let value = props.value.map(|date| date.to_string()).unwrap_or_default();

    html! {
        <>
            <label class="label mt-2" for={props.name.clone()}>
                <span class="label-text font-semibold">{ props.label.clone() }</span>
            </label>
            <input
                type="date"
                id={props.name.clone()}
                name={props.name.clone()}
                value={value}
                class="input input-bordered w-full"
            />
        </>
    }
}
