use yew::prelude::*;

use super::Controls;
use crate::helpers::params::Tab;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub controls: Controls,
}

/// Tab links. Each one carries the current controls so switching tabs keeps
/// the sidebar state.
#[function_component(TabBar)]
pub fn tab_bar(props: &Props) -> Html {
    html! {
        <nav role="tablist" class="tabs tabs-bordered mt-4">
            { for Tab::ALL.iter().map(|tab| {
                let href = format!("/?{}", props.controls.query_for(*tab));
                let active = (*tab == props.controls.tab).then_some("tab-active");
                html! {
                    <a role="tab" href={href} class={classes!("tab", active)}>{ tab.label() }</a>
                }
            }) }
        </nav>
    }
}
