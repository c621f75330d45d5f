//! Search input for the catalog toolbar.
//!
//! # Design
//! - Local state echoes the keystroke immediately; the store is updated on
//!   the same event, so filtering tracks typing with no debounce.
//! - A changed `value` prop resyncs the local state, keeping the store
//!   authoritative.

use crate::components::daisy::{DaisyColor, DaisySize, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SearchInputProps {
    #[prop_or_default]
    pub(crate) value: AttrValue,
    #[prop_or_default]
    pub(crate) placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) tone: Option<DaisyColor>,
    #[prop_or(DaisySize::Md)]
    pub(crate) size: DaisySize,
    #[prop_or_default]
    pub(crate) class: Classes,
    /// Emits the raw input value on every keystroke.
    #[prop_or_default]
    pub(crate) on_search: Callback<String>,
}

#[function_component(SearchInput)]
pub(crate) fn search_input(props: &SearchInputProps) -> Html {
    let value_state = use_state(|| props.value.to_string());

    {
        let value_state = value_state.clone();
        use_effect_with_deps(
            move |incoming: &AttrValue| {
                let next = incoming.to_string();
                if *value_state != next {
                    value_state.set(next);
                }
                || ()
            },
            props.value.clone(),
        );
    }

    let oninput = {
        let on_search = props.on_search.clone();
        let value_state = value_state.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                let next = input.value();
                value_state.set(next.clone());
                on_search.emit(next);
            }
        })
    };

    let mut classes = classes!(
        "input",
        "input-bordered",
        props.size.with_prefix("input"),
        props.class.clone()
    );
    if let Some(tone) = tone_class("input", props.tone) {
        classes.push(tone);
    }

    html! {
        <input
            type="search"
            class={classes}
            placeholder={props.placeholder.clone()}
            value={AttrValue::from((*value_state).clone())}
            oninput={oninput}
        />
    }
}
