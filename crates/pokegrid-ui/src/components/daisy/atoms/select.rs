//! Select atom for small single-choice controls.

use crate::components::daisy::foundations::{DaisyColor, DaisySize, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SelectProps {
    /// `(value, label)` pairs rendered in order.
    #[prop_or_default]
    pub(crate) options: Vec<(AttrValue, AttrValue)>,
    #[prop_or_default]
    pub(crate) value: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) tone: Option<DaisyColor>,
    #[prop_or(DaisySize::Md)]
    pub(crate) size: DaisySize,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) onchange: Callback<AttrValue>,
}

#[function_component(Select)]
pub(crate) fn select(props: &SelectProps) -> Html {
    let mut classes = classes!(
        "select",
        "select-bordered",
        props.size.with_prefix("select"),
        props.class.clone()
    );
    if let Some(tone) = tone_class("select", props.tone) {
        classes.push(tone);
    }

    let onchange = {
        let emit = props.onchange.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                emit.emit(AttrValue::from(select.value()));
            }
        })
    };

    html! {
        <select class={classes} value={props.value.clone()} onchange={onchange}>
            { for props.options.iter().map(|(value, label)| {
                let selected = props.value.as_ref() == Some(value);
                html! {
                    <option value={value.clone()} selected={selected}>
                        { label.clone() }
                    </option>
                }
            }) }
        </select>
    }
}
