//! Badge atom for short status or type labels.

use crate::components::daisy::foundations::{DaisyColor, DaisySize, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct BadgeProps {
    #[prop_or_default]
    pub(crate) children: Children,
    #[prop_or_default]
    pub(crate) tone: Option<DaisyColor>,
    #[prop_or(DaisySize::Md)]
    pub(crate) size: DaisySize,
    #[prop_or_default]
    pub(crate) class: Classes,
}

#[function_component(Badge)]
pub(crate) fn badge(props: &BadgeProps) -> Html {
    let mut classes = classes!(
        "badge",
        props.size.with_prefix("badge"),
        props.class.clone()
    );
    if let Some(tone) = tone_class("badge", props.tone) {
        classes.push(tone);
    }

    html! {
        <span class={classes}>
            { for props.children.iter() }
        </span>
    }
}
