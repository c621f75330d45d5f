//! Card molecule for one catalog record.

use crate::components::daisy::foundations::{DaisyColor, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CardProps {
    #[prop_or_default]
    pub(crate) title: Option<AttrValue>,
    /// Figure slot rendered above the body, typically a sprite.
    #[prop_or_default]
    pub(crate) figure: Option<Html>,
    /// Accent tone applied as a border class.
    #[prop_or_default]
    pub(crate) tone: Option<DaisyColor>,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(Card)]
pub(crate) fn card(props: &CardProps) -> Html {
    let mut classes = classes!("card", "shadow", "bg-base-200", props.class.clone());
    if let Some(tone) = tone_class("border", props.tone) {
        classes.push("border");
        classes.push(tone);
    }

    let figure = props.figure.clone().map_or(html! {}, |figure| {
        html! { <figure class="card-figure">{ figure }</figure> }
    });
    let title = props.title.clone().map_or(html! {}, |title| {
        html! { <h2 class="card-title">{ title }</h2> }
    });

    html! {
        <div class={classes}>
            { figure }
            <div class="card-body">
                { title }
                { for props.children.iter() }
            </div>
        </div>
    }
}
