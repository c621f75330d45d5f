//! Pagination molecule: Previous, one button per page, Next.
//!
//! Next disables only on the last page itself; a current page stranded past
//! the end keeps it live so the jump snaps back into range.

use crate::components::daisy::atoms::Button;
use crate::components::daisy::foundations::DaisySize;
use crate::core::logic::{at_last_page, next_page, prev_page};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PaginationProps {
    /// Current 1-based page.
    #[prop_or(1usize)]
    pub(crate) current: usize,
    /// Total number of pages; zero renders no numbered buttons.
    #[prop_or_default]
    pub(crate) total: usize,
    #[prop_or_default]
    pub(crate) class: Classes,
    pub(crate) on_change: Callback<usize>,
}

#[function_component(Pagination)]
pub(crate) fn pagination(props: &PaginationProps) -> Html {
    let current = props.current;
    let total = props.total;

    let go_prev = {
        let on_change = props.on_change.clone();
        Callback::from(move |_| on_change.emit(prev_page(current)))
    };
    let go_next = {
        let on_change = props.on_change.clone();
        Callback::from(move |_| on_change.emit(next_page(current, total)))
    };

    html! {
        <div class={classes!("join", "pagination", props.class.clone())}>
            <Button
                class={classes!("join-item")}
                size={DaisySize::Sm}
                disabled={current <= 1}
                onclick={go_prev}
            >
                { "Previous" }
            </Button>
            { for (1..=total).map(|page| {
                let on_change = props.on_change.clone();
                html! {
                    <Button
                        class={classes!("join-item", (page == current).then_some("btn-active"))}
                        size={DaisySize::Sm}
                        onclick={Callback::from(move |_| on_change.emit(page))}
                    >
                        { page }
                    </Button>
                }
            }) }
            <Button
                class={classes!("join-item")}
                size={DaisySize::Sm}
                disabled={at_last_page(current, total)}
                onclick={go_next}
            >
                { "Next" }
            </Button>
        </div>
    }
}
