//! Catalog screen: title, search, type toggles, record grid, pagination.
//!
//! # Design
//! - Everything rendered derives from the store on each render via
//!   [`select_page_view`]; callbacks only dispatch transitions.
//! - Filter and size changes leave the page alone. The pagination controls
//!   are the only thing that moves it.

use crate::components::atoms::SearchInput;
use crate::components::daisy::{
    Badge, Button, Card, DaisyColor, DaisySize, DaisyVariant, Pagination, Select,
};
use crate::core::logic::{TypeAccent, record_accent, type_accent};
use crate::core::store::{AppStore, app_dispatch};
use crate::features::catalog::state::{
    PageSize, Pokemon, TYPE_FILTERS, select_page_view, set_page, set_page_size, set_search,
    toggle_type,
};
use std::collections::BTreeSet;
use yew::prelude::*;
use yewdux::prelude::use_selector;

const fn accent_tone(accent: TypeAccent) -> DaisyColor {
    match accent {
        TypeAccent::Fire => DaisyColor::Error,
        TypeAccent::Water => DaisyColor::Primary,
        TypeAccent::Grass => DaisyColor::Success,
        TypeAccent::Neutral => DaisyColor::Neutral,
    }
}

fn render_type_toggles(selected: &BTreeSet<String>, on_toggle: &Callback<String>) -> Html {
    html! {
        <div class="catalog-type-toggles">
            { for TYPE_FILTERS.iter().map(|name| {
                let active = selected.contains(*name);
                let on_toggle = on_toggle.clone();
                let emit_name = (*name).to_string();
                html! {
                    <Button
                        tone={Some(DaisyColor::Primary)}
                        size={DaisySize::Sm}
                        variant={if active { DaisyVariant::Solid } else { DaisyVariant::Outline }}
                        onclick={Callback::from(move |_| on_toggle.emit(emit_name.clone()))}
                    >
                        { *name }
                    </Button>
                }
            }) }
        </div>
    }
}

fn render_card(record: &Pokemon) -> Html {
    let tone = accent_tone(record_accent(&record.types));
    let figure = html! {
        <img
            class="catalog-sprite"
            src={record.sprite.clone()}
            alt={record.name.clone()}
            width="120"
            height="120"
        />
    };

    html! {
        <Card title={AttrValue::from(record.name.clone())} figure={figure} tone={Some(tone)}>
            <div class="catalog-card-badges">
                { for record.types.iter().map(|name| html! {
                    <Badge tone={Some(accent_tone(type_accent(name)))} size={DaisySize::Sm}>
                        { name.clone() }
                    </Badge>
                }) }
            </div>
            <ul class="catalog-card-stats">
                { for record.stats.iter().map(|stat| html! {
                    <li>
                        <strong>{ format!("{}:", stat.name) }</strong>
                        { " " }
                        { stat.value }
                    </li>
                }) }
            </ul>
        </Card>
    }
}

#[function_component(CatalogPage)]
pub(crate) fn catalog_page() -> Html {
    let view = use_selector(|store: &AppStore| select_page_view(&store.catalog));
    let search = use_selector(|store: &AppStore| store.catalog.filters.search.clone());
    let selected = use_selector(|store: &AppStore| store.catalog.filters.selected_types.clone());
    let page = use_selector(|store: &AppStore| store.catalog.page);

    let dispatch = app_dispatch();
    let on_search = {
        let dispatch = dispatch.clone();
        Callback::from(move |value: String| {
            dispatch.reduce_mut(|store| set_search(&mut store.catalog, value));
        })
    };
    let on_toggle = {
        let dispatch = dispatch.clone();
        Callback::from(move |name: String| {
            dispatch.reduce_mut(|store| toggle_type(&mut store.catalog, &name));
        })
    };
    let on_page = {
        let dispatch = dispatch.clone();
        Callback::from(move |next: usize| {
            dispatch.reduce_mut(|store| set_page(&mut store.catalog, next));
        })
    };
    let on_page_size = Callback::from(move |value: AttrValue| {
        let size = PageSize::from_value(&value);
        dispatch.reduce_mut(|store| set_page_size(&mut store.catalog, size));
    });

    let size_options: Vec<(AttrValue, AttrValue)> = PageSize::all()
        .iter()
        .map(|size| {
            (
                AttrValue::from(size.as_value()),
                AttrValue::from(format!("{} per page", size.count())),
            )
        })
        .collect();

    html! {
        <div class="catalog-page">
            <h1 class="catalog-title">
                <span class="text-primary">{ "Poke" }</span>
                <span class="text-error">{ "grid" }</span>
            </h1>
            <SearchInput
                class={classes!("catalog-search")}
                value={AttrValue::from((*search).clone())}
                placeholder="Search by name"
                on_search={on_search}
            />
            { render_type_toggles(&selected, &on_toggle) }
            <div class="catalog-grid">
                { for view.rows.iter().map(render_card) }
            </div>
            <div class="catalog-footer">
                <Pagination current={page.current} total={view.total_pages} on_change={on_page} />
                <Select
                    size={DaisySize::Sm}
                    options={size_options}
                    value={Some(AttrValue::from(page.size.as_value()))}
                    onchange={on_page_size}
                />
            </div>
        </div>
    }
}
