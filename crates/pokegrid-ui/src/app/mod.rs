//! Application root: one-shot catalog load plus the catalog screen.
//!
//! # Design
//! - The catalog is fetched exactly once, on mount; every later interaction
//!   runs client-side against the loaded records.
//! - A failed load leaves the store untouched and logs to the console; the
//!   screen keeps rendering its empty state and a page reload retries.

use crate::core::store::app_dispatch;
use crate::features::catalog::state::replace_catalog;
use crate::features::catalog::view::CatalogPage;
use crate::services::api::{ApiClient, CATALOG_FETCH_LIMIT, POKEAPI_BASE_URL};
use gloo::console;
use yew::platform::spawn_local;
use yew::prelude::*;

#[function_component(PokegridApp)]
pub(crate) fn pokegrid_app() -> Html {
    use_effect_with_deps(
        move |_| {
            let dispatch = app_dispatch();
            spawn_local(async move {
                let client = ApiClient::new(POKEAPI_BASE_URL);
                match client.fetch_catalog(CATALOG_FETCH_LIMIT).await {
                    Ok(rows) => {
                        dispatch.reduce_mut(|store| replace_catalog(&mut store.catalog, rows));
                    }
                    Err(err) => {
                        console::error!("catalog load failed", err.to_string());
                    }
                }
            });
            || ()
        },
        (),
    );

    html! { <CatalogPage /> }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    gloo::utils::document().get_element_by_id("root").map_or_else(
        || yew::Renderer::<PokegridApp>::new().render(),
        |root| yew::Renderer::<PokegridApp>::with_root(root).render(),
    );
}
