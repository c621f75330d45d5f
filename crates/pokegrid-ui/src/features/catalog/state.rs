//! Catalog models and pure state transitions, testable outside wasm.
//!
//! # Design
//! - The store keeps raw inputs (full record list, search text, toggled
//!   types, page); everything rendered is derived via [`select_page_view`].
//! - Transitions never correct the page. Shrinking filters can strand it past
//!   the end, and the pagination controls walk it back into range.

use crate::core::logic::{filter_by_name, filter_by_types, page_slice, total_pages};
use pokegrid_api_models::PokemonDetail;
use std::collections::BTreeSet;

/// Fixed set of type filters offered by the toolbar.
pub const TYPE_FILTERS: [&str; 7] = [
    "bug", "electric", "fire", "grass", "normal", "poison", "water",
];

/// One catalog record as the grid renders it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pokemon {
    /// Canonical lowercase name from the upstream listing.
    pub name: String,
    /// Front sprite URL, when the upstream has one.
    pub sprite: Option<String>,
    /// Type names in slot order.
    pub types: Vec<String>,
    /// Base stats in upstream order.
    pub stats: Vec<PokemonStat>,
}

/// Single named stat line on a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PokemonStat {
    /// Stat name, e.g. `hp` or `speed`.
    pub name: String,
    /// Base value for the stat.
    pub value: u32,
}

impl From<PokemonDetail> for Pokemon {
    fn from(value: PokemonDetail) -> Self {
        Self {
            name: value.name,
            sprite: value.sprites.front_default,
            types: value.types.into_iter().map(|slot| slot.kind.name).collect(),
            stats: value
                .stats
                .into_iter()
                .map(|slot| PokemonStat {
                    name: slot.stat.name,
                    value: slot.base_stat,
                })
                .collect(),
        }
    }
}

/// Page-size choices offered by the per-page selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PageSize {
    /// Ten records per page.
    #[default]
    Ten,
    /// Twenty records per page.
    Twenty,
    /// Fifty records per page.
    Fifty,
}

impl PageSize {
    /// Every size the selector offers, in display order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Ten, Self::Twenty, Self::Fifty]
    }

    /// Number of records the size spans.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
        }
    }

    /// Value string used by the select control.
    #[must_use]
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::Ten => "10",
            Self::Twenty => "20",
            Self::Fifty => "50",
        }
    }

    /// Parse a select control value; unknown values fall back to the default.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value {
            "20" => Self::Twenty,
            "50" => Self::Fifty,
            _ => Self::Ten,
        }
    }
}

/// Filter state for the catalog grid.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CatalogFilters {
    /// Name query, kept exactly as typed.
    pub search: String,
    /// Types toggled on; empty means no type filtering.
    pub selected_types: BTreeSet<String>,
}

/// Paging state for the catalog grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    /// Current 1-based page.
    pub current: usize,
    /// Records shown per page.
    pub size: PageSize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current: 1,
            size: PageSize::default(),
        }
    }
}

/// Catalog slice of the app store.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CatalogState {
    /// Loaded records in listing order; written once per session.
    pub rows: Vec<Pokemon>,
    /// Active name and type filters.
    pub filters: CatalogFilters,
    /// Current page and page size.
    pub page: PageState,
}

/// Everything the grid and its footer need for one render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageView {
    /// Records visible on the current page.
    pub rows: Vec<Pokemon>,
    /// Number of pages the filtered records span.
    pub total_pages: usize,
}

/// Replace the catalog with a freshly loaded snapshot.
pub fn replace_catalog(state: &mut CatalogState, rows: Vec<Pokemon>) {
    state.rows = rows;
}

/// Store the search query exactly as typed.
pub fn set_search(state: &mut CatalogState, search: String) {
    state.filters.search = search;
}

/// Toggle a type's membership in the selection.
pub fn toggle_type(state: &mut CatalogState, name: &str) {
    if !state.filters.selected_types.remove(name) {
        state.filters.selected_types.insert(name.to_string());
    }
}

/// Jump to a page chosen by the pagination controls.
pub const fn set_page(state: &mut CatalogState, page: usize) {
    state.page.current = page;
}

/// Replace the page size. The current page stays where it is.
pub const fn set_page_size(state: &mut CatalogState, size: PageSize) {
    state.page.size = size;
}

/// Derive the rendered page from the records, filters, and paging state.
#[must_use]
pub fn select_page_view(state: &CatalogState) -> PageView {
    let by_name = filter_by_name(&state.rows, &state.filters.search);
    let filtered = filter_by_types(&by_name, &state.filters.selected_types);
    let size = state.page.size.count();
    PageView {
        rows: page_slice(&filtered, state.page.current, size),
        total_pages: total_pages(filtered.len(), size),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CatalogState, PageSize, Pokemon, PokemonStat, replace_catalog, select_page_view,
        set_page, set_page_size, set_search, toggle_type,
    };
    use pokegrid_api_models::{NamedRef, PokemonDetail, SpriteSet, StatSlot, TypeSlot};

    fn creature(name: &str, types: &[&str]) -> Pokemon {
        Pokemon {
            name: name.to_string(),
            sprite: None,
            types: types.iter().map(ToString::to_string).collect(),
            stats: vec![],
        }
    }

    fn named(name: &str) -> NamedRef {
        NamedRef {
            name: name.to_string(),
            url: format!("https://pokeapi.co/api/v2/{name}/"),
        }
    }

    #[test]
    fn detail_maps_into_a_record_preserving_order() {
        let detail = PokemonDetail {
            name: "bulbasaur".to_string(),
            sprites: SpriteSet {
                front_default: Some("https://img.example/1.png".to_string()),
            },
            types: vec![
                TypeSlot {
                    slot: 1,
                    kind: named("grass"),
                },
                TypeSlot {
                    slot: 2,
                    kind: named("poison"),
                },
            ],
            stats: vec![
                StatSlot {
                    base_stat: 45,
                    stat: named("hp"),
                },
                StatSlot {
                    base_stat: 49,
                    stat: named("attack"),
                },
            ],
        };

        let record = Pokemon::from(detail);
        assert_eq!(record.name, "bulbasaur");
        assert_eq!(record.sprite.as_deref(), Some("https://img.example/1.png"));
        assert_eq!(record.types, vec!["grass", "poison"]);
        assert_eq!(
            record.stats,
            vec![
                PokemonStat {
                    name: "hp".to_string(),
                    value: 45
                },
                PokemonStat {
                    name: "attack".to_string(),
                    value: 49
                },
            ]
        );
    }

    #[test]
    fn page_size_round_trips_select_values() {
        for size in PageSize::all() {
            assert_eq!(PageSize::from_value(size.as_value()), size);
        }
        assert_eq!(PageSize::from_value("7"), PageSize::Ten);
    }

    #[test]
    fn toggle_type_adds_then_removes() {
        let mut state = CatalogState::default();
        toggle_type(&mut state, "fire");
        assert!(state.filters.selected_types.contains("fire"));
        toggle_type(&mut state, "fire");
        assert!(state.filters.selected_types.is_empty());
    }

    #[test]
    fn search_is_stored_exactly_as_typed() {
        let mut state = CatalogState::default();
        set_search(&mut state, "PIKA ".to_string());
        assert_eq!(state.filters.search, "PIKA ");
    }

    #[test]
    fn replace_catalog_overwrites_previous_rows() {
        let mut state = CatalogState::default();
        replace_catalog(&mut state, vec![creature("bulbasaur", &["grass"])]);
        replace_catalog(&mut state, vec![creature("charmander", &["fire"])]);
        assert_eq!(state.rows.len(), 1);
        assert_eq!(state.rows[0].name, "charmander");
    }

    #[test]
    fn page_transitions_store_what_the_controls_emit() {
        let mut state = CatalogState::default();
        set_page(&mut state, 4);
        assert_eq!(state.page.current, 4);
        set_page_size(&mut state, PageSize::Twenty);
        assert_eq!(state.page.size, PageSize::Twenty);
        assert_eq!(state.page.current, 4);
    }

    #[test]
    fn select_page_view_composes_filters_then_pages() {
        let mut state = CatalogState::default();
        replace_catalog(
            &mut state,
            vec![
                creature("bulbasaur", &["grass", "poison"]),
                creature("ivysaur", &["grass", "poison"]),
                creature("charmander", &["fire"]),
                creature("charmeleon", &["fire"]),
                creature("squirtle", &["water"]),
            ],
        );

        toggle_type(&mut state, "fire");
        set_search(&mut state, "char".to_string());
        let view = select_page_view(&state);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].name, "charmander");
        assert_eq!(view.rows[1].name, "charmeleon");
    }
}
