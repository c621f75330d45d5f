//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Components mutate it only through the transitions in
//!   [`crate::features::catalog::state`].

use crate::features::catalog::state::CatalogState;
use yewdux::prelude::Dispatch;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Loaded catalog plus its filter and paging state.
    pub catalog: CatalogState,
}

/// Dispatch handle for the global [`AppStore`].
#[must_use]
pub fn app_dispatch() -> Dispatch<AppStore> {
    Dispatch::new()
}
