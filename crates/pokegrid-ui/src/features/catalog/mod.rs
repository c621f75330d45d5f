//! Catalog feature: models, state transitions, and the screen that renders
//! them.

pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod view;
