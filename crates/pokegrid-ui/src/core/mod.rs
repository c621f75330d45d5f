//! Core, DOM-free primitives and helpers for the catalog UI.

pub mod logic;
pub mod store;
