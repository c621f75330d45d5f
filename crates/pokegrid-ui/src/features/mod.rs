//! Feature slices composing the catalog screen.

pub mod catalog;
