//! Screen-specific atoms that sit above the daisy wrappers.

pub(crate) mod search_input;

pub(crate) use search_input::SearchInput;
