//! Multi-element daisy wrappers.

pub(crate) mod card;
pub(crate) mod pagination;

pub(crate) use card::Card;
pub(crate) use pagination::Pagination;
