//! DOM components for the catalog screen.

pub(crate) mod atoms;
pub(crate) mod daisy;
