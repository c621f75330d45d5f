//! Single-element daisy wrappers.

pub(crate) mod badge;
pub(crate) mod button;
pub(crate) mod select;

pub(crate) use badge::Badge;
pub(crate) use button::Button;
pub(crate) use select::Select;
