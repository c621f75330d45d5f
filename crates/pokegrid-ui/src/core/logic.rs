//! Pure catalog logic kept out of components for non-wasm testing.
//!
//! # Design
//! - Filters and paging derive from the full record list on every call; no
//!   cached intermediate state to invalidate.
//! - Page numbers are 1-based everywhere; out-of-range pages yield an empty
//!   window instead of being corrected here.

use crate::features::catalog::state::Pokemon;
use std::collections::BTreeSet;

/// Tone bucket shared by type badges and record accents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeAccent {
    /// Fire types take the error tone.
    Fire,
    /// Water types take the primary tone.
    Water,
    /// Grass types take the success tone.
    Grass,
    /// Every other type takes the neutral tone.
    Neutral,
}

/// Accent bucket for a single type name.
#[must_use]
pub fn type_accent(name: &str) -> TypeAccent {
    match name {
        "fire" => TypeAccent::Fire,
        "water" => TypeAccent::Water,
        "grass" => TypeAccent::Grass,
        _ => TypeAccent::Neutral,
    }
}

/// Accent for a whole record: the first non-neutral type in slot order wins.
#[must_use]
pub fn record_accent(types: &[String]) -> TypeAccent {
    types
        .iter()
        .map(|name| type_accent(name))
        .find(|accent| *accent != TypeAccent::Neutral)
        .unwrap_or(TypeAccent::Neutral)
}

/// Keep records whose name contains the lowercased query as a substring.
///
/// Only the query is lowercased. Upstream names are already lowercase, so a
/// record with uppercase letters would never match; that quirk is kept as-is.
#[must_use]
pub fn filter_by_name(records: &[Pokemon], query: &str) -> Vec<Pokemon> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.name.contains(&needle))
        .cloned()
        .collect()
}

/// Keep records with at least one type in the selection.
///
/// An empty selection is a no-op, not an empty result.
#[must_use]
pub fn filter_by_types(records: &[Pokemon], selected: &BTreeSet<String>) -> Vec<Pokemon> {
    if selected.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| record.types.iter().any(|name| selected.contains(name)))
        .cloned()
        .collect()
}

/// Number of pages `len` records span; zero when there are none.
#[must_use]
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Contiguous window of records for a 1-based page.
///
/// Pages past the end yield an empty window. A `current` left stale by a
/// shrinking filter renders as an empty grid until a control moves it.
#[must_use]
pub fn page_slice(records: &[Pokemon], current: usize, page_size: usize) -> Vec<Pokemon> {
    let size = page_size.max(1);
    let start = current.saturating_sub(1).saturating_mul(size);
    if start >= records.len() {
        return Vec::new();
    }
    let end = start.saturating_add(size).min(records.len());
    records[start..end].to_vec()
}

/// Page the Next control lands on: one forward, clamped into `1..=total`.
///
/// With no pages at all the control stays on page 1.
#[must_use]
pub fn next_page(current: usize, total: usize) -> usize {
    current.saturating_add(1).min(total).max(1)
}

/// Page the Previous control lands on: one back, floored at the first page.
#[must_use]
pub fn prev_page(current: usize) -> usize {
    current.saturating_sub(1).max(1)
}

/// Whether the Next control has nowhere to go.
///
/// True exactly when [`next_page`] would return `current` unchanged: on the
/// last page, or on page 1 of an empty set. A page stranded past the end
/// keeps the control live so it can snap back into range.
#[must_use]
pub fn at_last_page(current: usize, total: usize) -> bool {
    current == total.max(1)
}

/// Request path for the catalog listing endpoint.
#[must_use]
pub fn build_listing_path(limit: usize) -> String {
    format!("/pokemon?limit={limit}")
}
