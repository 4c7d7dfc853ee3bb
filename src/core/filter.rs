//! Filter/Search Predicate.
//!
//! A record passes when its name contains the search term and its color
//! starts with the selected color token, both compared case-insensitively.
//! Filtering never reorders: survivors keep catalog order.

use super::catalog::{CharacterCatalog, CharacterRecord};
use super::normalize::first_alternate;

/// The closed set of color filters offered by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorFilter {
    /// No color restriction.
    #[default]
    All,
    Green,
    Dark,
    Light,
}

impl ColorFilter {
    pub const ALL: [ColorFilter; 4] = [
        ColorFilter::All,
        ColorFilter::Green,
        ColorFilter::Dark,
        ColorFilter::Light,
    ];

    /// Lowercase token compared against the color field.
    pub fn token(self) -> &'static str {
        match self {
            ColorFilter::All => "all",
            ColorFilter::Green => "green",
            ColorFilter::Dark => "dark",
            ColorFilter::Light => "light",
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            ColorFilter::All => "All",
            ColorFilter::Green => "Green",
            ColorFilter::Dark => "Dark",
            ColorFilter::Light => "Light",
        }
    }

    /// Required color prefix, or `None` for [`ColorFilter::All`].
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            ColorFilter::All => None,
            other => Some(other.token()),
        }
    }
}

/// Case-insensitive substring match. An empty term matches every name.
pub fn matches_name(name: &str, search_term: &str) -> bool {
    search_term.is_empty() || name.to_lowercase().contains(&search_term.to_lowercase())
}

/// Case-insensitive prefix match on the first alternate of `color`.
pub fn matches_color(record: &CharacterRecord, color_filter: ColorFilter) -> bool {
    match color_filter.prefix() {
        None => true,
        Some(prefix) => first_alternate(&record.color)
            .to_lowercase()
            .starts_with(&prefix.to_lowercase()),
    }
}

/// Both predicates must hold.
pub fn matches(
    record: &CharacterRecord,
    name: &str,
    search_term: &str,
    color_filter: ColorFilter,
) -> bool {
    matches_name(name, search_term) && matches_color(record, color_filter)
}

/// Catalog positions of every matching entry, in catalog order.
pub fn filtered_indices(
    catalog: &CharacterCatalog,
    search_term: &str,
    color_filter: ColorFilter,
) -> Vec<usize> {
    catalog
        .iter()
        .enumerate()
        .filter(|(_, (name, record))| matches(record, name, search_term, color_filter))
        .map(|(index, _)| index)
        .collect()
}
