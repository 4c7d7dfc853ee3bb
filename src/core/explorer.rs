//! View-Mode Controller.
//!
//! Holds the explorer's input state (search text, color filter, card/table
//! toggle) and the filtered set derived from it. The filtered set is cached
//! against the `(search_term, color_filter)` pair that produced it and is
//! only recomputed when one of them actually changes.

use std::sync::Arc;

use tracing::{debug, info};

use super::catalog::{CharacterCatalog, CharacterRecord};
use super::filter::{filtered_indices, ColorFilter};

pub struct ExplorerState {
    catalog: Arc<CharacterCatalog>,
    search_term: String,
    color_filter: ColorFilter,
    is_table_view: bool,
    /// Catalog positions passing the current predicate, in catalog order.
    filtered: Vec<usize>,
    /// Bumped every time `filtered` is recomputed.
    generation: u64,
}

impl ExplorerState {
    pub fn new(catalog: Arc<CharacterCatalog>) -> Self {
        let mut state = Self {
            catalog,
            search_term: String::new(),
            color_filter: ColorFilter::All,
            is_table_view: false,
            filtered: Vec::new(),
            generation: 0,
        };
        state.recompute();
        state
    }

    pub fn set_search_term(&mut self, search_term: impl Into<String>) {
        let search_term = search_term.into();
        if search_term != self.search_term {
            self.search_term = search_term;
            self.recompute();
        }
    }

    pub fn set_color_filter(&mut self, color_filter: ColorFilter) {
        if color_filter != self.color_filter {
            self.color_filter = color_filter;
            self.recompute();
        }
    }

    /// Switch renderers. The filtered set is untouched.
    pub fn set_is_table_view(&mut self, is_table_view: bool) {
        if is_table_view != self.is_table_view {
            self.is_table_view = is_table_view;
            info!(
                view = if is_table_view { "table" } else { "cards" },
                "view mode changed"
            );
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn color_filter(&self) -> ColorFilter {
        self.color_filter
    }

    pub fn is_table_view(&self) -> bool {
        self.is_table_view
    }

    pub fn catalog(&self) -> &CharacterCatalog {
        &self.catalog
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// The filtered `(name, record)` pairs in catalog order.
    pub fn filtered(&self) -> impl Iterator<Item = (&str, &CharacterRecord)> + '_ {
        self.filtered
            .iter()
            .filter_map(|&index| self.catalog.get_index(index))
    }

    fn recompute(&mut self) {
        self.filtered = filtered_indices(&self.catalog, &self.search_term, self.color_filter);
        self.generation += 1;
        debug!(
            search = %self.search_term,
            color = self.color_filter.token(),
            matches = self.filtered.len(),
            total = self.catalog.len(),
            "filtered set recomputed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn explorer() -> ExplorerState {
        let catalog = CharacterCatalog::bundled().unwrap();
        ExplorerState::new(Arc::new(catalog))
    }

    fn names(state: &ExplorerState) -> Vec<String> {
        state.filtered().map(|(name, _)| name.to_string()).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = explorer();
        assert_eq!(state.search_term(), "");
        assert_eq!(state.color_filter(), ColorFilter::All);
        assert!(!state.is_table_view());
        assert_eq!(state.filtered_len(), state.catalog().len());
    }

    #[test]
    fn test_search_narrows() {
        let mut state = explorer();
        state.set_search_term("ADA");
        assert_eq!(names(&state), vec!["Ada"]);
        state.set_search_term("");
        assert_eq!(state.filtered_len(), state.catalog().len());
    }

    #[test]
    fn test_color_filter_narrows() {
        let mut state = explorer();
        state.set_color_filter(ColorFilter::Dark);
        assert_eq!(names(&state), vec!["Bram Ironhand", "Dusk Warden"]);
    }

    #[test]
    fn test_unchanged_input_skips_recompute() {
        let mut state = explorer();
        let before = state.generation();
        state.set_search_term("");
        state.set_color_filter(ColorFilter::All);
        assert_eq!(state.generation(), before);

        state.set_color_filter(ColorFilter::Light);
        assert_eq!(state.generation(), before + 1);
    }

    #[test]
    fn test_toggle_view_keeps_filtered_set() {
        let mut state = explorer();
        state.set_color_filter(ColorFilter::Green);
        let before = names(&state);
        let generation = state.generation();

        state.set_is_table_view(true);
        assert!(state.is_table_view());
        assert_eq!(names(&state), before);
        assert_eq!(state.generation(), generation);

        state.set_is_table_view(false);
        assert_eq!(names(&state), before);
    }

    #[test]
    fn test_empty_catalog() {
        let state = ExplorerState::new(Arc::new(CharacterCatalog::default()));
        assert_eq!(state.filtered_len(), 0);
        assert_eq!(state.filtered().count(), 0);
    }
}
