//! Property-based tests for search and color filtering
//!
//! Tests invariants:
//! - `matches` is exactly `matches_name && matches_color`
//! - The empty search term with `All` keeps every entry
//! - Filtered indices are strictly increasing (catalog order)
//! - Recomputing for the same inputs yields the same set
//! - The name sort permutes the filtered rows without dropping any

use proptest::prelude::*;

use crate::core::catalog::{CharacterCatalog, CharacterRecord};
use crate::core::filter::{filtered_indices, matches, matches_color, matches_name, ColorFilter};
use crate::core::table::{build_rows, TableControls};

// ============================================================================
// Strategies
// ============================================================================

fn color_filter() -> impl Strategy<Value = ColorFilter> {
    prop::sample::select(ColorFilter::ALL.to_vec())
}

fn color_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Green".to_string()),
        Just("green|Dark".to_string()),
        Just("Dark Violet|Light".to_string()),
        Just("LIGHT".to_string()),
        Just("Blue|Green".to_string()),
        "[A-Za-z |]{0,12}",
    ]
}

fn record(color: String) -> CharacterRecord {
    CharacterRecord {
        class: "Tank".to_string(),
        species: "Human".to_string(),
        color,
        stars: "&#9733;".to_string(),
        ai: "Balanced".to_string(),
        basic_attack: "10".to_string(),
        basic_health: "100".to_string(),
        asc_attack: "15".to_string(),
        asc_health: "150".to_string(),
        traits: Vec::new(),
        gear: Vec::new(),
        images: Vec::new(),
    }
}

fn catalog() -> impl Strategy<Value = CharacterCatalog> {
    prop::collection::vec(("[A-Za-z ]{1,12}", color_value()), 0..12).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(name, color)| (name, record(color)))
            .collect()
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_predicate_is_conjunction(
        name in "[A-Za-z ]{0,12}",
        term in "[A-Za-z]{0,4}",
        color in color_value(),
        filter in color_filter(),
    ) {
        let record = record(color);
        prop_assert_eq!(
            matches(&record, &name, &term, filter),
            matches_name(&name, &term) && matches_color(&record, filter)
        );
    }

    #[test]
    fn prop_name_match_ignores_case(name in "[A-Za-z ]{1,12}", start in 0usize..12, len in 0usize..6) {
        let start = start.min(name.len());
        let end = (start + len).min(name.len());
        let term = name[start..end].to_uppercase();
        prop_assert!(matches_name(&name, &term));
    }

    #[test]
    fn prop_unfiltered_keeps_everything(catalog in catalog()) {
        let indices = filtered_indices(&catalog, "", ColorFilter::All);
        prop_assert_eq!(indices, (0..catalog.len()).collect::<Vec<_>>());
    }

    #[test]
    fn prop_filtered_indices_in_catalog_order(
        catalog in catalog(),
        term in "[a-z]{0,2}",
        filter in color_filter(),
    ) {
        let indices = filtered_indices(&catalog, &term, filter);
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(&indices, &filtered_indices(&catalog, &term, filter));
    }

    #[test]
    fn prop_sort_is_permutation(catalog in catalog(), toggles in 0usize..3) {
        let mut controls = TableControls::new();
        for _ in 0..toggles {
            controls.toggle_name_sort();
        }
        let rows = build_rows(catalog.iter());
        let mut before: Vec<String> = rows.iter().map(|r| r.name.clone()).collect();
        let mut after: Vec<String> = controls.apply(rows).into_iter().map(|r| r.name).collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }
}
