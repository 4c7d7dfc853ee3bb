//! Property-based tests for field normalization
//!
//! Tests invariants:
//! - `first_alternate(s) == s` when `s` has no `|`
//! - `first_alternate(s)` is a prefix of `s` and holds no `|`
//! - `decode_numeric_entities(s) == s` when `s` has no `&#`
//! - `&#N;` for a valid scalar N decodes to that one char

use proptest::prelude::*;

use crate::core::normalize::{decode_numeric_entities, decoded_first_alternate, first_alternate};

// ============================================================================
// Strategies
// ============================================================================

/// Text that never contains the alternate separator.
fn plain_field() -> impl Strategy<Value = String> {
    "[^|]{0,40}"
}

/// Text that never contains an entity opener.
fn entity_free() -> impl Strategy<Value = String> {
    any::<String>().prop_filter("must not contain &#", |s| !s.contains("&#"))
}

/// A code point `char::from_u32` accepts.
fn scalar_value() -> impl Strategy<Value = char> {
    any::<char>()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_first_alternate_identity_without_separator(s in plain_field()) {
        prop_assert_eq!(first_alternate(&s), s.as_str());
    }

    #[test]
    fn prop_first_alternate_is_separator_free_prefix(s in any::<String>()) {
        let first = first_alternate(&s);
        prop_assert!(s.starts_with(first));
        prop_assert!(!first.contains('|'));
    }

    #[test]
    fn prop_first_alternate_ignores_tail(head in plain_field(), tail in any::<String>()) {
        let joined = format!("{head}|{tail}");
        prop_assert_eq!(first_alternate(&joined), head.as_str());
    }

    #[test]
    fn prop_decode_identity_without_entities(s in entity_free()) {
        let decoded = decode_numeric_entities(&s);
        prop_assert_eq!(decoded.as_ref(), s.as_str());
    }

    #[test]
    fn prop_decode_single_entity(c in scalar_value(), prefix in "[a-z ]{0,8}", suffix in "[a-z ]{0,8}") {
        let raw = format!("{prefix}&#{};{suffix}", c as u32);
        let expected = format!("{prefix}{c}{suffix}");
        let decoded = decode_numeric_entities(&raw);
        prop_assert_eq!(decoded.as_ref(), expected.as_str());
    }

    #[test]
    fn prop_decoded_first_alternate_drops_tail(c in scalar_value(), tail in any::<String>()) {
        let raw = format!("&#{};|{tail}", c as u32);
        prop_assert_eq!(decoded_first_alternate(&raw), c.to_string());
    }
}
