//! Field Normalizer.
//!
//! Raw catalog fields may carry several `|`-separated alternates; only the
//! first is ever displayed. The `stars` field additionally stores its glyphs
//! as decimal numeric character references (`&#9733;`), which the table view
//! decodes.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Separator between alternate values inside one field.
pub const ALTERNATE_SEPARATOR: char = '|';

/// `&#<decimal digits>;`. ASCII digits only.
static NUMERIC_ENTITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&#([0-9]+);").expect("Failed to compile numeric entity regex")
});

/// The display value of a field: everything before the first `|`.
pub fn first_alternate(raw: &str) -> &str {
    raw.split_once(ALTERNATE_SEPARATOR)
        .map_or(raw, |(first, _)| first)
}

/// Replace every `&#<digits>;` with the code point it names.
///
/// Anything that is not a well-formed decimal reference to a Unicode scalar
/// value is passed through untouched, including hex references (`&#x9;`).
pub fn decode_numeric_entities(raw: &str) -> Cow<'_, str> {
    if !raw.contains("&#") {
        return Cow::Borrowed(raw);
    }

    NUMERIC_ENTITY_PATTERN.replace_all(raw, |caps: &Captures| {
        caps[1]
            .parse::<u32>()
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    })
}

/// First alternate, then entity-decoded. Used for `stars` in the table view.
pub fn decoded_first_alternate(raw: &str) -> String {
    decode_numeric_entities(first_alternate(raw)).into_owned()
}
