//! Card view model: one titled card per filtered record.
//!
//! Cards show first alternates only. `stars` is NOT entity-decoded here,
//! unlike the table view.

use super::catalog::CharacterRecord;
use super::normalize::first_alternate;

/// A labelled value on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterCard {
    /// Character name; doubles as the card's identity key.
    pub title: String,
    pub fields: Vec<CardField>,
}

impl CharacterCard {
    pub fn from_record(name: &str, record: &CharacterRecord) -> Self {
        let field = |label, value: &str| CardField {
            label,
            value: value.to_string(),
        };

        Self {
            title: name.to_string(),
            fields: vec![
                field("Class", first_alternate(&record.class)),
                field("Species", first_alternate(&record.species)),
                field("Color", first_alternate(&record.color)),
                field("Stars", first_alternate(&record.stars)),
                field("AI", first_alternate(&record.ai)),
                field("Basic Attack", &record.basic_attack),
                field("Basic Health", &record.basic_health),
            ],
        }
    }

    pub fn key(&self) -> &str {
        &self.title
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

/// Number of field lines on every card.
pub const CARD_FIELD_COUNT: usize = 7;

pub fn build_cards<'a>(
    entries: impl IntoIterator<Item = (&'a str, &'a CharacterRecord)>,
) -> Vec<CharacterCard> {
    entries
        .into_iter()
        .map(|(name, record)| CharacterCard::from_record(name, record))
        .collect()
}
