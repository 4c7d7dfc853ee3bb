//! Table view model.
//!
//! Rows are built from the filtered set, then narrowed by the table's own
//! name filter and ordered by the Name column's sort state. An empty result
//! is represented by the [`NO_RESULTS`] placeholder row.

use std::cmp::Ordering;

use super::catalog::CharacterRecord;
use super::filter::matches_name;
use super::normalize::{decoded_first_alternate, first_alternate};

/// Placeholder shown across all columns when no row survives.
pub const NO_RESULTS: &str = "No results.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Class,
    Species,
    Color,
    Stars,
    Ai,
    BasicAttack,
    BasicHealth,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::Name,
        Column::Class,
        Column::Species,
        Column::Color,
        Column::Stars,
        Column::Ai,
        Column::BasicAttack,
        Column::BasicHealth,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Class => "Class",
            Column::Species => "Species",
            Column::Color => "Color",
            Column::Stars => "Stars",
            Column::Ai => "AI",
            Column::BasicAttack => "Basic Attack",
            Column::BasicHealth => "Basic Health",
        }
    }
}

/// Display-ready row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub name: String,
    pub class: String,
    pub species: String,
    pub color: String,
    /// First alternate, entity-decoded.
    pub stars: String,
    pub ai: String,
    pub basic_attack: String,
    pub basic_health: String,
}

impl TableRow {
    pub fn from_record(name: &str, record: &CharacterRecord) -> Self {
        Self {
            name: name.to_string(),
            class: first_alternate(&record.class).to_string(),
            species: first_alternate(&record.species).to_string(),
            color: first_alternate(&record.color).to_string(),
            stars: decoded_first_alternate(&record.stars),
            ai: first_alternate(&record.ai).to_string(),
            basic_attack: record.basic_attack.clone(),
            basic_health: record.basic_health.clone(),
        }
    }

    pub fn cell(&self, column: Column) -> &str {
        match column {
            Column::Name => &self.name,
            Column::Class => &self.class,
            Column::Species => &self.species,
            Column::Color => &self.color,
            Column::Stars => &self.stars,
            Column::Ai => &self.ai,
            Column::BasicAttack => &self.basic_attack,
            Column::BasicHealth => &self.basic_health,
        }
    }
}

pub fn build_rows<'a>(
    entries: impl IntoIterator<Item = (&'a str, &'a CharacterRecord)>,
) -> Vec<TableRow> {
    entries
        .into_iter()
        .map(|(name, record)| TableRow::from_record(name, record))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Sort indicator for the Name header.
pub fn sort_indicator(sort: Option<SortDirection>) -> &'static str {
    match sort {
        None => "↕",
        Some(SortDirection::Ascending) => "▲",
        Some(SortDirection::Descending) => "▼",
    }
}

/// Table-local sort and filter state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableControls {
    name_sort: Option<SortDirection>,
    name_filter: String,
}

impl TableControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// unsorted → ascending → descending → unsorted
    pub fn toggle_name_sort(&mut self) -> Option<SortDirection> {
        self.name_sort = match self.name_sort {
            None => Some(SortDirection::Ascending),
            Some(SortDirection::Ascending) => Some(SortDirection::Descending),
            Some(SortDirection::Descending) => None,
        };
        self.name_sort
    }

    pub fn name_sort(&self) -> Option<SortDirection> {
        self.name_sort
    }

    pub fn set_name_filter(&mut self, filter: impl Into<String>) {
        self.name_filter = filter.into();
    }

    pub fn name_filter(&self) -> &str {
        &self.name_filter
    }

    /// Narrow by the name filter, then order by the name sort (stable).
    pub fn apply(&self, rows: Vec<TableRow>) -> Vec<TableRow> {
        let mut rows: Vec<TableRow> = rows
            .into_iter()
            .filter(|row| matches_name(&row.name, &self.name_filter))
            .collect();

        if let Some(direction) = self.name_sort {
            rows.sort_by(|a, b| {
                let ordering: Ordering = a.name.cmp(&b.name);
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        rows
    }
}
