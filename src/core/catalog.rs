//! Character Record Store.
//!
//! The catalog is a name → record mapping read once at startup, either from
//! the JSON document compiled into the binary or from a configured path.
//! It is never mutated afterwards; views derive everything from it on demand.
//!
//! # Usage
//!
//! ```rust,ignore
//! use character_explorer::core::catalog::CharacterCatalog;
//!
//! let catalog = CharacterCatalog::bundled()?;
//! for (name, record) in catalog.iter() {
//!     println!("{name}: {}", record.class);
//! }
//! ```

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::DataConfig;

// ============================================================================
// Compile-time bundled catalog
// ============================================================================

const BUNDLED_CATALOG: &str = include_str!("../../assets/characters.json");

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur while loading the catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

// ============================================================================
// Record types
// ============================================================================

/// One entry in the catalog.
///
/// Scalar fields may hold several `|`-separated alternates; see
/// [`crate::core::normalize::first_alternate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub class: String,
    pub species: String,
    pub color: String,
    pub stars: String,
    pub ai: String,
    pub basic_attack: String,
    pub basic_health: String,
    pub asc_attack: String,
    pub asc_health: String,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub gear: Vec<String>,
    /// Asset references. Part of the record shape, not shown by any view.
    #[serde(default)]
    pub images: Vec<String>,
}

/// Top-level shape of the catalog document: `{ "characters": { name: record } }`.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    characters: IndexMap<String, CharacterRecord>,
}

// ============================================================================
// CharacterCatalog
// ============================================================================

/// Immutable name → record mapping in document order.
#[derive(Debug, Clone, Default)]
pub struct CharacterCatalog {
    characters: IndexMap<String, CharacterRecord>,
}

impl CharacterCatalog {
    /// Parse the catalog compiled into the binary.
    pub fn bundled() -> CatalogResult<Self> {
        let catalog = Self::from_json_str(BUNDLED_CATALOG)?;
        info!(count = catalog.len(), source = "bundled", "catalog loaded");
        Ok(catalog)
    }

    /// Read and parse a catalog document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&contents)?;
        info!(count = catalog.len(), source = %path.display(), "catalog loaded");
        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        debug!(count = document.characters.len(), "parsed catalog document");
        Ok(Self {
            characters: document.characters,
        })
    }

    /// Load from the configured override path, or the bundled document.
    pub fn load(config: &DataConfig) -> CatalogResult<Self> {
        match config.catalog_path {
            Some(ref path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&CharacterRecord> {
        self.characters.get(name)
    }

    /// Entry at a position in document order.
    pub fn get_index(&self, index: usize) -> Option<(&str, &CharacterRecord)> {
        self.characters
            .get_index(index)
            .map(|(name, record)| (name.as_str(), record))
    }

    /// Iterate entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CharacterRecord)> {
        self.characters
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }
}

impl FromIterator<(String, CharacterRecord)> for CharacterCatalog {
    fn from_iter<I: IntoIterator<Item = (String, CharacterRecord)>>(iter: I) -> Self {
        Self {
            characters: iter.into_iter().collect(),
        }
    }
}
