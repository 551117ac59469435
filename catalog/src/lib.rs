//! Furniture catalog: the immutable list of purchasable, placeable items.
//!
//! The catalog is a read-only collaborator shared by the storefront (pricing
//! carts and orders) and the room designer (placing furniture). Entries are
//! handed out as `Arc<CatalogEntry>` so every consumer shares one allocation;
//! placed items and cart lines reference entries, they never copy them.
//!
//! A built-in data set ships embedded in the crate. Hosts with their own
//! inventory can construct a catalog from JSON or from entries directly;
//! both paths run the same validation.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Unique identifier for a catalog entry.
pub type ProductId = u32;

/// Built-in catalog data, embedded at compile time.
const BUILTIN_JSON: &str = include_str!("data/catalog.json");

/// Error returned when constructing a [`Catalog`].
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The raw JSON could not be deserialized into catalog entries.
    #[error("failed to parse catalog data: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two entries share the same product id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
    /// An entry declares a default scale that is zero, negative, or not finite.
    #[error("product {id} has invalid default scale {scale}")]
    InvalidScale {
        /// Offending entry id.
        id: ProductId,
        /// The rejected scale value.
        scale: f32,
    },
}

/// Immutable description of one purchasable, placeable furniture item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Stable product id.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Browsing category (e.g. `"living-room"`).
    pub category: String,
    /// Unit price in the store currency.
    pub price: f64,
    /// Path to the 3D model asset the renderer loads for this item.
    pub model: String,
    /// Uniform scale applied when the item is first placed in a room.
    /// `None` means the model is used at its authored size (scale 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_scale: Option<f32>,
    /// Whether the item can currently be added to a cart.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

/// The validated, read-only catalog.
pub struct Catalog {
    entries: Vec<Arc<CatalogEntry>>,
}

impl Catalog {
    /// Load the built-in catalog data set.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the embedded data fails validation;
    /// this indicates a packaging defect, not a runtime condition.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_JSON)
    }

    /// Parse a catalog from a JSON array of entries.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] on malformed JSON, otherwise any
    /// validation error from [`Catalog::from_entries`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Build a catalog from entries, validating ids and default scales.
    ///
    /// Entry order is preserved; it is the order storefront listings use.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two entries share an id, or
    /// [`CatalogError::InvalidScale`] if a default scale is not a positive
    /// finite number.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(CatalogError::DuplicateId(entry.id));
            }
            if let Some(scale) = entry.default_scale {
                if !(scale.is_finite() && scale > 0.0) {
                    return Err(CatalogError::InvalidScale { id: entry.id, scale });
                }
            }
        }
        Ok(Self { entries: entries.into_iter().map(Arc::new).collect() })
    }

    /// Look up an entry by product id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Arc<CatalogEntry>> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// All entries in listing order.
    #[must_use]
    pub fn entries(&self) -> &[Arc<CatalogEntry>] {
        &self.entries
    }

    /// Entries in the given category, in listing order.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Arc<CatalogEntry>> {
        self.entries.iter().filter(move |entry| entry.category == category)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
