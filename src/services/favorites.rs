//! Favorites service — a set of starred products.

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;

use std::sync::Arc;

use catalog::{CatalogEntry, ProductId};

use crate::state::AppState;

/// Flip a product's favorite mark. Returns the new state (`true` when the
/// product is now a favorite). Ids not in the catalog are ignored.
pub fn toggle_favorite(state: &mut AppState, product: ProductId) -> bool {
    if state.catalog.get(product).is_none() {
        return false;
    }
    if state.favorites.ids.remove(&product) {
        false
    } else {
        state.favorites.ids.insert(product);
        true
    }
}

/// Whether a product is currently marked as a favorite.
#[must_use]
pub fn is_favorite(state: &AppState, product: ProductId) -> bool {
    state.favorites.ids.contains(&product)
}

/// Favorite entries in catalog listing order.
#[must_use]
pub fn favorite_entries(state: &AppState) -> Vec<&Arc<CatalogEntry>> {
    state
        .catalog
        .entries()
        .iter()
        .filter(|entry| state.favorites.ids.contains(&entry.id))
        .collect()
}
