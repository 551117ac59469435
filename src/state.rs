//! Shared session state.
//!
//! DESIGN
//! ======
//! `AppState` is created once when a storefront session opens and passed by
//! mutable reference to the service functions in [`crate::services`] — the
//! explicit replacement for an ambient, process-wide context. The session is
//! single-threaded: one writer, no locks, and everything here is discarded
//! when the session ends. Nothing is persisted.

use std::collections::HashSet;

use catalog::{Catalog, ProductId};
use designer::scene::Customization;
use serde::{Deserialize, Serialize};

use crate::services::order::Order;

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

// =============================================================================
// CART
// =============================================================================

/// One cart row: a product, how many, and the configuration chosen on the
/// product page (carried along so "view in room" can seed the designer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: ProductId,
    pub quantity: u32,
    #[serde(default)]
    pub customization: Customization,
}

/// The session cart. Lines are keyed by product id; the services in
/// [`crate::services::cart`] keep that invariant.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

// =============================================================================
// FAVORITES
// =============================================================================

/// Products the user has marked as favorites.
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    pub ids: HashSet<ProductId>,
}

// =============================================================================
// ORDERS
// =============================================================================

/// Orders placed during this session, in placement order.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    pub orders: Vec<Order>,
}

// =============================================================================
// APP STATE
// =============================================================================

/// Everything a storefront session owns: the catalog handle plus cart,
/// favorites, and order book.
pub struct AppState {
    pub catalog: Catalog,
    pub cart: Cart,
    pub favorites: Favorites,
    pub orders: OrderBook,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::default(),
            favorites: Favorites::default(),
            orders: OrderBook::default(),
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
