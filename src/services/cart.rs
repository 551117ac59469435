//! Cart service — line management and pricing.
//!
//! Lines are keyed by product id. Adding a product already in the cart bumps
//! its quantity (the latest customization wins); setting a quantity to zero
//! removes the line, mirroring how the storefront's quantity stepper behaves.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use catalog::ProductId;
use designer::scene::Customization;

use crate::state::{AppState, CartLine};

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),
    #[error("product {0} is out of stock")]
    OutOfStock(ProductId),
}

/// Add `quantity` of a product to the cart. A quantity of zero is a no-op.
///
/// # Errors
///
/// Returns [`CartError::UnknownProduct`] if the id is not in the catalog, or
/// [`CartError::OutOfStock`] if the entry cannot currently be purchased.
pub fn add_to_cart(
    state: &mut AppState,
    product: ProductId,
    quantity: u32,
    customization: Customization,
) -> Result<(), CartError> {
    let entry = state.catalog.get(product).ok_or(CartError::UnknownProduct(product))?;
    if !entry.in_stock {
        return Err(CartError::OutOfStock(product));
    }
    if quantity == 0 {
        return Ok(());
    }
    match state.cart.lines.iter_mut().find(|line| line.product == product) {
        Some(line) => {
            line.quantity += quantity;
            line.customization = customization;
        }
        None => state.cart.lines.push(CartLine { product, quantity, customization }),
    }
    tracing::debug!(product, quantity, "added to cart");
    Ok(())
}

/// Remove a product's line from the cart. Removing an absent product is a
/// no-op.
pub fn remove_from_cart(state: &mut AppState, product: ProductId) {
    state.cart.lines.retain(|line| line.product != product);
}

/// Set the quantity on a product's line. Zero removes the line; an absent
/// product is a no-op.
pub fn set_quantity(state: &mut AppState, product: ProductId, quantity: u32) {
    if quantity == 0 {
        remove_from_cart(state, product);
        return;
    }
    if let Some(line) = state.cart.lines.iter_mut().find(|line| line.product == product) {
        line.quantity = quantity;
    }
}

/// Total number of units in the cart.
#[must_use]
pub fn cart_count(state: &AppState) -> u32 {
    state.cart.lines.iter().map(|line| line.quantity).sum()
}

/// Cart subtotal at current catalog prices.
#[must_use]
pub fn cart_subtotal(state: &AppState) -> f64 {
    state
        .cart
        .lines
        .iter()
        .filter_map(|line| {
            state
                .catalog
                .get(line.product)
                .map(|entry| entry.price * f64::from(line.quantity))
        })
        .sum()
}
