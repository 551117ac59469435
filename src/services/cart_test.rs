#![allow(clippy::float_cmp)]

use designer::scene::Customization;

use super::*;
use crate::state::test_helpers::test_state;

fn custom_color(color: &str) -> Customization {
    Customization { scale: None, color: Some(color.to_string()) }
}

// =============================================================
// add_to_cart
// =============================================================

#[test]
fn add_creates_a_line() {
    let mut state = test_state();
    add_to_cart(&mut state, 1, 2, Customization::default()).unwrap();
    assert_eq!(state.cart.lines.len(), 1);
    let line = &state.cart.lines[0];
    assert_eq!(line.product, 1);
    assert_eq!(line.quantity, 2);
}

#[test]
fn add_same_product_merges_quantity() {
    let mut state = test_state();
    add_to_cart(&mut state, 1, 1, Customization::default()).unwrap();
    add_to_cart(&mut state, 1, 2, Customization::default()).unwrap();
    assert_eq!(state.cart.lines.len(), 1);
    assert_eq!(state.cart.lines[0].quantity, 3);
}

#[test]
fn add_same_product_keeps_latest_customization() {
    let mut state = test_state();
    add_to_cart(&mut state, 1, 1, custom_color("#000000")).unwrap();
    add_to_cart(&mut state, 1, 1, custom_color("#8B4513")).unwrap();
    assert_eq!(state.cart.lines[0].customization, custom_color("#8B4513"));
}

#[test]
fn add_unknown_product_is_rejected() {
    let mut state = test_state();
    let result = add_to_cart(&mut state, 42, 1, Customization::default());
    assert!(matches!(result, Err(CartError::UnknownProduct(42))));
    assert!(state.cart.lines.is_empty());
}

#[test]
fn add_out_of_stock_product_is_rejected() {
    let mut state = test_state();
    let result = add_to_cart(&mut state, 3, 1, Customization::default());
    assert!(matches!(result, Err(CartError::OutOfStock(3))));
    assert!(state.cart.lines.is_empty());
}

#[test]
fn add_zero_quantity_is_a_noop() {
    let mut state = test_state();
    add_to_cart(&mut state, 1, 0, Customization::default()).unwrap();
    assert!(state.cart.lines.is_empty());
}

// =============================================================
// remove_from_cart / set_quantity
// =============================================================

#[test]
fn remove_deletes_the_line() {
    let mut state = test_state();
    add_to_cart(&mut state, 1, 1, Customization::default()).unwrap();
    add_to_cart(&mut state, 2, 1, Customization::default()).unwrap();
    remove_from_cart(&mut state, 1);
    assert_eq!(state.cart.lines.len(), 1);
    assert_eq!(state.cart.lines[0].product, 2);
}

#[test]
fn remove_absent_product_is_a_noop() {
    let mut state = test_state();
    add_to_cart(&mut state, 1, 1, Customization::default()).unwrap();
    remove_from_cart(&mut state, 2);
    assert_eq!(state.cart.lines.len(), 1);
}

#[test]
fn set_quantity_updates_the_line() {
    let mut state = test_state();
    add_to_cart(&mut state, 1, 1, Customization::default()).unwrap();
    set_quantity(&mut state, 1, 5);
    assert_eq!(state.cart.lines[0].quantity, 5);
}

#[test]
fn set_quantity_zero_removes_the_line() {
    let mut state = test_state();
    add_to_cart(&mut state, 1, 3, Customization::default()).unwrap();
    set_quantity(&mut state, 1, 0);
    assert!(state.cart.lines.is_empty());
}

#[test]
fn set_quantity_on_absent_product_is_a_noop() {
    let mut state = test_state();
    set_quantity(&mut state, 1, 5);
    assert!(state.cart.lines.is_empty());
}

// =============================================================
// Totals
// =============================================================

#[test]
fn count_sums_units_across_lines() {
    let mut state = test_state();
    assert_eq!(cart_count(&state), 0);
    add_to_cart(&mut state, 1, 2, Customization::default()).unwrap();
    add_to_cart(&mut state, 2, 3, Customization::default()).unwrap();
    assert_eq!(cart_count(&state), 5);
}

#[test]
fn subtotal_prices_lines_at_catalog_prices() {
    let mut state = test_state();
    add_to_cart(&mut state, 1, 2, Customization::default()).unwrap();
    add_to_cart(&mut state, 2, 1, Customization::default()).unwrap();
    // 2 × 100.0 + 1 × 250.0
    assert_eq!(cart_subtotal(&state), 450.0);
}

#[test]
fn subtotal_of_empty_cart_is_zero() {
    let state = test_state();
    assert_eq!(cart_subtotal(&state), 0.0);
}

// =============================================================
// Serde
// =============================================================

#[test]
fn cart_line_serde_roundtrip() {
    let line = CartLine {
        product: 1,
        quantity: 2,
        customization: Customization { scale: Some(1.2), color: Some("#808080".to_string()) },
    };
    let json = serde_json::to_string(&line).unwrap();
    let back: CartLine = serde_json::from_str(&json).unwrap();
    assert_eq!(back, line);
}

#[test]
fn cart_line_customization_defaults_when_absent() {
    let back: CartLine = serde_json::from_str(r#"{"product": 1, "quantity": 2}"#).unwrap();
    assert_eq!(back.customization, Customization::default());
}
