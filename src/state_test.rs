use super::test_helpers::{test_catalog, test_state};

#[test]
fn new_session_starts_empty() {
    let state = test_state();
    assert!(state.cart.lines.is_empty());
    assert!(state.favorites.ids.is_empty());
    assert!(state.orders.orders.is_empty());
}

#[test]
fn session_holds_the_catalog() {
    let state = test_state();
    assert_eq!(state.catalog.len(), 3);
    assert!(state.catalog.get(1).is_some());
}

#[test]
fn test_catalog_includes_a_sold_out_product() {
    let catalog = test_catalog();
    assert!(!catalog.get(3).unwrap().in_stock);
}
