#![allow(clippy::float_cmp)]

use super::*;

fn entry(id: ProductId, category: &str, price: f64) -> CatalogEntry {
    CatalogEntry {
        id,
        name: format!("Item {id}"),
        category: category.to_string(),
        price,
        model: format!("/models/item_{id}.glb"),
        default_scale: None,
        in_stock: true,
    }
}

// =============================================================
// Built-in data set
// =============================================================

#[test]
fn builtin_loads_and_is_nonempty() {
    let catalog = Catalog::builtin().unwrap();
    assert!(!catalog.is_empty());
    assert_eq!(catalog.len(), catalog.entries().len());
}

#[test]
fn builtin_ids_are_unique() {
    let catalog = Catalog::builtin().unwrap();
    let ids: HashSet<ProductId> = catalog.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids.len(), catalog.len());
}

#[test]
fn builtin_prices_are_positive() {
    let catalog = Catalog::builtin().unwrap();
    assert!(catalog.entries().iter().all(|e| e.price > 0.0));
}

#[test]
fn builtin_models_have_glb_paths() {
    let catalog = Catalog::builtin().unwrap();
    for entry in catalog.entries() {
        assert!(entry.model.starts_with("/models/"), "bad model path: {}", entry.model);
        assert!(entry.model.ends_with(".glb"), "bad model path: {}", entry.model);
    }
}

#[test]
fn builtin_has_storage_bed_with_default_scale() {
    let catalog = Catalog::builtin().unwrap();
    let bed = catalog.get(22).unwrap();
    assert_eq!(bed.name, "Solid Wood Storage Bed");
    assert_eq!(bed.default_scale, Some(1.2));
    assert!(bed.in_stock);
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn get_unknown_id_returns_none() {
    let catalog = Catalog::builtin().unwrap();
    assert!(catalog.get(9999).is_none());
}

#[test]
fn get_returns_shared_entry() {
    let catalog = Catalog::from_entries(vec![entry(1, "bedroom", 10.0)]).unwrap();
    let a = Arc::clone(catalog.get(1).unwrap());
    let b = Arc::clone(catalog.get(1).unwrap());
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn in_category_filters_and_preserves_order() {
    let catalog = Catalog::from_entries(vec![
        entry(1, "bedroom", 10.0),
        entry(2, "living-room", 20.0),
        entry(3, "bedroom", 30.0),
    ])
    .unwrap();
    let beds: Vec<ProductId> = catalog.in_category("bedroom").map(|e| e.id).collect();
    assert_eq!(beds, vec![1, 3]);
}

#[test]
fn in_category_unknown_is_empty() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.in_category("garage").count(), 0);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn from_entries_rejects_duplicate_ids() {
    let result = Catalog::from_entries(vec![entry(7, "bedroom", 10.0), entry(7, "bedroom", 20.0)]);
    assert!(matches!(result, Err(CatalogError::DuplicateId(7))));
}

#[test]
fn from_entries_rejects_zero_scale() {
    let mut bad = entry(1, "bedroom", 10.0);
    bad.default_scale = Some(0.0);
    let result = Catalog::from_entries(vec![bad]);
    assert!(matches!(result, Err(CatalogError::InvalidScale { id: 1, .. })));
}

#[test]
fn from_entries_rejects_negative_scale() {
    let mut bad = entry(1, "bedroom", 10.0);
    bad.default_scale = Some(-2.0);
    assert!(Catalog::from_entries(vec![bad]).is_err());
}

#[test]
fn from_entries_rejects_nan_scale() {
    let mut bad = entry(1, "bedroom", 10.0);
    bad.default_scale = Some(f32::NAN);
    assert!(Catalog::from_entries(vec![bad]).is_err());
}

#[test]
fn from_entries_accepts_empty() {
    let catalog = Catalog::from_entries(vec![]).unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(matches!(Catalog::from_json("not json"), Err(CatalogError::Parse(_))));
}

// =============================================================
// Entry serde
// =============================================================

#[test]
fn entry_serde_roundtrip() {
    let original = CatalogEntry { default_scale: Some(0.8), ..entry(42, "dining-room", 599.99) };
    let json = serde_json::to_string(&original).unwrap();
    let back: CatalogEntry = serde_json::from_str(&json).unwrap();
    assert_eq!(back, original);
}

#[test]
fn entry_default_scale_omitted_when_none() {
    let json = serde_json::to_string(&entry(1, "bedroom", 10.0)).unwrap();
    assert!(!json.contains("default_scale"));
}

#[test]
fn entry_in_stock_defaults_to_true() {
    let json = r#"{"id": 1, "name": "Stool", "category": "living-room", "price": 49.99, "model": "/models/stool.glb"}"#;
    let parsed: CatalogEntry = serde_json::from_str(json).unwrap();
    assert!(parsed.in_stock);
    assert_eq!(parsed.default_scale, None);
}

#[test]
fn entry_explicit_out_of_stock_parses() {
    let json = r#"{"id": 1, "name": "Stool", "category": "living-room", "price": 49.99, "model": "/models/stool.glb", "in_stock": false}"#;
    let parsed: CatalogEntry = serde_json::from_str(json).unwrap();
    assert!(!parsed.in_stock);
}
