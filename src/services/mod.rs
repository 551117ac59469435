//! Storefront services: the read/write accessor functions over [`crate::state::AppState`].

pub mod cart;
pub mod favorites;
pub mod order;
