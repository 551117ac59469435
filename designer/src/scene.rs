//! Scene model: room dimensions, placed furniture, and the scene store.
//!
//! `RoomScene` is the sole unit of ownership for placed items; nothing else
//! holds references into it. The engine mutates it through the operations in
//! [`crate::engine`]; the renderer reads it through [`crate::frame`]. The
//! scene lives only as long as the designer view and is never persisted.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::sync::Arc;

use catalog::CatalogEntry;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_ITEM_SCALE, DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_LENGTH, DEFAULT_ROOM_WIDTH,
    DEFAULT_WALL_COLOR, WALL_PAD,
};
use crate::input::PointerPoint;

/// Room extents in meters. Positive values; the host UI owns its own
/// min/max ranges on top of that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomDimensions {
    /// Extent along the x axis.
    pub width: f32,
    /// Extent along the z axis.
    pub length: f32,
    /// Wall height along the y axis.
    pub height: f32,
}

impl Default for RoomDimensions {
    fn default() -> Self {
        Self { width: DEFAULT_ROOM_WIDTH, length: DEFAULT_ROOM_LENGTH, height: DEFAULT_ROOM_HEIGHT }
    }
}

impl RoomDimensions {
    #[must_use]
    pub fn new(width: f32, length: f32, height: f32) -> Self {
        Self { width, length, height }
    }

    /// Map a normalized pointer point to room-local floor coordinates by
    /// scaling each axis to its half-extent: ±1 lands on the walls.
    ///
    /// This is a linear scale, not a perspective unprojection — the mapped
    /// point approximates where the pointer visually points. The returned
    /// value is unclamped; callers clamp with [`Self::clamp_x`] / [`Self::clamp_z`].
    #[must_use]
    pub fn floor_point(&self, point: PointerPoint) -> Vec2 {
        Vec2::new(point.x * self.width / 2.0, point.y * self.length / 2.0)
    }

    /// Clamp an x coordinate to the padded room interior.
    ///
    /// Written as a `max(lo, min(hi, v))` pair so a degenerate room narrower
    /// than twice the pad still resolves (to the low bound) instead of
    /// panicking on an inverted range.
    #[must_use]
    pub fn clamp_x(&self, x: f32) -> f32 {
        (-self.width / 2.0 + WALL_PAD).max((self.width / 2.0 - WALL_PAD).min(x))
    }

    /// Clamp a z coordinate to the padded room interior.
    #[must_use]
    pub fn clamp_z(&self, z: f32) -> f32 {
        (-self.length / 2.0 + WALL_PAD).max((self.length / 2.0 - WALL_PAD).min(z))
    }
}

/// Per-instance overrides chosen before an item enters the room, carried from
/// the storefront when a product page opens the designer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customization {
    /// Uniform scale override. Non-positive or non-finite values are ignored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
    /// Material tint override as a CSS color string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// One furniture instance placed in the room.
#[derive(Debug, Clone)]
pub struct PlacedItem {
    /// The immutable catalog entry this instance was placed from. Shared,
    /// never copied.
    pub entry: Arc<CatalogEntry>,
    /// Room-local position in meters. `y` stays at floor level (0).
    pub position: Vec3,
    /// Rotation in radians. Only the yaw (y) component is ever mutated.
    pub rotation: Vec3,
    /// Uniform scale across all axes.
    pub scale: f32,
    /// Optional CSS color overriding the catalog material tint.
    pub color: Option<String>,
}

impl PlacedItem {
    /// Place an entry at the origin with its default transform.
    #[must_use]
    pub fn from_entry(entry: &Arc<CatalogEntry>) -> Self {
        Self {
            entry: Arc::clone(entry),
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: entry.default_scale.unwrap_or(DEFAULT_ITEM_SCALE),
            color: None,
        }
    }

    /// Place an entry at the origin, applying any customization overrides.
    #[must_use]
    pub fn customized(entry: &Arc<CatalogEntry>, customization: &Customization) -> Self {
        let mut item = Self::from_entry(entry);
        if let Some(scale) = customization.scale {
            if scale.is_finite() && scale > 0.0 {
                item.scale = scale;
            }
        }
        item.color.clone_from(&customization.color);
        item
    }

    /// The item's yaw (rotation about the vertical axis) in radians.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.rotation.y
    }
}

/// The designer scene: dimensions, wall tint, and placed items in insertion
/// order. Insertion order is render/selection order; it carries no other
/// meaning.
#[derive(Debug, Clone)]
pub struct RoomScene {
    /// Current room extents.
    pub dimensions: RoomDimensions,
    /// Wall tint as a CSS color string.
    pub wall_color: String,
    items: Vec<PlacedItem>,
}

impl Default for RoomScene {
    fn default() -> Self {
        Self::new(RoomDimensions::default())
    }
}

impl RoomScene {
    /// Create an empty scene with the given dimensions.
    #[must_use]
    pub fn new(dimensions: RoomDimensions) -> Self {
        Self { dimensions, wall_color: DEFAULT_WALL_COLOR.to_string(), items: Vec::new() }
    }

    /// Append an item, returning its index.
    pub fn push(&mut self, item: PlacedItem) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    /// Remove the item at `index`, returning it if the index was valid.
    /// Later items shift down by one.
    pub fn remove(&mut self, index: usize) -> Option<PlacedItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// The item at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PlacedItem> {
        self.items.get(index)
    }

    /// Mutable access to the item at `index`, if any.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut PlacedItem> {
        self.items.get_mut(index)
    }

    /// All items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    /// Number of placed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
