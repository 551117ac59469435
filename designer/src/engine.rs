//! The placement engine: scene state plus the transition operations that
//! mutate it.
//!
//! DESIGN
//! ======
//! The engine has exactly two pieces of transient state on top of the scene:
//! the selection (`Option<usize>` into the scene's item list) and the drag
//! gesture ([`DragState`]). All operations are discrete, synchronous
//! transitions driven by host input callbacks; none of them can fail. Invalid
//! indices clear the selection, and operations that need a selection are
//! no-ops without one. The renderer never mutates — it reads the committed
//! state through [`Engine::frame`] on each redraw.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::sync::Arc;

use catalog::CatalogEntry;

use crate::consts::{NUDGE_STEP, YAW_STEP};
use crate::frame::{Lighting, SceneFrame};
use crate::input::{DragState, Key, NudgeDirection, PointerPoint, SpinDirection};
use crate::scene::{Customization, PlacedItem, RoomDimensions, RoomScene};

/// State container for one designer session.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    scene: RoomScene,
    selected: Option<usize>,
    drag: DragState,
    lighting: Lighting,
}

impl Engine {
    /// Start a session with an empty default room.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session around an existing scene.
    #[must_use]
    pub fn with_scene(scene: RoomScene) -> Self {
        Self { scene, ..Self::default() }
    }

    /// Start a session seeded with one customized item, as when the designer
    /// opens from a product page. Nothing is selected.
    #[must_use]
    pub fn seeded(entry: &Arc<CatalogEntry>, customization: &Customization) -> Self {
        let mut engine = Self::new();
        engine.add_item_customized(entry, customization);
        engine
    }

    // --- Placement ---

    /// Append a new item at the origin with its default transform. Always
    /// succeeds; returns the new item's index.
    pub fn add_item(&mut self, entry: &Arc<CatalogEntry>) -> usize {
        self.add_item_customized(entry, &Customization::default())
    }

    /// Append a new item at the origin, applying scale/color overrides.
    pub fn add_item_customized(&mut self, entry: &Arc<CatalogEntry>, customization: &Customization) -> usize {
        let index = self.scene.push(PlacedItem::customized(entry, customization));
        tracing::debug!(product = entry.id, index, "furniture placed");
        index
    }

    /// Remove the selected item and clear the selection. Clears any drag
    /// tracking that item. No-op without a selection.
    pub fn delete_selected(&mut self) {
        if let Some(index) = self.selected.take() {
            self.scene.remove(index);
            self.drag = DragState::Idle;
            tracing::debug!(index, remaining = self.scene.len(), "furniture removed");
        }
    }

    // --- Selection ---

    /// Select the item at `index`; an out-of-range index clears the
    /// selection instead (deselect, not an error).
    pub fn select_item(&mut self, index: usize) {
        self.selected = (index < self.scene.len()).then_some(index);
    }

    /// Clear the selection unconditionally.
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    // --- Drag gesture ---

    /// Select `index` and start tracking a drag from `point`, recording the
    /// grab offset between the mapped floor point and the item's x/z.
    /// Starting a new drag implicitly ends any previous one; an out-of-range
    /// index clears both selection and drag.
    pub fn begin_drag(&mut self, point: PointerPoint, index: usize) {
        self.select_item(index);
        let dimensions = self.scene.dimensions;
        self.drag = match self.selected.and_then(|i| self.scene.get(i)) {
            Some(item) => {
                let grab = dimensions.floor_point(point)
                    - glam::Vec2::new(item.position.x, item.position.z);
                DragState::Dragging { grab }
            }
            None => DragState::Idle,
        };
    }

    /// Move the selected item to the pointer: map the normalized point to
    /// the floor plane by half-extent scaling, clamp to the padded room
    /// interior, update x/z. `y` is untouched. No-op unless a drag is active
    /// and an item is selected.
    pub fn drag_to(&mut self, point: PointerPoint) {
        if !self.drag.is_active() {
            return;
        }
        let Some(index) = self.selected else { return };
        let dimensions = self.scene.dimensions;
        let mapped = dimensions.floor_point(point);
        if let Some(item) = self.scene.get_mut(index) {
            item.position.x = dimensions.clamp_x(mapped.x);
            item.position.z = dimensions.clamp_z(mapped.y);
        }
    }

    /// Stop tracking the drag. Idempotent.
    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    // --- Keyboard manipulation ---

    /// Step the selected item's yaw by ±π/4. Yaw is unbounded: every
    /// consumer is periodic in the angle, so no normalization is applied.
    /// No-op without a selection.
    pub fn rotate(&mut self, direction: SpinDirection) {
        let Some(index) = self.selected else { return };
        if let Some(item) = self.scene.get_mut(index) {
            match direction {
                SpinDirection::Right => item.rotation.y += YAW_STEP,
                SpinDirection::Left => item.rotation.y -= YAW_STEP,
            }
        }
    }

    /// Step the selected item 0.1 m across the floor, clamped to the padded
    /// room interior. No-op without a selection.
    pub fn nudge(&mut self, direction: NudgeDirection) {
        let Some(index) = self.selected else { return };
        let dimensions = self.scene.dimensions;
        let (dx, dz) = direction.unit();
        if let Some(item) = self.scene.get_mut(index) {
            item.position.x = dimensions.clamp_x(item.position.x + dx * NUDGE_STEP);
            item.position.z = dimensions.clamp_z(item.position.z + dz * NUDGE_STEP);
        }
    }

    // --- Appearance / room ---

    /// Set the selected item's color override. No-op without a selection.
    pub fn set_color(&mut self, color: &str) {
        let Some(index) = self.selected else { return };
        if let Some(item) = self.scene.get_mut(index) {
            item.color = Some(color.to_string());
        }
    }

    /// Update the room extents. Existing item positions are not re-clamped:
    /// shrinking the room can leave an item outside the new walls until the
    /// next drag or nudge touches it. Subsequent operations use the new
    /// bounds.
    pub fn resize_room(&mut self, width: f32, length: f32, height: f32) {
        self.scene.dimensions = RoomDimensions::new(width, length, height);
    }

    /// Set the wall tint.
    pub fn set_wall_color(&mut self, color: &str) {
        self.scene.wall_color = color.to_string();
    }

    /// Set the ambient light intensity.
    pub fn set_ambient(&mut self, intensity: f32) {
        self.lighting.ambient = intensity;
    }

    /// Set the directional light intensity.
    pub fn set_directional(&mut self, intensity: f32) {
        self.lighting.directional = intensity;
    }

    // --- Input dispatch ---

    /// Route a key press to its operation: `R`/`E` rotate, arrows nudge,
    /// `Delete` deletes, `Escape` deselects.
    pub fn on_key_down(&mut self, key: Key) {
        match key {
            Key::R => self.rotate(SpinDirection::Right),
            Key::E => self.rotate(SpinDirection::Left),
            Key::ArrowLeft => self.nudge(NudgeDirection::Left),
            Key::ArrowRight => self.nudge(NudgeDirection::Right),
            Key::ArrowUp => self.nudge(NudgeDirection::Forward),
            Key::ArrowDown => self.nudge(NudgeDirection::Back),
            Key::Delete => self.delete_selected(),
            Key::Escape => self.deselect(),
        }
    }

    /// Pointer-down with the renderer's hit result: begins a drag on the hit
    /// item; a miss is ignored.
    pub fn on_pointer_down(&mut self, point: PointerPoint, hit: Option<usize>) {
        if let Some(index) = hit {
            self.begin_drag(point, index);
        }
    }

    /// Pointer movement while a drag may be active.
    pub fn on_pointer_move(&mut self, point: PointerPoint) {
        self.drag_to(point);
    }

    /// Pointer release.
    pub fn on_pointer_up(&mut self) {
        self.end_drag();
    }

    // --- Queries ---

    /// The scene as currently committed.
    #[must_use]
    pub fn scene(&self) -> &RoomScene {
        &self.scene
    }

    /// Index of the selected item, if any.
    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.selected
    }

    /// The selected item, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&PlacedItem> {
        self.selected.and_then(|index| self.scene.get(index))
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn drag_active(&self) -> bool {
        self.drag.is_active()
    }

    /// Current light intensities.
    #[must_use]
    pub fn lighting(&self) -> Lighting {
        self.lighting
    }

    /// Borrow the scene description for the renderer's next redraw.
    #[must_use]
    pub fn frame(&self) -> SceneFrame<'_> {
        SceneFrame {
            dimensions: self.scene.dimensions,
            wall_color: &self.scene.wall_color,
            items: self.scene.items(),
            lighting: self.lighting,
            selected: self.selected,
        }
    }
}
