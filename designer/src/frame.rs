//! The declarative scene description handed to the rendering collaborator.
//!
//! The renderer reads one [`SceneFrame`] per redraw and owns everything
//! visual from there: model loading, camera orbit, shadows, the selection
//! marker. The engine and the renderer share a single execution context, so
//! the frame borrows the committed state directly; there is no copy and no
//! wire format.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use crate::consts::{DEFAULT_AMBIENT, DEFAULT_DIRECTIONAL};
use crate::scene::{PlacedItem, RoomDimensions};

/// Light intensities for the room, adjustable by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    /// Ambient light intensity.
    pub ambient: f32,
    /// Directional (key) light intensity.
    pub directional: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self { ambient: DEFAULT_AMBIENT, directional: DEFAULT_DIRECTIONAL }
    }
}

/// Everything the renderer needs for one redraw.
#[derive(Debug, Clone, Copy)]
pub struct SceneFrame<'a> {
    /// Current room extents.
    pub dimensions: RoomDimensions,
    /// Wall tint as a CSS color string.
    pub wall_color: &'a str,
    /// Placed items in render order.
    pub items: &'a [PlacedItem],
    /// Current light intensities.
    pub lighting: Lighting,
    /// Index of the selected item, for the selection marker.
    pub selected: Option<usize>,
}
