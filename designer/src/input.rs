//! Input model: pointer coordinates, key names, manipulation directions, and
//! the drag gesture state.
//!
//! These are the types the engine consumes. The host translates raw renderer
//! events into them: pointer coordinates arrive already normalized to the
//! viewport, key names arrive as the browser-style strings the rendering
//! surface reports. `DragState` is the active gesture being tracked between
//! pointer-down and pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use glam::Vec2;

/// A pointer position in normalized viewport coordinates: each axis in
/// [-1, 1], origin at the viewport center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPoint {
    pub x: f32,
    pub y: f32,
}

impl PointerPoint {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A designer keyboard key.
///
/// The set is closed: these are the only keys the designer view listens to
/// while mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Rotate right.
    R,
    /// Rotate left.
    E,
    /// Nudge left (−x).
    ArrowLeft,
    /// Nudge right (+x).
    ArrowRight,
    /// Nudge forward (−z).
    ArrowUp,
    /// Nudge back (+z).
    ArrowDown,
    /// Delete the selected item.
    Delete,
    /// Clear the selection.
    Escape,
}

impl Key {
    /// Parse a browser-style key name (`event.key`). Letters match either
    /// case; unrecognized names return `None` and are ignored by the engine.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "r" | "R" => Some(Self::R),
            "e" | "E" => Some(Self::E),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "Delete" => Some(Self::Delete),
            "Escape" => Some(Self::Escape),
            _ => None,
        }
    }
}

/// Yaw direction for a rotate operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinDirection {
    /// Counter-clockwise (negative yaw step).
    Left,
    /// Clockwise (positive yaw step).
    Right,
}

/// Floor-plane direction for a nudge operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    Left,
    Right,
    /// Away from the viewer (−z).
    Forward,
    /// Toward the viewer (+z).
    Back,
}

impl NudgeDirection {
    /// Unit (dx, dz) for this direction.
    #[must_use]
    pub fn unit(self) -> (f32, f32) {
        match self {
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
            Self::Forward => (0.0, -1.0),
            Self::Back => (0.0, 1.0),
        }
    }
}

/// The drag gesture being tracked between pointer-down and pointer-up.
///
/// Only meaningful while an item is selected; starting a new drag replaces
/// any active one (last-writer-wins, no queuing).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No drag in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is dragging the selected item across the floor.
    Dragging {
        /// Floor-space offset from the grab point to the item's x/z at
        /// pointer-down, kept as gesture context for relative dragging.
        grab: Vec2,
    },
}

impl DragState {
    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
