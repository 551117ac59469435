//! Shared numeric constants for the placement engine.

// ── Room ────────────────────────────────────────────────────────

/// Default room width in meters.
pub const DEFAULT_ROOM_WIDTH: f32 = 5.0;

/// Default room length in meters.
pub const DEFAULT_ROOM_LENGTH: f32 = 5.0;

/// Default room height in meters.
pub const DEFAULT_ROOM_HEIGHT: f32 = 3.0;

/// Clearance keeping item centers away from the walls, in meters.
pub const WALL_PAD: f32 = 0.5;

/// Default wall tint.
pub const DEFAULT_WALL_COLOR: &str = "#ffffff";

// ── Manipulation ────────────────────────────────────────────────

/// π / 4 (45°) — yaw applied per rotate keypress.
pub const YAW_STEP: f32 = std::f32::consts::FRAC_PI_4;

/// Meters moved per arrow-key nudge.
pub const NUDGE_STEP: f32 = 0.1;

/// Fallback uniform scale when a catalog entry declares no default.
pub const DEFAULT_ITEM_SCALE: f32 = 1.0;

// ── Lighting ────────────────────────────────────────────────────

/// Default ambient light intensity.
pub const DEFAULT_AMBIENT: f32 = 0.4;

/// Default directional light intensity.
pub const DEFAULT_DIRECTIONAL: f32 = 0.8;
