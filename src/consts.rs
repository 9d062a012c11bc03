/// Fixed gameplay configuration.
///
/// The simulation runs on a logical pixel canvas; the terminal shell
/// scales it to whatever cell grid is available. The core depends on
/// these values but never loads them from anywhere.

/// Logical canvas size, in pixels.
pub const LOGICAL_WIDTH: i32 = 800;
pub const LOGICAL_HEIGHT: i32 = 600;

// ── Penguin ──────────────────────────────────────────────────────────────────

/// Side length of the penguin's square bounding box.
pub const PENGUIN_SIZE: i32 = 50;

/// Movement per frame per active axis, in pixels.
pub const PENGUIN_SPEED: i32 = 5;

pub const PENGUIN_START_HEALTH: i32 = 50;

/// The penguin starts (and restarts) centered horizontally with its
/// center this many pixels above the bottom edge.
pub const PENGUIN_BOTTOM_OFFSET: i32 = 80;

// ── Ships ────────────────────────────────────────────────────────────────────

/// Side length of a ship's square bounding box.
pub const SHIP_SIZE: i32 = 40;

/// Fall speed range, drawn once per ship at spawn time (inclusive).
pub const SHIP_MIN_SPEED: i32 = 3;
pub const SHIP_MAX_SPEED: i32 = 6;

/// Vertical spawn band above the visible top edge (inclusive), so a
/// fresh wave drifts in staggered instead of appearing all at once.
pub const SHIP_SPAWN_Y_MIN: i32 = -120;
pub const SHIP_SPAWN_Y_MAX: i32 = -40;

// ── Waves & damage ───────────────────────────────────────────────────────────

/// Ships per wave, drawn uniformly (inclusive).
pub const WAVE_MIN_SHIPS: usize = 1;
pub const WAVE_MAX_SHIPS: usize = 3;

/// Health lost per ship contact.
pub const COLLISION_DAMAGE: i32 = 10;
