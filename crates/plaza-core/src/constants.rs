//! Scene constants and tuning defaults.

/// Host frame rate the loop aims for (Hz).
pub const FRAME_RATE: u32 = 60;

/// Largest frame delta handed to the simulation (seconds).
/// Larger deltas (tab stalls, debugger pauses) are clamped to this.
pub const MAX_FRAME_DT: f64 = 0.05;

// --- World ---

/// Edge length of the square ground plane.
pub const WORLD_SIZE: f64 = 100.0;

/// Distance kept between the character and the world edge.
pub const BOUNDARY_MARGIN: f64 = 1.2;

/// Character spawn point on the ground plane (x, z).
pub const SPAWN_X: f64 = 0.0;
pub const SPAWN_Z: f64 = 8.0;

// --- Character ---

/// Ground speed in units per second (0.14 units per 60 Hz frame).
pub const MOVE_SPEED: f64 = 8.4;

/// Facing damping rate. Each frame covers `min(TURN_SPEED * dt, 1)` of the
/// remaining angle.
pub const TURN_SPEED: f64 = 8.0;

/// Movement vectors shorter than this count as idle.
pub const IDLE_THRESHOLD: f64 = 0.01;

/// Gait bob frequency multiplier while walking / idling.
pub const BOB_RATE_MOVING: f64 = 6.0;
pub const BOB_RATE_IDLE: f64 = 1.0;

/// Gait bob amplitude while walking / idling.
pub const BOB_AMPLITUDE_MOVING: f64 = 0.06;
pub const BOB_AMPLITUDE_IDLE: f64 = 0.02;

// --- Camera ---

/// Camera height above the ground.
pub const CAMERA_HEIGHT: f64 = 16.0;

/// Camera distance behind the character along +z.
pub const CAMERA_DISTANCE: f64 = 18.0;

/// Height of the point the camera looks at, above the character's feet.
pub const CAMERA_LOOK_HEIGHT: f64 = 1.5;

/// Per-frame camera smoothing factor.
pub const CAMERA_LERP: f64 = 0.08;

// --- Zones ---

/// Default interaction radius around a zone anchor.
pub const INTERACT_DIST: f64 = 6.5;

/// Padding added on each side of a zone footprint to form its collider.
pub const COLLIDER_PADDING: f64 = 0.3;

/// Accent colour (0xRRGGBB) for zones that do not name one.
pub const ZONE_COLOR: u32 = 0xffffff;
