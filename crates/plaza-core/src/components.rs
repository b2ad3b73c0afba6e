//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Scene logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::CameraSmoothing;
use crate::types::{GroundPoint, Position};

/// Marks the entity the player controls.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Facing angle around the vertical axis (radians). 0 faces +z, toward the camera.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Facing {
    pub angle: f64,
}

/// Cosmetic walk-cycle state. Rides along with the movement update but has
/// no effect on position or collision.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Gait {
    /// Bob phase (radians), advanced faster while walking.
    pub bob_phase: f64,
    /// Current vertical body offset derived from the phase.
    pub bob_offset: f64,
}

/// A named point of interest the character can walk up to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub label: String,
    pub icon: String,
    /// Accent colour as 0xRRGGBB.
    pub color: u32,
    pub anchor: GroundPoint,
    /// Distance from the anchor within which the zone counts as "near".
    pub interact_dist: f64,
}

/// Static axis-aligned rectangle that blocks character movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collider {
    /// Zone this collider belongs to.
    pub zone_id: String,
    pub center: GroundPoint,
    pub half_x: f64,
    pub half_z: f64,
}

/// Trailing follow camera.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraRig {
    pub position: Position,
    /// Point the camera is aimed at this frame.
    pub look_at: Position,
    /// Height of the camera above the ground.
    pub height: f64,
    /// Offset behind the character along +z.
    pub distance: f64,
    /// Height above the character's feet that the camera looks at.
    pub look_height: f64,
    pub smoothing: CameraSmoothing,
}
