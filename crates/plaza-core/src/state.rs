//! Frame snapshot: the complete visible state handed to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::ScenePhase;
use crate::events::SceneEvent;
use crate::types::{MovementVector, Position, SceneTime};

/// Everything the renderer, HUD and audio layers need after one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SceneTime,
    pub phase: ScenePhase,
    pub character: CharacterView,
    /// `None` while no camera is attached.
    pub camera: Option<CameraView>,
    pub nearest_zone: Option<ZoneView>,
    /// Aggregated input direction used this frame.
    pub input: MovementVector,
    pub events: Vec<SceneEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterView {
    pub position: Position,
    /// Facing angle (radians).
    pub facing: f64,
    /// Whether the character attempted to walk this frame. True even when a
    /// collider rejected the step; drives footstep timing.
    pub moving: bool,
    /// Cosmetic body bob offset.
    pub bob_offset: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraView {
    pub position: Position,
    pub look_at: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneView {
    pub id: String,
    pub label: String,
    pub icon: String,
    /// Accent colour as 0xRRGGBB, for tinting the prompt.
    pub color: u32,
    /// Ground-plane distance from the character to the zone anchor.
    pub distance: f64,
}
