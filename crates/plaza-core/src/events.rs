//! Events emitted by the scene for UI prompts and audio cues.

use serde::{Deserialize, Serialize};

/// One-shot notifications raised during a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneEvent {
    /// The character came within range of a zone (it became the nearest).
    ZoneEntered { zone_id: String },
    /// The zone stopped being the nearest one in range.
    ZoneExited { zone_id: String },
    /// The player asked to open the nearest zone's content.
    InteractRequested { zone_id: String },
}
