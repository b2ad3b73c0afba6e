//! Input commands sent from the host to the scene.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All host-originated inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputCommand {
    // --- Keyboard ---
    /// A physical key went down. `code` is the layout-independent key code
    /// (e.g. "KeyW", "ArrowUp").
    KeyDown { code: String },
    /// A physical key was released.
    KeyUp { code: String },

    // --- On-screen joystick ---
    /// An on-screen directional control was pressed (touch or mouse).
    ControlPress { control: String },
    /// An on-screen directional control was released.
    ControlRelease { control: String },

    // --- Interaction ---
    /// Activate the nearest zone, if any (e.g. a tap on the prompt).
    Interact,

    // --- Scene control ---
    /// Drop every held key and control (host lost focus).
    ReleaseAll,
    /// Freeze the scene.
    Pause,
    /// Unfreeze the scene.
    Resume,
}
