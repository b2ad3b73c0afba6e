//! Enumeration types used throughout the scene.

use serde::{Deserialize, Serialize};

use crate::types::MovementVector;

/// Logical movement direction. Several physical keys may map to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector on the ground plane. "Up" walks away from the camera (-z).
    pub fn unit(self) -> MovementVector {
        match self {
            Direction::Up => MovementVector::new(0.0, -1.0),
            Direction::Down => MovementVector::new(0.0, 1.0),
            Direction::Left => MovementVector::new(-1.0, 0.0),
            Direction::Right => MovementVector::new(1.0, 0.0),
        }
    }
}

/// Scene lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenePhase {
    /// Character responds to input, time advances.
    #[default]
    Exploring,
    /// Host has frozen the scene (e.g. a content panel is open).
    Paused,
}

/// How the follow camera converges on its target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CameraSmoothing {
    /// Fixed fraction of the remaining gap per frame, independent of dt.
    /// Converges faster at higher frame rates.
    PerFrame { factor: f64 },
    /// `1 - exp(-rate * dt)` of the remaining gap; frame-rate independent.
    TimeScaled { rate: f64 },
}

impl Default for CameraSmoothing {
    fn default() -> Self {
        CameraSmoothing::PerFrame {
            factor: crate::constants::CAMERA_LERP,
        }
    }
}

impl CameraSmoothing {
    /// Fraction of the remaining gap to close this frame.
    pub fn blend(&self, dt: f64) -> f64 {
        match *self {
            CameraSmoothing::PerFrame { factor } => factor.clamp(0.0, 1.0),
            CameraSmoothing::TimeScaled { rate } => 1.0 - (-rate.max(0.0) * dt).exp(),
        }
    }
}
