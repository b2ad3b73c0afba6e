//! Fundamental geometric and timing types.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// World-space position. y is up; the character walks on the x/z plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A point on the ground plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GroundPoint {
    pub x: f64,
    pub z: f64,
}

/// Desired ground-plane direction for one frame. Length never exceeds 1
/// once it leaves the input aggregator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MovementVector {
    pub x: f64,
    pub z: f64,
}

/// Scene time tracking. Unlike a fixed-step clock, each tick advances by the
/// (clamped) frame delta it was given.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SceneTime {
    /// Number of ticks that advanced time.
    pub tick: u64,
    /// Elapsed scene time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Ground-plane projection.
    pub fn ground(&self) -> GroundPoint {
        GroundPoint::new(self.x, self.z)
    }

    pub fn as_dvec3(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }
}

impl From<DVec3> for Position {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl GroundPoint {
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Euclidean distance on the ground plane.
    pub fn distance_to(&self, other: &GroundPoint) -> f64 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.z)
    }
}

impl From<DVec2> for GroundPoint {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl MovementVector {
    pub const ZERO: Self = Self { x: 0.0, z: 0.0 };

    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.z * self.z).sqrt()
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.z)
    }
}

impl From<DVec2> for MovementVector {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl SceneTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
