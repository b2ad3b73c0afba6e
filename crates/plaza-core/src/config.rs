//! Scene configuration.
//!
//! Everything the scene needs at startup: world size, movement tuning,
//! camera, input bindings and the zone layout. Supplied once and never
//! mutated by the simulation. Every field has a default matching the
//! stock portfolio layout, so a JSON file only has to name what it changes.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::{CameraSmoothing, Direction};
use crate::types::GroundPoint;
use crate::zone::{default_zones, ZoneDefinition};

/// Errors raised while loading or validating a `SceneConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be a positive finite number, got {value}")]
    NonPositive { field: String, value: f64 },

    #[error("world boundary is {boundary}; margin {margin} leaves no walkable area")]
    NoWalkableArea { boundary: f64, margin: f64 },

    #[error("zone at index {index} has an empty id")]
    EmptyZoneId { index: usize },

    #[error("zone '{id}' is defined more than once")]
    DuplicateZone { id: String },

    #[error("zone '{id}' collider extends past the world boundary {boundary}")]
    ZoneOutOfBounds { id: String, boundary: f64 },

    #[error(
        "zone '{id}' interaction radius {interact_dist} must exceed {required} (nearest \
         collider edge plus one full step); the zone could never be activated"
    )]
    UnreachableZone {
        id: String,
        interact_dist: f64,
        required: f64,
    },

    #[error("spawn point ({x}, {z}) lies outside the world boundary {boundary}")]
    SpawnOutOfBounds { x: f64, z: f64, boundary: f64 },

    #[error("spawn point ({x}, {z}) lies inside the collider of zone '{zone_id}'")]
    SpawnInsideZone { x: f64, z: f64, zone_id: String },

    #[error("control '{id}' vector ({x}, {z}) is longer than 1")]
    ControlTooLong { id: String, x: f64, z: f64 },
}

/// Ground plane dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Edge length of the square world.
    pub size: f64,
    /// Distance the character keeps from the world edge.
    pub boundary_margin: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size: WORLD_SIZE,
            boundary_margin: BOUNDARY_MARGIN,
        }
    }
}

impl WorldConfig {
    /// Half-width of the walkable square.
    pub fn boundary(&self) -> f64 {
        self.size / 2.0 - self.boundary_margin
    }
}

/// Character movement tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Ground speed (units per second) at full input.
    pub move_speed: f64,
    /// Facing damping rate (per second).
    pub turn_speed: f64,
    /// Input magnitudes below this are treated as idle.
    pub idle_threshold: f64,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            turn_speed: TURN_SPEED,
            idle_threshold: IDLE_THRESHOLD,
        }
    }
}

/// Follow camera placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Attach a follow camera at startup.
    pub enabled: bool,
    pub height: f64,
    pub distance: f64,
    pub look_height: f64,
    pub smoothing: CameraSmoothing,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            height: CAMERA_HEIGHT,
            distance: CAMERA_DISTANCE,
            look_height: CAMERA_LOOK_HEIGHT,
            smoothing: CameraSmoothing::default(),
        }
    }
}

/// Physical keys bound to one logical direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub direction: Direction,
    pub keys: Vec<String>,
}

/// An on-screen control and the vector it contributes while held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlBinding {
    pub id: String,
    pub x: f64,
    pub z: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub keys: Vec<KeyBinding>,
    pub controls: Vec<ControlBinding>,
    /// Keys that request interaction with the nearest zone.
    pub interact_keys: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        let key = |direction, keys: [&str; 2]| KeyBinding {
            direction,
            keys: keys.iter().map(|k| k.to_string()).collect(),
        };
        let controls = Direction::ALL
            .iter()
            .map(|dir| {
                let unit = dir.unit();
                let id = match dir {
                    Direction::Up => "vj-up",
                    Direction::Down => "vj-down",
                    Direction::Left => "vj-left",
                    Direction::Right => "vj-right",
                };
                ControlBinding {
                    id: id.to_string(),
                    x: unit.x,
                    z: unit.z,
                }
            })
            .collect();

        Self {
            keys: vec![
                key(Direction::Up, ["KeyW", "ArrowUp"]),
                key(Direction::Down, ["KeyS", "ArrowDown"]),
                key(Direction::Left, ["KeyA", "ArrowLeft"]),
                key(Direction::Right, ["KeyD", "ArrowRight"]),
            ],
            controls,
            interact_keys: vec!["KeyE".to_string(), "Space".to_string()],
        }
    }
}

/// Complete startup configuration for a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub world: WorldConfig,
    pub movement: MovementTuning,
    pub camera: CameraConfig,
    pub input: InputConfig,
    pub zones: Vec<ZoneDefinition>,
    pub spawn: GroundPoint,
    /// Largest frame delta (seconds) the simulation will integrate.
    pub max_frame_dt: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            movement: MovementTuning::default(),
            camera: CameraConfig::default(),
            input: InputConfig::default(),
            zones: default_zones(),
            spawn: GroundPoint::new(SPAWN_X, SPAWN_Z),
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl SceneConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("world.size", self.world.size)?;
        if !self.world.boundary_margin.is_finite() || self.world.boundary_margin < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "world.boundary_margin".into(),
                value: self.world.boundary_margin,
            });
        }
        let boundary = self.world.boundary();
        if boundary <= 0.0 {
            return Err(ConfigError::NoWalkableArea {
                boundary,
                margin: self.world.boundary_margin,
            });
        }

        positive("movement.move_speed", self.movement.move_speed)?;
        positive("movement.turn_speed", self.movement.turn_speed)?;
        positive("movement.idle_threshold", self.movement.idle_threshold)?;
        positive("max_frame_dt", self.max_frame_dt)?;

        match self.camera.smoothing {
            CameraSmoothing::PerFrame { factor } => positive("camera.smoothing.factor", factor)?,
            CameraSmoothing::TimeScaled { rate } => positive("camera.smoothing.rate", rate)?,
        }

        for control in &self.input.controls {
            if (control.x * control.x + control.z * control.z).sqrt() > 1.0 + 1e-9 {
                return Err(ConfigError::ControlTooLong {
                    id: control.id.clone(),
                    x: control.x,
                    z: control.z,
                });
            }
        }

        // A blocked step leaves the character anywhere up to one full step
        // short of a collider edge.
        let max_step = self.movement.move_speed * self.max_frame_dt;

        let mut seen = HashSet::new();
        for (index, def) in self.zones.iter().enumerate() {
            if def.id.is_empty() {
                return Err(ConfigError::EmptyZoneId { index });
            }
            if !seen.insert(def.id.as_str()) {
                return Err(ConfigError::DuplicateZone { id: def.id.clone() });
            }
            validate_zone(def, boundary, max_step)?;
        }

        let spawn = self.spawn;
        if spawn.x.abs() > boundary || spawn.z.abs() > boundary {
            return Err(ConfigError::SpawnOutOfBounds {
                x: spawn.x,
                z: spawn.z,
                boundary,
            });
        }
        for def in &self.zones {
            let (hx, hz) = def.half_extents();
            if (spawn.x - def.anchor.x).abs() < hx && (spawn.z - def.anchor.z).abs() < hz {
                return Err(ConfigError::SpawnInsideZone {
                    x: spawn.x,
                    z: spawn.z,
                    zone_id: def.id.clone(),
                });
            }
        }

        Ok(())
    }
}

fn validate_zone(def: &ZoneDefinition, boundary: f64, max_step: f64) -> Result<(), ConfigError> {
    positive(&format!("zones.{}.footprint.width", def.id), def.footprint.width)?;
    positive(&format!("zones.{}.footprint.depth", def.id), def.footprint.depth)?;
    positive(&format!("zones.{}.interact_dist", def.id), def.interact_dist)?;
    if !def.collider_padding.is_finite() || def.collider_padding < 0.0 {
        return Err(ConfigError::NonPositive {
            field: format!("zones.{}.collider_padding", def.id),
            value: def.collider_padding,
        });
    }

    let (hx, hz) = def.half_extents();
    if def.anchor.x.abs() + hx > boundary || def.anchor.z.abs() + hz > boundary {
        return Err(ConfigError::ZoneOutOfBounds {
            id: def.id.clone(),
            boundary,
        });
    }

    let required = hx.min(hz) + max_step;
    if def.interact_dist <= required {
        return Err(ConfigError::UnreachableZone {
            id: def.id.clone(),
            interact_dist: def.interact_dist,
            required,
        });
    }
    Ok(())
}

fn positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive {
            field: field.to_string(),
            value,
        })
    }
}
