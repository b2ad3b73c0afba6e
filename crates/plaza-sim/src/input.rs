//! Input aggregation.
//!
//! Two channels feed one movement vector: held keyboard keys (several
//! physical keys per logical direction) and held on-screen controls (each
//! contributing its configured vector). `InputState` is written by the
//! host's event handlers via commands and read once per tick.

use std::collections::{BTreeSet, HashMap, HashSet};

use glam::DVec2;

use plaza_core::config::InputConfig;
use plaza_core::enums::Direction;
use plaza_core::types::MovementVector;

/// Raw held-input state for both channels.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held_keys: BTreeSet<String>,
    active_controls: BTreeSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Returns true only on the press edge, so host
    /// key-repeat events do not count as fresh presses.
    pub fn key_down(&mut self, code: &str) -> bool {
        self.held_keys.insert(code.to_string())
    }

    pub fn key_up(&mut self, code: &str) {
        self.held_keys.remove(code);
    }

    pub fn press_control(&mut self, id: &str) {
        self.active_controls.insert(id.to_string());
    }

    pub fn release_control(&mut self, id: &str) {
        self.active_controls.remove(id);
    }

    /// Drop everything held on both channels.
    pub fn release_all(&mut self) {
        self.held_keys.clear();
        self.active_controls.clear();
    }

    pub fn is_key_held(&self, code: &str) -> bool {
        self.held_keys.contains(code)
    }

    pub fn is_control_active(&self, id: &str) -> bool {
        self.active_controls.contains(id)
    }
}

/// Lookup tables built from `InputConfig`.
#[derive(Debug, Clone, Default)]
pub struct InputBindings {
    key_directions: HashMap<String, Direction>,
    control_vectors: HashMap<String, DVec2>,
    interact_keys: HashSet<String>,
}

impl InputBindings {
    pub fn from_config(config: &InputConfig) -> Self {
        let mut key_directions = HashMap::new();
        for binding in &config.keys {
            for key in &binding.keys {
                key_directions.insert(key.clone(), binding.direction);
            }
        }
        let control_vectors = config
            .controls
            .iter()
            .map(|c| (c.id.clone(), DVec2::new(c.x, c.z)))
            .collect();
        let interact_keys = config.interact_keys.iter().cloned().collect();

        Self {
            key_directions,
            control_vectors,
            interact_keys,
        }
    }

    pub fn direction_for_key(&self, code: &str) -> Option<Direction> {
        self.key_directions.get(code).copied()
    }

    pub fn vector_for_control(&self, id: &str) -> Option<MovementVector> {
        self.control_vectors.get(id).map(|v| MovementVector::from(*v))
    }

    pub fn is_interact_key(&self, code: &str) -> bool {
        self.interact_keys.contains(code)
    }
}

/// Combine both channels into this frame's movement vector.
///
/// Each logical direction counts once however many of its keys are held.
/// Opposite directions cancel by plain summation. The sum is rescaled to
/// unit length only when it is longer than 1.
pub fn movement_vector(state: &InputState, bindings: &InputBindings) -> MovementVector {
    let mut held = HashSet::new();
    for code in &state.held_keys {
        if let Some(direction) = bindings.direction_for_key(code) {
            held.insert(direction);
        }
    }

    let mut sum = DVec2::ZERO;
    for direction in held {
        sum += direction.unit().as_dvec2();
    }
    for id in &state.active_controls {
        if let Some(v) = bindings.vector_for_control(id) {
            sum += v.as_dvec2();
        }
    }

    MovementVector::from(sum.clamp_length_max(1.0))
}
