//! Entity spawn factories for setting up the scene world.
//!
//! Creates the player, one entity per zone (carrying both its proximity
//! `Zone` and blocking `Collider`), and the follow camera.

use hecs::World;

use plaza_core::components::*;
use plaza_core::config::{CameraConfig, SceneConfig};
use plaza_core::types::{GroundPoint, Position};
use plaza_core::zone::ZoneDefinition;

use crate::systems::camera;

/// Populate an empty world from a validated config.
pub fn setup_scene(world: &mut World, config: &SceneConfig) {
    spawn_player(world, config.spawn);
    for def in &config.zones {
        spawn_zone(world, def);
    }
    if config.camera.enabled {
        spawn_camera(world, &config.camera, Position::new(config.spawn.x, 0.0, config.spawn.z));
    }
}

/// Spawn the player at ground level, facing the camera's default angle.
pub fn spawn_player(world: &mut World, spawn: GroundPoint) -> hecs::Entity {
    world.spawn((
        Player,
        Position::new(spawn.x, 0.0, spawn.z),
        Facing::default(),
        Gait::default(),
    ))
}

/// Spawn a zone with its collider derived from the same definition.
pub fn spawn_zone(world: &mut World, def: &ZoneDefinition) -> hecs::Entity {
    world.spawn((def.zone(), def.collider()))
}

/// Spawn a follow camera already settled on `focus`, so the first frames
/// don't swoop in from the origin.
pub fn spawn_camera(world: &mut World, config: &CameraConfig, focus: Position) -> hecs::Entity {
    let mut rig = CameraRig {
        position: Position::default(),
        look_at: Position::default(),
        height: config.height,
        distance: config.distance,
        look_height: config.look_height,
        smoothing: config.smoothing,
    };
    rig.position = camera::target_position(&rig, focus);
    rig.look_at = Position::new(focus.x, config.look_height, focus.z);
    world.spawn((rig,))
}
