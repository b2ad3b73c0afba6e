//! Follow camera.
//!
//! Each frame the camera closes part of the gap to a point above and behind
//! the character, and aims slightly above the character's feet. Runs whether
//! or not the character's step was accepted.

use glam::DVec3;
use hecs::World;

use plaza_core::components::CameraRig;
use plaza_core::types::Position;

/// Where the camera wants to be for a character at `focus`.
pub fn target_position(rig: &CameraRig, focus: Position) -> Position {
    Position::new(focus.x, rig.height, focus.z + rig.distance)
}

/// Move `rig` toward its target for this frame.
pub fn follow(rig: &mut CameraRig, focus: Position, dt: f64) {
    let target = target_position(rig, focus).as_dvec3();
    let blend = rig.smoothing.blend(dt);
    let current = rig.position.as_dvec3();
    rig.position = Position::from(current + (target - current) * blend);
    rig.look_at = Position::from(DVec3::new(focus.x, rig.look_height, focus.z));
}

/// Follow `focus` with every attached camera. No camera, no work.
pub fn run(world: &mut World, focus: Position, dt: f64) {
    for (_entity, rig) in world.query_mut::<&mut CameraRig>() {
        follow(rig, focus, dt);
    }
}
