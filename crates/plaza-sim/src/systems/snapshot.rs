//! Snapshot system: reads the ECS world and builds a `FrameSnapshot`.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use plaza_core::components::{CameraRig, Facing, Gait, Player};
use plaza_core::enums::ScenePhase;
use plaza_core::events::SceneEvent;
use plaza_core::state::{CameraView, CharacterView, FrameSnapshot, ZoneView};
use plaza_core::types::{MovementVector, Position, SceneTime};

/// Per-tick values computed by the engine rather than stored in the world.
pub struct FrameResults {
    pub input: MovementVector,
    pub moving: bool,
    pub nearest_zone: Option<ZoneView>,
    pub events: Vec<SceneEvent>,
}

/// Build a complete FrameSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SceneTime,
    phase: ScenePhase,
    results: FrameResults,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        phase,
        character: build_character(world, results.moving),
        camera: build_camera(world),
        nearest_zone: results.nearest_zone,
        input: results.input,
        events: results.events,
    }
}

/// Player position, used by the engine and the snapshot alike.
pub fn player_position(world: &World) -> Option<Position> {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
}

fn build_character(world: &World, moving: bool) -> CharacterView {
    world
        .query::<(&Player, &Position, &Facing, &Gait)>()
        .iter()
        .next()
        .map(|(_, (_, pos, facing, gait))| CharacterView {
            position: *pos,
            facing: facing.angle,
            moving,
            bob_offset: gait.bob_offset,
        })
        .unwrap_or_default()
}

fn build_camera(world: &World) -> Option<CameraView> {
    world
        .query::<&CameraRig>()
        .iter()
        .next()
        .map(|(_, rig)| CameraView {
            position: rig.position,
            look_at: rig.look_at,
        })
}
