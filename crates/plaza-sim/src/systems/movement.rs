//! Character controller.
//!
//! Turns the frame's movement vector into a new position and facing:
//! damped rotation toward the walking direction, proposed translation,
//! boundary clamp, then all-or-nothing collider rejection. A step that
//! would end inside any collider is discarded entirely; the character
//! stops rather than sliding along the edge.

use std::f64::consts::{PI, TAU};

use glam::DVec2;
use hecs::World;
use tracing::trace;

use plaza_core::components::{Collider, Facing, Gait, Player};
use plaza_core::config::MovementTuning;
use plaza_core::constants::{
    BOB_AMPLITUDE_IDLE, BOB_AMPLITUDE_MOVING, BOB_RATE_IDLE, BOB_RATE_MOVING,
};
use plaza_core::types::{MovementVector, Position};

/// Result of one controller step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepOutcome {
    /// Input was above the idle threshold.
    pub moving: bool,
    /// Collider that rejected the step, if any.
    pub blocked_by: Option<String>,
}

/// Signed difference `to - from`, wrapped into (-π, π].
pub fn shortest_angle(from: f64, to: f64) -> f64 {
    let diff = (to - from).rem_euclid(TAU);
    if !diff.is_finite() {
        return 0.0;
    }
    if diff > PI {
        diff - TAU
    } else {
        diff
    }
}

/// Advance `current` toward `target` by `min(turn_speed * dt, 1)` of the
/// shortest remaining arc.
pub fn damp_facing(current: f64, target: f64, turn_speed: f64, dt: f64) -> f64 {
    current + shortest_angle(current, target) * (turn_speed * dt).min(1.0)
}

/// Facing that looks along `input`. Angle 0 faces +z.
pub fn target_facing(input: MovementVector) -> f64 {
    input.x.atan2(input.z) + PI
}

/// Clamp each axis independently into `[-boundary, boundary]`.
pub fn clamp_to_boundary(point: DVec2, boundary: f64) -> DVec2 {
    point.clamp(DVec2::splat(-boundary), DVec2::splat(boundary))
}

/// Strict containment: a point exactly on a collider edge is not inside.
pub fn collider_contains(collider: &Collider, point: DVec2) -> bool {
    point.x > collider.center.x - collider.half_x
        && point.x < collider.center.x + collider.half_x
        && point.y > collider.center.z - collider.half_z
        && point.y < collider.center.z + collider.half_z
}

/// First collider (in iteration order) containing `point`.
pub fn blocking_collider<'a>(
    point: DVec2,
    colliders: impl IntoIterator<Item = &'a Collider>,
) -> Option<&'a Collider> {
    colliders
        .into_iter()
        .find(|collider| collider_contains(collider, point))
}

/// Integrate one frame of movement for a single character.
///
/// Below the idle threshold nothing changes. Otherwise the facing is damped
/// toward the walking direction (even if the step is then blocked) and the
/// clamped proposed position is committed unless a collider contains it.
pub fn step_character<'a>(
    position: &mut Position,
    facing: &mut Facing,
    input: MovementVector,
    dt: f64,
    tuning: &MovementTuning,
    boundary: f64,
    colliders: impl IntoIterator<Item = &'a Collider>,
) -> StepOutcome {
    if input.length() <= tuning.idle_threshold {
        return StepOutcome::default();
    }

    facing.angle = damp_facing(facing.angle, target_facing(input), tuning.turn_speed, dt);

    let current = DVec2::new(position.x, position.z);
    let proposed = current + input.as_dvec2() * tuning.move_speed * dt;
    let proposed = clamp_to_boundary(proposed, boundary);

    if let Some(collider) = blocking_collider(proposed, colliders) {
        trace!(zone = %collider.zone_id, "step rejected by collider");
        return StepOutcome {
            moving: true,
            blocked_by: Some(collider.zone_id.clone()),
        };
    }

    position.x = proposed.x;
    position.z = proposed.y;
    StepOutcome {
        moving: true,
        blocked_by: None,
    }
}

/// Advance the cosmetic walk bob.
pub fn advance_gait(gait: &mut Gait, moving: bool, dt: f64) {
    let (rate, amplitude) = if moving {
        (BOB_RATE_MOVING, BOB_AMPLITUDE_MOVING)
    } else {
        (BOB_RATE_IDLE, BOB_AMPLITUDE_IDLE)
    };
    gait.bob_phase += dt * rate;
    gait.bob_offset = gait.bob_phase.sin() * amplitude;
}

/// Step the player entity. Without a player entity this is a no-op.
pub fn run(
    world: &mut World,
    input: MovementVector,
    dt: f64,
    tuning: &MovementTuning,
    boundary: f64,
) -> StepOutcome {
    // Colliders and the player live in different archetypes, so both
    // borrows can be held at once.
    let mut collider_query = world.query::<&Collider>();
    let colliders: Vec<&Collider> = collider_query.iter().map(|(_, c)| c).collect();

    let mut player_query = world.query::<(&Player, &mut Position, &mut Facing, &mut Gait)>();
    let Some((_entity, (_player, position, facing, gait))) = player_query.iter().next() else {
        return StepOutcome::default();
    };

    let outcome = step_character(
        position,
        facing,
        input,
        dt,
        tuning,
        boundary,
        colliders.iter().copied(),
    );
    advance_gait(gait, outcome.moving, dt);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use plaza_core::types::GroundPoint;

    fn square(half: f64) -> Collider {
        Collider {
            zone_id: "box".into(),
            center: GroundPoint::new(0.0, 0.0),
            half_x: half,
            half_z: half,
        }
    }

    #[test]
    fn test_shortest_angle_range() {
        assert!((shortest_angle(0.0, PI) - PI).abs() < 1e-12);
        assert!((shortest_angle(PI, 0.0) - PI).abs() < 1e-12);
        assert!((shortest_angle(0.1, TAU - 0.1) + 0.2).abs() < 1e-12);
        assert!((shortest_angle(0.0, 5.0 * TAU + 0.3) - 0.3).abs() < 1e-9);
        assert_eq!(shortest_angle(0.0, f64::NAN), 0.0);
    }

    #[test]
    fn test_damp_facing_clamps_fraction() {
        // turn_speed * dt = 4 is clamped to a full step: lands exactly on target.
        let angle = damp_facing(0.0, 1.0, 8.0, 0.5);
        assert!((angle - 1.0).abs() < 1e-12);
        let half = damp_facing(0.0, 1.0, 8.0, 1.0 / 16.0);
        assert!((half - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_target_facing_convention() {
        // Walking toward the camera (+z) faces π; walking away faces 2π ≡ 0.
        assert!((target_facing(MovementVector::new(0.0, 1.0)) - PI).abs() < 1e-12);
        assert!((target_facing(MovementVector::new(0.0, -1.0)) - TAU).abs() < 1e-12);
    }

    #[test]
    fn test_collider_edge_is_not_inside() {
        let c = square(2.0);
        assert!(collider_contains(&c, DVec2::new(1.99, 0.0)));
        assert!(!collider_contains(&c, DVec2::new(2.0, 0.0)));
        assert!(!collider_contains(&c, DVec2::new(0.0, -2.0)));
    }

    #[test]
    fn test_clamp_each_axis() {
        let p = clamp_to_boundary(DVec2::new(60.0, -3.0), 48.8);
        assert_eq!(p, DVec2::new(48.8, -3.0));
    }
}
