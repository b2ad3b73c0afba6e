//! Zone proximity.
//!
//! `nearest_zone` is a pure query: the closest zone whose anchor lies
//! strictly within that zone's own interaction radius. `ZoneTracker` sits on
//! the caller side and turns consecutive results into enter/exit events.

use hecs::World;
use tracing::debug;

use plaza_core::components::Zone;
use plaza_core::events::SceneEvent;
use plaza_core::state::ZoneView;
use plaza_core::types::GroundPoint;

/// Nearest qualifying zone and its distance. On equal distances the zone
/// seen first wins, so registration order breaks ties.
pub fn nearest_zone<'a>(
    point: GroundPoint,
    zones: impl IntoIterator<Item = &'a Zone>,
) -> Option<(&'a Zone, f64)> {
    let mut nearest: Option<(&'a Zone, f64)> = None;
    for zone in zones {
        let dist = point.distance_to(&zone.anchor);
        if dist >= zone.interact_dist {
            continue;
        }
        match nearest {
            Some((_, best)) if dist >= best => {}
            _ => nearest = Some((zone, dist)),
        }
    }
    nearest
}

/// Remembers the last nearest zone and reports transitions.
#[derive(Debug, Clone, Default)]
pub struct ZoneTracker {
    current: Option<String>,
}

impl ZoneTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Feed this frame's nearest zone id. Switching straight from one zone to
    /// another yields the exit before the entry.
    pub fn observe(&mut self, next: Option<&str>) -> Vec<SceneEvent> {
        if self.current.as_deref() == next {
            return Vec::new();
        }

        let mut events = Vec::with_capacity(2);
        if let Some(prev) = self.current.take() {
            debug!(zone = %prev, "left zone");
            events.push(SceneEvent::ZoneExited { zone_id: prev });
        }
        if let Some(id) = next {
            debug!(zone = %id, "entered zone");
            events.push(SceneEvent::ZoneEntered {
                zone_id: id.to_string(),
            });
            self.current = Some(id.to_string());
        }
        events
    }
}

/// Find the nearest zone to `point` among the world's zone entities.
/// hecs iterates entities in spawn order within an archetype, which keeps
/// the tie-break stable.
pub fn run(world: &World, point: GroundPoint) -> Option<ZoneView> {
    let mut query = world.query::<&Zone>();
    let zones: Vec<&Zone> = query.iter().map(|(_, zone)| zone).collect();
    nearest_zone(point, zones.iter().copied()).map(|(zone, distance)| ZoneView {
        id: zone.id.clone(),
        label: zone.label.clone(),
        icon: zone.icon.clone(),
        color: zone.color,
        distance,
    })
}
