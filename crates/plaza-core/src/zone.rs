//! Zone definitions.
//!
//! A `ZoneDefinition` is the single source for both the proximity `Zone`
//! and the blocking `Collider` of a point of interest. Both are derived from
//! the same anchor and footprint, so the prompt area and the blocked area
//! cannot drift apart.

use serde::{Deserialize, Serialize};

use crate::components::{Collider, Zone};
use crate::constants::{COLLIDER_PADDING, INTERACT_DIST, ZONE_COLOR};
use crate::types::GroundPoint;

/// Footprint of a zone platform on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    /// Extent along x.
    pub width: f64,
    /// Extent along z.
    pub depth: f64,
}

fn default_padding() -> f64 {
    COLLIDER_PADDING
}

fn default_interact_dist() -> f64 {
    INTERACT_DIST
}

fn default_color() -> u32 {
    ZONE_COLOR
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneDefinition {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default = "default_color")]
    pub color: u32,
    pub anchor: GroundPoint,
    pub footprint: Footprint,
    /// Extra margin around the footprint that still blocks movement.
    #[serde(default = "default_padding")]
    pub collider_padding: f64,
    #[serde(default = "default_interact_dist")]
    pub interact_dist: f64,
}

impl ZoneDefinition {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: impl Into<String>,
        anchor: GroundPoint,
        footprint: Footprint,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
            color: ZONE_COLOR,
            anchor,
            footprint,
            collider_padding: COLLIDER_PADDING,
            interact_dist: INTERACT_DIST,
        }
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    /// Collider half-extents (x, z): half the footprint plus padding.
    pub fn half_extents(&self) -> (f64, f64) {
        (
            self.footprint.width / 2.0 + self.collider_padding,
            self.footprint.depth / 2.0 + self.collider_padding,
        )
    }

    pub fn zone(&self) -> Zone {
        Zone {
            id: self.id.clone(),
            label: self.label.clone(),
            icon: self.icon.clone(),
            color: self.color,
            anchor: self.anchor,
            interact_dist: self.interact_dist,
        }
    }

    pub fn collider(&self) -> Collider {
        let (half_x, half_z) = self.half_extents();
        Collider {
            zone_id: self.id.clone(),
            center: self.anchor,
            half_x,
            half_z,
        }
    }
}

/// The four portfolio stations of the default layout.
pub fn default_zones() -> Vec<ZoneDefinition> {
    vec![
        ZoneDefinition::new(
            "about",
            "About Terminal",
            "📟",
            GroundPoint::new(-26.0, -18.0),
            Footprint { width: 10.0, depth: 8.0 },
        )
        .with_color(0x7c3aed),
        ZoneDefinition::new(
            "projects",
            "Projects Gallery",
            "🎮",
            GroundPoint::new(0.0, -28.0),
            Footprint { width: 16.0, depth: 8.0 },
        )
        .with_color(0xf59e0b),
        ZoneDefinition::new(
            "skills",
            "Skills Vault",
            "⚡",
            GroundPoint::new(26.0, -18.0),
            Footprint { width: 10.0, depth: 8.0 },
        )
        .with_color(0x06b6d4),
        ZoneDefinition::new(
            "contact",
            "Contact Station",
            "📡",
            GroundPoint::new(0.0, 26.0),
            Footprint { width: 10.0, depth: 8.0 },
        )
        .with_color(0x10b981),
    ]
}
