//! World positions and monument geometry.

mod grid;

pub use grid::*;

use serde::{Deserialize, Serialize};

/// A point in world space. `y` is height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Axis-aligned box around a monument, stored as center plus half-extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneBounds {
    pub center: Position,
    pub extents: Position,
}

impl ZoneBounds {
    pub fn new(center: Position, extents: Position) -> Self {
        Self { center, extents }
    }

    /// Check if a position lies inside the box. Faces count as inside.
    pub fn contains(&self, position: Position) -> bool {
        (position.x - self.center.x).abs() <= self.extents.x
            && (position.y - self.center.y).abs() <= self.extents.y
            && (position.z - self.center.z).abs() <= self.extents.z
    }
}

/// A monument instance on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonumentZone {
    /// Runtime identifier, usually the prefab path.
    pub name: String,
    pub bounds: ZoneBounds,
}

impl MonumentZone {
    pub fn new(name: impl Into<String>, bounds: ZoneBounds) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }
}

/// Names of the monuments whose bounds contain `position`, in input order.
pub fn overlapping(zones: &[MonumentZone], position: Position) -> impl Iterator<Item = &str> {
    zones
        .iter()
        .filter(move |zone| zone.bounds.contains(position))
        .map(|zone| zone.name.as_str())
}
