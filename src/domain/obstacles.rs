//! Static obstacles: circular colliders and hollow building footprints.
//!
//! Obstacles are registered once at world-build time and never mutated.
//! Degenerate shapes are rejected here so movement never has to deal with
//! an undefined contact normal.

use crate::core::vec2::Vec2;

/// A passable window in a building's wall band.
#[derive(Clone, Copy, Debug)]
pub struct Doorway {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Doorway {
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.z >= self.min_z && p.z <= self.max_z
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Obstacle {
    /// Tree, rock, or landmark base.
    Circle { center: Vec2, radius: f32 },
    /// Building footprint: the wall band blocks, the interior and the
    /// doorway window are walkable.
    Rect {
        min: Vec2,
        max: Vec2,
        wall_thickness: f32,
        doorway: Option<Doorway>,
    },
}

impl Obstacle {
    pub fn circle(x: f32, z: f32, radius: f32) -> Result<Self, String> {
        if radius <= 0.0 {
            return Err(format!(
                "circle obstacle at ({}, {}) has non-positive radius {}",
                x, z, radius
            ));
        }
        Ok(Obstacle::Circle { center: Vec2::new(x, z), radius })
    }

    pub fn rect(
        min_x: f32,
        min_z: f32,
        max_x: f32,
        max_z: f32,
        wall_thickness: f32,
        doorway: Option<Doorway>,
    ) -> Result<Self, String> {
        if min_x >= max_x || min_z >= max_z {
            return Err(format!(
                "rect obstacle has inverted bounds ({}, {})..({}, {})",
                min_x, min_z, max_x, max_z
            ));
        }
        if wall_thickness <= 0.0 {
            return Err(format!("rect obstacle has non-positive wall thickness {}", wall_thickness));
        }
        Ok(Obstacle::Rect {
            min: Vec2::new(min_x, min_z),
            max: Vec2::new(max_x, max_z),
            wall_thickness,
            doorway,
        })
    }

    /// Whether a tentative position is inside this obstacle's blocked volume.
    ///
    /// For rects the blocked volume is the wall band only; the interior and
    /// the doorway window pass through.
    pub fn blocks(&self, p: Vec2) -> bool {
        match *self {
            Obstacle::Circle { center, radius } => p.distance(center) < radius,
            Obstacle::Rect { min, max, wall_thickness, doorway } => {
                let in_footprint =
                    p.x >= min.x && p.x <= max.x && p.z >= min.z && p.z <= max.z;
                if !in_footprint {
                    return false;
                }
                let in_interior = p.x > min.x + wall_thickness
                    && p.x < max.x - wall_thickness
                    && p.z > min.z + wall_thickness
                    && p.z < max.z - wall_thickness;
                if in_interior {
                    return false;
                }
                // In the wall band; only the doorway lets you through.
                !doorway.map_or(false, |d| d.contains(p))
            }
        }
    }
}
