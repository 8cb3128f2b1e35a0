//! Regions of interest and clickable landmarks.

use crate::core::vec2::Vec2;

/// How close the player must stand for a landmark click to count.
pub const DISCOVERY_RANGE: f32 = 20.0;

/// A named area that fires a one-shot notification when the player first
/// walks into it ("near ancient structure" and friends).
#[derive(Clone, Debug)]
pub struct Region {
    pub id: String,
    pub anchor: Vec2,
    pub radius: f32,
    pub message: String,
}

impl Region {
    pub fn new(id: &str, x: f32, z: f32, radius: f32, message: &str) -> Result<Self, String> {
        if radius <= 0.0 {
            return Err(format!("region '{}' has non-positive radius {}", id, radius));
        }
        Ok(Self {
            id: id.to_string(),
            anchor: Vec2::new(x, z),
            radius,
            message: message.to_string(),
        })
    }
}

/// A clickable scene object (windmill, ruins, treasure chest). The frontend
/// raycasts the click; the engine gates it on walking distance.
#[derive(Clone, Debug)]
pub struct Landmark {
    pub id: String,
    pub anchor: Vec2,
    pub discovered: bool,
}

impl Landmark {
    pub fn new(id: &str, x: f32, z: f32) -> Self {
        Self { id: id.to_string(), anchor: Vec2::new(x, z), discovered: false }
    }
}
