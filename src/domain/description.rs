//! Declarative world description.
//!
//! The five island variants differ only in set dressing, so worlds are
//! described as data (JSON shipped next to the frontend bundle) and built
//! by one generic builder instead of per-variant construction code.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorldDescription {
    pub boundary_radius: f32,
    /// Player start position, [x, z].
    #[serde(default)]
    pub spawn: [f32; 2],
    #[serde(default)]
    pub locomotion: LocomotionDesc,
    #[serde(default)]
    pub obstacles: Vec<ObstacleDesc>,
    #[serde(default)]
    pub regions: Vec<RegionDesc>,
    #[serde(default)]
    pub landmarks: Vec<LandmarkDesc>,
}

impl WorldDescription {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LocomotionDesc {
    /// Displacement = normalized input direction * speed.
    Direct { speed: f32 },
    /// Velocity integrates input * accel, decays by the flat drag factor
    /// each frame, clamps to max_speed.
    Inertial { accel: f32, drag: f32, max_speed: f32 },
}

impl Default for LocomotionDesc {
    fn default() -> Self {
        LocomotionDesc::Direct { speed: crate::systems::movement::DEFAULT_SPEED }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ObstacleDesc {
    Circle {
        x: f32,
        z: f32,
        radius: f32,
    },
    Building {
        min_x: f32,
        min_z: f32,
        max_x: f32,
        max_z: f32,
        #[serde(default = "default_wall_thickness")]
        wall_thickness: f32,
        #[serde(default)]
        doorway: Option<DoorwayDesc>,
    },
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DoorwayDesc {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

fn default_wall_thickness() -> f32 {
    1.0
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegionDesc {
    pub id: String,
    pub x: f32,
    pub z: f32,
    pub radius: f32,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LandmarkDesc {
    pub id: String,
    pub x: f32,
    pub z: f32,
    /// Landmarks with a base (windmill, ruins) also block movement;
    /// floating ones (treasure glow) do not.
    #[serde(default)]
    pub collider_radius: Option<f32>,
}
