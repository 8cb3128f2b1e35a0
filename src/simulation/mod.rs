//! World - session state and frame orchestration.
//!
//! `WorldCore` owns everything that used to live in module-level globals
//! in the JS variants: player position, obstacle list, one-shot flags.
//! It only orchestrates; the actual logic lives in systems/.
//!
//! Movement resolution is in systems/movement.rs
//! Proximity flags and discovery are in systems/proximity.rs
//! World descriptions are in domain/description.rs

use crate::core::vec2::Vec2;
use crate::domain::description::{LocomotionDesc, WorldDescription};
use crate::domain::obstacles::Obstacle;
use crate::domain::regions::{Landmark, Region};
use crate::systems::input::InputSnapshot;
use crate::systems::movement::Locomotion;
use crate::systems::proximity::ProximityTracker;

#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
pub mod events;
mod facade;

pub use events::WorldEvent;
pub use facade::World;

/// The walkable island session
#[derive(Debug)]
pub struct WorldCore {
    boundary_radius: f32,
    obstacles: Vec<Obstacle>,
    regions: Vec<Region>,
    landmarks: Vec<Landmark>,

    // Player state
    spawn: Vec2,
    player: Vec2,
    heading: f32,
    locomotion: Locomotion,

    // Session state
    proximity: ProximityTracker,
    events: Vec<WorldEvent>,
    frame: u64,
}

impl WorldCore {
    /// Create an empty island with the given shoreline radius
    pub fn new(boundary_radius: f32) -> Result<Self, String> {
        init::create_world_core(boundary_radius)
    }

    /// Build a full world from a declarative description
    pub fn from_description(desc: &WorldDescription) -> Result<Self, String> {
        init::create_world_from_description(desc)
    }

    pub fn from_description_json(json: &str) -> Result<Self, String> {
        let desc = WorldDescription::from_json(json)?;
        Self::from_description(&desc)
    }

    pub fn boundary_radius(&self) -> f32 { self.boundary_radius }

    pub fn player(&self) -> Vec2 { self.player }

    pub fn heading(&self) -> f32 { self.heading }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn near_shore(&self) -> bool { self.proximity.near_shore() }

    pub fn obstacle_count(&self) -> usize { self.obstacles.len() }

    pub fn region_count(&self) -> usize { self.regions.len() }

    pub fn landmark_count(&self) -> usize { self.landmarks.len() }

    pub fn discovered_count(&self) -> usize {
        self.landmarks.iter().filter(|l| l.discovered).count()
    }

    pub fn set_spawn(&mut self, x: f32, z: f32) -> Result<(), String> {
        settings::set_spawn(self, x, z)
    }

    pub fn set_locomotion(&mut self, desc: LocomotionDesc) -> Result<(), String> {
        settings::set_locomotion(self, desc)
    }

    /// Register a circular collider (tree, rock, landmark base)
    pub fn add_circle_obstacle(&mut self, x: f32, z: f32, radius: f32) -> Result<(), String> {
        commands::add_circle_obstacle(self, x, z, radius)
    }

    /// Register a building footprint with an optional doorway gap
    #[allow(clippy::too_many_arguments)]
    pub fn add_building(
        &mut self,
        min_x: f32,
        min_z: f32,
        max_x: f32,
        max_z: f32,
        wall_thickness: f32,
        doorway: Option<crate::domain::obstacles::Doorway>,
    ) -> Result<(), String> {
        commands::add_building(self, min_x, min_z, max_x, max_z, wall_thickness, doorway)
    }

    /// Register a one-shot region of interest
    pub fn add_region(
        &mut self,
        id: &str,
        x: f32,
        z: f32,
        radius: f32,
        message: &str,
    ) -> Result<(), String> {
        commands::add_region(self, id, x, z, radius, message)
    }

    /// Register a clickable landmark, optionally with a collider base
    pub fn add_landmark(
        &mut self,
        id: &str,
        x: f32,
        z: f32,
        collider_radius: Option<f32>,
    ) -> Result<(), String> {
        commands::add_landmark(self, id, x, z, collider_radius)
    }

    /// Advance the session one frame
    pub fn step(&mut self, input: InputSnapshot) {
        step::step(self, input);
    }

    /// Frontend click on a landmark, gated on walking distance
    pub fn discover(&mut self, id: &str) -> bool {
        commands::discover(self, id)
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        commands::drain_events(self)
    }

    /// Take all queued events as a JSON array (for the JS side)
    pub fn drain_events_json(&mut self) -> String {
        commands::drain_events_json(self)
    }

    /// Session restart: respawn and clear every one-shot flag
    pub fn reset(&mut self) {
        commands::reset(self);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
