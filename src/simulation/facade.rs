use wasm_bindgen::prelude::*;

use crate::domain::description::LocomotionDesc;
use crate::domain::obstacles::Doorway;
use crate::systems::input::InputSnapshot;

use super::WorldCore;

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create an empty island with the given shoreline radius
    #[wasm_bindgen(constructor)]
    pub fn new(boundary_radius: f32) -> Result<World, JsValue> {
        let core = WorldCore::new(boundary_radius).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    /// Build a full world from a JSON world description
    #[wasm_bindgen(js_name = fromDescription)]
    pub fn from_description(json: String) -> Result<World, JsValue> {
        let core = WorldCore::from_description_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn boundary_radius(&self) -> f32 { self.core.boundary_radius() }

    #[wasm_bindgen(getter)]
    pub fn player_x(&self) -> f32 { self.core.player().x }

    #[wasm_bindgen(getter)]
    pub fn player_z(&self) -> f32 { self.core.player().z }

    /// Facing angle in radians, atan2(x, z)
    #[wasm_bindgen(getter)]
    pub fn heading(&self) -> f32 { self.core.heading() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Whether the pirate warning banner should show
    #[wasm_bindgen(getter)]
    pub fn near_shore(&self) -> bool { self.core.near_shore() }

    #[wasm_bindgen(getter)]
    pub fn obstacle_count(&self) -> usize { self.core.obstacle_count() }

    #[wasm_bindgen(getter)]
    pub fn region_count(&self) -> usize { self.core.region_count() }

    #[wasm_bindgen(getter)]
    pub fn landmark_count(&self) -> usize { self.core.landmark_count() }

    #[wasm_bindgen(getter)]
    pub fn discovered_count(&self) -> usize { self.core.discovered_count() }

    pub fn set_spawn(&mut self, x: f32, z: f32) -> Result<(), JsValue> {
        self.core.set_spawn(x, z).map_err(|e| JsValue::from_str(&e))
    }

    pub fn set_walk_speed(&mut self, speed: f32) -> Result<(), JsValue> {
        self.core
            .set_locomotion(LocomotionDesc::Direct { speed })
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn set_inertial(&mut self, accel: f32, drag: f32, max_speed: f32) -> Result<(), JsValue> {
        self.core
            .set_locomotion(LocomotionDesc::Inertial { accel, drag, max_speed })
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Register a circular collider (tree, rock, landmark base)
    pub fn add_circle_obstacle(&mut self, x: f32, z: f32, radius: f32) -> Result<(), JsValue> {
        self.core
            .add_circle_obstacle(x, z, radius)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Register a closed building footprint (no way in)
    pub fn add_building(
        &mut self,
        min_x: f32,
        min_z: f32,
        max_x: f32,
        max_z: f32,
        wall_thickness: f32,
    ) -> Result<(), JsValue> {
        self.core
            .add_building(min_x, min_z, max_x, max_z, wall_thickness, None)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Register a building footprint with a doorway gap
    #[allow(clippy::too_many_arguments)]
    pub fn add_building_with_doorway(
        &mut self,
        min_x: f32,
        min_z: f32,
        max_x: f32,
        max_z: f32,
        wall_thickness: f32,
        door_min_x: f32,
        door_max_x: f32,
        door_min_z: f32,
        door_max_z: f32,
    ) -> Result<(), JsValue> {
        let doorway = Doorway {
            min_x: door_min_x,
            max_x: door_max_x,
            min_z: door_min_z,
            max_z: door_max_z,
        };
        self.core
            .add_building(min_x, min_z, max_x, max_z, wall_thickness, Some(doorway))
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Register a one-shot region of interest
    pub fn add_region(
        &mut self,
        id: String,
        x: f32,
        z: f32,
        radius: f32,
        message: String,
    ) -> Result<(), JsValue> {
        self.core
            .add_region(&id, x, z, radius, &message)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Register a clickable landmark; pass a radius to also block movement
    pub fn add_landmark(
        &mut self,
        id: String,
        x: f32,
        z: f32,
        collider_radius: Option<f32>,
    ) -> Result<(), JsValue> {
        self.core
            .add_landmark(&id, x, z, collider_radius)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Advance one frame with the currently-held movement keys
    pub fn step(&mut self, left: bool, right: bool, forward: bool, back: bool) {
        self.core.step(InputSnapshot::new(left, right, forward, back));
    }

    /// Frontend click on a landmark; true when the player stood close enough
    pub fn discover(&mut self, id: String) -> bool {
        self.core.discover(&id)
    }

    /// Take all queued events as a JSON array
    pub fn drain_events(&mut self) -> String {
        self.core.drain_events_json()
    }

    /// Session restart: respawn and clear every one-shot flag
    pub fn reset(&mut self) {
        self.core.reset();
    }
}
