use crate::domain::obstacles::{Doorway, Obstacle};
use crate::domain::regions::{Landmark, Region};
use crate::systems::proximity;

use super::events::{self, WorldEvent};
use super::WorldCore;

pub(super) fn add_circle_obstacle(
    world: &mut WorldCore,
    x: f32,
    z: f32,
    radius: f32,
) -> Result<(), String> {
    world.obstacles.push(Obstacle::circle(x, z, radius)?);
    Ok(())
}

pub(super) fn add_building(
    world: &mut WorldCore,
    min_x: f32,
    min_z: f32,
    max_x: f32,
    max_z: f32,
    wall_thickness: f32,
    doorway: Option<Doorway>,
) -> Result<(), String> {
    world
        .obstacles
        .push(Obstacle::rect(min_x, min_z, max_x, max_z, wall_thickness, doorway)?);
    Ok(())
}

pub(super) fn add_region(
    world: &mut WorldCore,
    id: &str,
    x: f32,
    z: f32,
    radius: f32,
    message: &str,
) -> Result<(), String> {
    if world.regions.iter().any(|r| r.id == id) {
        return Err(format!("region '{}' is already registered", id));
    }
    world.regions.push(Region::new(id, x, z, radius, message)?);
    world.proximity.on_region_added();
    Ok(())
}

pub(super) fn add_landmark(
    world: &mut WorldCore,
    id: &str,
    x: f32,
    z: f32,
    collider_radius: Option<f32>,
) -> Result<(), String> {
    if world.landmarks.iter().any(|l| l.id == id) {
        return Err(format!("landmark '{}' is already registered", id));
    }
    if let Some(radius) = collider_radius {
        world.obstacles.push(Obstacle::circle(x, z, radius)?);
    }
    world.landmarks.push(Landmark::new(id, x, z));
    Ok(())
}

pub(super) fn discover(world: &mut WorldCore, id: &str) -> bool {
    proximity::try_discover(world.player, &mut world.landmarks, id, &mut world.events)
}

pub(super) fn drain_events(world: &mut WorldCore) -> Vec<WorldEvent> {
    std::mem::take(&mut world.events)
}

pub(super) fn drain_events_json(world: &mut WorldCore) -> String {
    events::drain_to_json(&mut world.events)
}

pub(super) fn reset(world: &mut WorldCore) {
    world.player = world.spawn;
    world.heading = 0.0;
    world.locomotion.halt();
    world.proximity.reset();
    for landmark in &mut world.landmarks {
        landmark.discovered = false;
    }
    world.events.clear();
    world.frame = 0;
}
