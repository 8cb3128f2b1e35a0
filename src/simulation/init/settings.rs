use crate::core::vec2::Vec2;
use crate::domain::description::LocomotionDesc;
use crate::systems::movement::Locomotion;

use super::WorldCore;

pub(super) fn set_spawn(world: &mut WorldCore, x: f32, z: f32) -> Result<(), String> {
    let spawn = Vec2::new(x, z);
    if spawn.length() > world.boundary_radius {
        return Err(format!(
            "spawn ({}, {}) lies outside the boundary radius {}",
            x, z, world.boundary_radius
        ));
    }
    world.spawn = spawn;
    // Spawn moves the player too until the session has started.
    if world.frame == 0 {
        world.player = spawn;
    }
    Ok(())
}

pub(super) fn set_locomotion(world: &mut WorldCore, desc: LocomotionDesc) -> Result<(), String> {
    world.locomotion = Locomotion::from_desc(desc)?;
    Ok(())
}
