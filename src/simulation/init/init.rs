use crate::core::vec2::Vec2;
use crate::domain::description::{ObstacleDesc, WorldDescription};
use crate::domain::obstacles::Doorway;
use crate::systems::movement::Locomotion;
use crate::systems::proximity::ProximityTracker;

use super::WorldCore;

pub(super) fn create_world_core(boundary_radius: f32) -> Result<WorldCore, String> {
    if boundary_radius <= 0.0 {
        return Err(format!("boundary radius must be positive, got {}", boundary_radius));
    }
    Ok(WorldCore {
        boundary_radius,
        obstacles: Vec::new(),
        regions: Vec::new(),
        landmarks: Vec::new(),
        spawn: Vec2::zero(),
        player: Vec2::zero(),
        heading: 0.0,
        locomotion: Locomotion::from_desc(Default::default())?,
        proximity: ProximityTracker::new(),
        events: Vec::new(),
        frame: 0,
    })
}

pub(super) fn create_world_from_description(desc: &WorldDescription) -> Result<WorldCore, String> {
    let mut world = create_world_core(desc.boundary_radius)?;
    world.set_spawn(desc.spawn[0], desc.spawn[1])?;
    world.set_locomotion(desc.locomotion)?;

    for obstacle in &desc.obstacles {
        match *obstacle {
            ObstacleDesc::Circle { x, z, radius } => {
                world.add_circle_obstacle(x, z, radius)?;
            }
            ObstacleDesc::Building { min_x, min_z, max_x, max_z, wall_thickness, doorway } => {
                let doorway = doorway.map(|d| Doorway {
                    min_x: d.min_x,
                    max_x: d.max_x,
                    min_z: d.min_z,
                    max_z: d.max_z,
                });
                world.add_building(min_x, min_z, max_x, max_z, wall_thickness, doorway)?;
            }
        }
    }
    for region in &desc.regions {
        world.add_region(&region.id, region.x, region.z, region.radius, &region.message)?;
    }
    for landmark in &desc.landmarks {
        world.add_landmark(&landmark.id, landmark.x, landmark.z, landmark.collider_radius)?;
    }

    Ok(world)
}
