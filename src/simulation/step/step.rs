use crate::systems::input::InputSnapshot;
use crate::systems::movement;

use super::WorldCore;

/// One frame: displace, resolve contacts, face, then report proximity.
pub(super) fn step(world: &mut WorldCore, input: InputSnapshot) {
    let delta = world.locomotion.displacement(input.direction());

    if delta.length_squared() > 0.0 {
        let resolved =
            movement::resolve(world.player, delta, world.boundary_radius, &world.obstacles);
        let effective = resolved.position - world.player;
        if resolved.contact {
            // Carry the bounce (or stop) into next frame's velocity.
            world.locomotion.settle(effective);
        }
        world.player = resolved.position;

        // Face where we actually went, not where we asked to go.
        if !input.is_idle() && effective.length_squared() > 0.0 {
            world.heading = effective.angle();
        }
    }

    world.proximity.update(
        world.player,
        world.boundary_radius,
        &world.regions,
        &mut world.events,
    );

    world.frame += 1;
}
