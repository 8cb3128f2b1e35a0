//! Long random-ish walks must never leave the island or end up inside a
//! collider, no matter how the player mashes the keys.

use island_engine::{InputSnapshot, Vec2, WorldCore, WorldEvent};

const TREES: &[(f32, f32, f32)] = &[
    (18.0, 4.0, 1.1),
    (-25.0, 12.0, 1.4),
    (8.0, -30.0, 1.0),
    (-10.0, -44.0, 1.6),
    (40.0, 25.0, 1.2),
    (-50.0, -8.0, 2.2),
    (0.0, 52.0, 2.8),
];

fn island() -> WorldCore {
    let mut world = WorldCore::new(75.0).unwrap();
    for &(x, z, r) in TREES {
        world.add_circle_obstacle(x, z, r).unwrap();
    }
    world
}

fn assert_invariants(world: &WorldCore) {
    let p = world.player();
    assert!(
        p.length() <= 75.0 + 1e-3,
        "player left the island at ({}, {})",
        p.x,
        p.z
    );
    for &(x, z, r) in TREES {
        assert!(
            p.distance(Vec2::new(x, z)) >= r - 1e-3,
            "player inside the tree at ({}, {})",
            x,
            z
        );
    }
}

#[test]
fn holding_a_diagonal_never_escapes_the_island() {
    let mut world = island();
    let input = InputSnapshot::new(false, true, true, false); // +x, -z
    for _ in 0..2000 {
        world.step(input);
        assert_invariants(&world);
        assert!(world.heading().is_finite());
    }

    // 2000 frames toward the shore must have tripped the pirate warning.
    assert!(world
        .drain_events()
        .iter()
        .any(|e| matches!(e, WorldEvent::ShoreWarning { active: true })));
}

#[test]
fn cycling_all_directions_keeps_invariants() {
    let mut world = island();
    let inputs = [
        InputSnapshot::new(true, false, false, false),
        InputSnapshot::new(true, false, true, false),
        InputSnapshot::new(false, false, true, false),
        InputSnapshot::new(false, true, true, false),
        InputSnapshot::new(false, true, false, false),
        InputSnapshot::new(false, true, false, true),
        InputSnapshot::new(false, false, false, true),
        InputSnapshot::new(true, false, false, true),
    ];
    for frame in 0..4000 {
        world.step(inputs[(frame / 125) % inputs.len()]);
        assert_invariants(&world);
    }
}

#[test]
fn near_shore_signal_matches_player_distance() {
    let mut world = island();
    let input = InputSnapshot::new(false, false, false, true); // +z, toward the shore
    for _ in 0..600 {
        world.step(input);
        let expected = world.player().length() >= 75.0 - 6.0;
        assert_eq!(world.near_shore(), expected);
    }
}
