//! Facade smoke test for the wasm target
//! (run with `wasm-pack test --node` or `cargo test --target wasm32-unknown-unknown`).

#![cfg(target_arch = "wasm32")]

use island_engine::World;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn facade_builds_steps_and_drains() {
    let mut world = World::new(75.0).expect("valid radius");
    world.add_circle_obstacle(10.0, 0.0, 2.0).expect("valid collider");
    world
        .add_region("cove".to_string(), 0.0, -3.0, 5.0, "A hidden cove".to_string())
        .expect("valid region");
    world
        .add_landmark("wreck".to_string(), 2.0, 0.0, Some(1.0))
        .expect("valid landmark");

    assert_eq!(world.obstacle_count(), 2);

    world.step(false, false, true, false);
    assert!(world.player_z() < 0.0);
    assert_eq!(world.player_x(), 0.0);
    assert_eq!(world.frame(), 1);

    assert!(world.discover("wreck".to_string()));
    assert_eq!(world.discovered_count(), 1);

    let events = world.drain_events();
    assert!(events.contains("region_entered"));
    assert!(events.contains("discovered"));
    assert_eq!(world.drain_events(), "[]");
}

#[wasm_bindgen_test]
fn facade_surfaces_configuration_errors() {
    assert!(World::new(-1.0).is_err());

    let mut world = World::new(75.0).unwrap();
    assert!(world.add_circle_obstacle(0.0, 0.0, 0.0).is_err());
    assert!(world.set_walk_speed(-0.1).is_err());
    assert!(world.set_inertial(0.1, 1.5, 0.5).is_err());
}

#[wasm_bindgen_test]
fn facade_loads_a_description() {
    let json = r#"{
        "boundary_radius": 40.0,
        "spawn": [0.0, 5.0],
        "obstacles": [{ "kind": "circle", "x": 10.0, "z": 10.0, "radius": 1.5 }]
    }"#;
    let world = World::from_description(json.to_string()).expect("description should build");
    assert_eq!(world.boundary_radius(), 40.0);
    assert_eq!(world.obstacle_count(), 1);
    assert_eq!(world.player_z(), 5.0);
}
