use island_engine::{InputSnapshot, WorldCore, WorldDescription};

const ISLAND_JSON: &str = r#"{
    "boundary_radius": 75.0,
    "spawn": [0.0, 10.0],
    "locomotion": { "mode": "direct", "speed": 0.28 },
    "obstacles": [
        { "kind": "circle", "x": -12.0, "z": 8.0, "radius": 1.2 },
        { "kind": "circle", "x": 20.0, "z": -15.0, "radius": 2.0 },
        {
            "kind": "building",
            "min_x": 30.0, "min_z": 30.0, "max_x": 44.0, "max_z": 42.0,
            "wall_thickness": 1.5,
            "doorway": { "min_x": 35.0, "max_x": 39.0, "min_z": 40.5, "max_z": 42.0 }
        }
    ],
    "regions": [
        { "id": "temple", "x": 37.0, "z": 36.0, "radius": 18.0,
          "message": "You sense an ancient structure nearby" }
    ],
    "landmarks": [
        { "id": "windmill", "x": -30.0, "z": -20.0, "collider_radius": 3.0 },
        { "id": "treasure", "x": 12.0, "z": 40.0 }
    ]
}"#;

#[test]
fn description_smoke_parses_and_builds() {
    let desc = WorldDescription::from_json(ISLAND_JSON).expect("island description should parse");
    assert_eq!(desc.obstacles.len(), 3);

    let world = WorldCore::from_description(&desc).expect("island description should build");

    // Two circles, one building, plus the windmill's collider base.
    assert_eq!(world.obstacle_count(), 4);
    assert_eq!(world.region_count(), 1);
    assert_eq!(world.landmark_count(), 2);
    assert_eq!(world.discovered_count(), 0);
    assert_eq!(world.boundary_radius(), 75.0);
    assert_eq!((world.player().x, world.player().z), (0.0, 10.0));
}

#[test]
fn description_round_trips_through_json() {
    let desc = WorldDescription::from_json(ISLAND_JSON).unwrap();
    let echoed = WorldDescription::from_json(&desc.to_json()).expect("echoed JSON should parse");
    assert_eq!(echoed.boundary_radius, desc.boundary_radius);
    assert_eq!(echoed.obstacles.len(), desc.obstacles.len());
    assert_eq!(echoed.regions.len(), desc.regions.len());
    assert_eq!(echoed.landmarks.len(), desc.landmarks.len());
}

#[test]
fn built_world_steps_and_reports() {
    let mut world = WorldCore::from_description_json(ISLAND_JSON).unwrap();

    // Walk toward the temple region until its one-shot fires.
    let input = InputSnapshot::new(false, true, false, true); // +x, +z
    for _ in 0..300 {
        world.step(input);
    }

    let events = world.drain_events();
    let entered = events
        .iter()
        .filter(|e| matches!(e, island_engine::WorldEvent::RegionEntered { id, .. } if id == "temple"))
        .count();
    assert_eq!(entered, 1);
    assert!(world.frame() >= 300);
}

#[test]
fn degenerate_descriptions_are_rejected() {
    let bad_radius = ISLAND_JSON.replace("\"radius\": 1.2", "\"radius\": -1.0");
    let err = WorldCore::from_description_json(&bad_radius).unwrap_err();
    assert!(err.contains("radius"), "error should name the problem: {}", err);

    assert!(WorldCore::from_description_json("{\"boundary_radius\": 0}").is_err());
    assert!(WorldCore::from_description_json("not json").is_err());
}
