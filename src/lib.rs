//! Island Engine - Movement and collision core for the walkable-island game
//!
//! The JS frontend owns rendering, camera follow, audio, and the DOM; this
//! crate owns the player's position on the island and everything that
//! constrains it.
//!
//! Architecture:
//! - core/        - Vector math
//! - domain/      - Obstacles, regions, world description
//! - systems/     - Input snapshot, movement resolver, proximity
//! - simulation/  - Orchestration and the wasm facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use crate::core::vec2::Vec2;
pub use domain::description::WorldDescription;
pub use domain::obstacles::{Doorway, Obstacle};
pub use domain::regions::{Landmark, Region};
pub use simulation::events::WorldEvent;
pub use simulation::{World, WorldCore};
pub use systems::input::InputSnapshot;
pub use systems::movement::Locomotion;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🏝️ Island WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
