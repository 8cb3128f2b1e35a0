//! Proximity flags, shore warning, and discovery range gating.

use crate::core::vec2::Vec2;
use crate::domain::regions::{Landmark, Region, DISCOVERY_RANGE};
use crate::simulation::events::WorldEvent;

/// The pirate warning shows within this many units of the shoreline.
pub const SHORE_MARGIN: f32 = 6.0;

/// Tracks which one-shot region flags have fired and whether the player is
/// near the shore. Flags never reset within a session.
#[derive(Clone, Debug, Default)]
pub struct ProximityTracker {
    fired: Vec<bool>,
    near_shore: bool,
}

impl ProximityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when a region is registered so flags stay index-aligned.
    pub fn on_region_added(&mut self) {
        self.fired.push(false);
    }

    pub fn near_shore(&self) -> bool {
        self.near_shore
    }

    pub fn reset(&mut self) {
        for flag in &mut self.fired {
            *flag = false;
        }
        self.near_shore = false;
    }

    /// Run the per-frame proximity pass after position resolution.
    pub fn update(
        &mut self,
        player: Vec2,
        boundary_radius: f32,
        regions: &[Region],
        events: &mut Vec<WorldEvent>,
    ) {
        for (idx, region) in regions.iter().enumerate() {
            if self.fired[idx] {
                continue;
            }
            if player.distance(region.anchor) < region.radius {
                self.fired[idx] = true;
                events.push(WorldEvent::RegionEntered {
                    id: region.id.clone(),
                    x: region.anchor.x,
                    z: region.anchor.z,
                    message: region.message.clone(),
                });
            }
        }

        let near = player.length() >= boundary_radius - SHORE_MARGIN;
        if near != self.near_shore {
            self.near_shore = near;
            events.push(WorldEvent::ShoreWarning { active: near });
        }
    }
}

/// Gate a frontend click on walking distance. Marks the landmark
/// discovered and reports the event when the player is close enough.
pub fn try_discover(
    player: Vec2,
    landmarks: &mut [Landmark],
    id: &str,
    events: &mut Vec<WorldEvent>,
) -> bool {
    let Some(landmark) = landmarks.iter_mut().find(|l| l.id == id) else {
        return false;
    };
    if player.distance(landmark.anchor) >= DISCOVERY_RANGE {
        return false;
    }
    landmark.discovered = true;
    events.push(WorldEvent::Discovered { id: landmark.id.clone() });
    true
}
