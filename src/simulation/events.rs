//! Events queued during a frame and drained by the frontend as JSON.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorldEvent {
    /// One-shot: the player walked into a region of interest for the first
    /// time this session. Carries the anchor for external label placement.
    RegionEntered { id: String, x: f32, z: f32, message: String },
    /// The shore-warning banner should toggle.
    ShoreWarning { active: bool },
    /// A landmark click within discovery range succeeded.
    Discovered { id: String },
}

pub(super) fn drain_to_json(events: &mut Vec<WorldEvent>) -> String {
    let drained = std::mem::take(events);
    serde_json::to_string(&drained).unwrap_or_else(|_| "[]".to_string())
}
