//! Per-frame input snapshot.
//!
//! The frontend tracks which movement keys are held and hands the engine a
//! snapshot every frame; no key handler state lives on this side.

use crate::core::vec2::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub forward: bool,
    pub back: bool,
}

impl InputSnapshot {
    pub fn new(left: bool, right: bool, forward: bool, back: bool) -> Self {
        Self { left, right, forward, back }
    }

    pub fn idle() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        !(self.left || self.right || self.forward || self.back)
    }

    /// Unit direction for this snapshot; diagonals are normalized so they
    /// are no faster than cardinal movement. Forward is -z (camera looks
    /// down +z at the avatar).
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::zero();
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        if self.forward {
            dir.z -= 1.0;
        }
        if self.back {
            dir.z += 1.0;
        }
        dir.normalize()
    }
}
