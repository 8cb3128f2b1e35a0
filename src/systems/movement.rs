//! Movement and collision resolution.
//!
//! The island boundary and circular colliders are bouncy surfaces: a
//! blocked move is reflected about the contact normal and damped, with
//! axis-separated sliding as the fallback. Building walls are not bouncy;
//! they simply veto the move. Only the first colliding obstacle is
//! resolved per frame, and a frame that cannot be resolved leaves the
//! player where they were.

use crate::core::vec2::Vec2;
use crate::domain::description::LocomotionDesc;
use crate::domain::obstacles::Obstacle;

/// Walk speed of the original island, world units per frame.
pub const DEFAULT_SPEED: f32 = 0.28;
/// Keep-out margin inside the shoreline.
pub const BOUNDARY_EPSILON: f32 = 0.2;
/// Scale applied to a reflected displacement before re-testing it.
pub const REFLECT_DAMPING: f32 = 0.6;

/// How the input snapshot turns into a per-frame displacement.
#[derive(Clone, Copy, Debug)]
pub enum Locomotion {
    Direct { speed: f32 },
    Inertial { accel: f32, drag: f32, max_speed: f32, velocity: Vec2 },
}

impl Locomotion {
    pub fn from_desc(desc: LocomotionDesc) -> Result<Self, String> {
        match desc {
            LocomotionDesc::Direct { speed } => {
                if speed <= 0.0 {
                    return Err(format!("locomotion speed must be positive, got {}", speed));
                }
                Ok(Locomotion::Direct { speed })
            }
            LocomotionDesc::Inertial { accel, drag, max_speed } => {
                if accel <= 0.0 || max_speed <= 0.0 {
                    return Err(format!(
                        "inertial locomotion needs positive accel and max_speed, got {} / {}",
                        accel, max_speed
                    ));
                }
                if !(0.0..=1.0).contains(&drag) {
                    return Err(format!("drag factor must be in 0..=1, got {}", drag));
                }
                Ok(Locomotion::Inertial { accel, drag, max_speed, velocity: Vec2::zero() })
            }
        }
    }

    /// Requested displacement for this frame given a unit input direction.
    pub fn displacement(&mut self, dir: Vec2) -> Vec2 {
        match self {
            Locomotion::Direct { speed } => dir * *speed,
            Locomotion::Inertial { accel, drag, max_speed, velocity } => {
                let mut v = (*velocity + dir * *accel) * *drag;
                let len = v.length();
                if len > *max_speed {
                    v = v * (*max_speed / len);
                }
                *velocity = v;
                v
            }
        }
    }

    /// Replace the carried velocity after a contact altered the move, so a
    /// bounce carries into the next frame instead of fighting it.
    pub fn settle(&mut self, effective: Vec2) {
        if let Locomotion::Inertial { velocity, .. } = self {
            *velocity = effective;
        }
    }

    pub fn halt(&mut self) {
        if let Locomotion::Inertial { velocity, .. } = self {
            *velocity = Vec2::zero();
        }
    }
}

/// Outcome of one frame of movement resolution.
#[derive(Clone, Copy, Debug)]
pub struct Resolution {
    pub position: Vec2,
    /// True when the boundary or an obstacle altered or vetoed the move.
    pub contact: bool,
}

/// Resolve one frame of movement against the boundary and obstacle set.
pub fn resolve(
    current: Vec2,
    delta: Vec2,
    boundary_radius: f32,
    obstacles: &[Obstacle],
) -> Resolution {
    if delta.length_squared() == 0.0 {
        return Resolution { position: current, contact: false };
    }

    let next = current + delta;

    // Shoreline bounce.
    let dist_to_center = next.length();
    if dist_to_center > boundary_radius - BOUNDARY_EPSILON {
        let normal = next * (1.0 / dist_to_center);
        let bounced = current + delta.reflect(normal) * REFLECT_DAMPING;
        let position = if bounced.length() <= boundary_radius - BOUNDARY_EPSILON {
            bounced
        } else {
            current
        };
        return Resolution { position, contact: true };
    }

    // First colliding obstacle wins; later overlaps wait for next frame.
    for obstacle in obstacles {
        if !obstacle.blocks(next) {
            continue;
        }
        let position = match *obstacle {
            Obstacle::Circle { center, radius } => {
                resolve_circle(current, delta, next, center, radius, boundary_radius)
                    .unwrap_or(current)
            }
            // Walls have no bounce; the move is vetoed outright.
            Obstacle::Rect { .. } => current,
        };
        return Resolution { position, contact: true };
    }

    Resolution { position: next, contact: false }
}

/// Bounce off a circular collider, falling back to axis-separated sliding.
/// None means neither resolution cleared the collider.
fn resolve_circle(
    current: Vec2,
    delta: Vec2,
    next: Vec2,
    center: Vec2,
    radius: f32,
    boundary_radius: f32,
) -> Option<Vec2> {
    let to_next = next - center;
    let dist = to_next.length();
    let normal = if dist > f32::EPSILON {
        to_next * (1.0 / dist)
    } else {
        // Dead center of the collider; any normal works.
        Vec2::new(1.0, 0.0)
    };

    let bounced = current + delta.reflect(normal) * REFLECT_DAMPING;
    if bounced.distance(center) >= radius && bounced.length() <= boundary_radius {
        return Some(bounced);
    }

    let try_x = current + Vec2::new(delta.x, 0.0);
    if try_x.distance(center) >= radius && try_x.length() <= boundary_radius {
        return Some(try_x);
    }
    let try_z = current + Vec2::new(0.0, delta.z);
    if try_z.distance(center) >= radius && try_z.length() <= boundary_radius {
        return Some(try_z);
    }

    None
}
