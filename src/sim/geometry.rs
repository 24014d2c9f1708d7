//! Angle and gap arithmetic plus velocity reflection
//!
//! Every angle handed to these functions is expected to be pre-normalized
//! to [0, 2π) via [`crate::normalize_angle`].

use glam::Vec2;
use std::f32::consts::TAU;

/// Check if an angle lies inside a ring gap.
///
/// The gap starts at `gap_start` and spans `gap_size` radians counter-clockwise.
/// When the gap crosses zero the test splits into two half ranges.
pub fn is_in_gap(angle: f32, gap_start: f32, gap_size: f32) -> bool {
    let gap_end = (gap_start + gap_size) % TAU;

    if gap_start < gap_end {
        // No wraparound
        angle >= gap_start && angle <= gap_end
    } else {
        // Wraparound case (e.g., start=350°, end=20°)
        angle >= gap_start || angle <= gap_end
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n. `normal` must be unit length.
#[inline]
pub fn reflect(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Rotate a vector counter-clockwise by `theta` radians
#[inline]
pub fn rotate(v: Vec2, theta: f32) -> Vec2 {
    let (sin, cos) = theta.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}
