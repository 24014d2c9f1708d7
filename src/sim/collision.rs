//! Ball vs innermost ring: escape or bounce
//!
//! Only the innermost ring is ever tested. Once the ball touches or crosses
//! its boundary it either lies inside the gap (escape) or hits the solid arc
//! (bounce). The two outcomes are mutually exclusive within a tick.

use glam::Vec2;

use super::geometry::{is_in_gap, reflect, rotate};
use super::jitter::JitterSource;
use super::state::{GameState, GameStatus};
use crate::consts::*;
use crate::{cartesian_to_polar, normalize_angle};

/// What happened between the ball and the innermost ring this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contact {
    /// Ball is strictly inside the ring (or sits exactly at the center)
    None,
    /// Ball hit the solid part of the ring at `angle` (radians, [0, 2π))
    Bounced { angle: f32, normal: Vec2 },
    /// Ball passed through the gap; `remaining` rings are left
    Escaped { remaining: usize },
    /// Ball passed through the last ring's gap
    Cleared,
}

/// Resolve the ball against the innermost ring.
///
/// Expects the ball position to already be advanced for this tick. Callers
/// must not invoke this on an empty ring sequence; if they do, nothing happens.
pub fn resolve_contact(state: &mut GameState, jitter: &mut impl JitterSource) -> Contact {
    let Some(ring) = state.rings.innermost() else {
        return Contact::None;
    };

    let offset = state.ball_offset();
    let (dist, heading) = cartesian_to_polar(offset);

    if dist < ring.radius - state.ball.radius {
        return Contact::None;
    }

    // Ball at the exact center has no defined normal; skip this tick
    if dist <= f32::EPSILON {
        return Contact::None;
    }

    let angle = normalize_angle(heading);
    let gap_start = normalize_angle(ring.rotation);

    if is_in_gap(angle, gap_start, ring.gap_size) {
        state.rings.pop_innermost();
        state.escapes += 1;

        if state.rings.is_empty() {
            state.status = GameStatus::Success;
            return Contact::Cleared;
        }

        state.ball.radius += ESCAPE_GROWTH;
        state.ball.vel *= ESCAPE_SPEED_BOOST;
        return Contact::Escaped {
            remaining: state.rings.len(),
        };
    }

    // Bounce off the solid arc
    state.ball.radius += BOUNCE_GROWTH;
    state.bounces += 1;
    if let Some(ring) = state.rings.innermost_mut() {
        ring.mark_hit();
    }

    // Points from the center toward the ball
    let normal = offset / dist;
    let reflected = reflect(state.ball.vel, normal);

    // Push back inside so the next tick doesn't re-trigger the same hit
    state.ball.pos -= normal * BOUNCE_PUSHBACK;
    state.ball.vel = rotate(reflected, jitter.angle());

    Contact::Bounced { angle, normal }
}
