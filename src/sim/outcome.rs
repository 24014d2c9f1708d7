//! Game over check
//!
//! The ball is lost once its diameter exceeds the opening of the ring it was
//! measured against. The opening uses `radius * gap_size` (arc length), not
//! the true chord `2 * radius * sin(gap_size / 2)`.

use super::state::{GameStatus, Ring};

/// Returns true if a ball of `ball_radius` can no longer fit through `ring`
#[inline]
pub fn ball_too_big(ball_radius: f32, ring: &Ring) -> bool {
    2.0 * ball_radius > ring.gap_length()
}

/// Decide the post-tick status.
///
/// `measured` is the ring that was innermost when the tick began. Nothing
/// changes once a terminal status is reached, or when no ring was measured.
pub fn evaluate(status: GameStatus, ball_radius: f32, measured: Option<&Ring>) -> GameStatus {
    if status.is_terminal() {
        return status;
    }

    match measured {
        Some(ring) if ball_too_big(ball_radius, ring) => GameStatus::GameOver,
        _ => status,
    }
}
