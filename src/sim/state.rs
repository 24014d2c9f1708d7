//! Game state and core simulation types
//!
//! Everything the render sink needs to draw a frame lives here.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::level::LevelConfig;

/// Current status of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Ball is still trapped inside at least one ring
    #[default]
    Playing,
    /// Ball grew too big for the innermost gap
    GameOver,
    /// Every ring was escaped
    Success,
}

impl GameStatus {
    /// Terminal statuses never change again
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// A rotating ring with a single gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    /// Distance from the ring center
    pub radius: f32,
    /// Angular width of the gap (radians)
    pub gap_size: f32,
    /// Rotation speed in radians/sec (signed)
    pub angular_speed: f32,
    /// Current gap start angle (radians, not wrapped)
    pub rotation: f32,
    /// Cosmetic hit counter, drops on every bounce
    pub hue: f32,
}

impl Ring {
    pub fn new(radius: f32, gap_size: f32, angular_speed: f32) -> Self {
        Self {
            radius,
            gap_size,
            angular_speed,
            rotation: 0.0,
            hue: RING_BASE_HUE,
        }
    }

    /// Advance rotation by angular speed * dt
    #[inline]
    pub fn rotate(&mut self, dt: f32) {
        self.rotation += self.angular_speed * dt;
    }

    /// Darken the ring after a bounce
    pub fn mark_hit(&mut self) {
        self.hue = (self.hue - RING_HUE_STEP).max(0.0);
    }

    /// Arc-length stand-in for the gap opening (radius * gap angle)
    #[inline]
    pub fn gap_length(&self) -> f32 {
        self.radius * self.gap_size
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity in units/sec
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Integrate position over one step
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Rings ordered innermost first. Only the front ring is ever collidable,
/// and rings only ever leave from the front.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RingSequence {
    rings: VecDeque<Ring>,
}

impl RingSequence {
    pub fn new(rings: impl IntoIterator<Item = Ring>) -> Self {
        Self {
            rings: rings.into_iter().collect(),
        }
    }

    /// The innermost ring, if any remain
    pub fn innermost(&self) -> Option<&Ring> {
        self.rings.front()
    }

    pub fn innermost_mut(&mut self) -> Option<&mut Ring> {
        self.rings.front_mut()
    }

    /// Remove the innermost ring (O(1))
    pub fn pop_innermost(&mut self) -> Option<Ring> {
        self.rings.pop_front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ring> {
        self.rings.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Ring> {
        self.rings.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Fixed center every ring shares
    pub center: Vec2,
    /// Remaining rings, innermost first
    pub rings: RingSequence,
    pub ball: Ball,
    pub status: GameStatus,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Rings escaped so far
    pub escapes: u32,
    /// Bounces off ring walls so far
    pub bounces: u32,
}

impl GameState {
    /// Build a fresh state from a validated level
    pub fn new(level: &LevelConfig, center: Vec2) -> Self {
        let rings = level
            .rings
            .iter()
            .map(|def| Ring::new(def.radius, def.gap_size, def.angular_speed));

        Self {
            center,
            rings: RingSequence::new(rings),
            ball: level.ball.to_ball(),
            status: GameStatus::Playing,
            time_ticks: 0,
            escapes: 0,
            bounces: 0,
        }
    }

    /// Ball position relative to the ring center
    #[inline]
    pub fn ball_offset(&self) -> Vec2 {
        self.ball.pos - self.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_hue_floors_at_zero() {
        let mut ring = Ring::new(80.0, 1.0, 0.0);
        for _ in 0..100 {
            ring.mark_hit();
        }
        assert_eq!(ring.hue, 0.0);
    }

    #[test]
    fn test_ring_sequence_pops_front() {
        let mut rings = RingSequence::new([
            Ring::new(80.0, 1.0, 0.0),
            Ring::new(100.0, 1.0, 0.0),
        ]);
        assert_eq!(rings.innermost().map(|r| r.radius), Some(80.0));
        rings.pop_innermost();
        assert_eq!(rings.innermost().map(|r| r.radius), Some(100.0));
        assert_eq!(rings.len(), 1);
    }

    #[test]
    fn test_new_state_from_default_level() {
        let level = LevelConfig::default();
        let state = GameState::new(&level, Vec2::new(200.0, 200.0));
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.rings.len(), 5);
        assert_eq!(state.ball.radius, 8.0);
        assert!(state.rings.iter().all(|r| r.rotation == 0.0 && r.hue == RING_BASE_HUE));
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!GameStatus::Playing.is_terminal());
        assert!(GameStatus::GameOver.is_terminal());
        assert!(GameStatus::Success.is_terminal());
    }
}
