//! Ring Escape - a ball trapped inside concentric rotating rings
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, game state)
//! - `clock`: Fixed timestep accumulator
//! - `runner`: Frame-driven simulation loop with cancellation
//! - `level`: Level configuration and validation
//! - `error`: Configuration errors
//! - `renderer`: Render sink interface and CPU-side frame building
//! - `settings`: Runtime settings

pub mod clock;
pub mod error;
pub mod level;
pub mod renderer;
pub mod runner;
pub mod settings;
pub mod sim;

pub use clock::FixedStepClock;
pub use error::ConfigError;
pub use level::LevelConfig;
pub use runner::{FrameReport, FrameRequest, FrameScheduler, ManualScheduler, SimulationLoop};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    /// Largest wall-clock delta accepted per frame (bounds catch-up after a stall)
    pub const MAX_FRAME_DELTA: f32 = 0.1;

    /// Radius added to the ball each time it escapes a ring
    pub const ESCAPE_GROWTH: f32 = 3.5;
    /// Velocity multiplier applied on every escape (compounds)
    pub const ESCAPE_SPEED_BOOST: f32 = 1.05;
    /// Radius added to the ball on every bounce
    pub const BOUNCE_GROWTH: f32 = 0.05;
    /// Distance the ball is pushed back toward the center after a bounce
    pub const BOUNCE_PUSHBACK: f32 = 1.5;
    /// Half-width of the angular jitter applied to bounces (radians)
    pub const BOUNCE_JITTER: f32 = 0.125;

    /// Starting hue of every ring (degrees)
    pub const RING_BASE_HUE: f32 = 240.0;
    /// Hue lost per bounce, floored at zero
    pub const RING_HUE_STEP: f32 = 8.0;

    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 400.0;
}

/// Normalize angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}
