//! Level configuration
//!
//! A level is the ordered list of rings (innermost first) plus the ball's
//! starting position, velocity and size. Levels are plain data and can be
//! loaded from JSON; ring definitions also accept the `gapSize` / `speed`
//! field names.

use std::f32::consts::{PI, TAU};
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::Ball;

/// Initial definition of one ring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingDef {
    pub radius: f32,
    #[serde(alias = "gapSize")]
    pub gap_size: f32,
    /// Radians per second, signed
    #[serde(alias = "speed", alias = "angularSpeed")]
    pub angular_speed: f32,
}

impl RingDef {
    pub const fn new(radius: f32, gap_size: f32, angular_speed: f32) -> Self {
        Self {
            radius,
            gap_size,
            angular_speed,
        }
    }
}

/// Initial ball definition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallDef {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub r: f32,
}

impl BallDef {
    pub fn to_ball(&self) -> Ball {
        Ball::new(Vec2::new(self.x, self.y), Vec2::new(self.vx, self.vy), self.r)
    }
}

impl Default for BallDef {
    fn default() -> Self {
        Self {
            x: 200.0,
            y: 200.0,
            vx: 160.0,
            vy: 190.0,
            r: 8.0,
        }
    }
}

/// A full level: rings innermost first, plus the ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub rings: Vec<RingDef>,
    #[serde(default)]
    pub ball: BallDef,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            rings: vec![
                RingDef::new(80.0, PI / 2.0, 0.015),
                RingDef::new(100.0, PI / 3.0, -0.014),
                RingDef::new(120.0, PI / 4.0, 0.013),
                RingDef::new(140.0, PI / 5.0, -0.012),
                RingDef::new(160.0, PI / 6.0, 0.011),
            ],
            ball: BallDef::default(),
        }
    }
}

impl LevelConfig {
    /// Check construction-time invariants. Radii must be strictly increasing
    /// by index; this is never re-checked once the simulation runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rings.is_empty() {
            return Err(ConfigError::NoRings);
        }

        let ball = &self.ball;
        if ![ball.x, ball.y, ball.vx, ball.vy, ball.r]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(ConfigError::NonFinite { field: "ball" });
        }
        if ball.r < 0.0 {
            return Err(ConfigError::NegativeBallRadius { radius: ball.r });
        }

        let mut previous: Option<f32> = None;
        for (index, ring) in self.rings.iter().enumerate() {
            if ![ring.radius, ring.gap_size, ring.angular_speed]
                .iter()
                .all(|v| v.is_finite())
            {
                return Err(ConfigError::NonFinite { field: "ring" });
            }
            if ring.radius <= 0.0 {
                return Err(ConfigError::NonPositiveRadius {
                    index,
                    radius: ring.radius,
                });
            }
            if ring.gap_size <= 0.0 || ring.gap_size >= TAU {
                return Err(ConfigError::GapOutOfRange {
                    index,
                    gap_size: ring.gap_size,
                });
            }
            if let Some(previous) = previous {
                if ring.radius <= previous {
                    return Err(ConfigError::RadiusNotIncreasing {
                        index,
                        radius: ring.radius,
                        previous,
                    });
                }
            }
            previous = Some(ring.radius);
        }

        Ok(())
    }

    /// Parse and validate a level from JSON
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let level: LevelConfig = serde_json::from_str(json)?;
        level.validate()?;
        Ok(level)
    }

    /// Load and validate a level from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let level = Self::from_json_str(&json)?;
        log::info!("Loaded level with {} rings from {}", level.rings.len(), path.display());
        Ok(level)
    }
}
