//! Configuration errors

use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("level has no rings")]
    NoRings,

    #[error("ring {index} has non-positive radius {radius}")]
    NonPositiveRadius { index: usize, radius: f32 },

    #[error("ring {index} radius {radius} is not larger than the previous radius {previous}")]
    RadiusNotIncreasing {
        index: usize,
        radius: f32,
        previous: f32,
    },

    #[error("ring {index} gap size {gap_size} is outside (0, 2π)")]
    GapOutOfRange { index: usize, gap_size: f32 },

    #[error("ball radius {radius} is negative")]
    NegativeBallRadius { radius: f32 },

    #[error("non-finite value in {field}")]
    NonFinite { field: &'static str },

    #[error("fixed timestep {fixed_dt} must be positive")]
    NonPositiveTimestep { fixed_dt: f32 },

    #[error("max frame delta {max_frame_delta} is shorter than the fixed timestep {fixed_dt}")]
    FrameDeltaTooSmall { max_frame_delta: f32, fixed_dt: f32 },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}
