//! Runtime settings
//!
//! Everything outside the level itself: seed, playfield geometry, clock
//! bounds and render detail. Loaded from an optional JSON file.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH, FIXED_DT, MAX_FRAME_DELTA};
use crate::error::ConfigError;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Arc tessellation density
    pub fn segments_per_radian(&self) -> f32 {
        match self {
            QualityPreset::Low => 6.0,
            QualityPreset::Medium => 12.0,
            QualityPreset::High => 24.0,
        }
    }

    /// Triangles used for the ball disc
    pub fn disc_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 12,
            QualityPreset::Medium => 24,
            QualityPreset::High => 48,
        }
    }
}

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for bounce jitter
    pub seed: u64,
    /// Render detail
    pub quality: QualityPreset,

    // === Playfield ===
    pub width: f32,
    pub height: f32,
    /// Shared center of every ring
    pub center: Vec2,

    // === Clock ===
    pub fixed_dt: f32,
    pub max_frame_delta: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5EED,
            quality: QualityPreset::Medium,

            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            center: Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0),

            fixed_dt: FIXED_DT,
            max_frame_delta: MAX_FRAME_DELTA,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Check the clock bounds and playfield. The timestep must be positive and
    /// the frame delta cap must admit at least one tick.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.fixed_dt.is_finite() {
            return Err(ConfigError::NonFinite { field: "fixed_dt" });
        }
        if !self.max_frame_delta.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "max_frame_delta",
            });
        }
        if ![self.width, self.height, self.center.x, self.center.y]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(ConfigError::NonFinite { field: "playfield" });
        }
        if self.fixed_dt <= 0.0 {
            return Err(ConfigError::NonPositiveTimestep {
                fixed_dt: self.fixed_dt,
            });
        }
        if self.max_frame_delta < self.fixed_dt {
            return Err(ConfigError::FrameDeltaTooSmall {
                max_frame_delta: self.max_frame_delta,
                fixed_dt: self.fixed_dt,
            });
        }
        Ok(())
    }

    /// Parse and validate settings from JSON; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
