//! Frame building from a state snapshot
//!
//! Pure: the same snapshot and settings always produce the same frame.

use std::f32::consts::TAU;

use glam::Vec2;

use super::shapes::{arc_band, circle, rect};
use super::vertex::{Vertex, colors, hsl};
use crate::settings::Settings;
use crate::sim::{GameState, GameStatus};

/// Stroke width of the innermost (collidable) ring
pub const INNER_RING_WIDTH: f32 = 4.0;
/// Stroke width of every other ring
pub const OUTER_RING_WIDTH: f32 = 2.0;

/// Status text drawn over a finished run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub title_color: [f32; 4],
    pub text_color: [f32; 4],
    /// Where the title is centered; the subtitle sits just below
    pub anchor: Vec2,
}

impl Overlay {
    pub fn for_status(status: GameStatus, anchor: Vec2) -> Option<Self> {
        match status {
            GameStatus::Playing => None,
            GameStatus::GameOver => Some(Self {
                title: "GAME OVER",
                subtitle: "Ball too big to escape",
                title_color: colors::TEXT,
                text_color: colors::TEXT,
                anchor,
            }),
            GameStatus::Success => Some(Self {
                title: "YOU WIN",
                subtitle: "All rings escaped",
                title_color: colors::WIN_TEXT,
                text_color: colors::TEXT,
                anchor,
            }),
        }
    }
}

/// Everything a host needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    /// Triangle list in playfield coordinates
    pub vertices: Vec<Vertex>,
    pub overlay: Option<Overlay>,
}

impl Frame {
    /// Build a frame from a read-only snapshot
    pub fn build(state: &GameState, settings: &Settings) -> Self {
        let mut vertices = Vec::new();
        let overlay = Overlay::for_status(state.status, state.center);

        if overlay.is_some() {
            // Finished runs show only the dimmed overlay
            vertices.extend(rect(
                Vec2::ZERO,
                Vec2::new(settings.width, settings.height),
                colors::OVERLAY,
            ));
        } else {
            for (index, ring) in state.rings.iter().enumerate() {
                let (width, color) = if index == 0 {
                    (INNER_RING_WIDTH, hsl(ring.hue, 0.8, 0.55))
                } else {
                    (OUTER_RING_WIDTH, hsl(ring.hue, 0.3, 0.35))
                };
                // Solid part runs from the gap end around to the gap start
                vertices.extend(arc_band(
                    state.center,
                    ring.radius,
                    width,
                    ring.rotation + ring.gap_size,
                    TAU - ring.gap_size,
                    color,
                    settings.quality.segments_per_radian(),
                ));
            }

            vertices.extend(circle(
                state.ball.pos,
                state.ball.radius,
                colors::BALL,
                settings.quality.disc_segments(),
            ));
        }

        Self {
            width: settings.width,
            height: settings.height,
            vertices,
            overlay,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}
