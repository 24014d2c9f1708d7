//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected, seedable jitter only
//! - Rings processed innermost first
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod jitter;
pub mod outcome;
pub mod rotation;
pub mod state;
pub mod tick;

pub use collision::{Contact, resolve_contact};
pub use geometry::{is_in_gap, reflect, rotate};
pub use jitter::{FixedJitter, JitterSource, SeededJitter};
pub use outcome::{ball_too_big, evaluate};
pub use rotation::rotate_rings;
pub use state::{Ball, GameState, GameStatus, Ring, RingSequence};
pub use tick::{TickEvent, tick};
