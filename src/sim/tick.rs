//! Fixed timestep simulation tick
//!
//! One tick runs: rotate rings -> move ball -> resolve contact -> evaluate outcome.

use super::collision::{Contact, resolve_contact};
use super::jitter::JitterSource;
use super::outcome::evaluate;
use super::rotation::rotate_rings;
use super::state::{GameState, GameStatus};

/// What a single call to [`tick`] did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickEvent {
    /// State was already terminal (or had no rings); nothing changed
    Halted,
    /// The simulation advanced by one step
    Advanced { contact: Contact, status: GameStatus },
}

impl TickEvent {
    pub fn contact(&self) -> Option<Contact> {
        match self {
            TickEvent::Advanced { contact, .. } => Some(*contact),
            TickEvent::Halted => None,
        }
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, jitter: &mut impl JitterSource, dt: f32) -> TickEvent {
    if state.status.is_terminal() {
        return TickEvent::Halted;
    }

    // A playing state with no rings left has nothing to collide with
    if state.rings.is_empty() {
        log::warn!("Tick on empty ring sequence, marking run as cleared");
        state.status = GameStatus::Success;
        return TickEvent::Halted;
    }

    state.time_ticks += 1;

    rotate_rings(&mut state.rings, dt);
    state.ball.advance(dt);

    // The outcome is measured against the ring that was innermost going in
    let measured = state.rings.innermost().cloned();
    let contact = resolve_contact(state, jitter);

    match contact {
        Contact::Bounced { angle, .. } => {
            log::trace!(
                "Bounce at {:.3} rad, ball r={:.2} speed={:.1}",
                angle,
                state.ball.radius,
                state.ball.speed()
            );
        }
        Contact::Escaped { remaining } => {
            log::debug!(
                "Escaped ring at tick {}, {} left, ball r={:.2}",
                state.time_ticks,
                remaining,
                state.ball.radius
            );
        }
        Contact::Cleared => {
            log::info!("All rings escaped at tick {}", state.time_ticks);
        }
        Contact::None => {}
    }

    state.status = evaluate(state.status, state.ball.radius, measured.as_ref());
    if state.status == GameStatus::GameOver {
        log::info!(
            "Game over at tick {}: ball r={:.2} no longer fits",
            state.time_ticks,
            state.ball.radius
        );
    }

    TickEvent::Advanced {
        contact,
        status: state.status,
    }
}
