//! Frame-driven simulation loop
//!
//! The host owns a [`FrameScheduler`] (a display refresh callback, or the
//! headless [`ManualScheduler`]). The loop asks it for one frame at a time,
//! drains fixed ticks on each arrival and stops asking once the run ends.
//!
//! Every request carries an id. Only the currently pending id is honoured, so
//! a callback that fires after [`SimulationLoop::teardown`] (or a duplicate)
//! can never touch the state.

use std::collections::VecDeque;

use crate::clock::FixedStepClock;
use crate::error::ConfigError;
use crate::level::LevelConfig;
use crate::settings::Settings;
use crate::sim::{Contact, GameState, GameStatus, JitterSource, SeededJitter, TickEvent, tick};

/// Handle for one scheduled frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameRequest(u64);

impl FrameRequest {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Host-side frame source
pub trait FrameScheduler {
    /// Ask for one more frame callback
    fn request_frame(&mut self) -> FrameRequest;
    /// Withdraw a previously requested callback
    fn cancel_frame(&mut self, request: FrameRequest);
}

/// In-process scheduler for headless runs and tests
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    queue: VecDeque<FrameRequest>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next due frame, if any
    pub fn next_due(&mut self) -> Option<FrameRequest> {
        self.queue.pop_front()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameRequest {
        self.next_id += 1;
        let request = FrameRequest(self.next_id);
        self.queue.push_back(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        self.queue.retain(|r| *r != request);
    }
}

/// Summary of the ticks run for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    pub ticks: u32,
    pub escapes: u32,
    pub bounces: u32,
    pub status: GameStatus,
}

impl FrameReport {
    fn record(&mut self, event: TickEvent) {
        if let TickEvent::Advanced { contact, status } = event {
            self.ticks += 1;
            self.status = status;
            match contact {
                Contact::Bounced { .. } => self.bounces += 1,
                Contact::Escaped { .. } | Contact::Cleared => self.escapes += 1,
                Contact::None => {}
            }
        }
    }
}

/// Owns the game state and drives it from frame arrivals
#[derive(Debug)]
pub struct SimulationLoop<J: JitterSource = SeededJitter> {
    state: GameState,
    clock: FixedStepClock,
    jitter: J,
    /// The one frame callback we will honour
    pending: Option<FrameRequest>,
    started: bool,
    torn_down: bool,
}

impl SimulationLoop<SeededJitter> {
    /// Validate the level and settings, then build a loop with seeded jitter
    pub fn from_settings(level: &LevelConfig, settings: &Settings) -> Result<Self, ConfigError> {
        settings.validate()?;
        level.validate()?;
        Ok(Self::new(
            GameState::new(level, settings.center),
            FixedStepClock::new(settings.fixed_dt, settings.max_frame_delta),
            SeededJitter::new(settings.seed),
        ))
    }
}

impl<J: JitterSource> SimulationLoop<J> {
    pub fn new(state: GameState, clock: FixedStepClock, jitter: J) -> Self {
        Self {
            state,
            clock,
            jitter,
            pending: None,
            started: false,
            torn_down: false,
        }
    }

    /// Begin timing at `now` and request the first frame
    pub fn start(&mut self, scheduler: &mut impl FrameScheduler, now: f64) {
        if self.started || self.torn_down {
            return;
        }
        self.started = true;
        self.clock.reset(now);
        log::info!(
            "Simulation started with {} rings, ball r={:.1}",
            self.state.rings.len(),
            self.state.ball.radius
        );
        self.schedule(scheduler);
    }

    /// Handle a frame arrival. Returns `None` for stale or unexpected callbacks.
    pub fn on_frame(
        &mut self,
        scheduler: &mut impl FrameScheduler,
        request: FrameRequest,
        now: f64,
    ) -> Option<FrameReport> {
        if self.torn_down || self.pending != Some(request) {
            log::warn!("Ignoring stale frame callback {}", request.id());
            return None;
        }
        self.pending = None;

        let steps = self.clock.advance(now);
        let report = self.run_ticks(steps);
        log::trace!("Frame {}: {} ticks", request.id(), report.ticks);

        if self.state.status.is_terminal() {
            log::info!(
                "Run finished: {:?} after {} ticks ({} escapes, {} bounces)",
                self.state.status,
                self.state.time_ticks,
                self.state.escapes,
                self.state.bounces
            );
        } else {
            self.schedule(scheduler);
        }

        Some(report)
    }

    /// Run `steps` fixed ticks directly, bypassing the clock
    pub fn run_ticks(&mut self, steps: u32) -> FrameReport {
        let dt = self.clock.dt();
        let mut report = FrameReport {
            status: self.state.status,
            ..FrameReport::default()
        };

        for _ in 0..steps {
            // Stop draining as soon as the run ends
            if self.state.status.is_terminal() {
                break;
            }
            report.record(tick(&mut self.state, &mut self.jitter, dt));
        }
        report.status = self.state.status;
        report
    }

    /// Cancel the pending callback; later callbacks are ignored
    pub fn teardown(&mut self, scheduler: &mut impl FrameScheduler) {
        if let Some(request) = self.pending.take() {
            scheduler.cancel_frame(request);
        }
        if !self.torn_down {
            log::info!("Simulation torn down at tick {}", self.state.time_ticks);
        }
        self.torn_down = true;
    }

    /// Start over with a new level, keeping the jitter source
    pub fn restart(
        &mut self,
        level: &LevelConfig,
        scheduler: &mut impl FrameScheduler,
        now: f64,
    ) -> Result<(), ConfigError> {
        if self.torn_down {
            return Ok(());
        }
        level.validate()?;
        self.state = GameState::new(level, self.state.center);
        self.clock.reset(now);
        self.started = true;
        log::info!("Simulation restarted with {} rings", self.state.rings.len());
        if self.pending.is_none() {
            self.schedule(scheduler);
        }
        Ok(())
    }

    fn schedule(&mut self, scheduler: &mut impl FrameScheduler) {
        self.pending = Some(scheduler.request_frame());
    }

    /// Read-only view of the live state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy for the render sink
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// True while a frame callback is outstanding
    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn clock(&self) -> &FixedStepClock {
        &self.clock
    }
}
