//! Fixed timestep accumulator
//!
//! Turns variable frame arrivals into a whole number of fixed-size ticks so
//! the simulation never depends on the display refresh rate.

use crate::consts::{FIXED_DT, MAX_FRAME_DELTA};

/// Fixed timestep accumulator driven by absolute frame timestamps (seconds)
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    /// The fixed delta time per tick
    dt: f32,
    /// Largest frame delta accepted; longer stalls are dropped
    max_delta: f32,
    /// Accumulated time not yet consumed by ticks
    accumulator: f32,
    /// Timestamp of the previous frame
    last_time: Option<f64>,
}

impl Default for FixedStepClock {
    fn default() -> Self {
        Self::new(FIXED_DT, MAX_FRAME_DELTA)
    }
}

impl FixedStepClock {
    pub fn new(dt: f32, max_delta: f32) -> Self {
        Self {
            dt,
            max_delta,
            accumulator: 0.0,
            last_time: None,
        }
    }

    /// Start (or restart) timing from `now`, dropping any banked time
    pub fn reset(&mut self, now: f64) {
        self.accumulator = 0.0;
        self.last_time = Some(now);
    }

    /// Record a frame arrival. Returns the number of fixed steps to run.
    pub fn advance(&mut self, now: f64) -> u32 {
        let raw = match self.last_time {
            Some(last) => (now - last) as f32,
            None => 0.0,
        };
        self.last_time = Some(now);

        if raw > self.max_delta {
            log::warn!(
                "Frame stalled for {:.3}s, clamping to {:.3}s",
                raw,
                self.max_delta
            );
        }
        // Clamp also swallows timestamps that run backwards
        let delta = raw.clamp(0.0, self.max_delta);
        self.accumulator += delta;

        let mut steps = 0;
        while self.accumulator >= self.dt {
            self.accumulator -= self.dt;
            steps += 1;
        }
        steps
    }

    /// The fixed delta time
    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_runs_nothing() {
        let mut clock = FixedStepClock::default();
        assert_eq!(clock.advance(12.0), 0);
        assert_eq!(clock.accumulator(), 0.0);
    }

    #[test]
    fn test_accumulates_partial() {
        let mut clock = FixedStepClock::default();
        clock.reset(0.0);
        assert_eq!(clock.advance(0.008), 0); // half a tick
        assert_eq!(clock.advance(0.018), 1); // over one tick total
    }

    #[test]
    fn test_several_ticks_per_frame() {
        let mut clock = FixedStepClock::default();
        clock.reset(1.0);
        // 60ms at 60 Hz is three whole ticks with a little left over
        assert_eq!(clock.advance(1.06), 3);
        assert!(clock.accumulator() < FIXED_DT);
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut clock = FixedStepClock::default();
        clock.reset(0.0);
        // A 30 second stall only banks MAX_FRAME_DELTA worth of ticks
        let steps = clock.advance(30.0);
        assert!(steps == 5 || steps == 6, "steps was {}", steps);
        assert!(clock.accumulator() < FIXED_DT);
    }

    #[test]
    fn test_backwards_time_is_ignored() {
        let mut clock = FixedStepClock::default();
        clock.reset(5.0);
        assert_eq!(clock.advance(4.0), 0);
        assert_eq!(clock.accumulator(), 0.0);
    }
}
