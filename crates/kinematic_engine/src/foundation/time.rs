//! Time management utilities

/// Fixed-timestep accumulator for driving simulation ticks.
///
/// Hosts feed in variable frame times and receive back the whole number of
/// fixed ticks to run, keeping the simulation step constant regardless of
/// render frame rate.
pub struct FixedStep {
    tick_duration: f32,
    accumulator: f32,
}

impl FixedStep {
    /// Create a stepper with the given tick duration in seconds.
    ///
    /// Non-positive durations are replaced with the 60 Hz default.
    pub fn new(tick_duration: f32) -> Self {
        let tick_duration = if tick_duration > 0.0 {
            tick_duration
        } else {
            1.0 / 60.0
        };
        Self {
            tick_duration,
            accumulator: 0.0,
        }
    }

    /// Advance by one frame's elapsed time, returning how many fixed ticks
    /// should run. Zero or negative frame times accumulate nothing.
    pub fn advance(&mut self, frame_time: f32) -> u32 {
        if frame_time > 0.0 {
            self.accumulator += frame_time;
        }

        let mut steps = 0;
        while self.accumulator >= self.tick_duration {
            self.accumulator -= self.tick_duration;
            steps += 1;
        }
        steps
    }

    /// The fixed tick duration in seconds
    pub fn tick_duration(&self) -> f32 {
        self.tick_duration
    }

    /// Fraction of a tick accumulated but not yet consumed, in `[0, 1)`.
    /// Useful for render interpolation.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.tick_duration
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(1.0 / 60.0)
    }
}
