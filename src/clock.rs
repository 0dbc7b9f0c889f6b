use std::time::{Duration, Instant};

/// Converts irregular frame timestamps into whole simulation steps.
///
/// Elapsed real time accumulates across frames; [`drain_steps`] consumes the
/// accumulator in fixed-size chunks and leaves the remainder in place. This
/// keeps simulation speed independent of the host frame rate, including slow
/// or bursty frames.
///
/// [`drain_steps`]: Self::drain_steps
#[derive(Debug, Clone, Copy, Default)]
pub struct GameClock {
    last: Option<Instant>,
    accumulator: Duration,
}

impl GameClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one frame timestamp.
    ///
    /// The first call after construction or [`reset`](Self::reset) only
    /// records the baseline and contributes no elapsed time.
    pub fn advance(&mut self, now: Instant) {
        if let Some(last) = self.last {
            self.accumulator += now.saturating_duration_since(last);
        }
        self.last = Some(now);
    }

    /// Drains as many whole steps of `step_interval` as have accumulated.
    pub fn drain_steps(&mut self, step_interval: Duration) -> u32 {
        debug_assert!(!step_interval.is_zero());

        let mut steps = 0;
        while self.accumulator >= step_interval {
            self.accumulator -= step_interval;
            steps += 1;
        }
        steps
    }

    /// Clears the baseline and any accumulated time.
    ///
    /// Must run on resume-from-pause so wall time spent paused is not
    /// replayed as a burst of catch-up steps.
    pub fn reset(&mut self) {
        self.last = None;
        self.accumulator = Duration::ZERO;
    }
}
