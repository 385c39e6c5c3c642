// =============================================================================
// Clock and Accumulating Timer
// =============================================================================

use std::time::{Duration, Instant};

/// A monotonic time source.
///
/// The harness only ever asks for two points and the distance between them,
/// so a test can substitute a clock that advances by a fixed step per reading.
pub trait Clock {
    /// A point in time.
    type TimePoint: Copy;

    /// Current time point.
    fn now(&self) -> Self::TimePoint;

    /// Time from `start` to `end`.
    fn between(&self, start: Self::TimePoint, end: Self::TimePoint) -> Duration;
}

/// Wall-clock time from [`Instant`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    type TimePoint = Instant;

    #[inline(always)]
    fn now(&self) -> Instant {
        Instant::now()
    }

    #[inline(always)]
    fn between(&self, start: Instant, end: Instant) -> Duration {
        end.saturating_duration_since(start)
    }
}

/// Sums the time spent between matching [`start`](Timer::start) and
/// [`stop`](Timer::stop) calls.
#[derive(Debug)]
pub struct Timer<'c, C: Clock> {
    clock: &'c C,
    started: Option<C::TimePoint>,
    elapsed: Duration,
}

impl<'c, C: Clock> Timer<'c, C> {
    /// Stopped timer with nothing accumulated.
    pub fn new(clock: &'c C) -> Self {
        Self { clock, started: None, elapsed: Duration::ZERO }
    }

    /// Opens a timed region. Restarts it if one is already open.
    #[inline(always)]
    pub fn start(&mut self) {
        self.started = Some(self.clock.now());
    }

    /// Closes the open region and adds it to the total. No-op when stopped.
    #[inline(always)]
    pub fn stop(&mut self) {
        let end = self.clock.now();
        if let Some(start) = self.started.take() {
            self.elapsed += self.clock.between(start, end);
        }
    }

    /// Total time of all closed regions.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Clears the total and any open region.
    pub fn reset(&mut self) {
        self.started = None;
        self.elapsed = Duration::ZERO;
    }
}

/// `total / trials` in milliseconds; `0.0` when `trials` is zero.
pub fn average_ms(total: Duration, trials: u32) -> f64 {
    if trials == 0 {
        return 0.0;
    }
    total.as_secs_f64() * 1_000.0 / f64::from(trials)
}
