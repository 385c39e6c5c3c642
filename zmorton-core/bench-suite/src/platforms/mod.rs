/// A measurement result from a timed section of the suite.
#[derive(Clone, Copy, Debug)]
pub struct Measurement {
    /// Elapsed time in milliseconds.
    pub millis: f64,
}

/// A trait that abstracts the host the suite runs on.
///
/// The core harness times variants through its own `Clock`; the host only
/// covers output, identification, and the wall time of whole phases.
pub trait BenchmarkHost {
    /// The type representing a point in time.
    type TimePoint: Copy;

    /// Returns the current time point.
    fn now() -> Self::TimePoint;

    /// Calculates the duration between `start` and now.
    fn measure(start: Self::TimePoint) -> Measurement;

    /// Prints one line to the host's standard output.
    fn print(s: &str);

    /// Returns a human-readable name of the platform.
    fn platform_name() -> &'static str;

    /// Compiler that built this binary.
    fn compiler() -> &'static str;

    /// Build profile (`debug` or `release`).
    fn profile() -> &'static str;
}

mod native;
pub use native::Platform;
