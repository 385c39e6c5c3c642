//! Performance harness.
//!
//! Each variant is timed under two access patterns, averaged over
//! [`BenchConfig::trials`](crate::config::BenchConfig::trials) repetitions:
//!
//! - **Linear**: every coordinate tuple of `[0, MAX)^D` in order. Decoders get
//!   the reference codes of the same sweep, computed outside the timed region.
//! - **Random**: a pool of random in-field inputs, regenerated every trial, read
//!   cyclically for `MAX^D` calls.
//!
//! The timer is open only around the variant call. Each call's result is folded
//! into a wrapping running sum returned in the [`PerfRun`]; the sum carries no
//! meaning beyond keeping every call observable.

use core::fmt;

use crate::codec::{Dim, GroupKey};

/// Linear and random pattern loops, group runs.
pub mod harness;

/// Clock abstraction and accumulating timer.
pub mod timer;

pub use harness::{random_pool, run_perf, sweep_len};
pub use timer::{average_ms, Clock, MonotonicClock, Timer};

/// Averaged timings of one variant.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantTiming {
    /// Group the variant belongs to.
    pub group: GroupKey,
    /// Variant label.
    pub label: &'static str,
    /// Calls per pattern per trial (`MAX^D`).
    pub total: u64,
    /// Average linear-pattern time per trial, in milliseconds.
    pub linear_ms: f64,
    /// Average random-pattern time per trial, in milliseconds.
    pub random_ms: f64,
}

impl VariantTiming {
    /// Linear plus random time.
    pub fn combined_ms(&self) -> f64 {
        self.linear_ms + self.random_ms
    }
}

impl fmt::Display for VariantTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:07.3} ms {:07.3} ms : {}-bit {}",
            self.linear_ms, self.random_ms, self.group.bits, self.label
        )
    }
}

/// Result of one harness run at a fixed `MAX`.
#[derive(Debug, Clone, PartialEq)]
pub struct PerfRun {
    /// Coordinate bound of this run.
    pub max: u32,
    /// One entry per variant, in registry order.
    pub timings: Vec<VariantTiming>,
    /// Wrapping sum of every timed call's result.
    pub running_sum: u64,
}

impl PerfRun {
    /// Calls per pattern per trial for dimension `dim`.
    pub fn total(&self, dim: Dim) -> u64 {
        sweep_len(self.max, dim)
    }

    /// Timings of `group`, in registry order.
    pub fn group(&self, group: GroupKey) -> impl Iterator<Item = &VariantTiming> {
        self.timings.iter().filter(move |t| t.group == group)
    }

    /// Timings of `group`, fastest combined time first.
    pub fn ranked(&self, group: GroupKey) -> Vec<&VariantTiming> {
        let mut out: Vec<_> = self.group(group).collect();
        out.sort_by(|a, b| a.combined_ms().total_cmp(&b.combined_ms()));
        out
    }

    /// Fastest variant of `group`, if the group was run.
    pub fn fastest(&self, group: GroupKey) -> Option<&VariantTiming> {
        self.group(group).min_by(|a, b| a.combined_ms().total_cmp(&b.combined_ms()))
    }
}

/// Running sums of consecutive runs, aggregated by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunningSums {
    sums: Vec<u64>,
}

impl RunningSums {
    /// Empty accumulator.
    pub const fn new() -> Self {
        Self { sums: Vec::new() }
    }

    /// Appends the sum of `run`.
    pub fn record(&mut self, run: &PerfRun) {
        self.sums.push(run.running_sum);
    }

    /// Recorded sums, oldest first.
    pub fn sums(&self) -> &[u64] {
        &self.sums
    }

    /// Wrapping total of all recorded sums.
    pub fn total(&self) -> u64 {
        self.sums.iter().fold(0u64, |acc, &s| acc.wrapping_add(s))
    }
}

impl fmt::Display for RunningSums {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("running sums:")?;
        for s in &self.sums {
            write!(f, " {}", s)?;
        }
        write!(f, " (total {})", self.total())
    }
}
