//! Validated run configuration.
//!
//! A [`BenchConfig`] is built once by the entry point and passed by reference
//! to the verifier and the harness. It cannot be constructed in an invalid
//! state: [`BenchConfigBuilder::build`] checks every field.
//!
//! # Example
//!
//! ```
//! use zmorton_core::config::{BenchConfig, DimSelection};
//!
//! let config = BenchConfig::builder()
//!     .max_range(128, 512)
//!     .trials(3)
//!     .dims(DimSelection::Three)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.max_sweep().collect::<Vec<_>>(), vec![128, 256, 512]);
//! ```

use core::fmt;

use thiserror::Error;

use crate::codec::{Dim, MortonCode};

/// Default number of timed repetitions per variant.
pub const DEFAULT_TRIALS: u32 = 5;
/// Default random-pattern pool size.
pub const DEFAULT_POOL_SIZE: usize = 10_000;
/// Default first `MAX` of the sweep.
pub const DEFAULT_MAX_FROM: u32 = 128;
/// Default last `MAX` of the sweep.
pub const DEFAULT_MAX_TO: u32 = 512;
/// Default number of random inputs per group for the fuzz check.
pub const DEFAULT_FUZZ_SAMPLES: usize = 100_000;
/// Default seed for every random stream.
pub const DEFAULT_SEED: u64 = 0x5EED_2024_0000_0001;

/// Which dimensions to verify and time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DimSelection {
    /// 2D groups only.
    Two,
    /// 3D groups only.
    Three,
    /// Both.
    #[default]
    Both,
}

impl DimSelection {
    /// Whether `dim` is selected.
    pub const fn includes(self, dim: Dim) -> bool {
        matches!(
            (self, dim),
            (DimSelection::Both, _)
                | (DimSelection::Two, Dim::Two)
                | (DimSelection::Three, Dim::Three)
        )
    }

    /// Selected dimensions, 2D first.
    pub fn iter(self) -> impl Iterator<Item = Dim> {
        [Dim::Two, Dim::Three].into_iter().filter(move |&d| self.includes(d))
    }

    /// Smallest coordinate field width among the selected dimensions.
    pub fn narrowest_field(self) -> u32 {
        self.iter().map(<u32 as MortonCode>::field_bits).min().unwrap_or(0)
    }
}

impl fmt::Display for DimSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimSelection::Two => f.write_str("2D"),
            DimSelection::Three => f.write_str("3D"),
            DimSelection::Both => f.write_str("2D+3D"),
        }
    }
}

/// Rejected configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `trials` was zero.
    #[error("trials must be at least 1")]
    ZeroTrials,

    /// `pool_size` was zero.
    #[error("random pool size must be at least 1")]
    ZeroPoolSize,

    /// A `MAX` bound was zero.
    #[error("MAX must be at least 1")]
    ZeroMax,

    /// `max_from` exceeded `max_to`.
    #[error("MAX range is empty: from {from} is greater than to {to}")]
    EmptyMaxRange {
        /// First `MAX`.
        from: u32,
        /// Last `MAX`.
        to: u32,
    },

    /// `MAX` would produce coordinates outside the narrowest selected field.
    #[error("MAX {max} exceeds the {field_bits}-bit coordinate field (limit {limit})")]
    MaxExceedsField {
        /// Requested `max_to`.
        max: u32,
        /// Narrowest field width in use.
        field_bits: u32,
        /// `2^field_bits`.
        limit: u64,
    },
}

/// Immutable run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    max_from: u32,
    max_to: u32,
    trials: u32,
    pool_size: usize,
    seed: u64,
    dims: DimSelection,
    fuzz_samples: usize,
}

impl BenchConfig {
    /// Starts a builder with every default.
    #[must_use]
    pub const fn builder() -> BenchConfigBuilder {
        BenchConfigBuilder::new()
    }

    /// First `MAX` of the sweep.
    pub const fn max_from(&self) -> u32 {
        self.max_from
    }

    /// Last `MAX` of the sweep (inclusive upper bound).
    pub const fn max_to(&self) -> u32 {
        self.max_to
    }

    /// Timed repetitions per variant.
    pub const fn trials(&self) -> u32 {
        self.trials
    }

    /// Random-pattern pool size.
    pub const fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Seed for every random stream.
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Selected dimensions.
    pub const fn dims(&self) -> DimSelection {
        self.dims
    }

    /// Random inputs per group for the fuzz check (0 disables it).
    pub const fn fuzz_samples(&self) -> usize {
        self.fuzz_samples
    }

    /// `max_from, 2 * max_from, ...` while `<= max_to`.
    pub fn max_sweep(&self) -> impl Iterator<Item = u32> {
        let to = self.max_to;
        core::iter::successors(Some(self.max_from), move |&m| m.checked_mul(2).filter(|&n| n <= to))
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            max_from: DEFAULT_MAX_FROM,
            max_to: DEFAULT_MAX_TO,
            trials: DEFAULT_TRIALS,
            pool_size: DEFAULT_POOL_SIZE,
            seed: DEFAULT_SEED,
            dims: DimSelection::Both,
            fuzz_samples: DEFAULT_FUZZ_SAMPLES,
        }
    }
}

/// Builder for [`BenchConfig`].
#[derive(Debug, Clone)]
pub struct BenchConfigBuilder {
    inner: BenchConfig,
}

impl BenchConfigBuilder {
    /// Builder holding the defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: BenchConfig {
                max_from: DEFAULT_MAX_FROM,
                max_to: DEFAULT_MAX_TO,
                trials: DEFAULT_TRIALS,
                pool_size: DEFAULT_POOL_SIZE,
                seed: DEFAULT_SEED,
                dims: DimSelection::Both,
                fuzz_samples: DEFAULT_FUZZ_SAMPLES,
            },
        }
    }

    /// Sets the doubling `MAX` sweep bounds.
    #[must_use]
    pub const fn max_range(mut self, from: u32, to: u32) -> Self {
        self.inner.max_from = from;
        self.inner.max_to = to;
        self
    }

    /// Sets the number of timed repetitions.
    #[must_use]
    pub const fn trials(mut self, trials: u32) -> Self {
        self.inner.trials = trials;
        self
    }

    /// Sets the random-pattern pool size.
    #[must_use]
    pub const fn pool_size(mut self, pool_size: usize) -> Self {
        self.inner.pool_size = pool_size;
        self
    }

    /// Sets the seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.inner.seed = seed;
        self
    }

    /// Selects the dimensions.
    #[must_use]
    pub const fn dims(mut self, dims: DimSelection) -> Self {
        self.inner.dims = dims;
        self
    }

    /// Sets the fuzz sample count.
    #[must_use]
    pub const fn fuzz_samples(mut self, samples: usize) -> Self {
        self.inner.fuzz_samples = samples;
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first rejected field.
    pub fn build(self) -> Result<BenchConfig, ConfigError> {
        let c = self.inner;
        if c.trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        if c.pool_size == 0 {
            return Err(ConfigError::ZeroPoolSize);
        }
        if c.max_from == 0 || c.max_to == 0 {
            return Err(ConfigError::ZeroMax);
        }
        if c.max_from > c.max_to {
            return Err(ConfigError::EmptyMaxRange { from: c.max_from, to: c.max_to });
        }
        let field_bits = c.dims.narrowest_field();
        let limit = 1u64 << field_bits;
        if u64::from(c.max_to) > limit {
            return Err(ConfigError::MaxExceedsField { max: c.max_to, field_bits, limit });
        }
        Ok(c)
    }
}

impl Default for BenchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
