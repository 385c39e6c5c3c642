//! # zmorton-core: Interchangeable Morton Encoders and Decoders
//!
//! `zmorton-core` encodes 2D and 3D integer coordinates into a single Morton
//! (Z-order) code by interleaving their bits, and decodes codes back into
//! coordinates. It provides the same transform through several strategies,
//! together with the harness that proves them equal and ranks them by speed.
//!
//! ## The contract
//!
//! For dimension `D`, bit `b` of coordinate `k` maps to bit `b * D + k` of the
//! code. With a code width of 32 or 64 bits, each coordinate has
//! `field_bits = width / D` meaningful bits:
//!
//! | Group  | Code  | Coordinate | Field bits |
//! |--------|-------|------------|------------|
//! | 2D/32  | `u32` | `u16`      | 16         |
//! | 2D/64  | `u64` | `u32`      | 32         |
//! | 3D/32  | `u32` | `u16`      | 10         |
//! | 3D/64  | `u64` | `u32`      | 21         |
//!
//! Coordinate bits at or above the field width never reach the code, and code
//! bits at or above `D * field_bits` never reach a coordinate. Every variant
//! agrees with the [`reference`] codec on every input, not only in-field ones.
//!
//! ## Strategies
//!
//! - **For / For ET** - bit-by-bit loops, optionally stopping at the highest
//!   set bit
//! - **Magicbits** - `log2(field_bits)` shift-and-mask rounds; the sequence is
//!   derived by a `const fn` from `(D, field_bits)`
//! - **LUT / LUT ET / LUT Shifted / LUT Shifted ET** - chunked table lookups,
//!   with runtime or precomputed shifts
//! - **Chunked LUT** - LUT encoders with a configurable chunk width
//! - **BMI2 instruction set** - one `pdep`/`pext` per coordinate, registered
//!   only when the running CPU supports it
//!
//! ## Quick Start
//!
//! ```
//! use zmorton_core::decoder::decode_3d_magicbits;
//! use zmorton_core::encoder::encode_3d_lut;
//!
//! let code: u32 = encode_3d_lut(5, 2, 9);
//! assert_eq!(decode_3d_magicbits(code), (5, 2, 9));
//! ```
//!
//! Verifying and timing every registered variant:
//!
//! ```no_run
//! use zmorton_core::{verify_all, run_perf, BenchConfig, Capabilities, MonotonicClock, Registry};
//!
//! let config = BenchConfig::builder().max_range(128, 128).trials(1).build().unwrap();
//! let registry = Registry::new(Capabilities::detect());
//!
//! assert!(verify_all(&registry, &config).passed());
//! let run = run_perf(&registry, &config, &MonotonicClock, 128);
//! println!("{} timings", run.timings.len());
//! ```
//!
//! ## Module Organization
//!
//! - [`codec`] - Morton width and coordinate traits, group keys
//! - [`reference`] - bit-by-bit oracle
//! - [`intrinsics`] - magic-bit sequences, lane masks, capability probe
//! - [`tables`] - lookup tables built from pure chunk functions
//! - [`encoder`] / [`decoder`] - the variants
//! - [`registry`] - labelled variants grouped by width, dimension and direction
//! - [`config`] - validated run configuration
//! - [`verify`] - correctness checks against the reference
//! - [`perf`] - timing harness

#![warn(missing_docs)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Morton code and coordinate width traits.
pub mod codec;

/// Validated configuration shared by the verifier and the harness.
pub mod config;

/// Decoder variants.
pub mod decoder;

/// Encoder variants.
pub mod encoder;

/// Low-level bit manipulation and the capability probe.
pub mod intrinsics;

/// Timing harness.
pub mod perf;

/// Reference codec.
pub mod reference;

/// Labelled variant registry.
pub mod registry;

/// Precomputed lookup tables.
pub mod tables;

/// Correctness checks.
pub mod verify;

// =============================================================================
// Public Re-exports
// =============================================================================

pub use codec::{CoordOf, Coordinate, Dim, Direction, GroupKey, MortonCode};
pub use config::{BenchConfig, BenchConfigBuilder, ConfigError, DimSelection};
pub use intrinsics::Capabilities;
pub use perf::{run_perf, Clock, MonotonicClock, PerfRun, RunningSums, Timer, VariantTiming};
pub use reference::{control_decode, control_encode};
pub use registry::{Labeled, Registry, VariantSet};
pub use verify::{verify_all, CheckKind, CheckReport, Mismatch, Sample, VerificationReport};
