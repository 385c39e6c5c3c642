//! Correctness verification against the reference codec.
//!
//! Four checks run per (width, dimension):
//!
//! 1. **Round trip** - fixed coordinate tuples through every encoder × decoder
//!    pair of the group.
//! 2. **Encoder reference** - every value `0..16` in every lane, shifted into
//!    every window `offset..offset + 4` of the field, against
//!    [`control_encode`](crate::reference::control_encode).
//! 3. **Decoder reference** - the same windowed inputs encoded by the reference
//!    and decoded by every decoder.
//! 4. **Fuzz** - random full-width coordinates and codes, including bits above
//!    the field, against the reference in both directions.
//!
//! A check never stops at the first mismatch. Every failure is counted and the
//! first [`MAX_RECORDED_MISMATCHES`] are kept for display, so a report always
//! states how badly a variant disagrees, not only that it does.

use core::fmt;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::codec::{Coordinate, CoordOf, Dim, Direction, GroupKey, MortonCode};
use crate::config::BenchConfig;
use crate::reference::{control_decode_2d, control_decode_3d, control_encode_2d, control_encode_3d};
use crate::registry::{Registry, VariantSet};

/// Mismatches stored per report; further failures are only counted.
pub const MAX_RECORDED_MISMATCHES: usize = 32;

/// Width of the value window slid across the field by the reference checks.
pub const WINDOW_BITS: u32 = 4;

/// An input or output value of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// Coordinates `(x, y)`.
    Coords2(u64, u64),
    /// Coordinates `(x, y, z)`.
    Coords3(u64, u64, u64),
    /// A Morton code.
    Code(u64),
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Sample::Coords2(x, y) => write!(f, "({}, {})", x, y),
            Sample::Coords3(x, y, z) => write!(f, "({}, {}, {})", x, y, z),
            Sample::Code(m) => write!(f, "{:#x}", m),
        }
    }
}

/// One disagreement with the expected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Variant under test.
    pub label: &'static str,
    /// Other half of an encoder × decoder pair (round-trip check only).
    pub partner: Option<&'static str>,
    /// Input handed to the first variant.
    pub input: Sample,
    /// What the variant (or pair) produced.
    pub computed: Sample,
    /// What the reference produced.
    pub expected: Sample,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.partner {
            Some(p) => write!(f, "{} -> {}", self.label, p)?,
            None => f.write_str(self.label)?,
        }
        write!(
            f,
            ": input {} computed {} expected {}",
            self.input, self.computed, self.expected
        )
    }
}

/// Which check produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    /// Encoder × decoder round trip.
    RoundTrip,
    /// Windowed encoder comparison.
    EncodeReference,
    /// Windowed decoder comparison.
    DecodeReference,
    /// Random full-width inputs, both directions.
    Fuzz,
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CheckKind::RoundTrip => "round trip",
            CheckKind::EncodeReference => "encode vs reference",
            CheckKind::DecodeReference => "decode vs reference",
            CheckKind::Fuzz => "fuzz vs reference",
        })
    }
}

/// Outcome of one check over one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Group checked. Round trip and fuzz reports carry the encode group.
    pub group: GroupKey,
    /// Check performed.
    pub kind: CheckKind,
    /// Variants exercised.
    pub variants: usize,
    /// Comparisons made.
    pub comparisons: u64,
    /// Comparisons that failed.
    pub failures: u64,
    /// The first failures, in discovery order.
    pub mismatches: Vec<Mismatch>,
}

impl CheckReport {
    fn new(group: GroupKey, kind: CheckKind, variants: usize) -> Self {
        Self { group, kind, variants, comparisons: 0, failures: 0, mismatches: Vec::new() }
    }

    /// True iff no comparison failed.
    pub fn passed(&self) -> bool {
        self.failures == 0
    }

    #[inline]
    fn compare(
        &mut self,
        label: &'static str,
        partner: Option<&'static str>,
        input: Sample,
        computed: Sample,
        expected: Sample,
    ) {
        self.comparisons += 1;
        if computed != expected {
            self.failures += 1;
            if self.mismatches.len() < MAX_RECORDED_MISMATCHES {
                self.mismatches.push(Mismatch { label, partner, input, computed, expected });
            }
        }
    }

    fn finish(self) -> Self {
        if self.passed() {
            log::debug!(
                "{} {}: {} comparisons over {} variants passed",
                self.group,
                self.kind,
                self.comparisons,
                self.variants
            );
        } else {
            log::warn!(
                "{} {}: {} of {} comparisons failed",
                self.group,
                self.kind,
                self.failures,
                self.comparisons
            );
        }
        self
    }
}

/// All reports of one verification pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    /// Reports in execution order.
    pub reports: Vec<CheckReport>,
}

impl VerificationReport {
    /// True iff every report passed.
    pub fn passed(&self) -> bool {
        self.reports.iter().all(CheckReport::passed)
    }

    /// Reports with at least one failure.
    pub fn failures(&self) -> impl Iterator<Item = &CheckReport> {
        self.reports.iter().filter(|r| !r.passed())
    }

    /// Total comparisons over every report.
    pub fn comparisons(&self) -> u64 {
        self.reports.iter().map(|r| r.comparisons).sum()
    }
}

// =============================================================================
// Sample helpers
// =============================================================================

#[inline(always)]
fn coords2<M: MortonCode>(c: (CoordOf<M>, CoordOf<M>)) -> Sample {
    Sample::Coords2(c.0.to_u64(), c.1.to_u64())
}

#[inline(always)]
fn coords3<M: MortonCode>(c: (CoordOf<M>, CoordOf<M>, CoordOf<M>)) -> Sample {
    Sample::Coords3(c.0.to_u64(), c.1.to_u64(), c.2.to_u64())
}

#[inline(always)]
fn code<M: MortonCode>(m: M) -> Sample {
    Sample::Code(m.to_u64())
}

#[inline(always)]
fn coord<M: MortonCode>(v: u64) -> CoordOf<M> {
    Coordinate::from_u64(v)
}

/// Fixed round-trip inputs for width `M` and `dim` lanes.
///
/// Contains zero, the all-ones field value, every single-lane field maximum,
/// alternating bit patterns, and `(5, 2, 9)`.
pub fn round_trip_samples<M: MortonCode>(dim: Dim) -> Vec<[u64; 3]> {
    let max = M::field_mask(dim);
    let alt = 0x5555_5555_5555_5555 & max;
    let mut out = vec![[0, 0, 0], [max, max, max], [5, 2, 9], [alt, !alt & max, alt]];
    for lane in 0..dim.get() as usize {
        let mut s = [0u64; 3];
        s[lane] = max;
        out.push(s);
    }
    if dim == Dim::Two {
        for s in &mut out {
            s[2] = 0;
        }
        out.dedup();
    }
    out
}

/// Splits `index` into `D` base-16 digits, each shifted to `offset`.
#[inline(always)]
fn window<const D: usize>(index: u64, offset: u32) -> [u64; D] {
    let mut out = [0u64; D];
    for (k, c) in out.iter_mut().enumerate() {
        *c = ((index >> (WINDOW_BITS as usize * k)) & 0xF) << offset;
    }
    out
}

/// Offsets `0..=field_bits - WINDOW_BITS`.
fn offsets<M: MortonCode>(dim: Dim) -> core::ops::RangeInclusive<u32> {
    0..=M::field_bits(dim) - WINDOW_BITS
}

// =============================================================================
// Round trip
// =============================================================================

/// Every encoder × decoder pair of the 2D group reproduces each sample.
pub fn check_round_trip_2d<M: MortonCode>(set: &VariantSet<M>) -> CheckReport {
    let group = GroupKey::new(M::BITS, Dim::Two, Direction::Encode);
    let mut report =
        CheckReport::new(group, CheckKind::RoundTrip, set.encode_2d.len() + set.decode_2d.len());
    for s in round_trip_samples::<M>(Dim::Two) {
        let input = (coord::<M>(s[0]), coord::<M>(s[1]));
        for e in &set.encode_2d {
            let m = (e.func)(input.0, input.1);
            for d in &set.decode_2d {
                report.compare(
                    e.label,
                    Some(d.label),
                    coords2::<M>(input),
                    coords2::<M>((d.func)(m)),
                    coords2::<M>(input),
                );
            }
        }
    }
    report.finish()
}

/// Every encoder × decoder pair of the 3D group reproduces each sample.
pub fn check_round_trip_3d<M: MortonCode>(set: &VariantSet<M>) -> CheckReport {
    let group = GroupKey::new(M::BITS, Dim::Three, Direction::Encode);
    let mut report =
        CheckReport::new(group, CheckKind::RoundTrip, set.encode_3d.len() + set.decode_3d.len());
    for s in round_trip_samples::<M>(Dim::Three) {
        let input = (coord::<M>(s[0]), coord::<M>(s[1]), coord::<M>(s[2]));
        for e in &set.encode_3d {
            let m = (e.func)(input.0, input.1, input.2);
            for d in &set.decode_3d {
                report.compare(
                    e.label,
                    Some(d.label),
                    coords3::<M>(input),
                    coords3::<M>((d.func)(m)),
                    coords3::<M>(input),
                );
            }
        }
    }
    report.finish()
}

// =============================================================================
// Windowed reference comparison
// =============================================================================

/// Every 2D encoder agrees with the reference on all windowed inputs.
pub fn check_encode_2d<M: MortonCode>(set: &VariantSet<M>) -> CheckReport {
    let group = GroupKey::new(M::BITS, Dim::Two, Direction::Encode);
    let mut report = CheckReport::new(group, CheckKind::EncodeReference, set.encode_2d.len());
    for offset in offsets::<M>(Dim::Two) {
        for i in 0..1u64 << (2 * WINDOW_BITS) {
            let [x, y] = window::<2>(i, offset).map(coord::<M>);
            let expected = code(control_encode_2d::<M>(x, y));
            for e in &set.encode_2d {
                report.compare(e.label, None, coords2::<M>((x, y)), code((e.func)(x, y)), expected);
            }
        }
    }
    report.finish()
}

/// Every 3D encoder agrees with the reference on all windowed inputs.
pub fn check_encode_3d<M: MortonCode>(set: &VariantSet<M>) -> CheckReport {
    let group = GroupKey::new(M::BITS, Dim::Three, Direction::Encode);
    let mut report = CheckReport::new(group, CheckKind::EncodeReference, set.encode_3d.len());
    for offset in offsets::<M>(Dim::Three) {
        for i in 0..1u64 << (3 * WINDOW_BITS) {
            let [x, y, z] = window::<3>(i, offset).map(coord::<M>);
            let expected = code(control_encode_3d::<M>(x, y, z));
            for e in &set.encode_3d {
                report.compare(
                    e.label,
                    None,
                    coords3::<M>((x, y, z)),
                    code((e.func)(x, y, z)),
                    expected,
                );
            }
        }
    }
    report.finish()
}

/// Every 2D decoder recovers the windowed inputs from their reference codes.
pub fn check_decode_2d<M: MortonCode>(set: &VariantSet<M>) -> CheckReport {
    let group = GroupKey::new(M::BITS, Dim::Two, Direction::Decode);
    let mut report = CheckReport::new(group, CheckKind::DecodeReference, set.decode_2d.len());
    for offset in offsets::<M>(Dim::Two) {
        for i in 0..1u64 << (2 * WINDOW_BITS) {
            let [x, y] = window::<2>(i, offset).map(coord::<M>);
            let m = control_encode_2d::<M>(x, y);
            for d in &set.decode_2d {
                report.compare(d.label, None, code(m), coords2::<M>((d.func)(m)), coords2::<M>((x, y)));
            }
        }
    }
    report.finish()
}

/// Every 3D decoder recovers the windowed inputs from their reference codes.
pub fn check_decode_3d<M: MortonCode>(set: &VariantSet<M>) -> CheckReport {
    let group = GroupKey::new(M::BITS, Dim::Three, Direction::Decode);
    let mut report = CheckReport::new(group, CheckKind::DecodeReference, set.decode_3d.len());
    for offset in offsets::<M>(Dim::Three) {
        for i in 0..1u64 << (3 * WINDOW_BITS) {
            let [x, y, z] = window::<3>(i, offset).map(coord::<M>);
            let m = control_encode_3d::<M>(x, y, z);
            for d in &set.decode_3d {
                report.compare(
                    d.label,
                    None,
                    code(m),
                    coords3::<M>((d.func)(m)),
                    coords3::<M>((x, y, z)),
                );
            }
        }
    }
    report.finish()
}

// =============================================================================
// Fuzz
// =============================================================================

/// Random full-width 2D coordinates and codes against the reference.
pub fn fuzz_2d<M: MortonCode, R: Rng>(set: &VariantSet<M>, samples: usize, rng: &mut R) -> CheckReport {
    let group = GroupKey::new(M::BITS, Dim::Two, Direction::Encode);
    let mut report =
        CheckReport::new(group, CheckKind::Fuzz, set.encode_2d.len() + set.decode_2d.len());
    for _ in 0..samples {
        let (x, y) = (coord::<M>(rng.random()), coord::<M>(rng.random()));
        let expected = code(control_encode_2d::<M>(x, y));
        for e in &set.encode_2d {
            report.compare(e.label, None, coords2::<M>((x, y)), code((e.func)(x, y)), expected);
        }

        let m = M::from_u64(rng.random());
        let expected = coords2::<M>(control_decode_2d(m));
        for d in &set.decode_2d {
            report.compare(d.label, None, code(m), coords2::<M>((d.func)(m)), expected);
        }
    }
    report.finish()
}

/// Random full-width 3D coordinates and codes against the reference.
pub fn fuzz_3d<M: MortonCode, R: Rng>(set: &VariantSet<M>, samples: usize, rng: &mut R) -> CheckReport {
    let group = GroupKey::new(M::BITS, Dim::Three, Direction::Encode);
    let mut report =
        CheckReport::new(group, CheckKind::Fuzz, set.encode_3d.len() + set.decode_3d.len());
    for _ in 0..samples {
        let (x, y, z) = (coord::<M>(rng.random()), coord::<M>(rng.random()), coord::<M>(rng.random()));
        let expected = code(control_encode_3d::<M>(x, y, z));
        for e in &set.encode_3d {
            report.compare(e.label, None, coords3::<M>((x, y, z)), code((e.func)(x, y, z)), expected);
        }

        let m = M::from_u64(rng.random());
        let expected = coords3::<M>(control_decode_3d(m));
        for d in &set.decode_3d {
            report.compare(d.label, None, code(m), coords3::<M>((d.func)(m)), expected);
        }
    }
    report.finish()
}

// =============================================================================
// Full pass
// =============================================================================

fn verify_width<M: MortonCode>(
    set: &VariantSet<M>,
    config: &BenchConfig,
    out: &mut Vec<CheckReport>,
) {
    for dim in config.dims().iter() {
        // Independent stream per group, reproducible from the config seed.
        let stream = (u64::from(M::BITS) << 8) | u64::from(dim.get());
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(config.seed() ^ stream);
        match dim {
            Dim::Two => {
                out.push(check_round_trip_2d(set));
                out.push(check_encode_2d(set));
                out.push(check_decode_2d(set));
                if config.fuzz_samples() > 0 {
                    out.push(fuzz_2d(set, config.fuzz_samples(), &mut rng));
                }
            }
            Dim::Three => {
                out.push(check_round_trip_3d(set));
                out.push(check_encode_3d(set));
                out.push(check_decode_3d(set));
                if config.fuzz_samples() > 0 {
                    out.push(fuzz_3d(set, config.fuzz_samples(), &mut rng));
                }
            }
        }
    }
}

/// Runs every check for every selected group of `registry`.
pub fn verify_all(registry: &Registry, config: &BenchConfig) -> VerificationReport {
    let mut reports = Vec::new();
    verify_width(&registry.bits32, config, &mut reports);
    verify_width(&registry.bits64, config, &mut reports);

    let report = VerificationReport { reports };
    log::info!(
        "verification: {} reports, {} comparisons, {}",
        report.reports.len(),
        report.comparisons(),
        if report.passed() { "passed" } else { "FAILED" }
    );
    report
}
