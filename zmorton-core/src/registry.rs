//! Labelled variant registry.
//!
//! Variants are grouped by (width, dimension, direction). The set of variants
//! in a group is fixed when the registry is built; hardware variants are
//! included only when the [`Capabilities`] passed to [`Registry::new`] report
//! the instruction set.
//!
//! # Example
//!
//! ```
//! use zmorton_core::{Capabilities, Registry};
//!
//! let registry = Registry::new(Capabilities::portable());
//! for v in &registry.bits32.encode_3d {
//!     let code = (v.func)(5, 2, 9);
//!     assert_eq!(code, 0b1000_0101_0101);
//! }
//! ```

use crate::codec::{CoordOf, Dim, Direction, GroupKey, MortonCode};
use crate::decoder::*;
use crate::encoder::*;
#[cfg(target_arch = "x86_64")]
use crate::{decoder, encoder};
use crate::intrinsics::Capabilities;
use crate::tables::spread_table;

/// `(x, y) -> morton`
pub type Encode2d<M> = fn(CoordOf<M>, CoordOf<M>) -> M;
/// `(x, y, z) -> morton`
pub type Encode3d<M> = fn(CoordOf<M>, CoordOf<M>, CoordOf<M>) -> M;
/// `morton -> (x, y)`
pub type Decode2d<M> = fn(M) -> (CoordOf<M>, CoordOf<M>);
/// `morton -> (x, y, z)`
pub type Decode3d<M> = fn(M) -> (CoordOf<M>, CoordOf<M>, CoordOf<M>);

/// A variant function with its display label.
#[derive(Clone, Copy)]
pub struct Labeled<F> {
    /// Human-readable label, unique within its group.
    pub label: &'static str,
    /// The variant.
    pub func: F,
}

impl<F> Labeled<F> {
    /// Pairs `func` with `label`.
    pub const fn new(label: &'static str, func: F) -> Self {
        Self { label, func }
    }
}

impl<F> core::fmt::Debug for Labeled<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Labeled").field(&self.label).finish()
    }
}

/// All four groups for one Morton width.
#[derive(Debug, Clone)]
pub struct VariantSet<M: MortonCode> {
    /// 2D encoders.
    pub encode_2d: Vec<Labeled<Encode2d<M>>>,
    /// 2D decoders.
    pub decode_2d: Vec<Labeled<Decode2d<M>>>,
    /// 3D encoders.
    pub encode_3d: Vec<Labeled<Encode3d<M>>>,
    /// 3D decoders.
    pub decode_3d: Vec<Labeled<Decode3d<M>>>,
}

impl<M: MortonCode> VariantSet<M> {
    /// Portable variants shared by every width.
    fn portable() -> Self {
        Self {
            encode_2d: vec![
                Labeled::new("For", encode_2d_for::<M>),
                Labeled::new("For ET", encode_2d_for_et::<M>),
                Labeled::new("Magicbits", encode_2d_magicbits::<M>),
                Labeled::new("LUT", encode_2d_lut::<M>),
                Labeled::new("LUT ET", encode_2d_lut_et::<M>),
                Labeled::new("LUT Shifted", encode_2d_lut_shifted::<M>),
                Labeled::new("LUT Shifted ET", encode_2d_lut_shifted_et::<M>),
            ],
            decode_2d: vec![
                Labeled::new("For", decode_2d_for::<M>),
                Labeled::new("For ET", decode_2d_for_et::<M>),
                Labeled::new("Magicbits", decode_2d_magicbits::<M>),
                Labeled::new("LUT", decode_2d_lut::<M>),
                Labeled::new("LUT ET", decode_2d_lut_et::<M>),
                Labeled::new("LUT Shifted", decode_2d_lut_shifted::<M>),
                Labeled::new("LUT Shifted ET", decode_2d_lut_shifted_et::<M>),
            ],
            encode_3d: vec![
                Labeled::new("For", encode_3d_for::<M>),
                Labeled::new("For ET", encode_3d_for_et::<M>),
                Labeled::new("Magicbits", encode_3d_magicbits::<M>),
                Labeled::new("LUT", encode_3d_lut::<M>),
                Labeled::new("LUT ET", encode_3d_lut_et::<M>),
                Labeled::new("LUT Shifted", encode_3d_lut_shifted::<M>),
                Labeled::new("LUT Shifted ET", encode_3d_lut_shifted_et::<M>),
            ],
            decode_3d: vec![
                Labeled::new("For", decode_3d_for::<M>),
                Labeled::new("For ET", decode_3d_for_et::<M>),
                Labeled::new("Magicbits", decode_3d_magicbits::<M>),
                Labeled::new("LUT", decode_3d_lut::<M>),
                Labeled::new("LUT ET", decode_3d_lut_et::<M>),
                Labeled::new("LUT Shifted", decode_3d_lut_shifted::<M>),
                Labeled::new("LUT Shifted ET", decode_3d_lut_shifted_et::<M>),
            ],
        }
    }

    #[cfg(target_arch = "x86_64")]
    fn push_bmi2(&mut self) {
        const LABEL: &str = "BMI2 instruction set";
        self.encode_2d.push(Labeled::new(LABEL, encoder::bmi2::encode_2d_bmi2::<M>));
        self.decode_2d.push(Labeled::new(LABEL, decoder::bmi2::decode_2d_bmi2::<M>));
        self.encode_3d.push(Labeled::new(LABEL, encoder::bmi2::encode_3d_bmi2::<M>));
        self.decode_3d.push(Labeled::new(LABEL, decoder::bmi2::decode_3d_bmi2::<M>));
    }

    /// Labels of the group `dim`/`direction`, in registration order.
    pub fn labels(&self, dim: Dim, direction: Direction) -> Vec<&'static str> {
        match (dim, direction) {
            (Dim::Two, Direction::Encode) => self.encode_2d.iter().map(|v| v.label).collect(),
            (Dim::Two, Direction::Decode) => self.decode_2d.iter().map(|v| v.label).collect(),
            (Dim::Three, Direction::Encode) => self.encode_3d.iter().map(|v| v.label).collect(),
            (Dim::Three, Direction::Decode) => self.decode_3d.iter().map(|v| v.label).collect(),
        }
    }

    /// Number of variants in the group `dim`/`direction`.
    pub fn len(&self, dim: Dim, direction: Direction) -> usize {
        match (dim, direction) {
            (Dim::Two, Direction::Encode) => self.encode_2d.len(),
            (Dim::Two, Direction::Decode) => self.decode_2d.len(),
            (Dim::Three, Direction::Encode) => self.encode_3d.len(),
            (Dim::Three, Direction::Decode) => self.decode_3d.len(),
        }
    }
}

/// Every registered variant, both widths.
#[derive(Debug, Clone)]
pub struct Registry {
    /// 32-bit codes with 16-bit coordinates.
    pub bits32: VariantSet<u32>,
    /// 64-bit codes with 32-bit coordinates.
    pub bits64: VariantSet<u64>,
    capabilities: Capabilities,
}

impl Registry {
    /// Builds the registry for `capabilities`.
    ///
    /// Chunked LUT tables are built here so that no table construction happens
    /// inside a timed region.
    pub fn new(capabilities: Capabilities) -> Self {
        let mut bits32 = VariantSet::<u32>::portable();
        let mut bits64 = VariantSet::<u64>::portable();

        bits32.encode_2d.push(Labeled::new("Chunked LUT: 4 chunks, 4 bit", encode_2d_chunked::<u32, 4>));
        bits32.encode_2d.push(Labeled::new("Chunked LUT: 2 chunks, 8 bit", encode_2d_chunked::<u32, 8>));
        bits32.encode_2d.push(Labeled::new("Chunked LUT: 1 chunk, 16 bit", encode_2d_chunked::<u32, 16>));
        bits64.encode_2d.push(Labeled::new("Chunked LUT: 4 chunks, 8 bit", encode_2d_chunked::<u64, 8>));
        bits64.encode_2d.push(Labeled::new("Chunked LUT: 2 chunks, 16 bit", encode_2d_chunked::<u64, 16>));
        bits32.encode_3d.push(Labeled::new("Chunked LUT: 2 chunks, 5 bit", encode_3d_chunked::<u32, 5>));
        bits32.encode_3d.push(Labeled::new("Chunked LUT: 2 chunks, 8 bit", encode_3d_chunked::<u32, 8>));
        bits32.encode_3d.push(Labeled::new("Chunked LUT: 1 chunk, 10 bit", encode_3d_chunked::<u32, 10>));
        bits64.encode_3d.push(Labeled::new("Chunked LUT: 3 chunks, 7 bit", encode_3d_chunked::<u64, 7>));
        bits64.encode_3d.push(Labeled::new("Chunked LUT: 2 chunks, 16 bit", encode_3d_chunked::<u64, 16>));
        for bits in [4, 8, 16] {
            spread_table(Dim::Two, bits);
        }
        for bits in [5, 7, 8, 10, 16] {
            spread_table(Dim::Three, bits);
        }

        #[cfg(target_arch = "x86_64")]
        if capabilities.bmi2() {
            bits32.push_bmi2();
            bits64.push_bmi2();
        }

        log::debug!(
            "registry built: {} variants (bmi2={})",
            [Dim::Two, Dim::Three]
                .iter()
                .flat_map(|&d| [Direction::Encode, Direction::Decode].map(|r| (d, r)))
                .map(|(d, r)| bits32.len(d, r) + bits64.len(d, r))
                .sum::<usize>(),
            capabilities.bmi2()
        );

        Self { bits32, bits64, capabilities }
    }

    /// Capabilities this registry was built for.
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// All eight group keys, 32-bit groups first.
    pub fn groups() -> [GroupKey; 8] {
        let mut out = [GroupKey::new(32, Dim::Two, Direction::Encode); 8];
        let mut i = 0;
        for bits in [32, 64] {
            for dim in [Dim::Two, Dim::Three] {
                for direction in [Direction::Encode, Direction::Decode] {
                    out[i] = GroupKey::new(bits, dim, direction);
                    i += 1;
                }
            }
        }
        out
    }

    /// Labels registered for `group`, in registration order.
    pub fn labels(&self, group: GroupKey) -> Vec<&'static str> {
        match group.bits {
            32 => self.bits32.labels(group.dim, group.direction),
            _ => self.bits64.labels(group.dim, group.direction),
        }
    }
}
