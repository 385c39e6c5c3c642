// =============================================================================
// Codec Widths
// =============================================================================
//
// Ties a Morton code width to its coordinate type. Every strategy is written
// once against these traits and instantiated for u32 and u64.

use core::fmt;

/// Number of interleaved coordinates in a Morton code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dim {
    /// Two coordinates (x, y).
    Two,
    /// Three coordinates (x, y, z).
    Three,
}

impl Dim {
    /// Numeric dimension D.
    #[inline(always)]
    pub const fn get(self) -> u32 {
        match self {
            Dim::Two => 2,
            Dim::Three => 3,
        }
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.get())
    }
}

/// Whether a variant maps coordinates to a code or a code to coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// `(coord × D) -> morton`
    Encode,
    /// `morton -> (coord × D)`
    Decode,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encode => f.write_str("encode"),
            Direction::Decode => f.write_str("decode"),
        }
    }
}

/// Identifies one registry group: all variants sharing width, dimension and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey {
    /// Morton code width in bits (32 or 64).
    pub bits: u32,
    /// Dimension.
    pub dim: Dim,
    /// Encode or decode.
    pub direction: Direction,
}

impl GroupKey {
    /// Creates a group key.
    pub const fn new(bits: u32, dim: Dim, direction: Direction) -> Self {
        Self { bits, dim, direction }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-bit {}", self.dim, self.bits, self.direction)
    }
}

/// A coordinate integer type.
pub trait Coordinate: Copy + Eq + Default + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Width of the type in bits.
    const BITS: u32;

    /// Widens to u64 without loss.
    fn to_u64(self) -> u64;

    /// Truncates a u64 to this type.
    fn from_u64(v: u64) -> Self;
}

/// A Morton code integer type with its paired coordinate type.
pub trait MortonCode: Copy + Eq + Default + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Coordinate type used by encoders/decoders of this width.
    type Coord: Coordinate;

    /// Width of the code in bits.
    const BITS: u32;

    /// Widens to u64 without loss.
    fn to_u64(self) -> u64;

    /// Truncates a u64 to this type.
    fn from_u64(v: u64) -> Self;

    /// Number of meaningful bits per coordinate for dimension `dim`.
    #[inline(always)]
    fn field_bits(dim: Dim) -> u32 {
        Self::BITS / dim.get()
    }

    /// Mask covering the meaningful bits of one coordinate.
    #[inline(always)]
    fn field_mask(dim: Dim) -> u64 {
        low_mask(Self::field_bits(dim))
    }
}

/// Mask with the low `bits` bits set (`bits` may be 64).
#[inline(always)]
pub const fn low_mask(bits: u32) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

impl Coordinate for u16 {
    const BITS: u32 = 16;

    #[inline(always)]
    fn to_u64(self) -> u64 {
        self as u64
    }

    #[inline(always)]
    fn from_u64(v: u64) -> Self {
        v as u16
    }
}

impl Coordinate for u32 {
    const BITS: u32 = 32;

    #[inline(always)]
    fn to_u64(self) -> u64 {
        self as u64
    }

    #[inline(always)]
    fn from_u64(v: u64) -> Self {
        v as u32
    }
}

impl MortonCode for u32 {
    type Coord = u16;
    const BITS: u32 = 32;

    #[inline(always)]
    fn to_u64(self) -> u64 {
        self as u64
    }

    #[inline(always)]
    fn from_u64(v: u64) -> Self {
        v as u32
    }
}

impl MortonCode for u64 {
    type Coord = u32;
    const BITS: u32 = 64;

    #[inline(always)]
    fn to_u64(self) -> u64 {
        self
    }

    #[inline(always)]
    fn from_u64(v: u64) -> Self {
        v
    }
}

/// Shorthand for the coordinate type of a Morton width.
pub type CoordOf<M> = <M as MortonCode>::Coord;
