// =============================================================================
// Bit-Loop Decoders
// =============================================================================

use crate::codec::{Coordinate, CoordOf, Dim, MortonCode};
use crate::intrinsics::significant_bits;

#[inline(always)]
fn extract_2d(code: u64, bits: u32) -> (u64, u64) {
    let (mut x, mut y) = (0u64, 0u64);
    for b in 0..bits {
        let bit = 1u64 << b;
        x |= (code >> b) & bit;
        y |= (code >> (b + 1)) & bit;
    }
    (x, y)
}

#[inline(always)]
fn extract_3d(code: u64, bits: u32) -> (u64, u64, u64) {
    let (mut x, mut y, mut z) = (0u64, 0u64, 0u64);
    for b in 0..bits {
        let bit = 1u64 << b;
        x |= (code >> (2 * b)) & bit;
        y |= (code >> (2 * b + 1)) & bit;
        z |= (code >> (2 * b + 2)) & bit;
    }
    (x, y, z)
}

/// Field bits that can be non-zero given the highest set bit of `code`.
#[inline(always)]
fn checkbits(code: u64, dim: u32, field_bits: u32) -> u32 {
    significant_bits(code).div_ceil(dim).min(field_bits)
}

/// Extracts every field bit of both lanes.
pub fn decode_2d_for<M: MortonCode>(m: M) -> (CoordOf<M>, CoordOf<M>) {
    let (x, y) = extract_2d(m.to_u64(), M::field_bits(Dim::Two));
    (Coordinate::from_u64(x), Coordinate::from_u64(y))
}

/// Stops after the group holding the highest set code bit.
pub fn decode_2d_for_et<M: MortonCode>(m: M) -> (CoordOf<M>, CoordOf<M>) {
    let code = m.to_u64();
    let (x, y) = extract_2d(code, checkbits(code, 2, M::field_bits(Dim::Two)));
    (Coordinate::from_u64(x), Coordinate::from_u64(y))
}

/// Extracts every field bit of all three lanes.
pub fn decode_3d_for<M: MortonCode>(m: M) -> (CoordOf<M>, CoordOf<M>, CoordOf<M>) {
    let (x, y, z) = extract_3d(m.to_u64(), M::field_bits(Dim::Three));
    (Coordinate::from_u64(x), Coordinate::from_u64(y), Coordinate::from_u64(z))
}

/// Stops after the group holding the highest set code bit.
pub fn decode_3d_for_et<M: MortonCode>(m: M) -> (CoordOf<M>, CoordOf<M>, CoordOf<M>) {
    let code = m.to_u64();
    let (x, y, z) = extract_3d(code, checkbits(code, 3, M::field_bits(Dim::Three)));
    (Coordinate::from_u64(x), Coordinate::from_u64(y), Coordinate::from_u64(z))
}
