// =============================================================================
// Bit-Loop Encoders
// =============================================================================

use crate::codec::{Coordinate, CoordOf, Dim, MortonCode};
use crate::intrinsics::significant_bits;

#[inline(always)]
fn interleave_2d(x: u64, y: u64, bits: u32) -> u64 {
    let mut answer = 0u64;
    for b in 0..bits {
        let bit = 1u64 << b;
        answer |= ((x & bit) << b) | ((y & bit) << (b + 1));
    }
    answer
}

#[inline(always)]
fn interleave_3d(x: u64, y: u64, z: u64, bits: u32) -> u64 {
    let mut answer = 0u64;
    for b in 0..bits {
        let bit = 1u64 << b;
        answer |= ((x & bit) << (2 * b)) | ((y & bit) << (2 * b + 1)) | ((z & bit) << (2 * b + 2));
    }
    answer
}

/// Tests and sets every field bit.
pub fn encode_2d_for<M: MortonCode>(x: CoordOf<M>, y: CoordOf<M>) -> M {
    M::from_u64(interleave_2d(x.to_u64(), y.to_u64(), M::field_bits(Dim::Two)))
}

/// Stops after the highest set bit of `x | y`.
pub fn encode_2d_for_et<M: MortonCode>(x: CoordOf<M>, y: CoordOf<M>) -> M {
    let (x, y) = (x.to_u64(), y.to_u64());
    let checkbits = significant_bits(x | y).min(M::field_bits(Dim::Two));
    M::from_u64(interleave_2d(x, y, checkbits))
}

/// Tests and sets every field bit.
pub fn encode_3d_for<M: MortonCode>(x: CoordOf<M>, y: CoordOf<M>, z: CoordOf<M>) -> M {
    M::from_u64(interleave_3d(
        x.to_u64(),
        y.to_u64(),
        z.to_u64(),
        M::field_bits(Dim::Three),
    ))
}

/// Stops after the highest set bit of `x | y | z`.
pub fn encode_3d_for_et<M: MortonCode>(x: CoordOf<M>, y: CoordOf<M>, z: CoordOf<M>) -> M {
    let (x, y, z) = (x.to_u64(), y.to_u64(), z.to_u64());
    let checkbits = significant_bits(x | y | z).min(M::field_bits(Dim::Three));
    M::from_u64(interleave_3d(x, y, z, checkbits))
}
