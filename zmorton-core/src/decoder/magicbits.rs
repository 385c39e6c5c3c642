// =============================================================================
// Magic-Bits Decoders
// =============================================================================

use crate::codec::{Coordinate, CoordOf, Dim, MortonCode};
use crate::intrinsics::magic_for;

/// Compacts each lane with the derived sequence in reverse order.
#[inline]
pub fn decode_2d_magicbits<M: MortonCode>(m: M) -> (CoordOf<M>, CoordOf<M>) {
    let magic = magic_for::<M>(Dim::Two);
    let code = m.to_u64();
    (
        Coordinate::from_u64(magic.compact(code)),
        Coordinate::from_u64(magic.compact(code >> 1)),
    )
}

/// Compacts each lane with the derived sequence in reverse order.
#[inline]
pub fn decode_3d_magicbits<M: MortonCode>(m: M) -> (CoordOf<M>, CoordOf<M>, CoordOf<M>) {
    let magic = magic_for::<M>(Dim::Three);
    let code = m.to_u64();
    (
        Coordinate::from_u64(magic.compact(code)),
        Coordinate::from_u64(magic.compact(code >> 1)),
        Coordinate::from_u64(magic.compact(code >> 2)),
    )
}
