// =============================================================================
// Magic-Bits Encoders
// =============================================================================

use crate::codec::{Coordinate, CoordOf, Dim, MortonCode};
use crate::intrinsics::magic_for;

/// Spreads each coordinate with the derived sequence, then offsets lanes.
#[inline]
pub fn encode_2d_magicbits<M: MortonCode>(x: CoordOf<M>, y: CoordOf<M>) -> M {
    let magic = magic_for::<M>(Dim::Two);
    M::from_u64(magic.spread(x.to_u64()) | (magic.spread(y.to_u64()) << 1))
}

/// Spreads each coordinate with the derived sequence, then offsets lanes.
#[inline]
pub fn encode_3d_magicbits<M: MortonCode>(x: CoordOf<M>, y: CoordOf<M>, z: CoordOf<M>) -> M {
    let magic = magic_for::<M>(Dim::Three);
    M::from_u64(
        magic.spread(x.to_u64()) | (magic.spread(y.to_u64()) << 1) | (magic.spread(z.to_u64()) << 2),
    )
}
