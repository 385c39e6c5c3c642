// =============================================================================
// BMI2 Extract Decoders
// =============================================================================
//
// One `pext` per coordinate with the encoder's lane masks. Code bits outside
// every lane mask are never gathered.
//
// Same safety contract as the deposit encoders: crate private, handed out only
// by `Registry::new` after the probe confirmed BMI2.

use core::arch::x86_64::_pext_u64;

use crate::codec::{Coordinate, CoordOf, MortonCode};
use crate::encoder::bmi2::{lanes_2d, lanes_3d};

#[target_feature(enable = "bmi2")]
unsafe fn extract_2d(code: u64, lanes: &[u64; 2]) -> (u64, u64) {
    (_pext_u64(code, lanes[0]), _pext_u64(code, lanes[1]))
}

#[target_feature(enable = "bmi2")]
unsafe fn extract_3d(code: u64, lanes: &[u64; 3]) -> (u64, u64, u64) {
    (
        _pext_u64(code, lanes[0]),
        _pext_u64(code, lanes[1]),
        _pext_u64(code, lanes[2]),
    )
}

pub(crate) fn decode_2d_bmi2<M: MortonCode>(m: M) -> (CoordOf<M>, CoordOf<M>) {
    // SAFETY: only registered after the runtime probe confirmed BMI2.
    let (x, y) = unsafe { extract_2d(m.to_u64(), lanes_2d::<M>()) };
    (Coordinate::from_u64(x), Coordinate::from_u64(y))
}

pub(crate) fn decode_3d_bmi2<M: MortonCode>(m: M) -> (CoordOf<M>, CoordOf<M>, CoordOf<M>) {
    // SAFETY: only registered after the runtime probe confirmed BMI2.
    let (x, y, z) = unsafe { extract_3d(m.to_u64(), lanes_3d::<M>()) };
    (Coordinate::from_u64(x), Coordinate::from_u64(y), Coordinate::from_u64(z))
}
