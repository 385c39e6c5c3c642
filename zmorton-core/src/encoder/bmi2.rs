// =============================================================================
// BMI2 Deposit Encoders
// =============================================================================
//
// One `pdep` per coordinate into its lane mask. `pdep` only consumes as many
// source bits as the mask has set bits, so out-of-field coordinate bits are
// dropped exactly like the reference drops them.
//
// These functions are safe to call only on a CPU with BMI2. They are crate
// private and reach callers solely through `Registry::new`, which registers
// them only when `Capabilities::detect` reported BMI2.

use core::arch::x86_64::_pdep_u64;

use crate::codec::{Coordinate, CoordOf, MortonCode};
use crate::intrinsics::lane_mask;

const LANES_2D_32: [u64; 2] = [lane_mask(2, 0, 16), lane_mask(2, 1, 16)];
const LANES_2D_64: [u64; 2] = [lane_mask(2, 0, 32), lane_mask(2, 1, 32)];
const LANES_3D_32: [u64; 3] = [lane_mask(3, 0, 10), lane_mask(3, 1, 10), lane_mask(3, 2, 10)];
const LANES_3D_64: [u64; 3] = [lane_mask(3, 0, 21), lane_mask(3, 1, 21), lane_mask(3, 2, 21)];

/// Lane masks for 2D codes of width `M`.
#[inline(always)]
pub(crate) fn lanes_2d<M: MortonCode>() -> &'static [u64; 2] {
    if M::BITS == 32 {
        &LANES_2D_32
    } else {
        &LANES_2D_64
    }
}

/// Lane masks for 3D codes of width `M`.
#[inline(always)]
pub(crate) fn lanes_3d<M: MortonCode>() -> &'static [u64; 3] {
    if M::BITS == 32 {
        &LANES_3D_32
    } else {
        &LANES_3D_64
    }
}

#[target_feature(enable = "bmi2")]
unsafe fn deposit_2d(x: u64, y: u64, lanes: &[u64; 2]) -> u64 {
    _pdep_u64(x, lanes[0]) | _pdep_u64(y, lanes[1])
}

#[target_feature(enable = "bmi2")]
unsafe fn deposit_3d(x: u64, y: u64, z: u64, lanes: &[u64; 3]) -> u64 {
    _pdep_u64(x, lanes[0]) | _pdep_u64(y, lanes[1]) | _pdep_u64(z, lanes[2])
}

pub(crate) fn encode_2d_bmi2<M: MortonCode>(x: CoordOf<M>, y: CoordOf<M>) -> M {
    // SAFETY: only registered after the runtime probe confirmed BMI2.
    let code = unsafe { deposit_2d(x.to_u64(), y.to_u64(), lanes_2d::<M>()) };
    M::from_u64(code)
}

pub(crate) fn encode_3d_bmi2<M: MortonCode>(x: CoordOf<M>, y: CoordOf<M>, z: CoordOf<M>) -> M {
    // SAFETY: only registered after the runtime probe confirmed BMI2.
    let code = unsafe { deposit_3d(x.to_u64(), y.to_u64(), z.to_u64(), lanes_3d::<M>()) };
    M::from_u64(code)
}
