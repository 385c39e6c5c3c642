//! Bit-by-bit reference codec.
//!
//! This is the oracle every other variant is checked against. It is written to
//! be obviously correct by inspection: bit `b` of coordinate `k` lands on bit
//! `b * D + k` of the code, one bit at a time, nothing else.
//!
//! Only bits `[0, field_bits)` of a coordinate are visited, so coordinate bits at
//! or above the field width never reach the code. Symmetrically the decoder only
//! reads code bits `[0, D * field_bits)`.

use crate::codec::{Coordinate, CoordOf, Dim, MortonCode};

/// Encodes `coords.len()` coordinates into one code.
///
/// # Panics
///
/// Panics if `coords.len() * field_bits` exceeds 64.
pub fn control_encode(coords: &[u64], field_bits: u32) -> u64 {
    let dim = coords.len() as u32;
    assert!(dim * field_bits <= 64, "reference codec supports at most 64 result bits");

    let mut answer = 0u64;
    for (k, &c) in coords.iter().enumerate() {
        for b in 0..field_bits {
            if c & (1u64 << b) != 0 {
                answer |= 1u64 << (b * dim + k as u32);
            }
        }
    }
    answer
}

/// Decodes `code` into `out.len()` coordinates.
///
/// # Panics
///
/// Panics if `out.len() * field_bits` exceeds 64.
pub fn control_decode(code: u64, out: &mut [u64], field_bits: u32) {
    let dim = out.len() as u32;
    assert!(dim * field_bits <= 64, "reference codec supports at most 64 result bits");

    for (k, c) in out.iter_mut().enumerate() {
        *c = 0;
        for b in 0..field_bits {
            if code & (1u64 << (b * dim + k as u32)) != 0 {
                *c |= 1u64 << b;
            }
        }
    }
}

/// Reference 2D encoder bound to the field width of `M`.
pub fn control_encode_2d<M: MortonCode>(x: CoordOf<M>, y: CoordOf<M>) -> M {
    M::from_u64(control_encode(&[x.to_u64(), y.to_u64()], M::field_bits(Dim::Two)))
}

/// Reference 3D encoder bound to the field width of `M`.
pub fn control_encode_3d<M: MortonCode>(x: CoordOf<M>, y: CoordOf<M>, z: CoordOf<M>) -> M {
    M::from_u64(control_encode(
        &[x.to_u64(), y.to_u64(), z.to_u64()],
        M::field_bits(Dim::Three),
    ))
}

/// Reference 2D decoder bound to the field width of `M`.
pub fn control_decode_2d<M: MortonCode>(m: M) -> (CoordOf<M>, CoordOf<M>) {
    let mut out = [0u64; 2];
    control_decode(m.to_u64(), &mut out, M::field_bits(Dim::Two));
    (Coordinate::from_u64(out[0]), Coordinate::from_u64(out[1]))
}

/// Reference 3D decoder bound to the field width of `M`.
pub fn control_decode_3d<M: MortonCode>(m: M) -> (CoordOf<M>, CoordOf<M>, CoordOf<M>) {
    let mut out = [0u64; 3];
    control_decode(m.to_u64(), &mut out, M::field_bits(Dim::Three));
    (
        Coordinate::from_u64(out[0]),
        Coordinate::from_u64(out[1]),
        Coordinate::from_u64(out[2]),
    )
}
