// =============================================================================
// Lookup-Table Decoders
// =============================================================================
//
// The code is consumed in raw chunks of 8 bits (2D, four bits per coordinate)
// or 9 bits (3D, three bits per coordinate). The plain tables extract lane 0 of
// a chunk, so lane k reads the code shifted right by k and the result is shifted
// into coordinate position at runtime. The shifted tables are indexed by the
// unshifted chunk and return bits already at their coordinate position.
//
// Table output past the field width comes from code bits outside the field and
// is masked off.

use crate::codec::{Coordinate, CoordOf, Dim, MortonCode};
use crate::intrinsics::{chunk_count, significant_bits};
use crate::tables::{
    COMPACT_2D, COMPACT_2D_SHIFTED, COMPACT_3D, COMPACT_3D_SHIFTED, DECODE_CHUNK_BITS_2D,
    DECODE_CHUNK_BITS_3D,
};

const MASK_2D: u64 = (1 << DECODE_CHUNK_BITS_2D) - 1;
const MASK_3D: u64 = (1 << DECODE_CHUNK_BITS_3D) - 1;
const PER_LANE_2D: u32 = DECODE_CHUNK_BITS_2D / 2;
const PER_LANE_3D: u32 = DECODE_CHUNK_BITS_3D / 3;

#[inline(always)]
fn full_chunks_2d<M: MortonCode>() -> u32 {
    chunk_count(2 * M::field_bits(Dim::Two), DECODE_CHUNK_BITS_2D)
}

#[inline(always)]
fn full_chunks_3d<M: MortonCode>() -> u32 {
    chunk_count(3 * M::field_bits(Dim::Three), DECODE_CHUNK_BITS_3D)
}

/// Chunks up to the highest set bit, never more than the full code needs.
#[inline(always)]
fn live_chunks(code: u64, chunk_bits: u32, full: u32) -> u32 {
    chunk_count(significant_bits(code), chunk_bits).min(full)
}

#[inline(always)]
fn finish_2d<M: MortonCode>(x: u64, y: u64) -> (CoordOf<M>, CoordOf<M>) {
    let mask = M::field_mask(Dim::Two);
    (Coordinate::from_u64(x & mask), Coordinate::from_u64(y & mask))
}

#[inline(always)]
fn finish_3d<M: MortonCode>(x: u64, y: u64, z: u64) -> (CoordOf<M>, CoordOf<M>, CoordOf<M>) {
    let mask = M::field_mask(Dim::Three);
    (
        Coordinate::from_u64(x & mask),
        Coordinate::from_u64(y & mask),
        Coordinate::from_u64(z & mask),
    )
}

// =============================================================================
// 2D
// =============================================================================

#[inline(always)]
fn lut_2d(code: u64, chunks: u32) -> (u64, u64) {
    let (mut x, mut y) = (0u64, 0u64);
    for i in 0..chunks {
        let shift = i * DECODE_CHUNK_BITS_2D;
        let out = i * PER_LANE_2D;
        x |= (COMPACT_2D[((code >> shift) & MASK_2D) as usize] as u64) << out;
        y |= (COMPACT_2D[((code >> (shift + 1)) & MASK_2D) as usize] as u64) << out;
    }
    (x, y)
}

#[inline(always)]
fn lut_shifted_2d(code: u64, chunks: u32) -> (u64, u64) {
    let (mut x, mut y) = (0u64, 0u64);
    for i in 0..chunks as usize {
        let v = ((code >> (i as u32 * DECODE_CHUNK_BITS_2D)) & MASK_2D) as usize;
        x |= COMPACT_2D_SHIFTED[0][i][v] as u64;
        y |= COMPACT_2D_SHIFTED[1][i][v] as u64;
    }
    (x, y)
}

/// One compact table, runtime lane and chunk shifts.
pub fn decode_2d_lut<M: MortonCode>(m: M) -> (CoordOf<M>, CoordOf<M>) {
    let (x, y) = lut_2d(m.to_u64(), full_chunks_2d::<M>());
    finish_2d::<M>(x, y)
}

/// [`decode_2d_lut`] that skips all-zero high chunks.
pub fn decode_2d_lut_et<M: MortonCode>(m: M) -> (CoordOf<M>, CoordOf<M>) {
    let code = m.to_u64();
    let chunks = live_chunks(code, DECODE_CHUNK_BITS_2D, full_chunks_2d::<M>());
    let (x, y) = lut_2d(code, chunks);
    finish_2d::<M>(x, y)
}

/// Per (lane, chunk) pre-shifted tables.
pub fn decode_2d_lut_shifted<M: MortonCode>(m: M) -> (CoordOf<M>, CoordOf<M>) {
    let (x, y) = lut_shifted_2d(m.to_u64(), full_chunks_2d::<M>());
    finish_2d::<M>(x, y)
}

/// [`decode_2d_lut_shifted`] that skips all-zero high chunks.
pub fn decode_2d_lut_shifted_et<M: MortonCode>(m: M) -> (CoordOf<M>, CoordOf<M>) {
    let code = m.to_u64();
    let chunks = live_chunks(code, DECODE_CHUNK_BITS_2D, full_chunks_2d::<M>());
    let (x, y) = lut_shifted_2d(code, chunks);
    finish_2d::<M>(x, y)
}

// =============================================================================
// 3D
// =============================================================================

#[inline(always)]
fn lut_3d(code: u64, chunks: u32) -> (u64, u64, u64) {
    let (mut x, mut y, mut z) = (0u64, 0u64, 0u64);
    for i in 0..chunks {
        let shift = i * DECODE_CHUNK_BITS_3D;
        let out = i * PER_LANE_3D;
        x |= (COMPACT_3D[((code >> shift) & MASK_3D) as usize] as u64) << out;
        y |= (COMPACT_3D[((code >> (shift + 1)) & MASK_3D) as usize] as u64) << out;
        z |= (COMPACT_3D[((code >> (shift + 2)) & MASK_3D) as usize] as u64) << out;
    }
    (x, y, z)
}

#[inline(always)]
fn lut_shifted_3d(code: u64, chunks: u32) -> (u64, u64, u64) {
    let (mut x, mut y, mut z) = (0u64, 0u64, 0u64);
    for i in 0..chunks as usize {
        let v = ((code >> (i as u32 * DECODE_CHUNK_BITS_3D)) & MASK_3D) as usize;
        x |= COMPACT_3D_SHIFTED[0][i][v] as u64;
        y |= COMPACT_3D_SHIFTED[1][i][v] as u64;
        z |= COMPACT_3D_SHIFTED[2][i][v] as u64;
    }
    (x, y, z)
}

/// One compact table, runtime lane and chunk shifts.
pub fn decode_3d_lut<M: MortonCode>(m: M) -> (CoordOf<M>, CoordOf<M>, CoordOf<M>) {
    let (x, y, z) = lut_3d(m.to_u64(), full_chunks_3d::<M>());
    finish_3d::<M>(x, y, z)
}

/// [`decode_3d_lut`] that skips all-zero high chunks.
pub fn decode_3d_lut_et<M: MortonCode>(m: M) -> (CoordOf<M>, CoordOf<M>, CoordOf<M>) {
    let code = m.to_u64();
    let chunks = live_chunks(code, DECODE_CHUNK_BITS_3D, full_chunks_3d::<M>());
    let (x, y, z) = lut_3d(code, chunks);
    finish_3d::<M>(x, y, z)
}

/// Per (lane, chunk) pre-shifted tables.
pub fn decode_3d_lut_shifted<M: MortonCode>(m: M) -> (CoordOf<M>, CoordOf<M>, CoordOf<M>) {
    let (x, y, z) = lut_shifted_3d(m.to_u64(), full_chunks_3d::<M>());
    finish_3d::<M>(x, y, z)
}

/// [`decode_3d_lut_shifted`] that skips all-zero high chunks.
pub fn decode_3d_lut_shifted_et<M: MortonCode>(m: M) -> (CoordOf<M>, CoordOf<M>, CoordOf<M>) {
    let code = m.to_u64();
    let chunks = live_chunks(code, DECODE_CHUNK_BITS_3D, full_chunks_3d::<M>());
    let (x, y, z) = lut_shifted_3d(code, chunks);
    finish_3d::<M>(x, y, z)
}
