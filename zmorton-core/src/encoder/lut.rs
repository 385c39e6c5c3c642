// =============================================================================
// Lookup-Table Encoders
// =============================================================================
//
// Coordinates are consumed in 8-bit chunks. The plain tables hold a chunk
// spread into lane 0 and are shifted into place at runtime; the shifted tables
// already hold the entry at its absolute code position for every (lane, chunk)
// pair. ET variants stop once every remaining chunk is zero.

use crate::codec::{Coordinate, CoordOf, Dim, MortonCode};
use crate::intrinsics::{chunk_count, significant_bits};
use crate::tables::{
    spread_table, ENCODE_CHUNK_BITS, SPREAD_2D, SPREAD_2D_SHIFTED, SPREAD_3D, SPREAD_3D_SHIFTED,
};

const CHUNK_MASK: u64 = (1 << ENCODE_CHUNK_BITS) - 1;

#[inline(always)]
fn chunk_of(v: u64, shift: u32) -> usize {
    ((v >> shift) & CHUNK_MASK) as usize
}

#[inline(always)]
fn masked_2d<M: MortonCode>(x: CoordOf<M>, y: CoordOf<M>) -> (u64, u64) {
    let mask = M::field_mask(Dim::Two);
    (x.to_u64() & mask, y.to_u64() & mask)
}

#[inline(always)]
fn masked_3d<M: MortonCode>(x: CoordOf<M>, y: CoordOf<M>, z: CoordOf<M>) -> (u64, u64, u64) {
    let mask = M::field_mask(Dim::Three);
    (x.to_u64() & mask, y.to_u64() & mask, z.to_u64() & mask)
}

// =============================================================================
// 2D
// =============================================================================

#[inline(always)]
fn lut_2d(x: u64, y: u64, chunks: u32) -> u64 {
    let mut answer = 0u64;
    for i in 0..chunks {
        let shift = i * ENCODE_CHUNK_BITS;
        let entry = SPREAD_2D[chunk_of(x, shift)] | (SPREAD_2D[chunk_of(y, shift)] << 1);
        answer |= entry << (shift * 2);
    }
    answer
}

#[inline(always)]
fn lut_shifted_2d(x: u64, y: u64, chunks: u32) -> u64 {
    let mut answer = 0u64;
    for i in 0..chunks as usize {
        let shift = i as u32 * ENCODE_CHUNK_BITS;
        answer |= SPREAD_2D_SHIFTED[0][i][chunk_of(x, shift)]
            | SPREAD_2D_SHIFTED[1][i][chunk_of(y, shift)];
    }
    answer
}

/// One spread table, runtime lane and chunk shifts.
pub fn encode_2d_lut<M: MortonCode>(x: CoordOf<M>, y: CoordOf<M>) -> M {
    let (x, y) = masked_2d::<M>(x, y);
    let chunks = chunk_count(M::field_bits(Dim::Two), ENCODE_CHUNK_BITS);
    M::from_u64(lut_2d(x, y, chunks))
}

/// [`encode_2d_lut`] that skips all-zero high chunks.
pub fn encode_2d_lut_et<M: MortonCode>(x: CoordOf<M>, y: CoordOf<M>) -> M {
    let (x, y) = masked_2d::<M>(x, y);
    let chunks = chunk_count(significant_bits(x | y), ENCODE_CHUNK_BITS);
    M::from_u64(lut_2d(x, y, chunks))
}

/// Per (lane, chunk) pre-shifted tables, no shift after lookup.
pub fn encode_2d_lut_shifted<M: MortonCode>(x: CoordOf<M>, y: CoordOf<M>) -> M {
    let (x, y) = masked_2d::<M>(x, y);
    let chunks = chunk_count(M::field_bits(Dim::Two), ENCODE_CHUNK_BITS);
    M::from_u64(lut_shifted_2d(x, y, chunks))
}

/// [`encode_2d_lut_shifted`] that skips all-zero high chunks.
pub fn encode_2d_lut_shifted_et<M: MortonCode>(x: CoordOf<M>, y: CoordOf<M>) -> M {
    let (x, y) = masked_2d::<M>(x, y);
    let chunks = chunk_count(significant_bits(x | y), ENCODE_CHUNK_BITS);
    M::from_u64(lut_shifted_2d(x, y, chunks))
}

// =============================================================================
// 3D
// =============================================================================

#[inline(always)]
fn lut_3d(x: u64, y: u64, z: u64, chunks: u32) -> u64 {
    let mut answer = 0u64;
    for i in 0..chunks {
        let shift = i * ENCODE_CHUNK_BITS;
        let entry = SPREAD_3D[chunk_of(x, shift)]
            | (SPREAD_3D[chunk_of(y, shift)] << 1)
            | (SPREAD_3D[chunk_of(z, shift)] << 2);
        answer |= entry << (shift * 3);
    }
    answer
}

#[inline(always)]
fn lut_shifted_3d(x: u64, y: u64, z: u64, chunks: u32) -> u64 {
    let mut answer = 0u64;
    for i in 0..chunks as usize {
        let shift = i as u32 * ENCODE_CHUNK_BITS;
        answer |= SPREAD_3D_SHIFTED[0][i][chunk_of(x, shift)]
            | SPREAD_3D_SHIFTED[1][i][chunk_of(y, shift)]
            | SPREAD_3D_SHIFTED[2][i][chunk_of(z, shift)];
    }
    answer
}

/// One spread table, runtime lane and chunk shifts.
pub fn encode_3d_lut<M: MortonCode>(x: CoordOf<M>, y: CoordOf<M>, z: CoordOf<M>) -> M {
    let (x, y, z) = masked_3d::<M>(x, y, z);
    let chunks = chunk_count(M::field_bits(Dim::Three), ENCODE_CHUNK_BITS);
    M::from_u64(lut_3d(x, y, z, chunks))
}

/// [`encode_3d_lut`] that skips all-zero high chunks.
pub fn encode_3d_lut_et<M: MortonCode>(x: CoordOf<M>, y: CoordOf<M>, z: CoordOf<M>) -> M {
    let (x, y, z) = masked_3d::<M>(x, y, z);
    let chunks = chunk_count(significant_bits(x | y | z), ENCODE_CHUNK_BITS);
    M::from_u64(lut_3d(x, y, z, chunks))
}

/// Per (lane, chunk) pre-shifted tables, no shift after lookup.
pub fn encode_3d_lut_shifted<M: MortonCode>(x: CoordOf<M>, y: CoordOf<M>, z: CoordOf<M>) -> M {
    let (x, y, z) = masked_3d::<M>(x, y, z);
    let chunks = chunk_count(M::field_bits(Dim::Three), ENCODE_CHUNK_BITS);
    M::from_u64(lut_shifted_3d(x, y, z, chunks))
}

/// [`encode_3d_lut_shifted`] that skips all-zero high chunks.
pub fn encode_3d_lut_shifted_et<M: MortonCode>(
    x: CoordOf<M>,
    y: CoordOf<M>,
    z: CoordOf<M>,
) -> M {
    let (x, y, z) = masked_3d::<M>(x, y, z);
    let chunks = chunk_count(significant_bits(x | y | z), ENCODE_CHUNK_BITS);
    M::from_u64(lut_shifted_3d(x, y, z, chunks))
}

// =============================================================================
// Configurable chunk width
// =============================================================================

/// LUT encoder with `CHUNK`-bit chunks (`1..=16`).
///
/// The table has `2^CHUNK` entries and is built on first use; the registry
/// touches it at registration so no build happens inside a timed region.
pub fn encode_2d_chunked<M: MortonCode, const CHUNK: u32>(x: CoordOf<M>, y: CoordOf<M>) -> M {
    let table = spread_table(Dim::Two, CHUNK);
    let chunk_mask = (1u64 << CHUNK) - 1;
    let (x, y) = masked_2d::<M>(x, y);

    let mut answer = 0u64;
    for i in 0..chunk_count(M::field_bits(Dim::Two), CHUNK) {
        let shift = i * CHUNK;
        let entry = table[((x >> shift) & chunk_mask) as usize]
            | (table[((y >> shift) & chunk_mask) as usize] << 1);
        answer |= entry << (shift * 2);
    }
    M::from_u64(answer)
}

/// LUT encoder with `CHUNK`-bit chunks (`1..=16`).
pub fn encode_3d_chunked<M: MortonCode, const CHUNK: u32>(
    x: CoordOf<M>,
    y: CoordOf<M>,
    z: CoordOf<M>,
) -> M {
    let table = spread_table(Dim::Three, CHUNK);
    let chunk_mask = (1u64 << CHUNK) - 1;
    let (x, y, z) = masked_3d::<M>(x, y, z);

    let mut answer = 0u64;
    for i in 0..chunk_count(M::field_bits(Dim::Three), CHUNK) {
        let shift = i * CHUNK;
        let entry = table[((x >> shift) & chunk_mask) as usize]
            | (table[((y >> shift) & chunk_mask) as usize] << 1)
            | (table[((z >> shift) & chunk_mask) as usize] << 2);
        answer |= entry << (shift * 3);
    }
    M::from_u64(answer)
}
