//! Precomputed lookup tables for the LUT strategies.
//!
//! Every table is derived from one of two pure functions, [`spread_chunk`] and
//! [`compact_chunk`], so each entry can be checked against the reference codec on
//! its own. The fixed-size tables are built by `const fn` at compile time; the
//! configurable-width tables used by the chunked encoders are built once on first
//! use and shared read-only afterwards.
//!
//! # Layout
//!
//! | Table                 | Index                  | Entry                                   |
//! |-----------------------|------------------------|-----------------------------------------|
//! | `SPREAD_nD`           | 8-bit coordinate chunk | chunk bits spread into lane 0           |
//! | `SPREAD_nD_SHIFTED`   | `[lane][chunk][value]` | spread chunk at its absolute code bits  |
//! | `COMPACT_nD`          | raw code chunk         | lane-0 bits of the chunk, compacted     |
//! | `COMPACT_nD_SHIFTED`  | `[lane][chunk][value]` | lane bits at their absolute coord bits  |

use std::sync::OnceLock;

use crate::codec::Dim;

/// Coordinate bits consumed per lookup by the encoders.
pub const ENCODE_CHUNK_BITS: u32 = 8;
/// Code bits consumed per lookup by the 2D decoders (4 bits per coordinate).
pub const DECODE_CHUNK_BITS_2D: u32 = 8;
/// Code bits consumed per lookup by the 3D decoders (3 bits per coordinate).
pub const DECODE_CHUNK_BITS_3D: u32 = 9;

/// Widest chunk supported by [`spread_table`].
pub const MAX_CHUNKED_BITS: u32 = 16;

const ENCODE_ENTRIES: usize = 1 << ENCODE_CHUNK_BITS;
const DECODE_ENTRIES_2D: usize = 1 << DECODE_CHUNK_BITS_2D;
const DECODE_ENTRIES_3D: usize = 1 << DECODE_CHUNK_BITS_3D;

// Chunk positions needed by the widest (64-bit) codes.
const ENCODE_CHUNKS_2D: usize = 4; // 32-bit fields
const ENCODE_CHUNKS_3D: usize = 3; // 21-bit fields
const DECODE_CHUNKS_2D: usize = 8; // 64 code bits
const DECODE_CHUNKS_3D: usize = 7; // 63 code bits

// =============================================================================
// Pure chunk functions
// =============================================================================

/// Spreads the low `chunk_bits` bits of `value` so bit `i` lands on bit `i * dim`.
pub const fn spread_chunk(value: u32, dim: u32, chunk_bits: u32) -> u64 {
    let mut out = 0u64;
    let mut i = 0;
    while i < chunk_bits {
        if value & (1 << i) != 0 {
            out |= 1u64 << (i * dim);
        }
        i += 1;
    }
    out
}

/// Gathers bits `0, dim, 2 * dim, ...` of a `chunk_bits`-wide code chunk into
/// contiguous low bits.
pub const fn compact_chunk(value: u32, dim: u32, chunk_bits: u32) -> u32 {
    let mut out = 0u32;
    let mut i = 0;
    while i * dim < chunk_bits {
        if value & (1 << (i * dim)) != 0 {
            out |= 1 << i;
        }
        i += 1;
    }
    out
}

// =============================================================================
// Encode tables
// =============================================================================

const fn build_spread(dim: u32) -> [u64; ENCODE_ENTRIES] {
    let mut table = [0u64; ENCODE_ENTRIES];
    let mut v = 0;
    while v < ENCODE_ENTRIES {
        table[v] = spread_chunk(v as u32, dim, ENCODE_CHUNK_BITS);
        v += 1;
    }
    table
}

const fn build_spread_shifted<const LANES: usize, const CHUNKS: usize>(
    base: &[u64; ENCODE_ENTRIES],
) -> [[[u64; ENCODE_ENTRIES]; CHUNKS]; LANES] {
    let dim = LANES as u32;
    let mut table = [[[0u64; ENCODE_ENTRIES]; CHUNKS]; LANES];
    let mut lane = 0;
    while lane < LANES {
        let mut chunk = 0;
        while chunk < CHUNKS {
            // Bits pushed past bit 63 belong to coordinate bits beyond the field.
            let shift = chunk as u32 * ENCODE_CHUNK_BITS * dim + lane as u32;
            let mut v = 0;
            while v < ENCODE_ENTRIES {
                table[lane][chunk][v] = base[v] << shift;
                v += 1;
            }
            chunk += 1;
        }
        lane += 1;
    }
    table
}

/// 8-bit chunk spread into a 2D lane.
pub static SPREAD_2D: [u64; ENCODE_ENTRIES] = build_spread(2);
/// 8-bit chunk spread into a 3D lane.
pub static SPREAD_3D: [u64; ENCODE_ENTRIES] = build_spread(3);

/// `[lane][chunk][value]`, pre-shifted to the absolute code position.
pub static SPREAD_2D_SHIFTED: [[[u64; ENCODE_ENTRIES]; ENCODE_CHUNKS_2D]; 2] =
    build_spread_shifted::<2, ENCODE_CHUNKS_2D>(&build_spread(2));
/// `[lane][chunk][value]`, pre-shifted to the absolute code position.
pub static SPREAD_3D_SHIFTED: [[[u64; ENCODE_ENTRIES]; ENCODE_CHUNKS_3D]; 3] =
    build_spread_shifted::<3, ENCODE_CHUNKS_3D>(&build_spread(3));

// =============================================================================
// Decode tables
// =============================================================================

const fn build_compact<const N: usize>(dim: u32, chunk_bits: u32) -> [u32; N] {
    let mut table = [0u32; N];
    let mut v = 0;
    while v < N {
        table[v] = compact_chunk(v as u32, dim, chunk_bits);
        v += 1;
    }
    table
}

const fn build_compact_shifted<const N: usize, const CHUNKS: usize, const LANES: usize>(
    base: &[u32; N],
) -> [[[u32; N]; CHUNKS]; LANES] {
    let dim = LANES as u32;
    let chunk_bits = N.trailing_zeros();
    let per_lane = chunk_bits / dim;
    let mut table = [[[0u32; N]; CHUNKS]; LANES];
    let mut lane = 0;
    while lane < LANES {
        let mut chunk = 0;
        while chunk < CHUNKS {
            let shift = chunk as u32 * per_lane;
            let mut v = 0;
            while v < N {
                table[lane][chunk][v] = base[v >> lane] << shift;
                v += 1;
            }
            chunk += 1;
        }
        lane += 1;
    }
    table
}

/// Lane-0 bits of an 8-bit 2D code chunk.
pub static COMPACT_2D: [u32; DECODE_ENTRIES_2D] = build_compact(2, DECODE_CHUNK_BITS_2D);
/// Lane-0 bits of a 9-bit 3D code chunk.
pub static COMPACT_3D: [u32; DECODE_ENTRIES_3D] = build_compact(3, DECODE_CHUNK_BITS_3D);

/// `[lane][chunk][value]`, pre-shifted to the absolute coordinate position.
pub static COMPACT_2D_SHIFTED: [[[u32; DECODE_ENTRIES_2D]; DECODE_CHUNKS_2D]; 2] =
    build_compact_shifted::<DECODE_ENTRIES_2D, DECODE_CHUNKS_2D, 2>(&build_compact(
        2,
        DECODE_CHUNK_BITS_2D,
    ));
/// `[lane][chunk][value]`, pre-shifted to the absolute coordinate position.
pub static COMPACT_3D_SHIFTED: [[[u32; DECODE_ENTRIES_3D]; DECODE_CHUNKS_3D]; 3] =
    build_compact_shifted::<DECODE_ENTRIES_3D, DECODE_CHUNKS_3D, 3>(&build_compact(
        3,
        DECODE_CHUNK_BITS_3D,
    ));

// =============================================================================
// Configurable-width spread tables
// =============================================================================

type LazyTable = OnceLock<Box<[u64]>>;

static CHUNKED_2D: [LazyTable; MAX_CHUNKED_BITS as usize + 1] =
    [const { OnceLock::new() }; MAX_CHUNKED_BITS as usize + 1];
static CHUNKED_3D: [LazyTable; MAX_CHUNKED_BITS as usize + 1] =
    [const { OnceLock::new() }; MAX_CHUNKED_BITS as usize + 1];

/// Spread table with `2^chunk_bits` entries for `dim`, built on first use.
///
/// # Panics
///
/// Panics if `chunk_bits` is 0 or above [`MAX_CHUNKED_BITS`].
pub fn spread_table(dim: Dim, chunk_bits: u32) -> &'static [u64] {
    assert!(
        (1..=MAX_CHUNKED_BITS).contains(&chunk_bits),
        "chunk width {} outside 1..={}",
        chunk_bits,
        MAX_CHUNKED_BITS
    );
    let slots = match dim {
        Dim::Two => &CHUNKED_2D,
        Dim::Three => &CHUNKED_3D,
    };
    slots[chunk_bits as usize].get_or_init(|| {
        log::debug!("building {} spread table, {}-bit chunks", dim, chunk_bits);
        (0..1u32 << chunk_bits)
            .map(|v| spread_chunk(v, dim.get(), chunk_bits))
            .collect()
    })
}
