// =============================================================================
// Magic-Bits Spreading/Compacting (SWAR operations)
// =============================================================================
//
// The (shift, mask) sequence that spreads a contiguous field into a D-spaced
// lane is a function of D and the field width only. It is derived here by a
// const fn, so each sequence exists once as a constant and nothing is computed
// per call.
//
// Round r works on groups of g = 2^(R-1-r) bits. Going from groups of 2g to
// groups of g, the upper half of every group moves up by g * (D - 1), and the
// mask keeps bit b of the field at (b / g) * g * D + b % g.

use crate::codec::{low_mask, Dim, MortonCode};

/// Upper bound on spreading rounds (field widths up to 64 bits).
pub const MAX_ROUNDS: usize = 6;

/// A derived magic-bits sequence for one (dimension, field width) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagicBits {
    dim: u32,
    field_bits: u32,
    rounds: usize,
    shifts: [u32; MAX_ROUNDS],
    masks: [u64; MAX_ROUNDS],
}

impl MagicBits {
    /// Derives the sequence for `dim` coordinates of `field_bits` bits each.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a const) if `dim * field_bits > 64`.
    pub const fn derive(dim: u32, field_bits: u32) -> Self {
        assert!(dim >= 1 && dim * field_bits <= 64);

        let top = field_bits.next_power_of_two();
        let rounds = top.trailing_zeros() as usize;
        let mut shifts = [0u32; MAX_ROUNDS];
        let mut masks = [0u64; MAX_ROUNDS];

        let mut r = 0;
        while r < rounds {
            let group = top >> (r + 1);
            shifts[r] = group * (dim - 1);
            masks[r] = group_mask(dim, field_bits, group);
            r += 1;
        }

        Self { dim, field_bits, rounds, shifts, masks }
    }

    /// Number of shift-then-mask rounds.
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// Shift amounts, in spreading order.
    pub fn shifts(&self) -> &[u32] {
        &self.shifts[..self.rounds]
    }

    /// Masks, in spreading order. The last one is the lane-0 mask.
    pub fn masks(&self) -> &[u64] {
        &self.masks[..self.rounds]
    }

    /// Spreads the low `field_bits` bits of `x` into lane 0.
    #[inline(always)]
    pub const fn spread(&self, x: u64) -> u64 {
        let mut x = x & low_mask(self.field_bits);
        let mut r = 0;
        while r < self.rounds {
            x = (x | (x << self.shifts[r])) & self.masks[r];
            r += 1;
        }
        x
    }

    /// Compacts lane 0 of `x` back into the low `field_bits` bits.
    #[inline(always)]
    pub const fn compact(&self, x: u64) -> u64 {
        let field = low_mask(self.field_bits);
        if self.rounds == 0 {
            return x & field;
        }
        let mut x = x & self.masks[self.rounds - 1];
        let mut r = self.rounds;
        while r > 0 {
            r -= 1;
            let keep = if r == 0 { field } else { self.masks[r - 1] };
            x = (x | (x >> self.shifts[r])) & keep;
        }
        x
    }

    /// Dimension this sequence was derived for.
    pub const fn dim(&self) -> u32 {
        self.dim
    }
}

/// Bit layout after splitting the field into groups of `group` bits.
const fn group_mask(dim: u32, field_bits: u32, group: u32) -> u64 {
    let mut mask = 0u64;
    let mut b = 0;
    while b < field_bits {
        mask |= 1u64 << ((b / group) * group * dim + b % group);
        b += 1;
    }
    mask
}

/// 2D, 16-bit fields.
pub const MAGIC_2D_32: MagicBits = MagicBits::derive(2, 16);
/// 2D, 32-bit fields.
pub const MAGIC_2D_64: MagicBits = MagicBits::derive(2, 32);
/// 3D, 10-bit fields.
pub const MAGIC_3D_32: MagicBits = MagicBits::derive(3, 10);
/// 3D, 21-bit fields.
pub const MAGIC_3D_64: MagicBits = MagicBits::derive(3, 21);

/// Sequence for Morton width `M` and dimension `dim`.
#[inline(always)]
pub fn magic_for<M: MortonCode>(dim: Dim) -> &'static MagicBits {
    match (M::BITS, dim) {
        (32, Dim::Two) => &MAGIC_2D_32,
        (32, Dim::Three) => &MAGIC_3D_32,
        (_, Dim::Two) => &MAGIC_2D_64,
        (_, Dim::Three) => &MAGIC_3D_64,
    }
}
