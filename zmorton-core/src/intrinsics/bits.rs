// =============================================================================
// Bit Manipulation Helpers and Capability Probe
// =============================================================================
//
// Lane masks, significant-bit counting, and the one-time runtime probe that
// decides whether the hardware deposit/extract variants get registered.

/// Number of significant bits in `x` (position of the highest set bit plus one).
///
/// Returns 0 for `x == 0`.
#[inline(always)]
pub const fn significant_bits(x: u64) -> u32 {
    64 - x.leading_zeros()
}

/// Lane mask for coordinate `lane` of a `dim`-dimensional code with `field_bits`
/// bits per coordinate.
///
/// Sets every bit `b * dim + lane` for `b < field_bits`, e.g. `0x55555555` for
/// lane 0 of a 2D/32 code and `0x12492492` for lane 1 of a 3D/32 code.
pub const fn lane_mask(dim: u32, lane: u32, field_bits: u32) -> u64 {
    let mut mask = 0u64;
    let mut b = 0;
    while b < field_bits {
        mask |= 1u64 << (b * dim + lane);
        b += 1;
    }
    mask
}

/// Number of `chunk_bits`-wide chunks needed to cover `bits` bits.
#[inline(always)]
pub const fn chunk_count(bits: u32, chunk_bits: u32) -> u32 {
    bits.div_ceil(chunk_bits)
}

/// CPU capabilities relevant to variant registration.
///
/// Constructed only by [`Capabilities::detect`] or [`Capabilities::portable`],
/// so a value claiming BMI2 always reflects the running CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    bmi2: bool,
}

impl Capabilities {
    /// Probes the running CPU.
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        let bmi2 = std::arch::is_x86_feature_detected!("bmi2");
        #[cfg(not(target_arch = "x86_64"))]
        let bmi2 = false;

        log::debug!("capability probe: bmi2={}", bmi2);
        Self { bmi2 }
    }

    /// Capabilities with every hardware feature disabled.
    pub const fn portable() -> Self {
        Self { bmi2: false }
    }

    /// Whether BMI2 `pdep`/`pext` are available.
    pub const fn bmi2(&self) -> bool {
        self.bmi2
    }
}
