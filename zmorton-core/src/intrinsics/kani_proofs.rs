//! Kani formal verification proofs for the intrinsics module.
//!
//! These proofs cover the derived magic-bit sequences and lane masks for the
//! 32-bit widths, where the state space is small enough for the solver.
//!
//! Run with: `cargo kani --package zmorton-core`

use super::bits::lane_mask;
use super::magic::{MAGIC_2D_32, MAGIC_3D_32};

// ============================================================================
// Proof 1: 2D spread and compact are inverses
// ============================================================================

/// compact(spread(x)) == x for every 16-bit field value.
#[kani::proof]
fn verify_magic_2d_32_inverse() {
    let x: u64 = kani::any();
    kani::assume(x <= 0xFFFF);

    let s = MAGIC_2D_32.spread(x);
    kani::assert(MAGIC_2D_32.compact(s) == x, "spread then compact must return original");
}

// ============================================================================
// Proof 2: 3D spread stays inside lane 0
// ============================================================================

/// Spreading never sets a bit outside the lane-0 mask, whatever the input.
#[kani::proof]
fn verify_magic_3d_32_lane_containment() {
    let x: u64 = kani::any();

    let s = MAGIC_3D_32.spread(x);
    kani::assert(s & !lane_mask(3, 0, 10) == 0, "spread must stay in lane 0");
}

// ============================================================================
// Proof 3: 3D spread and compact are inverses
// ============================================================================

/// compact(spread(x)) == x for every 10-bit field value.
#[kani::proof]
fn verify_magic_3d_32_inverse() {
    let x: u64 = kani::any();
    kani::assume(x <= 0x3FF);

    let s = MAGIC_3D_32.spread(x);
    kani::assert(MAGIC_3D_32.compact(s) == x, "spread then compact 3D must return original");
}
