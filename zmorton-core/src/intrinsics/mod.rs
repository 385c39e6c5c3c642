// =============================================================================
// Intrinsics Module
// =============================================================================
//
// Low-level bit manipulation shared by the encoder and decoder strategies:
// derived magic-bit sequences, lane masks, and the hardware capability probe.

/// Lane masks, significant-bit helpers, capability probe.
pub mod bits;

/// Derived magic-bits spread/compact sequences.
pub mod magic;

/// Kani formal verification proofs.
#[cfg(kani)]
mod kani_proofs;

// =============================================================================
// Public Re-exports
// =============================================================================

pub use bits::{chunk_count, lane_mask, significant_bits, Capabilities};
pub use magic::{magic_for, MagicBits, MAGIC_2D_32, MAGIC_2D_64, MAGIC_3D_32, MAGIC_3D_64};
