//! Encoder variants: `(coord × D) -> morton`.
//!
//! Every function here satisfies the same contract as
//! [`control_encode`](crate::reference::control_encode): bit `b` of coordinate
//! `k` lands on bit `b * D + k`, and coordinate bits at or above the field width
//! are ignored. They differ only in how they get there.

/// Bit-by-bit loops.
pub mod bitloop;

/// Lookup-table strategies.
pub mod lut;

/// Magic-bits parallel spreading.
pub mod magicbits;

/// BMI2 `pdep` deposit (x86_64 only, registered behind the capability probe).
#[cfg(target_arch = "x86_64")]
pub(crate) mod bmi2;

pub use bitloop::{encode_2d_for, encode_2d_for_et, encode_3d_for, encode_3d_for_et};
pub use lut::{
    encode_2d_chunked, encode_2d_lut, encode_2d_lut_et, encode_2d_lut_shifted,
    encode_2d_lut_shifted_et, encode_3d_chunked, encode_3d_lut, encode_3d_lut_et,
    encode_3d_lut_shifted, encode_3d_lut_shifted_et,
};
pub use magicbits::{encode_2d_magicbits, encode_3d_magicbits};
