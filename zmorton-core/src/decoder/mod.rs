//! Decoder variants: `morton -> (coord × D)`.
//!
//! Each decoder is the exact inverse of the encoders for in-field values and
//! ignores code bits at or above `D * field_bits`, matching
//! [`control_decode`](crate::reference::control_decode).

/// Bit-by-bit loops.
pub mod bitloop;

/// Lookup-table strategies.
pub mod lut;

/// Magic-bits compaction.
pub mod magicbits;

/// BMI2 `pext` extract (x86_64 only, registered behind the capability probe).
#[cfg(target_arch = "x86_64")]
pub(crate) mod bmi2;

pub use bitloop::{decode_2d_for, decode_2d_for_et, decode_3d_for, decode_3d_for_et};
pub use lut::{
    decode_2d_lut, decode_2d_lut_et, decode_2d_lut_shifted, decode_2d_lut_shifted_et,
    decode_3d_lut, decode_3d_lut_et, decode_3d_lut_shifted, decode_3d_lut_shifted_et,
};
pub use magicbits::{decode_2d_magicbits, decode_3d_magicbits};
