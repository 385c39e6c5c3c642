//! Unit tests for the encoder variants.
//!
//! Most cases run against every registered encoder of a group, so hardware
//! variants are covered whenever the running CPU supports them.

#[path = "../common/mod.rs"]
mod common;

use zmorton_core::encoder::{
    encode_2d_chunked, encode_2d_for, encode_2d_for_et, encode_2d_lut, encode_3d_chunked,
    encode_3d_for_et, encode_3d_lut_et, encode_3d_lut_shifted, encode_3d_magicbits,
};
use zmorton_core::reference::{control_encode_2d, control_encode_3d};

// =========================================================================
// Concrete scenarios
// =========================================================================

#[test]
fn test_2d_interleave_scenario_every_encoder() {
    let reg = common::full_registry();
    for v in &reg.bits32.encode_2d {
        assert_eq!((v.func)(0b0011, 0b0101), 0b0010_0111, "{}", v.label);
    }
    for v in &reg.bits64.encode_2d {
        assert_eq!((v.func)(0b0011, 0b0101), 0b0010_0111, "{}", v.label);
    }
}

#[test]
fn test_3d_5_2_9_every_encoder() {
    let reg = common::full_registry();
    for v in &reg.bits32.encode_3d {
        assert_eq!((v.func)(5, 2, 9), 0b1000_0101_0101, "{}", v.label);
    }
    for v in &reg.bits64.encode_3d {
        assert_eq!((v.func)(5, 2, 9), 0b1000_0101_0101, "{}", v.label);
    }
}

// =========================================================================
// Boundary behavior
// =========================================================================

#[test]
fn test_zero_encodes_to_zero() {
    let reg = common::full_registry();
    for v in &reg.bits32.encode_2d {
        assert_eq!((v.func)(0, 0), 0, "{}", v.label);
    }
    for v in &reg.bits64.encode_2d {
        assert_eq!((v.func)(0, 0), 0, "{}", v.label);
    }
    for v in &reg.bits32.encode_3d {
        assert_eq!((v.func)(0, 0, 0), 0, "{}", v.label);
    }
    for v in &reg.bits64.encode_3d {
        assert_eq!((v.func)(0, 0, 0), 0, "{}", v.label);
    }
}

#[test]
fn test_field_max_fills_code_bits() {
    let reg = common::full_registry();
    for v in &reg.bits32.encode_2d {
        assert_eq!((v.func)(u16::MAX, u16::MAX), u32::MAX, "{}", v.label);
    }
    for v in &reg.bits64.encode_2d {
        assert_eq!((v.func)(u32::MAX, u32::MAX), u64::MAX, "{}", v.label);
    }
    for v in &reg.bits32.encode_3d {
        assert_eq!((v.func)(0x3FF, 0x3FF, 0x3FF), (1 << 30) - 1, "{}", v.label);
    }
    for v in &reg.bits64.encode_3d {
        assert_eq!((v.func)(0x1F_FFFF, 0x1F_FFFF, 0x1F_FFFF), (1 << 63) - 1, "{}", v.label);
    }
}

#[test]
fn test_out_of_field_bits_ignored_3d() {
    let reg = common::full_registry();
    // x keeps its 10 field bits, y has none, z keeps bit 0.
    let expected32 = 0x0924_9249 | 0b100;
    for v in &reg.bits32.encode_3d {
        assert_eq!((v.func)(0xFFFF, 0x0400, 0xFC01), expected32, "{}", v.label);
    }
    let expected64 = control_encode_3d::<u64>(0x1F_FFFF, 0, 1);
    for v in &reg.bits64.encode_3d {
        assert_eq!((v.func)(u32::MAX, 0x0020_0000, 0xFFE0_0001), expected64, "{}", v.label);
    }
}

#[test]
fn test_single_lane_values() {
    let reg = common::full_registry();
    for v in &reg.bits64.encode_3d {
        assert_eq!((v.func)(0, 0x1F_FFFF, 0), 0x2492_4924_9249_2492, "{}", v.label);
        assert_eq!((v.func)(0, 0, 0x1F_FFFF), 0x4924_9249_2492_4924, "{}", v.label);
    }
    for v in &reg.bits32.encode_2d {
        assert_eq!((v.func)(0, u16::MAX), 0xAAAA_AAAA, "{}", v.label);
    }
}

// =========================================================================
// Determinism
// =========================================================================

#[test]
fn test_repeated_calls_agree() {
    let reg = common::full_registry();
    for v in &reg.bits64.encode_3d {
        let a = (v.func)(0x12_3456, 0x0A_BCDE, 0x1F_0F0F);
        let b = (v.func)(0x12_3456, 0x0A_BCDE, 0x1F_0F0F);
        assert_eq!(a, b, "{}", v.label);
    }
}

// =========================================================================
// Individual strategies
// =========================================================================

#[test]
fn test_for_et_matches_for_on_sparse_values() {
    for x in [0u16, 1, 0x80, 0x8000] {
        for y in [0u16, 2, 0x4000] {
            assert_eq!(encode_2d_for_et::<u32>(x, y), encode_2d_for::<u32>(x, y));
        }
    }
}

#[test]
fn test_et_variants_handle_top_chunk_only() {
    // Only the highest chunk is non-zero; ET must not stop early.
    assert_eq!(
        encode_3d_for_et::<u64>(1 << 20, 0, 0),
        control_encode_3d::<u64>(1 << 20, 0, 0)
    );
    assert_eq!(
        encode_3d_lut_et::<u64>(0, 0, 1 << 20),
        control_encode_3d::<u64>(0, 0, 1 << 20)
    );
}

#[test]
fn test_lut_matches_reference_grid() {
    for x in (0..=u16::MAX).step_by(257) {
        for y in (0..=u16::MAX).step_by(4099) {
            assert_eq!(encode_2d_lut::<u32>(x, y), control_encode_2d::<u32>(x, y));
        }
    }
}

#[test]
fn test_lut_shifted_64_high_chunk() {
    let (x, y, z) = (0x1F_0000, 0x15_0000, 0x0A_0000);
    assert_eq!(encode_3d_lut_shifted::<u64>(x, y, z), control_encode_3d::<u64>(x, y, z));
}

#[test]
fn test_magicbits_32_and_64_agree_on_small_values() {
    for x in 0..32u16 {
        let m32 = encode_3d_magicbits::<u32>(x, x ^ 0x1F, 3);
        let m64 = encode_3d_magicbits::<u64>(x.into(), (x ^ 0x1F).into(), 3);
        assert_eq!(u64::from(m32), m64);
    }
}

#[test]
fn test_chunked_widths_agree() {
    let (x, y) = (0xBEEF_u32, 0x1234_u32);
    let expected = control_encode_2d::<u64>(x, y);
    assert_eq!(encode_2d_chunked::<u64, 1>(x, y), expected);
    assert_eq!(encode_2d_chunked::<u64, 3>(x, y), expected);
    assert_eq!(encode_2d_chunked::<u64, 16>(x, y), expected);

    let (x, y, z) = (0x3FF, 0x155, 0x2AA);
    let expected = control_encode_3d::<u32>(x, y, z);
    assert_eq!(encode_3d_chunked::<u32, 4>(x, y, z), expected);
    assert_eq!(encode_3d_chunked::<u32, 10>(x, y, z), expected);
}
