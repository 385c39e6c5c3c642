//! Unit tests for the decoder variants.

#[path = "../common/mod.rs"]
mod common;

use zmorton_core::decoder::{
    decode_2d_for_et, decode_2d_lut_shifted_et, decode_3d_for, decode_3d_lut, decode_3d_lut_et,
    decode_3d_lut_shifted, decode_3d_magicbits,
};
use zmorton_core::reference::{control_decode_3d, control_encode_3d};

#[test]
fn test_2d_interleave_scenario_every_decoder() {
    let reg = common::full_registry();
    for v in &reg.bits32.decode_2d {
        assert_eq!((v.func)(0b0010_0111), (0b0011, 0b0101), "{}", v.label);
    }
    for v in &reg.bits64.decode_2d {
        assert_eq!((v.func)(0b0010_0111), (0b0011, 0b0101), "{}", v.label);
    }
}

#[test]
fn test_3d_5_2_9_every_decoder() {
    let reg = common::full_registry();
    for v in &reg.bits32.decode_3d {
        assert_eq!((v.func)(0b1000_0101_0101), (5, 2, 9), "{}", v.label);
    }
    for v in &reg.bits64.decode_3d {
        assert_eq!((v.func)(0b1000_0101_0101), (5, 2, 9), "{}", v.label);
    }
}

#[test]
fn test_3d_5_2_9_round_trip_all_pairs() {
    let reg = common::full_registry();
    for e in &reg.bits32.encode_3d {
        let m = (e.func)(5, 2, 9);
        for d in &reg.bits32.decode_3d {
            assert_eq!((d.func)(m), (5, 2, 9), "{} -> {}", e.label, d.label);
        }
    }
}

#[test]
fn test_zero_decodes_to_zero() {
    let reg = common::full_registry();
    for v in &reg.bits32.decode_2d {
        assert_eq!((v.func)(0), (0, 0), "{}", v.label);
    }
    for v in &reg.bits64.decode_3d {
        assert_eq!((v.func)(0), (0, 0, 0), "{}", v.label);
    }
}

#[test]
fn test_all_ones_decodes_to_field_max() {
    let reg = common::full_registry();
    for v in &reg.bits32.decode_2d {
        assert_eq!((v.func)(u32::MAX), (u16::MAX, u16::MAX), "{}", v.label);
    }
    for v in &reg.bits64.decode_2d {
        assert_eq!((v.func)(u64::MAX), (u32::MAX, u32::MAX), "{}", v.label);
    }
    // Bits above 3 * field_bits are ignored, so all-ones still yields field max.
    for v in &reg.bits32.decode_3d {
        assert_eq!((v.func)(u32::MAX), (0x3FF, 0x3FF, 0x3FF), "{}", v.label);
    }
    for v in &reg.bits64.decode_3d {
        assert_eq!((v.func)(u64::MAX), (0x1F_FFFF, 0x1F_FFFF, 0x1F_FFFF), "{}", v.label);
    }
}

#[test]
fn test_out_of_field_code_bits_only() {
    let reg = common::full_registry();
    for v in &reg.bits32.decode_3d {
        assert_eq!((v.func)(0b11 << 30), (0, 0, 0), "{}", v.label);
    }
    for v in &reg.bits64.decode_3d {
        assert_eq!((v.func)(1 << 63), (0, 0, 0), "{}", v.label);
    }
}

#[test]
fn test_et_decoders_top_bit() {
    assert_eq!(decode_2d_for_et::<u64>(1 << 63), (0, 1 << 31));
    assert_eq!(decode_2d_lut_shifted_et::<u64>(1 << 63), (0, 1 << 31));
    assert_eq!(decode_3d_lut_et::<u64>(1 << 62), (0, 0, 1 << 20));
}

#[test]
fn test_lut_decoders_match_magicbits_on_lanes() {
    for m in [0x0924_9249u32, 0x1249_2492, 0x2492_4924, 0x3FFF_FFFF, 0xDEAD_BEEF] {
        let expected = decode_3d_magicbits(m);
        assert_eq!(decode_3d_lut(m), expected);
        assert_eq!(decode_3d_lut_shifted(m), expected);
        assert_eq!(decode_3d_for(m), expected);
    }
}

#[test]
fn test_decode_inverts_reference_64() {
    let (x, y, z) = (0x1A_2B3C, 0x0F_EDCB, 0x10_0001);
    let m = control_encode_3d::<u64>(x, y, z);
    assert_eq!(control_decode_3d(m), (x, y, z));
    assert_eq!(decode_3d_lut_shifted(m), (x, y, z));
    assert_eq!(decode_3d_magicbits(m), (x, y, z));
}
