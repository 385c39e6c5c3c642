//! Tests for the bit-by-bit reference codec.

use zmorton_core::reference::{
    control_decode, control_decode_2d, control_decode_3d, control_encode, control_encode_2d,
    control_encode_3d,
};

#[test]
fn test_single_bit_lands_on_b_times_d_plus_k() {
    for (dim, field) in [(2usize, 32u32), (3, 21)] {
        for k in 0..dim {
            for b in 0..field {
                let mut coords = vec![0u64; dim];
                coords[k] = 1 << b;
                assert_eq!(
                    control_encode(&coords, field),
                    1u64 << (b as usize * dim + k),
                    "dim {} lane {} bit {}",
                    dim,
                    k,
                    b
                );
            }
        }
    }
}

#[test]
fn test_zero_encodes_to_zero() {
    assert_eq!(control_encode_2d::<u32>(0, 0), 0);
    assert_eq!(control_encode_3d::<u64>(0, 0, 0), 0);
}

#[test]
fn test_field_max_sets_every_code_bit() {
    assert_eq!(control_encode_2d::<u32>(0xFFFF, 0xFFFF), u32::MAX);
    assert_eq!(control_encode_2d::<u64>(u32::MAX, u32::MAX), u64::MAX);
    assert_eq!(control_encode_3d::<u32>(0x3FF, 0x3FF, 0x3FF), (1 << 30) - 1);
    assert_eq!(control_encode_3d::<u64>(0x1F_FFFF, 0x1F_FFFF, 0x1F_FFFF), (1 << 63) - 1);
}

#[test]
fn test_3d_scenario_5_2_9() {
    // x=101 y=010 z=1001: bits 0 (x0), 2 (z0), 4 (y1), 6 (x2), 11 (z3)
    let m = control_encode_3d::<u32>(5, 2, 9);
    assert_eq!(m, 0b1000_0101_0101);
    assert_eq!(control_decode_3d(m), (5, 2, 9));
}

#[test]
fn test_decode_ignores_bits_above_field() {
    assert_eq!(control_decode_3d::<u32>(0b11 << 30), (0, 0, 0));
    assert_eq!(control_decode_3d::<u64>(1 << 63), (0, 0, 0));
    // 2D uses every code bit.
    assert_eq!(control_decode_2d::<u32>(1 << 31), (0, 0x8000));
}

#[test]
fn test_encode_ignores_bits_above_field() {
    assert_eq!(control_encode_3d::<u32>(0xFC00, 0xFC00, 0xFC00), 0);
    assert_eq!(control_encode_3d::<u64>(0xFFE0_0000, 0, 0), 0);
}

#[test]
fn test_decode_writes_every_output_slot() {
    let mut out = [u64::MAX; 3];
    control_decode(0, &mut out, 21);
    assert_eq!(out, [0, 0, 0]);
}

#[test]
#[should_panic(expected = "at most 64 result bits")]
fn test_encode_rejects_oversized_result() {
    control_encode(&[0, 0, 0], 22);
}

#[test]
fn test_round_trip_exhaustive_3d_32_low_bits() {
    for x in 0..16u16 {
        for y in 0..16u16 {
            for z in 0..16u16 {
                assert_eq!(control_decode_3d(control_encode_3d::<u32>(x, y, z)), (x, y, z));
            }
        }
    }
}
