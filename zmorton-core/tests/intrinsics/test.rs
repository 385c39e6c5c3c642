//! Unit tests for zmorton-core intrinsics module.
//!
//! Tests cover: bits.rs, magic.rs

#[cfg(test)]
mod tests {
    use zmorton_core::intrinsics::{
        chunk_count, lane_mask, significant_bits, Capabilities, MagicBits, MAGIC_2D_32,
        MAGIC_2D_64, MAGIC_3D_32, MAGIC_3D_64,
    };

    // =========================================================================
    // bits.rs: lane_mask tests
    // =========================================================================

    #[test]
    fn test_lane_mask_2d_32() {
        assert_eq!(lane_mask(2, 0, 16), 0x5555_5555);
        assert_eq!(lane_mask(2, 1, 16), 0xAAAA_AAAA);
    }

    #[test]
    fn test_lane_mask_3d_32() {
        assert_eq!(lane_mask(3, 0, 10), 0x0924_9249);
        assert_eq!(lane_mask(3, 1, 10), 0x1249_2492);
        assert_eq!(lane_mask(3, 2, 10), 0x2492_4924);
    }

    #[test]
    fn test_lane_masks_partition_code_bits() {
        // Lanes are disjoint and together cover exactly D * field_bits bits.
        for (dim, field) in [(2u32, 16u32), (2, 32), (3, 10), (3, 21)] {
            let lanes: Vec<u64> = (0..dim).map(|k| lane_mask(dim, k, field)).collect();
            let union = lanes.iter().fold(0u64, |a, &l| a | l);
            let total: u32 = lanes.iter().map(|l| l.count_ones()).sum();
            assert_eq!(total, dim * field);
            assert_eq!(union.count_ones(), dim * field);
            assert_eq!(significant_bits(union), dim * field);
        }
    }

    #[test]
    fn test_lane_mask_3d_64_top_bit_clear() {
        // 3D/64 uses 63 bits; bit 63 belongs to no lane.
        let all = (0..3).fold(0u64, |a, k| a | lane_mask(3, k, 21));
        assert_eq!(all, u64::MAX >> 1);
    }

    // =========================================================================
    // bits.rs: chunk_count and significant_bits
    // =========================================================================

    #[test]
    fn test_chunk_count_exact_and_partial() {
        assert_eq!(chunk_count(0, 8), 0);
        assert_eq!(chunk_count(8, 8), 1);
        assert_eq!(chunk_count(9, 8), 2);
        assert_eq!(chunk_count(10, 5), 2);
    }

    #[test]
    fn test_significant_bits_powers_of_two() {
        for i in 0..64 {
            assert_eq!(significant_bits(1u64 << i), i + 1);
        }
    }

    #[test]
    fn test_capabilities_detect_is_stable() {
        assert_eq!(Capabilities::detect(), Capabilities::detect());
    }

    // =========================================================================
    // magic.rs: derived sequences
    // =========================================================================

    #[test]
    fn test_magic_rounds_match_field_width() {
        assert_eq!(MAGIC_2D_32.rounds(), 4);
        assert_eq!(MAGIC_2D_64.rounds(), 5);
        assert_eq!(MAGIC_3D_32.rounds(), 4);
        assert_eq!(MAGIC_3D_64.rounds(), 5);
    }

    #[test]
    fn test_magic_2d_64_known_constants() {
        assert_eq!(MAGIC_2D_64.shifts(), &[16, 8, 4, 2, 1]);
        assert_eq!(
            MAGIC_2D_64.masks(),
            &[
                0x0000_FFFF_0000_FFFF,
                0x00FF_00FF_00FF_00FF,
                0x0F0F_0F0F_0F0F_0F0F,
                0x3333_3333_3333_3333,
                0x5555_5555_5555_5555,
            ]
        );
    }

    #[test]
    fn test_magic_last_mask_is_lane_zero() {
        for (magic, field) in [
            (MAGIC_2D_32, 16),
            (MAGIC_2D_64, 32),
            (MAGIC_3D_32, 10),
            (MAGIC_3D_64, 21),
        ] {
            let last = *magic.masks().last().expect("at least one round");
            assert_eq!(last, lane_mask(magic.dim(), 0, field));
        }
    }

    #[test]
    fn test_magic_spread_field_max_fills_lane() {
        assert_eq!(MAGIC_3D_64.spread(0x1F_FFFF), lane_mask(3, 0, 21));
        assert_eq!(MAGIC_2D_32.spread(0xFFFF), 0x5555_5555);
    }

    #[test]
    fn test_magic_spread_drops_out_of_field_bits() {
        assert_eq!(MAGIC_3D_32.spread(1 << 10), 0);
        assert_eq!(MAGIC_3D_64.spread(1 << 21), 0);
    }

    #[test]
    fn test_magic_compact_ignores_other_lanes() {
        assert_eq!(MAGIC_3D_32.compact(lane_mask(3, 1, 10) | lane_mask(3, 2, 10)), 0);
        assert_eq!(MAGIC_2D_64.compact(0xAAAA_AAAA_AAAA_AAAA), 0);
    }

    #[test]
    fn test_magic_derive_single_bit_field() {
        let m = MagicBits::derive(3, 1);
        assert_eq!(m.rounds(), 0);
        assert_eq!(m.spread(0b11), 1);
        assert_eq!(m.compact(0b111), 1);
    }

    #[test]
    fn test_magic_derive_is_const() {
        const M: MagicBits = MagicBits::derive(2, 8);
        assert_eq!(M.spread(0xFF), 0x5555);
    }
}
