//! Tests for the correctness verifier.

#[path = "../common/mod.rs"]
mod common;

use zmorton_core::codec::{Dim, Direction, GroupKey};
use zmorton_core::registry::{Labeled, VariantSet};
use zmorton_core::verify::{
    check_decode_3d, check_encode_2d, check_encode_3d, check_round_trip_2d, check_round_trip_3d,
    fuzz_3d, round_trip_samples, MAX_RECORDED_MISMATCHES,
};
use zmorton_core::{verify_all, BenchConfig, CheckKind, DimSelection, Sample};

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Encoder that drops bit 0 of z.
fn broken_encode_3d(x: u16, y: u16, z: u16) -> u32 {
    zmorton_core::encoder::encode_3d_magicbits::<u32>(x, y, z & !1)
}

/// Decoder that swaps x and y.
fn broken_decode_3d(m: u32) -> (u16, u16, u16) {
    let (x, y, z) = zmorton_core::decoder::decode_3d_magicbits(m);
    (y, x, z)
}

fn with_broken_variants() -> VariantSet<u32> {
    let mut set = common::portable_registry().bits32;
    set.encode_3d.push(Labeled::new("Broken", broken_encode_3d));
    set.decode_3d.push(Labeled::new("Broken", broken_decode_3d));
    set
}

#[test]
fn test_full_pass_succeeds() {
    let config = common::small_config();
    let report = verify_all(&common::full_registry(), &config);
    assert!(report.passed());
    // 4 checks × 2 dims × 2 widths
    assert_eq!(report.reports.len(), 16);
    assert_eq!(report.failures().count(), 0);
}

#[test]
fn test_fuzz_disabled_with_zero_samples() {
    let config = BenchConfig::builder().fuzz_samples(0).dims(DimSelection::Three).build().unwrap();
    let report = verify_all(&common::portable_registry(), &config);
    assert_eq!(report.reports.len(), 6);
    assert!(report.reports.iter().all(|r| r.kind != CheckKind::Fuzz));
}

#[test]
fn test_round_trip_covers_2d() {
    let reg = common::portable_registry();
    let report = check_round_trip_2d(&reg.bits32);
    assert!(report.passed());
    assert_eq!(report.group, GroupKey::new(32, Dim::Two, Direction::Encode));
    let pairs = (reg.bits32.encode_2d.len() * reg.bits32.decode_2d.len()) as u64;
    assert_eq!(report.comparisons, pairs * round_trip_samples::<u32>(Dim::Two).len() as u64);
}

#[test]
fn test_round_trip_samples_include_scenario() {
    let samples = round_trip_samples::<u32>(Dim::Three);
    assert!(samples.contains(&[5, 2, 9]));
    assert!(samples.contains(&[0, 0, 0]));
    assert!(samples.contains(&[0x3FF, 0x3FF, 0x3FF]));
    assert!(samples.contains(&[0, 0, 0x3FF]));
}

#[test]
fn test_windowed_comparison_count() {
    let reg = common::portable_registry();
    let report = check_encode_3d(&reg.bits32);
    // Offsets 0..=6, 16^3 inputs each.
    assert_eq!(report.comparisons, 7 * 4096 * reg.bits32.encode_3d.len() as u64);
    assert!(report.passed());

    let report = check_encode_2d(&reg.bits64);
    assert_eq!(report.comparisons, 29 * 256 * reg.bits64.encode_2d.len() as u64);
}

#[test]
fn test_broken_encoder_reported_without_stopping() {
    let set = with_broken_variants();
    let report = check_encode_3d(&set);
    assert!(!report.passed());
    // Every input with z bit 0 set in the window at offset 0 fails: 8 values of z.
    assert_eq!(report.failures, 16 * 16 * 8);
    assert_eq!(report.mismatches.len(), MAX_RECORDED_MISMATCHES);
    assert!(report.mismatches.iter().all(|m| m.label == "Broken"));
    // All other variants were still checked.
    assert_eq!(report.variants, set.encode_3d.len());

    let first = &report.mismatches[0];
    assert_eq!(first.input, Sample::Coords3(0, 0, 1));
    assert_eq!(first.computed, Sample::Code(0));
    assert_eq!(first.expected, Sample::Code(0b100));
}

#[test]
fn test_broken_decoder_names_pair() {
    let set = with_broken_variants();
    let report = check_round_trip_3d(&set);
    assert!(!report.passed());
    assert!(report
        .mismatches
        .iter()
        .all(|m| m.label == "Broken" || m.partner == Some("Broken")));

    let report = check_decode_3d(&set);
    assert!(!report.passed());
    assert!(report.mismatches.iter().all(|m| m.label == "Broken" && m.partner.is_none()));
}

#[test]
fn test_fuzz_catches_broken_variants() {
    let set = with_broken_variants();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
    let report = fuzz_3d(&set, 512, &mut rng);
    assert_eq!(report.kind, CheckKind::Fuzz);
    assert!(!report.passed());
    assert_eq!(report.comparisons, 512 * set.encode_3d.len() as u64 + 512 * set.decode_3d.len() as u64);
}

#[test]
fn test_mismatch_display() {
    let set = with_broken_variants();
    let report = check_encode_3d(&set);
    assert_eq!(
        report.mismatches[0].to_string(),
        "Broken: input (0, 0, 1) computed 0x0 expected 0x4"
    );
}

#[test]
fn test_verification_is_deterministic() {
    let config = common::small_config();
    let reg = common::portable_registry();
    assert_eq!(verify_all(&reg, &config), verify_all(&reg, &config));
}
