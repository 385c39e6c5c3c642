//! Tests for variant registration.

#[path = "../common/mod.rs"]
mod common;

use std::collections::HashSet;

use zmorton_core::{Capabilities, Dim, Direction, GroupKey, Registry};

const PORTABLE: [&str; 7] =
    ["For", "For ET", "Magicbits", "LUT", "LUT ET", "LUT Shifted", "LUT Shifted ET"];

#[test]
fn test_portable_groups_have_every_strategy() {
    let reg = common::portable_registry();
    for group in Registry::groups() {
        let labels = reg.labels(group);
        assert_eq!(&labels[..PORTABLE.len()], &PORTABLE, "{}", group);
    }
}

#[test]
fn test_chunked_encoders_only_in_encode_groups() {
    let reg = common::portable_registry();
    assert_eq!(reg.bits32.encode_2d.len(), PORTABLE.len() + 3);
    assert_eq!(reg.bits64.encode_2d.len(), PORTABLE.len() + 2);
    assert_eq!(reg.bits32.encode_3d.len(), PORTABLE.len() + 3);
    assert_eq!(reg.bits64.encode_3d.len(), PORTABLE.len() + 2);
    assert_eq!(reg.bits32.decode_2d.len(), PORTABLE.len());
    assert_eq!(reg.bits64.decode_3d.len(), PORTABLE.len());
}

#[test]
fn test_labels_unique_within_group() {
    let reg = common::full_registry();
    for group in Registry::groups() {
        let labels = reg.labels(group);
        let unique: HashSet<_> = labels.iter().collect();
        assert_eq!(unique.len(), labels.len(), "{}", group);
    }
}

#[test]
fn test_portable_registry_has_no_hardware_variants() {
    let reg = Registry::new(Capabilities::portable());
    assert!(!reg.capabilities().bmi2());
    for group in Registry::groups() {
        assert!(!reg.labels(group).contains(&"BMI2 instruction set"), "{}", group);
    }
}

#[test]
fn test_hardware_variants_follow_probe() {
    let caps = Capabilities::detect();
    let reg = Registry::new(caps);
    for group in Registry::groups() {
        let has = reg.labels(group).contains(&"BMI2 instruction set");
        assert_eq!(has, caps.bmi2(), "{}", group);
    }
}

#[test]
fn test_groups_cover_every_key_once() {
    let groups = Registry::groups();
    let unique: HashSet<GroupKey> = groups.iter().copied().collect();
    assert_eq!(unique.len(), 8);
    assert!(unique.contains(&GroupKey::new(64, Dim::Three, Direction::Decode)));
    assert_eq!(groups[0], GroupKey::new(32, Dim::Two, Direction::Encode));
}

#[test]
fn test_group_key_display() {
    assert_eq!(GroupKey::new(32, Dim::Three, Direction::Encode).to_string(), "3D 32-bit encode");
}
