//! Tests for configuration validation.

use zmorton_core::config::{DEFAULT_MAX_FROM, DEFAULT_MAX_TO, DEFAULT_POOL_SIZE};
use zmorton_core::{BenchConfig, ConfigError, Dim, DimSelection};

#[test]
fn test_defaults() {
    let c = BenchConfig::default();
    assert_eq!(c.max_from(), DEFAULT_MAX_FROM);
    assert_eq!(c.max_to(), DEFAULT_MAX_TO);
    assert_eq!(c.pool_size(), DEFAULT_POOL_SIZE);
    assert_eq!(c.pool_size(), 10_000);
    assert_eq!(c.dims(), DimSelection::Both);
    assert_eq!(c.max_sweep().collect::<Vec<_>>(), vec![128, 256, 512]);
}

#[test]
fn test_zero_trials_rejected() {
    assert_eq!(BenchConfig::builder().trials(0).build(), Err(ConfigError::ZeroTrials));
}

#[test]
fn test_zero_pool_rejected() {
    assert_eq!(BenchConfig::builder().pool_size(0).build(), Err(ConfigError::ZeroPoolSize));
}

#[test]
fn test_zero_max_rejected() {
    assert_eq!(BenchConfig::builder().max_range(0, 8).build(), Err(ConfigError::ZeroMax));
}

#[test]
fn test_inverted_range_rejected() {
    assert_eq!(
        BenchConfig::builder().max_range(512, 128).build(),
        Err(ConfigError::EmptyMaxRange { from: 512, to: 128 })
    );
}

#[test]
fn test_max_limited_by_narrowest_field() {
    // 3D/32 has 10-bit fields.
    assert_eq!(
        BenchConfig::builder().max_range(128, 2048).build(),
        Err(ConfigError::MaxExceedsField { max: 2048, field_bits: 10, limit: 1024 })
    );
    assert!(BenchConfig::builder().max_range(128, 1024).build().is_ok());
    // 2D alone allows 16-bit coordinates.
    assert!(BenchConfig::builder()
        .dims(DimSelection::Two)
        .max_range(128, 2048)
        .build()
        .is_ok());
}

#[test]
fn test_error_messages() {
    assert_eq!(ConfigError::ZeroTrials.to_string(), "trials must be at least 1");
    assert_eq!(
        ConfigError::MaxExceedsField { max: 2048, field_bits: 10, limit: 1024 }.to_string(),
        "MAX 2048 exceeds the 10-bit coordinate field (limit 1024)"
    );
}

#[test]
fn test_sweep_doubles_and_stops_at_bound() {
    let c = BenchConfig::builder().max_range(3, 20).build().unwrap();
    assert_eq!(c.max_sweep().collect::<Vec<_>>(), vec![3, 6, 12]);
    let c = BenchConfig::builder().max_range(64, 64).build().unwrap();
    assert_eq!(c.max_sweep().collect::<Vec<_>>(), vec![64]);
}

#[test]
fn test_dim_selection() {
    assert!(DimSelection::Both.includes(Dim::Two));
    assert!(!DimSelection::Three.includes(Dim::Two));
    assert_eq!(DimSelection::Three.iter().collect::<Vec<_>>(), vec![Dim::Three]);
    assert_eq!(DimSelection::Both.to_string(), "2D+3D");
}
