use assetio_types::Timestamp;
use proptest::prelude::*;
use std::time::{Duration, UNIX_EPOCH};

// ── Construction ─────────────────────────────────────────────────

#[test]
fn from_secs_roundtrips_value() {
    let ts = Timestamp::from_secs(42.5).unwrap();
    assert_eq!(ts.secs(), Some(42.5));
    assert!(ts.is_valid());
}

#[test]
fn from_system_time_at_epoch_is_sentinel() {
    let ts = Timestamp::from_system_time(UNIX_EPOCH).unwrap();
    assert_eq!(ts, Timestamp::EPOCH);
}

#[test]
fn from_system_time_before_epoch_fails() {
    let before = UNIX_EPOCH - Duration::from_secs(10);
    assert!(Timestamp::from_system_time(before).is_err());
}

// ── Equality / ordering ──────────────────────────────────────────

#[test]
fn invalid_timestamps_compare_equal() {
    assert_eq!(Timestamp::invalid(), Timestamp::invalid());
}

#[test]
fn invalid_is_never_equal_to_valid() {
    assert_ne!(Timestamp::invalid(), Timestamp::EPOCH);
}

#[test]
fn invalid_is_unordered() {
    assert_eq!(Timestamp::invalid().partial_cmp(&Timestamp::EPOCH), None);
}

#[test]
fn valid_timestamps_order_by_time() {
    let a = Timestamp::from_secs(1.0).unwrap();
    let b = Timestamp::from_secs(2.0).unwrap();
    assert!(a < b);
    assert!(Timestamp::EPOCH < a);
}

proptest! {
    #[test]
    fn from_secs_accepts_non_negative(secs in 0.0f64..1.0e12) {
        let ts = Timestamp::from_secs(secs).unwrap();
        prop_assert_eq!(ts.secs(), Some(secs));
    }

    #[test]
    fn system_time_after_epoch_is_valid(secs in 0u64..4_000_000_000) {
        let ts = Timestamp::from_system_time(UNIX_EPOCH + Duration::from_secs(secs)).unwrap();
        prop_assert_eq!(ts.secs(), Some(secs as f64));
    }
}
