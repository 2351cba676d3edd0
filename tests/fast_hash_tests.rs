#![cfg(feature = "map")]
//! Tests for the hasher feature flags.
//!
//! `OptionMap` picks its default hasher from the `fxhash` and `ahash`
//! features. Whichever one is active, lookups must behave identically, so
//! these tests run unchanged under every hasher configuration.

use optionmap::map::{DefaultHashBuilder, OptionMap};
use optionmap::optional::{Optional, none, some};
use rstest::rstest;

// =============================================================================
// Hasher Selection
// =============================================================================

#[cfg(feature = "fxhash")]
#[rstest]
fn test_default_hasher_is_fxhash() {
    let map: OptionMap<u32, u32> = OptionMap::new();
    let _: &rustc_hash::FxBuildHasher = map.hasher();
}

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
#[rstest]
fn test_default_hasher_is_ahash() {
    let map: OptionMap<u32, u32> = OptionMap::new();
    let _: &ahash::RandomState = map.hasher();
}

#[rstest]
fn test_explicit_default_hasher() {
    let mut map: OptionMap<&str, i32, DefaultHashBuilder> =
        OptionMap::with_hasher(DefaultHashBuilder::default());
    map.set("key", 1);
    assert_eq!(map.get(&"key"), some(&1));
}

// =============================================================================
// Deterministic Lookups
// =============================================================================

#[rstest]
fn test_same_entries_same_lookups() {
    let entries: Vec<(String, i32)> = vec![
        ("alpha".to_string(), 1),
        ("beta".to_string(), 2),
        ("gamma".to_string(), 3),
        ("delta".to_string(), 4),
    ];

    let map1: OptionMap<String, i32> = entries.iter().cloned().collect();
    let map2: OptionMap<String, i32> = entries.iter().cloned().collect();

    for (key, expected_value) in &entries {
        assert_eq!(map1.get(key), some(expected_value));
        assert_eq!(map2.get(key), some(expected_value));
    }
    assert_eq!(map1, map2);
}

// =============================================================================
// Large Scale Tests (hash function stress test)
// =============================================================================

#[rstest]
fn test_large_scale_set_and_get() {
    let mut map = OptionMap::new();
    for index in 0..10_000_u32 {
        map.set(index, index.wrapping_mul(31));
    }

    assert_eq!(map.len(), 10_000);
    for index in 0..10_000_u32 {
        assert_eq!(map.get(&index), some(&index.wrapping_mul(31)));
    }
    assert_eq!(map.get(&10_000), none());
}

#[rstest]
fn test_large_scale_delete_half() {
    let mut map: OptionMap<String, usize> = (0..2_000).map(|index| (format!("key-{index}"), index)).collect();

    for index in (0..2_000).step_by(2) {
        assert!(map.delete(format!("key-{index}").as_str()));
    }

    assert_eq!(map.len(), 1_000);
    assert_eq!(map.get("key-0"), Optional::None);
    assert_eq!(map.get("key-1"), Optional::Some(&1));
}

// =============================================================================
// Edge Case Tests
// =============================================================================

#[rstest]
#[case("")]
#[case("key")]
#[case("key ")]
#[case("KEY")]
#[case("k\u{e9}y")]
#[case("\u{1f511}")]
#[case("a\0b")]
fn test_unusual_string_keys(#[case] key: &str) {
    let mut map: OptionMap<String, &str> = OptionMap::new();
    map.set(key.to_string(), key);
    assert_eq!(map.get(key), some(&key));
    assert_eq!(map.len(), 1);
}

#[rstest]
#[case(i64::MIN)]
#[case(-1)]
#[case(0)]
#[case(i64::MAX)]
fn test_boundary_integer_keys(#[case] key: i64) {
    let mut map = OptionMap::new();
    map.set(key, "value");
    assert_eq!(map.get(&key), some(&"value"));
    assert!(map.delete(&key));
    assert_eq!(map.get(&key), none());
}
