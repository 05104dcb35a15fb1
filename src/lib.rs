/// Emits a `tracing` event at trace level, or nothing when the `tracing` feature is off.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

mod error;

pub mod prelude;
pub mod testing;
pub mod trees;

#[doc(hidden)]
/// This is a hidden module to make the macros defined on this crate available for the users.
pub mod __dependencies {
    pub use itertools;
    pub use paste;
    pub use proptest;
    pub use test_strategy;
    pub use thiserror::Error;
}

/// Generates the property suite every [`OrderedMap`](crate::prelude::OrderedMap) must satisfy.
///
/// `$type` must name a concrete map type in the calling scope, e.g.
/// `type Tree = BinarySearchTree<u16, u64>;`.
#[macro_export]
macro_rules! test_ordered_map_properties {
    ($type:ident) => {
        $crate::__dependencies::paste::paste! {
            mod [<test_ordered_map_$type:snake>] {
                use std::collections::BTreeMap;

                use $crate::__dependencies::{
                    itertools::Itertools,
                    proptest::{prelude::*, sample::Index},
                    test_strategy,
                };
                use $crate::prelude::{Error, OrderedMap};

                use super::$type;

                type Key = <$type as OrderedMap>::Key;
                type Value = <$type as OrderedMap>::Value;

                #[cfg_attr(coverage_nightly, coverage(off))]
                fn build_map(entries: &[(Key, Value)]) -> $type {
                    entries
                        .iter()
                        .cloned()
                        .fold(<$type>::default(), |mut acc, (key, value)| {
                            acc.upsert(key, value);
                            acc
                        })
                }

                #[test]
                fn test_empty_map_traversals_are_empty() {
                    let map = <$type>::default();

                    assert!(map.in_order().is_empty());
                    assert!(map.reverse_order().is_empty());
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_in_order_is_strictly_ascending(entries: Vec<(Key, Value)>) {
                    let map = build_map(&entries);

                    prop_assert!(map
                        .in_order()
                        .into_iter()
                        .tuple_windows()
                        .all(|((a, _), (b, _))| a < b));
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_last_write_wins(entries: Vec<(Key, Value)>) {
                    let map = build_map(&entries);
                    let model = entries.iter().cloned().collect::<BTreeMap<Key, Value>>();

                    prop_assert_eq!(map.in_order(), model.iter().collect_vec());
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_reverse_order_is_reversed_in_order(map: $type) {
                    let mut reversed = map.in_order();
                    reversed.reverse();

                    prop_assert_eq!(map.reverse_order(), reversed);
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_in_order_is_idempotent(map: $type) {
                    prop_assert_eq!(map.in_order(), map.in_order());
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_lookup_after_upsert(mut map: $type, key: Key, value: Value) {
                    map.upsert(key.clone(), value.clone());

                    prop_assert_eq!(map.lookup(&key)?, &value);
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_upsert_returns_replaced_value(mut map: $type, key: Key, a: Value, b: Value) {
                    map.upsert(key.clone(), a.clone());

                    prop_assert_eq!(map.upsert(key, b), Some(a));
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_lookup_of_unwritten_key_fails(entries: Vec<(Key, Value)>, key: Key) {
                    prop_assume!(!entries.is_empty());
                    prop_assume!(entries.iter().all(|(k, _)| *k != key));

                    let map = build_map(&entries);

                    prop_assert_eq!(map.lookup(&key), Err(Error::KeyNotFound));
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_delete_removes_exactly_one_key(entries: Vec<(Key, Value)>, index: Index) {
                    prop_assume!(!entries.is_empty());

                    let mut map = build_map(&entries);
                    let mut model = entries.iter().cloned().collect::<BTreeMap<Key, Value>>();
                    let key = index.get(&entries).0.clone();

                    prop_assert_eq!(map.delete(&key)?, model.remove(&key).unwrap());
                    prop_assert_eq!(map.lookup(&key), Err(Error::KeyNotFound));
                    prop_assert_eq!(map.in_order(), model.iter().collect_vec());
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_delete_of_absent_key_fails(mut map: $type, key: Key) {
                    prop_assume!(map.lookup(&key).is_err());

                    let before = map.clone();

                    prop_assert_eq!(map.delete(&key), Err(Error::KeyNotFound));
                    prop_assert_eq!(map, before);
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_double_delete_fails(mut map: $type, key: Key, value: Value) {
                    map.upsert(key.clone(), value);
                    map.delete(&key)?;

                    prop_assert_eq!(map.delete(&key), Err(Error::KeyNotFound));
                }
            }
        }
    };
}
