use itertools::Itertools;
use proptest::{
    collection::{btree_set, vec},
    prelude::*,
    sample::SizeRange,
};

use crate::prelude::*;

/// Generates unordered key/value pairs; keys may repeat.
pub fn entries<K, V>(size: impl Into<SizeRange>) -> impl Strategy<Value = Vec<(K, V)>>
where
    K: Arbitrary,
    V: Arbitrary,
{
    vec(any::<(K, V)>(), size)
}

/// Generates distinct keys in a random insertion order.
pub fn distinct_keys<K>(size: impl Into<SizeRange>) -> impl Strategy<Value = Vec<K>>
where
    K: Arbitrary + Ord,
{
    sorted_keys(size).prop_shuffle()
}

/// Generates distinct keys in ascending order, the worst case insertion order for an unbalanced
/// tree.
pub fn sorted_keys<K>(size: impl Into<SizeRange>) -> impl Strategy<Value = Vec<K>>
where
    K: Arbitrary + Ord,
{
    btree_set(any::<K>(), size).prop_map(|keys| keys.into_iter().collect_vec())
}

/// Generates trees whose shape comes from the insertion order of `size` random entries.
pub fn trees<K, V>(size: impl Into<SizeRange>) -> impl Strategy<Value = BinarySearchTree<K, V>>
where
    K: Arbitrary + Ord,
    V: Arbitrary,
{
    entries(size).prop_map(|entries| entries.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use test_strategy::proptest;

    use super::*;

    #[proptest(fork = false)]
    fn test_distinct_keys_are_unique(#[strategy(distinct_keys::<u16>(0..50))] keys: Vec<u16>) {
        prop_assert_eq!(keys.iter().unique().count(), keys.len());
    }

    #[proptest(fork = false)]
    fn test_sorted_keys_are_strictly_ascending(
        #[strategy(sorted_keys::<u16>(0..50))] keys: Vec<u16>,
    ) {
        prop_assert!(keys.iter().tuple_windows().all(|(a, b)| a < b));
    }

    #[proptest(fork = false)]
    fn test_entries_build_one_node_per_distinct_key(
        #[strategy(entries::<u8, u8>(0..20))] entries: Vec<(u8, u8)>,
    ) {
        let tree: BinarySearchTree<u8, u8> = entries.iter().copied().collect();

        prop_assert_eq!(tree.len(), entries.iter().map(|(key, _)| key).unique().count());
    }

    #[proptest(fork = false)]
    fn test_trees_hold_as_many_entries_as_they_count(
        #[strategy(trees::<u8, u8>(0..20))] tree: BinarySearchTree<u8, u8>,
    ) {
        prop_assert_eq!(tree.in_order().len(), tree.len());
    }
}
