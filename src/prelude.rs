use proptest::prelude::*;

pub use crate::{error::*, trees::*};

/// An ordered key/value mapping addressed by unique keys.
///
/// Implementors get the shared property suite through
/// [`test_ordered_map_properties`](crate::test_ordered_map_properties).
pub trait OrderedMap: Sized + Arbitrary + Default + Clone + PartialEq {
    type Key: Arbitrary + Ord + Clone;
    type Value: Arbitrary + Clone + PartialEq;

    /// Returns the value stored under `key`, or [`Error::KeyNotFound`].
    fn lookup(&self, key: &Self::Key) -> Result<&Self::Value>;

    /// Creates the entry for `key` or replaces its value, returning the replaced value.
    fn upsert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    /// Removes the entry for `key`, returning its value, or [`Error::KeyNotFound`].
    fn delete(&mut self, key: &Self::Key) -> Result<Self::Value>;

    /// Entries in ascending key order.
    fn in_order(&self) -> Vec<(&Self::Key, &Self::Value)>;

    /// Entries in descending key order.
    fn reverse_order(&self) -> Vec<(&Self::Key, &Self::Value)>;
}
