//! # Dictionary ADT
//!
//! The contract word counting and result formatting are written against. Lookups take any
//! borrowed form of the key (`&str` for `String` keys), the same way `std::collections::HashMap`
//! does.
//!
//! Two operations are part of the contract but not offered by any implementation in this crate:
//! `remove` and `values` both return [`Error::UnsupportedOperation`](crate::Error::UnsupportedOperation).

use std::borrow::Borrow;
use std::hash::Hash;

use crate::error::Result;

/// A keyed collection mapping each distinct key to exactly one value.
pub trait Dictionary<K, V> {
    /// Single-pass iterator over the keys currently stored.
    type Keys<'a>: Iterator<Item = &'a K>
    where
        Self: 'a,
        K: 'a;

    /// Iterator over the stored values.
    type Values<'a>: Iterator<Item = &'a V>
    where
        Self: 'a,
        V: 'a;

    /// Inserts `value` under `key`, returning the value it replaced.
    fn add(&mut self, key: K, value: V) -> Result<Option<V>>;

    /// Deletes `key`, returning its former value.
    fn remove<Q>(&mut self, key: &Q) -> Result<Option<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// The value stored under `key`, or `None` if the key is absent.
    fn get_value<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_value(key).is_some()
    }

    /// Number of entries.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn clear(&mut self);

    fn keys(&self) -> Self::Keys<'_>;

    fn values(&self) -> Result<Self::Values<'_>>;
}
