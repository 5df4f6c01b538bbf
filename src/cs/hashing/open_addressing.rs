//! # Open Addressing Hashed Dictionary
//!
//! This module provides a **dictionary** backed by a single open-addressing table with *linear
//! probing*. It is the counting structure behind the word-frequency pipeline, and it keeps a few
//! statistics about how the table behaves under load.
//!
//! ## Key Features
//! - **Generic** key-value pairs (`K: Hash + Eq, V`).
//! - **Linear Probing**: collisions walk forward one slot at a time, wrapping at the end of the table.
//! - **Prime Sizing**: the table always has a prime number of slots, starting from the next prime
//!   at or above the requested capacity.
//! - **Automatic Growth**: once more than half of the slots are occupied, the table is rebuilt at
//!   `next_prime(2 * capacity)` slots and every entry is replayed in slot order.
//! - **Hard Ceiling**: no table may exceed [`MAX_CAPACITY`] slots. Growth past it fails with
//!   [`Error::CapacityExceeded`] and leaves the dictionary untouched.
//! - **Collision Counting**: every insert that has to step over an occupied slot holding another
//!   key bumps [`HashedDictionary::collision_count`] once.
//!
//! **Limitations**: deletion and value iteration are not offered (`remove` and `values` return
//! [`Error::UnsupportedOperation`]). `clear` empties the slots but keeps the entry and collision
//! counters. The dictionary is not thread-safe.
//!
//! ## Example
//! ```rust
//! use wordfreq::cs::hashing::open_addressing::HashedDictionary;
//!
//! let mut counts = HashedDictionary::new();
//! counts.add("the", 1).unwrap();
//! let seen = counts.get_value(&"the").copied().unwrap_or(0);
//! counts.add("the", seen + 1).unwrap();
//! assert_eq!(counts.get_value(&"the"), Some(&2));
//! assert_eq!(counts.size(), 1);
//! ```

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::convert::Infallible;
use std::hash::{BuildHasher, Hash, Hasher};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem;

use log::{debug, trace, warn};

use super::dictionary::Dictionary;
use super::prime::next_prime;
use crate::error::{Error, Result};

/// Initial number of slots when none is requested. Prime.
pub const DEFAULT_CAPACITY: usize = 5;
/// Hard ceiling on the number of slots.
pub const MAX_CAPACITY: usize = 10_000;
/// Fraction of occupied slots above which the table grows.
pub const MAX_LOAD_FACTOR: f64 = 0.5;

/// A slot is `Empty`, a `Tombstone` (left behind by a deleted entry), or `Occupied(key, value)`.
#[derive(Debug, Clone)]
enum Slot<K, V> {
    Empty,
    // Deletion is not offered yet, so only tests write tombstones. Lookups already step over them.
    #[allow(dead_code)]
    Tombstone,
    Occupied(K, V),
}

impl<K, V> Default for Slot<K, V> {
    fn default() -> Self {
        Slot::Empty
    }
}

/// Where an insert probe stopped.
#[derive(Debug, Clone, Copy)]
struct Probe {
    index: usize,
    /// The walk stepped over at least one occupied slot holding a different key.
    collided: bool,
}

fn empty_table<K, V>(capacity: usize) -> Vec<Slot<K, V>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, Default::default);
    slots
}

/// Rounds `requested` up to a prime table size, refusing sizes above the ceiling.
fn table_size(requested: usize) -> Result<usize> {
    let size = next_prime(requested);
    if size > MAX_CAPACITY {
        warn!(
            "refusing table of {} slots: maximum capacity is {}",
            size, MAX_CAPACITY
        );
        return Err(Error::CapacityExceeded {
            requested: size,
            max: MAX_CAPACITY,
        });
    }
    Ok(size)
}

fn exceeds_load(occupied: usize, capacity: usize) -> bool {
    occupied as f64 / capacity as f64 > MAX_LOAD_FACTOR
}

/// A builder for [`HashedDictionary`], letting you pick the initial capacity and the hasher.
#[derive(Debug, Clone)]
pub struct HashedDictionaryBuilder<S> {
    capacity: usize,
    hasher: S,
}

impl Default for HashedDictionaryBuilder<RandomState> {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            hasher: RandomState::new(),
        }
    }
}

impl HashedDictionaryBuilder<RandomState> {
    /// Create a builder with the default capacity and a `RandomState` hasher.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: BuildHasher> HashedDictionaryBuilder<S> {
    /// Requested initial capacity. Clamped to [`MAX_CAPACITY`], then rounded up to a prime on build.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets a custom hasher builder.
    pub fn with_hasher<T: BuildHasher>(self, hasher: T) -> HashedDictionaryBuilder<T> {
        HashedDictionaryBuilder {
            capacity: self.capacity,
            hasher,
        }
    }

    /// Allocates the table.
    ///
    /// Fails with [`Error::CapacityExceeded`] when the next prime at or above the clamped capacity
    /// is itself above the ceiling (as happens for any request of 10,000 or more).
    pub fn build<K: Hash + Eq, V>(self) -> Result<HashedDictionary<K, V, S>> {
        let capacity = table_size(self.capacity.min(MAX_CAPACITY))?;
        Ok(HashedDictionary {
            slots: empty_table(capacity),
            occupied: 0,
            collisions: 0,
            hasher: self.hasher,
        })
    }
}

/// Open-addressing dictionary with linear probing and prime-sized growth.
#[derive(Debug, Clone)]
pub struct HashedDictionary<K, V, S = RandomState> {
    slots: Vec<Slot<K, V>>,
    /// Entries written since the last rebuild. Survives `clear`.
    occupied: usize,
    /// Inserts that stepped over another key. Survives `clear`.
    collisions: usize,
    hasher: S,
}

impl<K: Hash + Eq, V> HashedDictionary<K, V, RandomState> {
    /// Creates an empty dictionary with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self {
            slots: empty_table(DEFAULT_CAPACITY),
            occupied: 0,
            collisions: 0,
            hasher: RandomState::new(),
        }
    }

    /// Creates an empty dictionary sized for `capacity`. See [`HashedDictionaryBuilder::build`].
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        HashedDictionaryBuilder::new().with_capacity(capacity).build()
    }
}

impl<K: Hash + Eq, V> Default for HashedDictionary<K, V, RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> HashedDictionary<K, V, S> {
    /// Number of slots in the table. Always prime.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of inserts and updates that probed past at least one other key.
    pub fn collision_count(&self) -> usize {
        self.collisions
    }

    pub fn load_factor(&self) -> f64 {
        self.occupied as f64 / self.capacity() as f64
    }

    /// Number of entries written. Not reset by [`clear`](Self::clear).
    pub fn size(&self) -> usize {
        self.occupied
    }

    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Stores `value` under `key`.
    ///
    /// Returns the value previously stored under `key`, if any. Updating an existing key never
    /// grows the table. A new key that pushes the load factor over [`MAX_LOAD_FACTOR`] triggers a
    /// rebuild; if that rebuild would exceed [`MAX_CAPACITY`] the call fails and nothing is written.
    pub fn add(&mut self, key: K, value: V) -> Result<Option<V>> {
        let probe = self.probe_for_insert(&key);

        if let Slot::Occupied(_, current) = &mut self.slots[probe.index] {
            let previous = mem::replace(current, value);
            self.record_collision(probe.collided);
            return Ok(Some(previous));
        }

        let grow_to = if exceeds_load(self.occupied + 1, self.capacity()) {
            Some(table_size(self.capacity() * 2)?)
        } else {
            None
        };

        self.write_new(probe, key, value);
        if let Some(new_capacity) = grow_to {
            self.rebuild(new_capacity);
        }
        Ok(None)
    }

    /// Like [`add`](Self::add), for callers whose key or value may be missing.
    pub fn try_add(&mut self, key: Option<K>, value: Option<V>) -> Result<Option<V>> {
        match (key, value) {
            (Some(key), Some(value)) => self.add(key, value),
            (None, _) => Err(Error::InvalidArgument("key is absent")),
            (_, None) => Err(Error::InvalidArgument("value is absent")),
        }
    }

    /// Returns a reference to the value stored under `key`.
    pub fn get_value<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut index = self.home_index(key);
        for _ in 0..self.capacity() {
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Occupied(k, v) if Borrow::<Q>::borrow(k) == key => return Some(v),
                // tombstones and other keys: keep walking
                _ => {}
            }
            index = self.next_index(index);
        }
        None
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_value(key).is_some()
    }

    /// Deletion is not offered. Always fails with [`Error::UnsupportedOperation`].
    pub fn remove<Q>(&mut self, _key: &Q) -> Result<Option<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        Err(Error::UnsupportedOperation("remove"))
    }

    /// Empties every slot. The entry and collision counters are left as they are.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = Slot::Empty;
        }
    }

    /// Iterator over the stored keys in slot order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            slots: &self.slots,
            cursor: 0,
        }
    }

    /// Value iteration is not offered. Always fails with [`Error::UnsupportedOperation`].
    pub fn values(&self) -> Result<Values<'_, K, V>> {
        Err(Error::UnsupportedOperation("values"))
    }

    fn home_index<Q: Hash + ?Sized>(&self, key: &Q) -> usize {
        let mut hasher = self.hasher.build_hasher();
        key.hash(&mut hasher);
        (hasher.finish() % self.capacity() as u64) as usize
    }

    fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }

    /// Walks from the home index to the first slot that is empty, a tombstone, or holds `key`.
    ///
    /// Terminates because the load factor keeps at least one slot empty.
    fn probe_for_insert(&self, key: &K) -> Probe {
        let mut index = self.home_index(key);
        let mut collided = false;
        loop {
            match &self.slots[index] {
                Slot::Occupied(k, _) if k != key => collided = true,
                _ => return Probe { index, collided },
            }
            index = self.next_index(index);
        }
    }

    fn record_collision(&mut self, collided: bool) {
        if collided {
            self.collisions += 1;
            trace!("collision #{} while inserting", self.collisions);
        }
    }

    fn write_new(&mut self, probe: Probe, key: K, value: V) {
        self.record_collision(probe.collided);
        self.slots[probe.index] = Slot::Occupied(key, value);
        self.occupied += 1;
    }

    /// Swaps in an empty table of `new_capacity` slots and replays every entry of the old one,
    /// in slot order, through the insert path. Tombstones are dropped.
    fn rebuild(&mut self, new_capacity: usize) {
        let old_capacity = self.capacity();
        let old_slots = mem::replace(&mut self.slots, empty_table(new_capacity));
        self.occupied = 0;

        for slot in old_slots {
            if let Slot::Occupied(key, value) = slot {
                // keys in the old table are distinct, so every probe ends on a free slot
                let probe = self.probe_for_insert(&key);
                self.write_new(probe, key, value);
            }
        }

        debug!(
            "resized hashed dictionary from {} to {} slots ({} entries)",
            old_capacity, new_capacity, self.occupied
        );
        debug_assert!(
            !exceeds_load(self.occupied, new_capacity),
            "a rebuild must not itself need another rebuild"
        );
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Dictionary<K, V> for HashedDictionary<K, V, S> {
    type Keys<'a>
        = Keys<'a, K, V>
    where
        Self: 'a,
        K: 'a;

    type Values<'a>
        = Values<'a, K, V>
    where
        Self: 'a,
        V: 'a;

    fn add(&mut self, key: K, value: V) -> Result<Option<V>> {
        HashedDictionary::add(self, key, value)
    }

    fn remove<Q>(&mut self, key: &Q) -> Result<Option<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        HashedDictionary::remove(self, key)
    }

    fn get_value<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        HashedDictionary::get_value(self, key)
    }

    fn size(&self) -> usize {
        self.occupied
    }

    fn clear(&mut self) {
        HashedDictionary::clear(self)
    }

    fn keys(&self) -> Keys<'_, K, V> {
        HashedDictionary::keys(self)
    }

    fn values(&self) -> Result<Values<'_, K, V>> {
        HashedDictionary::values(self)
    }
}

/// Single-pass iterator over the keys of a [`HashedDictionary`], in slot order.
///
/// Besides [`Iterator`], it offers a cursor-style interface: [`has_next`](Keys::has_next) moves
/// past empty slots without consuming anything, and [`try_next`](Keys::try_next) reports
/// exhaustion as an error instead of `None`.
#[derive(Debug)]
pub struct Keys<'a, K, V> {
    slots: &'a [Slot<K, V>],
    cursor: usize,
}

impl<'a, K, V> Keys<'a, K, V> {
    /// Advances the cursor to the next occupied slot and returns its key without consuming it.
    fn peek_key(&mut self) -> Option<&'a K> {
        let slots = self.slots;
        while let Some(slot) = slots.get(self.cursor) {
            if let Slot::Occupied(key, _) = slot {
                return Some(key);
            }
            self.cursor += 1;
        }
        None
    }

    pub fn has_next(&mut self) -> bool {
        self.peek_key().is_some()
    }

    /// Returns the next key, or [`Error::ExhaustedIterator`] when none remain.
    pub fn try_next(&mut self) -> Result<&'a K> {
        self.next().ok_or(Error::ExhaustedIterator)
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.peek_key()?;
        self.cursor += 1;
        Some(key)
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Iterator over the values of a [`HashedDictionary`].
///
/// Value iteration is not offered: [`HashedDictionary::values`] always fails, so no `Values` is
/// ever constructed.
#[derive(Debug)]
pub struct Values<'a, K, V> {
    never: Infallible,
    _slots: PhantomData<&'a [Slot<K, V>]>,
}

impl<'a, K, V> Values<'a, K, V> {
    pub fn has_next(&mut self) -> Result<bool> {
        let never = self.never;
        match never {}
    }

    pub fn try_next(&mut self) -> Result<&'a V> {
        let never = self.never;
        match never {}
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let never = self.never;
        match never {}
    }
}
