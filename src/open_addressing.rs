use core::{
    fmt::{self, Debug, Display, Formatter},
    hash::{BuildHasher, Hash, Hasher},
    marker::PhantomData,
    mem,
};

use std::collections::hash_map::RandomState;

use log::{debug, trace, warn};

mod capacity;
pub mod iter;
pub mod probe;
mod slot;

use crate::config::{DEFAULT_MIN_CAPACITY, LOAD_DENOMINATOR, LOAD_NUMERATOR};
use crate::error::{Result, TableError};
use capacity::CapacityIndex;
use iter::{Iter, Keys};
use probe::{Probe, ProbeSeq, Quadratic};
use slot::{Entry, Slot};

/// An open addressing hash table. Every entry lives directly in the slot
/// array; collisions are resolved by walking the probe sequence of `P`.
///
/// Removed entries leave a tombstone behind. Tombstones are reused by later
/// inserts and dropped for good when the table grows. The table never shrinks.
pub struct OpenAddressingTable<K, V, P = Quadratic, S = RandomState> {
    table: Box<[Slot<K, V>]>,
    capacity_index: CapacityIndex,
    len: usize,
    hash_builder: S,
    marker: PhantomData<P>,
}

fn empty_slots<K, V>(capacity: usize) -> Box<[Slot<K, V>]> {
    core::iter::repeat_with(Slot::default)
        .take(capacity)
        .collect()
}

impl<K, V, P> OpenAddressingTable<K, V, P, RandomState> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MIN_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K, V, P, S: Default> Default for OpenAddressingTable<K, V, P, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, P, S> OpenAddressingTable<K, V, P, S> {
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_MIN_CAPACITY, hash_builder)
    }

    /// Starts at the first scheduled capacity that is at least `capacity`.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        let capacity_index = CapacityIndex::at_least(capacity);
        Self {
            table: empty_slots(capacity_index.capacity()),
            capacity_index,
            len: 0,
            hash_builder,
            marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity_index.capacity()
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Entries in slot order, not insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.table, self.len)
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// Drops every entry and tombstone. The capacity is kept.
    pub fn clear(&mut self) {
        self.table.iter_mut().for_each(|slot| *slot = Slot::Empty);
        self.len = 0;
    }
}

impl<K, V, P, S> OpenAddressingTable<K, V, P, S>
where
    K: Hash + Eq,
    P: Probe,
    S: BuildHasher,
{
    fn hash(&self, k: &K) -> u64 {
        let mut hasher = self.hash_builder.build_hasher();
        k.hash(&mut hasher);
        hasher.finish()
    }

    fn key_index(&self, k: &K) -> usize {
        (self.hash(k) % self.capacity() as u64) as usize
    }

    /// A key that is not equal to itself could be stored but never found again.
    #[allow(clippy::eq_op)]
    fn check_key(k: &K) -> Result<()> {
        if k != k {
            return Err(TableError::InvalidKey);
        }
        Ok(())
    }

    /// Slot index holding `k`, if any.
    ///
    /// An empty slot ends the search since no key is ever placed past one.
    /// Tombstones do not end it.
    fn find(&self, k: &K) -> Result<Option<usize>> {
        Self::check_key(k)?;
        for index in ProbeSeq::<P>::new(self.key_index(k), self.capacity()) {
            let slot = &self.table[index];
            if slot.is_empty() {
                return Ok(None);
            }
            if matches!(slot.entry(), Some(e) if e.key == *k) {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }

    fn find_for_sure(&self, k: &K) -> Result<usize> {
        self.find(k)?.ok_or(TableError::KeyNotFound)
    }

    fn entry_mut(&mut self, k: &K) -> Result<&mut Entry<K, V>> {
        let index = self.find_for_sure(k)?;
        self.table[index]
            .entry_mut()
            .ok_or(TableError::KeyNotFound)
    }

    /// Adds a new key. Fails on a key that is already present, use
    /// [`put`](Self::put) to change the value of an existing one.
    pub fn insert(&mut self, key: K, val: V) -> Result<()> {
        if self.find(&key)?.is_some() {
            return Err(TableError::DuplicateKey);
        }

        let capacity = self.capacity();
        let table = &self.table;
        let index = ProbeSeq::<P>::new(self.key_index(&key), capacity)
            .find(|&i| table[i].is_free())
            .ok_or_else(|| {
                warn!("{} probe found no free slot in {} slots", P::NAME, capacity);
                TableError::CapacityExhausted { capacity }
            })?;

        self.table[index] = Slot::Occupied(Entry { key, val });
        self.len += 1;

        if self.len * LOAD_DENOMINATOR >= capacity * LOAD_NUMERATOR {
            self.grow();
        }
        Ok(())
    }

    /// Removes `key` and returns its value. The slot becomes a tombstone.
    pub fn remove(&mut self, key: &K) -> Result<V> {
        let index = self.find_for_sure(key)?;
        let entry = self.table[index].bury().ok_or(TableError::KeyNotFound)?;
        self.len -= 1;
        Ok(entry.val)
    }

    /// Replaces the value of a present key and returns the old one.
    pub fn put(&mut self, key: &K, val: V) -> Result<V> {
        let entry = self.entry_mut(key)?;
        Ok(mem::replace(&mut entry.val, val))
    }

    pub fn get(&self, key: &K) -> Result<&V> {
        let index = self.find_for_sure(key)?;
        self.table[index]
            .entry()
            .map(|e| &e.val)
            .ok_or(TableError::KeyNotFound)
    }

    pub fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        self.entry_mut(key).map(|e| &mut e.val)
    }

    pub fn has(&self, key: &K) -> bool {
        matches!(self.find(key), Ok(Some(_)))
    }

    /// Moves to the next scheduled capacity. Past the end of the schedule
    /// the table keeps its size and runs above the load limit.
    fn grow(&mut self) {
        let Some(next) = self.capacity_index.next() else {
            warn!(
                "capacity schedule exhausted at {}, load factor now {:.3}",
                self.capacity(),
                self.load_factor()
            );
            return;
        };
        if let Err(err) = self.rehash(next) {
            warn!("rehash to {} failed, keeping {}: {}", next.capacity(), self.capacity(), err);
        }
    }

    /// Rebuilds the table at `next`'s capacity, dropping tombstones.
    ///
    /// Every placement is worked out before anything moves, so a failure
    /// leaves the table as it was.
    fn rehash(&mut self, next: CapacityIndex) -> Result<()> {
        let old_capacity = self.capacity();
        let new_capacity = next.capacity();

        let mut taken = vec![false; new_capacity];
        let mut targets = Vec::with_capacity(self.len);
        let mut tombstones = 0;
        for slot in self.table.iter() {
            match slot {
                Slot::Occupied(e) => {
                    let start = (self.hash(&e.key) % new_capacity as u64) as usize;
                    let target = ProbeSeq::<P>::new(start, new_capacity)
                        .find(|&i| !taken[i])
                        .ok_or(TableError::CapacityExhausted {
                            capacity: new_capacity,
                        })?;
                    taken[target] = true;
                    targets.push(target);
                }
                Slot::Tombstone => tombstones += 1,
                Slot::Empty => {}
            }
        }

        let old = mem::replace(&mut self.table, empty_slots(new_capacity));
        let live = old.into_vec().into_iter().filter_map(Slot::into_entry);
        for (entry, target) in live.zip(targets) {
            self.table[target] = Slot::Occupied(entry);
        }
        self.capacity_index = next;

        debug!(
            "{} table grew {} -> {} with {} entries",
            P::NAME,
            old_capacity,
            new_capacity,
            self.len
        );
        trace!("dropped {} tombstones", tombstones);
        Ok(())
    }
}

impl<'a, K, V, P, S> IntoIterator for &'a OpenAddressingTable<K, V, P, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Display, V: Display, P, S> Display for OpenAddressingTable<K, V, P, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut iter = self.iter();
        if let Some((k, v)) = iter.next() {
            write!(f, "{}: {}", k, v)?;
        }
        for (k, v) in iter {
            write!(f, ", {}: {}", k, v)?;
        }
        write!(f, "}}")
    }
}

impl<K: Debug, V: Debug, P, S> Debug for OpenAddressingTable<K, V, P, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hashtable {{ capacity: {}, size: {}, elements: {{",
            self.capacity(),
            self.len
        )?;
        let mut iter = self.iter();
        if let Some((k, v)) = iter.next() {
            write!(f, "{:?}: {:?}", k, v)?;
        }
        for (k, v) in iter {
            write!(f, ", {:?}: {:?}", k, v)?;
        }
        write!(f, "}} }}")
    }
}
