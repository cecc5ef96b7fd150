use core::hash::BuildHasher;

use crate::error::Result;

/// The operations every key/value table in this crate supports.
///
/// `insert` never overwrites: it fails with
/// [`DuplicateKey`](crate::TableError::DuplicateKey) when the key is present.
/// `get`, `put` and `remove` fail with
/// [`KeyNotFound`](crate::TableError::KeyNotFound) when it is not.
pub trait HashTable<K, V, S: BuildHasher>: Sized {
    fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self;
    fn insert(&mut self, key: K, value: V) -> Result<()>;
    fn remove(&mut self, key: &K) -> Result<V>;
    /// returns the value that was replaced
    fn put(&mut self, key: &K, value: V) -> Result<V>;
    fn get(&self, key: &K) -> Result<&V>;
    fn has(&self, key: &K) -> bool;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn capacity(&self) -> usize;
}
