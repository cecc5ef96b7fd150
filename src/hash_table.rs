use std::collections::hash_map::RandomState;

use core::hash::{BuildHasher, Hash};

use crate::error::Result;
use crate::open_addressing::{
    probe::{Linear, Probe, Quadratic},
    OpenAddressingTable,
};

pub type QuadraticHashTable<K, V, S = RandomState> = OpenAddressingTable<K, V, Quadratic, S>;
pub type LinearHashTable<K, V, S = RandomState> = OpenAddressingTable<K, V, Linear, S>;

impl<K, V, P, S> crate::traits::hash_table::HashTable<K, V, S> for OpenAddressingTable<K, V, P, S>
where
    K: Hash + Eq,
    P: Probe,
    S: BuildHasher,
{
    fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self::with_capacity_and_hasher(capacity, hash_builder)
    }

    fn insert(&mut self, key: K, value: V) -> Result<()> {
        Self::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Result<V> {
        Self::remove(self, key)
    }

    fn put(&mut self, key: &K, value: V) -> Result<V> {
        Self::put(self, key, value)
    }

    fn get(&self, key: &K) -> Result<&V> {
        Self::get(self, key)
    }

    fn has(&self, key: &K) -> bool {
        Self::has(self, key)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn capacity(&self) -> usize {
        Self::capacity(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::hash_table::HashTable;
    use crate::TableError;

    fn through_trait<T: HashTable<u64, u64, RandomState>>() {
        let mut t = T::with_capacity_and_hasher(0, RandomState::new());
        assert!(t.is_empty());
        for i in 0..100 {
            t.insert(i, i + 1).unwrap();
        }
        assert_eq!(t.len(), 100);
        assert!(t.capacity() > 200);
        assert_eq!(t.insert(7, 0), Err(TableError::DuplicateKey));
        assert_eq!(t.put(&7, 70), Ok(8));
        assert_eq!(t.get(&7), Ok(&70));
        assert_eq!(t.remove(&7), Ok(70));
        assert!(!t.has(&7));
        assert_eq!(t.len(), 99);
    }

    #[test]
    fn quadratic_through_trait() {
        through_trait::<QuadraticHashTable<u64, u64>>();
    }

    #[test]
    fn linear_through_trait() {
        through_trait::<LinearHashTable<u64, u64>>();
    }
}
