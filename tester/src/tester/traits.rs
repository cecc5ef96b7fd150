use std::{collections::HashMap, hash::Hash, mem};

use open_addressing::{traits::hash_table::HashTable, TableError};
use rand::{
    distributions::{Distribution, Standard},
    rngs::StdRng,
    Rng, SeedableRng,
};

use crate::{SeededState, MIN_KEYS};

/// deterministically applies an operation to a T returning the result
pub trait Operation<T> {
    type Result: Sized;
    fn apply(&self, target: &mut T) -> Self::Result;
}

// deterministically generates a sequence of operations along with their expected results
pub trait OperationGenerator:
    Iterator<Item = (Self::Operation, Self::Expected)> + Sized
{
    type Operation;
    type Expected;
    type ReferenceImpl;
    fn from_seed(seed: u64) -> Self;
    fn data(&self) -> &Self::ReferenceImpl;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashTableOperation<K, V> {
    Insert(K, V),
    Remove(K),
    Put(K, V),
    Get(K),
    Has(K),
}

/// What an operation returned, in a form both sides can be compared on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome<V> {
    Unit(Result<(), TableError>),
    Value(Result<V, TableError>),
    Bool(bool),
}

impl<T, K, V> Operation<T> for HashTableOperation<K, V>
where
    T: HashTable<K, V, SeededState>,
    K: Copy,
    V: Copy,
{
    type Result = Outcome<V>;

    fn apply(&self, table: &mut T) -> Outcome<V> {
        match *self {
            Self::Insert(key, value) => Outcome::Unit(table.insert(key, value)),
            Self::Remove(key) => Outcome::Value(table.remove(&key)),
            Self::Put(key, value) => Outcome::Value(table.put(&key, value)),
            Self::Get(key) => Outcome::Value(table.get(&key).copied()),
            Self::Has(key) => Outcome::Bool(table.has(&key)),
        }
    }
}

impl<K, V> HashTableOperation<K, V>
where
    K: Copy + Hash + Eq,
    V: Copy,
{
    /// The reference behaviour, spelled out on top of `std`.
    pub fn apply_reference(&self, data: &mut HashMap<K, V>) -> Outcome<V> {
        match *self {
            Self::Insert(key, value) => Outcome::Unit(if data.contains_key(&key) {
                Err(TableError::DuplicateKey)
            } else {
                data.insert(key, value);
                Ok(())
            }),
            Self::Remove(key) => Outcome::Value(data.remove(&key).ok_or(TableError::KeyNotFound)),
            Self::Put(key, value) => Outcome::Value(
                data.get_mut(&key)
                    .map(|v| mem::replace(v, value))
                    .ok_or(TableError::KeyNotFound),
            ),
            Self::Get(key) => Outcome::Value(data.get(&key).copied().ok_or(TableError::KeyNotFound)),
            Self::Has(key) => Outcome::Bool(data.contains_key(&key)),
        }
    }
}

pub struct HashTableOperationGenerator<K, V, R = StdRng> {
    rng: R,
    data: HashMap<K, V>,
    // every key ever inserted, including removed ones
    seen: Vec<K>,
}

impl<K, V, R> HashTableOperationGenerator<K, V, R>
where
    K: Copy,
    R: Rng,
    Standard: Distribution<K>,
{
    /// mostly keys that were inserted at some point, sometimes fresh ones
    fn pick_key(&mut self) -> K {
        if !self.seen.is_empty() && self.rng.gen_bool(0.75) {
            let ind = self.rng.gen_range(0..self.seen.len());
            self.seen[ind]
        } else {
            self.rng.gen()
        }
    }
}

impl<K, V, R> OperationGenerator for HashTableOperationGenerator<K, V, R>
where
    K: Copy + Hash + Eq,
    V: Copy,
    R: Rng + SeedableRng,
    Standard: Distribution<K>,
    Standard: Distribution<V>,
{
    type Operation = HashTableOperation<K, V>;
    type Expected = Outcome<V>;
    type ReferenceImpl = HashMap<K, V>;

    fn from_seed(seed: u64) -> Self {
        Self {
            rng: R::seed_from_u64(seed),
            data: HashMap::new(),
            seen: Vec::new(),
        }
    }

    fn data(&self) -> &HashMap<K, V> {
        &self.data
    }
}

impl<K, V, R> Iterator for HashTableOperationGenerator<K, V, R>
where
    K: Copy + Hash + Eq,
    V: Copy,
    R: Rng,
    Standard: Distribution<K>,
    Standard: Distribution<V>,
{
    type Item = (HashTableOperation<K, V>, Outcome<V>);

    fn next(&mut self) -> Option<Self::Item> {
        // only inserts until there are enough keys to work with
        let range = if self.data.len() > MIN_KEYS { 0..6 } else { 0..1 };

        let op = match self.rng.gen_range(range) {
            0 | 1 => {
                let key = if self.rng.gen_bool(0.9) {
                    self.rng.gen()
                } else {
                    self.pick_key()
                };
                let value: V = self.rng.gen();
                HashTableOperation::Insert(key, value)
            }
            2 => HashTableOperation::Remove(self.pick_key()),
            3 => {
                let key = self.pick_key();
                HashTableOperation::Put(key, self.rng.gen())
            }
            4 => HashTableOperation::Get(self.pick_key()),
            5 => HashTableOperation::Has(self.pick_key()),
            _ => unreachable!(),
        };

        if let HashTableOperation::Insert(key, _) = op {
            if !self.data.contains_key(&key) {
                self.seen.push(key);
            }
        }
        let expected = op.apply_reference(&mut self.data);
        Some((op, expected))
    }
}
