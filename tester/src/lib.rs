//! Differential testing for the tables in `open_addressing`.
//!
//! A seeded generator produces table operations together with the result
//! `std::collections::HashMap` gives for them; [`test_hashtable`] replays
//! them against a table and reports the first disagreement.

use std::{
    collections::hash_map::DefaultHasher,
    hash::{BuildHasher, Hasher},
};

mod tester;

pub use tester::{test_hashtable, OperationFailure};
pub use tester::traits::{HashTableOperation, Outcome};

/// Below this many live keys the generator only produces inserts.
pub const MIN_KEYS: usize = 16;

/// A hash builder that can be rebuilt from a seed, so a failing run can be replayed exactly.
pub trait DeterministicHasher: BuildHasher {
    type Seed;
    fn from_seed(seed: Self::Seed) -> Self;
}

/// SipHash keyed by a seed.
#[derive(Clone, Copy, Debug)]
pub struct SeededState {
    seed: u64,
}

impl BuildHasher for SeededState {
    type Hasher = DefaultHasher;

    fn build_hasher(&self) -> DefaultHasher {
        let mut hasher = DefaultHasher::new();
        hasher.write_u64(self.seed);
        hasher
    }
}

impl DeterministicHasher for SeededState {
    type Seed = u64;

    fn from_seed(seed: u64) -> Self {
        Self { seed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use open_addressing::prelude::*;
    use std::sync::Once;

    static INIT: Once = Once::new();

    fn initialize_logger() {
        INIT.call_once_force(|_| {
            let _ = env_logger::Builder::new()
                .filter_level(log::LevelFilter::Info)
                .is_test(true)
                .parse_default_env()
                .try_init();
        });
    }

    /// Forgets the value on removal, the way a careless tombstone implementation might.
    struct ForgetfulRemove(QuadraticHashTable<u16, u32, SeededState>);

    impl HashTable<u16, u32, SeededState> for ForgetfulRemove {
        fn with_capacity_and_hasher(capacity: usize, hash_builder: SeededState) -> Self {
            Self(QuadraticHashTable::with_capacity_and_hasher(
                capacity,
                hash_builder,
            ))
        }
        fn insert(&mut self, key: u16, value: u32) -> open_addressing::Result<()> {
            self.0.insert(key, value)
        }
        fn remove(&mut self, key: &u16) -> open_addressing::Result<u32> {
            self.0.remove(key).map(|_| 0)
        }
        fn put(&mut self, key: &u16, value: u32) -> open_addressing::Result<u32> {
            self.0.put(key, value)
        }
        fn get(&self, key: &u16) -> open_addressing::Result<&u32> {
            self.0.get(key)
        }
        fn has(&self, key: &u16) -> bool {
            self.0.has(key)
        }
        fn len(&self) -> usize {
            self.0.len()
        }
        fn capacity(&self) -> usize {
            self.0.capacity()
        }
    }

    impl std::fmt::Debug for ForgetfulRemove {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            std::fmt::Debug::fmt(&self.0, f)
        }
    }

    #[test]
    fn seeded_state_is_deterministic() {
        let a = SeededState::from_seed(42);
        let b = SeededState::from_seed(42);
        let c = SeededState::from_seed(43);
        let hash = |s: &SeededState| {
            let mut h = s.build_hasher();
            h.write_u32(7);
            h.finish()
        };
        assert_eq!(hash(&a), hash(&b));
        assert_ne!(hash(&a), hash(&c));
    }

    #[test]
    fn quadratic_matches_std() {
        initialize_logger();
        for seed in 0..8 {
            let res = test_hashtable::<QuadraticHashTable<u16, u32, SeededState>, u16, u32>(
                seed, 20_000, 0,
            );
            if let Err(failure) = res {
                failure.playback();
                panic!("{}", failure);
            }
        }
    }

    #[test]
    fn linear_matches_std() {
        initialize_logger();
        for seed in 0..8 {
            let res = test_hashtable::<LinearHashTable<u16, u32, SeededState>, u16, u32>(
                seed, 20_000, 0,
            );
            if let Err(failure) = res {
                failure.playback();
                panic!("{}", failure);
            }
        }
    }

    #[test]
    fn large_starting_capacity() {
        let res =
            test_hashtable::<LinearHashTable<u8, u8, SeededState>, u8, u8>(3, 5_000, 1000);
        assert!(res.is_ok());
    }

    #[test]
    fn catches_a_lost_remove_value() {
        initialize_logger();
        let failure = test_hashtable::<ForgetfulRemove, u16, u32>(1, 20_000, 0)
            .expect_err("removed values are dropped");
        assert!(matches!(failure.operation, HashTableOperation::Remove(_)));
        assert_eq!(failure.actual, Outcome::Value(Ok(0)));
        failure.playback();
    }
}
