use std::{
    fmt::{self, Debug, Display},
    hash::Hash,
};

use log::{error, info};
use open_addressing::traits::hash_table::HashTable;
use rand::distributions::{Distribution, Standard};

use crate::{DeterministicHasher, SeededState};

pub(crate) mod traits;
use traits::*;

/// Runs `ops` generated operations from `seed` against a fresh `T`, checking
/// each result and the table length against `std::collections::HashMap`.
///
/// The table hashes with the same seed, so a failure can be replayed exactly.
pub fn test_hashtable<T, K, V>(
    seed: u64,
    ops: usize,
    starting_capacity: usize,
) -> Result<(), OperationFailure<T, K, V>>
where
    T: HashTable<K, V, SeededState>,
    K: Hash + Eq + Copy + Debug,
    V: Copy + Eq + Debug,
    Standard: Distribution<K>,
    Standard: Distribution<V>,
{
    let mut target = T::with_capacity_and_hasher(starting_capacity, SeededState::from_seed(seed));
    let mut gen: HashTableOperationGenerator<K, V> = OperationGenerator::from_seed(seed);

    for op_num in 0..ops {
        let Some((operation, expected)) = gen.next() else {
            break;
        };
        let actual = operation.apply(&mut target);
        let expected_len = gen.data().len();
        let actual_len = target.len();
        if actual != expected || actual_len != expected_len {
            error!(
                "op {} ({:?}) disagreed with reference, seed {}",
                op_num, operation, seed
            );
            return Err(OperationFailure {
                seed,
                starting_capacity,
                op_num,
                operation,
                expected,
                actual,
                expected_len,
                actual_len,
                target,
            });
        }
    }
    Ok(())
}

pub struct OperationFailure<T, K, V> {
    pub seed: u64,
    pub starting_capacity: usize,
    pub op_num: usize,
    pub operation: HashTableOperation<K, V>,
    pub expected: Outcome<V>,
    pub actual: Outcome<V>,
    pub expected_len: usize,
    pub actual_len: usize,
    /// the table as it was right after the failing operation
    pub target: T,
}

impl<T, K: Debug, V: Debug> Display for OperationFailure<T, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seed {} (starting capacity {}): operation {} {:?} returned {:?} with len {}, expected {:?} with len {}",
            self.seed,
            self.starting_capacity,
            self.op_num,
            self.operation,
            self.actual,
            self.actual_len,
            self.expected,
            self.expected_len
        )
    }
}

impl<T, K: Debug, V: Debug> Debug for OperationFailure<T, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl<T, K, V> OperationFailure<T, K, V>
where
    T: HashTable<K, V, SeededState> + Debug,
    K: Hash + Eq + Copy + Debug,
    V: Copy + Eq + Debug,
    Standard: Distribution<K>,
    Standard: Distribution<V>,
{
    /// Replays the run on a fresh table and logs the last few operations before the failure.
    pub fn playback(&self) {
        info!("running playback");
        let mut table =
            T::with_capacity_and_hasher(self.starting_capacity, SeededState::from_seed(self.seed));
        let gen: HashTableOperationGenerator<K, V> = OperationGenerator::from_seed(self.seed);

        let lower = self.op_num.saturating_sub(5);
        for (ind, (op, expected)) in gen.enumerate().take(self.op_num + 1) {
            let actual = op.apply(&mut table);
            if ind < lower {
                continue;
            }
            info!("--------- operation {} ----------", ind);
            info!("operation: {:?}", op);
            info!("expected / actual : {:?}, {:?}", expected, actual);
        }
        info!("table_state: {:?}", &table);
        info!("failed table_state: {:?}", &self.target);
    }
}
