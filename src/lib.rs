//! Open addressing hash tables with quadratic or linear probing.
//!
//! Capacities follow a fixed, roughly doubling schedule of primes starting
//! at 2. The table grows once it is half full, removed entries leave
//! tombstones that later inserts reuse, and growth is the only time
//! tombstones are cleared out.

pub mod prelude;

pub mod config;
pub mod error;
pub mod hash_table;
pub mod open_addressing;
pub mod traits;

#[cfg(test)]
mod logger;

pub use error::{Result, TableError};
pub use hash_table::{LinearHashTable, QuadraticHashTable};
pub use open_addressing::OpenAddressingTable;
