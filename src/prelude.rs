pub use crate::error::TableError;
pub use crate::hash_table::{LinearHashTable, QuadraticHashTable};
pub use crate::open_addressing::probe::{Linear, Probe, Quadratic};
pub use crate::open_addressing::OpenAddressingTable;
pub use crate::traits::hash_table::HashTable;
