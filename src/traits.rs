pub mod hash_table;
