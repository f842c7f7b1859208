//! In-memory adapters.

mod in_memory_table_store;

pub use in_memory_table_store::InMemoryTableStore;
