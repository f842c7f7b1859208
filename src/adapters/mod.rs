//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the TOPSIS core to external systems:
//! - `delimited` - Delimited text files via the `csv` crate
//! - `memory` - In-memory tables (testing, embedding)

pub mod delimited;
pub mod memory;

pub use delimited::CsvTableStore;
pub use memory::InMemoryTableStore;
