//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the TOPSIS core and the outside world. Adapters implement these ports.
//!
//! - `TableReader` - Loads the decision table
//! - `TableWriter` - Persists the ranked table

mod table_store;

pub use table_store::{TableIoError, TableReader, TableWriter};
