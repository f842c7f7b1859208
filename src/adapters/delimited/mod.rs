//! Delimited text adapters (CSV, TSV, ...).

mod csv_table_store;

pub use csv_table_store::CsvTableStore;
