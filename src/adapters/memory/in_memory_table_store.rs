//! In-Memory Table Store Adapter
//!
//! Serves a fixed input table and captures the ranked output in memory.
//! Useful for testing and for embedding the pipeline in other programs.

use std::cell::RefCell;

use crate::domain::analysis::{RankedTable, RawTable};
use crate::ports::{TableIoError, TableReader, TableWriter};

/// In-memory table source and sink
#[derive(Debug, Default)]
pub struct InMemoryTableStore {
    input: Option<RawTable>,
    output: RefCell<Option<RankedTable>>,
}

impl InMemoryTableStore {
    /// Create a store that serves the given table
    pub fn new(input: RawTable) -> Self {
        Self {
            input: Some(input),
            output: RefCell::new(None),
        }
    }

    /// Create a store with nothing to read (reads fail with `NotFound`)
    pub fn empty() -> Self {
        Self::default()
    }

    /// The last table written, if any
    pub fn written(&self) -> Option<RankedTable> {
        self.output.borrow().clone()
    }

    /// Whether anything has been written
    pub fn has_output(&self) -> bool {
        self.output.borrow().is_some()
    }
}

impl TableReader for InMemoryTableStore {
    fn read_table(&self) -> Result<RawTable, TableIoError> {
        self.input
            .clone()
            .ok_or_else(|| TableIoError::NotFound("<memory>".to_string()))
    }
}

impl TableWriter for InMemoryTableStore {
    fn write_table(&self, table: &RankedTable) -> Result<(), TableIoError> {
        *self.output.borrow_mut() = Some(table.clone());
        Ok(())
    }
}
