//! Table Store Ports - Interfaces for loading and persisting tables.
//!
//! The core never touches files; loaders hand it a `RawTable` and writers
//! receive the finished `RankedTable`.

use crate::domain::analysis::{RankedTable, RawTable};
use crate::domain::foundation::TopsisError;

/// Errors that can occur while reading or writing a table
#[derive(Debug, thiserror::Error)]
pub enum TableIoError {
    #[error("Input file not found: {0}")]
    NotFound(String),

    #[error("Row {row} has {found} fields, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Malformed table: {0}")]
    Malformed(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<TableIoError> for TopsisError {
    fn from(err: TableIoError) -> Self {
        match err {
            TableIoError::RaggedRow { row, .. } => {
                TopsisError::structural(err.to_string()).with_detail("row", row.to_string())
            }
            TableIoError::NotFound(location) => {
                TopsisError::io("Input file not found").with_detail("location", location)
            }
            other => TopsisError::io(other.to_string()),
        }
    }
}

/// Port for loading the decision table
pub trait TableReader {
    /// Reads the whole table into memory.
    ///
    /// # Errors
    /// Returns `TableIoError::NotFound` if the source does not exist
    fn read_table(&self) -> Result<RawTable, TableIoError>;
}

/// Port for persisting the ranked table
pub trait TableWriter {
    /// Writes the ranked table, replacing any previous content.
    fn write_table(&self, table: &RankedTable) -> Result<(), TableIoError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn not_found_maps_to_io_error() {
        let err: TopsisError = TableIoError::NotFound("data.csv".to_string()).into();
        assert_eq!(err.code, ErrorCode::IoError);
        assert_eq!(err.message, "Input file not found");
        assert_eq!(err.details.get("location"), Some(&"data.csv".to_string()));
    }

    #[test]
    fn ragged_row_maps_to_structural_error() {
        let err: TopsisError = TableIoError::RaggedRow {
            row: 4,
            expected: 5,
            found: 3,
        }
        .into();
        assert_eq!(err.code, ErrorCode::StructuralError);
        assert_eq!(err.message, "Row 4 has 3 fields, expected 5");
    }

    #[test]
    fn malformed_maps_to_io_error() {
        let err: TopsisError = TableIoError::Malformed("bad quoting".to_string()).into();
        assert_eq!(err.code, ErrorCode::IoError);
        assert_eq!(format!("{}", err), "[IO_ERROR] Malformed table: bad quoting");
    }
}
