//! Delimited File Table Store Adapter
//!
//! Reads the decision table from a delimited text file (header row first)
//! and writes the ranked table back in the same format.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::analysis::{RankedTable, RawTable};
use crate::ports::{TableIoError, TableReader, TableWriter};

/// File-backed table store using the `csv` crate
#[derive(Debug, Clone)]
pub struct CsvTableStore {
    path: PathBuf,
    delimiter: u8,
}

impl CsvTableStore {
    /// Create a comma-delimited store for a file
    ///
    /// # Example
    /// ```ignore
    /// let input = CsvTableStore::new("data.csv");
    /// let output = CsvTableStore::new("result.csv").with_delimiter(b';');
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            delimiter: b',',
        }
    }

    /// Use a different single-byte field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    fn open(&self) -> Result<File, TableIoError> {
        File::open(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => TableIoError::NotFound(self.path.display().to_string()),
            _ => TableIoError::Io(e.to_string()),
        })
    }
}

/// Translates `csv` failures, keeping ragged rows distinguishable.
fn map_csv_error(err: csv::Error) -> TableIoError {
    match err.kind() {
        csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => TableIoError::RaggedRow {
            // Record 0 is the header, so the record index is the data row number.
            row: pos.as_ref().map_or(0, |p| p.record() as usize),
            expected: *expected_len as usize,
            found: *len as usize,
        },
        csv::ErrorKind::Io(e) => TableIoError::Io(e.to_string()),
        _ => TableIoError::Malformed(err.to_string()),
    }
}

impl TableReader for CsvTableStore {
    fn read_table(&self) -> Result<RawTable, TableIoError> {
        let file = self.open()?;
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()
            .map_err(map_csv_error)?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(map_csv_error)?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!(path = %self.path.display(), rows = rows.len(), "Loaded table");

        RawTable::new(headers, rows).map_err(|e| TableIoError::Malformed(e.message))
    }
}

impl TableWriter for CsvTableStore {
    fn write_table(&self, table: &RankedTable) -> Result<(), TableIoError> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_path(&self.path)
            .map_err(map_csv_error)?;

        writer.write_record(&table.headers).map_err(map_csv_error)?;
        for record in table.records() {
            writer.write_record(&record).map_err(map_csv_error)?;
        }
        writer.flush().map_err(|e| TableIoError::Io(e.to_string()))?;

        debug!(path = %self.path.display(), rows = table.row_count(), "Wrote ranked table");

        Ok(())
    }
}
