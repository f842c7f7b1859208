//! Delimited file configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Delimited file configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CsvConfig {
    /// Field delimiter of input and output files
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl CsvConfig {
    /// The delimiter as the byte expected by the `csv` crate
    pub fn delimiter_byte(&self) -> Result<u8, ValidationError> {
        match self.delimiter.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(ValidationError::InvalidDelimiter(self.delimiter.clone())),
        }
    }

    /// Validate delimited file configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.delimiter_byte().map(|_| ())
    }
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

fn default_delimiter() -> String {
    ",".to_string()
}
