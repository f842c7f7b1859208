//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Error codes organized by the precondition that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Shape or column-count violations in the table itself.
    StructuralError,
    /// Criteria cells that are not real numbers.
    TypeError,
    /// Weights, impacts and criteria disagree in length.
    ShapeError,
    /// A malformed weight or impact token.
    ValueError,
    /// Input on which the scoring would divide by zero.
    DegenerateInput,
    /// The table could not be read or written.
    IoError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::StructuralError => "STRUCTURAL_ERROR",
            ErrorCode::TypeError => "TYPE_ERROR",
            ErrorCode::ShapeError => "SHAPE_ERROR",
            ErrorCode::ValueError => "VALUE_ERROR",
            ErrorCode::DegenerateInput => "DEGENERATE_INPUT",
            ErrorCode::IoError => "IO_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Failure of a TOPSIS run, tagged with the kind of precondition violated.
#[derive(Debug, Clone, PartialEq)]
pub struct TopsisError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl TopsisError {
    /// Creates a new error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    pub fn structural(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StructuralError, message)
    }

    /// Creates a non-numeric criteria error pointing at the offending cell.
    pub fn non_numeric_criteria(row: usize, column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::TypeError,
            "All columns except the first must contain numeric values",
        )
        .with_detail("row", row.to_string())
        .with_detail("column", column)
        .with_detail("value", value)
    }

    pub fn shape(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ShapeError, message)
    }

    pub fn value(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueError, message)
    }

    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DegenerateInput, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::IoError, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for TopsisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for TopsisError {}
