//! Foundation module - Shared domain primitives.
//!
//! Contains the error taxonomy and value objects that form the vocabulary
//! of the TOPSIS domain.

mod errors;
mod impact;

pub use errors::{ErrorCode, TopsisError};
pub use impact::Impact;
