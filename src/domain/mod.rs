//! Domain layer containing the TOPSIS pipeline and its vocabulary.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (error taxonomy, impact direction)
//! - `analysis` - Pure pipeline stages (validation, scoring, ranking)

pub mod analysis;
pub mod foundation;
