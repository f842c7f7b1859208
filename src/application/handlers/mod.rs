//! Application handlers.
//!
//! Command handlers that orchestrate the domain pipeline through ports.

pub mod analysis;

pub use analysis::{RunTopsisCommand, RunTopsisHandler, RunTopsisResult};
