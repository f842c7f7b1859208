//! Analysis handlers.

mod run_topsis;

pub use run_topsis::{RunTopsisCommand, RunTopsisHandler, RunTopsisResult};
