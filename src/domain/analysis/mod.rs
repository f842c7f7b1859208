//! Analysis Module - Pure domain services for TOPSIS ranking.
//!
//! # Components
//!
//! - `RawTable` / `DecisionTable` - Loaded table and its numeric coercion
//! - `InputValidator` - Fail-fast precondition checks and coercion
//! - `ScoreEngine` - Normalization, weighting, ideal points, closeness scores
//! - `Ranker` - Dense ranking on descending score
//! - `RankedTable` - Input table augmented with score and rank columns
//!
//! All functions are pure and stateless. Stages run strictly in order:
//! validator, engine, ranker.

mod decision_table;
mod ranked_table;
mod ranker;
mod score_engine;
mod validator;

pub use decision_table::{Alternative, DecisionTable, DecisionTableBuilder, RawTable};
pub use ranked_table::{
    OutputColumns, RankedRow, RankedTable, DEFAULT_RANK_COLUMN, DEFAULT_SCORE_COLUMN,
};
pub use ranker::Ranker;
pub use score_engine::{Evaluation, IdealPoint, ScoreEngine, Separation};
pub use validator::{InputValidator, ValidatedInput, ValidationPolicy, MIN_COLUMNS};
