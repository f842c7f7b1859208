//! RunTopsisHandler - Command handler for one TOPSIS run.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::analysis::{
    Evaluation, InputValidator, OutputColumns, RankedTable, Ranker, ScoreEngine,
};
use crate::domain::foundation::TopsisError;
use crate::ports::{TableReader, TableWriter};

/// Command to rank the alternatives of one table.
#[derive(Debug, Clone)]
pub struct RunTopsisCommand {
    /// Weight specification, e.g. `"1,1,1,2"`.
    pub weights: String,
    /// Impact specification, e.g. `"+,+,-,+"`.
    pub impacts: String,
}

impl RunTopsisCommand {
    pub fn new(weights: impl Into<String>, impacts: impl Into<String>) -> Self {
        Self {
            weights: weights.into(),
            impacts: impacts.into(),
        }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct RunTopsisResult {
    pub table: RankedTable,
    pub evaluation: Evaluation,
}

/// Handler for TOPSIS runs.
///
/// Nothing is written unless every stage succeeds.
pub struct RunTopsisHandler {
    reader: Arc<dyn TableReader>,
    writer: Arc<dyn TableWriter>,
    validator: InputValidator,
    columns: OutputColumns,
}

impl RunTopsisHandler {
    pub fn new(reader: Arc<dyn TableReader>, writer: Arc<dyn TableWriter>) -> Self {
        Self {
            reader,
            writer,
            validator: InputValidator::default(),
            columns: OutputColumns::default(),
        }
    }

    pub fn with_validator(mut self, validator: InputValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn with_columns(mut self, columns: OutputColumns) -> Self {
        self.columns = columns;
        self
    }

    pub fn handle(&self, cmd: RunTopsisCommand) -> Result<RunTopsisResult, TopsisError> {
        // 1. Load
        let raw = self.reader.read_table()?;

        // 2. Validate and coerce
        let input = self.validator.validate(&raw, &cmd.weights, &cmd.impacts)?;

        // 3. Score
        let evaluation = ScoreEngine::evaluate(&input)?;

        // 4. Rank
        let ranks = Ranker::dense_rank(&evaluation.scores);
        debug!(ranks = ?ranks, "Ranked alternatives");

        // 5. Assemble and persist
        let table = RankedTable::assemble(&raw, &evaluation, &ranks, self.columns.clone())?;
        self.writer.write_table(&table)?;

        info!(
            alternatives = table.row_count(),
            winners = ?table.winners(),
            "TOPSIS analysis completed"
        );

        Ok(RunTopsisResult { table, evaluation })
    }
}
