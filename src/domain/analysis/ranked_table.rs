//! Ranked Table - the input table augmented with score and rank columns.

use serde::{Deserialize, Serialize};

use super::{Evaluation, RawTable};
use crate::domain::foundation::TopsisError;

pub const DEFAULT_SCORE_COLUMN: &str = "Topsis Score";
pub const DEFAULT_RANK_COLUMN: &str = "Rank";

/// Names and formatting of the appended output columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputColumns {
    pub score: String,
    pub rank: String,
    /// Fixed number of decimals for scores; shortest round-trip form with a
    /// trailing `.0` for integral values when `None`.
    pub score_precision: Option<usize>,
}

impl Default for OutputColumns {
    fn default() -> Self {
        Self {
            score: DEFAULT_SCORE_COLUMN.to_string(),
            rank: DEFAULT_RANK_COLUMN.to_string(),
            score_precision: None,
        }
    }
}

impl OutputColumns {
    /// Formats a score the way it is written to the output table.
    pub fn format_score(&self, score: f64) -> String {
        match self.score_precision {
            Some(precision) => format!("{:.*}", precision, score),
            None => format!("{:?}", score),
        }
    }
}

/// One row of the ranked table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRow {
    /// The original cells, verbatim.
    pub cells: Vec<String>,
    pub score: f64,
    pub rank: u32,
}

impl RankedRow {
    /// Identifier of the alternative (first column).
    pub fn id(&self) -> &str {
        self.cells.first().map(String::as_str).unwrap_or_default()
    }
}

/// The original table plus a score and a rank column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTable {
    pub headers: Vec<String>,
    pub rows: Vec<RankedRow>,
    pub columns: OutputColumns,
}

impl RankedTable {
    /// Appends scores and ranks to the raw table, preserving row order.
    ///
    /// Fails with STRUCTURAL_ERROR when the scores or ranks do not cover
    /// exactly the rows of the table.
    pub fn assemble(
        raw: &RawTable,
        evaluation: &Evaluation,
        ranks: &[u32],
        columns: OutputColumns,
    ) -> Result<Self, TopsisError> {
        if evaluation.scores.len() != raw.row_count() || ranks.len() != raw.row_count() {
            return Err(TopsisError::structural(format!(
                "Expected {} scores and ranks, got {} and {}",
                raw.row_count(),
                evaluation.scores.len(),
                ranks.len()
            )));
        }

        let mut headers = raw.headers().to_vec();
        headers.push(columns.score.clone());
        headers.push(columns.rank.clone());

        let rows = raw
            .rows()
            .iter()
            .zip(&evaluation.scores)
            .zip(ranks)
            .map(|((cells, &score), &rank)| RankedRow {
                cells: cells.clone(),
                score,
                rank,
            })
            .collect();

        Ok(Self {
            headers,
            rows,
            columns,
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Rows as output records: original cells, formatted score, rank.
    pub fn records(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.rows.iter().map(|row| {
            let mut record = row.cells.clone();
            record.push(self.columns.format_score(row.score));
            record.push(row.rank.to_string());
            record
        })
    }

    /// Identifiers of the rank-1 alternatives, in table order.
    pub fn winners(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|row| row.rank == 1)
            .map(RankedRow::id)
            .collect()
    }
}
