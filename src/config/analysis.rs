//! Analysis configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::{
    OutputColumns, ValidationPolicy, DEFAULT_RANK_COLUMN, DEFAULT_SCORE_COLUMN,
};

/// Largest useful number of decimals for an `f64` score
const MAX_SCORE_PRECISION: usize = 17;

/// Analysis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Separator between weight and impact tokens
    #[serde(default = "default_token_separator")]
    pub token_separator: String,

    /// Reject zero and negative weights instead of warning
    #[serde(default)]
    pub reject_non_positive_weights: bool,

    /// Header of the appended score column
    #[serde(default = "default_score_column")]
    pub score_column: String,

    /// Header of the appended rank column
    #[serde(default = "default_rank_column")]
    pub rank_column: String,

    /// Fixed number of decimals for written scores
    pub score_precision: Option<usize>,
}

impl AnalysisConfig {
    /// Validation policy for the input validator
    pub fn validation_policy(&self) -> Result<ValidationPolicy, ValidationError> {
        let mut chars = self.token_separator.chars();
        let token_separator = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(ValidationError::InvalidTokenSeparator(
                    self.token_separator.clone(),
                ))
            }
        };

        Ok(ValidationPolicy {
            token_separator,
            reject_non_positive_weights: self.reject_non_positive_weights,
        })
    }

    /// Names and formatting of the appended columns
    pub fn output_columns(&self) -> OutputColumns {
        OutputColumns {
            score: self.score_column.clone(),
            rank: self.rank_column.clone(),
            score_precision: self.score_precision,
        }
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validation_policy()?;
        if self.score_column.trim().is_empty() || self.rank_column.trim().is_empty() {
            return Err(ValidationError::EmptyColumnName);
        }
        if self.score_column == self.rank_column {
            return Err(ValidationError::DuplicateColumnName);
        }
        if self.score_precision.is_some_and(|p| p > MAX_SCORE_PRECISION) {
            return Err(ValidationError::PrecisionTooLarge);
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            token_separator: default_token_separator(),
            reject_non_positive_weights: false,
            score_column: default_score_column(),
            rank_column: default_rank_column(),
            score_precision: None,
        }
    }
}

fn default_token_separator() -> String {
    ",".to_string()
}

fn default_score_column() -> String {
    DEFAULT_SCORE_COLUMN.to_string()
}

fn default_rank_column() -> String {
    DEFAULT_RANK_COLUMN.to_string()
}
