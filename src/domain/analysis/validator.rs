//! Input Validator - coerces a raw table and weight/impact specifications
//! into typed, numerically safe inputs for the score engine.

use serde::Serialize;
use tracing::{debug, warn};

use super::{DecisionTable, RawTable, ScoreEngine};
use crate::domain::foundation::{Impact, TopsisError};

/// Minimum number of columns: the identifier plus two criteria.
pub const MIN_COLUMNS: usize = 3;

/// Knobs that tighten or relax validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Character separating tokens in weight and impact specifications.
    pub token_separator: char,
    /// Reject zero and negative weights instead of only warning about them.
    pub reject_non_positive_weights: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            token_separator: ',',
            reject_non_positive_weights: false,
        }
    }
}

/// Inputs that passed every precondition of the scoring pipeline.
///
/// Only [`InputValidator::validate`] constructs this, so holding one means
/// criteria are finite, shapes agree, and every column has a non-zero norm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedInput {
    table: DecisionTable,
    weights: Vec<f64>,
    impacts: Vec<Impact>,
}

impl ValidatedInput {
    pub fn table(&self) -> &DecisionTable {
        &self.table
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn impacts(&self) -> &[Impact] {
        &self.impacts
    }

    /// Returns a copy with the impact of one criterion reversed.
    ///
    /// Flipping a direction never invalidates an input, so the result stays
    /// validated. Returns `None` for an out-of-range criterion.
    pub fn with_flipped_impact(&self, criterion: usize) -> Option<Self> {
        let mut flipped = self.clone();
        let impact = flipped.impacts.get_mut(criterion)?;
        *impact = impact.flipped();
        Some(flipped)
    }
}

/// Validates raw TOPSIS inputs, failing fast on the first violation.
#[derive(Debug, Clone, Default)]
pub struct InputValidator {
    policy: ValidationPolicy,
}

impl InputValidator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    /// Validates and coerces a table plus weight and impact specifications.
    ///
    /// # Check order
    /// 1. At least three columns (STRUCTURAL_ERROR)
    /// 2. Numeric, finite criteria cells (TYPE_ERROR)
    /// 3. Weight, impact and criteria counts agree (SHAPE_ERROR)
    /// 4. Numeric weights (VALUE_ERROR)
    /// 5. Impacts are `+` or `-` (VALUE_ERROR)
    /// 6. No division by zero downstream (DEGENERATE_INPUT)
    pub fn validate(
        &self,
        raw: &RawTable,
        weights_spec: &str,
        impacts_spec: &str,
    ) -> Result<ValidatedInput, TopsisError> {
        if raw.column_count() < MIN_COLUMNS {
            return Err(TopsisError::structural(
                "Input file must contain at least three columns",
            )
            .with_detail("columns", raw.column_count().to_string()));
        }

        let table = Self::coerce_table(raw)?;

        let weight_tokens: Vec<&str> = weights_spec.split(self.policy.token_separator).collect();
        let impact_tokens: Vec<&str> = impacts_spec.split(self.policy.token_separator).collect();
        let criteria = table.criterion_count();

        if weight_tokens.len() != impact_tokens.len() || weight_tokens.len() != criteria {
            return Err(TopsisError::shape(
                "Number of weights, impacts, and criteria must be equal",
            )
            .with_detail("weights", weight_tokens.len().to_string())
            .with_detail("impacts", impact_tokens.len().to_string())
            .with_detail("criteria", criteria.to_string()));
        }

        let weights = self.parse_weights(&weight_tokens, &table.criteria)?;
        let impacts = impact_tokens
            .iter()
            .map(|token| token.parse::<Impact>())
            .collect::<Result<Vec<_>, _>>()?;

        Self::check_degeneracy(&table, &weights)?;

        debug!(
            alternatives = table.alternative_count(),
            criteria,
            "Validated TOPSIS input"
        );

        Ok(ValidatedInput {
            table,
            weights,
            impacts,
        })
    }

    /// Converts every cell after the identifier column into a finite real.
    fn coerce_table(raw: &RawTable) -> Result<DecisionTable, TopsisError> {
        let criteria = &raw.headers()[1..];
        let mut builder = DecisionTable::builder().criteria(criteria.to_vec());

        for (index, row) in raw.rows().iter().enumerate() {
            let mut values = Vec::with_capacity(criteria.len());
            for (cell, name) in row[1..].iter().zip(criteria) {
                match cell.trim().parse::<f64>() {
                    Ok(value) if value.is_finite() => values.push(value),
                    _ => {
                        return Err(TopsisError::non_numeric_criteria(
                            index + 1,
                            name.as_str(),
                            cell.as_str(),
                        ))
                    }
                }
            }
            builder = builder.alternative(row[0].as_str(), values);
        }

        builder.build()
    }

    fn parse_weights(&self, tokens: &[&str], criteria: &[String]) -> Result<Vec<f64>, TopsisError> {
        let mut weights = Vec::with_capacity(tokens.len());

        for (token, name) in tokens.iter().zip(criteria) {
            let weight = match token.trim().parse::<f64>() {
                Ok(w) if w.is_finite() => w,
                _ => {
                    return Err(TopsisError::value("Weights must be numeric")
                        .with_detail("token", *token))
                }
            };

            if weight <= 0.0 {
                if self.policy.reject_non_positive_weights {
                    return Err(TopsisError::value("Weights must be positive")
                        .with_detail("criterion", name.as_str())
                        .with_detail("token", *token));
                }
                warn!(criterion = %name, weight, "Non-positive weight accepted");
            }

            weights.push(weight);
        }

        Ok(weights)
    }

    /// Rejects inputs that would make the scoring divide by zero.
    fn check_degeneracy(table: &DecisionTable, weights: &[f64]) -> Result<(), TopsisError> {
        if table.is_empty() {
            return Err(TopsisError::degenerate("Input file contains no alternatives"));
        }

        for (index, name) in table.criteria.iter().enumerate() {
            let norm = ScoreEngine::euclidean_norm(table.column(index));
            if !(norm.is_finite() && norm > 0.0) {
                return Err(TopsisError::degenerate(format!(
                    "Criterion '{}' has zero or non-finite magnitude",
                    name
                ))
                .with_detail("criterion", name.as_str()));
            }
        }

        let discriminating = (0..table.criterion_count()).any(|index| {
            weights[index] != 0.0 && !Self::is_constant(table.column(index))
        });
        if !discriminating {
            return Err(TopsisError::degenerate(
                "No weighted criterion distinguishes between alternatives",
            ));
        }

        Ok(())
    }

    fn is_constant(mut values: impl Iterator<Item = f64>) -> bool {
        match values.next() {
            Some(first) => values.all(|v| v == first),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn phones() -> RawTable {
        RawTable::from_strs(
            &["Model", "Price", "Storage", "Camera", "Looks"],
            &[
                &["A", "250", "16", "12", "5"],
                &["B", "200", "16", "8", "3"],
                &["C", "300", "32", "16", "4"],
            ],
        )
        .unwrap()
    }

    fn validate(raw: &RawTable, weights: &str, impacts: &str) -> Result<ValidatedInput, TopsisError> {
        InputValidator::default().validate(raw, weights, impacts)
    }

    #[test]
    fn valid_input_is_coerced() {
        let input = validate(&phones(), "1,1,1,1", "+,+,+,-").unwrap();

        assert_eq!(input.table().criteria, vec!["Price", "Storage", "Camera", "Looks"]);
        assert_eq!(input.table().alternatives[2].id, "C");
        assert_eq!(input.table().alternatives[2].values, vec![300.0, 32.0, 16.0, 4.0]);
        assert_eq!(input.weights(), &[1.0, 1.0, 1.0, 1.0]);
        assert_eq!(
            input.impacts(),
            &[Impact::Maximize, Impact::Maximize, Impact::Maximize, Impact::Minimize]
        );
    }

    #[test]
    fn revalidation_is_idempotent() {
        let raw = phones();
        let first = validate(&raw, "1,2,1,0.5", "+,-,+,-").unwrap();
        let second = validate(&raw, "1,2,1,0.5", "+,-,+,-").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn too_few_columns_is_structural() {
        let raw = RawTable::from_strs(&["Model", "Price"], &[&["A", "1"], &["B", "2"]]).unwrap();
        let err = validate(&raw, "1", "+").unwrap_err();
        assert_eq!(err.code, ErrorCode::StructuralError);
    }

    #[test]
    fn non_numeric_cell_is_type_error() {
        let raw = RawTable::from_strs(
            &["Model", "Price", "Storage"],
            &[&["A", "250", "16"], &["B", "cheap", "16"]],
        )
        .unwrap();

        let err = validate(&raw, "1,1", "+,+").unwrap_err();
        assert_eq!(err.code, ErrorCode::TypeError);
        assert_eq!(err.details.get("row"), Some(&"2".to_string()));
        assert_eq!(err.details.get("column"), Some(&"Price".to_string()));
    }

    #[test]
    fn non_finite_cell_is_type_error() {
        let raw = RawTable::from_strs(
            &["Model", "Price", "Storage"],
            &[&["A", "NaN", "16"], &["B", "3", "16"]],
        )
        .unwrap();

        assert_eq!(validate(&raw, "1,1", "+,+").unwrap_err().code, ErrorCode::TypeError);
    }

    #[test]
    fn padded_numbers_are_accepted() {
        let raw = RawTable::from_strs(
            &["Model", "Price", "Storage"],
            &[&["A", " 250 ", "16"], &["B", "200", " 32"]],
        )
        .unwrap();

        let input = validate(&raw, "1, 2", "+,-").unwrap();
        assert_eq!(input.table().alternatives[0].values, vec![250.0, 16.0]);
        assert_eq!(input.weights(), &[1.0, 2.0]);
    }

    #[test]
    fn type_check_precedes_shape_check() {
        let raw = RawTable::from_strs(
            &["Model", "Price", "Storage"],
            &[&["A", "x", "16"], &["B", "200", "32"]],
        )
        .unwrap();

        let err = validate(&raw, "1", "+").unwrap_err();
        assert_eq!(err.code, ErrorCode::TypeError);
    }

    #[test]
    fn weight_count_mismatch_is_shape_error() {
        let err = validate(&phones(), "1,1,1", "+,+,+,-").unwrap_err();
        assert_eq!(err.code, ErrorCode::ShapeError);
        assert_eq!(err.details.get("weights"), Some(&"3".to_string()));
    }

    #[test]
    fn impact_count_mismatch_is_shape_error() {
        let err = validate(&phones(), "1,1,1,1", "+,+,+,-,-").unwrap_err();
        assert_eq!(err.code, ErrorCode::ShapeError);
    }

    #[test]
    fn empty_specifications_are_shape_errors() {
        let err = validate(&phones(), "", "").unwrap_err();
        assert_eq!(err.code, ErrorCode::ShapeError);
    }

    #[test]
    fn non_numeric_weight_is_value_error() {
        let err = validate(&phones(), "1,a,1,1", "+,+,+,-").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueError);
        assert_eq!(err.message, "Weights must be numeric");
    }

    #[test]
    fn infinite_weight_is_value_error() {
        let err = validate(&phones(), "1,inf,1,1", "+,+,+,-").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueError);
    }

    #[test]
    fn invalid_impact_is_value_error() {
        let err = validate(&phones(), "1,1,1,1", "+,+,*,-").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueError);
        assert_eq!(err.details.get("token"), Some(&"*".to_string()));
    }

    #[test]
    fn padded_impact_is_rejected() {
        let err = validate(&phones(), "1,1,1,1", "+, +,+,-").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueError);
    }

    #[test]
    fn weight_check_precedes_impact_check() {
        let err = validate(&phones(), "1,x,1,1", "+,?,+,-").unwrap_err();
        assert_eq!(err.message, "Weights must be numeric");
    }

    #[test]
    fn non_positive_weights_are_permitted_by_default() {
        let input = validate(&phones(), "1,0,-2,1", "+,+,+,-").unwrap();
        assert_eq!(input.weights(), &[1.0, 0.0, -2.0, 1.0]);
    }

    #[test]
    fn strict_policy_rejects_non_positive_weights() {
        let validator = InputValidator::new(ValidationPolicy {
            reject_non_positive_weights: true,
            ..Default::default()
        });

        let err = validator.validate(&phones(), "1,0,1,1", "+,+,+,-").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueError);
        assert_eq!(err.details.get("criterion"), Some(&"Storage".to_string()));
    }

    #[test]
    fn custom_separator_splits_tokens() {
        let validator = InputValidator::new(ValidationPolicy {
            token_separator: ';',
            ..Default::default()
        });

        let input = validator.validate(&phones(), "1;2;3;4", "+;+;-;-").unwrap();
        assert_eq!(input.weights(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn empty_table_is_degenerate() {
        let raw = RawTable::from_strs(&["Model", "Price", "Storage"], &[]).unwrap();
        let err = validate(&raw, "1,1", "+,+").unwrap_err();
        assert_eq!(err.code, ErrorCode::DegenerateInput);
    }

    #[test]
    fn all_zero_column_is_degenerate() {
        let raw = RawTable::from_strs(
            &["Model", "Price", "Storage"],
            &[&["A", "0", "16"], &["B", "0", "32"]],
        )
        .unwrap();

        let err = validate(&raw, "1,1", "+,+").unwrap_err();
        assert_eq!(err.code, ErrorCode::DegenerateInput);
        assert_eq!(err.details.get("criterion"), Some(&"Price".to_string()));
    }

    #[test]
    fn extreme_magnitude_columns_are_accepted() {
        let raw = RawTable::from_strs(
            &["Id", "Large", "Tiny"],
            &[&["a", "1e160", "1e-170"], &["b", "2e160", "2e-170"]],
        )
        .unwrap();

        let input = validate(&raw, "1,1", "+,+").unwrap();
        assert_eq!(input.table().alternatives[1].values, vec![2e160, 2e-170]);

        let evaluation = ScoreEngine::evaluate(&input).unwrap();
        assert!(evaluation.scores.iter().all(|s| s.is_finite()));
        assert!(evaluation.scores[1] > evaluation.scores[0]);
    }

    #[test]
    fn identical_alternatives_are_degenerate() {
        let raw = RawTable::from_strs(
            &["Model", "Price", "Storage"],
            &[&["A", "5", "16"], &["B", "5", "16"]],
        )
        .unwrap();

        let err = validate(&raw, "1,1", "+,-").unwrap_err();
        assert_eq!(err.code, ErrorCode::DegenerateInput);
    }

    #[test]
    fn single_alternative_is_degenerate() {
        let raw = RawTable::from_strs(&["Model", "Price", "Storage"], &[&["A", "5", "16"]]).unwrap();
        let err = validate(&raw, "1,1", "+,+").unwrap_err();
        assert_eq!(err.code, ErrorCode::DegenerateInput);
    }

    #[test]
    fn zero_weight_on_only_varying_criterion_is_degenerate() {
        let raw = RawTable::from_strs(
            &["Model", "Price", "Storage"],
            &[&["A", "5", "16"], &["B", "5", "32"]],
        )
        .unwrap();

        let err = validate(&raw, "1,0", "+,+").unwrap_err();
        assert_eq!(err.code, ErrorCode::DegenerateInput);
    }

    #[test]
    fn flipping_impact_keeps_other_fields() {
        let input = validate(&phones(), "1,1,1,1", "+,+,+,-").unwrap();
        let flipped = input.with_flipped_impact(3).unwrap();

        assert_eq!(flipped.impacts()[3], Impact::Maximize);
        assert_eq!(flipped.table(), input.table());
        assert_eq!(flipped.weights(), input.weights());
        assert!(input.with_flipped_impact(4).is_none());
    }
}
