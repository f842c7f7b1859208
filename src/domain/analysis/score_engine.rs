//! Score Engine - vector-normalized TOPSIS scoring.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ValidatedInput;
use crate::domain::foundation::{Impact, TopsisError};

/// Per-criterion reference points derived from the weighted matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealPoint {
    pub best: Vec<f64>,
    pub worst: Vec<f64>,
}

/// Euclidean distances of one alternative to the ideal points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Separation {
    pub to_best: f64,
    pub to_worst: f64,
}

impl Separation {
    /// Relative closeness to the ideal solution.
    ///
    /// Both distances are rescaled by the larger one before dividing, so
    /// distances near `f64::MAX` still yield a score. Returns `None` when
    /// both distances are zero or either one is not finite.
    pub fn closeness(&self) -> Option<f64> {
        let scale = self.to_best.max(self.to_worst);
        if !(scale.is_finite() && scale > 0.0) || self.to_best.is_nan() || self.to_worst.is_nan() {
            return None;
        }

        let (to_best, to_worst) = (self.to_best / scale, self.to_worst / scale);
        let score = to_worst / (to_best + to_worst);
        score.is_finite().then_some(score)
    }
}

/// Result of scoring one validated input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub ideal: IdealPoint,
    /// One entry per alternative, in table order.
    pub separations: Vec<Separation>,
    /// One score per alternative, in table order.
    pub scores: Vec<f64>,
}

/// TOPSIS scoring functions.
pub struct ScoreEngine;

impl ScoreEngine {
    /// Scores every alternative of a validated input.
    ///
    /// # Algorithm
    /// 1. Divide each column by its Euclidean norm
    /// 2. Multiply each column by its weight
    /// 3. Take per-column max/min as ideal best/worst according to impact
    /// 4. Measure each row's distance to both ideal points
    /// 5. score = d_worst / (d_best + d_worst)
    ///
    /// # Errors
    /// DEGENERATE_INPUT if an alternative sits on both ideal points or a
    /// distance overflows. Validation rules out the former, so only weights
    /// near `f64::MAX` reach it.
    pub fn evaluate(input: &ValidatedInput) -> Result<Evaluation, TopsisError> {
        let normalized = Self::normalize(&input.table().matrix());
        let weighted = Self::apply_weights(&normalized, input.weights());
        let ideal = Self::ideal_point(&weighted, input.impacts());
        let separations = Self::separations(&weighted, &ideal);

        let scores = separations
            .iter()
            .zip(&input.table().alternatives)
            .map(|(separation, alt)| {
                separation.closeness().ok_or_else(|| {
                    TopsisError::degenerate(format!(
                        "Alternative '{}' coincides with both ideal points",
                        alt.id
                    ))
                    .with_detail("alternative", alt.id.as_str())
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(alternatives = scores.len(), "Computed TOPSIS scores");

        Ok(Evaluation {
            ideal,
            separations,
            scores,
        })
    }

    /// Divides every column by its Euclidean norm.
    ///
    /// A zero-norm column yields non-finite values; callers pass validated
    /// matrices where that cannot happen.
    pub fn normalize(matrix: &[Vec<f64>]) -> Vec<Vec<f64>> {
        let columns = matrix.first().map_or(0, Vec::len);
        let norms: Vec<f64> = (0..columns)
            .map(|j| Self::euclidean_norm(matrix.iter().map(|row| row[j])))
            .collect();

        matrix
            .iter()
            .map(|row| row.iter().zip(&norms).map(|(v, n)| v / n).collect())
            .collect()
    }

    /// Multiplies every column by its weight.
    pub fn apply_weights(matrix: &[Vec<f64>], weights: &[f64]) -> Vec<Vec<f64>> {
        matrix
            .iter()
            .map(|row| row.iter().zip(weights).map(|(v, w)| v * w).collect())
            .collect()
    }

    /// Derives ideal best and worst values for each column.
    pub fn ideal_point(weighted: &[Vec<f64>], impacts: &[Impact]) -> IdealPoint {
        let mut best = Vec::with_capacity(impacts.len());
        let mut worst = Vec::with_capacity(impacts.len());

        for (j, impact) in impacts.iter().enumerate() {
            let (min, max) = weighted.iter().map(|row| row[j]).fold(
                (f64::INFINITY, f64::NEG_INFINITY),
                |(min, max), v| (min.min(v), max.max(v)),
            );
            let (b, w) = impact.order(min, max);
            best.push(b);
            worst.push(w);
        }

        IdealPoint { best, worst }
    }

    /// Computes each row's Euclidean distance to the ideal best and worst.
    pub fn separations(weighted: &[Vec<f64>], ideal: &IdealPoint) -> Vec<Separation> {
        weighted
            .iter()
            .map(|row| Separation {
                to_best: Self::distance(row, &ideal.best),
                to_worst: Self::distance(row, &ideal.worst),
            })
            .collect()
    }

    /// Euclidean norm of a vector without intermediate overflow or underflow.
    ///
    /// Folding with `hypot` keeps magnitudes like `1e160` or `1e-170` from
    /// squaring out of range.
    pub fn euclidean_norm(values: impl IntoIterator<Item = f64>) -> f64 {
        values.into_iter().fold(0.0, f64::hypot)
    }

    fn distance(a: &[f64], b: &[f64]) -> f64 {
        Self::euclidean_norm(a.iter().zip(b).map(|(x, y)| x - y))
    }
}
