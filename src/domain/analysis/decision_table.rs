//! Decision Table - raw and typed representations of the alternatives table.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::TopsisError;

/// A table as handed over by a loader: a header row and string cells.
///
/// Every row has the same arity as the header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Creates a raw table, rejecting rows whose arity differs from the header.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, TopsisError> {
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != headers.len())
        {
            return Err(TopsisError::structural(format!(
                "Row {} has {} fields, expected {}",
                index + 1,
                row.len(),
                headers.len()
            ))
            .with_detail("row", (index + 1).to_string()));
        }

        Ok(Self { headers, rows })
    }

    /// Convenience constructor from string slices.
    pub fn from_strs(headers: &[&str], rows: &[&[&str]]) -> Result<Self, TopsisError> {
        Self::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Total number of columns, identifier included.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One alternative: an opaque identifier and its criteria values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: String,
    pub values: Vec<f64>,
}

impl Alternative {
    pub fn new(id: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            values,
        }
    }
}

/// Alternatives scored on purely numeric criteria.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionTable {
    /// Ordered criterion names.
    pub criteria: Vec<String>,
    /// Ordered alternatives; each has one value per criterion.
    pub alternatives: Vec<Alternative>,
}

impl DecisionTable {
    /// Creates a builder for constructing a decision table.
    pub fn builder() -> DecisionTableBuilder {
        DecisionTableBuilder::new()
    }

    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Row-major copy of the criteria values.
    pub fn matrix(&self) -> Vec<Vec<f64>> {
        self.alternatives.iter().map(|a| a.values.clone()).collect()
    }

    /// Iterates the values of one criterion column, top to bottom.
    pub fn column(&self, index: usize) -> impl Iterator<Item = f64> + '_ {
        self.alternatives.iter().map(move |a| a.values[index])
    }
}

/// Builder for constructing DecisionTable instances.
#[derive(Debug, Default)]
pub struct DecisionTableBuilder {
    criteria: Vec<String>,
    alternatives: Vec<Alternative>,
}

impl DecisionTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the criterion names.
    pub fn criteria(mut self, names: Vec<impl Into<String>>) -> Self {
        self.criteria = names.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Adds an alternative row.
    pub fn alternative(mut self, id: impl Into<String>, values: Vec<f64>) -> Self {
        self.alternatives.push(Alternative::new(id, values));
        self
    }

    /// Builds the table, checking that every row matches the criteria count.
    pub fn build(self) -> Result<DecisionTable, TopsisError> {
        let expected = self.criteria.len();
        if let Some(alt) = self.alternatives.iter().find(|a| a.values.len() != expected) {
            return Err(TopsisError::structural(format!(
                "Alternative '{}' has {} criteria values, expected {}",
                alt.id,
                alt.values.len(),
                expected
            )));
        }

        Ok(DecisionTable {
            criteria: self.criteria,
            alternatives: self.alternatives,
        })
    }
}
