//! Payloads passed between workflow stages.

use crate::error::{StageError, StageResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single row: field name to JSON value.
pub type Record = Map<String, Value>;

/// Tabular data as an ordered list of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Create a dataset from records.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Build a dataset from a JSON array of objects.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::InvalidData`] if `value` is not an array, or an
    /// element is not an object.
    pub fn from_json(value: Value) -> StageResult<Self> {
        let Value::Array(items) = value else {
            return Err(StageError::InvalidData(
                "expected a JSON array of records".to_string(),
            ));
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(record) => Ok(record),
                other => Err(StageError::InvalidData(format!(
                    "record {} is not an object: {}",
                    i, other
                ))),
            })
            .collect::<StageResult<Vec<_>>>()?;

        Ok(Self { records })
    }

    /// The records, in order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }
}

/// A labelled visual summary of a dataset.
///
/// The `spec` is renderer-agnostic JSON (for example a Vega-Lite document).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    /// Human-readable title
    pub title: String,
    /// Rendering description
    pub spec: Value,
}

/// A dataset with one label per record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelledDataset {
    dataset: Dataset,
    labels: Vec<Value>,
}

impl LabelledDataset {
    /// Pair a dataset with its labels.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::InvalidData`] if there is not exactly one label
    /// per record.
    pub fn new(dataset: Dataset, labels: Vec<Value>) -> StageResult<Self> {
        if dataset.len() != labels.len() {
            return Err(StageError::InvalidData(format!(
                "{} records but {} labels",
                dataset.len(),
                labels.len()
            )));
        }
        Ok(Self { dataset, labels })
    }

    /// The underlying records.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Labels, parallel to [`Dataset::records`].
    pub fn labels(&self) -> &[Value] {
        &self.labels
    }

    /// `(record, label)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Record, &Value)> {
        self.dataset.records().iter().zip(self.labels.iter())
    }
}

/// The answer to the question being addressed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// One-paragraph conclusion
    pub summary: String,
    /// Supporting numbers, tables or model output
    pub findings: Value,
}
