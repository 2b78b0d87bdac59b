use serde::{Serialize, Deserialize};

use crate::error::{PerceptronError, Result};

/// One row of training data: a fixed-length input vector and its 0/1 target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub inputs: Vec<f64>,
    pub target: f64,
}

/// An ordered, validated collection of training examples.
///
/// A `Dataset` is always non-empty, rectangular (every row has
/// `input_size()` values) and carries only 0.0 / 1.0 targets. Examples are
/// visited in index order every epoch; nothing shuffles them.
///
/// Deserialization goes through `from_examples`; a stored `input_size` is
/// ignored and recomputed from the rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DatasetRecord")]
pub struct Dataset {
    pub(crate) examples: Vec<TrainingExample>,
    pub(crate) input_size: usize,
}

#[derive(Deserialize)]
struct DatasetRecord {
    examples: Vec<TrainingExample>,
}

impl TryFrom<DatasetRecord> for Dataset {
    type Error = PerceptronError;

    fn try_from(record: DatasetRecord) -> Result<Dataset> {
        Dataset::from_examples(record.examples)
    }
}

impl Dataset {
    /// Builds a dataset from parallel row / target slices.
    pub fn from_rows(rows: &[Vec<f64>], targets: &[f64]) -> Result<Dataset> {
        if rows.len() != targets.len() {
            return Err(PerceptronError::LengthMismatch {
                rows: rows.len(),
                targets: targets.len(),
            });
        }
        let examples = rows.iter().zip(targets.iter())
            .map(|(inputs, &target)| TrainingExample { inputs: inputs.clone(), target })
            .collect();
        Dataset::from_examples(examples)
    }

    pub fn from_examples(examples: Vec<TrainingExample>) -> Result<Dataset> {
        let input_size = match examples.first() {
            Some(first) => first.inputs.len(),
            None => return Err(PerceptronError::EmptyDataset),
        };

        for (index, example) in examples.iter().enumerate() {
            if example.inputs.len() != input_size {
                return Err(PerceptronError::RaggedRows {
                    row: index,
                    expected: input_size,
                    got: example.inputs.len(),
                });
            }
            if let Some(position) = example.inputs.iter().position(|x| !x.is_finite()) {
                return Err(PerceptronError::NonFiniteValue { row: index, index: position });
            }
            if example.target != 0.0 && example.target != 1.0 {
                return Err(PerceptronError::InvalidTarget { index, value: example.target });
            }
        }

        Ok(Dataset { examples, input_size })
    }

    /// Width of every input row.
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// `true` when the dataset holds no examples.
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn examples(&self) -> &[TrainingExample] {
        &self.examples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrainingExample> {
        self.examples.iter()
    }

    pub fn targets(&self) -> Vec<f64> {
        self.examples.iter().map(|e| e.target).collect()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a TrainingExample;
    type IntoIter = std::slice::Iter<'a, TrainingExample>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.iter()
    }
}
