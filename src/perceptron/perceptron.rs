use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::activation::sigmoid::Sigmoid;
use crate::data::dataset::Dataset;
use crate::error::{PerceptronError, Result};
use crate::report::example_report::ExampleReport;
use crate::train::loop_fn::train_loop;
use crate::train::observer::TrainObserver;
use crate::train::outcome::TrainingOutcome;
use crate::train::train_config::TrainConfig;

/// Outputs at or above this value classify as 1.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// A single sigmoid neuron with an optional trainable bias.
///
/// `weights.len()` is fixed at construction and never changes. When
/// `use_bias` is `false` the bias stays at 0.0 and is left out of the
/// weighted sum.
///
/// Deserialization goes through `from_parts`, so it applies the same checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PerceptronRecord")]
pub struct Perceptron {
    weights: Vec<f64>,
    bias: f64,
    learning_rate: f64,
    use_bias: bool,
}

#[derive(Deserialize)]
struct PerceptronRecord {
    weights: Vec<f64>,
    bias: f64,
    learning_rate: f64,
    use_bias: bool,
}

impl TryFrom<PerceptronRecord> for Perceptron {
    type Error = PerceptronError;

    fn try_from(record: PerceptronRecord) -> Result<Perceptron> {
        Perceptron::from_parts(record.weights, record.bias, record.learning_rate, record.use_bias)
    }
}

impl Perceptron {
    /// Creates a perceptron with weights (and bias, if enabled) drawn
    /// uniformly from [-1, 1) using `rng`.
    pub fn new<R: Rng + ?Sized>(
        input_size: usize,
        learning_rate: f64,
        use_bias: bool,
        rng: &mut R,
    ) -> Result<Perceptron> {
        if input_size == 0 {
            return Err(PerceptronError::ZeroInputSize);
        }
        let weights = (0..input_size)
            .map(|_| rng.gen::<f64>() * 2.0 - 1.0)
            .collect();
        let bias = if use_bias { rng.gen::<f64>() * 2.0 - 1.0 } else { 0.0 };

        Perceptron::from_parts(weights, bias, learning_rate, use_bias)
    }

    /// Builds a perceptron from explicit parameters. `bias` is ignored
    /// (stored as 0.0) when `use_bias` is `false`.
    pub fn from_parts(
        weights: Vec<f64>,
        bias: f64,
        learning_rate: f64,
        use_bias: bool,
    ) -> Result<Perceptron> {
        if weights.is_empty() {
            return Err(PerceptronError::ZeroInputSize);
        }
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(PerceptronError::InvalidLearningRate(learning_rate));
        }
        if let Some(index) = weights.iter().position(|w| !w.is_finite()) {
            return Err(PerceptronError::NonFiniteWeight { index });
        }
        if use_bias && !bias.is_finite() {
            return Err(PerceptronError::NonFiniteBias(bias));
        }

        Ok(Perceptron {
            weights,
            bias: if use_bias { bias } else { 0.0 },
            learning_rate,
            use_bias,
        })
    }

    pub fn input_size(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn uses_bias(&self) -> bool {
        self.use_bias
    }

    /// `bias + Σ inputs[i]·weights[i]`, with the bias term only when enabled.
    /// Every input must be finite.
    pub fn weighted_sum(&self, inputs: &[f64]) -> Result<f64> {
        self.check_dimension(inputs.len())?;
        if let Some(index) = inputs.iter().position(|x| !x.is_finite()) {
            return Err(PerceptronError::NonFiniteInput { index });
        }
        Ok(self.weighted_sum_unchecked(inputs))
    }

    /// Sigmoid of the weighted sum; always strictly inside (0, 1).
    pub fn calculate_output(&self, inputs: &[f64]) -> Result<f64> {
        Ok(Sigmoid::function(self.weighted_sum(inputs)?))
    }

    /// Binary classification: 1 when the output is at least 0.5, else 0.
    pub fn predict(&self, inputs: &[f64]) -> Result<u8> {
        let output = self.calculate_output(inputs)?;
        Ok(classify(output))
    }

    /// Recomputes weighted sum, output and prediction for every example
    /// without touching the parameters.
    pub fn evaluate(&self, dataset: &Dataset) -> Result<Vec<ExampleReport>> {
        self.check_dimension(dataset.input_size())?;

        let reports = dataset.iter()
            .map(|example| {
                let weighted_sum = self.weighted_sum_unchecked(&example.inputs);
                let output = Sigmoid::function(weighted_sum);
                ExampleReport {
                    inputs: example.inputs.clone(),
                    weighted_sum,
                    bias: self.use_bias.then_some(self.bias),
                    output,
                    prediction: classify(output),
                    expected: example.target,
                }
            })
            .collect();
        Ok(reports)
    }

    /// Trains on parallel row / target slices.
    ///
    /// The rows are validated into a `Dataset` first; see `train_loop` for
    /// the update rule and the stopping conditions.
    pub fn train<O: TrainObserver + ?Sized>(
        &mut self,
        data: &[Vec<f64>],
        targets: &[f64],
        config: &TrainConfig,
        observer: &mut O,
    ) -> Result<TrainingOutcome> {
        let dataset = Dataset::from_rows(data, targets)?;
        train_loop(self, &dataset, config, observer)
    }

    /// One online gradient-descent step on a single example.
    /// Returns the output computed *before* the update.
    ///
    /// Callers must have checked `inputs.len() == self.input_size()`.
    pub(crate) fn learn_example(&mut self, inputs: &[f64], target: f64) -> f64 {
        let output = Sigmoid::function(self.weighted_sum_unchecked(inputs));
        let error = target - output;
        let derivative = Sigmoid::derivative_from_output(output);

        for (weight, x) in self.weights.iter_mut().zip(inputs.iter()) {
            *weight += self.learning_rate * error * derivative * x;
        }
        if self.use_bias {
            self.bias += self.learning_rate * error * derivative;
        }

        output
    }

    pub(crate) fn check_dimension(&self, got: usize) -> Result<()> {
        if got != self.weights.len() {
            return Err(PerceptronError::DimensionMismatch {
                expected: self.weights.len(),
                got,
            });
        }
        Ok(())
    }

    fn weighted_sum_unchecked(&self, inputs: &[f64]) -> f64 {
        let start = if self.use_bias { self.bias } else { 0.0 };
        self.weights.iter().zip(inputs.iter())
            .fold(start, |sum, (w, x)| sum + x * w)
    }
}

fn classify(output: f64) -> u8 {
    if output >= DECISION_THRESHOLD { 1 } else { 0 }
}
