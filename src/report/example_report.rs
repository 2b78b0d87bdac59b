use serde::{Serialize, Deserialize};

/// How the perceptron currently scores one example. Produced by
/// `Perceptron::evaluate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleReport {
    pub inputs: Vec<f64>,
    /// Includes the bias term when the perceptron has one.
    pub weighted_sum: f64,
    /// The bias that went into `weighted_sum`; `None` for bias-free perceptrons.
    pub bias: Option<f64>,
    /// Sigmoid of `weighted_sum`.
    pub output: f64,
    pub prediction: u8,
    pub expected: f64,
}

impl ExampleReport {
    pub fn is_correct(&self) -> bool {
        f64::from(self.prediction) == self.expected
    }
}
