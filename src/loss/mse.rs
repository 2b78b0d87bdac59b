pub struct MseLoss;

impl MseLoss {
    /// Squared error of a single prediction: (expected − predicted)²
    pub fn squared_error(predicted: f64, expected: f64) -> f64 {
        (expected - predicted).powi(2)
    }

    /// Scalar MSE: mean((predicted - expected)²)
    ///
    /// Returns 0.0 for empty slices.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        if predicted.is_empty() {
            return 0.0;
        }
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| MseLoss::squared_error(*p, *y))
            .sum::<f64>() / n
    }
}
