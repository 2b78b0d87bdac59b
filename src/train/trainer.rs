use crate::{
    data::dataset::Dataset,
    loss::mse::MseLoss,
    perceptron::perceptron::Perceptron,
};

/// Runs one epoch of online gradient descent, visiting examples in index
/// order and updating after each one. Returns the epoch's MSE, measured on
/// each example's output before its update.
///
/// The dataset width must already match `perceptron.input_size()`.
pub fn train_epoch(perceptron: &mut Perceptron, dataset: &Dataset) -> f64 {
    let outputs: Vec<f64> = dataset.iter()
        .map(|example| perceptron.learn_example(&example.inputs, example.target))
        .collect();

    MseLoss::loss(&outputs, &dataset.targets())
}
