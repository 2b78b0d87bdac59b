pub mod example_report;
pub mod console;
pub mod json_lines;

pub use example_report::ExampleReport;
pub use console::ConsoleReporter;
pub use json_lines::JsonLinesReporter;

use crate::data::dataset::Dataset;
use crate::error::Result;
use crate::perceptron::perceptron::Perceptron;
use crate::train::observer::TrainObserver;

/// A presenter for a whole demo run: training events plus section headers
/// and the per-example results block.
pub trait Reporter: TrainObserver {
    fn section(&mut self, title: &str);

    /// Reports every example of `dataset` against the current parameters.
    /// Fails only if the dataset width does not match the perceptron.
    fn print_results(&mut self, perceptron: &Perceptron, dataset: &Dataset) -> Result<()>;
}
