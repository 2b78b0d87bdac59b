pub mod error;
pub mod activation;
pub mod loss;
pub mod data;
pub mod perceptron;
pub mod train;
pub mod report;

// Convenience re-exports
pub use error::{PerceptronError, Result};
pub use activation::sigmoid::Sigmoid;
pub use data::dataset::{Dataset, TrainingExample};
pub use perceptron::perceptron::Perceptron;
pub use train::train_config::TrainConfig;
pub use train::observer::{TrainObserver, TrainingEvent};
pub use train::outcome::{TrainingOutcome, TrainingState};
pub use train::loop_fn::train_loop;
pub use report::{ConsoleReporter, JsonLinesReporter, Reporter};
