pub mod dataset;
pub mod truth_tables;

pub use dataset::{Dataset, TrainingExample};
