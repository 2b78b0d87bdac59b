pub mod perceptron;

pub use perceptron::{Perceptron, DECISION_THRESHOLD};
