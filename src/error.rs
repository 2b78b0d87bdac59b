use thiserror::Error;

/// Errors raised while building a perceptron, a dataset or a training run.
///
/// Every variant is an invalid-argument error: it is reported as soon as the
/// bad value is seen and nothing is retried. Reaching the epoch cap without
/// converging is a normal outcome and is not represented here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PerceptronError {
    #[error("input size must be at least 1")]
    ZeroInputSize,

    #[error("learning rate must be a finite positive number, got {0}")]
    InvalidLearningRate(f64),

    #[error("expected {expected} inputs, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("input at index {index} is not a finite number")]
    NonFiniteInput { index: usize },

    #[error("row {row} has a non-finite value at index {index}")]
    NonFiniteValue { row: usize, index: usize },

    #[error("weight at index {index} is not a finite number")]
    NonFiniteWeight { index: usize },

    #[error("bias must be a finite number, got {0}")]
    NonFiniteBias(f64),

    #[error("dataset has {rows} rows but {targets} targets")]
    LengthMismatch { rows: usize, targets: usize },

    #[error("row {row} has {got} values, expected {expected}")]
    RaggedRows { row: usize, expected: usize, got: usize },

    #[error("dataset must contain at least one example")]
    EmptyDataset,

    #[error("target at index {index} must be 0 or 1, got {value}")]
    InvalidTarget { index: usize, value: f64 },

    #[error("invalid training config: {0}")]
    InvalidConfig(String),
}

impl PerceptronError {
    /// All current variants belong to the invalid-argument class.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            PerceptronError::ZeroInputSize
                | PerceptronError::InvalidLearningRate(_)
                | PerceptronError::DimensionMismatch { .. }
                | PerceptronError::NonFiniteInput { .. }
                | PerceptronError::NonFiniteValue { .. }
                | PerceptronError::NonFiniteWeight { .. }
                | PerceptronError::NonFiniteBias(_)
                | PerceptronError::LengthMismatch { .. }
                | PerceptronError::RaggedRows { .. }
                | PerceptronError::EmptyDataset
                | PerceptronError::InvalidTarget { .. }
                | PerceptronError::InvalidConfig(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PerceptronError>;
