use serde::{Serialize, Deserialize};

use crate::train::train_config::TrainConfig;

/// Where a training run stands. `Converged` and `EpochCapReached` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingState {
    Training,
    Converged,
    EpochCapReached,
}

impl TrainingState {
    /// State after `epoch` epochs (1-based) whose last MSE was `mse`.
    /// Convergence wins when it happens on the capping epoch.
    pub fn after_epoch(epoch: usize, mse: f64, config: &TrainConfig) -> TrainingState {
        if mse < config.error_threshold {
            TrainingState::Converged
        } else if epoch >= config.max_epochs {
            TrainingState::EpochCapReached
        } else {
            TrainingState::Training
        }
    }

    pub fn is_terminal(self) -> bool {
        self != TrainingState::Training
    }
}

/// Result of a finished `train_loop` run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingOutcome {
    pub state: TrainingState,
    /// Number of completed epochs.
    pub epochs: usize,
    /// MSE of the last completed epoch.
    pub final_mse: f64,
    pub weights: Vec<f64>,
    /// `None` for a bias-free perceptron.
    pub bias: Option<f64>,
}

impl TrainingOutcome {
    pub fn converged(&self) -> bool {
        self.state == TrainingState::Converged
    }
}
