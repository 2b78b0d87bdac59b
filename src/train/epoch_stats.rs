use serde::{Serialize, Deserialize};

/// Statistics for one completed epoch, emitted by `train_loop` every
/// `TrainConfig::progress_interval` epochs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Epoch cap of this run.
    pub max_epochs: usize,
    /// Mean squared error over all examples of this epoch, measured on the
    /// outputs computed before each example's update.
    pub mse: f64,
}
