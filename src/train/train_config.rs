use serde::{Serialize, Deserialize};

use crate::error::{PerceptronError, Result};

/// Stopping rules and progress cadence for a `train_loop` run.
///
/// # Fields
/// - `max_epochs`       : hard cap on full passes over the data
/// - `error_threshold`  : training stops once an epoch's MSE drops below it
/// - `progress_interval`: a `Progress` event is emitted on every epoch
///                        divisible by this value
///
/// Missing fields deserialize to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub max_epochs: usize,
    pub error_threshold: f64,
    pub progress_interval: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            max_epochs: 10_000,
            error_threshold: 0.01,
            progress_interval: 100,
        }
    }
}

impl TrainConfig {
    pub fn new(max_epochs: usize, error_threshold: f64) -> Self {
        TrainConfig {
            max_epochs,
            error_threshold,
            ..TrainConfig::default()
        }
    }

    pub fn with_progress_interval(mut self, progress_interval: usize) -> Self {
        self.progress_interval = progress_interval;
        self
    }

    /// Parses a config from JSON, e.g. `{"max_epochs": 100}`, and validates it.
    pub fn from_json_str(json: &str) -> Result<TrainConfig> {
        let config: TrainConfig = serde_json::from_str(json)
            .map_err(|e| PerceptronError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_epochs == 0 {
            return Err(PerceptronError::InvalidConfig("max_epochs must be at least 1".into()));
        }
        if self.progress_interval == 0 {
            return Err(PerceptronError::InvalidConfig(
                "progress_interval must be at least 1".into(),
            ));
        }
        if !self.error_threshold.is_finite() || self.error_threshold <= 0.0 {
            return Err(PerceptronError::InvalidConfig(format!(
                "error_threshold must be a finite positive number, got {}",
                self.error_threshold
            )));
        }
        Ok(())
    }
}
