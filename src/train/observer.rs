use std::sync::mpsc;

use serde::{Serialize, Deserialize};

use crate::train::epoch_stats::EpochStats;
use crate::train::outcome::TrainingOutcome;

/// Structured events emitted by `train_loop`, in this order: one `Started`,
/// zero or more `Progress`, one `Finished`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TrainingEvent {
    Started {
        use_bias: bool,
        weights: Vec<f64>,
        bias: Option<f64>,
    },
    Progress(EpochStats),
    Finished(TrainingOutcome),
}

/// Receives training events. Observers only present; they cannot change
/// the numeric result or stop the run.
pub trait TrainObserver {
    fn on_event(&mut self, event: &TrainingEvent);
}

/// Discards every event.
impl TrainObserver for () {
    fn on_event(&mut self, _event: &TrainingEvent) {}
}

/// Collects events in memory.
impl TrainObserver for Vec<TrainingEvent> {
    fn on_event(&mut self, event: &TrainingEvent) {
        self.push(event.clone());
    }
}

/// Forwards events over a channel. A dropped receiver is ignored.
impl TrainObserver for mpsc::Sender<TrainingEvent> {
    fn on_event(&mut self, event: &TrainingEvent) {
        let _ = self.send(event.clone());
    }
}
