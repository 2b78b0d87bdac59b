use tracing::{debug, info};

use crate::data::dataset::Dataset;
use crate::error::Result;
use crate::perceptron::perceptron::Perceptron;
use crate::train::epoch_stats::EpochStats;
use crate::train::observer::{TrainObserver, TrainingEvent};
use crate::train::outcome::{TrainingOutcome, TrainingState};
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_epoch;

/// Trains `perceptron` in place until an epoch's MSE drops below
/// `config.error_threshold` or `config.max_epochs` epochs have run.
///
/// Per example, in index order:
///
/// ```text
/// output  = sigmoid(bias + Σ w_j·x_j)
/// error   = target − output
/// w_j    += lr · error · output·(1 − output) · x_j
/// bias   += lr · error · output·(1 − output)        (bias-enabled only)
/// ```
///
/// # Errors
/// Returns an invalid-argument error if `config` is invalid or the dataset
/// width differs from the perceptron's input size. Nothing is mutated in
/// that case.
pub fn train_loop<O: TrainObserver + ?Sized>(
    perceptron: &mut Perceptron,
    dataset: &Dataset,
    config: &TrainConfig,
    observer: &mut O,
) -> Result<TrainingOutcome> {
    config.validate()?;
    perceptron.check_dimension(dataset.input_size())?;

    info!(
        use_bias = perceptron.uses_bias(),
        examples = dataset.len(),
        max_epochs = config.max_epochs,
        error_threshold = config.error_threshold,
        "starting perceptron training"
    );
    observer.on_event(&TrainingEvent::Started {
        use_bias: perceptron.uses_bias(),
        weights: perceptron.weights().to_vec(),
        bias: current_bias(perceptron),
    });

    let mut state = TrainingState::Training;
    let mut epoch = 0;
    let mut mse = 0.0;

    while !state.is_terminal() {
        mse = train_epoch(perceptron, dataset);
        epoch += 1;
        state = TrainingState::after_epoch(epoch, mse, config);

        if epoch % config.progress_interval == 0 {
            debug!(epoch, mse, "epoch complete");
            observer.on_event(&TrainingEvent::Progress(EpochStats {
                epoch,
                max_epochs: config.max_epochs,
                mse,
            }));
        }
    }

    let outcome = TrainingOutcome {
        state,
        epochs: epoch,
        final_mse: mse,
        weights: perceptron.weights().to_vec(),
        bias: current_bias(perceptron),
    };
    info!(state = ?outcome.state, epochs = outcome.epochs, mse = outcome.final_mse, "training finished");
    observer.on_event(&TrainingEvent::Finished(outcome.clone()));

    Ok(outcome)
}

fn current_bias(perceptron: &Perceptron) -> Option<f64> {
    perceptron.uses_bias().then_some(perceptron.bias())
}
