use std::fmt;
use std::io::{self, Write};

use tracing::warn;

use crate::data::dataset::Dataset;
use crate::error::Result;
use crate::perceptron::perceptron::Perceptron;
use crate::report::Reporter;
use crate::train::observer::{TrainObserver, TrainingEvent};
use crate::train::outcome::TrainingState;

/// Renders training events and result blocks as human-readable text.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        ConsoleReporter::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        ConsoleReporter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{args}") {
            warn!(error = %e, "failed to write report line");
        }
    }
}

/// `[0.1234, -0.5678]`
pub fn format_weights(weights: &[f64]) -> String {
    let parts: Vec<String> = weights.iter().map(|w| format!("{w:.4}")).collect();
    format!("[{}]", parts.join(", "))
}

impl<W: Write> TrainObserver for ConsoleReporter<W> {
    fn on_event(&mut self, event: &TrainingEvent) {
        match event {
            TrainingEvent::Started { use_bias, weights, bias } => {
                let kind = if *use_bias { "with" } else { "without" };
                self.line(format_args!("Training perceptron {kind} bias..."));
                self.line(format_args!("Initial weights: {}", format_weights(weights)));
                if let Some(bias) = bias {
                    self.line(format_args!("Initial bias: {bias:.4}"));
                }
            }
            TrainingEvent::Progress(stats) => {
                self.line(format_args!("Epoch {}, error: {}", stats.epoch, stats.mse));
            }
            TrainingEvent::Finished(outcome) => {
                let how = match outcome.state {
                    TrainingState::Converged => "converged",
                    TrainingState::EpochCapReached => "epoch cap reached",
                    TrainingState::Training => "interrupted",
                };
                self.line(format_args!("Training finished in {} epochs ({how}).", outcome.epochs));
                self.line(format_args!("Final weights: {}", format_weights(&outcome.weights)));
                if let Some(bias) = outcome.bias {
                    self.line(format_args!("Final bias: {bias:.4}"));
                }
            }
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn section(&mut self, title: &str) {
        self.line(format_args!("=== {title} ==="));
    }

    fn print_results(&mut self, perceptron: &Perceptron, dataset: &Dataset) -> Result<()> {
        let reports = perceptron.evaluate(dataset)?;

        self.line(format_args!("\n--- Detailed results ---"));
        for report in &reports {
            let inputs: Vec<String> = report.inputs.iter().map(|x| x.to_string()).collect();
            self.line(format_args!("Inputs: [{}]", inputs.join(", ")));
            match report.bias {
                Some(bias) => self.line(format_args!(
                    "Weighted sum = {:.4} (includes bias: {bias:.4})",
                    report.weighted_sum
                )),
                None => self.line(format_args!("Weighted sum = {:.4}", report.weighted_sum)),
            }
            self.line(format_args!("Activation (sigmoid) = {:.4}", report.output));
            self.line(format_args!(
                "Prediction: {}, expected: {}",
                report.prediction, report.expected
            ));
            self.line(format_args!("------------------------"));
        }
        Ok(())
    }
}
