use std::io::{self, Write};

use serde::Serialize;
use tracing::warn;

use crate::data::dataset::Dataset;
use crate::error::Result;
use crate::perceptron::perceptron::Perceptron;
use crate::report::example_report::ExampleReport;
use crate::report::Reporter;
use crate::train::observer::{TrainObserver, TrainingEvent};

/// Writes one JSON object per line for every event, section and result.
pub struct JsonLinesReporter<W: Write> {
    out: W,
}

/// Non-training records, tagged the same way as `TrainingEvent`.
#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Record<'a> {
    Section { title: &'a str },
    Result(&'a ExampleReport),
}

impl JsonLinesReporter<io::Stdout> {
    pub fn stdout() -> Self {
        JsonLinesReporter::new(io::stdout())
    }
}

impl<W: Write> JsonLinesReporter<W> {
    pub fn new(out: W) -> Self {
        JsonLinesReporter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit<T: Serialize>(&mut self, value: &T) {
        let written = serde_json::to_writer(&mut self.out, value)
            .map_err(io::Error::from)
            .and_then(|()| self.out.write_all(b"\n"));
        if let Err(e) = written {
            warn!(error = %e, "failed to write json record");
        }
    }
}

impl<W: Write> TrainObserver for JsonLinesReporter<W> {
    fn on_event(&mut self, event: &TrainingEvent) {
        self.emit(event);
    }
}

impl<W: Write> Reporter for JsonLinesReporter<W> {
    fn section(&mut self, title: &str) {
        self.emit(&Record::Section { title });
    }

    fn print_results(&mut self, perceptron: &Perceptron, dataset: &Dataset) -> Result<()> {
        for report in perceptron.evaluate(dataset)? {
            self.emit(&Record::Result(&report));
        }
        Ok(())
    }
}
