//! Demo driver: trains a bias-free perceptron on AND and a bias-enabled
//! perceptron on OR, printing progress and per-example results.
//!
//! Environment:
//!   PERCEPTRON_SEED=<u64>    reproducible initial weights
//!   PERCEPTRON_REPORT=json   JSON lines instead of text
//!   RUST_LOG=debug           diagnostic logging on stderr

use anyhow::Context;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use perceptron_gates::data::truth_tables;
use perceptron_gates::{
    ConsoleReporter, Dataset, JsonLinesReporter, Perceptron, Reporter, TrainConfig,
};

const LEARNING_RATE: f64 = 0.1;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut rng = match std::env::var("PERCEPTRON_SEED") {
        Ok(raw) => {
            let seed: u64 = raw.parse()
                .with_context(|| format!("PERCEPTRON_SEED must be an unsigned integer, got {raw:?}"))?;
            info!(seed, "using fixed seed");
            ChaCha8Rng::seed_from_u64(seed)
        }
        Err(_) => ChaCha8Rng::from_entropy(),
    };

    let mut reporter: Box<dyn Reporter> = match std::env::var("PERCEPTRON_REPORT").as_deref() {
        Ok("json") => Box::new(JsonLinesReporter::stdout()),
        _ => Box::new(ConsoleReporter::stdout()),
    };
    let config = TrainConfig::default();

    reporter.section("PERCEPTRON WITHOUT BIAS FOR AND GATE");
    let mut and_perceptron = Perceptron::new(2, LEARNING_RATE, false, &mut rng)?;
    run(&mut and_perceptron, &truth_tables::and_gate(), &config, reporter.as_mut())?;

    reporter.section("PERCEPTRON WITH BIAS FOR OR GATE");
    let mut or_perceptron = Perceptron::new(2, LEARNING_RATE, true, &mut rng)?;
    run(&mut or_perceptron, &truth_tables::or_gate(), &config, reporter.as_mut())?;

    Ok(())
}

fn run(
    perceptron: &mut Perceptron,
    dataset: &Dataset,
    config: &TrainConfig,
    reporter: &mut dyn Reporter,
) -> anyhow::Result<()> {
    perceptron_gates::train_loop(perceptron, dataset, config, &mut *reporter)?;
    reporter.print_results(perceptron, dataset)?;
    Ok(())
}
