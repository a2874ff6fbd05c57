//! Trains a small network on numeric CSV data.
//!
//! ```text
//! cargo run -p denseflow-data --example train_csv -- xs.csv ys.csv
//! ```
//!
//! Without arguments a synthetic, linearly separable data set is generated.
//! Set `RUST_LOG=info` (or `debug`) to see training progress.

use denseflow_core::nn::{Activation, LossKind};
use denseflow_core::train::{TrainConfig, Trainer};
use denseflow_data::{load_csv, DataError, DataLoader, RandomSampler, TensorDataset};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::env;

const EPOCHS: usize = 200;
const BATCH_SIZE: usize = 8;

fn synthetic(n: usize, seed: u64) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut xs = Vec::with_capacity(n);
    let mut ys = Vec::with_capacity(n);
    for _ in 0..n {
        let a: f64 = rng.gen_range(-1.0..1.0);
        let b: f64 = rng.gen_range(-1.0..1.0);
        ys.push(vec![if a + b > 0.0 { 1.0 } else { 0.0 }]);
        xs.push(vec![a, b]);
    }
    (xs, ys)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (xs, ys) = match args.as_slice() {
        [x_path, y_path] => (load_csv(x_path)?, load_csv(y_path)?),
        [] => {
            info!("No CSV paths given, generating synthetic data");
            synthetic(200, 42)
        }
        _ => return Err("usage: train_csv [xs.csv ys.csv]".into()),
    };
    let features = xs.first().map(Vec::len).ok_or(DataError::Empty)?;
    let outputs = ys.first().map(Vec::len).ok_or(DataError::Empty)?;

    let dataset = TensorDataset::from_rows(&xs, &ys)?;
    let loader = DataLoader::new(dataset, BATCH_SIZE, RandomSampler::seeded(7))?;

    let config = TrainConfig::new(vec![features, 4, outputs])
        .with_activation(Activation::Sigmoid)
        .with_loss(LossKind::LogLoss)
        .with_learning_rate(0.5)
        .with_epochs(EPOCHS)
        .with_log_interval(20)
        .with_seed(1);
    let mut trainer = Trainer::new(config)?;

    let (rows_x, rows_y) = (
        loader.dataset().features().to_vec(),
        loader.dataset().targets().to_vec(),
    );
    for epoch in 1..=EPOCHS {
        let (inputs, targets) = loader.epoch()?;
        let loss = trainer.train_epoch(&inputs, &targets)?;
        if epoch % trainer.config().log_interval == 0 {
            let accuracy = trainer.binary_accuracy(&rows_x, &rows_y, 0.5)?;
            info!(
                "Epoch {}: loss {:.4}, accuracy {:.1}%",
                epoch,
                loss,
                accuracy * 100.0
            );
        }
    }
    Ok(())
}
