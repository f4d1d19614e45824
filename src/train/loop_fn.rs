use std::time::Instant;

use tracing::info;

use crate::data::dataset::Dataset;
use crate::error::Result;
use crate::network::neural_network::NeuralNetwork;
use crate::train::epoch_stats::{EpochStats, TrainReport};
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_sample;

/// Trains `network` on `dataset` for exactly `config.epochs` epochs.
///
/// Each epoch walks the rows in stored order and applies one
/// forward/backward/update step per row (online SGD, no shuffling), so a
/// fixed dataset and fixed initial weights always give the same result.
/// After every epoch the dataset-wide mean squared error is measured for
/// reporting only.
///
/// # Errors
/// `DimensionMismatch` if the dataset was built for a different input or
/// output width than the network; nothing is trained in that case.
pub fn train<N: NeuralNetwork + ?Sized>(
    network: &mut N,
    dataset: &Dataset,
    config: &TrainConfig,
) -> Result<TrainReport> {
    dataset.check_fits(network.topology())?;

    let mut report = TrainReport { epochs: Vec::with_capacity(config.epochs) };

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        for sample in dataset {
            train_sample(network, sample)?;
        }

        let mean_squared_error = network.mean_squared_error_dataset(dataset)?;
        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        info!(epoch, total = config.epochs, mse = mean_squared_error, "epoch complete");

        report.epochs.push(EpochStats {
            epoch,
            total_epochs: config.epochs,
            mean_squared_error,
            elapsed_ms,
        });
    }

    Ok(report)
}
