use matchup_nn::{test_accuracy, train, Dataset, Network, NetworkConfig, NeuralNetwork, TrainConfig};

fn main() -> matchup_nn::Result<()> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::WARN).init();

    let config = NetworkConfig::new(vec![2, 4, 2], 0.5)?;
    let mut network = Network::seeded(config, 1);

    // One-hot targets: [1, 0] = false, [0, 1] = true.
    let dataset = Dataset::from_pairs(
        network.topology(),
        vec![
            (vec![1.0, 0.0], vec![0.0, 1.0]),
            (vec![1.0, 1.0], vec![1.0, 0.0]),
            (vec![0.0, 1.0], vec![0.0, 1.0]),
            (vec![0.0, 0.0], vec![1.0, 0.0]),
        ],
    )?;

    let report = train(&mut network, &dataset, &TrainConfig::new(10000))?;
    for stats in report.epochs.iter().filter(|s| s.epoch % 1000 == 0) {
        println!("Epoch {}: mse = {:.6}", stats.epoch, stats.mean_squared_error);
    }

    for sample in &dataset {
        let output = network.forward(&sample.input)?;
        println!("Input: {:?} -> Output: [{:.4}, {:.4}]", sample.input, output[0], output[1]);
    }

    println!("accuracy: {}", test_accuracy(&mut network, &dataset)?);
    Ok(())
}
