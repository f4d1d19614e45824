//! Save/load round trips of trained networks.

use std::fs;
use std::path::PathBuf;

use matchup_nn::{
    test_accuracy, train, Dataset, NetError, Network, NetworkConfig, NeuralNetwork, TrainConfig,
};

fn scratch_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("matchup_nn_it_{}_{name}", std::process::id()))
}

/// Deterministic pseudo-matches: the "better ranked" side wins when the sum of
/// its features is larger.
fn matches(network: &Network, rows: usize) -> Dataset {
    let width = network.topology().input_size();
    let pairs = (0..rows).map(|i| {
        let input: Vec<f64> = (0..width)
            .map(|j| ((i * 7 + j * 13) % 17) as f64 / 16.0)
            .collect();
        let half = width / 2;
        let better: f64 = input[..half].iter().sum();
        let worse: f64 = input[half..].iter().sum();
        let target = if better >= worse { vec![1.0, 0.0] } else { vec![0.0, 1.0] };
        (input, target)
    });
    Dataset::from_pairs(network.topology(), pairs).unwrap()
}

#[test]
fn loaded_network_produces_bit_identical_outputs() {
    let config = NetworkConfig::new(vec![6, 5, 3, 2], 0.3).unwrap();
    let mut network = Network::seeded(config, 21);
    let data = matches(&network, 40);
    train(&mut network, &data, &TrainConfig::new(25)).unwrap();

    let dir = scratch_dir("roundtrip");
    let path = dir.join("nested").join("ann25.json");
    network.save(&path).unwrap();
    let mut loaded = Network::load(&path).unwrap();

    assert_eq!(loaded.topology(), network.topology());
    assert_eq!(loaded.learning_rate(), network.learning_rate());

    let probes = [
        vec![0.0; 6],
        vec![1.0; 6],
        vec![0.1, 0.9, 0.25, 0.75, 0.33, 0.66],
        vec![-3.5, 2.0, 1e-9, 123.456, -0.0, 0.5],
    ];
    for probe in &probes {
        let expected = network.forward(probe).unwrap();
        let actual = loaded.forward(probe).unwrap();
        let expected_bits: Vec<u64> = expected.iter().map(|v| v.to_bits()).collect();
        let actual_bits: Vec<u64> = actual.iter().map(|v| v.to_bits()).collect();
        assert_eq!(actual_bits, expected_bits, "probe {probe:?}");
    }

    assert_eq!(
        test_accuracy(&mut loaded, &data).unwrap(),
        test_accuracy(&mut network, &data).unwrap()
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn loaded_network_keeps_training_identically() {
    let config = NetworkConfig::new(vec![4, 3, 2], 0.3).unwrap();
    let mut network = Network::seeded(config, 5);
    let data = matches(&network, 12);
    train(&mut network, &data, &TrainConfig::new(5)).unwrap();

    let dir = scratch_dir("resume");
    let path = dir.join("net.json");
    network.save(&path).unwrap();
    let mut loaded = Network::load(&path).unwrap();

    let a = train(&mut network, &data, &TrainConfig::new(5)).unwrap();
    let b = train(&mut loaded, &data, &TrainConfig::new(5)).unwrap();
    assert_eq!(a.final_error(), b.final_error());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_and_corrupt_blobs_are_reported_not_fatal() {
    let dir = scratch_dir("failures");
    fs::create_dir_all(&dir).unwrap();

    let missing = Network::load(dir.join("absent.json"));
    assert!(matches!(missing, Err(NetError::PersistenceNotFound { .. })));

    let network = Network::seeded(NetworkConfig::new(vec![3, 2], 0.3).unwrap(), 1);
    let good = dir.join("good.json");
    network.save(&good).unwrap();
    let text = fs::read_to_string(&good).unwrap();

    let truncated = dir.join("truncated.json");
    fs::write(&truncated, &text[..text.len() / 2]).unwrap();
    assert!(matches!(
        Network::load(&truncated),
        Err(NetError::PersistenceCorrupt { .. })
    ));

    let relabelled = dir.join("relabelled.json");
    fs::write(&relabelled, text.replace("\"sigmoid\"", "\"relu\"")).unwrap();
    assert!(matches!(
        Network::load(&relabelled),
        Err(NetError::PersistenceCorrupt { .. })
    ));

    let _ = fs::remove_dir_all(&dir);
}
