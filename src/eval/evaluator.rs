use tracing::{debug, info};

use crate::data::dataset::Dataset;
use crate::error::{NetError, Result};
use crate::eval::accuracy::{argmax, Accuracy, Prediction};
use crate::network::neural_network::NeuralNetwork;

/// Largest tolerance [`test_logical`] accepts.
pub const MAX_LOGICAL_TOLERANCE: f64 = 0.2;

/// Scores class predictions with forward passes only.
///
/// A row counts as correct when the network's winning output index equals
/// the target's. An indeterminate prediction (tied outputs) is always wrong.
///
/// # Errors
/// `TooFewOutputs` for a single-output network; use [`test_logical`] there.
pub fn test_accuracy<N: NeuralNetwork + ?Sized>(network: &mut N, dataset: &Dataset) -> Result<Accuracy> {
    let outputs = network.topology().output_size();
    if outputs < 2 {
        return Err(NetError::TooFewOutputs(outputs));
    }
    dataset.check_fits(network.topology())?;

    let mut acc = Accuracy { correct: 0, total: dataset.len() };
    for (row, sample) in dataset.iter().enumerate() {
        let output = network.forward(&sample.input)?;
        let predicted = argmax(&output);
        let expected = argmax(&sample.target);

        if predicted != Prediction::Indeterminate && predicted == expected {
            acc.correct += 1;
        } else {
            debug!(row, expected = ?sample.target, actual = ?output, "misclassified");
        }
    }

    info!(correct = acc.correct, total = acc.total, "accuracy = {:.2}%", acc.percent());
    Ok(acc)
}

/// Scores a single-output network against scalar targets: a row is correct
/// when `|output[0] - target[0]| < tolerance`.
///
/// Meant for logic-gate sanity checks; `tolerance` must lie in
/// `[0, MAX_LOGICAL_TOLERANCE]`.
pub fn test_logical<N: NeuralNetwork + ?Sized>(
    network: &mut N,
    dataset: &Dataset,
    tolerance: f64,
) -> Result<Accuracy> {
    if !(0.0..=MAX_LOGICAL_TOLERANCE).contains(&tolerance) {
        return Err(NetError::InvalidTolerance(tolerance));
    }
    dataset.check_fits(network.topology())?;

    let mut acc = Accuracy { correct: 0, total: dataset.len() };
    for sample in dataset {
        let output = network.forward(&sample.input)?;
        if (output[0] - sample.target[0]).abs() < tolerance {
            acc.correct += 1;
        }
    }

    info!(correct = acc.correct, total = acc.total, tolerance, "logical accuracy = {:.2}%", acc.percent());
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::ActivationFunction;
    use crate::math::Matrix;
    use crate::network::{Network, NetworkConfig};

    /// Two outputs that always agree exactly: both weights and biases zero.
    fn undecided_network() -> Network {
        Network::from_parts(
            NetworkConfig::new(vec![2, 2], 0.3).unwrap(),
            ActivationFunction::Sigmoid,
            vec![Matrix::zeros(2, 2)],
            vec![vec![0.0, 0.0]],
        )
    }

    /// Output 0 follows the first input, output 1 the second.
    fn identity_like_network() -> Network {
        Network::from_parts(
            NetworkConfig::new(vec![2, 2], 0.3).unwrap(),
            ActivationFunction::Sigmoid,
            vec![Matrix::from_flat(2, 2, &[10.0, 0.0, 0.0, 10.0]).unwrap()],
            vec![vec![0.0, 0.0]],
        )
    }

    fn rows(net: &Network) -> Dataset {
        Dataset::from_pairs(
            net.topology(),
            vec![
                (vec![1.0, 0.0], vec![1.0, 0.0]),
                (vec![0.0, 1.0], vec![0.0, 1.0]),
                (vec![1.0, 0.0], vec![0.0, 1.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn counts_matching_argmax() {
        let mut net = identity_like_network();
        let data = rows(&net);
        let acc = test_accuracy(&mut net, &data).unwrap();
        assert_eq!(acc, Accuracy { correct: 2, total: 3 });
        assert_eq!(acc.to_string(), "2/3 (66.67%)");
    }

    #[test]
    fn ties_are_never_correct() {
        let mut net = undecided_network();
        let data = rows(&net);
        let acc = test_accuracy(&mut net, &data).unwrap();
        assert_eq!(acc.correct, 0);
    }

    #[test]
    fn empty_dataset_scores_zero() {
        let mut net = identity_like_network();
        let data = Dataset::for_topology(net.topology());
        let acc = test_accuracy(&mut net, &data).unwrap();
        assert_eq!(acc.total, 0);
        assert_eq!(acc.percent(), 0.0);
    }

    #[test]
    fn evaluation_does_not_touch_parameters() {
        let mut net = Network::seeded(NetworkConfig::new(vec![2, 3, 2], 0.3).unwrap(), 6);
        let before = (net.weights(1).clone(), net.biases(2).to_vec());
        let data = rows(&net);
        test_accuracy(&mut net, &data).unwrap();
        assert_eq!((net.weights(1).clone(), net.biases(2).to_vec()), before);
    }

    #[test]
    fn single_output_network_is_rejected() {
        // Untrained outputs all sit near 0.7, far from most AND targets.
        let mut net = Network::seeded(NetworkConfig::new(vec![2, 1], 0.3).unwrap(), 1);
        let data = Dataset::from_pairs(
            net.topology(),
            vec![
                (vec![1.0, 1.0], vec![1.0]),
                (vec![1.0, 0.0], vec![0.0]),
                (vec![0.0, 1.0], vec![0.0]),
                (vec![0.0, 0.0], vec![0.0]),
            ],
        )
        .unwrap();
        assert!(matches!(
            test_accuracy(&mut net, &data),
            Err(NetError::TooFewOutputs(1))
        ));
    }

    #[test]
    fn logical_tolerance_bounds() {
        let mut net = Network::seeded(NetworkConfig::new(vec![2, 1], 0.3).unwrap(), 6);
        let data = Dataset::for_topology(net.topology());
        for bad in [-0.01, 0.25, f64::NAN] {
            assert!(matches!(
                test_logical(&mut net, &data, bad),
                Err(NetError::InvalidTolerance(_))
            ));
        }
        assert!(test_logical(&mut net, &data, 0.1).is_ok());
    }

    #[test]
    fn logical_scores_within_tolerance() {
        // sigmoid(0) = 0.5 for every input.
        let mut net = Network::from_parts(
            NetworkConfig::new(vec![2, 1], 0.3).unwrap(),
            ActivationFunction::Sigmoid,
            vec![Matrix::zeros(1, 2)],
            vec![vec![0.0]],
        );
        let data = Dataset::from_pairs(
            net.topology(),
            vec![(vec![0.0, 0.0], vec![0.45]), (vec![1.0, 1.0], vec![1.0])],
        )
        .unwrap();
        let acc = test_logical(&mut net, &data, 0.1).unwrap();
        assert_eq!(acc, Accuracy { correct: 1, total: 2 });
    }
}
