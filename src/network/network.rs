use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::activation::activation::ActivationFunction;
use crate::error::{NetError, Result};
use crate::math::matrix::Matrix;
use crate::network::neural_network::NeuralNetwork;
use crate::network::state::NetworkState;
use crate::network::topology::{NetworkConfig, Topology};

/// Fully connected sigmoid network trained by online backpropagation.
///
/// `weights[l - 1]` and `biases[l - 1]` belong to layer `l`; the input layer
/// has neither. The forward/backward cache lives in `state` and is only ever
/// touched through `&mut self`, so one instance cannot be shared between two
/// training or evaluation jobs at the same time.
#[derive(Debug, Clone)]
pub struct Network {
    config: NetworkConfig,
    activation: ActivationFunction,
    weights: Vec<Matrix>,
    biases: Vec<Vec<f64>>,
    state: NetworkState,
}

impl Network {
    /// Builds a network whose weights and biases are drawn from `[0, 1)`.
    pub fn new<R: Rng + ?Sized>(config: NetworkConfig, rng: &mut R) -> Network {
        let sizes = config.topology.layer_sizes().to_vec();
        let mut weights = Vec::with_capacity(sizes.len() - 1);
        let mut biases = Vec::with_capacity(sizes.len() - 1);

        for pair in sizes.windows(2) {
            let (fan_in, size) = (pair[0], pair[1]);
            weights.push(Matrix::random(size, fan_in, rng));
            biases.push((0..size).map(|_| rng.gen::<f64>()).collect());
        }

        let state = NetworkState::new(&config.topology);
        Network {
            config,
            activation: ActivationFunction::Sigmoid,
            weights,
            biases,
            state,
        }
    }

    /// Same as [`Network::new`] with a `ChaCha8Rng` seeded from `seed`, so the
    /// initial weights are identical on every platform.
    pub fn seeded(config: NetworkConfig, seed: u64) -> Network {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Network::new(config, &mut rng)
    }

    /// Reassembles a network from stored parameters. Shapes must already have
    /// been checked against `config.topology`.
    pub(crate) fn from_parts(
        config: NetworkConfig,
        activation: ActivationFunction,
        weights: Vec<Matrix>,
        biases: Vec<Vec<f64>>,
    ) -> Network {
        let state = NetworkState::new(&config.topology);
        Network { config, activation, weights, biases, state }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn learning_rate(&self) -> f64 {
        self.config.learning_rate
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activation
    }

    /// Weight matrix feeding layer `layer`.
    ///
    /// # Panics
    /// If `layer` is 0 (the input layer has no weights) or not below
    /// `topology().layer_count()`.
    pub fn weights(&self, layer: usize) -> &Matrix {
        &self.weights[layer - 1]
    }

    /// Bias vector of layer `layer`.
    ///
    /// # Panics
    /// If `layer` is 0 or not below `topology().layer_count()`.
    pub fn biases(&self, layer: usize) -> &[f64] {
        &self.biases[layer - 1]
    }

    /// Error terms left by the last `backward` call. Layer 0 is always zero.
    ///
    /// # Panics
    /// If `layer` is not below `topology().layer_count()`.
    pub fn errors(&self, layer: usize) -> &[f64] {
        &self.state.errors[layer]
    }

    /// Activations left by the last `forward` call.
    ///
    /// # Panics
    /// If `layer` is not below `topology().layer_count()`.
    pub fn activations(&self, layer: usize) -> &[f64] {
        &self.state.activations[layer]
    }

    fn check_target(&self, target: &[f64]) -> Result<()> {
        let expected = self.config.topology.output_size();
        if target.len() != expected {
            return Err(NetError::mismatch("target", expected, target.len()));
        }
        Ok(())
    }
}

impl NeuralNetwork for Network {
    fn topology(&self) -> &Topology {
        &self.config.topology
    }

    fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        let expected = self.config.topology.input_size();
        if input.len() != expected {
            return Err(NetError::mismatch("input", expected, input.len()));
        }

        let activation = self.activation;
        self.state.activations[0].copy_from_slice(input);

        for layer in 1..self.config.topology.layer_count() {
            let (done, rest) = self.state.activations.split_at_mut(layer);
            let previous = &done[layer - 1];
            let current = &mut rest[0];
            let weights = &self.weights[layer - 1];
            let biases = &self.biases[layer - 1];
            let derivatives = &mut self.state.derivatives[layer];

            for neuron in 0..current.len() {
                let sum = previous
                    .iter()
                    .zip(weights.row(neuron))
                    .map(|(a, w)| a * w)
                    .sum::<f64>()
                    + biases[neuron];
                let y = activation.function(sum);
                current[neuron] = y;
                derivatives[neuron] = activation.derivative_from_output(y);
            }
        }

        Ok(self.state.output().to_vec())
    }

    fn backward(&mut self, target: &[f64]) -> Result<()> {
        self.check_target(target)?;

        let last = self.config.topology.layer_count() - 1;
        for (neuron, &t) in target.iter().enumerate() {
            self.state.errors[last][neuron] = (self.state.activations[last][neuron] - t)
                * self.state.derivatives[last][neuron];
        }

        for layer in (1..last).rev() {
            let (lower, upper) = self.state.errors.split_at_mut(layer + 1);
            let current = &mut lower[layer];
            let next_errors = &upper[0];
            let next_weights = &self.weights[layer];
            let derivatives = &self.state.derivatives[layer];

            for neuron in 0..current.len() {
                let propagated = next_errors
                    .iter()
                    .enumerate()
                    .map(|(m, e)| next_weights[(m, neuron)] * e)
                    .sum::<f64>();
                current[neuron] = derivatives[neuron] * propagated;
            }
        }

        Ok(())
    }

    fn update_weights(&mut self) {
        let lr = self.config.learning_rate;

        for layer in 1..self.config.topology.layer_count() {
            let previous = &self.state.activations[layer - 1];
            let errors = &self.state.errors[layer];
            let weights = &mut self.weights[layer - 1];
            let biases = &mut self.biases[layer - 1];

            for (neuron, &error) in errors.iter().enumerate() {
                for (k, &a) in previous.iter().enumerate() {
                    weights[(neuron, k)] -= lr * a * error;
                }
                biases[neuron] -= lr * error;
            }
        }
    }

    fn mean_squared_error(&mut self, input: &[f64], target: &[f64]) -> Result<f64> {
        self.check_target(target)?;
        let output = self.forward(input)?;
        let squared: f64 = target
            .iter()
            .zip(&output)
            .map(|(t, o)| (t - o).powi(2))
            .sum();
        Ok(squared / (2.0 * output.len() as f64))
    }
}
