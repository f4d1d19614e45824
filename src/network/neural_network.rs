use crate::data::dataset::Dataset;
use crate::error::Result;
use crate::network::topology::Topology;

/// What the trainer and evaluator need from a network.
///
/// Calls on one instance are strictly sequential: `backward` consumes the
/// activations cached by the preceding `forward`, and `update_weights`
/// consumes the error terms written by the preceding `backward`.
pub trait NeuralNetwork {
    fn topology(&self) -> &Topology;

    /// Runs the input through every layer and returns the output activations.
    fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>>;

    /// Computes per-neuron error terms from the output layer back to layer 1.
    fn backward(&mut self, target: &[f64]) -> Result<()>;

    /// Applies one gradient-descent step using the cached errors.
    fn update_weights(&mut self);

    /// Half mean squared error of one row: `Σ (t - o)² / (2 · outputs)`.
    fn mean_squared_error(&mut self, input: &[f64], target: &[f64]) -> Result<f64>;

    /// Average of [`NeuralNetwork::mean_squared_error`] over every row; `0.0`
    /// for an empty dataset.
    fn mean_squared_error_dataset(&mut self, dataset: &Dataset) -> Result<f64> {
        if dataset.is_empty() {
            return Ok(0.0);
        }
        let mut total = 0.0;
        for sample in dataset.iter() {
            total += self.mean_squared_error(&sample.input, &sample.target)?;
        }
        Ok(total / dataset.len() as f64)
    }
}
