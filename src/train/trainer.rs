use crate::{
    data::dataset::Sample,
    error::Result,
    network::neural_network::NeuralNetwork,
};

/// One online gradient-descent step on a single row:
/// forward, then backward, then update.
pub fn train_sample<N: NeuralNetwork + ?Sized>(network: &mut N, sample: &Sample) -> Result<()> {
    network.forward(&sample.input)?;
    network.backward(&sample.target)?;
    network.update_weights();
    Ok(())
}
