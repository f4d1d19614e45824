use serde::{Serialize, Deserialize};

use crate::error::{NetError, Result};

/// Neuron count per layer, input layer first.
///
/// Always at least two layers, none of them empty. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Topology {
    layer_sizes: Vec<usize>,
}

impl Topology {
    pub fn new(layer_sizes: Vec<usize>) -> Result<Topology> {
        if layer_sizes.len() < 2 {
            return Err(NetError::InvalidTopology(format!(
                "need an input and an output layer, got {} layer(s)",
                layer_sizes.len()
            )));
        }
        if let Some(layer) = layer_sizes.iter().position(|&size| size == 0) {
            return Err(NetError::InvalidTopology(format!("layer {layer} has no neurons")));
        }
        Ok(Topology { layer_sizes })
    }

    pub fn layer_sizes(&self) -> &[usize] {
        &self.layer_sizes
    }

    pub fn layer_count(&self) -> usize {
        self.layer_sizes.len()
    }

    /// Neurons in `layer`.
    ///
    /// # Panics
    /// If `layer` is not below [`Topology::layer_count`].
    pub fn size(&self, layer: usize) -> usize {
        self.layer_sizes[layer]
    }

    pub fn input_size(&self) -> usize {
        self.layer_sizes[0]
    }

    pub fn output_size(&self) -> usize {
        self.layer_sizes[self.layer_sizes.len() - 1]
    }

    /// Number of layers between input and output.
    pub fn hidden_layers(&self) -> usize {
        self.layer_sizes.len() - 2
    }
}

impl TryFrom<Vec<usize>> for Topology {
    type Error = NetError;

    fn try_from(layer_sizes: Vec<usize>) -> Result<Topology> {
        Topology::new(layer_sizes)
    }
}

impl From<Topology> for Vec<usize> {
    fn from(topology: Topology) -> Vec<usize> {
        topology.layer_sizes
    }
}

/// Shape plus the single learning rate shared by every weight and bias.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkConfig {
    pub topology: Topology,
    pub learning_rate: f64,
}

impl NetworkConfig {
    pub fn new(layer_sizes: Vec<usize>, learning_rate: f64) -> Result<NetworkConfig> {
        let topology = Topology::new(layer_sizes)?;
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(NetError::InvalidLearningRate(learning_rate));
        }
        Ok(NetworkConfig { topology, learning_rate })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let t = Topology::new(vec![16, 10, 7, 2]).unwrap();
        assert_eq!(t.layer_count(), 4);
        assert_eq!(t.input_size(), 16);
        assert_eq!(t.output_size(), 2);
        assert_eq!(t.size(2), 7);
        assert_eq!(t.hidden_layers(), 2);
    }

    #[test]
    fn rejects_short_or_empty_layers() {
        assert!(matches!(Topology::new(vec![]), Err(NetError::InvalidTopology(_))));
        assert!(matches!(Topology::new(vec![4]), Err(NetError::InvalidTopology(_))));
        assert!(matches!(Topology::new(vec![4, 0, 2]), Err(NetError::InvalidTopology(_))));
    }

    #[test]
    fn rejects_bad_learning_rate() {
        for lr in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                NetworkConfig::new(vec![2, 2], lr),
                Err(NetError::InvalidLearningRate(_))
            ));
        }
        assert!(NetworkConfig::new(vec![2, 2], 0.3).is_ok());
    }

    #[test]
    fn deserialization_validates() {
        let t: Topology = serde_json::from_str("[3, 2]").unwrap();
        assert_eq!(t.layer_sizes(), &[3, 2]);
        assert!(serde_json::from_str::<Topology>("[3, 0]").is_err());
        assert_eq!(serde_json::to_string(&t).unwrap(), "[3,2]");
    }
}
