//! Versioned on-disk format for trained networks.
//!
//! A saved network is a JSON document holding the layer sizes, the learning
//! rate, the activation name and flat row-major weight and bias arrays, one
//! per non-input layer. Nothing language- or runtime-specific is stored, so
//! any implementation that follows the layout below can read it.

use std::fs;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use serde::{Serialize, Deserialize};
use tracing::info;

use crate::activation::activation::ActivationFunction;
use crate::error::{NetError, Result};
use crate::math::matrix::Matrix;
use crate::network::network::Network;
use crate::network::neural_network::NeuralNetwork;
use crate::network::topology::NetworkConfig;

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedNetwork {
    pub format_version: u32,
    pub activation: ActivationFunction,
    pub layer_sizes: Vec<usize>,
    pub learning_rate: f64,
    /// `weights[l - 1]` is layer `l`'s `[size(l) × size(l - 1)]` matrix, row-major.
    pub weights: Vec<Vec<f64>>,
    pub biases: Vec<Vec<f64>>,
}

impl From<&Network> for SavedNetwork {
    fn from(network: &Network) -> SavedNetwork {
        let layers = network.topology().layer_count();
        SavedNetwork {
            format_version: FORMAT_VERSION,
            activation: network.activation(),
            layer_sizes: network.topology().layer_sizes().to_vec(),
            learning_rate: network.learning_rate(),
            weights: (1..layers).map(|l| network.weights(l).to_flat()).collect(),
            biases: (1..layers).map(|l| network.biases(l).to_vec()).collect(),
        }
    }
}

impl SavedNetwork {
    /// Validates the document and rebuilds the network it describes.
    pub fn into_network(self) -> std::result::Result<Network, String> {
        if self.format_version != FORMAT_VERSION {
            return Err(format!(
                "unsupported format version {} (expected {FORMAT_VERSION})",
                self.format_version
            ));
        }
        let config = NetworkConfig::new(self.layer_sizes, self.learning_rate)
            .map_err(|e| e.to_string())?;
        let sizes = config.topology.layer_sizes();

        if self.weights.len() != sizes.len() - 1 || self.biases.len() != sizes.len() - 1 {
            return Err(format!(
                "expected {} weight and bias layers, found {} and {}",
                sizes.len() - 1,
                self.weights.len(),
                self.biases.len()
            ));
        }

        let mut weights = Vec::with_capacity(self.weights.len());
        for (l, (flat, bias)) in self.weights.iter().zip(&self.biases).enumerate() {
            let (fan_in, size) = (sizes[l], sizes[l + 1]);
            let matrix = Matrix::from_flat(size, fan_in, flat).ok_or_else(|| {
                format!(
                    "layer {} has {} weights, expected {}",
                    l + 1,
                    flat.len(),
                    size * fan_in
                )
            })?;
            if bias.len() != size {
                return Err(format!(
                    "layer {} has {} biases, expected {size}",
                    l + 1,
                    bias.len()
                ));
            }
            weights.push(matrix);
        }

        Ok(Network::from_parts(config, self.activation, weights, self.biases))
    }

    /// JSON has no NaN or infinity, so such a value would be written as
    /// `null` and the document could never be loaded again.
    fn check_finite(&self) -> Result<()> {
        if !self.learning_rate.is_finite() {
            return Err(NetError::NonFiniteParameter("learning rate".to_string()));
        }
        for (l, (weights, biases)) in self.weights.iter().zip(&self.biases).enumerate() {
            if let Some(i) = weights.iter().position(|w| !w.is_finite()) {
                return Err(NetError::NonFiniteParameter(format!("layer {} weight {i}", l + 1)));
            }
            if let Some(i) = biases.iter().position(|b| !b.is_finite()) {
                return Err(NetError::NonFiniteParameter(format!("layer {} bias {i}", l + 1)));
            }
        }
        Ok(())
    }
}

impl Network {
    /// Writes the full network (topology, learning rate, weights, biases) as
    /// pretty-printed JSON, creating parent directories as needed.
    ///
    /// A network holding a NaN or infinite parameter is refused with
    /// [`NetError::NonFiniteParameter`] before anything is written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let saved = SavedNetwork::from(self);
        saved.check_finite()?;

        let io_err = |source: std::io::Error| NetError::Io { path: path.to_path_buf(), source };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let file = fs::File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &saved)
            .map_err(|e| io_err(std::io::Error::new(ErrorKind::Other, e)))?;
        writer.flush().map_err(io_err)?;

        info!(path = %path.display(), layers = ?self.topology().layer_sizes(), "network saved");
        Ok(())
    }

    /// Reads a network written by [`Network::save`].
    ///
    /// A missing file is [`NetError::PersistenceNotFound`]; anything that
    /// cannot be read or does not describe a consistent network is
    /// [`NetError::PersistenceCorrupt`].
    pub fn load(path: impl AsRef<Path>) -> Result<Network> {
        let path = path.as_ref();
        let corrupt = |reason: String| NetError::PersistenceCorrupt {
            path: path.to_path_buf(),
            reason,
        };

        let file = fs::File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => NetError::PersistenceNotFound { path: path.to_path_buf() },
            _ => corrupt(e.to_string()),
        })?;
        let saved: SavedNetwork = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| corrupt(e.to_string()))?;
        let network = saved.into_network().map_err(corrupt)?;

        info!(path = %path.display(), layers = ?network.topology().layer_sizes(), "network loaded");
        Ok(network)
    }
}
