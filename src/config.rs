use std::path::{Path, PathBuf};

use serde::{Serialize, Deserialize};

use crate::data::csv::LabelMode;
use crate::error::{NetError, Result};
use crate::network::topology::NetworkConfig;
use crate::train::train_config::TrainConfig;

/// Everything the command-line driver needs for one train/test run.
///
/// Stored as JSON so a run can be repeated exactly:
///
/// ```json
/// {
///   "layer_sizes": [16, 10, 7, 2],
///   "learning_rate": 0.3,
///   "epochs": 100,
///   "seed": 7,
///   "train_data": "data/training.csv",
///   "test_data": "data/test.csv",
///   "model_path": "models/ann100.json"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Neurons per layer, input first.
    pub layer_sizes: Vec<usize>,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default = "default_epochs")]
    pub epochs: usize,
    /// Seed for the weight/bias initialiser.
    #[serde(default)]
    pub seed: u64,
    pub train_data: PathBuf,
    pub test_data: PathBuf,
    /// Trailing CSV columns that form the target vector.
    #[serde(default = "default_label_cols")]
    pub label_cols: usize,
    pub model_path: PathBuf,
}

fn default_learning_rate() -> f64 {
    0.3
}

fn default_epochs() -> usize {
    100
}

fn default_label_cols() -> usize {
    2
}

impl RunConfig {
    /// Deserializes a `RunConfig` from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<RunConfig> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| NetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|e| NetError::Config(format!("{}: {e}", path.display())))
    }

    /// Validated network shape and learning rate.
    pub fn network_config(&self) -> Result<NetworkConfig> {
        let config = NetworkConfig::new(self.layer_sizes.clone(), self.learning_rate)?;
        if config.topology.output_size() != self.label_cols {
            return Err(NetError::Config(format!(
                "output layer has {} neurons but label_cols is {}",
                config.topology.output_size(),
                self.label_cols
            )));
        }
        Ok(config)
    }

    pub fn train_config(&self) -> TrainConfig {
        TrainConfig::new(self.epochs)
    }

    pub fn label_mode(&self) -> LabelMode {
        LabelMode::OneHot { n_label_cols: self.label_cols }
    }
}
