pub mod error;
pub mod math;
pub mod activation;
pub mod network;
pub mod data;
pub mod train;
pub mod eval;
pub mod config;

// Convenience re-exports
pub use error::{NetError, Result};
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use network::{Network, NetworkConfig, NeuralNetwork, Topology};
pub use data::{Dataset, LabelMode, Sample};
pub use train::{train, TrainConfig, TrainReport};
pub use eval::{argmax, test_accuracy, test_logical, Accuracy, Prediction};
pub use config::RunConfig;
