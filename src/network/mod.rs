pub mod network;
pub mod neural_network;
pub mod persist;
pub mod state;
pub mod topology;

pub use network::Network;
pub use neural_network::NeuralNetwork;
pub use persist::{SavedNetwork, FORMAT_VERSION};
pub use state::NetworkState;
pub use topology::{NetworkConfig, Topology};
