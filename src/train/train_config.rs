use serde::{Serialize, Deserialize};

/// Configuration for a `train` run.
///
/// Training always runs for exactly `epochs` full passes; there is no early
/// stopping and no convergence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub epochs: usize,
}

impl TrainConfig {
    pub fn new(epochs: usize) -> Self {
        TrainConfig { epochs }
    }
}
