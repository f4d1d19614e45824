use serde::{Serialize, Deserialize};

/// Per-epoch training statistics produced by `train`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Dataset-wide mean squared error measured after the epoch's updates.
    pub mean_squared_error: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}

/// Everything a finished `train` run reports, one entry per epoch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    pub epochs: Vec<EpochStats>,
}

impl TrainReport {
    /// Error after the last epoch, or `None` if no epoch ran.
    pub fn final_error(&self) -> Option<f64> {
        self.epochs.last().map(|s| s.mean_squared_error)
    }
}
