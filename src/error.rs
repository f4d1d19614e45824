use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by network construction, training, evaluation and persistence.
#[derive(Debug, Error)]
pub enum NetError {
    /// Empty or single-layer topology, or a layer with zero neurons.
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    #[error("invalid learning rate {0}: must be finite and greater than zero")]
    InvalidLearningRate(f64),

    /// An input or target vector does not fit the configured topology.
    #[error("{what} length {actual} does not match configured size {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("no saved network at {}", .path.display())]
    PersistenceNotFound { path: PathBuf },

    #[error("saved network at {} is corrupt: {reason}", .path.display())]
    PersistenceCorrupt { path: PathBuf, reason: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid tolerance {0}: must lie between 0 and 0.2")]
    InvalidTolerance(f64),

    /// Class scoring compares outputs against each other; one output is not enough.
    #[error("accuracy needs at least 2 outputs, network has {0}")]
    TooFewOutputs(usize),

    /// A weight, bias or the learning rate is NaN or infinite and cannot be saved.
    #[error("cannot save network: {0} is not finite")]
    NonFiniteParameter(String),

    #[error("CSV line {line}: {reason}")]
    Csv { line: usize, reason: String },

    #[error("invalid run configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NetError>;

impl NetError {
    pub(crate) fn mismatch(what: &'static str, expected: usize, actual: usize) -> NetError {
        NetError::DimensionMismatch { what, expected, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_names_the_vector() {
        let err = NetError::mismatch("input", 16, 3);
        assert_eq!(err.to_string(), "input length 3 does not match configured size 16");
    }

    #[test]
    fn persistence_messages_include_path() {
        let err = NetError::PersistenceNotFound { path: PathBuf::from("models/a.json") };
        assert!(err.to_string().contains("models/a.json"));
    }
}
