use serde::{Serialize, Deserialize};
use std::f64::consts::E;

/// Transfer function applied by every non-input neuron.
///
/// Only the logistic sigmoid is supported. It is still carried as an enum so
/// that saved networks name their activation explicitly and a blob written by
/// some other implementation with a different transfer function is rejected
/// instead of silently misread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    #[default]
    Sigmoid,
}

impl ActivationFunction {
    /// Element-wise activation.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => sigmoid(x),
        }
    }

    /// Derivative expressed in terms of an already computed output `y`.
    ///
    /// `y` must be the cached result of [`ActivationFunction::function`]; the
    /// raw pre-activation sum is never fed back in here.
    pub fn derivative_from_output(&self, y: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => sigmoid_derivative_from_output(y),
        }
    }
}

/// Logistic sigmoid `1 / (1 + e^-x)`.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// `y * (1 - y)` for a sigmoid output `y`.
pub fn sigmoid_derivative_from_output(y: f64) -> f64 {
    y * (1.0 - y)
}
