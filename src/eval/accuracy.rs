use std::fmt;

use serde::{Serialize, Deserialize};

/// Winning class of an output vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prediction {
    Class(usize),
    /// The largest value is shared by more than one index, or there are no
    /// values at all. Never counted as a correct prediction.
    Indeterminate,
}

/// Index of the strictly greatest value.
///
/// A tie for the maximum yields [`Prediction::Indeterminate`] rather than
/// picking either side, and so does a slice with fewer than two values.
/// NaN never compares greater than anything.
pub fn argmax(values: &[f64]) -> Prediction {
    if values.len() < 2 {
        return Prediction::Indeterminate;
    }

    let mut best: Option<usize> = None;
    let mut tied = false;

    for (i, &v) in values.iter().enumerate() {
        match best {
            None => best = Some(i),
            Some(b) if v > values[b] => {
                best = Some(i);
                tied = false;
            }
            Some(b) if v == values[b] => tied = true,
            Some(_) => {}
        }
    }

    match best {
        Some(i) if !tied => Prediction::Class(i),
        _ => Prediction::Indeterminate,
    }
}

/// Count of correctly scored rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Accuracy {
    pub correct: usize,
    pub total: usize,
}

impl Accuracy {
    /// `correct / total` as a percentage; `0.0` when nothing was scored.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }

    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({:.2}%)", self.correct, self.total, self.percent())
    }
}
