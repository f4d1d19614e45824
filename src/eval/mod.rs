pub mod accuracy;
pub mod evaluator;

pub use accuracy::{argmax, Accuracy, Prediction};
pub use evaluator::{test_accuracy, test_logical, MAX_LOGICAL_TOLERANCE};
