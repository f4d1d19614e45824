//! Training and test rows.
//!
//! - [`dataset`] — ordered, dimension-checked (input, target) pairs
//! - [`csv`] — numeric CSV rows into a [`Dataset`]

pub mod csv;
pub mod dataset;

pub use csv::{parse_csv, read_csv, LabelMode};
pub use dataset::{Dataset, Sample};
