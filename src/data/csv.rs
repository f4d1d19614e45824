//! Reader for already-cleaned numeric rows.
//!
//! Supported format:
//! - UTF-8, comma-separated
//! - Optional header row (a first row is a header if it contains any
//!   non-numeric, non-empty cell)
//! - Double-quoted fields with embedded commas are handled
//! - Blank lines are skipped
//!
//! Feature engineering happens upstream; every cell that is not part of a
//! header must already parse as `f64`.
use std::path::Path;

use tracing::debug;

use crate::data::dataset::Dataset;
use crate::error::{NetError, Result};
use crate::network::topology::Topology;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMode {
    /// Last column is an integer class index; one-hot encode to `n_classes`.
    ClassIndex { n_classes: usize },
    /// Last `n_label_cols` columns are the target vector.
    OneHot { n_label_cols: usize },
}

impl LabelMode {
    /// Width of the target vector this mode produces.
    pub fn target_width(&self) -> usize {
        match *self {
            LabelMode::ClassIndex { n_classes } => n_classes,
            LabelMode::OneHot { n_label_cols } => n_label_cols,
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parses CSV text into a dataset sized for `topology`.
///
/// A label mode whose target width differs from the output layer is
/// rejected before any row is read. Every parsed row goes through
/// [`Dataset::push`], so a row whose feature width does not match the
/// topology fails with `DimensionMismatch`.
pub fn parse_csv(text: &str, topology: &Topology, label_mode: LabelMode) -> Result<Dataset> {
    let width = label_mode.target_width();
    if width != topology.output_size() {
        return Err(NetError::mismatch("target", topology.output_size(), width));
    }

    let mut dataset = Dataset::for_topology(topology);
    let mut lines = text.lines().enumerate().peekable();

    if let Some((_, first)) = lines.peek() {
        if is_header(first) {
            lines.next();
        }
    }

    for (idx, line) in lines {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let cells = parse_csv_row(line);
        let (input, target) = match label_mode {
            LabelMode::ClassIndex { n_classes } => {
                let Some((label_cell, feature_cells)) = cells.split_last() else {
                    continue;
                };
                if feature_cells.is_empty() {
                    return Err(csv_err(line_no, "expected features followed by a class index"));
                }
                let class_idx: usize = label_cell.trim().parse().map_err(|_| {
                    csv_err(line_no, format!("class index '{label_cell}' is not a non-negative integer"))
                })?;
                if class_idx >= n_classes {
                    return Err(csv_err(
                        line_no,
                        format!("class index {class_idx} >= n_classes {n_classes}"),
                    ));
                }
                let mut one_hot = vec![0.0; n_classes];
                one_hot[class_idx] = 1.0;
                (parse_floats(feature_cells, line_no)?, one_hot)
            }
            LabelMode::OneHot { n_label_cols } => {
                if cells.len() < n_label_cols + 1 {
                    return Err(csv_err(
                        line_no,
                        format!("expected at least {} columns, got {}", n_label_cols + 1, cells.len()),
                    ));
                }
                let split = cells.len() - n_label_cols;
                (
                    parse_floats(&cells[..split], line_no)?,
                    parse_floats(&cells[split..], line_no)?,
                )
            }
        };

        dataset.push(input, target)?;
    }

    debug!(rows = dataset.len(), "parsed CSV dataset");
    Ok(dataset)
}

/// Reads and parses a CSV file.
pub fn read_csv(path: impl AsRef<Path>, topology: &Topology, label_mode: LabelMode) -> Result<Dataset> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| NetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_csv(&text, topology, label_mode)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn csv_err(line: usize, reason: impl Into<String>) -> NetError {
    NetError::Csv { line, reason: reason.into() }
}

/// Returns `true` if the row looks like a header (any cell non-numeric).
fn is_header(line: &str) -> bool {
    parse_csv_row(line).iter().any(|c| {
        let t = c.trim();
        !t.is_empty() && t.parse::<f64>().is_err()
    })
}

/// Parses a single CSV row, handling double-quoted fields.
fn parse_csv_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                // Escaped quote inside quoted field.
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);
    fields
}

fn parse_floats(cells: &[String], line_no: usize) -> Result<Vec<f64>> {
    cells
        .iter()
        .map(|c| {
            c.trim()
                .parse::<f64>()
                .map_err(|_| csv_err(line_no, format!("'{c}' is not a valid number")))
        })
        .collect()
}
