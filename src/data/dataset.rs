use crate::error::{NetError, Result};
use crate::network::topology::Topology;

/// One training or test row.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

/// Ordered (input, target) pairs, every one sized for the same topology.
///
/// Rows are only ever appended; once built, trainers and evaluators borrow
/// the dataset immutably and walk it in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    input_size: usize,
    output_size: usize,
    samples: Vec<Sample>,
}

impl Dataset {
    pub fn new(input_size: usize, output_size: usize) -> Dataset {
        Dataset { input_size, output_size, samples: Vec::new() }
    }

    pub fn for_topology(topology: &Topology) -> Dataset {
        Dataset::new(topology.input_size(), topology.output_size())
    }

    /// Builds a dataset from pairs, stopping at the first mis-sized one.
    pub fn from_pairs<I>(topology: &Topology, pairs: I) -> Result<Dataset>
    where
        I: IntoIterator<Item = (Vec<f64>, Vec<f64>)>,
    {
        let mut dataset = Dataset::for_topology(topology);
        for (input, target) in pairs {
            dataset.push(input, target)?;
        }
        Ok(dataset)
    }

    /// Appends a row. Fails with `DimensionMismatch` if either vector has the
    /// wrong length; the dataset is left unchanged in that case.
    pub fn push(&mut self, input: Vec<f64>, target: Vec<f64>) -> Result<()> {
        if input.len() != self.input_size {
            return Err(NetError::mismatch("input", self.input_size, input.len()));
        }
        if target.len() != self.output_size {
            return Err(NetError::mismatch("target", self.output_size, target.len()));
        }
        self.samples.push(Sample { input, target });
        Ok(())
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Fails unless every row fits `topology`.
    pub fn check_fits(&self, topology: &Topology) -> Result<()> {
        if self.input_size != topology.input_size() {
            return Err(NetError::mismatch("input", topology.input_size(), self.input_size));
        }
        if self.output_size != topology.output_size() {
            return Err(NetError::mismatch("target", topology.output_size(), self.output_size));
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
