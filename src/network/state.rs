use crate::network::topology::Topology;

/// Per-pass scratch values shared by `forward`, `backward` and `update_weights`.
///
/// `forward` fills `activations` and `derivatives`, `backward` reads them and
/// fills `errors`, `update_weights` reads `activations` and `errors`. Index 0
/// of `derivatives` and `errors` belongs to the input layer and stays zero.
/// Every vector is sized once from the topology and never resized.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkState {
    pub activations: Vec<Vec<f64>>,
    pub derivatives: Vec<Vec<f64>>,
    pub errors: Vec<Vec<f64>>,
}

impl NetworkState {
    pub fn new(topology: &Topology) -> NetworkState {
        let zeroed: Vec<Vec<f64>> = topology
            .layer_sizes()
            .iter()
            .map(|&size| vec![0.0; size])
            .collect();
        NetworkState {
            activations: zeroed.clone(),
            derivatives: zeroed.clone(),
            errors: zeroed,
        }
    }

    pub fn output(&self) -> &[f64] {
        &self.activations[self.activations.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sized_from_topology() {
        let topology = Topology::new(vec![3, 4, 2]).unwrap();
        let state = NetworkState::new(&topology);
        let sizes: Vec<usize> = state.activations.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![3, 4, 2]);
        assert_eq!(state.errors[1].len(), 4);
        assert_eq!(state.derivatives[2].len(), 2);
        assert_eq!(state.output(), &[0.0, 0.0]);
    }
}
