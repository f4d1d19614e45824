use rand::Rng;
use std::ops::{Index, IndexMut};

/// Dense row-major matrix of `f64`.
///
/// Weight matrices are stored one row per receiving neuron, so
/// `weights[(n, k)]` is the connection from neuron `k` of the previous layer
/// into neuron `n`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Every entry drawn uniformly from `[0, 1)`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>();
            }
        }

        res
    }

    /// Rebuilds a matrix from a row-major flat slice.
    ///
    /// Returns `None` when `flat.len() != rows * cols`.
    pub fn from_flat(rows: usize, cols: usize, flat: &[f64]) -> Option<Matrix> {
        if flat.len() != rows * cols {
            return None;
        }
        let data = if cols == 0 {
            vec![Vec::new(); rows]
        } else {
            flat.chunks(cols).map(|row| row.to_vec()).collect()
        };
        Some(Matrix { rows, cols, data })
    }

    /// Row-major copy of every entry.
    pub fn to_flat(&self) -> Vec<f64> {
        self.data.iter().flat_map(|row| row.iter().copied()).collect()
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i]
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i][j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data[i][j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn random_entries_lie_in_unit_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let m = Matrix::random(7, 5, &mut rng);
        assert_eq!((m.rows, m.cols), (7, 5));
        assert!(m.to_flat().iter().all(|&w| (0.0..1.0).contains(&w)));
    }

    #[test]
    fn same_seed_same_matrix() {
        let a = Matrix::random(3, 4, &mut ChaCha8Rng::seed_from_u64(11));
        let b = Matrix::random(3, 4, &mut ChaCha8Rng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn flat_layout_is_row_major() {
        let m = Matrix::from_flat(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.to_flat(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn from_flat_rejects_wrong_length() {
        assert!(Matrix::from_flat(2, 3, &[1.0; 5]).is_none());
    }
}
