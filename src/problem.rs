//! QUBO problem encoding.
//!
//! [`QuboProblem`] wraps a validated n×n real cost matrix `Q` and evaluates
//! `xᵗQx` for binary assignments. Only square shape is validated: `Q` need not
//! be symmetric, since only `Q + Qᵗ` changes the cost of an assignment.
//!
//! The matrix is stored dense and row-major. It is immutable after
//! construction and can be shared freely across concurrent solves.

use crate::error::{QuboError, QuboResult};

/// Validated square cost matrix of a QUBO instance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct QuboProblem {
    n: usize,
    /// Row-major entries, `n * n` long.
    q: Vec<f64>,
}

impl QuboProblem {
    /// Build a problem from matrix rows.
    ///
    /// Fails with [`QuboError::InvalidShape`] if the matrix is empty or any
    /// row length differs from the row count.
    pub fn new(rows: Vec<Vec<f64>>) -> QuboResult<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(QuboError::InvalidShape { rows: 0, cols: 0 });
        }
        if let Some(bad) = rows.iter().find(|r| r.len() != n) {
            return Err(QuboError::InvalidShape { rows: n, cols: bad.len() });
        }
        Ok(Self { n, q: rows.into_iter().flatten().collect() })
    }

    /// Build an n×n problem from a generator `f(i, j) -> Q[i][j]`.
    pub fn from_fn(n: usize, mut f: impl FnMut(usize, usize) -> f64) -> QuboResult<Self> {
        if n == 0 {
            return Err(QuboError::InvalidShape { rows: 0, cols: 0 });
        }
        let mut q = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                q.push(f(i, j));
            }
        }
        Ok(Self { n, q })
    }

    /// Number of binary variables.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Entry `Q[i][j]`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "index ({i}, {j}) out of bounds for size {}", self.n);
        self.q[i * self.n + j]
    }

    /// Diagonal entry `Q[i][i]`: the linear cost of setting bit `i`.
    pub fn diagonal(&self, i: usize) -> f64 {
        self.get(i, i)
    }

    /// Symmetrised off-diagonal coupling `(Q[i][j] + Q[j][i]) / 2`.
    pub fn coupling(&self, i: usize, j: usize) -> f64 {
        0.5 * (self.get(i, j) + self.get(j, i))
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.q[i * self.n..(i + 1) * self.n]
    }

    /// `true` if `Q[i][j] == Q[j][i]` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (i + 1..self.n).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Copy the matrix out as rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.q.chunks(self.n).map(<[f64]>::to_vec).collect()
    }

    /// Cost `xᵗQx` of a binary assignment.
    ///
    /// Fails with [`QuboError::DimensionMismatch`] if the assignment length
    /// differs from [`size`](Self::size).
    pub fn cost(&self, assignment: &[bool]) -> QuboResult<f64> {
        if assignment.len() != self.n {
            return Err(QuboError::DimensionMismatch {
                what: "assignment",
                expected: self.n,
                actual: assignment.len(),
            });
        }
        Ok(self.cost_unchecked(assignment))
    }

    /// Cost of an assignment already known to have length `n`.
    pub(crate) fn cost_unchecked(&self, assignment: &[bool]) -> f64 {
        let selected: Vec<usize> = assignment
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
            .collect();
        let mut total = 0.0;
        for &i in &selected {
            let row = self.row(i);
            for &j in &selected {
                total += row[j];
            }
        }
        total
    }
}

impl TryFrom<Vec<Vec<f64>>> for QuboProblem {
    type Error = QuboError;

    fn try_from(rows: Vec<Vec<f64>>) -> QuboResult<Self> {
        Self::new(rows)
    }
}

impl From<QuboProblem> for Vec<Vec<f64>> {
    fn from(problem: QuboProblem) -> Self {
        problem.to_rows()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> QuboProblem {
        QuboProblem::new(vec![
            vec![-5.0, 2.0, 4.0, 0.0],
            vec![2.0, -3.0, 1.0, 0.0],
            vec![4.0, 1.0, -8.0, 5.0],
            vec![0.0, 0.0, 5.0, -6.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_non_square() {
        let err = QuboProblem::new(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(err, QuboError::InvalidShape { rows: 2, cols: 1 });

        let err = QuboProblem::new(vec![vec![1.0, 2.0, 3.0]]).unwrap_err();
        assert!(matches!(err, QuboError::InvalidShape { .. }));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(QuboProblem::new(vec![]), Err(QuboError::InvalidShape { .. })));
        assert!(QuboProblem::from_fn(0, |_, _| 0.0).is_err());
    }

    #[test]
    fn test_cost_of_known_assignments() {
        let q = example();
        assert_eq!(q.cost(&[false; 4]).unwrap(), 0.0);
        assert_eq!(q.cost(&[true, false, false, true]).unwrap(), -11.0);
        // -5 - 3 + 2 * 2
        assert_eq!(q.cost(&[true, true, false, false]).unwrap(), -4.0);
    }

    #[test]
    fn test_cost_dimension_mismatch() {
        let err = example().cost(&[true, false]).unwrap_err();
        assert_eq!(
            err,
            QuboError::DimensionMismatch { what: "assignment", expected: 4, actual: 2 }
        );
    }

    #[test]
    fn test_asymmetric_matrix_only_sum_matters() {
        let upper = QuboProblem::new(vec![vec![1.0, 6.0], vec![0.0, -2.0]]).unwrap();
        let sym = QuboProblem::new(vec![vec![1.0, 3.0], vec![3.0, -2.0]]).unwrap();
        assert!(!upper.is_symmetric());
        assert!(sym.is_symmetric());
        for bits in [[false, false], [true, false], [false, true], [true, true]] {
            assert_eq!(upper.cost(&bits).unwrap(), sym.cost(&bits).unwrap());
        }
        assert_eq!(upper.coupling(0, 1), 3.0);
    }

    #[test]
    fn test_from_fn_matches_rows() {
        let q = example();
        let rebuilt = QuboProblem::from_fn(4, |i, j| q.get(i, j)).unwrap();
        assert_eq!(rebuilt, q);
        assert_eq!(rebuilt.to_rows()[2], vec![4.0, 1.0, -8.0, 5.0]);
    }
}
