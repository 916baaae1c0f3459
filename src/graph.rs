/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Undirected graphs and the maximum-independent-set reduction.
//!
//! A [`Graph`] is a dense symmetric adjacency matrix without self loops.
//! [`independent_set_qubo`] turns it into a QUBO whose minima are maximum
//! independent sets:
//!
//! ```text
//! Q = -w_diag · I + (w_off / 2) · A
//! ```
//!
//! Each selected node earns `-w_diag`. Each selected edge costs `w_off` in
//! total (`w_off / 2` in both `Q[i][j]` and `Q[j][i]`). With
//! `w_off > 2 · w_diag`, dropping one endpoint of a selected edge always lowers
//! the cost, so every local minimum is independent.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{QuboError, QuboResult};
use crate::problem::QuboProblem;

/// Simple undirected graph on nodes `0..n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    n: usize,
    /// Row-major `n * n` adjacency, symmetric, false on the diagonal.
    adj: Vec<bool>,
}

impl Graph {
    /// Edgeless graph on `n` nodes.
    pub fn new(n: usize) -> Self {
        Self { n, adj: vec![false; n * n] }
    }

    /// Graph from a 0/1 adjacency matrix.
    ///
    /// Non-square input fails with [`QuboError::InvalidShape`]; an asymmetric
    /// entry or a self loop fails with [`QuboError::AsymmetricAdjacency`].
    pub fn from_adjacency(rows: &[Vec<bool>]) -> QuboResult<Self> {
        let n = rows.len();
        if let Some(bad) = rows.iter().find(|r| r.len() != n) {
            return Err(QuboError::InvalidShape { rows: n, cols: bad.len() });
        }
        for i in 0..n {
            if rows[i][i] {
                return Err(QuboError::AsymmetricAdjacency { i, j: i });
            }
            for j in i + 1..n {
                if rows[i][j] != rows[j][i] {
                    return Err(QuboError::AsymmetricAdjacency { i, j });
                }
            }
        }
        Ok(Self { n, adj: rows.iter().flatten().copied().collect() })
    }

    /// Erdős–Rényi G(n, p): each of the `n(n-1)/2` edges independently with
    /// probability `p`, drawn from a generator seeded with `seed`.
    ///
    /// `p` outside [0, 1] (or NaN) fails with [`QuboError::InvalidProbability`].
    pub fn random(n: usize, p: f64, seed: u64) -> QuboResult<Self> {
        if !(0.0..=1.0).contains(&p) {
            return Err(QuboError::InvalidProbability { p });
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let mut g = Self::new(n);
        for i in 0..n {
            for j in i + 1..n {
                if rng.gen_bool(p) {
                    g.add_edge(i, j);
                }
            }
        }
        Ok(g)
    }

    /// Insert edge `{i, j}`. Self loops are ignored.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not a node.
    pub fn add_edge(&mut self, i: usize, j: usize) {
        assert!(i < self.n && j < self.n, "edge ({i}, {j}) out of bounds for {} nodes", self.n);
        if i == j {
            return;
        }
        self.adj[i * self.n + j] = true;
        self.adj[j * self.n + i] = true;
    }

    /// `true` if `{i, j}` is an edge.
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        i < self.n && j < self.n && self.adj[i * self.n + j]
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().filter(|&&e| e).count() / 2
    }

    /// Number of neighbours of `i`.
    pub fn degree(&self, i: usize) -> usize {
        self.neighbors(i).count()
    }

    /// Neighbours of `i` in ascending order.
    pub fn neighbors(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        let row = if i < self.n { &self.adj[i * self.n..(i + 1) * self.n] } else { &[][..] };
        row.iter().enumerate().filter_map(|(j, &e)| e.then_some(j))
    }
}

/// QUBO whose minima are the maximum independent sets of `graph`.
///
/// Requires finite weights with `w_off > 2 · w_diag`, otherwise fails with
/// [`QuboError::InvalidWeights`]. A graph with no nodes fails with
/// [`QuboError::InvalidShape`].
pub fn independent_set_qubo(graph: &Graph, w_diag: f64, w_off: f64) -> QuboResult<QuboProblem> {
    if !w_diag.is_finite() || !w_off.is_finite() || !(w_off > 2.0 * w_diag) {
        return Err(QuboError::InvalidWeights { w_diag, w_off });
    }
    let half = 0.5 * w_off;
    QuboProblem::from_fn(graph.node_count(), |i, j| {
        if i == j {
            -w_diag
        } else if graph.has_edge(i, j) {
            half
        } else {
            0.0
        }
    })
}

/// `true` if no two selected nodes are adjacent.
///
/// Fails with [`QuboError::DimensionMismatch`] if `selection` does not have
/// one entry per node.
pub fn is_independent_set(graph: &Graph, selection: &[bool]) -> QuboResult<bool> {
    if selection.len() != graph.node_count() {
        return Err(QuboError::DimensionMismatch {
            what: "selection",
            expected: graph.node_count(),
            actual: selection.len(),
        });
    }
    Ok((0..graph.n)
        .filter(|&i| selection[i])
        .all(|i| graph.neighbors(i).all(|j| !selection[j])))
}

// ─── Tests ──────────────────────────────────────────────────────────────────
