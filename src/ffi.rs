//! Python FFI bindings via PyO3.
//!
//! Exposes problem construction, hyperparameters, the solver and the
//! independent-set reduction. Graph handling beyond a plain adjacency matrix
//! and progress observers stay on the Rust side.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! from spiking_qubo import QuboProblem, Hyperparameters, solve
//!
//! q = QuboProblem([[-5, 2, 4, 0], [2, -3, 1, 0], [4, 1, -8, 5], [0, 0, 5, -6]])
//! hp = Hyperparameters(q, comm_rate=8, noise_amplitude=4, step_size=1)
//! bits, cost = solve(q, hp, timeout=10000, target_cost=-11)
//! print(bits, cost)   # [1, 0, 0, 1] -11.0
//! ```
//!
//! Validation failures raise `ValueError`; backend failures raise
//! `RuntimeError`.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::backend::{self, Backend};
use crate::config::SolverConfig;
use crate::error::{BackendError, QuboError};
use crate::graph::{self, Graph};
use crate::params::{self, Hyperparameters};
use crate::problem::QuboProblem;

fn value_error(e: QuboError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn backend_error(e: BackendError) -> PyErr {
    match e {
        BackendError::InvalidInput(inner) => value_error(inner),
        other => PyRuntimeError::new_err(other.to_string()),
    }
}

fn parse_backend(name: &str) -> PyResult<Backend> {
    match name {
        "simulated" => Ok(Backend::Simulated),
        "external-hardware" => Ok(Backend::ExternalHardware),
        other => Err(PyValueError::new_err(format!(
            "unknown backend {other:?}, expected \"simulated\" or \"external-hardware\""
        ))),
    }
}

// ── QuboProblem ──────────────────────────────────────────────────────────────

/// Square QUBO cost matrix.
#[pyclass(name = "QuboProblem", frozen)]
#[derive(Clone)]
pub struct PyQuboProblem {
    inner: QuboProblem,
}

#[pymethods]
impl PyQuboProblem {
    /// Create a problem from matrix rows (list of lists of floats).
    ///
    /// Raises ValueError if the matrix is empty or not square.
    #[new]
    pub fn new(matrix: Vec<Vec<f64>>) -> PyResult<Self> {
        QuboProblem::new(matrix).map(|inner| Self { inner }).map_err(value_error)
    }

    /// Number of binary variables.
    #[getter]
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    /// Matrix as a list of rows.
    pub fn matrix(&self) -> Vec<Vec<f64>> {
        self.inner.to_rows()
    }

    /// Cost xᵀQx of a list of booleans.
    pub fn cost(&self, assignment: Vec<bool>) -> PyResult<f64> {
        self.inner.cost(&assignment).map_err(value_error)
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!("QuboProblem(size={})", self.inner.size())
    }
}

// ── Hyperparameters ──────────────────────────────────────────────────────────

/// Validated solver hyperparameters for one problem.
#[pyclass(name = "Hyperparameters", frozen)]
#[derive(Clone)]
pub struct PyHyperparameters {
    inner: Hyperparameters,
}

#[pymethods]
impl PyHyperparameters {
    /// Create hyperparameters for `problem`.
    ///
    /// Args:
    ///     comm_rate:       steps to fire without input, in [1, 2^24] (default 8)
    ///     noise_amplitude: noise scale, in [0, 2^24 - 1] (default 4)
    ///     step_size:       per-step increment, in [1, 2^24] (default 1)
    ///     init_value:      initial assignment, all zeros if omitted
    #[new]
    #[pyo3(signature = (
        problem,
        comm_rate = params::DEFAULT_COMM_RATE,
        noise_amplitude = params::DEFAULT_NOISE_AMPLITUDE,
        step_size = params::DEFAULT_STEP_SIZE,
        init_value = None
    ))]
    pub fn new(
        problem: &PyQuboProblem,
        comm_rate: u32,
        noise_amplitude: u32,
        step_size: u32,
        init_value: Option<Vec<bool>>,
    ) -> PyResult<Self> {
        Hyperparameters::new(&problem.inner, comm_rate, noise_amplitude, step_size, init_value)
            .map(|inner| Self { inner })
            .map_err(value_error)
    }

    /// Steps to fire without input.
    #[getter]
    pub fn comm_rate(&self) -> u32 {
        self.inner.comm_rate()
    }
    /// Noise scale.
    #[getter]
    pub fn noise_amplitude(&self) -> u32 {
        self.inner.noise_amplitude()
    }
    /// Per-step increment.
    #[getter]
    pub fn step_size(&self) -> u32 {
        self.inner.step_size()
    }
    /// Initial assignment.
    #[getter]
    pub fn init_value(&self) -> Vec<bool> {
        self.inner.init_value().to_vec()
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!(
            "Hyperparameters(comm_rate={}, noise_amplitude={}, step_size={})",
            self.inner.comm_rate(),
            self.inner.noise_amplitude(),
            self.inner.step_size()
        )
    }
}

// ── Functions ────────────────────────────────────────────────────────────────

/// Minimise xᵀQx.
///
/// Returns:
///     (bits, cost): best assignment as a list of 0/1 ints, and its cost
#[pyfunction]
#[pyo3(name = "solve", signature = (problem, hyperparameters, timeout, target_cost = None, seed = 0, backend = "simulated"))]
pub fn py_solve(
    problem: &PyQuboProblem,
    hyperparameters: &PyHyperparameters,
    timeout: u64,
    target_cost: Option<f64>,
    seed: u64,
    backend: &str,
) -> PyResult<(Vec<u8>, f64)> {
    let backend = parse_backend(backend)?;
    let mut config = SolverConfig::new(timeout).map_err(value_error)?.with_seed(seed);
    if let Some(t) = target_cost {
        config = config.with_target_cost(t);
    }
    let solution = backend::solve(&problem.inner, &hyperparameters.inner, &config, backend)
        .map_err(backend_error)?;
    Ok((solution.bits(), solution.cost))
}

/// QUBO for maximum independent set on a 0/1 adjacency matrix.
///
/// Raises ValueError unless w_off > 2 * w_diag and the adjacency is
/// symmetric without self loops.
#[pyfunction]
#[pyo3(name = "independent_set_qubo", signature = (adjacency, w_diag = 1.0, w_off = 4.0))]
pub fn py_independent_set_qubo(
    adjacency: Vec<Vec<bool>>,
    w_diag: f64,
    w_off: f64,
) -> PyResult<PyQuboProblem> {
    let g = Graph::from_adjacency(&adjacency).map_err(value_error)?;
    graph::independent_set_qubo(&g, w_diag, w_off)
        .map(|inner| PyQuboProblem { inner })
        .map_err(value_error)
}

// ── Module entry point ───────────────────────────────────────────────────────

/// Stochastic spiking-unit QUBO solver.
#[pymodule]
pub fn spiking_qubo(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyQuboProblem>()?;
    m.add_class::<PyHyperparameters>()?;
    m.add_function(wrap_pyfunction!(py_solve, m)?)?;
    m.add_function(wrap_pyfunction!(py_independent_set_qubo, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("MAX_RATE", params::MAX_RATE)?;
    Ok(())
}
