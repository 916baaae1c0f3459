//! Error types.
//!
//! Two families, split by where they arise:
//!
//! - [`QuboError`]: input validation. Raised synchronously when a
//!   [`QuboProblem`](crate::problem::QuboProblem),
//!   [`Hyperparameters`](crate::params::Hyperparameters),
//!   [`SolverConfig`](crate::config::SolverConfig) or graph helper input is
//!   constructed. Never retried internally.
//! - [`BackendError`]: raised at the backend selection boundary, e.g. when
//!   external hardware was requested but none is attached.

use thiserror::Error;

use crate::backend::Backend;

/// Validation failures for problem, hyperparameter and helper inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuboError {
    /// The cost matrix is empty or not square.
    #[error("cost matrix must be square and non-empty: {rows} rows, found a row of {cols} columns")]
    InvalidShape {
        /// Number of rows supplied.
        rows: usize,
        /// Length of the first offending row (0 for an empty matrix).
        cols: usize,
    },

    /// A vector does not match the problem size.
    #[error("{what} has length {actual}, expected {expected}")]
    DimensionMismatch {
        /// Which vector was rejected.
        what: &'static str,
        /// Problem size.
        expected: usize,
        /// Length supplied.
        actual: usize,
    },

    /// An integer parameter falls outside its closed interval.
    #[error("{name} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        /// Parameter name.
        name: &'static str,
        /// Value supplied.
        value: u64,
        /// Inclusive lower bound.
        min: u64,
        /// Inclusive upper bound.
        max: u64,
    },

    /// Independent-set penalty weights do not satisfy `w_off > 2 * w_diag`.
    #[error("invalid penalty weights: w_off = {w_off} must exceed 2 * w_diag (w_diag = {w_diag})")]
    InvalidWeights {
        /// Reward weight on the diagonal.
        w_diag: f64,
        /// Penalty weight on edges.
        w_off: f64,
    },

    /// An edge probability outside [0, 1].
    #[error("edge probability {p} is outside [0, 1]")]
    InvalidProbability {
        /// Probability supplied.
        p: f64,
    },

    /// An adjacency matrix that is not symmetric or has a self loop.
    #[error("adjacency entry ({i}, {j}) breaks symmetry or is a self loop")]
    AsymmetricAdjacency {
        /// Row index.
        i: usize,
        /// Column index.
        j: usize,
    },
}

/// Failures at the backend selection boundary.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The requested backend is not attached to this selector.
    #[error("backend {backend} is not available")]
    Unavailable {
        /// Backend that was requested.
        backend: Backend,
    },

    /// An external backend reported a failure while solving.
    #[error("hardware backend failed: {0}")]
    Hardware(String),

    /// Problem and hyperparameters disagree (e.g. built for different sizes).
    #[error("invalid solve input: {0}")]
    InvalidInput(#[from] QuboError),
}

/// Result type for validation.
pub type QuboResult<T> = Result<T, QuboError>;

/// Result type for solving.
pub type SolveResult<T> = Result<T, BackendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let e = QuboError::InvalidShape { rows: 3, cols: 2 };
        assert!(e.to_string().contains("3 rows"));

        let e = QuboError::OutOfRange { name: "comm_rate", value: 0, min: 1, max: 1 << 24 };
        assert!(e.to_string().contains("comm_rate = 0"));

        let e = QuboError::InvalidWeights { w_diag: 1.0, w_off: 2.0 };
        assert!(e.to_string().contains("w_off = 2 must exceed"), "got {}", e);
    }

    #[test]
    fn test_backend_unavailable_is_distinct() {
        let e = BackendError::Unavailable { backend: Backend::ExternalHardware };
        assert!(e.to_string().contains("external-hardware"));
        assert!(!matches!(e, BackendError::InvalidInput(_)));
    }

    #[test]
    fn test_qubo_error_converts_into_backend_error() {
        let inner = QuboError::DimensionMismatch { what: "init_value", expected: 4, actual: 3 };
        let e: BackendError = inner.clone().into();
        match e {
            BackendError::InvalidInput(got) => assert_eq!(got, inner),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_error_is_std_error() {
        let e: Box<dyn std::error::Error> = Box::new(BackendError::Hardware("link down".into()));
        assert!(e.to_string().contains("link down"));
    }
}
