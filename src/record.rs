//! Portable record of one solve, for persistence and reproduction.
//!
//! A [`SolveRecord`] captures everything needed to re-run a solve: the cost
//! matrix, the hyperparameters, the config (including the seed) and the
//! solution that was obtained. Records serialise with any serde format; the
//! test suite uses JSON.
//!
//! Restoring goes through the ordinary validating constructors, so a record
//! edited by hand cannot smuggle an invalid problem past validation.
//!
//! # Example
//!
//! ```rust,ignore
//! use spiking_qubo::record::SolveRecord;
//!
//! let record = SolveRecord::capture(&problem, &params, &config, &solution);
//! let json = serde_json::to_string(&record)?;
//! let back: SolveRecord = serde_json::from_str(&json)?;
//! assert!(back.replay()?);
//! ```
//!
//! This module requires the `serde` feature.

use crate::backend::{QuboBackend, SimulatedBackend};
use crate::config::{Solution, SolverConfig};
use crate::error::{QuboError, QuboResult, SolveResult};
use crate::params::Hyperparameters;
use crate::problem::QuboProblem;

/// Current record format version.
pub const SOLVE_RECORD_VERSION: u16 = 1;

/// Serialisable capture of a solve's inputs and outcome.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct SolveRecord {
    /// Format version, [`SOLVE_RECORD_VERSION`] for new records.
    pub version: u16,
    /// Cost matrix rows.
    pub matrix: Vec<Vec<f64>>,
    /// Hyperparameters, unvalidated until [`restore`](Self::restore).
    pub hyperparameters: HyperparameterRecord,
    /// Timeout, target and seed.
    pub config: SolverConfig,
    /// Solution obtained when the record was captured.
    pub solution: Solution,
}

/// Raw hyperparameter fields.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HyperparameterRecord {
    /// Steps to fire without input.
    pub comm_rate: u32,
    /// Noise scale.
    pub noise_amplitude: u32,
    /// Per-step increment.
    pub step_size: u32,
    /// Initial assignment.
    pub init_value: Vec<bool>,
}

impl From<&Hyperparameters> for HyperparameterRecord {
    fn from(p: &Hyperparameters) -> Self {
        Self {
            comm_rate: p.comm_rate(),
            noise_amplitude: p.noise_amplitude(),
            step_size: p.step_size(),
            init_value: p.init_value().to_vec(),
        }
    }
}

impl SolveRecord {
    /// Record a finished solve.
    pub fn capture(
        problem: &QuboProblem,
        params: &Hyperparameters,
        config: &SolverConfig,
        solution: &Solution,
    ) -> Self {
        Self {
            version: SOLVE_RECORD_VERSION,
            matrix: problem.to_rows(),
            hyperparameters: params.into(),
            config: *config,
            solution: solution.clone(),
        }
    }

    /// Rebuild validated problem, hyperparameters and config.
    ///
    /// An unknown version fails with [`QuboError::OutOfRange`]; otherwise the
    /// errors are those of the normal constructors.
    pub fn restore(&self) -> QuboResult<(QuboProblem, Hyperparameters, SolverConfig)> {
        if self.version != SOLVE_RECORD_VERSION {
            return Err(QuboError::OutOfRange {
                name: "version",
                value: u64::from(self.version),
                min: u64::from(SOLVE_RECORD_VERSION),
                max: u64::from(SOLVE_RECORD_VERSION),
            });
        }
        let problem = QuboProblem::new(self.matrix.clone())?;
        let hp = &self.hyperparameters;
        let params = Hyperparameters::new(
            &problem,
            hp.comm_rate,
            hp.noise_amplitude,
            hp.step_size,
            Some(hp.init_value.clone()),
        )?;
        // Re-run the timeout check; the other fields carry no constraints.
        let mut config = SolverConfig::new(self.config.timeout())?.with_seed(self.config.seed());
        if let Some(t) = self.config.target_cost() {
            config = config.with_target_cost(t);
        }
        Ok((problem, params, config))
    }

    /// Re-run the recorded solve on the simulated backend.
    ///
    /// Returns `true` if the identical solution is reproduced.
    pub fn replay(&self) -> SolveResult<bool> {
        let (problem, params, config) = self.restore()?;
        let again = SimulatedBackend.solve(&problem, &params, &config, &mut ())?;
        Ok(again == self.solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{solve, Backend};

    fn solved() -> SolveRecord {
        let problem = QuboProblem::new(vec![
            vec![-2.0, 3.0, 0.0],
            vec![3.0, -2.0, 3.0],
            vec![0.0, 3.0, -2.0],
        ])
        .unwrap();
        let params = Hyperparameters::new(&problem, 4, 2, 1, None).unwrap();
        let config = SolverConfig::new(200).unwrap().with_seed(11);
        let solution = solve(&problem, &params, &config, Backend::Simulated).unwrap();
        SolveRecord::capture(&problem, &params, &config, &solution)
    }

    #[test]
    fn test_capture_fields() {
        let rec = solved();
        assert_eq!(rec.version, SOLVE_RECORD_VERSION);
        assert_eq!(rec.matrix[1], vec![3.0, -2.0, 3.0]);
        assert_eq!(rec.hyperparameters.comm_rate, 4);
        assert_eq!(rec.config.seed(), 11);
    }

    #[test]
    fn test_replay_reproduces() {
        assert!(solved().replay().unwrap());
    }

    #[test]
    fn test_replay_detects_tampered_solution() {
        let mut rec = solved();
        rec.solution.steps += 1;
        assert!(!rec.replay().unwrap());
    }

    #[test]
    fn test_restore_revalidates() {
        let mut rec = solved();
        rec.hyperparameters.comm_rate = 0;
        assert!(matches!(rec.restore(), Err(QuboError::OutOfRange { name: "comm_rate", .. })));

        let mut rec = solved();
        rec.matrix.pop();
        assert!(matches!(rec.restore(), Err(QuboError::InvalidShape { .. })));

        let mut rec = solved();
        rec.version = 99;
        assert!(matches!(rec.restore(), Err(QuboError::OutOfRange { name: "version", .. })));
    }
}
