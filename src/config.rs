//! Per-solve configuration and the solve result.
//!
//! Everything a solve needs beyond the problem and its hyperparameters is
//! passed in a [`SolverConfig`] value; there is no process-wide state.

use crate::error::{QuboError, QuboResult};
use crate::stopping::{StopReason, StoppingPolicy};

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 0;

/// Step budget, early-stop target and noise seed for one solve.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    timeout: u64,
    target_cost: Option<f64>,
    seed: u64,
}

impl SolverConfig {
    /// Config running at most `timeout` steps.
    ///
    /// A zero timeout fails with [`QuboError::OutOfRange`].
    pub fn new(timeout: u64) -> QuboResult<Self> {
        if timeout == 0 {
            return Err(QuboError::OutOfRange { name: "timeout", value: 0, min: 1, max: u64::MAX });
        }
        Ok(Self { timeout, target_cost: None, seed: DEFAULT_SEED })
    }

    /// Stop early once the best cost is at or below `target_cost`.
    pub fn with_target_cost(mut self, target_cost: f64) -> Self {
        self.target_cost = Some(target_cost);
        self
    }

    /// Seed for the noise source.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Step budget.
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    /// Early-stop target.
    pub fn target_cost(&self) -> Option<f64> {
        self.target_cost
    }

    /// Noise seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Stopping policy described by this config.
    pub fn stopping_policy(&self) -> StoppingPolicy {
        StoppingPolicy::new(self.timeout, self.target_cost)
    }
}

/// Outcome of a solve.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Best assignment found, one entry per variable.
    pub assignment: Vec<bool>,
    /// Its cost `xᵗQx`.
    pub cost: f64,
    /// Number of steps simulated.
    pub steps: u64,
    /// Step at which `assignment` was first produced (0 = initial value).
    pub found_at: u64,
    /// Why the run stopped.
    pub stop_reason: StopReason,
    /// Number of strict improvements over the initial value.
    pub improvements: u32,
}

impl Solution {
    /// Assignment as 0/1 integers.
    pub fn bits(&self) -> Vec<u8> {
        self.assignment.iter().map(|&b| u8::from(b)).collect()
    }

    /// Number of variables set to 1.
    pub fn selected(&self) -> usize {
        self.assignment.iter().filter(|&&b| b).count()
    }
}
