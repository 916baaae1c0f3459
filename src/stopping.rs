/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Termination of the timestep loop.
//!
//! Two criteria only: the step budget (`timeout`) and an optional target cost.
//! Cost is minimised, so a best cost equal to or below the target counts as
//! reached.

/// Why a solve stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The best cost reached or passed the target.
    TargetReached,
    /// The step budget was exhausted.
    Timeout,
}

/// `true` once `step_count ≥ timeout`, or `target_cost` is set and
/// `best_cost ≤ target_cost`.
pub fn should_stop(step_count: u64, best_cost: f64, timeout: u64, target_cost: Option<f64>) -> bool {
    step_count >= timeout || target_cost.is_some_and(|t| best_cost <= t)
}

/// Step budget and target cost for one solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StoppingPolicy {
    timeout: u64,
    target_cost: Option<f64>,
}

impl StoppingPolicy {
    /// Policy stopping after `timeout` steps or once `target_cost` is reached.
    pub fn new(timeout: u64, target_cost: Option<f64>) -> Self {
        Self { timeout, target_cost }
    }

    /// Step budget.
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    /// Target cost, if any.
    pub fn target_cost(&self) -> Option<f64> {
        self.target_cost
    }

    /// See [`should_stop`].
    pub fn should_stop(&self, step_count: u64, best_cost: f64) -> bool {
        should_stop(step_count, best_cost, self.timeout, self.target_cost)
    }

    /// Reason to stop now, if any. A reached target wins over an exhausted
    /// budget when both hold on the same step.
    pub fn evaluate(&self, step_count: u64, best_cost: f64) -> Option<StopReason> {
        if self.target_cost.is_some_and(|t| best_cost <= t) {
            Some(StopReason::TargetReached)
        } else if step_count >= self.timeout {
            Some(StopReason::Timeout)
        } else {
            None
        }
    }
}
