/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Best-solution bookkeeping and progress reporting.
//!
//! [`SolutionTracker`] holds the lowest-cost assignment seen so far. Every
//! strict improvement is returned as an [`Improvement`] event, which the run
//! loop forwards to a [`ProgressObserver`]. How (or whether) the event is
//! shown is up to the observer; [`TracingObserver`] logs it.
//!
//! # Invariants
//!
//! - The recorded best cost never increases.
//! - Ties do not replace the recorded best: the first assignment reaching a
//!   cost is the one reported.
//! - The tracker only ever stores complete, previously scored assignments.

use tracing::info;

/// A new best assignment, emitted on strict improvement.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Improvement {
    /// Step at which the assignment was produced.
    pub step: u64,
    /// The new best assignment.
    pub assignment: Vec<bool>,
    /// Its cost `xᵗQx`.
    pub cost: f64,
}

/// Receiver of [`Improvement`] events.
pub trait ProgressObserver {
    /// Called once per strict improvement, in step order.
    fn on_improvement(&mut self, event: &Improvement);
}

/// Ignores every event.
impl ProgressObserver for () {
    fn on_improvement(&mut self, _event: &Improvement) {}
}

/// Collects every event.
impl ProgressObserver for Vec<Improvement> {
    fn on_improvement(&mut self, event: &Improvement) {
        self.push(event.clone());
    }
}

impl<O: ProgressObserver + ?Sized> ProgressObserver for &mut O {
    fn on_improvement(&mut self, event: &Improvement) {
        (**self).on_improvement(event);
    }
}

/// Observer wrapping a closure. Build with [`from_fn`].
pub struct FnObserver<F>(F);

/// Turn a closure into a [`ProgressObserver`].
pub fn from_fn<F: FnMut(&Improvement)>(f: F) -> FnObserver<F> {
    FnObserver(f)
}

impl<F: FnMut(&Improvement)> ProgressObserver for FnObserver<F> {
    fn on_improvement(&mut self, event: &Improvement) {
        (self.0)(event);
    }
}

/// Logs each improvement at `info` level through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl ProgressObserver for TracingObserver {
    fn on_improvement(&mut self, event: &Improvement) {
        let selected = event.assignment.iter().filter(|&&b| b).count();
        info!(step = event.step, cost = event.cost, selected, "new best assignment");
    }
}

/// Lowest-cost assignment observed during a solve.
#[derive(Clone, Debug)]
pub struct SolutionTracker {
    best: Vec<bool>,
    best_cost: f64,
    found_at: u64,
    improvements: u32,
}

impl SolutionTracker {
    /// Start from the initial assignment and its cost (step 0).
    pub fn new(initial: Vec<bool>, cost: f64) -> Self {
        Self { best: initial, best_cost: cost, found_at: 0, improvements: 0 }
    }

    /// Offer the assignment produced at `step`.
    ///
    /// Returns the [`Improvement`] if `cost` is strictly lower than the best
    /// so far, `None` otherwise.
    pub fn observe(&mut self, step: u64, assignment: &[bool], cost: f64) -> Option<Improvement> {
        if !(cost < self.best_cost) {
            return None;
        }
        self.best.clear();
        self.best.extend_from_slice(assignment);
        self.best_cost = cost;
        self.found_at = step;
        self.improvements += 1;
        Some(Improvement { step, assignment: self.best.clone(), cost })
    }

    /// Best assignment and its cost.
    pub fn result(&self) -> (&[bool], f64) {
        (&self.best, self.best_cost)
    }

    /// Best cost so far.
    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    /// Step at which the best was first seen (0 for the initial assignment).
    pub fn found_at(&self) -> u64 {
        self.found_at
    }

    /// Number of strict improvements recorded.
    pub fn improvements(&self) -> u32 {
        self.improvements
    }

    /// Consume the tracker, returning the best assignment and cost.
    pub fn into_result(self) -> (Vec<bool>, f64) {
        (self.best, self.best_cost)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
