/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! The timestep loop: update, fire, propagate, evaluate.
//!
//! # Update rule
//!
//! For every unit `i`, in one synchronous pass over the previous step's
//! committed bits `x`:
//!
//! ```text
//! coupling_i = −Σ_{j≠i, x_j = 1} (Q[i][j] + Q[j][i]) / 2
//! bias_i     = −Q[i][i] · step_size
//! noise_i    ∈ [−noise_amplitude, +noise_amplitude]
//! acc_i     += step_size + bias_i + coupling_i + noise_i
//! acc_i ≥ comm_rate · step_size  →  x_i := 1, acc_i := 0
//! otherwise                      →  x_i := 0
//! ```
//!
//! Negative matrix entries push a unit toward firing, positive entries hold it
//! back. A unit's spike only reaches its neighbours on the following step.
//! Only the drift and the diagonal bias grow with `step_size`; coupling and
//! noise do not, so a larger step makes each unit lean more on its own bias.
//!
//! # Fixed-point arithmetic
//!
//! Drives, thresholds and accumulators are `i64` with [`FRAC_BITS`]
//! fractional bits. Real matrix entries are rounded to that grid once, at
//! construction. All additions saturate, and accumulators are floored at
//! `−threshold` so a unit held back for many steps can still recover.
//!
//! # Invariants
//!
//! - Coupling reads only committed bits, so unit order within a step does not
//!   affect the result.
//! - The reported cost of a step is `QuboProblem::cost` of its assignment,
//!   computed on the real-valued matrix.
//! - [`SolverEngine::run`] never exceeds the policy's step budget.

use tracing::{debug, trace};

use crate::config::Solution;
use crate::error::{QuboError, QuboResult};
use crate::noise::{NoiseSource, UniformNoise};
use crate::params::Hyperparameters;
use crate::population::{UnitPopulation, FIXED_ONE, FRAC_BITS};
use crate::problem::QuboProblem;
use crate::stopping::StoppingPolicy;
use crate::tracker::{ProgressObserver, SolutionTracker};

/// Assignment and cost produced by one simulated step.
#[derive(Clone, Debug, PartialEq)]
pub struct StepResult {
    /// 1-based index of the step.
    pub step: u64,
    /// Bits of all units after the step.
    pub assignment: Vec<bool>,
    /// Cost `xᵗQx` of `assignment`.
    pub cost: f64,
}

/// Round `value × scale` onto the fixed-point grid. Saturates on overflow.
fn to_fixed(value: f64, scale: i64) -> i64 {
    (value * scale as f64).round() as i64
}

/// Drives one [`UnitPopulation`] over a [`QuboProblem`].
pub struct SolverEngine<'p, N = UniformNoise> {
    problem: &'p QuboProblem,
    /// `step_size` in fixed point; the constant per-step increment.
    step_drive: i64,
    /// `−Q[i][i] · step_size` in fixed point.
    bias: Vec<i64>,
    /// Row-major `−(Q[i][j] + Q[j][i]) / 2`, zero diagonal.
    weights: Vec<i64>,
    threshold: i64,
    floor: i64,
    noise_span: i64,
    noise: N,
    population: UnitPopulation,
    /// Scratch list of units that fired in the previous step.
    fired: Vec<usize>,
    steps: u64,
}

impl<'p> SolverEngine<'p, UniformNoise> {
    /// Engine with uniform noise seeded from `seed`.
    pub fn seeded(
        problem: &'p QuboProblem,
        params: &Hyperparameters,
        seed: u64,
    ) -> QuboResult<Self> {
        Self::new(problem, params, UniformNoise::seeded(seed))
    }
}

impl<'p, N: NoiseSource> SolverEngine<'p, N> {
    /// Build an engine for `problem` with an explicit noise source.
    ///
    /// Fails with [`QuboError::DimensionMismatch`] if `params` were validated
    /// for a different problem size.
    pub fn new(problem: &'p QuboProblem, params: &Hyperparameters, noise: N) -> QuboResult<Self> {
        let n = problem.size();
        if params.size() != n {
            return Err(QuboError::DimensionMismatch {
                what: "hyperparameters init_value",
                expected: n,
                actual: params.size(),
            });
        }

        let step_drive = i64::from(params.step_size()) * FIXED_ONE;
        let threshold = i64::from(params.comm_rate()) * step_drive;
        let noise_span = i64::from(params.noise_amplitude()) * FIXED_ONE;

        let bias = (0..n).map(|i| to_fixed(-problem.diagonal(i), step_drive)).collect();
        let mut weights = vec![0i64; n * n];
        for i in 0..n {
            for j in (0..n).filter(|&j| j != i) {
                weights[i * n + j] = to_fixed(-problem.coupling(i, j), FIXED_ONE);
            }
        }

        debug!(
            n,
            threshold,
            noise_span,
            frac_bits = FRAC_BITS,
            "solver engine initialised"
        );

        Ok(Self {
            problem,
            step_drive,
            bias,
            weights,
            threshold,
            floor: -threshold,
            noise_span,
            noise,
            population: UnitPopulation::new(params.init_value()),
            fired: Vec::with_capacity(n),
            steps: 0,
        })
    }

    /// The problem being solved.
    pub fn problem(&self) -> &QuboProblem {
        self.problem
    }

    /// Unit state after the last completed step.
    pub fn population(&self) -> &UnitPopulation {
        &self.population
    }

    /// Steps simulated so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Firing threshold in fixed point.
    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    /// Simulate one step and score the resulting assignment.
    pub fn step(&mut self) -> StepResult {
        let n = self.problem.size();
        self.fired.clear();
        self.fired.extend(self.population.fired());

        for i in 0..n {
            let row = &self.weights[i * n..(i + 1) * n];
            let coupling = self
                .fired
                .iter()
                .fold(0i64, |acc, &j| acc.saturating_add(row[j]));
            let noise = self.noise.sample(self.noise_span);
            let drive = self
                .step_drive
                .saturating_add(self.bias[i])
                .saturating_add(coupling)
                .saturating_add(noise);
            self.population.integrate(i, drive, self.threshold, self.floor);
        }
        self.population.commit();
        self.steps += 1;

        let assignment = self.population.bits().to_vec();
        let cost = self.problem.cost_unchecked(&assignment);
        trace!(step = self.steps, cost, "step");
        StepResult { step: self.steps, assignment, cost }
    }

    /// Run from the current state until `policy` says stop.
    ///
    /// The tracker starts from the current bits (the initial value on a fresh
    /// engine). The policy's step budget counts steps taken by this call.
    pub fn run<O>(&mut self, policy: &StoppingPolicy, observer: &mut O) -> Solution
    where
        O: ProgressObserver + ?Sized,
    {
        let start = self.population.bits().to_vec();
        let start_cost = self.problem.cost_unchecked(&start);
        let mut tracker = SolutionTracker::new(start, start_cost);
        let first_step = self.steps;

        debug!(
            timeout = policy.timeout(),
            target = ?policy.target_cost(),
            start_cost,
            "run started"
        );

        let stop_reason = loop {
            let elapsed = self.steps - first_step;
            if let Some(reason) = policy.evaluate(elapsed, tracker.best_cost()) {
                break reason;
            }
            let result = self.step();
            if let Some(event) = tracker.observe(result.step, &result.assignment, result.cost) {
                observer.on_improvement(&event);
            }
        };

        let steps = self.steps - first_step;
        let found_at = tracker.found_at();
        let improvements = tracker.improvements();
        let (assignment, cost) = tracker.into_result();
        debug!(?stop_reason, steps, cost, found_at, "run finished");

        Solution { assignment, cost, steps, found_at, stop_reason, improvements }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
