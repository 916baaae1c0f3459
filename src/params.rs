//! Solver hyperparameters.
//!
//! All integer fields are bounded to 24-bit ranges, the width of the state
//! registers on the hardware the simulated dynamics are meant to match:
//!
//! | Field | Range | Meaning |
//! |---|---|---|
//! | `comm_rate` | [1, 2^24] | steps to fire with no input and no noise |
//! | `noise_amplitude` | [0, 2^24 − 1] | scale of the bidirectional noise |
//! | `step_size` | [1, 2^24] | per-step increment of every accumulator |
//!
//! The firing threshold is derived as `comm_rate × step_size`, so a unit with
//! no bias, coupling or noise accumulates `step_size` per step and fires after
//! exactly `comm_rate` steps.

use crate::error::{QuboError, QuboResult};
use crate::problem::QuboProblem;

/// Largest `comm_rate` and `step_size`.
pub const MAX_RATE: u32 = 1 << 24;

/// Largest `noise_amplitude`.
pub const MAX_NOISE_AMPLITUDE: u32 = (1 << 24) - 1;

/// Default firing delay used by [`Hyperparameters::recommended`].
pub const DEFAULT_COMM_RATE: u32 = 8;

/// Default noise amplitude used by [`Hyperparameters::recommended`].
pub const DEFAULT_NOISE_AMPLITUDE: u32 = 4;

/// Default step size used by [`Hyperparameters::recommended`].
pub const DEFAULT_STEP_SIZE: u32 = 1;

/// Validated hyperparameter bundle for one problem size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hyperparameters {
    comm_rate: u32,
    noise_amplitude: u32,
    step_size: u32,
    init_value: Vec<bool>,
}

fn check_range(name: &'static str, value: u32, min: u32, max: u32) -> QuboResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(QuboError::OutOfRange {
            name,
            value: u64::from(value),
            min: u64::from(min),
            max: u64::from(max),
        })
    }
}

impl Hyperparameters {
    /// Validate and bundle hyperparameters for `problem`.
    ///
    /// - `comm_rate` outside [1, 2^24], `noise_amplitude` outside
    ///   [0, 2^24 − 1] or `step_size` outside [1, 2^24] fail with
    ///   [`QuboError::OutOfRange`].
    /// - `init_value` of the wrong length fails with
    ///   [`QuboError::DimensionMismatch`]. `None` means all zeros.
    pub fn new(
        problem: &QuboProblem,
        comm_rate: u32,
        noise_amplitude: u32,
        step_size: u32,
        init_value: Option<Vec<bool>>,
    ) -> QuboResult<Self> {
        check_range("comm_rate", comm_rate, 1, MAX_RATE)?;
        check_range("noise_amplitude", noise_amplitude, 0, MAX_NOISE_AMPLITUDE)?;
        check_range("step_size", step_size, 1, MAX_RATE)?;

        let n = problem.size();
        let init_value = match init_value {
            Some(v) if v.len() != n => {
                return Err(QuboError::DimensionMismatch {
                    what: "init_value",
                    expected: n,
                    actual: v.len(),
                })
            }
            Some(v) => v,
            None => vec![false; n],
        };

        Ok(Self { comm_rate, noise_amplitude, step_size, init_value })
    }

    /// Defaults that work well on small dense problems: comm_rate 8,
    /// noise_amplitude 4, step_size 1, all-zero start.
    pub fn recommended(problem: &QuboProblem) -> Self {
        Self {
            comm_rate: DEFAULT_COMM_RATE,
            noise_amplitude: DEFAULT_NOISE_AMPLITUDE,
            step_size: DEFAULT_STEP_SIZE,
            init_value: vec![false; problem.size()],
        }
    }

    /// Steps to fire in the absence of input and noise.
    pub fn comm_rate(&self) -> u32 {
        self.comm_rate
    }

    /// Noise scale, in units of `step_size`.
    pub fn noise_amplitude(&self) -> u32 {
        self.noise_amplitude
    }

    /// Per-step accumulator increment.
    pub fn step_size(&self) -> u32 {
        self.step_size
    }

    /// Initial assignment.
    pub fn init_value(&self) -> &[bool] {
        &self.init_value
    }

    /// Problem size these hyperparameters were validated for.
    pub fn size(&self) -> usize {
        self.init_value.len()
    }

    /// Firing threshold `comm_rate × step_size`.
    pub fn threshold(&self) -> u64 {
        u64::from(self.comm_rate) * u64::from(self.step_size)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
