//! # spiking-qubo
//!
//! Stochastic spiking-unit solver for Quadratic Unconstrained Binary
//! Optimization: find a binary vector `x` minimising `xᵗQx`.
//!
//! ---
//!
//! ## How it searches
//!
//! One integrate-and-fire unit per variable. Each step every unit adds a
//! constant drift, a bias from its diagonal entry, inhibition or excitation
//! from the units that fired on the previous step, and bounded uniform noise.
//! A unit that crosses threshold fires: its bit is 1 for that step and its
//! accumulator resets. Strongly coupled units suppress each other, favourable
//! units fire early and often, and the noise keeps the population from
//! settling into the first local minimum it meets.
//!
//! The bit vector after every step is scored, and the lowest-cost vector seen
//! is returned.
//!
//! ```text
//! QuboProblem ─┐
//! Hyperparameters ─┼→ BackendSelector → SolverEngine ⟳ step → SolutionTracker → Solution
//! SolverConfig ─┘                        │                       │
//!                                   NoiseSource           ProgressObserver
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`problem`] | [`QuboProblem`] | Validated cost matrix, `xᵗQx` |
//! | [`params`] | [`Hyperparameters`] | Bounded comm_rate, noise amplitude, step size, initial state |
//! | [`population`] | [`UnitPopulation`], [`UnitState`] | Fixed-point accumulators, double-buffered bits |
//! | [`noise`] | [`NoiseSource`], [`UniformNoise`] | Seeded bidirectional noise |
//! | [`engine`] | [`SolverEngine`] | Synchronous timestep loop |
//! | [`stopping`] | [`StoppingPolicy`], [`StopReason`] | Timeout and target cost |
//! | [`tracker`] | [`SolutionTracker`], [`ProgressObserver`] | Best-so-far and improvement events |
//! | [`backend`] | [`Backend`], [`BackendSelector`], [`solve`] | Simulated or externally supplied hardware |
//! | [`config`] | [`SolverConfig`], [`Solution`] | Per-solve settings and result |
//! | [`graph`] | [`Graph`], [`independent_set_qubo`] | Maximum-independent-set reduction |
//! | `record` | `SolveRecord` | Serialisable run record (requires `serde` feature) |
//!
//! ## Example
//!
//! ```
//! use spiking_qubo::{solve, Backend, Hyperparameters, QuboProblem, SolverConfig};
//!
//! let q = QuboProblem::new(vec![
//!     vec![-5.0, 2.0, 4.0, 0.0],
//!     vec![2.0, -3.0, 1.0, 0.0],
//!     vec![4.0, 1.0, -8.0, 5.0],
//!     vec![0.0, 0.0, 5.0, -6.0],
//! ])?;
//! let hp = Hyperparameters::new(&q, 8, 4, 1, None)?;
//! let cfg = SolverConfig::new(10_000)?.with_target_cost(-11.0);
//!
//! let solution = solve(&q, &hp, &cfg, Backend::Simulated)?;
//! assert_eq!(solution.cost, q.cost(&solution.assignment)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: derives for problems, configs and solutions, plus the `record`
//!   module.
//! - `python-ffi`: PyO3 extension module `spiking_qubo`.
//!
//! ## License
//!
//! Business Source License 1.1.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod backend;
pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod noise;
pub mod params;
pub mod population;
pub mod problem;
pub mod stopping;
pub mod tracker;

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub mod record;

#[cfg(feature = "python-ffi")]
pub mod ffi;

pub use backend::{solve, Backend, BackendSelector, QuboBackend, SimulatedBackend};
pub use config::{Solution, SolverConfig};
pub use engine::{SolverEngine, StepResult};
pub use error::{BackendError, QuboError, QuboResult, SolveResult};
pub use graph::{independent_set_qubo, is_independent_set, Graph};
pub use noise::{NoiseSource, Silent, UniformNoise};
pub use params::Hyperparameters;
pub use population::{UnitPopulation, UnitState};
pub use problem::QuboProblem;
pub use stopping::{StopReason, StoppingPolicy};
pub use tracker::{
    from_fn, FnObserver, Improvement, ProgressObserver, SolutionTracker, TracingObserver,
};
