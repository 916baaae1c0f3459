//! Backend selection and the top-level `solve` entry point.
//!
//! Every backend implements the same contract, [`QuboBackend::solve`]:
//! problem, hyperparameters and config in, [`Solution`] out. This crate
//! implements [`Backend::Simulated`] with [`SimulatedBackend`]. A
//! [`Backend::ExternalHardware`] implementation is supplied by the caller
//! through [`BackendSelector::with_external_hardware`]; requesting it when none
//! is attached fails with [`BackendError::Unavailable`].

use std::fmt;

use tracing::{debug, instrument};

use crate::config::{Solution, SolverConfig};
use crate::engine::SolverEngine;
use crate::error::{BackendError, SolveResult};
use crate::params::Hyperparameters;
use crate::problem::QuboProblem;
use crate::tracker::{ProgressObserver, TracingObserver};

/// Which execution backend runs the dynamics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Backend {
    /// In-process fixed-point simulation.
    Simulated,
    /// Neuromorphic hardware, supplied externally.
    ExternalHardware,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simulated => write!(f, "simulated"),
            Self::ExternalHardware => write!(f, "external-hardware"),
        }
    }
}

/// The solve contract shared by all backends.
pub trait QuboBackend: Send + Sync {
    /// Which selector arm this backend serves.
    fn kind(&self) -> Backend;

    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Solve `problem`, reporting every strict improvement to `observer`.
    fn solve(
        &self,
        problem: &QuboProblem,
        params: &Hyperparameters,
        config: &SolverConfig,
        observer: &mut dyn ProgressObserver,
    ) -> SolveResult<Solution>;
}

/// Runs the dynamics in process with seeded uniform noise.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulatedBackend;

impl SimulatedBackend {
    /// Construct the simulated backend.
    pub fn new() -> Self {
        Self
    }
}

impl QuboBackend for SimulatedBackend {
    fn kind(&self) -> Backend {
        Backend::Simulated
    }

    fn name(&self) -> &str {
        "simulated"
    }

    #[instrument(skip_all, fields(n = problem.size(), seed = config.seed()))]
    fn solve(
        &self,
        problem: &QuboProblem,
        params: &Hyperparameters,
        config: &SolverConfig,
        observer: &mut dyn ProgressObserver,
    ) -> SolveResult<Solution> {
        let mut engine = SolverEngine::seeded(problem, params, config.seed())?;
        Ok(engine.run(&config.stopping_policy(), observer))
    }
}

/// Resolves a [`Backend`] value to an implementation.
///
/// The simulated arm is always present. The hardware arm is present only
/// once attached.
pub struct BackendSelector {
    simulated: SimulatedBackend,
    external: Option<Box<dyn QuboBackend>>,
}

impl BackendSelector {
    /// Selector with only the simulated backend.
    pub fn new() -> Self {
        Self { simulated: SimulatedBackend, external: None }
    }

    /// Attach an external hardware implementation of the solve contract.
    pub fn with_external_hardware(mut self, backend: Box<dyn QuboBackend>) -> Self {
        self.external = Some(backend);
        self
    }

    /// `true` if `backend` can be resolved.
    pub fn is_available(&self, backend: Backend) -> bool {
        match backend {
            Backend::Simulated => true,
            Backend::ExternalHardware => self.external.is_some(),
        }
    }

    /// Implementation serving `backend`.
    pub fn resolve(&self, backend: Backend) -> SolveResult<&dyn QuboBackend> {
        match backend {
            Backend::Simulated => Ok(&self.simulated),
            Backend::ExternalHardware => self
                .external
                .as_deref()
                .ok_or(BackendError::Unavailable { backend }),
        }
    }

    /// Resolve `backend` and solve on it.
    pub fn solve(
        &self,
        problem: &QuboProblem,
        params: &Hyperparameters,
        config: &SolverConfig,
        backend: Backend,
        observer: &mut dyn ProgressObserver,
    ) -> SolveResult<Solution> {
        let imp = self.resolve(backend)?;
        debug!(backend = imp.name(), n = problem.size(), "dispatching solve");
        imp.solve(problem, params, config, observer)
    }
}

impl Default for BackendSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Solve `problem` on `backend`, logging improvements through `tracing`.
///
/// Uses a selector with only the simulated backend, so
/// [`Backend::ExternalHardware`] returns [`BackendError::Unavailable`]; attach
/// hardware with [`BackendSelector::with_external_hardware`] instead.
pub fn solve(
    problem: &QuboProblem,
    params: &Hyperparameters,
    config: &SolverConfig,
    backend: Backend,
) -> SolveResult<Solution> {
    BackendSelector::new().solve(problem, params, config, backend, &mut TracingObserver)
}
