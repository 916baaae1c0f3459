//! # Four-variable QUBO walkthrough
//!
//! Solves a small dense problem, prints every improvement as it is found,
//! then steps a fresh engine by hand to show the firing pattern.
//!
//! ```bash
//! RUST_LOG=spiking_qubo=debug cargo run --example small_qubo
//! ```

use spiking_qubo::{
    from_fn, Backend, BackendSelector, Hyperparameters, Improvement, QuboProblem,
    SolverConfig, SolverEngine,
};
use tracing_subscriber::EnvFilter;

// ── Display helpers ───────────────────────────────────────────────────────────

fn bits(x: &[bool]) -> String {
    x.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let q = QuboProblem::new(vec![
        vec![-5.0, 2.0, 4.0, 0.0],
        vec![2.0, -3.0, 1.0, 0.0],
        vec![4.0, 1.0, -8.0, 5.0],
        vec![0.0, 0.0, 5.0, -6.0],
    ])?;
    let hp = Hyperparameters::new(&q, 8, 4, 1, None)?;
    let cfg = SolverConfig::new(10_000)?.with_target_cost(-11.0).with_seed(42);

    println!("▶  Solving 4-variable QUBO (target -11)\n");
    let mut report = from_fn(|ev: &Improvement| {
        println!("  step {:>5}  x = {}  cost = {:>6.1}", ev.step, bits(&ev.assignment), ev.cost);
    });
    let sol = BackendSelector::new().solve(&q, &hp, &cfg, Backend::Simulated, &mut report)?;

    println!();
    println!("  best       x = {}  cost = {:.1}", bits(&sol.assignment), sol.cost);
    println!("  stopped    {:?} after {} steps\n", sol.stop_reason, sol.steps);

    println!("▶  First 16 steps of a fresh engine\n");
    let mut engine = SolverEngine::seeded(&q, &hp, 42)?;
    for _ in 0..16 {
        let r = engine.step();
        println!("  step {:>2}  x = {}  cost = {:>6.1}", r.step, bits(&r.assignment), r.cost);
    }
    Ok(())
}
