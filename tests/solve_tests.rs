//! End-to-end solver tests through the public `solve` entry point.
//!
//! Run with: `cargo test --test solve_tests`

use spiking_qubo::{
    from_fn, independent_set_qubo, is_independent_set, solve, Backend, BackendError,
    BackendSelector, Graph, Hyperparameters, Improvement, QuboError, QuboProblem, SolverConfig,
    StopReason,
};

// ─── helpers ─────────────────────────────────────────────────────────────────

fn four_variable() -> QuboProblem {
    QuboProblem::new(vec![
        vec![-5.0, 2.0, 4.0, 0.0],
        vec![2.0, -3.0, 1.0, 0.0],
        vec![4.0, 1.0, -8.0, 5.0],
        vec![0.0, 0.0, 5.0, -6.0],
    ])
    .unwrap()
}

fn brute_force_minimum(q: &QuboProblem) -> f64 {
    let n = q.size();
    (0u32..1 << n)
        .map(|mask| {
            let x: Vec<bool> = (0..n).map(|i| mask >> i & 1 == 1).collect();
            q.cost(&x).unwrap()
        })
        .fold(f64::INFINITY, f64::min)
}

// ─── small dense problem ─────────────────────────────────────────────────────

/// The known optimum is [1, 0, 0, 1] with cost -11.
#[test]
fn test_four_variable_example_reaches_optimum() {
    let q = four_variable();
    assert_eq!(brute_force_minimum(&q), -11.0);

    let hp = Hyperparameters::new(&q, 8, 4, 1, None).unwrap();
    let cfg = SolverConfig::new(10_000).unwrap().with_target_cost(-11.0).with_seed(42);
    let sol = solve(&q, &hp, &cfg, Backend::Simulated).unwrap();

    assert_eq!(sol.cost, -11.0);
    assert_eq!(sol.bits(), vec![1, 0, 0, 1]);
    assert_eq!(sol.stop_reason, StopReason::TargetReached);
    assert!(sol.steps <= 10_000);
    assert_eq!(sol.found_at, sol.steps, "run stops on the step that reached the target");
}

#[test]
fn test_returned_cost_is_exact() {
    let q = four_variable();
    let hp = Hyperparameters::recommended(&q);
    for seed in 0..5 {
        let cfg = SolverConfig::new(300).unwrap().with_seed(seed);
        let sol = solve(&q, &hp, &cfg, Backend::Simulated).unwrap();
        assert_eq!(sol.assignment.len(), 4);
        assert_eq!(sol.cost, q.cost(&sol.assignment).unwrap());
        assert_eq!(sol.steps, 300);
        assert_eq!(sol.stop_reason, StopReason::Timeout);
    }
}

#[test]
fn test_same_seed_same_solution() {
    let q = four_variable();
    let hp = Hyperparameters::new(&q, 6, 3, 2, None).unwrap();
    let cfg = SolverConfig::new(1_000).unwrap().with_seed(77);
    let a = solve(&q, &hp, &cfg, Backend::Simulated).unwrap();
    let b = solve(&q, &hp, &cfg, Backend::Simulated).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_improvement_events_strictly_decrease() {
    let q = four_variable();
    let hp = Hyperparameters::recommended(&q);
    let cfg = SolverConfig::new(2_000).unwrap().with_seed(3);
    let mut events: Vec<Improvement> = Vec::new();
    let sol = BackendSelector::new()
        .solve(&q, &hp, &cfg, Backend::Simulated, &mut events)
        .unwrap();

    assert_eq!(events.len() as u32, sol.improvements);
    assert!(events.windows(2).all(|w| w[1].cost < w[0].cost && w[1].step > w[0].step));
    if let Some(last) = events.last() {
        assert_eq!(last.cost, sol.cost);
        assert_eq!(last.assignment, sol.assignment);
        assert_eq!(last.step, sol.found_at);
    }
}

#[test]
fn test_closure_observer_sees_every_improvement() {
    let q = four_variable();
    let hp = Hyperparameters::recommended(&q);
    let cfg = SolverConfig::new(2_000).unwrap().with_seed(3);
    let mut steps = Vec::new();
    let mut observer = from_fn(|ev: &Improvement| steps.push(ev.step));
    let sol = BackendSelector::new()
        .solve(&q, &hp, &cfg, Backend::Simulated, &mut observer)
        .unwrap();
    drop(observer);

    assert_eq!(steps.len() as u32, sol.improvements);
    assert_eq!(steps.last().copied().unwrap_or(0), sol.found_at);
}

// ─── validation ──────────────────────────────────────────────────────────────

#[test]
fn test_comm_rate_zero_rejected() {
    let q = four_variable();
    assert!(matches!(
        Hyperparameters::new(&q, 0, 4, 1, None),
        Err(QuboError::OutOfRange { name: "comm_rate", .. })
    ));
}

#[test]
fn test_non_square_matrix_rejected() {
    let err = QuboProblem::new(vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![0.0, 0.0]]).unwrap_err();
    assert!(matches!(err, QuboError::InvalidShape { rows: 3, cols: 2 }));
}

#[test]
fn test_external_hardware_unavailable() {
    let q = four_variable();
    let hp = Hyperparameters::recommended(&q);
    let cfg = SolverConfig::new(10).unwrap();
    match solve(&q, &hp, &cfg, Backend::ExternalHardware) {
        Err(BackendError::Unavailable { backend }) => {
            assert_eq!(backend, Backend::ExternalHardware)
        }
        other => panic!("expected Unavailable, got {other:?}"),
    }
}

// ─── maximum independent set ─────────────────────────────────────────────────

#[test]
fn test_independent_set_on_random_graph() {
    let g = Graph::random(45, 0.5, 2024).unwrap();
    let q = independent_set_qubo(&g, 1.0, 4.0).unwrap();
    let hp = Hyperparameters::new(&q, 8, 2, 1, None).unwrap();
    let cfg = SolverConfig::new(5_000).unwrap().with_seed(1);

    let sol = solve(&q, &hp, &cfg, Backend::Simulated).unwrap();

    assert!(is_independent_set(&g, &sol.assignment).unwrap());
    // On an independent set the cost is minus its size.
    assert_eq!(sol.cost, -(sol.selected() as f64));
    assert!(sol.cost <= -4.0, "found only {} nodes", sol.selected());
}

#[test]
fn test_independent_set_weights_margin() {
    let g = Graph::random(45, 0.5, 2024).unwrap();
    assert_eq!(
        independent_set_qubo(&g, 1.0, 2.0).unwrap_err(),
        QuboError::InvalidWeights { w_diag: 1.0, w_off: 2.0 }
    );
}
