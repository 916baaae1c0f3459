//! SolveRecord JSON round-trip tests.
//!
//! Verifies that a finished solve can be captured, serialised to JSON,
//! deserialised back and replayed to the identical solution.
//!
//! Run with: `cargo test --features serde --test record_tests`

#[cfg(feature = "serde")]
mod tests {
    use spiking_qubo::record::{SolveRecord, SOLVE_RECORD_VERSION};
    use spiking_qubo::{
        independent_set_qubo, solve, Backend, Graph, Hyperparameters, QuboProblem, SolverConfig,
        StopReason,
    };

    // ── Helpers ──────────────────────────────────────────────────────────────

    fn mis_record() -> SolveRecord {
        let g = Graph::random(12, 0.4, 5).unwrap();
        let q = independent_set_qubo(&g, 1.0, 4.0).unwrap();
        let hp = Hyperparameters::new(&q, 6, 2, 1, None).unwrap();
        let cfg = SolverConfig::new(400).unwrap().with_seed(21).with_target_cost(-100.0);
        let sol = solve(&q, &hp, &cfg, Backend::Simulated).unwrap();
        SolveRecord::capture(&q, &hp, &cfg, &sol)
    }

    // ── Round trip ───────────────────────────────────────────────────────────

    #[test]
    fn test_json_round_trip_preserves_record() {
        let rec = mis_record();
        let json = serde_json::to_string(&rec).unwrap();
        let back: SolveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
        assert_eq!(back.version, SOLVE_RECORD_VERSION);
        assert_eq!(back.solution.stop_reason, StopReason::Timeout);
    }

    #[test]
    fn test_replay_after_round_trip() {
        let json = serde_json::to_string_pretty(&mis_record()).unwrap();
        let back: SolveRecord = serde_json::from_str(&json).unwrap();
        assert!(back.replay().unwrap());
    }

    #[test]
    fn test_problem_serialises_as_rows() {
        let q = QuboProblem::new(vec![vec![1.0, -2.0], vec![0.5, 3.0]]).unwrap();
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, "[[1.0,-2.0],[0.5,3.0]]");
        let back: QuboProblem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }

    #[test]
    fn test_non_square_json_rejected() {
        let res: Result<QuboProblem, _> = serde_json::from_str("[[1.0, 2.0], [3.0]]");
        assert!(res.is_err());
    }

    #[test]
    fn test_hand_edited_record_fails_restore() {
        let mut value = serde_json::to_value(mis_record()).unwrap();
        value["hyperparameters"]["step_size"] = serde_json::json!(0);
        let rec: SolveRecord = serde_json::from_value(value).unwrap();
        assert!(rec.restore().is_err());
        assert!(rec.replay().is_err());
    }
}
