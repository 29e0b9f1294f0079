use quantum::{gates::ONE_OVER_SQRT2, BasisState, StateVector};
use rng::{OndRng, ScriptedRng};
use sandbox::{SandboxError, Session};

#[test]
fn apply_then_undo_restores_snapshot() {
    let mut s = Session::new();
    s.apply("H0").unwrap();
    s.apply("CNOT").unwrap();
    let before = s.history().clone();

    s.apply("X1").unwrap();
    assert_ne!(s.history(), &before);
    s.undo().unwrap();

    assert_eq!(s.history(), &before);
    assert_eq!(s.history().states(), before.states());
    assert_eq!(s.history().circuit(), &["H0", "CNOT"]);
}

#[test]
fn measurement_appends_collapse_without_gate() {
    let mut s = Session::new();
    s.apply("H0").unwrap();
    s.apply("CNOT").unwrap();

    let outcome = s.measure(&mut ScriptedRng::new(vec![0.75])).unwrap();
    assert_eq!(outcome, BasisState::S11);
    assert_eq!(s.outcome(), Some(BasisState::S11));
    assert_eq!(s.current(), &StateVector::basis(BasisState::S11));
    assert_eq!(s.history().len(), 4);
    assert_eq!(s.history().circuit().len(), 2);
}

#[test]
fn undo_after_measurement_reopens_the_session() {
    let mut s = Session::new();
    s.apply("H0").unwrap();
    let before = s.history().clone();

    s.measure(&mut OndRng::new(b"undo")).unwrap();
    assert!(matches!(s.apply("H0"), Err(SandboxError::Collapsed(_))));

    s.undo().unwrap();
    assert!(!s.is_collapsed());
    assert_eq!(s.history(), &before);

    let psi = *s.apply("H0").unwrap();
    assert!(psi.max_abs_diff(&StateVector::INITIAL) < 1e-9);
}

#[test]
fn reset_returns_to_ground_state() {
    let mut s = Session::new();
    for g in ["X0", "H1", "CNOT"] {
        s.apply(g).unwrap();
    }
    s.measure(&mut OndRng::new(b"reset")).unwrap();
    s.reset();

    assert_eq!(s.history().states(), &[StateVector::INITIAL]);
    assert!(s.history().circuit().is_empty());
    assert_eq!(s.outcome(), None);
    assert_eq!(s.probabilities(), [1.0, 0.0, 0.0, 0.0]);
}

#[test]
fn probabilities_track_the_latest_state() {
    let mut s = Session::new();
    s.apply("H1").unwrap();
    let p = s.probabilities();
    let half = ONE_OVER_SQRT2 * ONE_OVER_SQRT2;
    assert_eq!(p, [half, half, 0.0, 0.0]);
}

#[test]
fn unknown_gate_leaves_history_alone() {
    let mut s = Session::new();
    let err = s.apply("SWAP").unwrap_err();
    assert!(err.to_string().contains("SWAP"), "{}", err);
    assert!(s.history().is_initial());
}
