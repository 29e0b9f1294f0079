//! Property-based tests for the two-qubit engine.

use proptest::prelude::*;
use quantum::{
    evolve::apply_gate,
    gates::CATALOG,
    goal::is_target_reached,
    measure, StateVector,
};
use rng::ScriptedRng;

fn circuit() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..CATALOG.len(), 0..40)
}

proptest! {
    /// Norm is preserved by any gate sequence from |00>.
    #[test]
    fn norm_preserved(seq in circuit()) {
        let mut psi = StateVector::INITIAL;
        for &g in &seq {
            psi = apply_gate(&CATALOG[g], &psi);
        }
        prop_assert!(
            (psi.norm_sqr() - 1.0).abs() < 1e-9,
            "norm² = {} after {:?}", psi.norm_sqr(), seq
        );
    }

    /// Applying a gate and then the same gate again undoes it.
    #[test]
    fn gate_pairs_cancel(seq in circuit(), g in 0usize..CATALOG.len()) {
        let mut psi = StateVector::INITIAL;
        for &k in &seq {
            psi = apply_gate(&CATALOG[k], &psi);
        }
        let back = apply_gate(&CATALOG[g], &apply_gate(&CATALOG[g], &psi));
        prop_assert!(back.max_abs_diff(&psi) < 1e-9);
    }

    /// Every collapse is a basis vector that matches its label.
    #[test]
    fn collapse_matches_outcome(seq in circuit(), draw in 0.0f64..1.0) {
        let mut psi = StateVector::INITIAL;
        for &k in &seq {
            psi = apply_gate(&CATALOG[k], &psi);
        }
        let m = measure(&psi, &mut ScriptedRng::new(vec![draw]));
        prop_assert_eq!(m.collapsed, StateVector::basis(m.outcome));
        prop_assert_eq!(m.collapsed.norm_sqr(), 1.0);
    }

    /// A state always reaches itself and its sign-flipped copy.
    #[test]
    fn comparator_reflexive_under_sign(
        amps in prop::array::uniform4(-1.0f64..1.0),
        flips in prop::array::uniform4(any::<bool>()),
    ) {
        let mut flipped = amps;
        for i in 0..4 {
            if flips[i] {
                flipped[i] = -flipped[i];
            }
        }
        prop_assert!(is_target_reached(&amps, &amps));
        prop_assert!(is_target_reached(&amps, &flipped));
    }
}
