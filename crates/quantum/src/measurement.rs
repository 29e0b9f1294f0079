use crate::state::{BasisState, StateVector, DIM};
use rng::RandomSource;

/// Result of collapsing a state onto the computational basis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub outcome: BasisState,
    pub collapsed: StateVector,
}

/// Squared amplitudes rescaled to sum to one.
pub fn normalized_probabilities(psi: &StateVector) -> [f64; DIM] {
    let probs = psi.probabilities();
    let total: f64 = probs.iter().sum();
    probs.map(|p| p / total)
}

/// Projective measurement of both qubits.
///
/// Draws one value from `rng` and walks the basis in index order, subtracting
/// each probability; the first index that brings the remainder to `<= 0` wins.
/// If rounding leaves a positive remainder after the last index, or the
/// probabilities are undefined (all-zero input), `|11⟩` is chosen.
pub fn measure<R: RandomSource + ?Sized>(psi: &StateVector, rng: &mut R) -> Measurement {
    let probs = normalized_probabilities(psi);

    let mut x = rng.next_unit();
    let mut outcome = BasisState::S11;
    for b in BasisState::ALL {
        x -= probs[b.index()];
        if x <= 0.0 {
            outcome = b;
            break;
        }
    }

    Measurement {
        outcome,
        collapsed: StateVector::basis(outcome),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::ONE_OVER_SQRT2;
    use rng::ScriptedRng;

    #[test]
    fn draw_picks_cumulative_bucket() {
        let psi = StateVector::new([0.5, 0.5, 0.5, 0.5]);
        let cases = [
            (0.0, BasisState::S00),
            (0.25, BasisState::S00),
            (0.26, BasisState::S01),
            (0.5, BasisState::S01),
            (0.74, BasisState::S10),
            (0.99, BasisState::S11),
        ];
        for (draw, expected) in cases {
            let m = measure(&psi, &mut ScriptedRng::new(vec![draw]));
            assert_eq!(m.outcome, expected, "draw = {}", draw);
        }
    }

    #[test]
    fn residual_falls_back_to_last_index() {
        // remainder stays positive through |11⟩, which has zero probability
        let psi = StateVector::new([ONE_OVER_SQRT2, 0.0, ONE_OVER_SQRT2, 0.0]);
        let m = measure(&psi, &mut ScriptedRng::new(vec![1.0 + 1e-12]));
        assert_eq!(m.outcome, BasisState::S11);
        assert_eq!(m.collapsed, StateVector::basis(BasisState::S11));
    }

    #[test]
    fn zero_vector_falls_back_to_last_index() {
        let psi = StateVector::new([0.0; 4]);
        let m = measure(&psi, &mut ScriptedRng::new(vec![0.3]));
        assert_eq!(m.outcome, BasisState::S11);
    }

    #[test]
    fn unnormalized_input_is_rescaled() {
        let psi = StateVector::new([2.0, 0.0, 2.0, 0.0]);
        let probs = normalized_probabilities(&psi);
        assert_eq!(probs, [0.5, 0.0, 0.5, 0.0]);
        let m = measure(&psi, &mut ScriptedRng::new(vec![0.6]));
        assert_eq!(m.outcome, BasisState::S10);
    }
}
