use crate::algebra::mat_vec;
use crate::error::{QuantumError, Result};
use crate::gates::{lookup, Gate};
use crate::state::StateVector;

/// New state after applying `gate` to `psi`. `psi` is left untouched.
pub fn apply_gate(gate: &Gate, psi: &StateVector) -> StateVector {
    mat_vec(&gate.matrix, psi.amplitudes())
}

/// Resolve `name` against the catalog and apply it.
pub fn apply_named(name: &str, psi: &StateVector) -> Result<StateVector> {
    let gate = lookup(name).ok_or_else(|| QuantumError::UnknownGate(name.to_string()))?;
    Ok(apply_gate(gate, psi))
}

/// Run a gate sequence from `|00⟩`. The returned history starts with the
/// initial state and has one entry per gate after it.
pub fn run_circuit<S: AsRef<str>>(names: &[S]) -> Result<Vec<StateVector>> {
    let mut history = Vec::with_capacity(names.len() + 1);
    history.push(StateVector::INITIAL);
    let mut psi = StateVector::INITIAL;
    for name in names {
        psi = apply_named(name.as_ref(), &psi)?;
        history.push(psi);
    }
    Ok(history)
}
