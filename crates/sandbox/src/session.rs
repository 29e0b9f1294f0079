use crate::error::{Result, SandboxError};
use crate::history::History;
use quantum::{
    evolve::apply_gate, gates, measure, BasisState, Gate, QuantumError, StateVector,
};
use rng::RandomSource;
use tracing::debug;

/// Free-play simulator: apply gates, measure, undo, reset.
///
/// After a measurement the session is frozen on the collapsed state until
/// the collapse is undone or the session is reset.
#[derive(Clone, Debug, Default)]
pub struct Session {
    history: History,
    outcome: Option<BasisState>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &StateVector {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn outcome(&self) -> Option<BasisState> {
        self.outcome
    }

    pub fn is_collapsed(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn probabilities(&self) -> [f64; 4] {
        self.current().probabilities()
    }

    pub fn apply(&mut self, name: &str) -> Result<&StateVector> {
        let gate = gates::lookup(name).ok_or_else(|| QuantumError::UnknownGate(name.to_string()))?;
        self.apply_gate(gate)
    }

    pub fn apply_gate(&mut self, gate: &'static Gate) -> Result<&StateVector> {
        if let Some(b) = self.outcome {
            return Err(SandboxError::Collapsed(b.label()));
        }
        let next = apply_gate(gate, self.history.current());
        debug!(gate = gate.name, state = %next, "applied gate");
        self.history.push_gate(gate, next);
        Ok(self.history.current())
    }

    pub fn measure<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<BasisState> {
        if let Some(b) = self.outcome {
            return Err(SandboxError::AlreadyMeasured(b.label()));
        }
        let m = measure(self.history.current(), rng);
        debug!(outcome = m.outcome.label(), "measured");
        self.history.push_collapse(m.outcome);
        self.outcome = Some(m.outcome);
        Ok(m.outcome)
    }

    /// Step back once: a collapse is undone first, then gates newest-first.
    pub fn undo(&mut self) -> Result<()> {
        if !self.history.pop() {
            return Err(SandboxError::NothingToUndo);
        }
        self.outcome = None;
        debug!(len = self.history.len(), "undo");
        Ok(())
    }

    pub fn reset(&mut self) {
        self.history.reset();
        self.outcome = None;
        debug!("reset");
    }
}
